//! Common types and data structures

use serde_json::Value;

/// Form fields, in the order they are declared and serialized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Nombre,
    Email,
    Telefono,
    Servicio,
    Mensaje,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Nombre,
        FieldName::Email,
        FieldName::Telefono,
        FieldName::Servicio,
        FieldName::Mensaje,
    ];

    /// Key used in the encoded request body
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Nombre => "nombre",
            FieldName::Email => "email",
            FieldName::Telefono => "telefono",
            FieldName::Servicio => "servicio",
            FieldName::Mensaje => "mensaje",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FieldName::Nombre | FieldName::Email | FieldName::Mensaje)
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Nombre => "NOMBRE COMPLETO",
            FieldName::Email => "CORREO ELECTRÓNICO",
            FieldName::Telefono => "TELÉFONO",
            FieldName::Servicio => "SERVICIO",
            FieldName::Mensaje => "MENSAJE",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            FieldName::Nombre => "Tu nombre",
            FieldName::Email => "tucorreo@ejemplo.com",
            FieldName::Telefono => "999 999 999",
            FieldName::Servicio => "Selecciona un servicio",
            FieldName::Mensaje => "Cuéntanos qué necesitas...",
        }
    }
}

/// Severity of a feedback message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
            FeedbackKind::Info => "info",
        }
    }

    /// Only success messages stay on screen until replaced
    pub fn auto_expires(self) -> bool {
        self != FeedbackKind::Success
    }
}

/// Snapshot of the user-entered values taken when the form is submitted
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub nombre: String,
    pub email: String,
    pub mensaje: String,
    pub telefono: String,
}

impl FormSubmission {
    /// Values are trimmed; nothing else is normalized here.
    pub fn new(nombre: &str, email: &str, mensaje: &str, telefono: &str) -> Self {
        Self {
            nombre: nombre.trim().to_string(),
            email: email.trim().to_string(),
            mensaje: mensaje.trim().to_string(),
            telefono: telefono.trim().to_string(),
        }
    }
}

/// Decoded reply from the sheet endpoint.
///
/// The endpoint is expected to answer `{"status": "...", "message": "..."}`, but any
/// JSON value is accepted: a missing or non-string `status` simply isn't a success.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerResponse {
    pub status: Option<String>,
    pub message: Option<String>,
}

impl ServerResponse {
    pub fn from_json(value: &Value) -> Self {
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .map(str::to_string);
        let message = value.get("message").and_then(|m| match m {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        });
        Self { status, message }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
