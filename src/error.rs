//! Error types for validation, transport and whole submissions

use crate::types::FieldName;

/// A required field is missing or a value is malformed.
///
/// The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Por favor, ingresa tu nombre completo")]
    MissingNombre,
    #[error("Por favor, ingresa tu correo electrónico")]
    MissingEmail,
    #[error("Por favor, ingresa tu mensaje")]
    MissingMensaje,
    #[error("Por favor, ingresa un email válido")]
    InvalidEmail,
    #[error("Por favor, ingresa un teléfono válido (debe comenzar con 9)")]
    InvalidTelefono,
}

impl ValidationError {
    /// Field that receives focus when this error is shown
    pub fn field(&self) -> FieldName {
        match self {
            ValidationError::MissingNombre => FieldName::Nombre,
            ValidationError::MissingEmail | ValidationError::InvalidEmail => FieldName::Email,
            ValidationError::MissingMensaje => FieldName::Mensaje,
            ValidationError::InvalidTelefono => FieldName::Telefono,
        }
    }
}

/// The request never produced a readable JSON reply
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("background request task ended without a result")]
    Interrupted,
}

/// Why a submission did not end with a success reply
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("server reported {status:?}: {message:?}")]
    Server {
        status: Option<String>,
        message: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] TransportError),
}
