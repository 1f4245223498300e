//! Application constants and configuration

use std::time::Duration;

/// Google Apps Script web app that appends each submission to the sheet
pub const ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxi7Y3JQYsH6GrBmMhj3mAcZIZBeUx7fycHSKbA86wPBYWHcXsZ9MNXX4zXdufSRkQLRA/exec";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file prefix inside `<data dir>/logs`; the appender adds the date
pub const LOG_FILE: &str = "bombas-contacto.log";
/// Default `EnvFilter` directives when `RUST_LOG` is unset
pub const LOG_FILTER: &str = "info,bombas_contacto=debug";

pub const APP_NAME: &str = "Bombas Ayala Contacto";

/// Error and info messages disappear after this long; success messages stay
pub const MESSAGE_TIMEOUT: Duration = Duration::from_millis(5000);

pub const SUBMIT_LABEL: &str = "ENVIAR MENSAJE";
pub const SENDING_LABEL: &str = "ENVIANDO...";

// User-facing texts
pub const MSG_SENDING: &str = "Enviando tu consulta...";
pub const MSG_SUCCESS: &str = "¡Mensaje enviado correctamente! Te contactaremos pronto.";
pub const MSG_SERVER_ERROR: &str =
    "Hubo un error al enviar el mensaje. Por favor, intenta nuevamente.";
pub const MSG_CONNECTION_ERROR: &str =
    "Error de conexión. Por favor, verifica tu internet e intenta nuevamente.";

/// Options for the `servicio` select; the first entry means "not chosen"
pub const SERVICE_OPTIONS: &[&str] = &[
    "",
    "Venta de bombas",
    "Instalación",
    "Mantenimiento",
    "Reparación",
    "Otro",
];
