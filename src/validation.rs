//! Submit-time validation of the contact form

use crate::error::ValidationError;
use crate::types::FormSubmission;
use crate::utils::clean_phone;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Peruvian mobile: optional country code, then nine digits starting with 9
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+51|51)?[9][0-9]{8}$").unwrap());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Expects the raw field value; separators are stripped before matching.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&clean_phone(phone))
}

/// Checks run in a fixed order and stop at the first failure.
pub fn validate(submission: &FormSubmission) -> Result<(), ValidationError> {
    if submission.nombre.is_empty() {
        return Err(ValidationError::MissingNombre);
    }
    if submission.email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if submission.mensaje.is_empty() {
        return Err(ValidationError::MissingMensaje);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !submission.telefono.is_empty() && !is_valid_phone(&submission.telefono) {
        return Err(ValidationError::InvalidTelefono);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission(nombre: &str, email: &str, mensaje: &str, telefono: &str) -> FormSubmission {
        FormSubmission::new(nombre, email, mensaje, telefono)
    }

    fn valid_with_phone(telefono: &str) -> FormSubmission {
        submission("Ana Torres", "ana@correo.pe", "Necesito una bomba", telefono)
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(validate(&valid_with_phone("")), Ok(()));
    }

    #[test]
    fn required_fields_checked_in_order() {
        assert_eq!(
            validate(&submission("", "", "", "")),
            Err(ValidationError::MissingNombre)
        );
        assert_eq!(
            validate(&submission("Ana", "  ", "", "")),
            Err(ValidationError::MissingEmail)
        );
        assert_eq!(
            validate(&submission("Ana", "not-an-email", " \n ", "")),
            Err(ValidationError::MissingMensaje)
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(
            validate(&submission(" \t ", "ana@correo.pe", "Hola", "")),
            Err(ValidationError::MissingNombre)
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ana", "ana@correo", "@correo.pe", "ana@@correo.pe", "a na@correo.pe", "ana@.pe "] {
            let sub = submission("Ana", email, "Hola", "");
            assert_eq!(
                validate(&sub),
                Err(ValidationError::InvalidEmail),
                "email {email:?} should be rejected"
            );
        }
    }

    #[test]
    fn email_check_runs_before_phone_check() {
        let sub = submission("Ana", "ana", "Hola", "123");
        assert_eq!(validate(&sub), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate(&valid_with_phone("")), Ok(()));
        assert_eq!(validate(&valid_with_phone("987654321")), Ok(()));
        assert_eq!(validate(&valid_with_phone("+51987654321")), Ok(()));
        assert_eq!(validate(&valid_with_phone("51987654321")), Ok(()));
        assert_eq!(validate(&valid_with_phone("987 654 321")), Ok(()));
        assert_eq!(validate(&valid_with_phone("(+51) 987-654-321")), Ok(()));
        assert_eq!(
            validate(&valid_with_phone("123456789")),
            Err(ValidationError::InvalidTelefono)
        );
        assert_eq!(
            validate(&valid_with_phone("99 99")),
            Err(ValidationError::InvalidTelefono)
        );
        assert_eq!(
            validate(&valid_with_phone("9876543210")),
            Err(ValidationError::InvalidTelefono)
        );
    }

    #[test]
    fn validation_is_repeatable() {
        let bad = valid_with_phone("123456789");
        let good = valid_with_phone("987654321");
        assert_eq!(validate(&bad), validate(&bad));
        assert_eq!(validate(&good), validate(&good));
    }

    #[test]
    fn errors_point_at_their_field() {
        use crate::types::FieldName;
        assert_eq!(ValidationError::InvalidEmail.field(), FieldName::Email);
        assert_eq!(ValidationError::InvalidTelefono.field(), FieldName::Telefono);
        assert_eq!(ValidationError::MissingMensaje.field(), FieldName::Mensaje);
    }
}
