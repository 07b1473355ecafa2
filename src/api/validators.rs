//! Field validators used by request payloads.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidateEmail, ValidationError};

use crate::config::{MSG_INVALID_EMAIL, MSG_NOT_BLANK, REGISTRATION_PATTERN, ZIP_CODE_PATTERN};

static REGISTRATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(REGISTRATION_PATTERN).expect("valid registration pattern"));

static ZIP_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(ZIP_CODE_PATTERN).expect("valid zip code pattern"));

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects empty and whitespace-only text
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("not_blank", MSG_NOT_BLANK));
    }
    Ok(())
}

/// Blank input is reported as blank, never as a malformed address
pub fn email_address(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !value.validate_email() {
        return Err(error("email", MSG_INVALID_EMAIL));
    }
    Ok(())
}

/// Professional registration code: 4 to 6 digits
pub fn registration_code(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !REGISTRATION_RE.is_match(value) {
        return Err(error("registration", "must have 4 to 6 digits"));
    }
    Ok(())
}

/// Postal code: exactly 8 digits
pub fn zip_code(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !ZIP_CODE_RE.is_match(value) {
        return Err(error("zip_code", "must have exactly 8 digits"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(not_blank("Maria").is_ok());
        let err = not_blank("   ").unwrap_err();
        assert_eq!(err.code, "not_blank");
        assert_eq!(err.message.as_deref(), Some(MSG_NOT_BLANK));
    }

    #[test]
    fn blank_email_is_reported_as_blank() {
        assert!(email_address("maria@voll.med").is_ok());
        assert_eq!(email_address("").unwrap_err().code, "not_blank");
        assert_eq!(email_address("  ").unwrap_err().code, "not_blank");

        let err = email_address("not-an-email").unwrap_err();
        assert_eq!(err.code, "email");
        assert_eq!(err.message.as_deref(), Some(MSG_INVALID_EMAIL));
    }

    #[test]
    fn registration_requires_four_to_six_digits() {
        assert!(registration_code("1234").is_ok());
        assert!(registration_code("123456").is_ok());
        assert!(registration_code("123").is_err());
        assert!(registration_code("1234567").is_err());
        assert!(registration_code("12a4").is_err());
        assert_eq!(registration_code("").unwrap_err().code, "not_blank");
    }

    #[test]
    fn zip_code_requires_eight_digits() {
        assert!(zip_code("70000000").is_ok());
        assert!(zip_code("70000-000").is_err());
        assert!(zip_code("7000000").is_err());
    }
}
