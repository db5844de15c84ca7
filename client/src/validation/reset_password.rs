//! Password reset form schema

use validator::{Validate, ValidationErrors};

use crate::models::ResetPasswordRequest;

/// Validate a reset payload: full strength rule on the new password, and a
/// mismatch with the confirmation attaches to `confirm_password`.
pub fn validate(req: &ResetPasswordRequest) -> Result<(), ValidationErrors> {
    req.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> ResetPasswordRequest {
        ResetPasswordRequest {
            token: "reset-token".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn test_matching_strong_passwords_pass() {
        assert!(validate(&request("Str0ng!pass", "Str0ng!pass")).is_ok());
    }

    #[test]
    fn test_mismatch_attaches_to_confirm_field() {
        let errors = validate(&request("Str0ng!pass", "Str0ng!pas")).unwrap_err();
        let field = errors.field_errors();
        assert!(field.contains_key("confirm_password"));
        assert!(!field.contains_key("password"));
    }

    #[test]
    fn test_weak_password_rejected_even_when_matching() {
        let errors = validate(&request("weakpass", "weakpass")).unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_missing_digit_names_the_class() {
        let errors = validate(&request("Strong!pass", "Strong!pass")).unwrap_err();
        let field = errors.field_errors();
        assert_eq!(field.get("password").unwrap()[0].code, "password_missing_digit");
    }
}
