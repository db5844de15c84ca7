//! Signup form schema

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::SignupRequest;

/// Validate a signup payload.
///
/// Merges the derive-driven field rules with the terms-consent check so the
/// violation lands on the `terms_accepted` field itself.
pub fn validate(req: &SignupRequest) -> Result<(), ValidationErrors> {
    let mut errors = match req.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e,
    };

    if !req.terms_accepted {
        let mut err = ValidationError::new("terms_not_accepted");
        err.message = Some("you must accept the terms of service".into());
        errors.add("terms_accepted", err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
