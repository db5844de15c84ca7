//! Profile update schema

use chrono::NaiveDate;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::UpdateProfileRequest;

/// Validate a profile update against `today` (passed in so the check stays
/// a pure function).
pub fn validate(req: &UpdateProfileRequest, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = match req.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e,
    };

    if let Some(birth_date) = req.birth_date {
        if birth_date > today {
            let mut err = ValidationError::new("birth_date_in_future");
            err.message = Some("birth date cannot be in the future".into());
            errors.add("birth_date", err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_empty_update_passes() {
        assert!(validate(&UpdateProfileRequest::default(), today()).is_ok());
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let req = UpdateProfileRequest {
            birth_date: NaiveDate::from_ymd_opt(2030, 1, 1),
            ..Default::default()
        };
        let errors = validate(&req, today()).unwrap_err();
        assert_eq!(
            errors.field_errors().get("birth_date").unwrap()[0].code,
            "birth_date_in_future"
        );
    }

    #[test]
    fn test_past_birth_date_accepted() {
        let req = UpdateProfileRequest {
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 17),
            ..Default::default()
        };
        assert!(validate(&req, today()).is_ok());
    }

    #[test]
    fn test_bad_phone_rejected() {
        let req = UpdateProfileRequest {
            phone: Some("call me maybe".into()),
            ..Default::default()
        };
        let errors = validate(&req, today()).unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }
}
