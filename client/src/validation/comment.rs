//! Comment form schema

use validator::{Validate, ValidationErrors};

use crate::models::CreateCommentRequest;

pub fn validate(req: &CreateCommentRequest) -> Result<(), ValidationErrors> {
    req.validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: String) -> CreateCommentRequest {
        CreateCommentRequest {
            video_id: Some("v1".into()),
            text,
        }
    }

    #[test]
    fn test_empty_comment_rejected() {
        let errors = validate(&request(String::new())).unwrap_err();
        assert!(errors.field_errors().contains_key("text"));
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(validate(&request("x".repeat(1))).is_ok());
        assert!(validate(&request("x".repeat(500))).is_ok());
        assert!(validate(&request("x".repeat(501))).is_err());
    }
}
