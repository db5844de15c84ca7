//! Feedback survey schemas (general and film-scoped)

use validator::{Validate, ValidationErrors};

use crate::models::FeedbackRequest;

pub fn validate(req: &FeedbackRequest) -> Result<(), ValidationErrors> {
    req.validate()
}
