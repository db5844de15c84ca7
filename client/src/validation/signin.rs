//! Sign-in form schema

use validator::{Validate, ValidationErrors};

use crate::models::SignInRequest;

pub fn validate(req: &SignInRequest) -> Result<(), ValidationErrors> {
    req.validate()
}
