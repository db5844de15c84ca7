//! Admin playlist schemas

use validator::{Validate, ValidationErrors};

use crate::models::{CreatePlaylistRequest, UpdatePlaylistRequest};

pub fn validate(req: &CreatePlaylistRequest) -> Result<(), ValidationErrors> {
    req.validate()
}

pub fn validate_update(req: &UpdatePlaylistRequest) -> Result<(), ValidationErrors> {
    req.validate()
}
