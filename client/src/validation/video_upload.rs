//! Admin video upload/edit schemas

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{CreateVideoRequest, ThumbnailSource, UpdateVideoRequest};
use crate::validators;

/// Validate an upload payload.
///
/// Derive rules cover the three plain URL fields and the duration pattern;
/// the thumbnail is checked here because it is either an uploaded file or
/// an already-hosted URL string.
pub fn validate(req: &CreateVideoRequest) -> Result<(), ValidationErrors> {
    let mut errors = match req.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e,
    };

    if let Err(err) = check_thumbnail(&req.thumbnail) {
        errors.add("thumbnail", err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate an edit payload; only supplied fields are checked
pub fn validate_update(req: &UpdateVideoRequest) -> Result<(), ValidationErrors> {
    let mut errors = match req.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e,
    };

    if let Some(thumbnail) = &req.thumbnail {
        if let Err(err) = check_thumbnail(thumbnail) {
            errors.add("thumbnail", err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_thumbnail(thumbnail: &ThumbnailSource) -> Result<(), ValidationError> {
    match thumbnail {
        ThumbnailSource::Url(url) => validators::validate_absolute_url(url),
        ThumbnailSource::Upload(file) => {
            if file.file_name.is_empty() {
                let mut err = ValidationError::new("empty_thumbnail_file");
                err.message = Some("thumbnail file has no name".into());
                Err(err)
            } else {
                Ok(())
            }
        }
    }
}
