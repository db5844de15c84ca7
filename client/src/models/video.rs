/// Video records and admin upload/edit payloads
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Video record as served by the remote API.
///
/// Deletion is soft: `is_deleted` is flipped by the delete mutation and the
/// record stays addressable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub genre: String,
    /// Playing time as `H{1,3}:MM`
    pub duration: String,
    pub video_url: String,
    pub trailer_url: String,
    pub preroll_url: String,
    pub thumbnail_url: String,
    pub description: Option<String>,
    pub synopsis: Option<String>,
    pub slideshow: bool,
    pub tags: Option<Vec<String>>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Denormalized video fields carried on comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
}

/// Thumbnail input on the upload form: a file picked in the browser or a
/// reference to an already-uploaded asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThumbnailSource {
    Url(String),
    Upload(UploadedFile),
}

/// File picked on the upload form, described by metadata only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

/// Admin video upload payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "genre is required"))]
    pub genre: String,
    #[validate(custom(function = "crate::validators::validate_duration"))]
    pub duration: String,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub video_url: String,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub trailer_url: String,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub preroll_url: String,
    /// Checked by the upload schema; derive rules cannot reach enum variants
    pub thumbnail: ThumbnailSource,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 4000))]
    pub synopsis: Option<String>,
    pub slideshow: bool,
    pub tags: Option<Vec<String>>,
}

/// Admin video edit payload; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub genre: Option<String>,
    #[validate(custom(function = "crate::validators::validate_duration"))]
    pub duration: Option<String>,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub video_url: Option<String>,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub trailer_url: Option<String>,
    #[validate(custom(function = "crate::validators::validate_absolute_url"))]
    pub preroll_url: Option<String>,
    pub thumbnail: Option<ThumbnailSource>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(length(max = 4000))]
    pub synopsis: Option<String>,
    pub slideshow: Option<bool>,
    pub tags: Option<Vec<String>>,
}
