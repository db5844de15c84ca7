/// Curated playlist records
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Classification driving which curated home-page section a playlist feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaylistTag {
    TopPicks,
    NewReleases,
    StaffFavorites,
    Trending,
}

impl PlaylistTag {
    pub const ALL: [PlaylistTag; 4] = [
        PlaylistTag::TopPicks,
        PlaylistTag::NewReleases,
        PlaylistTag::StaffFavorites,
        PlaylistTag::Trending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistTag::TopPicks => "top_picks",
            PlaylistTag::NewReleases => "new_releases",
            PlaylistTag::StaffFavorites => "staff_favorites",
            PlaylistTag::Trending => "trending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "top_picks" => Some(PlaylistTag::TopPicks),
            "new_releases" => Some(PlaylistTag::NewReleases),
            "staff_favorites" => Some(PlaylistTag::StaffFavorites),
            "trending" => Some(PlaylistTag::Trending),
            _ => None,
        }
    }
}

/// Playlist record as served by the remote API; `video_ids` is ordered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tag: PlaylistTag,
    pub video_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin playlist creation payload.
///
/// The tag arrives as the raw form value and is checked against the
/// enumerated tags by the playlist schema.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 2000, message = "description is required"))]
    pub description: String,
    #[validate(custom(function = "crate::models::playlist::validate_playlist_tag"))]
    pub tag: String,
    #[validate(length(min = 1, message = "select at least one video"))]
    pub video_ids: Vec<String>,
}

/// Admin playlist edit payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub description: Option<String>,
    #[validate(custom(function = "crate::models::playlist::validate_playlist_tag"))]
    pub tag: Option<String>,
    #[validate(length(min = 1, message = "select at least one video"))]
    pub video_ids: Option<Vec<String>>,
}

/// validator crate compatible check that a tag names one of the enumerated values
pub fn validate_playlist_tag(tag: &str) -> Result<(), validator::ValidationError> {
    if PlaylistTag::from_str(tag).is_some() {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("unknown_playlist_tag");
        err.message = Some("tag must be one of top_picks, new_releases, staff_favorites, trending".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_conversion() {
        assert_eq!(PlaylistTag::TopPicks.as_str(), "top_picks");
        assert_eq!(PlaylistTag::from_str("trending"), Some(PlaylistTag::Trending));
        assert_eq!(PlaylistTag::from_str("bogus"), None);
    }

    #[test]
    fn test_validate_playlist_tag() {
        assert!(validate_playlist_tag("staff_favorites").is_ok());
        assert!(validate_playlist_tag("favourites").is_err());
    }
}
