/// Feedback survey records
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// What a submission is about: the platform in general or one film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackScope {
    General,
    Film { video_id: String },
}

impl FeedbackScope {
    pub fn video_id(&self) -> Option<&str> {
        match self {
            FeedbackScope::General => None,
            FeedbackScope::Film { video_id } => Some(video_id),
        }
    }
}

/// The five survey ratings, each on a 1-5 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct FeedbackRatings {
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub overall: u8,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub content: u8,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub presentation: u8,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub experience: u8,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub recommendation: u8,
}

/// Feedback submission payload; submitted once, never edited
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    pub scope: FeedbackScope,
    #[validate(nested)]
    pub ratings: FeedbackRatings,
    #[validate(length(min = 250, message = "feedback must be at least 250 characters"))]
    pub text: String,
}

/// Stored submission as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    pub id: String,
    pub user_id: String,
    pub scope: FeedbackScope,
    pub ratings: FeedbackRatings,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
