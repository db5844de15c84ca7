/// Comment records and the moderation lifecycle
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserSummary;
use super::video::VideoSummary;

/// Moderation lifecycle state of a comment.
///
/// Advances pending→approved or pending→rejected, never reversed. Only the
/// moderation mutation changes it; creation always yields `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ModerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Whether a moderation decision may still be applied
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Admin decision on a pending comment.
///
/// There is no variant for `Pending`: a decided comment can never return to
/// the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    /// Status the comment ends up in
    pub fn target_status(&self) -> ModerationStatus {
        match self {
            Self::Approve => ModerationStatus::Approved,
            Self::Reject => ModerationStatus::Rejected,
        }
    }
}

/// Comment record as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Absent for comments left outside a video page
    pub video_id: Option<String>,
    pub user_id: String,
    pub text: String,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: Option<UserSummary>,
    pub video: Option<VideoSummary>,
}

impl Comment {
    /// Visibility rule: approved comments are public; a pending comment is
    /// shown only to its author. Rejected comments are never shown.
    pub fn is_visible_to(&self, viewer_id: Option<&str>) -> bool {
        match self.status {
            ModerationStatus::Approved => true,
            ModerationStatus::Pending => viewer_id.is_some_and(|v| v == self.user_id),
            ModerationStatus::Rejected => false,
        }
    }
}

/// Comment creation payload.
///
/// Carries no status field: new comments always enter the queue as
/// `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    pub video_id: Option<String>,
    #[validate(length(min = 1, max = 500, message = "comment must be 1 to 500 characters"))]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment(status: ModerationStatus) -> Comment {
        Comment {
            id: "c1".into(),
            video_id: Some("v1".into()),
            user_id: "u1".into(),
            text: "nice".into(),
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            video: None,
        }
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(ModerationStatus::Pending.as_str(), "pending");
        assert_eq!(
            ModerationStatus::from_str("rejected"),
            Some(ModerationStatus::Rejected)
        );
        assert_eq!(ModerationStatus::from_str("deleted"), None);
    }

    #[test]
    fn test_decision_targets() {
        assert_eq!(
            ModerationDecision::Approve.target_status(),
            ModerationStatus::Approved
        );
        assert_eq!(
            ModerationDecision::Reject.target_status(),
            ModerationStatus::Rejected
        );
    }

    #[test]
    fn test_approved_comment_is_public() {
        assert!(comment(ModerationStatus::Approved).is_visible_to(None));
        assert!(comment(ModerationStatus::Approved).is_visible_to(Some("u2")));
    }

    #[test]
    fn test_pending_comment_visible_only_to_author() {
        let pending = comment(ModerationStatus::Pending);
        assert!(pending.is_visible_to(Some("u1")));
        assert!(!pending.is_visible_to(Some("u2")));
        assert!(!pending.is_visible_to(None));
    }

    #[test]
    fn test_rejected_comment_hidden_from_everyone() {
        let rejected = comment(ModerationStatus::Rejected);
        assert!(!rejected.is_visible_to(Some("u1")));
        assert!(!rejected.is_visible_to(None));
    }
}
