//! Form-submission glue.
//!
//! One controller per screen orchestrates validate → mutate → outcome.
//! Validation failures never reach the remote service; mutation failures
//! return the form to a recoverable state with an error notification. The
//! navigation policy lives in each controller: creating a dependent
//! resource navigates away, updating in place stays put, and a new comment
//! clears the input with a moderation-pending notice.

pub mod comment;
pub mod feedback;
pub mod playlist;
pub mod profile;
pub mod reset_password;
pub mod signup;
pub mod state;
pub mod video_upload;

pub use comment::CommentForm;
pub use feedback::FeedbackForm;
pub use playlist::PlaylistForm;
pub use profile::ProfileForm;
pub use reset_password::ResetPasswordForm;
pub use signup::SignupForm;
pub use state::{FailureReason, FormEvent, FormState};
pub use video_upload::{VideoUploadForm, VideoUploadMode};

use validator::ValidationErrors;

use crate::routes::Route;

/// Toast category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// User-visible toast emitted after a submission settles
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// What a submit attempt produced
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened
    NotSubmitted,
    /// Schema violations; shown next to their fields, nothing was sent
    Rejected(ValidationErrors),
    /// The mutation succeeded
    Completed {
        notification: Notification,
        /// `Some` when the screen should be left (resource creation)
        navigate_to: Option<Route>,
    },
    /// The mutation failed; the form is recoverable
    Failed { notification: Notification },
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { .. })
    }
}
