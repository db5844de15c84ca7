//! Comment box controller
//!
//! A successful submission clears the input and reports a
//! moderation-pending notice; the new comment is not surfaced because it
//! starts pending and pending comments are hidden from everyone but their
//! author.

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::CreateCommentRequest;
use crate::queries::CommentQueries;
use crate::validation;

pub struct CommentForm {
    state: FormState,
    text: String,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
            text: String::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub async fn submit(
        &mut self,
        video_id: Option<&str>,
        comments: &CommentQueries,
    ) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        let request = CreateCommentRequest {
            video_id: video_id.map(String::from),
            text: self.text.clone(),
        };

        if let Err(errors) = validation::comment::validate(&request) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match comments.create(&request).await {
            Ok(_) => {
                self.text.clear();
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(
                        "Thanks! Your comment will appear once it has been reviewed.",
                    ),
                    navigate_to: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.state.apply(FormEvent::MutationFailed(message.clone()));
                SubmitOutcome::Failed {
                    notification: Notification::error(message),
                }
            }
        }
    }
}
