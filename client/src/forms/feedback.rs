//! Feedback survey controller

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::FeedbackRequest;
use crate::queries::FeedbackQueries;
use crate::validation;

pub struct FeedbackForm {
    state: FormState,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub async fn submit(&mut self, input: &FeedbackRequest, feedback: &FeedbackQueries) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::feedback::validate(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match feedback.submit(input).await {
            Ok(_) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success("Thank you for your feedback!"),
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
