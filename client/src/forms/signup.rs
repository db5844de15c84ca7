//! Signup screen controller

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::SignupRequest;
use crate::routes::Route;
use crate::services::AuthApi;
use crate::storage::{LocalState, SignupDraft};
use crate::validation;

pub struct SignupForm {
    state: FormState,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm {
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

    /// Pre-fill the form from a surviving draft
    pub fn restore_draft(&self, local: &LocalState) -> Option<SignupDraft> {
        local.signup_draft()
    }

    /// Persist the fields worth keeping between visits (never the password)
    pub fn save_draft(&self, input: &SignupRequest, local: &LocalState) {
        local.save_signup_draft(&SignupDraft {
            email: input.email.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            profile: input.profile.clone(),
        });
    }

    /// Validate and submit. Invalid input never reaches the remote service;
    /// success clears the persisted draft and moves on to email
    /// verification.
    pub async fn submit(
        &mut self,
        input: &SignupRequest,
        auth: &dyn AuthApi,
        local: &LocalState,
    ) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::signup::validate(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match auth.sign_up(input).await {
            Ok(_) => {
                local.clear_signup_draft();
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(
                        "Account created. Check your inbox to verify your email.",
                    ),
                    navigate_to: Some(Route::VerifyEmail { token: None }),
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
