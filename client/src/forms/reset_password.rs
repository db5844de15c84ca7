//! Password reset screen controller

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::ResetPasswordRequest;
use crate::routes::Route;
use crate::services::AuthApi;
use crate::validation;

pub struct ResetPasswordForm {
    state: FormState,
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ResetPasswordForm {
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

    pub async fn submit(&mut self, input: &ResetPasswordRequest, auth: &dyn AuthApi) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::reset_password::validate(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match auth.reset_password(input).await {
            Ok(()) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success("Password updated. Sign in with your new password."),
                    navigate_to: Some(Route::SignIn),
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
