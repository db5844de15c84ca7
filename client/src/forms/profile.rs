//! Profile edit controller
//!
//! Updates happen in place; success keeps the user on the screen.

use chrono::Utc;

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::UpdateProfileRequest;
use crate::queries::UserContentQueries;
use crate::validation;

pub struct ProfileForm {
    user_id: String,
    state: FormState,
}

impl ProfileForm {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    pub async fn submit(
        &mut self,
        input: &UpdateProfileRequest,
        users: &UserContentQueries,
    ) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::profile::validate(input, Utc::now().date_naive()) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match users.update_profile(&self.user_id, input).await {
            Ok(_) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success("Profile saved."),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::User;
    use crate::services::UsersApi;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use query_cache::QueryCache;
    use std::sync::Arc;
    use std::time::Duration;

    struct FakeUsersApi;

    #[async_trait]
    impl UsersApi for FakeUsersApi {
        async fn get_user(&self, _user_id: &str) -> Result<User> {
            unimplemented!("not exercised")
        }

        async fn update_profile(&self, user_id: &str, _req: &UpdateProfileRequest) -> Result<User> {
            Ok(User {
                id: user_id.into(),
                email: "member@example.com".into(),
                first_name: Some("Ada".into()),
                last_name: None,
                phone: None,
                birth_date: None,
                gender: None,
                language: None,
                location: None,
                bio: None,
                email_verified: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn delete_account(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    fn queries() -> UserContentQueries {
        UserContentQueries::new(
            Arc::new(FakeUsersApi),
            Arc::new(QueryCache::new(Duration::from_secs(300))),
        )
    }

    #[tokio::test]
    async fn test_update_stays_on_screen() {
        let mut form = ProfileForm::new("u1");
        let outcome = form
            .submit(
                &UpdateProfileRequest {
                    bio: Some("I watch films.".into()),
                    ..Default::default()
                },
                &queries(),
            )
            .await;

        match outcome {
            SubmitOutcome::Completed { navigate_to, .. } => assert_eq!(navigate_to, None),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_future_birth_date_rejected() {
        let mut form = ProfileForm::new("u1");
        let outcome = form
            .submit(
                &UpdateProfileRequest {
                    birth_date: NaiveDate::from_ymd_opt(2999, 1, 1),
                    ..Default::default()
                },
                &queries(),
            )
            .await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    }
}
