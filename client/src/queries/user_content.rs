//! Profile queries

use std::sync::Arc;

use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::info;

use super::{resource, QueryStatus};
use crate::error::Result;
use crate::models::{UpdateProfileRequest, User};
use crate::services::UsersApi;

pub struct UserContentQueries {
    api: Arc<dyn UsersApi>,
    cache: Arc<QueryCache>,
}

impl UserContentQueries {
    pub fn new(api: Arc<dyn UsersApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn id_key(user_id: &str) -> QueryKey {
        QueryKey::scoped(resource::USERS, "id", user_id)
    }

    /// A member's profile; disabled while nobody is selected/signed in
    pub async fn profile(&self, user_id: Option<&str>) -> Result<QueryStatus<User>> {
        let Some(user_id) = user_id else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::id_key(user_id);
        if let Lookup::Fresh(cached) = self.cache.get::<User>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.get_user(user_id).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    pub async fn update_profile(&self, user_id: &str, req: &UpdateProfileRequest) -> Result<User> {
        let user = self.api.update_profile(user_id, req).await?;
        self.cache.invalidate_key(&Self::id_key(user_id));
        info!(user_id = %user.id, "profile updated");
        Ok(user)
    }

    pub async fn delete_account(&self, user_id: &str) -> Result<()> {
        self.api.delete_account(user_id).await?;
        self.cache.invalidate_key(&Self::id_key(user_id));
        info!(user_id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    struct FakeUsersApi;

    impl FakeUsersApi {
        fn user(id: &str) -> User {
            User {
                id: id.into(),
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
            }
        }
    }

    #[async_trait]
    impl UsersApi for FakeUsersApi {
        async fn get_user(&self, user_id: &str) -> Result<User> {
            Ok(Self::user(user_id))
        }

        async fn update_profile(&self, user_id: &str, _req: &UpdateProfileRequest) -> Result<User> {
            Ok(Self::user(user_id))
        }

        async fn delete_account(&self, _user_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_profile_disabled_without_user() {
        let cache = Arc::new(QueryCache::new(Duration::from_secs(300)));
        let queries = UserContentQueries::new(Arc::new(FakeUsersApi), cache);
        assert!(queries.profile(None).await.unwrap().is_disabled());
    }

    #[tokio::test]
    async fn test_update_invalidates_only_that_profile() {
        let cache = Arc::new(QueryCache::new(Duration::from_secs(300)));
        let queries = UserContentQueries::new(Arc::new(FakeUsersApi), Arc::clone(&cache));
        cache.insert(QueryKey::scoped("users", "id", "u1"), &1u32).unwrap();
        cache.insert(QueryKey::scoped("users", "id", "u2"), &1u32).unwrap();

        queries
            .update_profile("u1", &UpdateProfileRequest::default())
            .await
            .unwrap();

        assert!(cache.is_stale(&QueryKey::scoped("users", "id", "u1")));
        assert!(cache.is_fresh(&QueryKey::scoped("users", "id", "u2")));
    }
}
