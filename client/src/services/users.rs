//! User profile service functions

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{UpdateProfileRequest, User};

#[async_trait]
pub trait UsersApi: Send + Sync {
    async fn get_user(&self, user_id: &str) -> Result<User>;
    async fn update_profile(&self, user_id: &str, req: &UpdateProfileRequest) -> Result<User>;
    async fn delete_account(&self, user_id: &str) -> Result<()>;
}

pub struct HttpUsersApi {
    client: ApiClient,
}

impl HttpUsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.client.get(&format!("/api/v1/users/{}", user_id)).await
    }

    async fn update_profile(&self, user_id: &str, req: &UpdateProfileRequest) -> Result<User> {
        self.client
            .patch(&format!("/api/v1/users/{}", user_id), req)
            .await
    }

    async fn delete_account(&self, user_id: &str) -> Result<()> {
        self.client.delete(&format!("/api/v1/users/{}", user_id)).await
    }
}
