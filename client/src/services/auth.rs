//! Authentication service functions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{
    RequestPasswordResetRequest, ResetPasswordRequest, SignInRequest, SignupRequest, UserSummary,
};

/// Successful sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInResponse {
    pub user: UserSummary,
}

/// Successful signup payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpResponse {
    pub user_id: String,
    /// Whether a verification email was dispatched
    pub verification_sent: bool,
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn sign_up(&self, req: &SignupRequest) -> Result<SignUpResponse>;
    async fn sign_in(&self, req: &SignInRequest) -> Result<SignInResponse>;
    async fn verify_email(&self, token: &str) -> Result<()>;
    async fn request_password_reset(&self, req: &RequestPasswordResetRequest) -> Result<()>;
    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<()>;
}

pub struct HttpAuthApi {
    client: ApiClient,
}

impl HttpAuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, req: &SignupRequest) -> Result<SignUpResponse> {
        self.client.post("/api/v1/auth/signup", req).await
    }

    async fn sign_in(&self, req: &SignInRequest) -> Result<SignInResponse> {
        self.client.post("/api/v1/auth/signin", req).await
    }

    async fn verify_email(&self, token: &str) -> Result<()> {
        self.client
            .post_no_content("/api/v1/auth/verify-email", &serde_json::json!({ "token": token }))
            .await
    }

    async fn request_password_reset(&self, req: &RequestPasswordResetRequest) -> Result<()> {
        self.client
            .post_no_content("/api/v1/auth/password-reset/request", req)
            .await
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<()> {
        self.client.post_no_content("/api/v1/auth/password-reset", req).await
    }
}
