//! Comment service functions
//!
//! `update_status` is the only operation that can move a comment out of the
//! moderation queue; creation always lands in `pending`.

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{Comment, CreateCommentRequest, ModerationDecision};

#[async_trait]
pub trait CommentsApi: Send + Sync {
    async fn create(&self, req: &CreateCommentRequest) -> Result<Comment>;
    async fn list_for_video(&self, video_id: &str) -> Result<Vec<Comment>>;
    async fn list_for_user(&self) -> Result<Vec<Comment>>;
    async fn list_all(&self) -> Result<Vec<Comment>>;
    async fn update_status(&self, comment_id: &str, decision: ModerationDecision) -> Result<Comment>;
}

pub struct HttpCommentsApi {
    client: ApiClient,
}

impl HttpCommentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentsApi for HttpCommentsApi {
    async fn create(&self, req: &CreateCommentRequest) -> Result<Comment> {
        self.client.post("/api/v1/comments", req).await
    }

    async fn list_for_video(&self, video_id: &str) -> Result<Vec<Comment>> {
        self.client
            .get(&format!("/api/v1/videos/{}/comments", video_id))
            .await
    }

    async fn list_for_user(&self) -> Result<Vec<Comment>> {
        self.client.get("/api/v1/users/me/comments").await
    }

    async fn list_all(&self) -> Result<Vec<Comment>> {
        self.client.get("/api/v1/comments").await
    }

    async fn update_status(&self, comment_id: &str, decision: ModerationDecision) -> Result<Comment> {
        self.client
            .patch(
                &format!("/api/v1/comments/{}/status", comment_id),
                &serde_json::json!({ "decision": decision }),
            )
            .await
    }
}
