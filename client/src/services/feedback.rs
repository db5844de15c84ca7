//! Feedback survey service functions

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{FeedbackRequest, FeedbackSubmission};

#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn submit(&self, req: &FeedbackRequest) -> Result<FeedbackSubmission>;
    async fn list_all(&self) -> Result<Vec<FeedbackSubmission>>;
}

pub struct HttpFeedbackApi {
    client: ApiClient,
}

impl HttpFeedbackApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedbackApi for HttpFeedbackApi {
    async fn submit(&self, req: &FeedbackRequest) -> Result<FeedbackSubmission> {
        self.client.post("/api/v1/feedback", req).await
    }

    async fn list_all(&self) -> Result<Vec<FeedbackSubmission>> {
        self.client.get("/api/v1/feedback").await
    }
}
