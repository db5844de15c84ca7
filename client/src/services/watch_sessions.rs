//! Watch session telemetry service functions
//!
//! The trait has no delete: sessions are append/update only from the client.

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{
    StartWatchSessionRequest, WatchEventRequest, WatchProgressRequest, WatchSession,
};

#[async_trait]
pub trait WatchSessionsApi: Send + Sync {
    async fn start(&self, req: &StartWatchSessionRequest) -> Result<WatchSession>;
    async fn update_progress(&self, session_id: &str, req: &WatchProgressRequest) -> Result<()>;
    async fn record_event(&self, session_id: &str, req: &WatchEventRequest) -> Result<()>;
    async fn end(&self, session_id: &str) -> Result<()>;
}

pub struct HttpWatchSessionsApi {
    client: ApiClient,
}

impl HttpWatchSessionsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WatchSessionsApi for HttpWatchSessionsApi {
    async fn start(&self, req: &StartWatchSessionRequest) -> Result<WatchSession> {
        self.client.post("/api/v1/watch-sessions", req).await
    }

    async fn update_progress(&self, session_id: &str, req: &WatchProgressRequest) -> Result<()> {
        self.client
            .post_no_content(&format!("/api/v1/watch-sessions/{}/progress", session_id), req)
            .await
    }

    async fn record_event(&self, session_id: &str, req: &WatchEventRequest) -> Result<()> {
        self.client
            .post_no_content(&format!("/api/v1/watch-sessions/{}/events", session_id), req)
            .await
    }

    async fn end(&self, session_id: &str) -> Result<()> {
        self.client
            .post_no_content(
                &format!("/api/v1/watch-sessions/{}/end", session_id),
                &serde_json::json!({}),
            )
            .await
    }
}
