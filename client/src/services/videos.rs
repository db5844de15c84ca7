//! Video catalog service functions

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{CreateVideoRequest, UpdateVideoRequest, Video};

#[async_trait]
pub trait VideosApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Video>>;
    async fn get(&self, video_id: &str) -> Result<Video>;
    async fn create(&self, req: &CreateVideoRequest) -> Result<Video>;
    async fn update(&self, video_id: &str, req: &UpdateVideoRequest) -> Result<Video>;
    /// Flips `is_deleted`; the record is never purged
    async fn soft_delete(&self, video_id: &str) -> Result<Video>;
}

pub struct HttpVideosApi {
    client: ApiClient,
}

impl HttpVideosApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VideosApi for HttpVideosApi {
    async fn list(&self) -> Result<Vec<Video>> {
        self.client.get("/api/v1/videos").await
    }

    async fn get(&self, video_id: &str) -> Result<Video> {
        self.client.get(&format!("/api/v1/videos/{}", video_id)).await
    }

    async fn create(&self, req: &CreateVideoRequest) -> Result<Video> {
        self.client.post("/api/v1/videos", req).await
    }

    async fn update(&self, video_id: &str, req: &UpdateVideoRequest) -> Result<Video> {
        self.client
            .patch(&format!("/api/v1/videos/{}", video_id), req)
            .await
    }

    async fn soft_delete(&self, video_id: &str) -> Result<Video> {
        self.client
            .post(&format!("/api/v1/videos/{}/delete", video_id), &serde_json::json!({}))
            .await
    }
}
