//! Share link service functions

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{CreateShareLinkRequest, RecordShareViewRequest, ShareLink, ShareLinkView};

#[async_trait]
pub trait ShareLinksApi: Send + Sync {
    async fn create(&self, req: &CreateShareLinkRequest) -> Result<ShareLink>;
    async fn get(&self, link_id: &str) -> Result<ShareLink>;
    async fn record_view(&self, link_id: &str, req: &RecordShareViewRequest) -> Result<()>;
    async fn list_views(&self, link_id: &str) -> Result<Vec<ShareLinkView>>;
}

pub struct HttpShareLinksApi {
    client: ApiClient,
}

impl HttpShareLinksApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ShareLinksApi for HttpShareLinksApi {
    async fn create(&self, req: &CreateShareLinkRequest) -> Result<ShareLink> {
        self.client.post("/api/v1/share-links", req).await
    }

    async fn get(&self, link_id: &str) -> Result<ShareLink> {
        self.client.get(&format!("/api/v1/share-links/{}", link_id)).await
    }

    async fn record_view(&self, link_id: &str, req: &RecordShareViewRequest) -> Result<()> {
        self.client
            .post_no_content(&format!("/api/v1/share-links/{}/views", link_id), req)
            .await
    }

    async fn list_views(&self, link_id: &str) -> Result<Vec<ShareLinkView>> {
        self.client
            .get(&format!("/api/v1/share-links/{}/views", link_id))
            .await
    }
}
