//! Playlist service functions

use async_trait::async_trait;

use super::http::ApiClient;
use crate::error::Result;
use crate::models::{CreatePlaylistRequest, Playlist, PlaylistTag, UpdatePlaylistRequest};

#[async_trait]
pub trait PlaylistsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Playlist>>;
    async fn list_by_tag(&self, tag: PlaylistTag) -> Result<Vec<Playlist>>;
    async fn get(&self, playlist_id: &str) -> Result<Playlist>;
    async fn create(&self, req: &CreatePlaylistRequest) -> Result<Playlist>;
    async fn update(&self, playlist_id: &str, req: &UpdatePlaylistRequest) -> Result<Playlist>;
    async fn delete(&self, playlist_id: &str) -> Result<()>;
}

pub struct HttpPlaylistsApi {
    client: ApiClient,
}

impl HttpPlaylistsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlaylistsApi for HttpPlaylistsApi {
    async fn list(&self) -> Result<Vec<Playlist>> {
        self.client.get("/api/v1/playlists").await
    }

    async fn list_by_tag(&self, tag: PlaylistTag) -> Result<Vec<Playlist>> {
        self.client
            .get(&format!("/api/v1/playlists?tag={}", tag.as_str()))
            .await
    }

    async fn get(&self, playlist_id: &str) -> Result<Playlist> {
        self.client
            .get(&format!("/api/v1/playlists/{}", playlist_id))
            .await
    }

    async fn create(&self, req: &CreatePlaylistRequest) -> Result<Playlist> {
        self.client.post("/api/v1/playlists", req).await
    }

    async fn update(&self, playlist_id: &str, req: &UpdatePlaylistRequest) -> Result<Playlist> {
        self.client
            .patch(&format!("/api/v1/playlists/{}", playlist_id), req)
            .await
    }

    async fn delete(&self, playlist_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/api/v1/playlists/{}", playlist_id))
            .await
    }
}
