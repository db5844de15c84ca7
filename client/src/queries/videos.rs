//! Video catalog queries

use std::sync::Arc;

use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::info;

use super::{resource, QueryStatus};
use crate::error::Result;
use crate::models::{CreateVideoRequest, UpdateVideoRequest, Video};
use crate::services::VideosApi;

pub struct VideoQueries {
    api: Arc<dyn VideosApi>,
    cache: Arc<QueryCache>,
}

impl VideoQueries {
    pub fn new(api: Arc<dyn VideosApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn id_key(video_id: &str) -> QueryKey {
        QueryKey::scoped(resource::VIDEOS, "id", video_id)
    }

    fn all_key() -> QueryKey {
        QueryKey::new(resource::VIDEOS, "all")
    }

    /// One video by id; disabled while no id is selected
    pub async fn video(&self, video_id: Option<&str>) -> Result<QueryStatus<Video>> {
        let Some(video_id) = video_id else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::id_key(video_id);
        if let Lookup::Fresh(cached) = self.cache.get::<Video>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.get(video_id).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    /// The full catalog
    pub async fn videos(&self) -> Result<Vec<Video>> {
        let key = Self::all_key();
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Video>>(&key) {
            return Ok(cached);
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list().await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(fetched)
    }

    pub async fn create(&self, req: &CreateVideoRequest) -> Result<Video> {
        let video = self.api.create(req).await?;
        self.cache.invalidate_key(&Self::all_key());
        info!(video_id = %video.id, "video created");
        Ok(video)
    }

    pub async fn update(&self, video_id: &str, req: &UpdateVideoRequest) -> Result<Video> {
        let video = self.api.update(video_id, req).await?;
        self.cache.invalidate_key(&Self::id_key(video_id));
        self.cache.invalidate_key(&Self::all_key());
        info!(video_id = %video.id, "video updated");
        Ok(video)
    }

    /// Soft delete: the record keeps existing with `is_deleted` set
    pub async fn delete(&self, video_id: &str) -> Result<Video> {
        let video = self.api.soft_delete(video_id).await?;
        self.cache.invalidate_key(&Self::id_key(video_id));
        self.cache.invalidate_key(&Self::all_key());
        info!(video_id = %video.id, "video soft-deleted");
        Ok(video)
    }
}
