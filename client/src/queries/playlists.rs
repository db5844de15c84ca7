//! Playlist queries

use std::sync::Arc;

use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::info;

use super::{resource, QueryStatus};
use crate::error::Result;
use crate::models::{CreatePlaylistRequest, Playlist, PlaylistTag, UpdatePlaylistRequest};
use crate::services::PlaylistsApi;

pub struct PlaylistQueries {
    api: Arc<dyn PlaylistsApi>,
    cache: Arc<QueryCache>,
}

impl PlaylistQueries {
    pub fn new(api: Arc<dyn PlaylistsApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn id_key(playlist_id: &str) -> QueryKey {
        QueryKey::scoped(resource::PLAYLISTS, "id", playlist_id)
    }

    fn tag_key(tag: PlaylistTag) -> QueryKey {
        QueryKey::scoped(resource::PLAYLISTS, "tag", tag.as_str())
    }

    fn all_key() -> QueryKey {
        QueryKey::new(resource::PLAYLISTS, "all")
    }

    /// Playlists feeding one curated home-page section; disabled until a
    /// tag is chosen
    pub async fn playlists_by_tag(
        &self,
        tag: Option<PlaylistTag>,
    ) -> Result<QueryStatus<Vec<Playlist>>> {
        let Some(tag) = tag else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::tag_key(tag);
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Playlist>>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_by_tag(tag).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    /// One playlist by id; disabled while no id is selected
    pub async fn playlist(&self, playlist_id: Option<&str>) -> Result<QueryStatus<Playlist>> {
        let Some(playlist_id) = playlist_id else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::id_key(playlist_id);
        if let Lookup::Fresh(cached) = self.cache.get::<Playlist>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.get(playlist_id).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    /// Every playlist, for the admin console
    pub async fn playlists(&self) -> Result<Vec<Playlist>> {
        let key = Self::all_key();
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Playlist>>(&key) {
            return Ok(cached);
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list().await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(fetched)
    }

    pub async fn create(&self, req: &CreatePlaylistRequest) -> Result<Playlist> {
        let playlist = self.api.create(req).await?;
        self.cache.invalidate_key(&Self::all_key());
        self.cache.invalidate_key(&Self::tag_key(playlist.tag));
        info!(playlist_id = %playlist.id, tag = playlist.tag.as_str(), "playlist created");
        Ok(playlist)
    }

    pub async fn update(&self, playlist_id: &str, req: &UpdatePlaylistRequest) -> Result<Playlist> {
        let playlist = self.api.update(playlist_id, req).await?;
        self.cache.invalidate_key(&Self::id_key(playlist_id));
        self.cache.invalidate_key(&Self::all_key());
        // The tag may have changed; refresh every curated section
        self.cache
            .invalidate(|key| key.is_resource(resource::PLAYLISTS) && key.scope == "tag");
        info!(playlist_id = %playlist.id, "playlist updated");
        Ok(playlist)
    }

    pub async fn delete(&self, playlist_id: &str) -> Result<()> {
        self.api.delete(playlist_id).await?;
        self.cache.invalidate_key(&Self::id_key(playlist_id));
        self.cache.invalidate_key(&Self::all_key());
        self.cache
            .invalidate(|key| key.is_resource(resource::PLAYLISTS) && key.scope == "tag");
        info!(playlist_id, "playlist deleted");
        Ok(())
    }
}
