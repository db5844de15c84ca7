//! Watch-session telemetry and share-link engagement

use std::sync::Arc;

use chrono::Utc;
use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::{debug, info};

use super::{resource, QueryStatus};
use crate::error::{AppError, Result};
use crate::models::{
    ClientMetadata, CreateShareLinkRequest, RecordShareViewRequest, ShareLink, ShareLinkView,
    StartWatchSessionRequest, WatchEventRequest, WatchProgressRequest,
};
use crate::services::{ShareLinksApi, WatchSessionsApi};

/// Drives one viewing's telemetry.
///
/// Created per playback; starts the remote session on `start`, pushes
/// progress and discrete events while the player runs, and closes the
/// session on `end`. The client never deletes a session.
pub struct WatchTracker {
    api: Arc<dyn WatchSessionsApi>,
    session_id: Option<String>,
    percentage: f32,
    ended: bool,
}

impl WatchTracker {
    pub fn new(api: Arc<dyn WatchSessionsApi>) -> Self {
        Self {
            api,
            session_id: None,
            percentage: 0.0,
            ended: false,
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Reported progress so far (0.0-100.0)
    pub fn percentage_watched(&self) -> f32 {
        self.percentage
    }

    /// Open the session at playback start
    pub async fn start(
        &mut self,
        video_id: &str,
        user_id: Option<&str>,
        client: ClientMetadata,
    ) -> Result<()> {
        if self.session_id.is_some() {
            return Err(AppError::Conflict("watch session already started".into()));
        }

        let session = self
            .api
            .start(&StartWatchSessionRequest {
                video_id: video_id.to_string(),
                user_id: user_id.map(String::from),
                client,
            })
            .await?;

        info!(session_id = %session.id, video_id, "watch session started");
        self.session_id = Some(session.id);
        Ok(())
    }

    /// Report playback progress.
    ///
    /// The reported percentage never decreases: seeking backwards keeps the
    /// session at its high-water mark. Returns the value actually reported.
    pub async fn record_progress(&mut self, percentage: f32) -> Result<f32> {
        let session_id = self.active_session()?;
        let clamped = percentage.clamp(0.0, 100.0).max(self.percentage);

        self.api
            .update_progress(
                &session_id,
                &WatchProgressRequest {
                    percentage_watched: clamped,
                },
            )
            .await?;

        debug!(session_id = %session_id, percentage = clamped, "watch progress reported");
        self.percentage = clamped;
        Ok(clamped)
    }

    /// Append a discrete player event (play, pause, seek, ...)
    pub async fn record_event(&mut self, name: &str, position_seconds: f64) -> Result<()> {
        let session_id = self.active_session()?;

        self.api
            .record_event(
                &session_id,
                &WatchEventRequest {
                    name: name.to_string(),
                    occurred_at: Utc::now(),
                    position_seconds,
                },
            )
            .await?;

        debug!(session_id = %session_id, event = name, "watch event recorded");
        Ok(())
    }

    /// Close the session when playback stops
    pub async fn end(&mut self) -> Result<()> {
        let session_id = self.active_session()?;
        self.api.end(&session_id).await?;
        info!(session_id = %session_id, "watch session ended");
        self.ended = true;
        Ok(())
    }

    fn active_session(&self) -> Result<String> {
        if self.ended {
            return Err(AppError::Conflict("watch session already ended".into()));
        }
        self.session_id
            .clone()
            .ok_or_else(|| AppError::Conflict("watch session not started".into()))
    }
}

/// Share-link creation and engagement queries
pub struct ShareLinkQueries {
    api: Arc<dyn ShareLinksApi>,
    cache: Arc<QueryCache>,
}

impl ShareLinkQueries {
    pub fn new(api: Arc<dyn ShareLinksApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn views_key(link_id: &str) -> QueryKey {
        QueryKey::scoped(resource::SHARE_LINKS, "id", link_id)
    }

    /// Engagement detail for one link; disabled while no link is selected
    pub async fn link_views(&self, link_id: Option<&str>) -> Result<QueryStatus<Vec<ShareLinkView>>> {
        let Some(link_id) = link_id else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::views_key(link_id);
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<ShareLinkView>>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_views(link_id).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    pub async fn create_link(&self, video_id: &str, expires_in_days: Option<u32>) -> Result<ShareLink> {
        let link = self
            .api
            .create(&CreateShareLinkRequest {
                video_id: video_id.to_string(),
                expires_in_days,
            })
            .await?;
        info!(link_id = %link.id, video_id, "share link created");
        Ok(link)
    }

    pub async fn record_view(&self, link_id: &str, ip: &str, referrer: Option<&str>) -> Result<()> {
        self.api
            .record_view(
                link_id,
                &RecordShareViewRequest {
                    ip: ip.to_string(),
                    referrer: referrer.map(String::from),
                },
            )
            .await?;
        self.cache.invalidate_key(&Self::views_key(link_id));
        Ok(())
    }
}
