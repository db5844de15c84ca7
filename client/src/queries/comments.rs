//! Comment queries and the moderation data flow

use std::sync::Arc;

use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::info;

use super::{resource, QueryStatus};
use crate::error::{AppError, Result};
use crate::models::{Comment, CreateCommentRequest, ModerationDecision};
use crate::services::CommentsApi;

pub struct CommentQueries {
    api: Arc<dyn CommentsApi>,
    cache: Arc<QueryCache>,
}

impl CommentQueries {
    pub fn new(api: Arc<dyn CommentsApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn video_key(video_id: &str) -> QueryKey {
        QueryKey::scoped(resource::COMMENTS, "video", video_id)
    }

    fn user_key() -> QueryKey {
        QueryKey::new(resource::COMMENTS, "user")
    }

    fn all_key() -> QueryKey {
        QueryKey::new(resource::COMMENTS, "all")
    }

    /// Comments on one video; disabled while no video is selected
    pub async fn comments_for_video(
        &self,
        video_id: Option<&str>,
    ) -> Result<QueryStatus<Vec<Comment>>> {
        let Some(video_id) = video_id else {
            return Ok(QueryStatus::Disabled);
        };

        let key = Self::video_key(video_id);
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Comment>>(&key) {
            return Ok(QueryStatus::Ready(cached));
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_for_video(video_id).await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(QueryStatus::Ready(fetched))
    }

    /// The signed-in user's own comments
    pub async fn my_comments(&self) -> Result<Vec<Comment>> {
        let key = Self::user_key();
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Comment>>(&key) {
            return Ok(cached);
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_for_user().await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(fetched)
    }

    /// Every comment, for the admin management screen
    pub async fn all_comments(&self) -> Result<Vec<Comment>> {
        let key = Self::all_key();
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<Comment>>(&key) {
            return Ok(cached);
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_all().await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(fetched)
    }

    /// Create a comment; it enters moderation as pending.
    ///
    /// Invalidates the video-scoped list (when the comment targets a
    /// video), the user's own list, and the admin list. Unrelated caches
    /// are untouched.
    pub async fn create(&self, req: &CreateCommentRequest) -> Result<Comment> {
        let comment = self.api.create(req).await?;

        if let Some(video_id) = req.video_id.as_deref() {
            self.cache.invalidate_key(&Self::video_key(video_id));
        }
        self.cache.invalidate_key(&Self::user_key());
        self.cache.invalidate_key(&Self::all_key());

        info!(comment_id = %comment.id, "comment submitted for moderation");
        Ok(comment)
    }

    /// Apply an admin decision to a pending comment.
    ///
    /// A decided comment is refused client-side; status only ever advances
    /// out of pending.
    pub async fn moderate(&self, comment: &Comment, decision: ModerationDecision) -> Result<Comment> {
        if !comment.status.is_pending() {
            return Err(AppError::Conflict(format!(
                "comment {} is already {}",
                comment.id,
                comment.status.as_str()
            )));
        }

        let updated = self.api.update_status(&comment.id, decision).await?;

        if let Some(video_id) = updated.video_id.as_deref() {
            self.cache.invalidate_key(&Self::video_key(video_id));
        }
        self.cache.invalidate_key(&Self::user_key());
        self.cache.invalidate_key(&Self::all_key());

        info!(
            comment_id = %updated.id,
            status = updated.status.as_str(),
            "comment moderated"
        );
        Ok(updated)
    }
}
