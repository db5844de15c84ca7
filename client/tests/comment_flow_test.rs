//! Comment lifecycle: submission, cache invalidation, moderation.
//!
//! Runs the comment form and queries against an in-memory comments service
//! holding real state, so the refetch-after-invalidate behavior is
//! observable end to end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use marquee_client::error::{AppError, Result};
use marquee_client::forms::{CommentForm, SubmitOutcome};
use marquee_client::models::{
    Comment, CreateCommentRequest, ModerationDecision, ModerationStatus,
};
use marquee_client::queries::CommentQueries;
use marquee_client::services::CommentsApi;
use query_cache::QueryCache;

#[derive(Default)]
struct InMemoryCommentsApi {
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicUsize,
    video_list_calls: AtomicUsize,
}

impl InMemoryCommentsApi {
    fn all(&self) -> Vec<Comment> {
        self.comments.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl CommentsApi for InMemoryCommentsApi {
    async fn create(&self, req: &CreateCommentRequest) -> Result<Comment> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let comment = Comment {
            id: format!("c{}", id),
            video_id: req.video_id.clone(),
            user_id: "u1".into(),
            text: req.text.clone(),
            status: ModerationStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            user: None,
            video: None,
        };
        self.comments.lock().expect("lock poisoned").push(comment.clone());
        Ok(comment)
    }

    async fn list_for_video(&self, video_id: &str) -> Result<Vec<Comment>> {
        self.video_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .all()
            .into_iter()
            .filter(|c| c.video_id.as_deref() == Some(video_id))
            .collect())
    }

    async fn list_for_user(&self) -> Result<Vec<Comment>> {
        Ok(self.all())
    }

    async fn list_all(&self) -> Result<Vec<Comment>> {
        Ok(self.all())
    }

    async fn update_status(&self, comment_id: &str, decision: ModerationDecision) -> Result<Comment> {
        let mut comments = self.comments.lock().expect("lock poisoned");
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| AppError::NotFound(format!("comment {}", comment_id)))?;
        comment.status = decision.target_status();
        comment.updated_at = Utc::now();
        Ok(comment.clone())
    }
}

fn setup() -> (Arc<InMemoryCommentsApi>, CommentQueries) {
    let api = Arc::new(InMemoryCommentsApi::default());
    let cache = Arc::new(QueryCache::new(Duration::from_secs(300)));
    let queries = CommentQueries::new(Arc::clone(&api) as Arc<dyn CommentsApi>, cache);
    (api, queries)
}

#[tokio::test]
async fn comment_submission_invalidates_and_refetches() {
    let (api, queries) = setup();

    // Prime the video-scoped cache
    let before = queries
        .comments_for_video(Some("v1"))
        .await
        .unwrap()
        .into_ready()
        .unwrap();
    assert!(before.is_empty());
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 1);

    // Cached read: no extra remote call
    queries.comments_for_video(Some("v1")).await.unwrap();
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 1);

    // Submitting through the form invalidates the video-scoped list
    let mut form = CommentForm::new();
    form.set_text("what a film");
    let outcome = form.submit(Some("v1"), &queries).await;
    assert!(outcome.is_completed());
    assert_eq!(form.text(), "");

    // The next read refetches and sees the new (pending) comment
    let after = queries
        .comments_for_video(Some("v1"))
        .await
        .unwrap()
        .into_ready()
        .unwrap();
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].status, ModerationStatus::Pending);
}

#[tokio::test]
async fn general_comment_leaves_video_caches_alone() {
    let (api, queries) = setup();

    queries.comments_for_video(Some("v1")).await.unwrap();
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 1);

    let mut form = CommentForm::new();
    form.set_text("site-wide remark");
    assert!(form.submit(None, &queries).await.is_completed());

    // The v1 cache is still fresh: no refetch
    queries.comments_for_video(Some("v1")).await.unwrap();
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn moderation_advances_pending_and_only_pending() {
    let (_api, queries) = setup();

    let mut form = CommentForm::new();
    form.set_text("needs review");
    form.submit(Some("v1"), &queries).await;

    let pending = queries.all_comments().await.unwrap().remove(0);
    assert_eq!(pending.status, ModerationStatus::Pending);

    let approved = queries
        .moderate(&pending, ModerationDecision::Approve)
        .await
        .unwrap();
    assert_eq!(approved.status, ModerationStatus::Approved);

    // A decided comment cannot be moderated again
    let err = queries
        .moderate(&approved, ModerationDecision::Reject)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn pending_comments_are_hidden_from_other_viewers() {
    let (_api, queries) = setup();

    let mut form = CommentForm::new();
    form.set_text("my hot take");
    form.submit(Some("v1"), &queries).await;

    let comments = queries
        .comments_for_video(Some("v1"))
        .await
        .unwrap()
        .into_ready()
        .unwrap();

    let visible_to_author: Vec<_> = comments
        .iter()
        .filter(|c| c.is_visible_to(Some("u1")))
        .collect();
    let visible_to_stranger: Vec<_> = comments
        .iter()
        .filter(|c| c.is_visible_to(Some("u2")))
        .collect();

    assert_eq!(visible_to_author.len(), 1);
    assert!(visible_to_stranger.is_empty());
}

#[tokio::test]
async fn disabled_query_never_touches_the_service() {
    let (api, queries) = setup();
    let status = queries.comments_for_video(None).await.unwrap();
    assert!(status.is_disabled());
    assert_eq!(api.video_list_calls.load(Ordering::SeqCst), 0);
}
