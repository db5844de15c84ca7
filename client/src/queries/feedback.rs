//! Feedback queries

use std::sync::Arc;

use query_cache::{Lookup, QueryCache, QueryKey};
use tracing::info;

use super::resource;
use crate::error::Result;
use crate::models::{FeedbackRequest, FeedbackSubmission};
use crate::services::FeedbackApi;

pub struct FeedbackQueries {
    api: Arc<dyn FeedbackApi>,
    cache: Arc<QueryCache>,
}

impl FeedbackQueries {
    pub fn new(api: Arc<dyn FeedbackApi>, cache: Arc<QueryCache>) -> Self {
        Self { api, cache }
    }

    fn all_key() -> QueryKey {
        QueryKey::new(resource::FEEDBACK, "all")
    }

    /// Every submission, for the admin console
    pub async fn all_feedback(&self) -> Result<Vec<FeedbackSubmission>> {
        let key = Self::all_key();
        if let Lookup::Fresh(cached) = self.cache.get::<Vec<FeedbackSubmission>>(&key) {
            return Ok(cached);
        }

        let ticket = self.cache.begin_fetch(&key);
        let fetched = self.api.list_all().await?;
        self.cache.complete_fetch(&key, ticket, &fetched)?;
        Ok(fetched)
    }

    /// Submit a survey; submissions are one-shot and never edited
    pub async fn submit(&self, req: &FeedbackRequest) -> Result<FeedbackSubmission> {
        let submission = self.api.submit(req).await?;
        self.cache.invalidate_key(&Self::all_key());
        info!(submission_id = %submission.id, "feedback submitted");
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedbackRatings, FeedbackScope};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::time::Duration;

    struct FakeFeedbackApi;

    #[async_trait]
    impl FeedbackApi for FakeFeedbackApi {
        async fn submit(&self, req: &FeedbackRequest) -> Result<FeedbackSubmission> {
            Ok(FeedbackSubmission {
                id: "f1".into(),
                user_id: "u1".into(),
                scope: req.scope.clone(),
                ratings: req.ratings,
                text: req.text.clone(),
                created_at: Utc::now(),
            })
        }

        async fn list_all(&self) -> Result<Vec<FeedbackSubmission>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_submit_invalidates_admin_list() {
        let cache = Arc::new(QueryCache::new(Duration::from_secs(300)));
        let queries = FeedbackQueries::new(Arc::new(FakeFeedbackApi), Arc::clone(&cache));
        cache.insert(QueryKey::new("feedback", "all"), &1u32).unwrap();

        queries
            .submit(&FeedbackRequest {
                scope: FeedbackScope::General,
                ratings: FeedbackRatings {
                    overall: 5,
                    content: 5,
                    presentation: 5,
                    experience: 5,
                    recommendation: 5,
                },
                text: "y".repeat(250),
            })
            .await
            .unwrap();

        assert!(cache.is_stale(&QueryKey::new("feedback", "all")));
    }
}
