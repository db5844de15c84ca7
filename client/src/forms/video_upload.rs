//! Admin video upload/edit screen controller

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::{CreateVideoRequest, UpdateVideoRequest};
use crate::queries::VideoQueries;
use crate::routes::Route;
use crate::validation;

/// Whether the screen creates a new video or edits an existing one
#[derive(Debug, Clone)]
pub enum VideoUploadMode {
    Create,
    Edit { video_id: String },
}

pub struct VideoUploadForm {
    mode: VideoUploadMode,
    state: FormState,
}

impl VideoUploadForm {
    pub fn new(mode: VideoUploadMode) -> Self {
        Self {
            mode,
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Submit a new video. Creation navigates back to the admin catalog.
    pub async fn submit_create(
        &mut self,
        input: &CreateVideoRequest,
        videos: &VideoQueries,
    ) -> SubmitOutcome {
        if !matches!(self.mode, VideoUploadMode::Create) {
            return SubmitOutcome::Failed {
                notification: Notification::error("this screen edits an existing video"),
            };
        }
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::video_upload::validate(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match videos.create(input).await {
            Ok(video) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(format!("\"{}\" uploaded", video.title)),
                    navigate_to: Some(Route::AdminVideos),
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.state.apply(FormEvent::MutationFailed(message.clone()));
                SubmitOutcome::Failed {
                    notification: Notification::error(message),
                }
            }
        }
    }

    /// Submit edits. Updating in place stays on the screen.
    pub async fn submit_update(
        &mut self,
        input: &UpdateVideoRequest,
        videos: &VideoQueries,
    ) -> SubmitOutcome {
        let VideoUploadMode::Edit { video_id } = self.mode.clone() else {
            return SubmitOutcome::Failed {
                notification: Notification::error("this screen uploads a new video"),
            };
        };
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::video_upload::validate_update(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match videos.update(&video_id, input).await {
            Ok(video) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(format!("\"{}\" saved", video.title)),
                    navigate_to: None,
                }
            }
            Err(e) => {
                let message = e.to_string();
                self.state.apply(FormEvent::MutationFailed(message.clone()));
                SubmitOutcome::Failed {
                    notification: Notification::error(message),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{ThumbnailSource, Video};
    use crate::services::VideosApi;
    use async_trait::async_trait;
    use chrono::Utc;
    use query_cache::QueryCache;
    use std::sync::Arc;
    use std::time::Duration;

    struct FakeVideosApi;

    #[async_trait]
    impl VideosApi for FakeVideosApi {
        async fn list(&self) -> Result<Vec<Video>> {
            Ok(vec![])
        }

        async fn get(&self, _video_id: &str) -> Result<Video> {
            unimplemented!("not exercised")
        }

        async fn create(&self, req: &CreateVideoRequest) -> Result<Video> {
            Ok(video("v-new", &req.title))
        }

        async fn update(&self, video_id: &str, _req: &UpdateVideoRequest) -> Result<Video> {
            Ok(video(video_id, "edited"))
        }

        async fn soft_delete(&self, _video_id: &str) -> Result<Video> {
            unimplemented!("not exercised")
        }
    }

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.into(),
            title: title.into(),
            genre: "drama".into(),
            duration: "90:00".into(),
            video_url: "https://e.com/v".into(),
            trailer_url: "https://e.com/t".into(),
            preroll_url: "https://e.com/p".into(),
            thumbnail_url: "https://e.com/i".into(),
            description: None,
            synopsis: None,
            slideshow: false,
            tags: None,
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn queries() -> VideoQueries {
        VideoQueries::new(
            Arc::new(FakeVideosApi),
            Arc::new(QueryCache::new(Duration::from_secs(300))),
        )
    }

    fn valid_create() -> CreateVideoRequest {
        CreateVideoRequest {
            title: "The Long Cut".into(),
            genre: "Documentary".into(),
            duration: "92:30".into(),
            video_url: "https://cdn.example.com/v.mp4".into(),
            trailer_url: "https://cdn.example.com/t.mp4".into(),
            preroll_url: "https://cdn.example.com/p.mp4".into(),
            thumbnail: ThumbnailSource::Url("https://cdn.example.com/i.jpg".into()),
            description: None,
            synopsis: None,
            slideshow: false,
            tags: None,
        }
    }

    #[tokio::test]
    async fn test_create_navigates_away() {
        let mut form = VideoUploadForm::new(VideoUploadMode::Create);
        let outcome = form.submit_create(&valid_create(), &queries()).await;
        match outcome {
            SubmitOutcome::Completed { navigate_to, .. } => {
                assert_eq!(navigate_to, Some(Route::AdminVideos));
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_stays_on_screen() {
        let mut form = VideoUploadForm::new(VideoUploadMode::Edit {
            video_id: "v1".into(),
        });
        let outcome = form
            .submit_update(
                &UpdateVideoRequest {
                    title: Some("new title".into()),
                    ..Default::default()
                },
                &queries(),
            )
            .await;
        match outcome {
            SubmitOutcome::Completed { navigate_to, .. } => assert_eq!(navigate_to, None),
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_duration_rejected_before_mutation() {
        let mut form = VideoUploadForm::new(VideoUploadMode::Create);
        let mut input = valid_create();
        input.duration = "1:60".into();
        let outcome = form.submit_create(&input, &queries()).await;
        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    }
}
