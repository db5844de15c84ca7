//! Admin playlist create/edit controller

use super::state::{FormEvent, FormState};
use super::{Notification, SubmitOutcome};
use crate::models::{CreatePlaylistRequest, UpdatePlaylistRequest};
use crate::queries::PlaylistQueries;
use crate::routes::Route;
use crate::validation;

pub struct PlaylistForm {
    state: FormState,
}

impl Default for PlaylistForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Create a playlist; success navigates to its details screen
    pub async fn submit_create(
        &mut self,
        input: &CreatePlaylistRequest,
        playlists: &PlaylistQueries,
    ) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::playlist::validate(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match playlists.create(input).await {
            Ok(playlist) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(format!("\"{}\" created", playlist.title)),
                    navigate_to: Some(Route::PlaylistDetails { id: playlist.id }),
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

    /// Edit a playlist in place; success stays on the screen
    pub async fn submit_update(
        &mut self,
        playlist_id: &str,
        input: &UpdatePlaylistRequest,
        playlists: &PlaylistQueries,
    ) -> SubmitOutcome {
        if !self.state.can_submit() {
            return SubmitOutcome::NotSubmitted;
        }
        self.state.apply(FormEvent::Submit);

        if let Err(errors) = validation::playlist::validate_update(input) {
            self.state.apply(FormEvent::ValidationFailed(errors.clone()));
            return SubmitOutcome::Rejected(errors);
        }
        self.state.apply(FormEvent::ValidationPassed);

        match playlists.update(playlist_id, input).await {
            Ok(playlist) => {
                self.state.apply(FormEvent::MutationSucceeded);
                SubmitOutcome::Completed {
                    notification: Notification::success(format!("\"{}\" saved", playlist.title)),
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
