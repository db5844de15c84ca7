//! Remote API boundary.
//!
//! One service function per remote operation, grouped per domain behind an
//! `async_trait` so the data-access layer and tests can swap the transport.
//! All HTTP goes through [`http::ApiClient`]; nothing here retries.

pub mod auth;
pub mod comments;
pub mod feedback;
pub mod http;
pub mod playlists;
pub mod share_links;
pub mod users;
pub mod videos;
pub mod watch_sessions;

pub use auth::{AuthApi, HttpAuthApi, SignInResponse, SignUpResponse};
pub use comments::{CommentsApi, HttpCommentsApi};
pub use feedback::{FeedbackApi, HttpFeedbackApi};
pub use http::ApiClient;
pub use playlists::{HttpPlaylistsApi, PlaylistsApi};
pub use share_links::{HttpShareLinksApi, ShareLinksApi};
pub use users::{HttpUsersApi, UsersApi};
pub use videos::{HttpVideosApi, VideosApi};
pub use watch_sessions::{HttpWatchSessionsApi, WatchSessionsApi};
