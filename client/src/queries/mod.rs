//! Cache-aware query/mutation wrappers per domain.
//!
//! Queries read through the shared [`query_cache::QueryCache`] with the
//! configured staleness window and are *disabled* (no fetch, no error) when
//! their scoping id is absent. Mutations call the remote service, propagate
//! its error untouched, and invalidate exactly the key families the change
//! affects; the next read of an invalidated key refetches.

pub mod comments;
pub mod feedback;
pub mod playlists;
pub mod user_content;
pub mod videos;
pub mod watch;

pub use comments::CommentQueries;
pub use feedback::FeedbackQueries;
pub use playlists::PlaylistQueries;
pub use user_content::UserContentQueries;
pub use videos::VideoQueries;
pub use watch::{ShareLinkQueries, WatchTracker};

/// Resource names used in cache keys
pub(crate) mod resource {
    pub const VIDEOS: &str = "videos";
    pub const PLAYLISTS: &str = "playlists";
    pub const COMMENTS: &str = "comments";
    pub const FEEDBACK: &str = "feedback";
    pub const USERS: &str = "users";
    pub const SHARE_LINKS: &str = "share_links";
}

/// Result of a query operation.
///
/// `Disabled` means the required parameter was absent and no fetch was
/// performed; callers must not treat it as an error.
#[derive(Debug)]
pub enum QueryStatus<T> {
    Disabled,
    Ready(T),
}

impl<T> QueryStatus<T> {
    pub fn is_disabled(&self) -> bool {
        matches!(self, QueryStatus::Disabled)
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            QueryStatus::Ready(value) => Some(value),
            QueryStatus::Disabled => None,
        }
    }
}
