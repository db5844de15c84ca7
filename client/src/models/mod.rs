//! Plain records exchanged with the remote API.
//!
//! Entities carry no behavior beyond field validation; request payloads are
//! separate types so a form can never smuggle server-owned fields (a new
//! comment, for example, has no way to carry a moderation status).

pub mod comment;
pub mod feedback;
pub mod playlist;
pub mod share_link;
pub mod user;
pub mod video;
pub mod watch_session;

pub use comment::{Comment, CreateCommentRequest, ModerationDecision, ModerationStatus};
pub use feedback::{FeedbackRatings, FeedbackRequest, FeedbackScope, FeedbackSubmission};
pub use playlist::{CreatePlaylistRequest, Playlist, PlaylistTag, UpdatePlaylistRequest};
pub use share_link::{CreateShareLinkRequest, RecordShareViewRequest, ShareLink, ShareLinkView};
pub use user::{
    Gender, RequestPasswordResetRequest, ResetPasswordRequest, SignInRequest, SignupProfile,
    SignupRequest, UpdateProfileRequest, User, UserSummary,
};
pub use video::{
    CreateVideoRequest, ThumbnailSource, UpdateVideoRequest, UploadedFile, Video, VideoSummary,
};
pub use watch_session::{
    ClientMetadata, StartWatchSessionRequest, WatchEvent, WatchEventRequest, WatchProgressRequest,
    WatchSession,
};
