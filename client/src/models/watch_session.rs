/// Per-viewing telemetry records
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One viewing of a video.
///
/// Created at playback start, updated while playback progresses, never
/// deleted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSession {
    pub id: String,
    pub video_id: String,
    /// Absent for anonymous viewers
    pub user_id: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// 0.0-100.0, non-decreasing over the session
    pub percentage_watched: f32,
    pub events: Vec<WatchEvent>,
    pub client: ClientMetadata,
}

/// Discrete viewer action during playback (play, pause, seek, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEvent {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
    /// Position in the video when the event fired, in seconds
    pub position_seconds: f64,
}

/// Client environment captured at session start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientMetadata {
    pub user_agent: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub ip: String,
}

/// Session start payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartWatchSessionRequest {
    pub video_id: String,
    pub user_id: Option<String>,
    pub client: ClientMetadata,
}

/// Progress update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProgressRequest {
    pub percentage_watched: f32,
}

/// Event append payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchEventRequest {
    pub name: String,
    pub occurred_at: DateTime<Utc>,
    pub position_seconds: f64,
}
