/// Share link records and their engagement detail
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shareable link to a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLink {
    pub id: String,
    pub video_id: String,
    pub url: String,
    /// `None` never expires; expiry math is the server's job
    pub expires_in_days: Option<u32>,
    pub view_count: u64,
    pub created_at: DateTime<Utc>,
}

/// One view of a shared link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareLinkView {
    pub viewed_at: DateTime<Utc>,
    pub ip: String,
    pub unique: bool,
    pub referrer: Option<String>,
}

/// Share link creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShareLinkRequest {
    pub video_id: String,
    pub expires_in_days: Option<u32>,
}

/// View recording payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordShareViewRequest {
    pub ip: String,
    pub referrer: Option<String>,
}
