use thiserror::Error;

/// Errors surfaced by cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// Value could not be serialized for storage
    #[error("failed to serialize cache value: {0}")]
    Serialize(#[from] serde_json::Error),
}
