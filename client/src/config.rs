/// Configuration management for the client core
///
/// Settings are read from environment variables with development defaults;
/// the embedding shell decides how those variables get populated.
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    pub api: ApiConfig,
    /// Query cache settings
    pub cache: CacheConfig,
    /// Local persisted state settings
    pub storage: StorageConfig,
    /// Bulk export settings
    pub export: ExportConfig,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform API
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

/// Query cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Staleness window for cached query data, in seconds
    pub staleness_secs: u64,
}

impl CacheConfig {
    /// The staleness window as a `Duration`, ready for the query cache
    pub fn staleness(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.staleness_secs)
    }
}

/// Local persisted state settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted key/value entries
    pub dir: String,
}

/// Bulk export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Fixed filename prefix for exported workbooks
    pub prefix: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            api: ApiConfig {
                base_url: std::env::var("MARQUEE_API_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string()),
                timeout_ms: std::env::var("MARQUEE_API_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10_000),
            },
            cache: CacheConfig {
                staleness_secs: std::env::var("MARQUEE_CACHE_STALENESS_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(300),
            },
            storage: StorageConfig {
                dir: std::env::var("MARQUEE_STORAGE_DIR")
                    .unwrap_or_else(|_| ".marquee".to_string()),
            },
            export: ExportConfig {
                prefix: {
                    let prefix =
                        std::env::var("MARQUEE_EXPORT_PREFIX").unwrap_or_else(|_| "MARQUEE".to_string());
                    if prefix.trim().is_empty() {
                        return Err("MARQUEE_EXPORT_PREFIX cannot be blank".to_string());
                    }
                    prefix
                },
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_ms: 10_000,
            },
            cache: CacheConfig { staleness_secs: 300 },
            storage: StorageConfig {
                dir: ".marquee".to_string(),
            },
            export: ExportConfig {
                prefix: "MARQUEE".to_string(),
            },
        }
    }
}
