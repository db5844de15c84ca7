/// Marquee client core
///
/// The typed, framework-independent layer behind the Marquee web front-end:
/// form validation schemas, a cache-aware data-access layer over the remote
/// platform API, per-screen submission controllers, session state, local
/// persistence, and the admin bulk export.
///
/// # Modules
///
/// - `models`: Records exchanged with the remote API
/// - `validation`: Per-form schemas (pure, synchronous)
/// - `services`: One service function per remote operation
/// - `queries`: Cache-aware query/mutation wrappers per domain
/// - `forms`: Form-state machines and submission glue
/// - `session`: Authentication state and the intended-path rule
/// - `storage`: Local persisted state (dark mode, signup draft)
/// - `export`: Spreadsheet export artifact
/// - `routes`: Semantic navigation surface
/// - `context`: Composition root owning config, session, and theme
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod queries;
pub mod routes;
pub mod services;
pub mod session;
pub mod storage;
pub mod telemetry;
pub mod validation;
pub mod validators;

pub use config::Config;
pub use context::AppContext;
pub use error::{AppError, Result};
