//! Tracing bootstrap for embedding applications.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// Filter directives come from `RUST_LOG` (default `info`). Call once from
/// the application shell; a second call returns an error from the
/// subscriber registry and is safe to ignore in tests.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
