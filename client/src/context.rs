//! Application context: the composition root.
//!
//! Owns what used to be scattered globals in a front-end shell: config,
//! session state, the theme flag, and local persistence. Constructed once
//! at startup; there is no teardown beyond process exit.

use std::sync::Arc;

use crate::config::Config;
use crate::session::AuthSession;
use crate::storage::{KeyValueStore, LocalState};

pub struct AppContext {
    pub config: Config,
    pub session: AuthSession,
    pub local: LocalState,
    dark_mode: bool,
}

impl AppContext {
    /// Build the context, reading the persisted dark-mode flag (default
    /// false when absent or unreadable).
    pub fn initialize(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let local = LocalState::new(store);
        let dark_mode = local.dark_mode();
        Self {
            config,
            session: AuthSession::new(),
            local,
            dark_mode,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the theme and persist the choice (best-effort)
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
        self.local.set_dark_mode(enabled);
    }
}
