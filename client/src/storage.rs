//! Local persisted state.
//!
//! Two fixed keys survive restarts: the dark-mode flag and a drafted signup
//! payload. Persistence is best-effort: a missing or corrupted entry reads
//! as absent with a warning, and a failed write is logged and swallowed.
//! Callers never see a storage error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{AppError, Result};
use crate::models::SignupProfile;

/// Key under which the dark-mode flag is persisted
pub const DARK_MODE_KEY: &str = "marquee.dark_mode";
/// Key under which the drafted signup payload is persisted
pub const SIGNUP_DRAFT_KEY: &str = "marquee.signup_draft";

/// Minimal string key/value store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed store: one file per key inside a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| AppError::Storage(e.to_string()))?;
        fs::write(self.path(key), value).map_err(|e| AppError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(e.to_string())),
        }
    }
}

/// Drafted signup payload.
///
/// The password is deliberately not part of the draft; only harmless form
/// fields are persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: SignupProfile,
}

/// Typed access to the persisted entries, degrading softly on any failure
pub struct LocalState {
    store: std::sync::Arc<dyn KeyValueStore>,
}

impl LocalState {
    pub fn new(store: std::sync::Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the dark-mode flag; anything unreadable counts as `false`
    pub fn dark_mode(&self) -> bool {
        match self.store.get(DARK_MODE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(flag) => flag,
                Err(e) => {
                    warn!(error = %e, "corrupted dark-mode entry, defaulting to light");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "failed to read dark-mode flag, defaulting to light");
                false
            }
        }
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        if let Err(e) = self.store.put(DARK_MODE_KEY, if enabled { "true" } else { "false" }) {
            warn!(error = %e, "failed to persist dark-mode flag");
        }
    }

    /// Read the drafted signup payload, if one survives
    pub fn signup_draft(&self) -> Option<SignupDraft> {
        match self.store.get(SIGNUP_DRAFT_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<SignupDraft>(&raw) {
                Ok(draft) => Some(draft),
                Err(e) => {
                    warn!(error = %e, "corrupted signup draft, discarding");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read signup draft");
                None
            }
        }
    }

    pub fn save_signup_draft(&self, draft: &SignupDraft) {
        match serde_json::to_string(draft) {
            Ok(raw) => {
                if let Err(e) = self.store.put(SIGNUP_DRAFT_KEY, &raw) {
                    warn!(error = %e, "failed to persist signup draft");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize signup draft"),
        }
    }

    pub fn clear_signup_draft(&self) {
        if let Err(e) = self.store.remove(SIGNUP_DRAFT_KEY) {
            warn!(error = %e, "failed to clear signup draft");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn draft() -> SignupDraft {
        SignupDraft {
            email: "member@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            profile: SignupProfile {
                state_region: "Bavaria".into(),
                country: "Germany".into(),
                utilization_purpose: "Film club".into(),
            },
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("k").unwrap(), None);
        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".into()));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // Removing a missing key is not an error
        store.remove("k").unwrap();
    }

    #[test]
    fn test_dark_mode_defaults_false() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalState::new(Arc::new(FileStore::new(dir.path())));
        assert!(!local.dark_mode());
    }

    #[test]
    fn test_dark_mode_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalState::new(Arc::new(FileStore::new(dir.path())));
        local.set_dark_mode(true);
        assert!(local.dark_mode());
        local.set_dark_mode(false);
        assert!(!local.dark_mode());
    }

    #[test]
    fn test_corrupted_dark_mode_fails_soft() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path()));
        store.put(DARK_MODE_KEY, "{garbage").unwrap();
        let local = LocalState::new(store);
        assert!(!local.dark_mode());
    }

    #[test]
    fn test_signup_draft_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let local = LocalState::new(Arc::new(FileStore::new(dir.path())));

        assert_eq!(local.signup_draft(), None);
        local.save_signup_draft(&draft());
        assert_eq!(local.signup_draft(), Some(draft()));
        local.clear_signup_draft();
        assert_eq!(local.signup_draft(), None);
    }

    #[test]
    fn test_corrupted_draft_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(FileStore::new(dir.path()));
        store.put(SIGNUP_DRAFT_KEY, "not json").unwrap();
        let local = LocalState::new(store);
        assert_eq!(local.signup_draft(), None);
    }

    #[test]
    fn test_failing_store_never_surfaces_errors() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(AppError::Storage("disk on fire".into())));
        mock.expect_put()
            .returning(|_, _| Err(AppError::Storage("disk on fire".into())));
        mock.expect_remove()
            .returning(|_| Err(AppError::Storage("disk on fire".into())));

        let local = LocalState::new(Arc::new(mock));
        assert!(!local.dark_mode());
        assert_eq!(local.signup_draft(), None);
        local.set_dark_mode(true);
        local.save_signup_draft(&draft());
        local.clear_signup_draft();
    }
}
