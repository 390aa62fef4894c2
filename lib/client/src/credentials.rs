//! Persistent credential store — a single bearer token on disk.
//!
//! Defaults to `~/.koma/token`. At most one token is stored; saving
//! overwrites, clearing is idempotent. A stored token is not known to be
//! valid until an authenticated call succeeds with it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default token path: `~/.koma/token`.
    pub fn default_path() -> PathBuf {
        koma_dir().join("token")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, replacing any prior one. Storage failures are
    /// reported to the caller, never swallowed.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    /// The stored token, if any.
    pub fn read(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Remove the stored token. Succeeds silently when nothing is stored.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn has_token(&self) -> bool {
        self.read().is_some()
    }
}

/// Return the Koma config directory (`~/.koma`).
pub(crate) fn koma_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".koma")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("token"))
    }

    #[test]
    fn save_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(!store.has_token());
        store.save("t1").unwrap();
        assert_eq!(store.read().as_deref(), Some("t1"));
        assert!(store.has_token());
    }

    #[test]
    fn save_overwrites_prior_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("old").unwrap();
        store.save("new").unwrap();
        assert_eq!(store.read().as_deref(), Some("new"));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save("t1").unwrap();
        store.clear().unwrap();
        assert!(!store.has_token());

        // Clearing again with nothing stored still succeeds.
        store.clear().unwrap();
        assert!(!store.has_token());
    }

    #[test]
    fn save_creates_missing_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("nested").join("token"));

        store.save("t1").unwrap();
        assert_eq!(store.read().as_deref(), Some("t1"));
    }
}
