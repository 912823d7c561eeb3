//! User store: a JSON array of user records in a single file.
//!
//! Every mutating operation is a whole-file read-modify-write. There is no
//! locking against concurrent writers; the store is owned by the single
//! active session.

use std::io;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::UserRecord;

/// Errors that can occur against the user store file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist. Fatal at the entry point.
    #[error("user store not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The backing file could not be read or written.
    #[error("user store I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file is not a valid JSON array of user records.
    #[error("malformed user store: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Repository over the user store file.
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a repository over the given file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every user record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the backing file is absent,
    /// `StoreError::Malformed` if it does not parse.
    pub fn load_users(&self) -> Result<Vec<UserRecord>, StoreError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound(self.path.clone())
            } else {
                StoreError::Io(e)
            }
        })?;
        let users: Vec<UserRecord> = serde_json::from_str(&contents)?;
        tracing::debug!(count = users.len(), "loaded user store");
        Ok(users)
    }

    /// Overwrite the store with the given records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be written.
    pub fn save_users(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(users)?;
        std::fs::write(&self.path, contents)?;
        tracing::debug!(count = users.len(), "saved user store");
        Ok(())
    }

    /// Set the wallet of the first record whose username matches exactly,
    /// then rewrite the store.
    ///
    /// An unknown username updates no record; the file is still rewritten
    /// unchanged. This matches the store's established contract.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read or written.
    pub fn update_wallet(&self, username: &str, new_wallet: Decimal) -> Result<(), StoreError> {
        let mut users = self.load_users()?;
        match users.iter_mut().find(|u| u.username.as_str() == username) {
            Some(user) => {
                user.wallet = new_wallet;
                tracing::debug!(%username, wallet = %new_wallet, "wallet updated");
            }
            None => tracing::debug!(%username, "wallet update matched no record"),
        }
        self.save_users(&users)
    }
}
