//! Account store and JSON file persistence.
//!
//! This module provides:
//! - `AccountStore`: the lock-guarded account table shared by every handler
//! - `Persist`: the seam through which the table is written out
//! - `JsonFile`: persistence to a JSON file with write-temp-then-rename

use crate::models::account::Accounts;
use parking_lot::Mutex;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Errors from reading or writing the accounts file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize accounts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for the full account table after every mutation.
pub trait Persist: Send + Sync {
    fn persist(&self, accounts: &Accounts) -> Result<(), StoreError>;
}

/// Persists the account table as a pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the account table.
    ///
    /// # Errors
    ///
    /// - `Read`: the file is missing or unreadable
    /// - `Parse`: the file is not a JSON object of accounts
    pub fn load(&self) -> Result<Accounts, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Sibling path the table is staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Persist for JsonFile {
    /// Write the table to a temp file next to the target, then rename it
    /// over the target so readers never see a half-written file.
    fn persist(&self, accounts: &Accounts) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(accounts)?;
        let staging = self.staging_path();

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&staging, json).map_err(write_err)?;
        fs::rename(&staging, &self.path).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), accounts = accounts.len(), "Accounts persisted");
        Ok(())
    }
}

/// The shared account table.
///
/// All mutations go through [`AccountStore::update`], which holds the lock
/// across both the mutation and the persist, so the file always reflects a
/// complete mutation.
pub struct AccountStore {
    accounts: Mutex<Accounts>,
    sink: Box<dyn Persist>,
}

impl AccountStore {
    pub fn new(accounts: Accounts, sink: impl Persist + 'static) -> Self {
        Self {
            accounts: Mutex::new(accounts),
            sink: Box::new(sink),
        }
    }

    /// Load the table from a JSON file and persist back to the same file.
    pub fn open(file: JsonFile) -> Result<Self, StoreError> {
        let accounts = file.load()?;
        tracing::info!(path = %file.path().display(), accounts = accounts.len(), "Accounts loaded");
        Ok(Self::new(accounts, file))
    }

    /// Copy of the current table.
    pub fn snapshot(&self) -> Accounts {
        self.accounts.lock().clone()
    }

    /// Run `f` on the table under the lock; if it succeeds, persist once.
    ///
    /// When `f` fails nothing is persisted. A persist failure is returned
    /// after the in-memory mutation has already happened.
    pub fn update<R, E>(&self, f: impl FnOnce(&mut Accounts) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut accounts = self.accounts.lock();
        let result = f(&mut accounts)?;
        self.sink.persist(&accounts)?;
        Ok(result)
    }
}
