//! Persisted session token storage.
//!
//! The persisted token is the only piece of state that survives a process
//! restart, and it is the sole input to the route guard.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the persisted token store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("token store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("no platform data directory available")]
    NoDataDir,
}

/// Persisted key-value slot holding the session token.
///
/// Absence of a stored value is equivalent to "no session".
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous value.
    fn store(&mut self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Removing an absent token succeeds.
    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Token persisted as a single file on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the token under the platform data directory.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dir.join("campaign-console").join("session-token")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => Ok(Some(token)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&mut self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process token store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already persisted, as after a previous run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.token.clone())
    }

    fn store(&mut self, token: &str) -> Result<(), StorageError> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.token = None;
        Ok(())
    }
}
