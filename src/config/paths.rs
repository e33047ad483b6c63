//! Path resolution for paychat configuration and data files.
//!
//! All paychat data is stored in `~/.paychat/`:
//! - `config.yaml` - Main configuration file
//! - `paychat.db` - `SQLite` report database

use std::path::PathBuf;

use crate::error::PaychatError;

/// Paths to paychat configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.paychat/`
    pub root: PathBuf,
    /// Config file: `~/.paychat/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.paychat/paychat.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PaychatError> {
        let home = std::env::var("HOME").map_err(|_| {
            PaychatError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".paychat")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("paychat.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PaychatError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PaychatError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".paychat")))
    }
}
