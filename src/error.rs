//! Error types for paychat.

use thiserror::Error;

/// Errors that can occur outside the query engine.
///
/// Parsing a chat message never fails; these cover configuration, the
/// report data store, and output formatting.
#[derive(Debug, Error)]
pub enum PaychatError {
    /// Configuration could not be read, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The report database rejected an operation.
    #[error("Database error: {0}")]
    Database(String),

    /// Serialization or date parsing failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The caller supplied input that cannot be answered.
    #[error("{0}")]
    InvalidInput(String),

    /// Filesystem or terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PaychatError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for PaychatError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
