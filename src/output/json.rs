//! JSON output formatting for paychat.

use serde::Serialize;

use crate::error::PaychatError;
use crate::features::nlp::ParsedQuery;
use crate::features::report::ChatReply;

/// Format a parsed query as JSON, keyed by `query_type`.
///
/// # Errors
///
/// Returns `PaychatError::Parse` if JSON serialization fails.
pub fn format_query_json(query: &ParsedQuery) -> Result<String, PaychatError> {
    to_json(query)
}

/// Format a chat reply as `{"success": ..., "message": ...}`.
///
/// # Errors
///
/// Returns `PaychatError::Parse` if JSON serialization fails.
pub fn format_reply_json(reply: &ChatReply) -> Result<String, PaychatError> {
    to_json(reply)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PaychatError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PaychatError> {
    Ok(serde_json::to_string_pretty(value)?)
}
