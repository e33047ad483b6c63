//! Output formatting for paychat.
//!
//! This module provides formatters for parsed queries and chat replies.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PaychatError;
use crate::features::nlp::ParsedQuery;
use crate::features::report::ChatReply;

pub use json::*;
pub use pretty::*;

/// Format a parsed query based on output format
///
/// # Errors
///
/// Returns `PaychatError::Parse` if JSON serialization fails.
pub fn format_query(query: &ParsedQuery, format: OutputFormat) -> Result<String, PaychatError> {
    match format {
        OutputFormat::Pretty => Ok(format_query_pretty(query)),
        OutputFormat::Json => format_query_json(query),
    }
}

/// Format a chat reply based on output format
///
/// # Errors
///
/// Returns `PaychatError::Parse` if JSON serialization fails.
pub fn format_reply(reply: &ChatReply, format: OutputFormat) -> Result<String, PaychatError> {
    match format {
        OutputFormat::Pretty => Ok(format_reply_pretty(reply)),
        OutputFormat::Json => format_reply_json(reply),
    }
}
