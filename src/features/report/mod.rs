//! Chat replies built from parsed queries.
//!
//! This is the request-handling side: it takes a [`ParsedQuery`], reads
//! the rows it needs from a [`ReportSource`], and renders the message the
//! user sees.

mod customer;
mod format;
mod payroll;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::ReportSource;
use crate::error::PaychatError;
use crate::features::nlp::{parse_query, CustomerLookup, ParsedQuery};

pub use customer::customer_orders;
pub use format::format_currency;
pub use payroll::payroll_summary;

/// A reply to one chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub message: String,
}

impl ChatReply {
    /// A successful reply carrying `message`.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Answer an already-parsed query.
///
/// Help and guidance results are returned as-is without touching `source`.
///
/// # Errors
///
/// Returns an error if the report source fails.
pub fn answer<S: ReportSource + ?Sized>(
    query: &ParsedQuery,
    source: &S,
) -> Result<ChatReply, PaychatError> {
    let message = match query {
        ParsedQuery::Unknown { message } => (*message).to_string(),
        ParsedQuery::Customer(CustomerLookup::Missing(err)) => err.message().to_string(),
        ParsedQuery::Payroll(period) => payroll_summary(source, period)?,
        ParsedQuery::Customer(CustomerLookup::Name(name)) => customer_orders(source, name)?,
    };

    Ok(ChatReply::ok(message))
}

/// Parse a chat message and answer it.
///
/// # Errors
///
/// Returns [`PaychatError::InvalidInput`] for an empty message, or an error
/// if the report source fails.
pub fn ask<S: ReportSource + ?Sized>(
    text: &str,
    today: NaiveDate,
    source: &S,
) -> Result<ChatReply, PaychatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(PaychatError::InvalidInput("Empty query".to_string()));
    }

    let query = parse_query(text, today);
    info!(intent = %query.intent(), "answering chat message");
    answer(&query, source)
}
