//! The structured result of parsing one chat message.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::customer::{extract_customer, ExtractionError};
use super::intent::{classify, Intent};
use super::period::{resolve_period, ResolvedPeriod};

/// Help text returned for messages that are neither payroll nor customer questions.
pub const HELP_MESSAGE: &str = "I can help you with payroll queries (this week, this month, this year, last month, or custom date ranges) and customer order lookups. Try asking \"Show me payroll for this month\" or \"Find orders for Alice Johnson\".";

/// Outcome of looking for a customer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLookup {
    /// A normalized customer name, longer than two characters.
    Name(String),
    /// No usable name; the caller should show guidance instead of querying.
    Missing(ExtractionError),
}

/// A parsed chat message.
///
/// Each variant carries exactly the fields its query type needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// Not a recognised question.
    Unknown { message: &'static str },
    /// A payroll summary over a resolved period.
    Payroll(ResolvedPeriod),
    /// An order lookup for a customer.
    Customer(CustomerLookup),
}

impl ParsedQuery {
    /// The intent this query was classified as.
    #[must_use]
    pub const fn intent(&self) -> Intent {
        match self {
            Self::Unknown { .. } => Intent::Unknown,
            Self::Payroll(_) => Intent::Payroll,
            Self::Customer(_) => Intent::Customer,
        }
    }

    /// Text to show the user directly, for help and guidance results.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Unknown { message } => Some(*message),
            Self::Customer(CustomerLookup::Missing(err)) => Some(err.message()),
            Self::Payroll(_) | Self::Customer(CustomerLookup::Name(_)) => None,
        }
    }

    /// Whether this is a failed customer extraction.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Customer(CustomerLookup::Missing(_)))
    }

    /// The extracted customer name, if any.
    #[must_use]
    pub fn customer_name(&self) -> Option<&str> {
        match self {
            Self::Customer(CustomerLookup::Name(name)) => Some(name.as_str()),
            _ => None,
        }
    }
}

/// Parse a chat message into a [`ParsedQuery`].
///
/// Never fails: every input produces a well-formed result. `today` anchors
/// relative periods such as "this month".
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use paychat::features::nlp::{parse_query, Intent};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let query = parse_query("Find orders for Alice Johnson", today);
/// assert_eq!(query.customer_name(), Some("Alice Johnson"));
///
/// let query = parse_query("payroll last month", today);
/// assert_eq!(query.intent(), Intent::Payroll);
/// ```
#[must_use]
pub fn parse_query(text: &str, today: NaiveDate) -> ParsedQuery {
    let text = text.trim();

    match classify(text) {
        Intent::Payroll => ParsedQuery::Payroll(resolve_period(text, today)),
        Intent::Customer => ParsedQuery::Customer(match extract_customer(text) {
            Ok(name) => CustomerLookup::Name(name),
            Err(err) => CustomerLookup::Missing(err),
        }),
        Intent::Unknown => ParsedQuery::Unknown {
            message: HELP_MESSAGE,
        },
    }
}

/// Flat JSON shape keyed by `query_type`.
#[derive(Serialize)]
struct QueryRecord<'a> {
    query_type: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    customer_name: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl Serialize for ParsedQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let period = match self {
            Self::Payroll(period) => Some(period),
            _ => None,
        };

        QueryRecord {
            query_type: self.intent(),
            start_date: period.map(ResolvedPeriod::start_date),
            end_date: period.map(ResolvedPeriod::end_date),
            period_name: period.map(|p| p.period_name.as_str()),
            customer_name: self.customer_name(),
            error: self.is_error(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
