//! Chat message understanding for payroll and customer reports.
//!
//! A message is classified by keyword presence, then handed to the matching
//! extractor:
//! - "Show me payroll for this month" → payroll, the current calendar month
//! - "payroll from 2024-01-01 to 2024-01-31" → payroll, explicit range
//! - "Find orders for Alice Johnson" → customer "Alice Johnson"
//!
//! Everything here is pure: no I/O, no clock, no shared state.

mod customer;
mod intent;
mod normalize;
mod period;
mod query;
pub mod rules;

pub use customer::{extract_customer, ExtractionError, CUSTOMER_GUIDANCE};
pub use intent::{classify, Intent};
pub use normalize::{collapse_whitespace, normalize_name, title_case};
pub use period::{
    resolve_period, RelativePeriod, ResolvedPeriod, DEFAULT_PERIOD_NAME, RELATIVE_PERIODS,
};
pub use query::{parse_query, CustomerLookup, ParsedQuery, HELP_MESSAGE};
