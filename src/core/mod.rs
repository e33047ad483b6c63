//! Core abstractions for paychat.
//!
//! Calendar helpers, report row types and the report source trait shared
//! by the query engine, the report layer and storage.

mod datetime;
mod records;
mod traits;

pub use datetime::{
    month_bounds, parse_iso_date, previous_month_bounds, week_bounds, year_bounds, DateRange,
    ISO_DATE_FORMAT,
};
pub use records::{OrderRecord, PayoutTypeTotal};
pub use traits::ReportSource;

#[cfg(test)]
pub use traits::MockReportSource;
