//! The seam between chat replies and wherever report rows live.

use crate::core::{DateRange, OrderRecord, PayoutTypeTotal};
use crate::error::PaychatError;

/// A source of payroll and order rows for chat reports.
///
/// Implemented by [`crate::storage::Database`]; mocked in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ReportSource {
    /// Payout totals grouped by payout type for payouts dated inside `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn payroll_breakdown(&self, range: &DateRange) -> Result<Vec<PayoutTypeTotal>, PaychatError>;

    /// Number of distinct employees paid inside `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn employees_paid(&self, range: &DateRange) -> Result<u32, PaychatError>;

    /// Orders whose customer name contains `name`, ignoring case, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    fn orders_for_customer(&self, name: &str) -> Result<Vec<OrderRecord>, PaychatError>;
}
