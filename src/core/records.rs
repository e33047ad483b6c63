//! Row types returned by a report data source.

use serde::{Deserialize, Serialize};

/// Payroll totals for one payout type within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutTypeTotal {
    /// Payout type, e.g. "Commission" or "Bonus".
    pub payout_type: String,
    /// Sum of amounts; `None` when every amount in the group is null.
    pub total_amount: Option<f64>,
    /// Number of payout rows in the group.
    pub transaction_count: u32,
    /// Distinct employees paid within the group.
    pub employee_count: u32,
}

/// A customer order (project) with its closer resolved to a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Project id.
    pub pid: i64,
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contract_price: Option<f64>,
    pub system_size: Option<String>,
    pub stage: Option<String>,
    pub redline: Option<String>,
    /// Name of the employee who closed the order.
    pub closer_name: Option<String>,
}
