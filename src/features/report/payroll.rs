//! Payroll summary replies.

use std::fmt::Write as _;

use tracing::debug;

use super::format::{count_noun, format_currency};
use crate::core::{ReportSource, ISO_DATE_FORMAT};
use crate::error::PaychatError;
use crate::features::nlp::ResolvedPeriod;

/// Summarize payroll paid within a resolved period.
///
/// # Errors
///
/// Returns an error if the report source fails.
pub fn payroll_summary<S: ReportSource + ?Sized>(
    source: &S,
    period: &ResolvedPeriod,
) -> Result<String, PaychatError> {
    let rows = source.payroll_breakdown(&period.range)?;
    debug!(period = %period.period_name, groups = rows.len(), "fetched payroll breakdown");

    if rows.is_empty() {
        return Ok(format!("No payroll data found for {}.", period.period_name));
    }

    let total: f64 = rows.iter().filter_map(|row| row.total_amount).sum();

    let mut out = format!("📊 **Payroll Summary for {}**\n\n", period.period_name);
    let _ = write!(out, "**Total Amount:** {}\n\n", format_currency(total));
    out.push_str("**Breakdown by Type:**\n");

    for row in &rows {
        let _ = writeln!(
            out,
            "- **{}:** {} ({})",
            row.payout_type,
            format_currency(row.total_amount.unwrap_or(0.0)),
            count_noun(row.transaction_count, "transaction")
        );
    }

    let employees = source.employees_paid(&period.range)?;
    let _ = write!(out, "\n**Employees Paid:** {employees}");
    let _ = write!(
        out,
        "\n**Date Range:** {} to {}",
        period.start_date().format(ISO_DATE_FORMAT),
        period.end_date().format(ISO_DATE_FORMAT)
    );

    Ok(out)
}
