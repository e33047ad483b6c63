//! Customer order lookup replies.

use std::fmt::Write as _;

use tracing::debug;

use super::format::{currency_or_na, or_na};
use crate::core::{OrderRecord, ReportSource};
use crate::error::PaychatError;

/// Look up orders for a customer and describe them.
///
/// A single match gets a detailed card; several matches get a compact list.
///
/// # Errors
///
/// Returns an error if the report source fails.
pub fn customer_orders<S: ReportSource + ?Sized>(
    source: &S,
    customer_name: &str,
) -> Result<String, PaychatError> {
    let orders = source.orders_for_customer(customer_name)?;
    debug!(customer = customer_name, matches = orders.len(), "fetched customer orders");

    Ok(match orders.as_slice() {
        [] => format!("No orders found for customer matching '{customer_name}'."),
        [order] => order_card(order),
        many => order_list(many),
    })
}

fn order_card(order: &OrderRecord) -> String {
    let mut out = format!("🔍 **Order Found for {}**\n\n", order.customer_name);
    let _ = writeln!(out, "**Project ID:** {}", order.pid);
    let _ = writeln!(out, "**Email:** {}", or_na(order.email.as_deref()));
    let _ = writeln!(out, "**Phone:** {}", or_na(order.phone.as_deref()));
    let _ = writeln!(out, "**Contract Price:** {}", currency_or_na(order.contract_price));
    let _ = writeln!(out, "**System Size:** {}", or_na(order.system_size.as_deref()));
    let _ = writeln!(out, "**Stage:** {}", or_na(order.stage.as_deref()));
    let _ = writeln!(out, "**Redline:** {}", or_na(order.redline.as_deref()));
    let _ = write!(out, "**Closer:** {}", or_na(order.closer_name.as_deref()));
    out
}

fn order_list(orders: &[OrderRecord]) -> String {
    let mut out = format!("🔍 **{} Orders Found**", orders.len());

    for order in orders {
        let _ = write!(out, "\n\n**{}** (PID: {})", order.customer_name, order.pid);
        let _ = write!(out, "\n- Contract: {}", currency_or_na(order.contract_price));
        let _ = write!(out, "\n- System: {}", or_na(order.system_size.as_deref()));
        let _ = write!(out, "\n- Stage: {}", or_na(order.stage.as_deref()));
        let _ = write!(out, "\n- Closer: {}", or_na(order.closer_name.as_deref()));
    }

    out
}
