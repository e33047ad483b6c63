use colored::Colorize;

use crate::core::ISO_DATE_FORMAT;
use crate::features::nlp::{CustomerLookup, ParsedQuery};
use crate::features::report::ChatReply;

/// Format a parsed query for humans
pub fn format_query_pretty(query: &ParsedQuery) -> String {
    let mut output = format!("{}: {}\n", "Intent".dimmed(), query.intent().to_string().bold());

    match query {
        ParsedQuery::Unknown { message } => {
            output.push_str(&format!("  {}\n", message.dimmed()));
        },
        ParsedQuery::Payroll(period) => {
            output.push_str(&format!("  {}: {}\n", "Period".dimmed(), period.period_name.cyan()));
            output.push_str(&format!(
                "  {}: {}\n",
                "From".dimmed(),
                period.start_date().format(ISO_DATE_FORMAT).to_string().yellow()
            ));
            output.push_str(&format!(
                "  {}: {}\n",
                "To".dimmed(),
                period.end_date().format(ISO_DATE_FORMAT).to_string().yellow()
            ));
        },
        ParsedQuery::Customer(CustomerLookup::Name(name)) => {
            output.push_str(&format!("  {}: {}\n", "Customer".dimmed(), name.green()));
        },
        ParsedQuery::Customer(CustomerLookup::Missing(err)) => {
            output.push_str(&format!("  {}: {}\n", "error".red().bold(), err.message()));
        },
    }

    output
}

/// Format a chat reply for humans
pub fn format_reply_pretty(reply: &ChatReply) -> String {
    reply.message.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::{parse_query, CUSTOMER_GUIDANCE};
    use chrono::NaiveDate;

    fn plain(query: &str) -> String {
        colored::control::set_override(false);
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        format_query_pretty(&parse_query(query, today))
    }

    #[test]
    fn test_pretty_payroll() {
        let output = plain("payroll this month");
        assert!(output.contains("payroll"));
        assert!(output.contains("this month"));
        assert!(output.contains("2024-02-01"));
        assert!(output.contains("2024-02-29"));
    }

    #[test]
    fn test_pretty_customer() {
        let output = plain("orders for alice johnson");
        assert!(output.contains("Customer: Alice Johnson"));
    }

    #[test]
    fn test_pretty_customer_missing() {
        let output = plain("orders");
        assert!(output.contains(CUSTOMER_GUIDANCE));
    }

    #[test]
    fn test_pretty_reply_passthrough() {
        let reply = ChatReply::ok("No payroll data found for this week.");
        assert_eq!(format_reply_pretty(&reply), "No payroll data found for this week.");
    }

    #[test]
    fn test_pretty_reply_guidance_has_no_error_prefix() {
        colored::control::set_override(false);
        let reply = ChatReply::ok(CUSTOMER_GUIDANCE);
        let output = format_reply_pretty(&reply);
        assert_eq!(output, CUSTOMER_GUIDANCE);
        assert!(!output.starts_with("error"));
    }
}
