//! Intent classification by keyword presence.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{contains_any, CUSTOMER_KEYWORDS, CUSTOMER_SCOPE_WORDS, PAYROLL_KEYWORDS};

/// What a chat message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Payroll totals over a date range.
    Payroll,
    /// Orders for a named customer.
    Customer,
    /// Anything else; answered with help text.
    Unknown,
}

impl Intent {
    /// Lowercase name, as used in JSON output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Payroll => "payroll",
            Self::Customer => "customer",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a chat message.
///
/// Payroll wins when only payroll keywords appear. When both payroll and
/// customer keywords appear, payroll still wins unless the text contains
/// "for" or "by" anywhere. Otherwise any customer keyword makes it a
/// customer query.
///
/// # Examples
///
/// ```
/// use paychat::features::nlp::{classify, Intent};
///
/// assert_eq!(classify("Show me payroll for this month"), Intent::Payroll);
/// assert_eq!(classify("payments for customer Acme"), Intent::Customer);
/// assert_eq!(classify("hello"), Intent::Unknown);
/// ```
#[must_use]
pub fn classify(text: &str) -> Intent {
    let text = text.trim().to_lowercase();

    let has_payroll = contains_any(&text, PAYROLL_KEYWORDS);
    let has_customer = contains_any(&text, CUSTOMER_KEYWORDS);

    let intent = if has_payroll && (!has_customer || !contains_any(&text, CUSTOMER_SCOPE_WORDS)) {
        Intent::Payroll
    } else if has_customer {
        Intent::Customer
    } else {
        Intent::Unknown
    };

    debug!(%intent, has_payroll, has_customer, "classified message");
    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_only() {
        for text in [
            "Show me payroll for this month",
            "salary this week",
            "total earnings this year",
            "compensation from 2024-01-01 to 2024-01-31",
            "PAYOUT last month",
        ] {
            assert_eq!(classify(text), Intent::Payroll, "{text}");
        }
    }

    #[test]
    fn test_customer_only() {
        for text in [
            "Find orders for Alice Johnson",
            "show customer bob smith",
            "what projects does jane doe have",
            "client list",
        ] {
            assert_eq!(classify(text), Intent::Customer, "{text}");
        }
    }

    #[test]
    fn test_both_without_scope_word_is_payroll() {
        assert_eq!(classify("payroll and project totals"), Intent::Payroll);
        assert_eq!(classify("order payments this month"), Intent::Payroll);
    }

    #[test]
    fn test_both_with_for_is_customer() {
        assert_eq!(classify("payments for customer Acme"), Intent::Customer);
    }

    #[test]
    fn test_both_with_by_is_customer() {
        assert_eq!(classify("payouts by order"), Intent::Customer);
    }

    #[test]
    fn test_scope_words_match_inside_words() {
        // "before" contains "for"
        assert_eq!(classify("payroll orders before june"), Intent::Customer);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        assert_eq!(classify("reorder stock"), Intent::Customer);
        assert_eq!(classify("payments"), Intent::Payroll);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify("hello there"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
        assert_eq!(classify("   "), Intent::Unknown);
    }

    #[test]
    fn test_case_and_padding_ignored() {
        assert_eq!(classify("   PAYROLL THIS WEEK   "), Intent::Payroll);
    }

    #[test]
    fn test_display() {
        assert_eq!(Intent::Payroll.to_string(), "payroll");
        assert_eq!(Intent::Customer.to_string(), "customer");
        assert_eq!(Intent::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_classify_is_repeatable() {
        let text = "payments for customer Acme";
        assert_eq!(classify(text), classify(text));
    }
}
