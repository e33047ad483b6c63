//! Keyword sets and ordered pattern tables for chat queries.
//!
//! Position in each table is precedence: the first rule that matches wins.

use regex::Regex;

/// Words that mark a message as a payroll question.
pub const PAYROLL_KEYWORDS: &[&str] = &[
    "payroll",
    "payout",
    "payment",
    "salary",
    "earnings",
    "compensation",
];

/// Words that mark a message as a customer or order question.
pub const CUSTOMER_KEYWORDS: &[&str] = &["customer", "order", "project", "client"];

/// When a message mentions both payroll and customers, any of these turns
/// it into a customer lookup ("payments for customer Acme").
pub const CUSTOMER_SCOPE_WORDS: &[&str] = &["for", "by"];

/// A named regular expression in a precedence table.
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    /// Short identifier used in logs and tests.
    pub name: &'static str,
    /// Pattern source, applied to lower-cased text.
    pub pattern: &'static str,
}

/// Phrases that carry a customer name in capture group 1.
pub const CUSTOMER_NAME_RULES: &[PatternRule] = &[
    PatternRule {
        name: "show-customer",
        pattern: r"(?:show|get|list)\s+(?:me\s+)?customer\s+([a-z][a-z\s]+?)(?:\s*$|\?|'s)",
    },
    PatternRule {
        name: "customer-named",
        pattern: r"customer\s+(?:named?\s+)?([a-z][a-z\s]+?)(?:\s*$|\?|'s|\s+orders?|\s+projects?)",
    },
    PatternRule {
        name: "orders-for",
        pattern: r"orders?\s+(?:for|from|by)\s+([a-z][a-z\s]+?)(?:\s*$|\?)",
    },
    PatternRule {
        name: "projects-for",
        pattern: r"projects?\s+(?:for|from|by)\s+([a-z][a-z\s]+?)(?:\s*$|\?)",
    },
    PatternRule {
        name: "does-have",
        pattern: r"(?:does|do)\s+([a-z][a-z\s]+?)\s+have",
    },
    PatternRule {
        name: "find",
        pattern: r"find\s+(?:customer\s+)?([a-z][a-z\s]+?)(?:\s+orders?|\s+projects?|\s*$|\?)",
    },
    PatternRule {
        name: "show-orders-for",
        pattern: r"(?:show|get|list)\s+(?:me\s+)?(?:orders?|projects?)\s+(?:for|from|by)\s+([a-z][a-z\s]+?)(?:\s*$|\?)",
    },
    PatternRule {
        name: "which-orders-does-have",
        pattern: r"(?:what|which)\s+(?:orders?|projects?)\s+(?:does|do)\s+([a-z][a-z\s]+?)\s+have",
    },
];

/// Explicit date ranges; groups 1 and 2 are the bounds as `YYYY-MM-DD`.
pub const DATE_RANGE_RULES: &[PatternRule] = &[
    PatternRule {
        name: "from-to",
        pattern: r"(?:from|between)\s+(\d{4}-\d{2}-\d{2})\s+(?:to|and)\s+(\d{4}-\d{2}-\d{2})",
    },
    PatternRule {
        name: "bare-to",
        pattern: r"(\d{4}-\d{2}-\d{2})\s+to\s+(\d{4}-\d{2}-\d{2})",
    },
    PatternRule {
        name: "between-and",
        pattern: r"between\s+(\d{4}-\d{2}-\d{2})\s+and\s+(\d{4}-\d{2}-\d{2})",
    },
];

/// A [`PatternRule`] with its regex built.
#[derive(Debug)]
pub struct CompiledRule {
    pub name: &'static str,
    pub regex: Regex,
}

/// Build every rule in a table, keeping table order.
///
/// # Panics
///
/// Panics if a pattern in the table is not a valid regex. The tables are
/// constants, so this only fires on a programming error.
pub fn compile(rules: &[PatternRule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .map(|rule| CompiledRule {
            name: rule.name,
            regex: Regex::new(rule.pattern)
                .unwrap_or_else(|e| panic!("Invalid {} regex: {e}", rule.name)),
        })
        .collect()
}

/// Check whether `text` contains any of `words` as a substring.
pub fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|word| text.contains(word))
}
