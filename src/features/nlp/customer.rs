//! Customer name extraction for order lookups.

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, trace};

use super::normalize::normalize_name;
use super::rules::{compile, CompiledRule, CUSTOMER_NAME_RULES};

/// Guidance shown when no customer name can be found in a message.
pub const CUSTOMER_GUIDANCE: &str = "Please specify a customer name, for example: \"Show orders for Alice Johnson\" or \"Find customer John Doe\".";

/// Names this short or shorter are rejected.
const MIN_NAME_LEN: usize = 2;

static CUSTOMER_PATTERNS: Lazy<Vec<CompiledRule>> = Lazy::new(|| compile(CUSTOMER_NAME_RULES));

/// No usable customer name was found in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", CUSTOMER_GUIDANCE)]
pub struct ExtractionError;

impl ExtractionError {
    /// The guidance text to show the user.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        CUSTOMER_GUIDANCE
    }
}

/// Pull a customer name out of a chat message.
///
/// Patterns are tried in a fixed order and the first one producing a name
/// longer than two characters wins. The name is whitespace-collapsed and
/// title-cased.
///
/// # Errors
///
/// Returns [`ExtractionError`] if no pattern yields a usable name.
///
/// # Examples
///
/// ```
/// use paychat::features::nlp::extract_customer;
///
/// assert_eq!(extract_customer("Show orders for Alice Johnson").unwrap(), "Alice Johnson");
/// assert!(extract_customer("orders").is_err());
/// ```
pub fn extract_customer(text: &str) -> Result<String, ExtractionError> {
    let text = text.trim().to_lowercase();

    for rule in CUSTOMER_PATTERNS.iter() {
        let Some(raw) = capture_name(rule, &text) else {
            continue;
        };

        let name = normalize_name(raw);
        if name.chars().count() > MIN_NAME_LEN {
            debug!(rule = rule.name, customer = %name, "extracted customer name");
            return Ok(name);
        }
        trace!(rule = rule.name, candidate = %name, "customer name too short");
    }

    debug!("no customer name found");
    Err(ExtractionError)
}

fn capture_name<'t>(rule: &CompiledRule, text: &'t str) -> Option<&'t str> {
    rule.regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
