//! Small text helpers for report messages.

/// Format dollars with thousands separators and two decimals, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Display an optional column, showing `N/A` when missing.
pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// Display an optional amount as currency, showing `N/A` when missing.
pub fn currency_or_na(amount: Option<f64>) -> String {
    amount.map_or_else(|| "N/A".to_string(), format_currency)
}

/// "1 transaction", "3 transactions".
pub fn count_noun(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
