//! Date range resolution for payroll questions.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use super::rules::{compile, CompiledRule, DATE_RANGE_RULES};
use crate::core::{
    month_bounds, parse_iso_date, previous_month_bounds, week_bounds, year_bounds, DateRange,
    ISO_DATE_FORMAT,
};

/// Label used when no period could be read from the message.
pub const DEFAULT_PERIOD_NAME: &str = "this year (default)";

static DATE_RANGE_PATTERNS: Lazy<Vec<CompiledRule>> = Lazy::new(|| compile(DATE_RANGE_RULES));

/// A period named relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePeriod {
    ThisWeek,
    ThisMonth,
    LastMonth,
    ThisYear,
}

/// Relative periods in the order they are tried.
pub const RELATIVE_PERIODS: [RelativePeriod; 4] = [
    RelativePeriod::ThisWeek,
    RelativePeriod::ThisMonth,
    RelativePeriod::LastMonth,
    RelativePeriod::ThisYear,
];

impl RelativePeriod {
    /// The phrase that selects this period; also its display label.
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::ThisWeek => "this week",
            Self::ThisMonth => "this month",
            Self::LastMonth => "last month",
            Self::ThisYear => "this year",
        }
    }

    /// Concrete dates for this period as seen from `today`.
    #[must_use]
    pub fn range(&self, today: NaiveDate) -> DateRange {
        match self {
            Self::ThisWeek => week_bounds(today),
            Self::ThisMonth => month_bounds(today),
            Self::LastMonth => previous_month_bounds(today),
            Self::ThisYear => year_bounds(today),
        }
    }
}

/// A date range together with the label shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPeriod {
    pub range: DateRange,
    /// Display label only, e.g. "this week" or "from 2024-01-01 to 2024-01-31".
    pub period_name: String,
}

impl ResolvedPeriod {
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.range.start()
    }

    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.range.end()
    }
}

/// Resolve the period a payroll question refers to.
///
/// Relative phrases are checked first, then explicit `YYYY-MM-DD` ranges.
/// When nothing matches, the whole of `today`'s year is returned, so this
/// always yields a usable range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use paychat::features::nlp::resolve_period;
///
/// let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
/// let period = resolve_period("payroll this month", today);
/// assert_eq!(period.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(period.period_name, "this month");
/// ```
#[must_use]
pub fn resolve_period(text: &str, today: NaiveDate) -> ResolvedPeriod {
    let text = text.trim().to_lowercase();

    if let Some(period) = RELATIVE_PERIODS
        .iter()
        .find(|period| text.contains(period.phrase()))
    {
        let resolved = ResolvedPeriod {
            range: period.range(today),
            period_name: period.phrase().to_string(),
        };
        debug!(period = %resolved.period_name, range = %resolved.range, "resolved relative period");
        return resolved;
    }

    if let Some(range) = explicit_range(&text) {
        debug!(%range, "resolved explicit period");
        return ResolvedPeriod {
            period_name: format!(
                "from {} to {}",
                range.start().format(ISO_DATE_FORMAT),
                range.end().format(ISO_DATE_FORMAT)
            ),
            range,
        };
    }

    debug!("no period in message, defaulting to current year");
    ResolvedPeriod {
        range: year_bounds(today),
        period_name: DEFAULT_PERIOD_NAME.to_string(),
    }
}

/// Find the first explicit range whose dates are real calendar days.
///
/// Only the first match of each pattern is considered; if its dates are
/// invalid the next pattern is tried.
fn explicit_range(text: &str) -> Option<DateRange> {
    for rule in DATE_RANGE_PATTERNS.iter() {
        let Some(caps) = rule.regex.captures(text) else {
            continue;
        };

        let start = caps.get(1).and_then(|m| parse_iso_date(m.as_str()));
        let end = caps.get(2).and_then(|m| parse_iso_date(m.as_str()));

        match (start, end) {
            (Some(start), Some(end)) => return Some(DateRange::new(start, end)),
            _ => trace!(rule = rule.name, "matched range has invalid dates, skipping"),
        }
    }

    None
}
