//! "Today" as an explicit, injectable dependency
//!
//! Engines never read the system clock themselves: they receive a
//! [`DateProvider`]. Production wires [`SystemDates`]; tests and demo pages
//! wire [`FixedDates`]. URL-forced dates (`?date=2025-09-04`) are parsed by
//! the adapter functions here, outside the engines, and are clamped so they
//! can never resolve to a date later than the real current date unless a
//! configuration explicitly allows it.

use chrono::{Local, NaiveDate};

/// Date key format used for puzzle files and snapshot keys
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Pure source of the current date
pub trait DateProvider {
    /// The effective "today" for puzzle selection
    fn today(&self) -> NaiveDate;
}

/// Real-clock date provider used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDates;

impl DateProvider for SystemDates {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date provider for tests and replayable demo configurations
#[derive(Debug, Clone, Copy)]
pub struct FixedDates(pub NaiveDate);

impl DateProvider for FixedDates {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Format a date as the canonical `YYYY-MM-DD` key
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

/// Parse a `YYYY-MM-DD` string
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Clamp a requested date so it never lies in the future
///
/// With `allow_future` set (testing only) the requested date passes through
/// unchanged.
#[must_use]
pub fn clamp_requested(requested: NaiveDate, today: NaiveDate, allow_future: bool) -> NaiveDate {
    if allow_future || requested <= today {
        requested
    } else {
        today
    }
}

/// Extract a clamped date override from a URL query string
///
/// Looks for a `date=YYYY-MM-DD` pair in `query` (with or without a leading
/// `?`). Returns `None` when no parseable override is present, in which case
/// the caller falls back to the provider's today.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lunamini::core::date_from_query;
///
/// let today = NaiveDate::from_ymd_opt(2025, 9, 4).unwrap();
/// let d = date_from_query("?date=2025-09-01&share=1", today, false);
/// assert_eq!(d, NaiveDate::from_ymd_opt(2025, 9, 1));
///
/// // Future dates clamp to today.
/// let d = date_from_query("date=2030-01-01", today, false);
/// assert_eq!(d, Some(today));
/// ```
#[must_use]
pub fn date_from_query(query: &str, today: NaiveDate, allow_future: bool) -> Option<NaiveDate> {
    let query = query.trim_start_matches('?');
    for part in query.split('&') {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        if key.eq_ignore_ascii_case("date")
            && let Some(requested) = parse_date(value)
        {
            return Some(clamp_requested(requested, today, allow_future));
        }
    }
    None
}
