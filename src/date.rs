//! Date normalization for book records.
//!
//! Book dates arrive as text, delimited with either `/` or `-`, in
//! year-month-day order. [`normalize_date`] swaps slashes for dashes and
//! parses the result; anything that does not parse becomes
//! [`BookDate::Invalid`] rather than an error.
//!
//! `Invalid` takes part in a total order: it sorts after every valid date
//! and ties with other invalid dates, so sorting never depends on where a
//! malformed record happens to sit.

use std::cmp::Ordering;
use std::fmt::{self, Write};

use chrono::{Datelike, NaiveDate};

/// Format accepted after separator normalization.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A normalized book date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookDate {
    /// A calendar date.
    Valid(NaiveDate),
    /// The raw text did not parse as year-month-day.
    Invalid,
}

/// Normalize a raw date string into a [`BookDate`].
///
/// # Examples
///
/// ```
/// use booklog::date::{normalize_date, BookDate};
/// use chrono::NaiveDate;
///
/// let expected = BookDate::Valid(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
/// assert_eq!(normalize_date("2025/06/15"), expected);
/// assert_eq!(normalize_date("2025-06-15"), expected);
/// assert_eq!(normalize_date("15/06/2025"), BookDate::Invalid);
/// ```
pub fn normalize_date(raw: &str) -> BookDate {
    let normalized = raw.trim().replace('/', "-");
    match NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        Ok(date) => BookDate::Valid(date),
        Err(_) => BookDate::Invalid,
    }
}

/// Parse a strict `YYYY-MM-DD` date, as used for an explicit "today".
pub fn parse_iso_date(raw: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| crate::Error::InvalidDate(raw.to_string()))
}

impl BookDate {
    /// The calendar date, if valid.
    pub fn valid(self) -> Option<NaiveDate> {
        match self {
            BookDate::Valid(date) => Some(date),
            BookDate::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, BookDate::Valid(_))
    }

    /// Calendar year and month (1-based), if valid.
    pub fn year_month(self) -> Option<(i32, u32)> {
        self.valid().map(|d| (d.year(), d.month()))
    }

    /// Render with a strftime pattern such as `%-m/%-d/%Y`.
    ///
    /// Returns `None` for invalid dates, and for patterns that need fields a
    /// date does not have (`%H`, `%z`, ...); callers decide what to show instead.
    pub fn format(self, pattern: &str) -> Option<String> {
        let date = self.valid()?;
        let mut output = String::new();
        write!(output, "{}", date.format(pattern)).ok()?;
        Some(output)
    }
}

impl Ord for BookDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (BookDate::Valid(a), BookDate::Valid(b)) => a.cmp(b),
            (BookDate::Valid(_), BookDate::Invalid) => Ordering::Less,
            (BookDate::Invalid, BookDate::Valid(_)) => Ordering::Greater,
            (BookDate::Invalid, BookDate::Invalid) => Ordering::Equal,
        }
    }
}

impl PartialOrd for BookDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BookDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookDate::Valid(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            BookDate::Invalid => f.write_str("invalid date"),
        }
    }
}
