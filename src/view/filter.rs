//! Time filters and month/year periods.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::BookDate;
use crate::Error;

/// Time-filter modes offered by the filter control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFilter {
    /// No filtering.
    #[default]
    All,
    /// Same calendar month and year as today.
    ThisMonth,
    /// Same calendar year as today.
    ThisYear,
    /// On or after today minus three calendar months.
    Last3Months,
    /// An explicitly selected year and month.
    #[serde(alias = "specific-time", alias = "specific-month")]
    SpecificPeriod,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 5] = [
        TimeFilter::All,
        TimeFilter::ThisMonth,
        TimeFilter::ThisYear,
        TimeFilter::Last3Months,
        TimeFilter::SpecificPeriod,
    ];

    /// The control value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::All => "all",
            TimeFilter::ThisMonth => "this-month",
            TimeFilter::ThisYear => "this-year",
            TimeFilter::Last3Months => "last-3-months",
            TimeFilter::SpecificPeriod => "specific-period",
        }
    }

    /// Whether this mode needs a month/year picker selection.
    pub fn needs_period(self) -> bool {
        matches!(self, TimeFilter::SpecificPeriod)
    }

    /// Test a normalized date against this mode.
    ///
    /// Invalid dates only pass [`TimeFilter::All`]. A `SpecificPeriod`
    /// without a period matches nothing.
    pub fn matches(self, date: BookDate, today: NaiveDate, period: Option<Period>) -> bool {
        if self == TimeFilter::All {
            return true;
        }
        let Some(date) = date.valid() else {
            return false;
        };
        match self {
            TimeFilter::All => true,
            TimeFilter::ThisMonth => date.year() == today.year() && date.month() == today.month(),
            TimeFilter::ThisYear => date.year() == today.year(),
            TimeFilter::Last3Months => date >= three_months_before(today),
            TimeFilter::SpecificPeriod => period.is_some_and(|p| p.contains(date)),
        }
    }
}

/// Start of the `last-3-months` window.
fn three_months_before(today: NaiveDate) -> NaiveDate {
    // Clamps to the end of a shorter month (May 31 -> Feb 28/29).
    today
        .checked_sub_months(Months::new(3))
        .unwrap_or(NaiveDate::MIN)
}

impl FromStr for TimeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(TimeFilter::All),
            "this-month" => Ok(TimeFilter::ThisMonth),
            "this-year" => Ok(TimeFilter::ThisYear),
            "last-3-months" => Ok(TimeFilter::Last3Months),
            "specific-period" | "specific-time" | "specific-month" => Ok(TimeFilter::SpecificPeriod),
            other => Err(Error::UnknownFilter(other.to_string())),
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar month selected in the month picker (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    pub year: i32,
    /// 1-based month
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> crate::Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self { year, month })
        } else {
            Err(Error::InvalidPeriod(format!("{year:04}-{month:02}")))
        }
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Parse a picker value; an empty value means nothing is selected yet.
    pub fn from_picker(value: &str) -> crate::Result<Option<Self>> {
        let value = value.trim();
        if value.is_empty() {
            Ok(None)
        } else {
            value.parse().map(Some)
        }
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPeriod(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Period::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for Period {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
