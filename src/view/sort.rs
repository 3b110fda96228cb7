//! Sort orders for the book list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::book::BookRecord;
use crate::date::BookDate;
use crate::Error;

/// Sort orders offered by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    DateAsc,
    /// Newest first
    #[default]
    DateDesc,
    RatingAsc,
    RatingDesc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::DateAsc,
        SortOrder::DateDesc,
        SortOrder::RatingAsc,
        SortOrder::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::DateAsc => "date-asc",
            SortOrder::DateDesc => "date-desc",
            SortOrder::RatingAsc => "rating-asc",
            SortOrder::RatingDesc => "rating-desc",
        }
    }

    /// Compare two records under this order.
    ///
    /// Invalid dates sort last in both date directions.
    pub fn compare(self, a: &BookRecord, b: &BookRecord) -> Ordering {
        match self {
            SortOrder::DateAsc => a.book_date().cmp(&b.book_date()),
            SortOrder::DateDesc => compare_date_desc(a.book_date(), b.book_date()),
            SortOrder::RatingAsc => a.sort_rating().total_cmp(&b.sort_rating()),
            SortOrder::RatingDesc => b.sort_rating().total_cmp(&a.sort_rating()),
        }
    }
}

fn compare_date_desc(a: BookDate, b: BookDate) -> Ordering {
    match (a, b) {
        (BookDate::Valid(a), BookDate::Valid(b)) => b.cmp(&a),
        _ => a.cmp(&b),
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date-asc" => Ok(SortOrder::DateAsc),
            "date-desc" => Ok(SortOrder::DateDesc),
            "rating-asc" => Ok(SortOrder::RatingAsc),
            "rating-desc" => Ok(SortOrder::RatingDesc),
            other => Err(Error::UnknownSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
