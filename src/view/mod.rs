//! Filter/sort engine.
//!
//! A view is derived from the book store and the current control selections
//! by a pure function: [`apply_view`] filters, then sorts, and returns a new
//! sequence. Nothing is cached; the controller re-runs it on every change.
//!
//! The current date is passed in rather than read from a clock, so
//! `this-month`, `this-year` and `last-3-months` are reproducible in tests.

mod filter;
mod sort;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::book::BookRecord;

pub use filter::{Period, TimeFilter};
pub use sort::SortOrder;

/// Current control selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub filter: TimeFilter,
    pub sort: SortOrder,
    #[serde(default)]
    pub period: Option<Period>,
}

impl ViewState {
    pub fn new(filter: TimeFilter, sort: SortOrder) -> Self {
        Self {
            filter,
            sort,
            period: None,
        }
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }
}

/// Filter then sort `books` according to `view`.
///
/// The sort is stable: records that compare equal keep their store order.
pub fn apply_view(books: &[BookRecord], view: &ViewState, today: NaiveDate) -> Vec<BookRecord> {
    let mut filtered: Vec<BookRecord> = books
        .iter()
        .filter(|book| view.filter.matches(book.book_date(), today, view.period))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| view.sort.compare(a, b));

    log::debug!(
        "view {}/{}: {} of {} records",
        view.filter,
        view.sort,
        filtered.len(),
        books.len()
    );
    filtered
}
