//! Featured book selection.

use crate::book::BookRecord;
use crate::render::escape_html;

/// Pick the most recently dated record for the highlight panel.
///
/// Returns `None` for an empty store, in which case the caller leaves any
/// existing highlight alone. Ties go to the earliest record in store order;
/// records with unparseable dates are only chosen when no record has a
/// valid date.
pub fn select_featured(books: &[BookRecord]) -> Option<&BookRecord> {
    let mut best: Option<(&BookRecord, chrono::NaiveDate)> = None;
    for book in books {
        let Some(date) = book.book_date().valid() else {
            continue;
        };
        match best {
            Some((_, best_date)) if date <= best_date => {}
            _ => best = Some((book, date)),
        }
    }
    best.map(|(book, _)| book).or_else(|| books.first())
}

/// Highlight markup for a featured book: `<strong>title</strong> by author`.
pub fn featured_markup(book: &BookRecord) -> String {
    format!(
        "<strong>{}</strong> by {}",
        escape_html(&book.title),
        escape_html(&book.author)
    )
}
