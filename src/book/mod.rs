use serde::{Deserialize, Serialize};

use crate::date::{BookDate, normalize_date};
use crate::{Error, Result};

/// One entry of the reading log, as supplied by the data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    /// Year-month-day, delimited with `/` or `-`
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl BookRecord {
    pub fn new(title: impl Into<String>, author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            date: date.into(),
            rating: None,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// The normalized date of this record.
    pub fn book_date(&self) -> BookDate {
        normalize_date(&self.date)
    }

    /// Rating used for ordering; a missing rating ranks as 0.
    pub fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// The loaded reading log.
///
/// Starts empty and is populated exactly once; every view over it is a
/// freshly derived sequence.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<BookRecord>,
    loaded: bool,
}

impl BookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the store. A second call is rejected and leaves the store as it was.
    pub fn populate(&mut self, books: Vec<BookRecord>) -> Result<()> {
        if self.loaded {
            return Err(Error::AlreadyLoaded);
        }
        for book in &books {
            if !book.book_date().is_valid() {
                log::warn!("book {:?} has an unparseable date {:?}", book.title, book.date);
            }
        }
        log::debug!("book store populated with {} records", books.len());
        self.books = books;
        self.loaded = true;
        Ok(())
    }

    /// Parse a JSON array of records and populate the store with it.
    pub fn populate_from_json(&mut self, data: &[u8]) -> Result<()> {
        if self.loaded {
            return Err(Error::AlreadyLoaded);
        }
        let books = parse_books(data)?;
        self.populate(books)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Parse the data file: a JSON array of book objects.
pub fn parse_books(data: &[u8]) -> Result<Vec<BookRecord>> {
    Ok(serde_json::from_slice(data)?)
}
