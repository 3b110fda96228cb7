//! Error types for booklog operations.

use thiserror::Error;

/// Errors that can occur while loading, configuring, or viewing a reading log.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown time filter: {0}")]
    UnknownFilter(String),

    #[error("Unknown sort order: {0}")]
    UnknownSort(String),

    #[error("Invalid period (expected YYYY-MM): {0}")]
    InvalidPeriod(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid date format pattern: {0}")]
    InvalidDateFormat(String),

    #[error("Visibility threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error("Book store is already loaded")]
    AlreadyLoaded,

    #[error("Failed to fetch book data: {0}")]
    Fetch(String),

    #[error("Missing page element: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
