//! Page configuration.
//!
//! Every field has a default matching the stock page markup, so an empty
//! JSON object (or no config at all) gives a working setup.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::animate::{DEFAULT_THRESHOLD, validate_threshold};
use crate::date::BookDate;
use crate::view::{SortOrder, TimeFilter, ViewState};
use crate::{Error, Result};

pub const DEFAULT_DATA_URL: &str = "books2025.json";
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const DEFAULT_CARD_CLASS: &str = "book-card";

/// Element ids, class names, and defaults for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Location of the book data file
    pub data_url: String,
    pub book_list_id: String,
    pub filter_select_id: String,
    pub sort_select_id: String,
    pub period_picker_id: String,
    pub featured_id: String,
    /// Class of each rendered book card
    pub card_class: String,
    /// Class added once a card has scrolled into view
    pub shown_class: String,
    /// Selector for cards present in the static markup
    pub static_card_selector: String,
    /// Intersection ratio that triggers the shown class
    pub threshold: f64,
    pub default_filter: TimeFilter,
    pub default_sort: SortOrder,
    /// strftime pattern for displayed dates
    pub date_format: String,
    /// Text shown in the book list when loading fails
    pub load_error_message: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            book_list_id: "book-list".to_string(),
            filter_select_id: "time-filter".to_string(),
            sort_select_id: "sort-order".to_string(),
            period_picker_id: "month-picker".to_string(),
            featured_id: "featured-book".to_string(),
            card_class: DEFAULT_CARD_CLASS.to_string(),
            shown_class: "show".to_string(),
            static_card_selector: ".card".to_string(),
            threshold: DEFAULT_THRESHOLD,
            default_filter: TimeFilter::All,
            default_sort: SortOrder::DateDesc,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            load_error_message: "Failed to load books.".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        validate_date_format(&self.date_format)
    }

    /// The view state a freshly loaded page starts with.
    ///
    /// A default filter that needs a period still starts without one.
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(self.default_filter, self.default_sort)
    }
}

/// Reject strftime patterns chrono cannot format for a plain date.
///
/// Unknown specifiers and time or zone fields both fail a trial format.
pub fn validate_date_format(pattern: &str) -> Result<()> {
    match BookDate::Valid(NaiveDate::default()).format(pattern) {
        Some(_) => Ok(()),
        None => Err(Error::InvalidDateFormat(pattern.to_string())),
    }
}
