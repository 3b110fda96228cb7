//! # booklog
//!
//! Filter, sort, and render a reading log of book records, with cards that
//! fade in as they scroll into view.
//!
//! ## Features
//!
//! - Load book records from a JSON data file
//! - Time filters (`all`, `this-month`, `this-year`, `last-3-months`,
//!   `specific-period`) and four sort orders
//! - Featured "most recent book" highlight
//! - Browser binding (`wasm` feature) and an offline renderer (`cli` feature)
//!
//! ## Quick Start
//!
//! ```
//! use booklog::{apply_view, parse_books, render_list_html, RenderOptions};
//! use booklog::{Period, SortOrder, TimeFilter, ViewState};
//! use chrono::NaiveDate;
//!
//! let books = parse_books(br#"[
//!     {"title": "Emma", "author": "Jane Austen", "date": "2025/01/10"},
//!     {"title": "Dune", "author": "Frank Herbert", "date": "2025/06/15", "rating": 5}
//! ]"#).unwrap();
//!
//! let view = ViewState::new(TimeFilter::SpecificPeriod, SortOrder::DateAsc)
//!     .with_period(Period::new(2025, 6).unwrap());
//! let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//!
//! let visible = apply_view(&books, &view, today);
//! assert_eq!(visible.len(), 1);
//!
//! let html = render_list_html(&visible, &RenderOptions::default());
//! assert!(html.contains("<h4>Dune</h4>"));
//! ```
//!
//! ## Driving a page
//!
//! The [`Controller`] owns the book store and the current [`ViewState`],
//! and draws to anything implementing [`PageSurface`]. The `wasm` feature
//! provides a DOM implementation; tests use in-memory ones.

pub mod animate;
pub mod book;
pub mod config;
pub mod controller;
pub mod date;
pub mod error;
pub mod featured;
pub mod render;
pub mod view;
pub(crate) mod util;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm;

pub use animate::{VisibilityAnimator, VisibilityTracker};
pub use book::{BookRecord, BookStore, parse_books};
pub use config::PageConfig;
pub use controller::{ControlChange, Controller, PageSurface};
pub use date::{BookDate, normalize_date};
pub use error::{Error, Result};
pub use featured::{featured_markup, select_featured};
pub use render::{BookContainer, Card, RenderOptions, render_books, render_card, render_list_html};
pub use view::{Period, SortOrder, TimeFilter, ViewState, apply_view};

/// Today's date in the local time zone.
pub fn today() -> chrono::NaiveDate {
    util::today()
}
