//! Page controller.
//!
//! The [`Controller`] is the single owner of page state: the book store,
//! the current [`ViewState`], and the [`PageSurface`] it draws to. Control
//! changes come in as [`ControlChange`] values; each one updates the view
//! state and, when the view can be computed, re-derives the visible list
//! with [`apply_view`] and hands it to the renderer.

use chrono::NaiveDate;

use crate::animate::VisibilityAnimator;
use crate::book::{BookRecord, BookStore};
use crate::config::PageConfig;
use crate::featured::{featured_markup, select_featured};
use crate::render::{BookContainer, RenderOptions, render_books};
use crate::view::{Period, SortOrder, TimeFilter, ViewState, apply_view};
use crate::{Error, Result};

/// The host UI a controller draws to.
pub trait PageSurface {
    type Container: BookContainer;
    type Animator: VisibilityAnimator<<Self::Container as BookContainer>::Element>;

    /// The book list and the animator its cards are registered with.
    fn card_area(&mut self) -> (&mut Self::Container, &mut Self::Animator);

    /// Replace the featured-book highlight.
    fn set_featured(&mut self, html: &str);

    /// Show or hide the month/year picker.
    fn set_period_picker_visible(&mut self, visible: bool);

    /// Put the page into its "failed to load" state.
    fn show_load_error(&mut self, message: &str);
}

/// A change made through one of the page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChange {
    Filter(TimeFilter),
    Sort(SortOrder),
    /// New month picker value; `None` when cleared.
    Period(Option<Period>),
}

/// Owns page state and keeps the surface in sync with it.
pub struct Controller<S: PageSurface> {
    surface: S,
    store: BookStore,
    view: ViewState,
    options: RenderOptions,
    load_error_message: String,
}

impl<S: PageSurface> Controller<S> {
    pub fn new(mut surface: S, config: &PageConfig) -> Self {
        let view = config.initial_view();
        surface.set_period_picker_visible(view.filter.needs_period());
        Self {
            surface,
            store: BookStore::new(),
            view,
            options: RenderOptions::from(config),
            load_error_message: config.load_error_message.clone(),
        }
    }

    /// Populate the store from the data file and draw the first view.
    ///
    /// Returns the number of cards rendered.
    pub fn load_json(&mut self, data: &[u8], today: NaiveDate) -> Result<usize> {
        self.store.populate_from_json(data)?;
        self.after_load(today)
    }

    /// Populate the store from already-parsed records and draw the first view.
    pub fn load_books(&mut self, books: Vec<BookRecord>, today: NaiveDate) -> Result<usize> {
        self.store.populate(books)?;
        self.after_load(today)
    }

    fn after_load(&mut self, today: NaiveDate) -> Result<usize> {
        if let Some(book) = select_featured(self.store.books()) {
            log::debug!("featured book: {:?}", book.title);
            self.surface.set_featured(&featured_markup(book));
        }
        self.refresh(today)
    }

    /// Report a failed load on the page.
    pub fn load_failed(&mut self, error: &Error) {
        log::error!("failed to load books: {error}");
        self.surface.show_load_error(&self.load_error_message);
    }

    /// Apply a control change. Returns whether the list was re-rendered.
    pub fn handle(&mut self, change: ControlChange, today: NaiveDate) -> Result<bool> {
        let rerender = match change {
            ControlChange::Sort(order) => {
                self.view.sort = order;
                true
            }
            ControlChange::Filter(filter) => {
                self.view.filter = filter;
                let needs_period = filter.needs_period();
                self.surface.set_period_picker_visible(needs_period);
                // Entering the period mode waits for a picker selection.
                !needs_period || self.view.period.is_some()
            }
            ControlChange::Period(period) => {
                self.view.period = period;
                true
            }
        };

        if rerender && self.store.is_loaded() {
            self.refresh(today)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Recompute the view and render it. Returns the number of cards.
    pub fn refresh(&mut self, today: NaiveDate) -> Result<usize> {
        let books = apply_view(self.store.books(), &self.view, today);
        let (container, animator) = self.surface.card_area();
        render_books(container, animator, &books, &self.options)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &BookStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
