//! Book card rendering.
//!
//! Rendering is split the same way as the rest of the crate: building a
//! card's markup is pure ([`render_card`]), while placing cards on a page
//! goes through the [`BookContainer`] trait so the browser DOM and test
//! doubles can both be driven by [`render_books`].
//!
//! - [`escape`]: HTML escaping and rating formatting
//! - [`render_card`]: one record → [`Card`]
//! - [`render_books`]: replace a container's cards and register them for scroll-in
//! - [`render_list_html`], [`render_text`]: static output for the CLI

mod escape;

use crate::animate::VisibilityAnimator;
use crate::book::BookRecord;
use crate::config::PageConfig;
use crate::Result;

pub use escape::{escape_html, format_rating};

/// Options that shape rendered cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// strftime pattern for the displayed date
    pub date_format: String,
    /// CSS class given to each card element
    pub card_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            date_format: crate::config::DEFAULT_DATE_FORMAT.to_string(),
            card_class: crate::config::DEFAULT_CARD_CLASS.to_string(),
        }
    }
}

impl From<&PageConfig> for RenderOptions {
    fn from(config: &PageConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
            card_class: config.card_class.clone(),
        }
    }
}

/// A display element for one book, ready to be attached to a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// CSS class of the card element
    pub class: String,
    /// Inner HTML of the card element
    pub html: String,
}

impl Card {
    /// The card as a standalone element.
    pub fn to_html(&self) -> String {
        format!("<div class=\"{}\">{}</div>", escape_html(&self.class), self.html)
    }
}

/// A page region that holds rendered cards.
pub trait BookContainer {
    /// Handle to an element created by [`BookContainer::append`].
    type Element;

    /// Remove every previously rendered card, returning the removed elements.
    fn clear(&mut self) -> Vec<Self::Element>;

    /// Create an element for `card` at the end of the container.
    fn append(&mut self, card: &Card) -> Result<Self::Element>;
}

/// Build the card for one record.
///
/// Shows title, author, and the normalized date formatted with
/// `options.date_format`; a record whose date does not normalize shows the
/// raw text instead. The rating line only appears when a rating is present.
pub fn render_card(book: &BookRecord, options: &RenderOptions) -> Card {
    let date = book
        .book_date()
        .format(&options.date_format)
        .unwrap_or_else(|| book.date.clone());

    let mut html = String::with_capacity(96 + book.title.len() + book.author.len());
    html.push_str("<h4>");
    html.push_str(&escape_html(&book.title));
    html.push_str("</h4><p>");
    html.push_str(&escape_html(&book.author));
    html.push_str("</p><p><em>");
    html.push_str(&escape_html(&date));
    html.push_str("</em></p>");
    if let Some(rating) = book.rating {
        html.push_str("<p>⭐ ");
        html.push_str(&format_rating(rating));
        html.push_str("</p>");
    }

    Card {
        class: options.card_class.clone(),
        html,
    }
}

/// Replace the contents of `container` with cards for `books`.
///
/// The container is cleared first and the removed elements are forgotten by
/// `animator`; every new element is registered with it. Returns the number
/// of cards rendered.
pub fn render_books<C, A>(
    container: &mut C,
    animator: &mut A,
    books: &[BookRecord],
    options: &RenderOptions,
) -> Result<usize>
where
    C: BookContainer + ?Sized,
    A: VisibilityAnimator<C::Element> + ?Sized,
{
    for removed in container.clear() {
        animator.forget(&removed);
    }
    for book in books {
        let element = container.append(&render_card(book, options))?;
        animator.register(&element);
    }
    log::debug!("rendered {} book cards", books.len());
    Ok(books.len())
}

/// Render `books` as a sequence of card elements.
pub fn render_list_html(books: &[BookRecord], options: &RenderOptions) -> String {
    let mut output = String::new();
    for book in books {
        output.push_str(&render_card(book, options).to_html());
        output.push('\n');
    }
    output
}

/// Render `books` as plain text, one line per record.
pub fn render_text(books: &[BookRecord], options: &RenderOptions) -> String {
    let mut output = String::new();
    for book in books {
        let date = book
            .book_date()
            .format(&options.date_format)
            .unwrap_or_else(|| book.date.clone());
        output.push_str(&format!("{date}  {} by {}", book.title, book.author));
        if let Some(rating) = book.rating {
            output.push_str(&format!("  ⭐ {}", format_rating(rating)));
        }
        output.push('\n');
    }
    output
}
