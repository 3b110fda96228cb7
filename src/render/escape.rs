//! Pure HTML escaping utilities.
//!
//! Book titles and authors come from an external data file and are
//! interpolated into markup, so every text value goes through these
//! functions first.

/// Escape text for use in HTML element content or a quoted attribute.
///
/// Escapes:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#39;`
///
/// # Examples
///
/// ```
/// use booklog::render::escape_html;
///
/// assert_eq!(escape_html("Pride & Prejudice"), "Pride &amp; Prejudice");
/// assert_eq!(escape_html("<b>"), "&lt;b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Format a rating for display.
///
/// Whole numbers drop the fractional part (`4`, not `4.0`), matching how
/// the ratings are written in the data file.
///
/// # Examples
///
/// ```
/// use booklog::render::format_rating;
///
/// assert_eq!(format_rating(4.0), "4");
/// assert_eq!(format_rating(3.5), "3.5");
/// ```
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.abs() < 1e15 {
        format!("{}", rating as i64)
    } else {
        format!("{rating}")
    }
}
