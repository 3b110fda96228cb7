//! Utility functions with platform-specific implementations.

use chrono::NaiveDate;

/// Today's date in the local time zone.
///
/// On native platforms, uses `chrono::Local`.
/// On WASM, uses `js_sys::Date` so the browser's zone applies.
#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(target_arch = "wasm32")]
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    // getMonth() is 0-based
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_else(|| chrono::Utc::now().date_naive())
}
