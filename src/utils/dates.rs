//! # Date Helpers
//!
//! Dungeon night is every Friday.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// Weekday the guild runs dungeons on.
pub const EVENT_WEEKDAY: Weekday = Weekday::Fri;

/// Returns the Friday on or after `today`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dungeon_roller::next_friday;
///
/// let tuesday = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// assert_eq!(next_friday(tuesday), friday);
/// assert_eq!(next_friday(friday), friday);
/// ```
pub fn next_friday(today: NaiveDate) -> NaiveDate {
    let target = EVENT_WEEKDAY.num_days_from_monday();
    let current = today.weekday().num_days_from_monday();
    let offset = (7 + target - current) % 7;
    today + Days::new(u64::from(offset))
}

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
