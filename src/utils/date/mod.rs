// Date utility functions
// Month arithmetic shared by the grid generator, the views and navigation

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};

/// Fold a possibly out-of-range zero-based month index into the year.
///
/// `(2025, -1)` becomes `(2024, 11)` and `(2025, 12)` becomes `(2026, 0)`,
/// matching how navigation arithmetic rolls over year boundaries.
pub fn normalize_month(year: i32, month_index: i32) -> (i32, u32) {
    let total = year as i64 * 12 + month_index as i64;
    let year = i32::try_from(total.div_euclid(12)).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX });
    (year, total.rem_euclid(12) as u32)
}

/// Earliest year the agenda navigates to.
pub const MIN_SUPPORTED_YEAR: i32 = 1;
/// Latest year the agenda navigates to.
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Pin a normalized `(year, month0)` into the supported years: anything
/// earlier becomes January of [`MIN_SUPPORTED_YEAR`], anything later
/// December of [`MAX_SUPPORTED_YEAR`].
pub fn clamp_to_supported(year: i32, month0: u32) -> (i32, u32) {
    if year < MIN_SUPPORTED_YEAR {
        (MIN_SUPPORTED_YEAR, 0)
    } else if year > MAX_SUPPORTED_YEAR {
        (MAX_SUPPORTED_YEAR, 11)
    } else {
        (year, month0)
    }
}

/// First day of the month addressed by a zero-based month index, clamped
/// to the supported years.
pub fn first_of_month(year: i32, month_index: i32) -> NaiveDate {
    let (year, month0) = normalize_month(year, month_index);
    let (year, month0) = clamp_to_supported(year, month0);
    // Every 1st within the supported years exists
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or_default()
}

/// Number of days in a month (1-based `month`).
///
/// Computed as "the day before the 1st of the following month", so leap
/// Februaries come out of the calendar arithmetic rather than a table.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next0) = normalize_month(year, month as i32);
    NaiveDate::from_ymd_opt(next_year, next0 + 1, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Number of blank or previous-month cells before the 1st in a Monday-first row.
pub fn monday_offset(date: NaiveDate) -> u32 {
    match date.weekday() {
        Weekday::Sun => 6,
        other => other.num_days_from_sunday() - 1,
    }
}

/// Monday of the calendar week containing `date`.
pub fn week_start_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Whether the date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Move by whole months, clamping the day to the target month's length.
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let (year, month0) = normalize_month(current.year(), current.month0() as i32 + delta_months);
    let (year, month0) = clamp_to_supported(year, month0);
    let day = current.day().min(days_in_month(year, month0 + 1));
    NaiveDate::from_ymd_opt(year, month0 + 1, day).unwrap_or(current)
}

/// Move by whole years; Feb 29 lands on Feb 28 in non-leap years.
pub fn shift_year_preserving_day(current: NaiveDate, delta_years: i32) -> NaiveDate {
    shift_month_preserving_day(current, delta_years * 12)
}

/// `HH:MM` in 24-hour form.
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
