//! Calendar and formatting helpers for the dashboard views.
//!
//! All pure; the relative label takes `now` explicitly instead of reading
//! the clock.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// 12-hour clock label, `h:mm AM/PM` (`3:05 PM`).
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

/// Long day label (`January 5, 2025`), used as the agenda heading.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Compact duration label: `45m`, `2h`, `1h 30m`.
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes}m");
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {remaining}m")
    }
}

/// Relative label for an upcoming moment.
///
/// `past` for anything behind `now`, then `in N minutes`, `in N hour(s)`
/// up to a day, `in N day(s)` up to a week, and the short date (`Jan 15`)
/// beyond that. Minutes keep the plural form even for 0 and 1.
pub fn relative_label(target: NaiveDateTime, now: NaiveDateTime) -> String {
    let minutes = (target - now).num_minutes();

    if minutes < 0 {
        return "past".to_string();
    }
    if minutes < 60 {
        return format!("in {minutes} minutes");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("in {hours} hour{}", if hours > 1 { "s" } else { "" });
    }

    let days = hours / 24;
    if days < 7 {
        return format!("in {days} day{}", if days > 1 { "s" } else { "" });
    }

    target.format("%b %-d").to_string()
}

/// The Monday-start week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// The 24 hour labels of the day grid: `12:00 AM` through `11:00 PM`.
pub fn time_blocks() -> Vec<String> {
    (0..24)
        .map(|hour| {
            let display = if hour % 12 == 0 { 12 } else { hour % 12 };
            let meridiem = if hour < 12 { "AM" } else { "PM" };
            format!("{display}:00 {meridiem}")
        })
        .collect()
}
