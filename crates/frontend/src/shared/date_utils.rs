/// Utilities for date and time formatting
///
/// Session timestamps arrive as raw server strings; parsing lives in
/// `contracts`, presentation lives here.
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use contracts::domain::a001_upload_history::parse_session_date;

/// Format a timestamp as `D, h:mm AM/PM` in the timestamp's own zone
/// Example: 2024-06-03 14:05 -> "3, 2:05 PM"
pub fn format_session_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    let (is_pm, hour) = dt.hour12();
    format!(
        "{}, {}:{:02} {}",
        dt.day(),
        hour,
        dt.minute(),
        if is_pm { "PM" } else { "AM" }
    )
}

/// Format a raw session date in the viewer's local time.
/// Unreadable input is shown as-is.
pub fn format_session_date(raw: &str) -> String {
    match parse_session_date(raw) {
        Some(dt) => format_session_time(&dt.with_timezone(&Local)),
        None => raw.to_string(),
    }
}

/// Current calendar month (UTC) as `YYYY-MM`, the default month filter
pub fn current_month() -> String {
    month_of(&Utc::now())
}

pub fn month_of(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m").to_string()
}
