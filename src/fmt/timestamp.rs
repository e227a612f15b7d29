//! Timestamp rendering in the `DD/MM/YYYY hh:mm:ss.mmm` shape that
//! downstream log-scraping tooling matches against.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

/// Renders an instant as `DD/MM/YYYY hh:mm:ss.mmm`. Day, month, hour, minute,
/// and second are zero-padded to two digits and the year to four; the
/// millisecond field is sub-second precision truncated (not rounded) and
/// printed unpadded, so 7 ms renders as `.7`. This exact shape is a
/// compatibility surface and must not change.
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(t: &DateTime<Tz>) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}.{}",
        t.day(),
        t.month(),
        t.year(),
        t.hour(),
        t.minute(),
        t.second(),
        t.nanosecond() / 1_000_000,
    )
}
