//! Compact timestamps used in backup destination names

use chrono::{DateTime, Local, TimeZone};

/// `ddmmyyHHMMSS`, e.g. `160126093015`
pub const COMPACT_TIMESTAMP_FORMAT: &str = "%d%m%y%H%M%S";

/// Current local time in [`COMPACT_TIMESTAMP_FORMAT`]
pub fn compact_timestamp() -> String {
    format_compact(&Local::now())
}

/// Format any timestamp in [`COMPACT_TIMESTAMP_FORMAT`]
pub fn format_compact<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(COMPACT_TIMESTAMP_FORMAT).to_string()
}
