//! Wall-clock timestamps.
//!
//! Shared by the heartbeat loop and the run summary so both emit the same
//! `YYYY-MM-DD HH:MM:SS` shape, which is what a parent process scans for.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

const WALL_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Current wall-clock time.
///
/// Local time when the UTC offset is determinable; the offset cannot be
/// soundly read in a multi-threaded process on some platforms, in which case
/// this falls back to UTC.
pub fn now_wall() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_wall(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(WALL_FORMAT)
        .unwrap_or_else(|_| timestamp.to_string())
}
