//! Scalar formatters used by the projection.
//!
//! All output is rendered in the UTC calendar regardless of where the
//! instant came from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in one calendar day.
pub const DAY_MS: i64 = 86_400_000;

/// Unit in which `duration` is expressed.
///
/// A projection uses exactly one unit for every node it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DurationUnit {
    /// One calendar day (86,400,000 ms).
    #[default]
    CalendarDay,
    /// One Dojo working hour: a calendar day scaled onto an 8-hour
    /// working day (86,400,000 / 8 ms).
    WorkingHour,
}

impl DurationUnit {
    /// Length of one unit in milliseconds.
    #[inline]
    pub fn length_ms(self) -> i64 {
        match self {
            DurationUnit::CalendarDay => DAY_MS,
            DurationUnit::WorkingHour => DAY_MS / 8,
        }
    }
}

/// Formats an instant as `YYYY-MM-DD`.
pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d").to_string()
}

/// Formats an instant as `YYYY-MM-DDTHH:MM:SSZ` (24-hour clock).
pub fn format_date_time(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Whole units between `start` and `finish`.
///
/// Returns `0` if either side is missing. Truncates toward zero; a finish
/// before the start yields a negative count.
pub fn duration(
    finish: Option<&DateTime<Utc>>,
    start: Option<&DateTime<Utc>>,
    unit: DurationUnit,
) -> i64 {
    match (finish, start) {
        (Some(finish), Some(start)) => {
            let elapsed_ms = (*finish - *start).num_milliseconds();
            elapsed_ms / unit.length_ms()
        }
        _ => 0,
    }
}
