//! Day-of-year ordinals for the daily rotation.
//!
//! Two ways of counting are offered. [`DayCounting::Calendar`] uses the
//! calendar ordinal of the local date (January 1st = 1). [`DayCounting::ElapsedMillis`]
//! reproduces the elapsed-time definition the fact rotation was first written
//! with: milliseconds since local midnight of December 31st of the previous
//! year, floor-divided by a fixed 86,400,000 ms day. The two agree except in
//! the hours after a DST transition, where the elapsed count can be off by one.

// used for the calendar arithmetic
use chrono::{DateTime, Datelike, TimeZone};

use serde::{Deserialize, Serialize};

pub const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCounting {
    #[default]
    Calendar,
    ElapsedMillis,
}

/// Ordinal day of the year for `now`, seen in its own time zone.
pub fn day_of_year<Tz: TimeZone>(now: &DateTime<Tz>, counting: DayCounting) -> i64 {
    match counting {
        DayCounting::Calendar => i64::from(now.ordinal()),
        DayCounting::ElapsedMillis => match year_anchor(now) {
            Some(anchor) => elapsed_day_count(&anchor, now),
            // no local midnight could be found at all, so fall back
            None => i64::from(now.ordinal()),
        },
    }
}

/// Whole fixed-length days elapsed from `anchor` to `now`, rounded down.
pub fn elapsed_day_count<Tz1: TimeZone, Tz2: TimeZone>(
    anchor: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> i64 {
    (now.timestamp_millis() - anchor.timestamp_millis()).div_euclid(MILLIS_PER_DAY)
}

// Local midnight of December 31st of the previous year. A midnight swallowed
// by a DST gap moves forward an hour, an ambiguous one takes the earlier instant.
fn year_anchor<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let zone = now.timezone();
    let year = now.year() - 1;
    zone.with_ymd_and_hms(year, 12, 31, 0, 0, 0)
        .earliest()
        .or_else(|| zone.with_ymd_and_hms(year, 12, 31, 1, 0, 0).earliest())
}
