use chrono::{Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Europe::Berlin;
use didyouknow::catalog::Catalog;
use didyouknow::fact::{Category, FactRecord};
use didyouknow::rotation::{day_of_year, DayCounting};

const HOUR: i32 = 3600;

fn fixture(size: usize) -> Catalog {
    let facts = (0..size)
        .map(|i| {
            FactRecord::new(format!("fact-{i}"), Category::History, format!("Fact number {i}"))
        })
        .collect();
    Catalog::new(facts).expect("catalog")
}

fn both(now: &chrono::DateTime<impl TimeZone>) -> (i64, i64) {
    (
        day_of_year(now, DayCounting::Calendar),
        day_of_year(now, DayCounting::ElapsedMillis),
    )
}

// ------------- a real zone -------------
#[test]
fn berlin_drifts_in_the_first_hour_of_summer_days() {
    let after_midnight = Berlin.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();
    assert_eq!(both(&after_midnight), (92, 91));
    let noon = Berlin.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
    assert_eq!(both(&noon), (92, 92));
    let late = Berlin.with_ymd_and_hms(2024, 4, 1, 23, 30, 0).unwrap();
    assert_eq!(both(&late), (92, 92));
    // 31 + 29 + 31 + 30 + 31 + 15
    let midsummer = Berlin.with_ymd_and_hms(2024, 6, 15, 0, 59, 0).unwrap();
    assert_eq!(both(&midsummer), (167, 166));
}

#[test]
fn berlin_no_drift_on_the_switch_night() {
    // clocks jump from 02:00 to 03:00 on March 31st
    let before_jump = Berlin.with_ymd_and_hms(2024, 3, 31, 1, 30, 0).unwrap();
    assert_eq!(both(&before_jump), (91, 91));
    let after_jump = Berlin.with_ymd_and_hms(2024, 3, 31, 3, 30, 0).unwrap();
    assert_eq!(both(&after_jump), (91, 91));
}

#[test]
fn berlin_drift_ends_after_fall_back() {
    // clocks fall back from 03:00 to 02:00 on October 27th
    let last_summer_night = Berlin.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap();
    assert_eq!(both(&last_summer_night), (301, 300));
    let first_winter_night = Berlin.with_ymd_and_hms(2024, 10, 28, 0, 30, 0).unwrap();
    assert_eq!(both(&first_winter_night), (302, 302));
    let november = Berlin.with_ymd_and_hms(2024, 11, 1, 0, 30, 0).unwrap();
    assert_eq!(both(&november), (306, 306));
}

#[test]
fn berlin_modes_agree_all_winter() {
    let start = Berlin.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    // every hour up to the end of March 29th
    for hours in 0..(89 * 24) {
        let now = start + Duration::hours(hours);
        let (calendar, elapsed) = both(&now);
        assert_eq!(calendar, elapsed, "at {now}");
    }
}

#[test]
fn berlin_fact_of_the_day_follows_the_counting_mode() {
    let now = Berlin.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();
    let calendar = fixture(5);
    assert_eq!(calendar.fact_of_the_day_at(&now).id(), "fact-2");
    let elapsed = fixture(5).with_day_counting(DayCounting::ElapsedMillis);
    assert_eq!(elapsed.fact_of_the_day_at(&now).id(), "fact-1");
}

// ------------- zones shifting at midnight of December 31st -------------
// Both switch at 2023-12-30T23:00Z. MidnightGap goes from +01:00 to +02:00,
// so local 00:00..01:00 on December 31st never happens. MidnightFold goes
// from +02:00 to +01:00, so that hour happens twice.

fn shift_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 12, 30).unwrap().and_hms_opt(23, 0, 0).unwrap()
}

fn offset_at_utc(utc: &NaiveDateTime, before: i32, after: i32) -> FixedOffset {
    let seconds = if *utc < shift_instant() { before } else { after };
    FixedOffset::east_opt(seconds).unwrap()
}

fn offsets_for_local(
    local: &NaiveDateTime,
    before: i32,
    after: i32,
) -> LocalResult<FixedOffset> {
    let fits = |seconds: i32| {
        let offset = FixedOffset::east_opt(seconds).unwrap();
        let utc = *local - Duration::seconds(i64::from(seconds));
        (offset_at_utc(&utc, before, after) == offset).then_some(offset)
    };
    match (fits(before), fits(after)) {
        // the larger offset is the earlier instant
        (Some(earliest), Some(latest)) => LocalResult::Ambiguous(earliest, latest),
        (Some(offset), None) | (None, Some(offset)) => LocalResult::Single(offset),
        (None, None) => LocalResult::None,
    }
}

macro_rules! shifting_zone {
    ($name:ident, $before:expr, $after:expr) => {
        #[derive(Debug, Clone, Copy)]
        struct $name;

        impl TimeZone for $name {
            type Offset = FixedOffset;

            fn from_offset(_offset: &FixedOffset) -> Self {
                $name
            }
            fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
                self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
            }
            fn offset_from_local_datetime(
                &self,
                local: &NaiveDateTime,
            ) -> LocalResult<FixedOffset> {
                offsets_for_local(local, $before, $after)
            }
            fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
                self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
            }
            fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
                offset_at_utc(utc, $before, $after)
            }
        }
    };
}

shifting_zone!(MidnightGap, HOUR, 2 * HOUR);
shifting_zone!(MidnightFold, 2 * HOUR, HOUR);

#[test]
fn anchor_in_a_gap_moves_forward_an_hour() {
    assert!(MidnightGap.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).earliest().is_none());
    // the anchor becomes 01:00 local, 2023-12-30T23:00Z
    let just_after_new_year = MidnightGap.with_ymd_and_hms(2024, 1, 1, 0, 30, 0).unwrap();
    assert_eq!(both(&just_after_new_year), (1, 0));
    let an_hour_later = MidnightGap.with_ymd_and_hms(2024, 1, 1, 1, 30, 0).unwrap();
    assert_eq!(both(&an_hour_later), (1, 1));

    let elapsed = fixture(5).with_day_counting(DayCounting::ElapsedMillis);
    assert_eq!(elapsed.fact_of_the_day_at(&just_after_new_year).id(), "fact-0");
    assert_eq!(fixture(5).fact_of_the_day_at(&just_after_new_year).id(), "fact-1");
}

#[test]
fn ambiguous_anchor_takes_the_earlier_instant() {
    let midnight = MidnightFold.with_ymd_and_hms(2023, 12, 31, 0, 0, 0);
    assert!(matches!(midnight, LocalResult::Ambiguous(_, _)));
    // 2024-01-01T22:30Z is two days after the earlier anchor (2023-12-30T22:00Z)
    // but only one day and 23.5 hours after the later one
    let late_evening = MidnightFold.with_ymd_and_hms(2024, 1, 1, 23, 30, 0).unwrap();
    assert_eq!(both(&late_evening), (1, 2));
    let noon = MidnightFold.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(both(&noon), (1, 1));
}
