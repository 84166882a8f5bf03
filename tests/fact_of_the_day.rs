use chrono::{Duration, FixedOffset, TimeZone, Utc};
use didyouknow::catalog::Catalog;
use didyouknow::fact::{Category, FactRecord};
use didyouknow::rotation::{day_of_year, elapsed_day_count, DayCounting};

fn fixture(size: usize) -> Catalog {
    let facts = (0..size)
        .map(|i| {
            FactRecord::new(format!("fact-{i}"), Category::Insight, format!("Fact number {i}"))
        })
        .collect();
    Catalog::new(facts).expect("catalog")
}

fn position(catalog: &Catalog, id: &str) -> usize {
    catalog.iter().position(|f| f.id() == id).expect("fact in catalog")
}

#[test]
fn stable_within_a_day() {
    let catalog = fixture(7);
    let morning = Utc.with_ymd_and_hms(2024, 5, 17, 0, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 5, 17, 23, 59, 59).unwrap();
    assert_eq!(catalog.fact_of_the_day_at(&morning), catalog.fact_of_the_day_at(&morning));
    assert_eq!(catalog.fact_of_the_day_at(&morning), catalog.fact_of_the_day_at(&evening));
}

#[test]
fn january_first_is_day_one() {
    let catalog = fixture(10);
    let day = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(catalog.fact_of_the_day_at(&day).id(), "fact-1");
    // December 31st of a leap year is day 366
    let day = Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap();
    assert_eq!(catalog.fact_of_the_day_at(&day).id(), "fact-6");
}

#[test]
fn advances_by_elapsed_days() {
    let catalog = fixture(7);
    let n = catalog.fact_count();
    let start = Utc.with_ymd_and_hms(2023, 2, 3, 8, 30, 0).unwrap();
    let base = position(&catalog, catalog.fact_of_the_day_at(&start).id());
    for k in 0..200 {
        let later = start + Duration::days(k);
        let index = position(&catalog, catalog.fact_of_the_day_at(&later).id());
        assert_eq!(index, (base + k as usize) % n, "after {k} days");
    }
}

#[test]
fn repeats_after_catalog_size_days() {
    for size in [1, 3, 17, 120] {
        let catalog = fixture(size);
        let start = Utc.with_ymd_and_hms(2023, 1, 5, 10, 0, 0).unwrap();
        let later = start + Duration::days(size as i64);
        assert_eq!(catalog.fact_of_the_day_at(&start), catalog.fact_of_the_day_at(&later));
    }
}

#[test]
fn index_stays_in_range_all_year() {
    let catalog = fixture(13);
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 6, 0, 0).unwrap();
    for k in 0..366 {
        let day = day_of_year(&(start + Duration::days(k)), DayCounting::Calendar);
        assert!(catalog.index_for_day(day) < catalog.fact_count());
    }
}

#[test]
fn counting_modes_agree_without_dst() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let start = offset.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    for hours in (0..365 * 24).step_by(5) {
        let now = start + Duration::hours(hours);
        assert_eq!(
            day_of_year(&now, DayCounting::Calendar),
            day_of_year(&now, DayCounting::ElapsedMillis),
            "at {now}"
        );
    }
}

#[test]
fn elapsed_counting_drifts_after_dst_starts() {
    // midnight of December 31st in winter time, then the first hour of
    // April 1st in summer time
    let winter = FixedOffset::east_opt(3600).unwrap();
    let summer = FixedOffset::east_opt(2 * 3600).unwrap();
    let anchor = winter.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
    let just_after_midnight = summer.with_ymd_and_hms(2024, 4, 1, 0, 30, 0).unwrap();
    let noon = summer.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
    assert_eq!(day_of_year(&just_after_midnight, DayCounting::Calendar), 92);
    assert_eq!(elapsed_day_count(&anchor, &just_after_midnight), 91);
    assert_eq!(elapsed_day_count(&anchor, &noon), 92);
}

#[test]
fn day_counting_is_configurable() {
    let catalog = fixture(5);
    assert_eq!(catalog.day_counting(), DayCounting::Calendar);
    let catalog = catalog.with_day_counting(DayCounting::ElapsedMillis);
    assert_eq!(catalog.day_counting(), DayCounting::ElapsedMillis);
    let day = Utc.with_ymd_and_hms(2025, 3, 4, 15, 0, 0).unwrap();
    // 31 + 28 + 4 = 63
    assert_eq!(catalog.fact_of_the_day_at(&day).id(), "fact-3");
}

#[test]
fn negative_days_wrap_into_range() {
    let catalog = fixture(4);
    assert_eq!(catalog.index_for_day(-1), 3);
    assert_eq!(catalog.index_for_day(8), 0);
}

#[test]
fn wall_clock_pick_belongs_to_catalog() {
    let catalog = fixture(9);
    let fact = catalog.fact_of_the_day();
    assert!(catalog.get(fact.id()).is_some());
}
