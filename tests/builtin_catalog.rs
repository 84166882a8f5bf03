use chrono::{TimeZone, Utc};
use didyouknow::catalog::Catalog;
use didyouknow::fact::Category;
use didyouknow::facts::BUILTIN_FACTS;

#[test]
fn builtin_count() {
    let catalog = Catalog::builtin().expect("builtin");
    assert_eq!(catalog.fact_count(), 252);
    assert_eq!(catalog.fact_count(), BUILTIN_FACTS.len());
}

#[test]
fn builtin_category_counts() {
    let catalog = Catalog::builtin().expect("builtin");
    assert_eq!(
        catalog.category_counts(),
        [
            (Category::Names, 21),
            (Category::Statistics, 51),
            (Category::Translation, 20),
            (Category::History, 48),
            (Category::Insight, 112),
        ]
    );
}

#[test]
fn builtin_order_and_content() {
    let catalog = Catalog::builtin().expect("builtin");
    let first = catalog.iter().next().unwrap();
    assert_eq!(first.id(), "yahuah-frequency");
    assert_eq!(first.category(), Category::Names);
    assert_eq!(first.icon(), Some("📖"));
    assert!(first.fact().starts_with("The name \"Yahuah\" (יהוה) appears over 6,800 times"));
    let last = catalog.iter().last().unwrap();
    assert_eq!(last.id(), "every-tongue-confess");
    assert_eq!(last.category(), Category::Insight);
    let psalm = catalog.get("psalm-119").expect("psalm-119");
    assert!(psalm.fact().contains("It's an acrostic poem"));
}

#[test]
fn every_builtin_fact_is_decorated() {
    assert!(BUILTIN_FACTS.iter().all(|f| f.icon().is_some()));
    assert!(BUILTIN_FACTS.iter().all(|f| !f.fact().trim().is_empty()));
}

#[test]
fn builtin_rotation_examples() {
    let catalog = Catalog::builtin().expect("builtin");
    let jan_1 = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    assert_eq!(catalog.fact_of_the_day_at(&jan_1).id(), "elohiym-plural");
    // day 252 wraps around to the first entry
    let day_252 = Utc.with_ymd_and_hms(2023, 9, 9, 9, 0, 0).unwrap();
    assert_eq!(catalog.fact_of_the_day_at(&day_252).id(), "yahuah-frequency");
}

#[test]
fn shared_catalog_is_built_once() {
    let here = Catalog::shared().expect("shared") as *const Catalog as usize;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| Catalog::shared().expect("shared") as *const Catalog as usize)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), here);
    }
    assert_eq!(Catalog::shared().unwrap().fact_count(), 252);
}
