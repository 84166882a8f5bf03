use didyouknow::catalog::Catalog;
use didyouknow::fact::{Category, FactRecord};

fn fixture(categories: &[Category]) -> Catalog {
    let facts = categories
        .iter()
        .enumerate()
        .map(|(i, &category)| {
            FactRecord::new(format!("fact-{i}"), category, format!("About {category} #{i}"))
        })
        .collect();
    Catalog::new(facts).expect("catalog")
}

#[test]
fn names_history_names() {
    let catalog = fixture(&[Category::Names, Category::History, Category::Names]);
    let names: Vec<&str> = catalog
        .facts_by_category(Category::Names)
        .into_iter()
        .map(|f| f.id())
        .collect();
    assert_eq!(names, vec!["fact-0", "fact-2"]);
    assert_eq!(catalog.fact_count(), 3);
}

#[test]
fn missing_category_gives_empty_result() {
    let catalog = fixture(&[Category::Names, Category::History]);
    assert!(catalog.facts_by_category(Category::Translation).is_empty());
    assert!(catalog.facts_by_category(Category::Insight).is_empty());
}

#[test]
fn filtering_twice_gives_the_same_sequence() {
    let catalog = Catalog::builtin().expect("builtin");
    let first = catalog.facts_by_category(Category::History);
    let second = catalog.facts_by_category(Category::History);
    assert_eq!(first, second);
    assert!(first.iter().all(|f| f.category() == Category::History));
}

#[test]
fn categories_partition_the_catalog() {
    let catalog = Catalog::builtin().expect("builtin");
    let mut ids: Vec<&str> = Category::ALL
        .into_iter()
        .flat_map(|category| catalog.facts_by_category(category))
        .map(|f| f.id())
        .collect();
    assert_eq!(ids.len(), catalog.fact_count());
    let mut expected: Vec<&str> = catalog.iter().map(|f| f.id()).collect();
    ids.sort_unstable();
    expected.sort_unstable();
    assert_eq!(ids, expected);
}

#[test]
fn filter_keeps_catalog_order() {
    let catalog = Catalog::builtin().expect("builtin");
    for category in Category::ALL {
        let positions: Vec<usize> = catalog
            .facts_by_category(category)
            .into_iter()
            .map(|f| catalog.iter().position(|g| g.id() == f.id()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{category} out of order");
    }
}

#[test]
fn category_counts_match_filter() {
    let catalog = fixture(&[
        Category::Insight,
        Category::Names,
        Category::Insight,
        Category::Statistics,
    ]);
    let counts = catalog.category_counts();
    assert_eq!(
        counts,
        [
            (Category::Names, 1),
            (Category::Statistics, 1),
            (Category::Translation, 0),
            (Category::History, 0),
            (Category::Insight, 2),
        ]
    );
    for (category, count) in counts {
        assert_eq!(catalog.facts_by_category(category).len(), count);
    }
}

#[test]
fn category_tags_parse() {
    assert_eq!("history".parse::<Category>(), Ok(Category::History));
    assert_eq!(" Translation ".parse::<Category>(), Ok(Category::Translation));
    assert!("trivia".parse::<Category>().is_err());
    for category in Category::ALL {
        assert_eq!(category.to_string().parse::<Category>(), Ok(category));
    }
}
