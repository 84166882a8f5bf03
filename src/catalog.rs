// the id index uses the same fast hashing as elsewhere
use core::hash::BuildHasherDefault;
use seahash::SeaHasher;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

// used to read the wall clock when no date is given
use chrono::{DateTime, Local, TimeZone};
// used for random picks
use rand::Rng;
// so the shared catalog is built exactly once, even under concurrent first use
use lazy_static::lazy_static;
use tracing::{debug, trace, warn};

// our own stuff that we need
use crate::error::{FactError, Result};
use crate::fact::{Category, FactRecord};
use crate::facts::BUILTIN_FACTS;
use crate::rotation::{self, DayCounting};

pub type IdHasher = BuildHasherDefault<SeaHasher>;

lazy_static! {
    static ref SHARED: Result<Catalog> = Catalog::builtin();
}

// ------------- Catalog -------------
#[derive(Debug, Clone)]
pub struct Catalog {
    facts: Vec<FactRecord>,
    lookup: HashMap<String, usize, IdHasher>,
    day_counting: DayCounting,
}

impl Catalog {
    /// Takes ownership of `facts`, which must be non-empty, carry unique ids
    /// and have text in every record. Order is kept as given.
    pub fn new(facts: Vec<FactRecord>) -> Result<Self> {
        if facts.is_empty() {
            warn!("refusing to build an empty fact catalog");
            return Err(FactError::EmptyCatalog);
        }
        let mut lookup = HashMap::with_capacity_and_hasher(facts.len(), IdHasher::default());
        for (index, record) in facts.iter().enumerate() {
            if record.fact().trim().is_empty() {
                warn!(id = record.id(), "fact has no text");
                return Err(FactError::EmptyFact {
                    id: record.id().to_string(),
                });
            }
            match lookup.entry(record.id().to_string()) {
                Entry::Vacant(e) => {
                    e.insert(index);
                }
                Entry::Occupied(e) => {
                    warn!(id = e.key().as_str(), "duplicate fact id");
                    return Err(FactError::DuplicateId { id: e.key().clone() });
                }
            }
        }
        debug!(count = facts.len(), "fact catalog ready");
        Ok(Self {
            facts,
            lookup,
            day_counting: DayCounting::default(),
        })
    }
    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_FACTS.to_vec())
    }
    /// The built-in catalog, validated on first use and kept for the lifetime
    /// of the process. Only for callers that have no composition root to own a
    /// [`Catalog`]; first use from several threads at once still builds it a
    /// single time. Everything else should build its own with [`Catalog::builtin`].
    pub fn shared() -> Result<&'static Catalog> {
        (*SHARED).as_ref().map_err(Clone::clone)
    }
    pub fn with_day_counting(mut self, day_counting: DayCounting) -> Self {
        self.day_counting = day_counting;
        self
    }
    pub fn day_counting(&self) -> DayCounting {
        self.day_counting
    }

    // ------------- queries -------------
    pub fn fact_of_the_day(&self) -> &FactRecord {
        self.fact_of_the_day_at(&Local::now())
    }
    /// Same fact for every instant of the same local day; advances one
    /// position per day and wraps around after `fact_count()` days.
    pub fn fact_of_the_day_at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> &FactRecord {
        let day = rotation::day_of_year(now, self.day_counting);
        let record = &self.facts[self.index_for_day(day)];
        trace!(day, id = record.id(), "fact of the day");
        record
    }
    pub fn index_for_day(&self, day: i64) -> usize {
        // never empty, so the modulus is at least one
        day.rem_euclid(self.facts.len() as i64) as usize
    }
    pub fn random_fact(&self) -> &FactRecord {
        self.random_fact_with(&mut rand::thread_rng())
    }
    pub fn random_fact_with<R: Rng>(&self, rng: &mut R) -> &FactRecord {
        &self.facts[rng.gen_range(0..self.facts.len())]
    }
    pub fn facts_by_category(&self, category: Category) -> Vec<&FactRecord> {
        self.facts
            .iter()
            .filter(|record| record.category() == category)
            .collect()
    }
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }

    // ------------- lookups -------------
    pub fn get(&self, id: &str) -> Option<&FactRecord> {
        self.lookup.get(id).map(|&index| &self.facts[index])
    }
    pub fn iter(&self) -> std::slice::Iter<'_, FactRecord> {
        self.facts.iter()
    }
    pub fn category_counts(&self) -> [(Category, usize); 5] {
        let mut counts = Category::ALL.map(|category| (category, 0));
        for record in &self.facts {
            if let Some(entry) = counts.iter_mut().find(|(c, _)| *c == record.category()) {
                entry.1 += 1;
            }
        }
        counts
    }
}

impl<'c> IntoIterator for &'c Catalog {
    type Item = &'c FactRecord;
    type IntoIter = std::slice::Iter<'c, FactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
