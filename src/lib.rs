//! Didyouknow – an embedded catalog of short "Did You Know?" facts.
//!
//! Each [`fact::FactRecord`] carries a stable id, one of five closed
//! [`fact::Category`] tags (`names`, `statistics`, `translation`, `history`,
//! `insight`), its text and an optional decorative icon. A
//! [`catalog::Catalog`] owns an ordered, validated, read-only list of them and
//! answers four questions:
//! * which fact belongs to a given day ([`catalog::Catalog::fact_of_the_day_at`]),
//! * a random fact ([`catalog::Catalog::random_fact_with`]),
//! * every fact of a category, in catalog order ([`catalog::Catalog::facts_by_category`]),
//! * how many facts there are ([`catalog::Catalog::fact_count`]).
//!
//! ## Modules
//! * [`fact`] – The record and category types.
//! * [`facts`] – The built-in entries.
//! * [`catalog`] – Validation and the query operations.
//! * [`rotation`] – Day-of-year ordinals behind the daily rotation.
//! * [`settings`] – Configuration read through the `config` crate.
//!
//! ## Daily rotation
//! The day's fact is the entry at `day_of_year % fact_count()`, so the whole
//! catalog repeats every `fact_count()` days and starts over each January 1st.
//! How the day of year is counted is chosen with [`rotation::DayCounting`].
//!
//! ## Quick Start
//! ```
//! use chrono::{TimeZone, Utc};
//! use didyouknow::{catalog::Catalog, fact::Category};
//! let catalog = Catalog::builtin().unwrap();
//! let day = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! assert_eq!(catalog.fact_of_the_day_at(&day).id(), "elohiym-plural");
//! assert_eq!(catalog.facts_by_category(Category::Translation).len(), 20);
//! ```

pub mod catalog;
pub mod error;
pub mod fact;
pub mod facts;
pub mod rotation;
pub mod settings;

pub use catalog::Catalog;
pub use error::{FactError, Result};
pub use fact::{Category, FactRecord};
pub use rotation::DayCounting;
