// used so the built-in facts can live in a static without allocating
use std::borrow::Cow;

// used to print out readable forms of a category
use std::fmt;
// used when parsing a category from configuration or user input
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactError;

// ------------- Category -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Names,
    Statistics,
    Translation,
    History,
    Insight,
}

impl Category {
    /// Every category, in the order they are listed when browsing.
    pub const ALL: [Category; 5] = [
        Category::Names,
        Category::Statistics,
        Category::Translation,
        Category::History,
        Category::Insight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Names => "names",
            Category::Statistics => "statistics",
            Category::Translation => "translation",
            Category::History => "history",
            Category::Insight => "insight",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = FactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| FactError::UnknownCategory(tag.to_string()))
    }
}

// ------------- FactRecord -------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactRecord {
    id: Cow<'static, str>,
    category: Category,
    fact: Cow<'static, str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<Cow<'static, str>>,
}

impl FactRecord {
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        category: Category,
        fact: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            fact: fact.into(),
            icon: None,
        }
    }
    pub fn with_icon(mut self, icon: impl Into<Cow<'static, str>>) -> Self {
        self.icon = Some(icon.into());
        self
    }
    pub const fn from_static(
        id: &'static str,
        category: Category,
        fact: &'static str,
        icon: Option<&'static str>,
    ) -> Self {
        let icon = match icon {
            Some(icon) => Some(Cow::Borrowed(icon)),
            None => None,
        };
        Self {
            id: Cow::Borrowed(id),
            category,
            fact: Cow::Borrowed(fact),
            icon,
        }
    }
    // Fields stay private and are only exposed through getters,
    // so a record cannot change once it is in a catalog.
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn fact(&self) -> &str {
        &self.fact
    }
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

impl fmt::Display for FactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.icon() {
            Some(icon) => write!(f, "{} {}", icon, self.fact),
            None => f.write_str(&self.fact),
        }
    }
}
