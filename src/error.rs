use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Catalog must contain at least one fact")]
    EmptyCatalog,
    #[error("Duplicate fact id: {id}")]
    DuplicateId { id: String },
    #[error("Fact {id} has no text")]
    EmptyFact { id: String },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, FactError>;

// Helper conversions
impl From<config::ConfigError> for FactError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
