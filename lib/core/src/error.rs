use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Structural violations detected before a query ever reaches the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid tie breaker: {0} (must be within 0.0..=1.0)")]
    InvalidTieBreaker(f64),

    #[error("Invalid topK: {0} (must be positive)")]
    InvalidTopK(usize),

    #[error("Vector query has an empty vector")]
    EmptyVector,

    #[error("Vector component at index {index} is not a finite number")]
    NonFiniteVector { index: usize },

    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    #[error("Invalid limit: {0} (must be positive)")]
    InvalidLimit(i64),

    #[error("Invalid offset: {0} (must be non-negative)")]
    InvalidOffset(i64),

    #[error("Invalid reRankDocs: {0} (must be positive)")]
    InvalidRerankDocs(usize),

    #[error("{name} is not a finite number: {value}")]
    NonFiniteNumber { name: &'static str, value: f64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteNumber { name, value })
    }
}

pub(crate) fn ensure_non_empty(name: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::EmptyField(name))
    } else {
        Ok(())
    }
}
