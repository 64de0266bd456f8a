// crates/citysuggest-core/src/error.rs
use thiserror::Error;

/// Errors raised at the I/O edges of the engine.
///
/// Searching and the session state machine never fail; only catalog
/// loading, config loading and store access can.
#[derive(Debug, Error)]
pub enum CityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CityError>;
