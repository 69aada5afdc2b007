//! Error types for the policy engine
//!
//! Extraction, classification and aggregation never fail; only building a
//! pattern library and writing artifacts can.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolicyError>;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
