//! @acp:module "Errors"
//! @acp:summary "Error types for the abacus library"
//! @acp:domain generator
//! @acp:layer model

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AbacusError>;

/// @acp:summary "Hard failures; soft repair shortfalls are reported as diagnostics instead"
#[derive(Debug, Error)]
pub enum AbacusError {
    /// No nonzero value exists in the requested sampling range
    #[error("Cannot sample a nonzero value with bound {bound}")]
    InvalidBound { bound: i64 },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
