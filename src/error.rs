//! Error types for the fallible edges of the engine (table and book loading)
//!
//! The calculators themselves never fail; invalid numbers are normalised to 0.

use thiserror::Error;

/// Errors raised while loading assumption tables, policy books or JSON requests
#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid number '{value}' in {table}")]
    ParseNumber { table: &'static str, value: String },

    #[error("Invalid {table} table: {message}")]
    InvalidTable { table: &'static str, message: String },

    #[error("Unknown bonus basis: {0}")]
    UnknownBonusBasis(String),
}

pub type Result<T> = std::result::Result<T, PlanningError>;
