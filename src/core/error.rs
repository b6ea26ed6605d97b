//! Error type shared by the rating model, league tables and configuration.

use thiserror::Error;

/// Errors raised while building or validating simulation inputs.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("{player} has no pitcher ratings and cannot pitch")]
    MissingPitcherRatings { player: String },

    #[error("{player}: rating `{field}` = {value} is outside [0, 1]")]
    RatingOutOfRange {
        player: String,
        field: &'static str,
        value: f64,
    },

    #[error("{player}: pitch usage sums to {total}, expected 1.0")]
    PitchUsage { player: String, total: f64 },

    #[error("distribution has no probability mass (total = {total})")]
    DegenerateDistribution { total: f64 },

    #[error("rate for {outcome} is invalid: {value}")]
    InvalidRate { outcome: &'static str, value: f64 },

    #[error("cannot derive rates from an empty sample")]
    EmptySample,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for fallible simulation setup.
pub type Result<T> = std::result::Result<T, SimError>;
