//! Error types for the vitalog_core library.

use chrono::NaiveDate;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for vitalog_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested metric key is outside the tracked set
    #[error("Unknown metric key: {key}")]
    UnknownMetric { key: String },

    /// Insert attempted with an already-present reading date
    #[error("Duplicate reading date: {date}")]
    DuplicateDate { date: NaiveDate },

    /// A query needed more readings than the store holds
    #[error("Insufficient data: need {needed} readings, have {have}")]
    InsufficientData { needed: usize, have: usize },

    /// Range filter given an unrecognized token
    #[error("Invalid range token: {token}")]
    InvalidRange { token: String },
}
