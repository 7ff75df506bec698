//! Core error types for macrolog-core.
//!
//! This module defines the error hierarchy using thiserror. Every failure in
//! the engine is a local, recoverable condition: callers reject the offending
//! command and prior state stays untouched.

use thiserror::Error;

/// Core error type for macrolog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors on create/update
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A mutation targeted an unknown entry or day
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    /// Goal configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Opaque failure from the external key-value store
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Entry name is empty or whitespace-only
    #[error("Entry name must not be empty")]
    EmptyName,

    /// A numeric field failed to parse
    #[error("Invalid value for '{field}': cannot parse '{value}' as a number")]
    NotANumber { field: &'static str, value: String },

    /// A numeric field was negative or non-finite
    #[error("Invalid value for '{field}': {value} must be a non-negative finite number")]
    OutOfRange { field: &'static str, value: f64 },

    /// A day key string did not match the canonical format
    #[error("Invalid day key '{0}': expected YYYY-MM-DD")]
    BadDayKey(String),

    /// An energy unit string was not recognised
    #[error("Unknown energy unit '{0}': expected 'kcal' or 'kj'")]
    BadUnit(String),
}

/// Not-found errors.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// No entry with this id exists under the given day
    #[error("No entry with id {id} on {day}")]
    Entry { id: String, day: String },
}

/// Goal configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A goal must be strictly positive to evaluate progress against it
    #[error("Goal for '{metric}' must be positive, got {value}")]
    NonPositiveGoal { metric: &'static str, value: f64 },
}

/// Persistence boundary errors.
///
/// The store is opaque to the engine: failures are carried through
/// unmodified, never interpreted.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Load failed for a key
    #[error("Failed to load '{key}': {message}")]
    LoadFailed { key: String, message: String },

    /// Save failed for a key
    #[error("Failed to save '{key}': {message}")]
    SaveFailed { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
