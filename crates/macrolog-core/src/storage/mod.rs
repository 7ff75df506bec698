//! The persistence boundary.
//!
//! The engine's contract with durable storage is a pair of load/save
//! operations keyed by string; how the bytes get durable is the store's
//! concern, not the engine's. Values are serialized JSON. A missing or
//! malformed record is never fatal: each decodes to its documented default.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::PersistenceError;

/// Persisted record keys.
pub mod keys {
    /// DayKey -> ordered entry sequence.
    pub const LEDGER: &str = "ledger";
    /// Daily energy/protein goals.
    pub const GOALS: &str = "goals";
    /// Ordered meal-template sequence.
    pub const MEAL_HISTORY: &str = "mealHistory";
    /// `"kcal"` or `"kj"`.
    pub const DISPLAY_UNIT: &str = "displayUnit";
    /// Dark-mode flag.
    pub const THEME: &str = "theme";
}

/// Synchronous key-value store for serialized records.
///
/// Implementations are assumed durable and always available; failures are
/// surfaced as [`PersistenceError`] and bubbled unmodified to the caller.
pub trait Storage {
    /// Load the serialized value for `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Save the serialized value for `key`.
    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Returns `~/.config/macrolog[-dev]/` based on MACROLOG_ENV, creating it if
/// needed. MACROLOG_DATA_DIR overrides the location entirely (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = if let Ok(explicit) = std::env::var("MACROLOG_DATA_DIR") {
        PathBuf::from(explicit)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");
        let env = std::env::var("MACROLOG_ENV").unwrap_or_else(|_| "production".to_string());
        if env == "dev" {
            base_dir.join("macrolog-dev")
        } else {
            base_dir.join("macrolog")
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
