pub mod config;
pub mod day;
pub mod entry;
pub mod goals;
pub mod meals;
pub mod stats;

use macrolog_core::{DayKey, JsonFileStore, Tracker};

/// Load the tracker over the default file store.
pub fn open_tracker() -> Result<Tracker<JsonFileStore>, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open()?;
    Ok(Tracker::load(store)?)
}

/// Resolve an optional `--date` argument, defaulting to today.
pub fn resolve_day(date: Option<String>) -> Result<DayKey, Box<dyn std::error::Error>> {
    match date {
        Some(raw) => Ok(DayKey::parse(&raw)?),
        None => Ok(DayKey::today()),
    }
}
