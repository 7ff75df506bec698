//! The day-keyed intake ledger.
//!
//! One [`IntakeEntry`] per logged food item, grouped under its [`DayKey`] in
//! insertion order. The ledger itself is a pure in-memory structure; the
//! [`Tracker`](crate::tracker::Tracker) layers persistence and meal-history
//! notification on top of it.
//!
//! Every mutation validates before it commits: a rejected command leaves the
//! ledger exactly as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::daykey::DayKey;
use crate::error::{NotFoundError, ValidationError};
use crate::units::{to_canonical, EnergyUnit};

/// One logged food item.
///
/// `energy` is stored in whole kilocalories; the rounding from the entered
/// magnitude happens once, at creation, and is the engine's one deliberate
/// precision-loss point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEntry {
    /// Opaque unique id, stable for the entry's lifetime, never reused.
    pub id: String,
    pub name: String,
    /// Canonical energy in kilocalories.
    pub energy: u32,
    /// Protein in grams.
    pub protein: f64,
    /// Informational only; ordering is insertion order, not timestamp order.
    pub created_at: DateTime<Utc>,
}

/// Elementwise sum of a day's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub energy: u32,
    pub protein: f64,
}

/// Raw draft fields for an entry, as they arrive from an input surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryInput {
    pub name: String,
    /// Energy magnitude, interpreted in `unit`.
    pub energy: String,
    pub unit: EnergyUnit,
    /// Protein magnitude in grams.
    pub protein: String,
}

/// An [`EntryInput`] that has passed validation and unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedEntry {
    pub name: String,
    pub energy_kcal: u32,
    pub protein: f64,
}

impl EntryInput {
    /// Validate and convert the draft.
    ///
    /// The name must be non-empty after trimming; energy and protein must
    /// parse as non-negative finite numbers. Energy is converted to
    /// kilocalories and rounded to the nearest whole unit here.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] encountered; nothing is mutated.
    pub fn validate(&self) -> Result<ValidatedEntry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let energy = parse_non_negative("energy", &self.energy)?;
        let protein = parse_non_negative("protein", &self.protein)?;
        let energy_kcal = to_canonical(energy, self.unit).round() as u32;
        Ok(ValidatedEntry {
            name: name.to_string(),
            energy_kcal,
            protein,
        })
    }
}

fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Mapping from day key to the day's ordered entry sequence.
///
/// A missing key and an empty sequence are the same observable state: an
/// unlogged day. Removal leaves the (now empty) sequence in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<DayKey, Vec<IntakeEntry>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated entry to `day`, assigning a fresh id.
    pub fn add(&mut self, day: &DayKey, entry: ValidatedEntry) -> IntakeEntry {
        let stored = IntakeEntry {
            id: Uuid::new_v4().to_string(),
            name: entry.name,
            energy: entry.energy_kcal,
            protein: entry.protein,
            created_at: Utc::now(),
        };
        self.days
            .entry(day.clone())
            .or_default()
            .push(stored.clone());
        stored
    }

    /// Replace the mutable fields of the entry with `id` under `day`,
    /// preserving its id, creation time, and position in the sequence.
    ///
    /// # Errors
    /// [`NotFoundError::Entry`] if no such entry exists under that day.
    pub fn update(
        &mut self,
        day: &DayKey,
        id: &str,
        entry: ValidatedEntry,
    ) -> Result<IntakeEntry, NotFoundError> {
        let existing = self
            .days
            .get_mut(day)
            .and_then(|entries| entries.iter_mut().find(|e| e.id == id))
            .ok_or_else(|| NotFoundError::Entry {
                id: id.to_string(),
                day: day.to_string(),
            })?;
        existing.name = entry.name;
        existing.energy = entry.energy_kcal;
        existing.protein = entry.protein;
        Ok(existing.clone())
    }

    /// Remove the entry with `id` under `day`.
    ///
    /// A second removal of the same id is an error, not a no-op.
    ///
    /// # Errors
    /// [`NotFoundError::Entry`] if no such entry exists under that day.
    pub fn remove(&mut self, day: &DayKey, id: &str) -> Result<IntakeEntry, NotFoundError> {
        let entries = self.days.get_mut(day).ok_or_else(|| NotFoundError::Entry {
            id: id.to_string(),
            day: day.to_string(),
        })?;
        let index = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| NotFoundError::Entry {
                id: id.to_string(),
                day: day.to_string(),
            })?;
        Ok(entries.remove(index))
    }

    /// The day's entries in insertion order; empty for unknown keys.
    pub fn entries_for(&self, day: &DayKey) -> &[IntakeEntry] {
        self.days.get(day).map_or(&[], Vec::as_slice)
    }

    /// Sum of energy and protein over the day's entries.
    ///
    /// Energy saturates at `u32::MAX`; validation already clamps single
    /// entries there, so a day of extreme entries cannot overflow.
    pub fn totals_for(&self, day: &DayKey) -> DayTotals {
        self.entries_for(day)
            .iter()
            .fold(DayTotals::default(), |acc, e| DayTotals {
                energy: acc.energy.saturating_add(e.energy),
                protein: acc.protein + e.protein,
            })
    }

    /// Number of days with at least one entry.
    pub fn logged_days(&self) -> usize {
        self.days.values().filter(|v| !v.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    fn input(name: &str, energy: &str, unit: EnergyUnit, protein: &str) -> EntryInput {
        EntryInput {
            name: name.to_string(),
            energy: energy.to_string(),
            unit,
            protein: protein.to_string(),
        }
    }

    #[test]
    fn validate_converts_and_rounds_energy() {
        let valid = input("Oats", "1000", EnergyUnit::Kj, "10").validate().unwrap();
        // 1000 kJ / 4.184 = 239.00... kcal
        assert_eq!(valid.energy_kcal, 239);
        assert_eq!(valid.protein, 10.0);
    }

    #[test]
    fn validate_rejects_bad_input() {
        assert!(matches!(
            input("  ", "100", EnergyUnit::Kcal, "5").validate(),
            Err(ValidationError::EmptyName)
        ));
        assert!(matches!(
            input("Oats", "abc", EnergyUnit::Kcal, "5").validate(),
            Err(ValidationError::NotANumber { field: "energy", .. })
        ));
        assert!(matches!(
            input("Oats", "100", EnergyUnit::Kcal, "-2").validate(),
            Err(ValidationError::OutOfRange { field: "protein", .. })
        ));
        assert!(matches!(
            input("Oats", "inf", EnergyUnit::Kcal, "5").validate(),
            Err(ValidationError::OutOfRange { field: "energy", .. })
        ));
    }

    #[test]
    fn add_then_entries_for_returns_exactly_that_entry() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        let stored = ledger.add(&d, input("Eggs", "140", EnergyUnit::Kcal, "12").validate().unwrap());
        let entries = ledger.entries_for(&d);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], stored);
        assert_eq!(entries[0].energy, 140);
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        for name in ["a", "b", "c"] {
            ledger.add(&d, input(name, "100", EnergyUnit::Kcal, "1").validate().unwrap());
        }
        let names: Vec<_> = ledger.entries_for(&d).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn ids_are_unique_across_rapid_adds() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        let valid = input("x", "1", EnergyUnit::Kcal, "0").validate().unwrap();
        let a = ledger.add(&d, valid.clone());
        let b = ledger.add(&d, valid);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn update_preserves_id_and_position() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        let first = ledger.add(&d, input("a", "100", EnergyUnit::Kcal, "1").validate().unwrap());
        ledger.add(&d, input("b", "200", EnergyUnit::Kcal, "2").validate().unwrap());

        let updated = ledger
            .update(&d, &first.id, input("a2", "150", EnergyUnit::Kcal, "3").validate().unwrap())
            .unwrap();
        assert_eq!(updated.id, first.id);
        assert_eq!(updated.created_at, first.created_at);

        let entries = ledger.entries_for(&d);
        assert_eq!(entries[0].name, "a2");
        assert_eq!(entries[0].energy, 150);
        assert_eq!(entries[1].name, "b");
    }

    #[test]
    fn update_unknown_id_fails() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        ledger.add(&d, input("a", "100", EnergyUnit::Kcal, "1").validate().unwrap());
        let err = ledger
            .update(&d, "missing", input("x", "1", EnergyUnit::Kcal, "0").validate().unwrap())
            .unwrap_err();
        assert!(matches!(err, NotFoundError::Entry { .. }));
    }

    #[test]
    fn remove_twice_is_an_error_and_leaves_day_unchanged() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        let a = ledger.add(&d, input("a", "100", EnergyUnit::Kcal, "1").validate().unwrap());
        let b = ledger.add(&d, input("b", "200", EnergyUnit::Kcal, "2").validate().unwrap());

        ledger.remove(&d, &a.id).unwrap();
        let before: Vec<_> = ledger.entries_for(&d).to_vec();
        assert!(ledger.remove(&d, &a.id).is_err());
        assert_eq!(ledger.entries_for(&d), before.as_slice());
        assert_eq!(ledger.entries_for(&d), [b]);
    }

    #[test]
    fn totals_sum_over_entries_and_default_to_zero() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        assert_eq!(ledger.totals_for(&d), DayTotals::default());

        ledger.add(&d, input("Eggs", "140", EnergyUnit::Kcal, "12").validate().unwrap());
        ledger.add(&d, input("Eggs", "160", EnergyUnit::Kcal, "14").validate().unwrap());
        let totals = ledger.totals_for(&d);
        assert_eq!(totals.energy, 300);
        assert_eq!(totals.protein, 26.0);
    }

    #[test]
    fn totals_saturate_instead_of_overflowing() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        // validation clamps absurd magnitudes to u32::MAX per entry
        let huge = input("x", "99999999999999", EnergyUnit::Kcal, "1");
        ledger.add(&d, huge.validate().unwrap());
        ledger.add(&d, huge.validate().unwrap());
        assert_eq!(ledger.totals_for(&d).energy, u32::MAX);
    }

    #[test]
    fn ledger_roundtrips_through_json_preserving_order() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        for name in ["first", "second"] {
            ledger.add(&d, input(name, "100", EnergyUnit::Kcal, "1").validate().unwrap());
        }
        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        let names: Vec<_> = back.entries_for(&d).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
