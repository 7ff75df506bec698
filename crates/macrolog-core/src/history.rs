//! Meal history cache.
//!
//! A deduplicated-by-name template store fed by every entry create/update,
//! used to prefill the next log of the same food. Templates hold the most
//! recently logged macros for a name, not a true history; on a
//! case-insensitive name collision the newer write replaces every field,
//! including the stored casing.

use serde::{Deserialize, Serialize};

use crate::ledger::EntryInput;
use crate::units::EnergyUnit;

/// Cached macros for a previously logged food name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub name: String,
    /// Canonical energy in kilocalories.
    pub energy: u32,
    /// Protein in grams.
    pub protein: f64,
}

/// Ordered template store, one template per case-insensitive distinct name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealHistory {
    templates: Vec<MealTemplate>,
}

impl MealHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the macros just logged for `name`.
    ///
    /// Case-insensitive match against existing templates: a match is replaced
    /// in place (last write wins, position kept), otherwise a new template is
    /// appended. Templates are never removed automatically.
    pub fn upsert(&mut self, name: &str, energy: u32, protein: f64) {
        let template = MealTemplate {
            name: name.to_string(),
            energy,
            protein,
        };
        // Unicode case folding, the same as search uses, so dedup and
        // search agree on which names are "the same".
        let folded = name.to_lowercase();
        match self
            .templates
            .iter_mut()
            .find(|t| t.name.to_lowercase() == folded)
        {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Case-insensitive substring search, in insertion/update order.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&MealTemplate> {
        let needle = term.to_lowercase();
        self.templates
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// All templates in insertion/update order.
    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl MealTemplate {
    /// Prefilled draft fields for re-logging this meal. Pure projection; the
    /// cache is not touched.
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            name: self.name.clone(),
            energy: self.energy.to_string(),
            unit: EnergyUnit::Kcal,
            protein: self.protein.to_string(),
        }
    }
}
