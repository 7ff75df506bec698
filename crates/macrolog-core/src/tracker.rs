//! The tracker root aggregate.
//!
//! Owns the ledger, meal history, goals, and display preferences as one
//! explicit object over a [`Storage`] implementation — no ambient state. It
//! is loaded once at startup, mutated in place, and persisted synchronously
//! as a side effect of every mutation, with the meal history notified on
//! every successful entry write.
//!
//! Single logical writer: every mutation runs to completion (validate,
//! mutate, persist, notify) before the next command, so no locking exists
//! anywhere in the engine.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::daykey::DayKey;
use crate::error::{CoreError, Result};
use crate::goals::{self, Band, Goals};
use crate::history::MealHistory;
use crate::ledger::{DayTotals, EntryInput, IntakeEntry, Ledger};
use crate::rollup::{self, DailyAggregate, WindowSummary};
use crate::storage::{keys, Storage};
use crate::units::{to_display, EnergyUnit};

/// Per-day adherence report against the configured goals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub day: DayKey,
    pub label: String,
    /// Day total energy in the display unit.
    pub energy: u32,
    pub energy_unit: &'static str,
    /// Day total protein in grams.
    pub protein: f64,
    pub energy_band: Band,
    pub protein_band: Band,
    /// Progress fractions capped at 1.0.
    pub energy_progress: f64,
    pub protein_progress: f64,
    /// Coarse binary over-goal flags for the day list.
    pub energy_over: bool,
    pub protein_over: bool,
}

/// The engine's root aggregate.
pub struct Tracker<S: Storage> {
    store: S,
    ledger: Ledger,
    history: MealHistory,
    goals: Goals,
    display_unit: EnergyUnit,
    dark_mode: bool,
}

impl<S: Storage> Tracker<S> {
    /// Load all persisted records through `store`.
    ///
    /// An absent or malformed record decodes to its documented default
    /// (empty ledger, 2000/150 goals, empty history, kcal, dark theme);
    /// only store-level failures propagate.
    ///
    /// # Errors
    /// [`CoreError::Persistence`] if the store itself fails to load a key.
    pub fn load(store: S) -> Result<Self> {
        let ledger = load_record(&store, keys::LEDGER)?.unwrap_or_default();
        let history = load_record(&store, keys::MEAL_HISTORY)?.unwrap_or_default();
        let goals = load_record::<Goals, S>(&store, keys::GOALS)?
            .and_then(|g| Goals::new(g.energy_goal, g.protein_goal).ok())
            .unwrap_or_default();
        let display_unit = load_record(&store, keys::DISPLAY_UNIT)?.unwrap_or_default();
        let dark_mode = load_record(&store, keys::THEME)?.unwrap_or(true);
        Ok(Self {
            store,
            ledger,
            history,
            goals,
            display_unit,
            dark_mode,
        })
    }

    // ---- mutations -------------------------------------------------------

    /// Validate and append a new entry to `day`, then persist the ledger and
    /// update the meal history.
    ///
    /// # Errors
    /// [`CoreError::Validation`] on bad input; nothing is mutated in that
    /// case. [`CoreError::Persistence`] if the store fails.
    pub fn add_entry(&mut self, day: &DayKey, input: &EntryInput) -> Result<IntakeEntry> {
        let validated = input.validate()?;
        let stored = self.ledger.add(day, validated);
        self.persist(keys::LEDGER, &self.ledger)?;
        self.history
            .upsert(&stored.name, stored.energy, stored.protein);
        self.persist(keys::MEAL_HISTORY, &self.history)?;
        Ok(stored)
    }

    /// Validate and replace the mutable fields of an existing entry, then
    /// persist the ledger and update the meal history.
    ///
    /// # Errors
    /// [`CoreError::Validation`] on bad input, [`CoreError::NotFound`] if no
    /// entry with `id` exists under `day`; prior state is untouched either
    /// way.
    pub fn update_entry(
        &mut self,
        day: &DayKey,
        id: &str,
        input: &EntryInput,
    ) -> Result<IntakeEntry> {
        let validated = input.validate()?;
        let stored = self.ledger.update(day, id, validated)?;
        self.persist(keys::LEDGER, &self.ledger)?;
        self.history
            .upsert(&stored.name, stored.energy, stored.protein);
        self.persist(keys::MEAL_HISTORY, &self.history)?;
        Ok(stored)
    }

    /// Remove an entry and persist the ledger. The meal history is not
    /// touched: templates are never deleted automatically.
    ///
    /// # Errors
    /// [`CoreError::NotFound`] if no entry with `id` exists under `day`; the
    /// day's sequence is left unchanged.
    pub fn remove_entry(&mut self, day: &DayKey, id: &str) -> Result<IntakeEntry> {
        let removed = self.ledger.remove(day, id)?;
        self.persist(keys::LEDGER, &self.ledger)?;
        Ok(removed)
    }

    /// Replace the goals and persist them.
    ///
    /// # Errors
    /// [`CoreError::Config`] for non-positive goals; the previous goals stay
    /// in effect.
    pub fn set_goals(&mut self, energy_goal: u32, protein_goal: u32) -> Result<Goals> {
        let goals = Goals::new(energy_goal, protein_goal)?;
        self.goals = goals;
        self.persist(keys::GOALS, &self.goals)?;
        Ok(goals)
    }

    /// Switch the display unit and persist the preference. Stored energy is
    /// untouched; only rendering changes.
    pub fn set_display_unit(&mut self, unit: EnergyUnit) -> Result<()> {
        self.display_unit = unit;
        self.persist(keys::DISPLAY_UNIT, &self.display_unit)
    }

    /// Switch the theme flag and persist it.
    pub fn set_dark_mode(&mut self, dark: bool) -> Result<()> {
        self.dark_mode = dark;
        self.persist(keys::THEME, &self.dark_mode)
    }

    // ---- queries ---------------------------------------------------------

    pub fn entries_for(&self, day: &DayKey) -> &[IntakeEntry] {
        self.ledger.entries_for(day)
    }

    pub fn totals_for(&self, day: &DayKey) -> DayTotals {
        self.ledger.totals_for(day)
    }

    pub fn goals(&self) -> Goals {
        self.goals
    }

    pub fn display_unit(&self) -> EnergyUnit {
        self.display_unit
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn history(&self) -> &MealHistory {
        &self.history
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Per-day aggregates for the `days` calendar days ending at `anchor`
    /// (today when `None`), oldest first, exactly `days` elements.
    pub fn rollup(&self, days: u32, anchor: Option<NaiveDate>) -> Vec<DailyAggregate> {
        let anchor = anchor.unwrap_or_else(|| DayKey::today().date());
        rollup::rollup(&self.ledger, days, anchor)
    }

    /// Sum and per-day average over a trailing window.
    pub fn summary(&self, days: u32, anchor: Option<NaiveDate>) -> WindowSummary {
        rollup::summarize(&self.rollup(days, anchor))
    }

    /// Classify a day's totals against the configured goals.
    ///
    /// # Errors
    /// [`CoreError::Config`] only if the configured goals are non-positive,
    /// which `load` and `set_goals` rule out.
    pub fn day_report(&self, day: &DayKey) -> Result<DayReport> {
        let totals = self.totals_for(day);
        let energy_goal = f64::from(self.goals.energy_goal);
        let protein_goal = f64::from(self.goals.protein_goal);
        Ok(DayReport {
            label: day.label(),
            day: day.clone(),
            energy: to_display(totals.energy, self.display_unit),
            energy_unit: self.display_unit.label(),
            protein: totals.protein,
            energy_band: goals::energy_band(totals.energy, self.goals.energy_goal)?,
            protein_band: goals::protein_band(totals.protein, self.goals.protein_goal)?,
            energy_progress: goals::progress(f64::from(totals.energy), energy_goal)?,
            protein_progress: goals::progress(totals.protein, protein_goal)?,
            energy_over: goals::exceeds(f64::from(totals.energy), energy_goal)?,
            protein_over: goals::exceeds(totals.protein, protein_goal)?,
        })
    }

    /// Consume the tracker and hand back its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.store.save(key, &json)?;
        Ok(())
    }
}

fn load_record<T, S>(store: &S, key: &str) -> Result<Option<T>, CoreError>
where
    T: DeserializeOwned,
    S: Storage,
{
    let Some(raw) = store.load(key)? else {
        return Ok(None);
    };
    // A record that does not match its documented shape decodes to None and
    // the caller falls back to the default, rather than failing the system.
    Ok(serde_json::from_str(&raw).ok())
}
