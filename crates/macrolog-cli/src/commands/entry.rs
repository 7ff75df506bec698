use chrono::{DateTime, Utc};
use clap::Subcommand;
use macrolog_core::{to_display, EnergyUnit, EntryInput, IntakeEntry};
use serde::Serialize;

use super::{open_tracker, resolve_day};

#[derive(Subcommand)]
pub enum EntryAction {
    /// Log a food item
    Add {
        /// Food name
        name: String,
        /// Energy magnitude, interpreted in --unit
        energy: String,
        /// Protein in grams
        protein: String,
        /// Energy unit of the entered magnitude (kcal or kj)
        #[arg(long, default_value = "kcal")]
        unit: String,
        /// Day to log under (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Replace the fields of an existing entry
    Edit {
        /// Entry id
        id: String,
        /// New food name
        name: String,
        /// New energy magnitude, interpreted in --unit
        energy: String,
        /// New protein in grams
        protein: String,
        /// Energy unit of the entered magnitude (kcal or kj)
        #[arg(long, default_value = "kcal")]
        unit: String,
        /// Day the entry lives under (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Remove an entry
    Remove {
        /// Entry id
        id: String,
        /// Day the entry lives under (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List a day's entries in insertion order
    List {
        /// Day to list (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
}

/// Entry as printed: energy converted to the display unit.
#[derive(Serialize)]
struct EntryView {
    id: String,
    name: String,
    energy: u32,
    unit: &'static str,
    protein: f64,
    created_at: DateTime<Utc>,
}

impl EntryView {
    fn new(entry: &IntakeEntry, unit: EnergyUnit) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            energy: to_display(entry.energy, unit),
            unit: unit.label(),
            protein: entry.protein,
            created_at: entry.created_at,
        }
    }
}

pub fn run(action: EntryAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;

    match action {
        EntryAction::Add {
            name,
            energy,
            protein,
            unit,
            date,
        } => {
            let day = resolve_day(date)?;
            let input = EntryInput {
                name,
                energy,
                unit: unit.parse()?,
                protein,
            };
            let stored = tracker.add_entry(&day, &input)?;
            let view = EntryView::new(&stored, tracker.display_unit());
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        EntryAction::Edit {
            id,
            name,
            energy,
            protein,
            unit,
            date,
        } => {
            let day = resolve_day(date)?;
            let input = EntryInput {
                name,
                energy,
                unit: unit.parse()?,
                protein,
            };
            let stored = tracker.update_entry(&day, &id, &input)?;
            let view = EntryView::new(&stored, tracker.display_unit());
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        EntryAction::Remove { id, date } => {
            let day = resolve_day(date)?;
            let removed = tracker.remove_entry(&day, &id)?;
            println!("removed {} ({})", removed.name, removed.id);
        }
        EntryAction::List { date } => {
            let day = resolve_day(date)?;
            let unit = tracker.display_unit();
            let views: Vec<EntryView> = tracker
                .entries_for(&day)
                .iter()
                .map(|e| EntryView::new(e, unit))
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }
    Ok(())
}
