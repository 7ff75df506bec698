use clap::Subcommand;
use macrolog_core::Goals;

use super::open_tracker;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Current daily goals
    Show,
    /// Set daily goals
    Set {
        /// Daily energy goal in kcal (0 falls back to the default)
        energy: u32,
        /// Daily protein goal in grams (0 falls back to the default)
        protein: u32,
    },
}

pub fn run(action: GoalsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;

    match action {
        GoalsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&tracker.goals())?);
        }
        GoalsAction::Set { energy, protein } => {
            // Zero is not a usable goal; fall back per field rather than
            // leave the evaluator with nothing to divide by.
            let defaults = Goals::default();
            let energy = if energy == 0 { defaults.energy_goal } else { energy };
            let protein = if protein == 0 { defaults.protein_goal } else { protein };
            let goals = tracker.set_goals(energy, protein)?;
            println!("{}", serde_json::to_string_pretty(&goals)?);
        }
    }
    Ok(())
}
