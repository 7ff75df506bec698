use clap::Subcommand;

use super::{open_tracker, resolve_day};

#[derive(Subcommand)]
pub enum DayAction {
    /// A day's summed energy and protein
    Totals {
        /// Day to sum (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// A day's totals classified against the goals
    Show {
        /// Day to report (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(action: DayAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;

    match action {
        DayAction::Totals { date } => {
            let day = resolve_day(date)?;
            let totals = tracker.totals_for(&day);
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
        DayAction::Show { date } => {
            let day = resolve_day(date)?;
            let report = tracker.day_report(&day)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
