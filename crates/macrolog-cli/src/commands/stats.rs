use clap::Subcommand;
use macrolog_core::{DailyAggregate, WindowSummary, MONTH_DAYS, WEEK_DAYS};
use serde::Serialize;

use super::open_tracker;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// Arbitrary trailing window
    Window {
        /// Number of calendar days ending today
        #[arg(long)]
        days: u32,
    },
}

#[derive(Serialize)]
struct WindowReport {
    days: Vec<DailyAggregate>,
    summary: WindowSummary,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;

    let days = match action {
        StatsAction::Week => WEEK_DAYS,
        StatsAction::Month => MONTH_DAYS,
        StatsAction::Window { days } => days,
    };

    let window = tracker.rollup(days, None);
    let summary = macrolog_core::summarize(&window);
    let report = WindowReport {
        days: window,
        summary,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
