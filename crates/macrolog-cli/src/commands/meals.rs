use clap::Subcommand;

use super::open_tracker;

#[derive(Subcommand)]
pub enum MealsAction {
    /// All cached meal templates in insertion/update order
    List,
    /// Case-insensitive substring search over template names
    Search {
        /// Search term
        term: String,
    },
    /// Prefilled draft fields for re-logging a cached meal
    Apply {
        /// Template name (case-insensitive exact match)
        name: String,
    },
}

pub fn run(action: MealsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;

    match action {
        MealsAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(tracker.history().templates())?
            );
        }
        MealsAction::Search { term } => {
            let hits = tracker.history().search(&term);
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        MealsAction::Apply { name } => {
            let folded = name.to_lowercase();
            let template = tracker
                .history()
                .templates()
                .iter()
                .find(|t| t.name.to_lowercase() == folded);
            match template {
                Some(t) => println!("{}", serde_json::to_string_pretty(&t.to_input())?),
                None => {
                    eprintln!("no cached meal named '{name}'");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}
