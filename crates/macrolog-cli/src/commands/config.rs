use clap::Subcommand;
use macrolog_core::EnergyUnit;

use super::open_tracker;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a preference value
    Get {
        /// Preference key ("unit" or "dark_mode")
        key: String,
    },
    /// Set a preference value
    Set {
        /// Preference key ("unit" or "dark_mode")
        key: String,
        /// New value
        value: String,
    },
    /// List all preferences
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;

    match action {
        ConfigAction::Get { key } => match key.as_str() {
            "unit" => println!("{}", tracker.display_unit()),
            "dark_mode" => println!("{}", tracker.dark_mode()),
            _ => {
                eprintln!("unknown key: {key}");
                std::process::exit(1);
            }
        },
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                "unit" => {
                    let unit: EnergyUnit = value.parse()?;
                    tracker.set_display_unit(unit)?;
                }
                "dark_mode" => {
                    let dark: bool = value.parse()?;
                    tracker.set_dark_mode(dark)?;
                }
                _ => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
            println!("ok");
        }
        ConfigAction::List => {
            let json = serde_json::json!({
                "unit": tracker.display_unit(),
                "dark_mode": tracker.dark_mode(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
