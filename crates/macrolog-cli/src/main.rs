use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "macrolog-cli", version, about = "Macrolog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Intake entry management
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Per-day totals and goal adherence
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// Multi-day rollups
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Daily goal management
    Goals {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Meal history templates
    Meals {
        #[command(subcommand)]
        action: commands::meals::MealsAction,
    },
    /// Display preferences
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Entry { action } => commands::entry::run(action),
        Commands::Day { action } => commands::day::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Goals { action } => commands::goals::run(action),
        Commands::Meals { action } => commands::meals::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
