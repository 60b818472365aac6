use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_rocket::cli::{
    handle_config_command, handle_entry_command, handle_summary_command, EntryCommands,
};
use budget_rocket::config::{BudgetPaths, Settings};
use budget_rocket::models::EntryKind;
use budget_rocket::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track expenses and income and see where your budget stands",
    long_about = "Budget Rocket records expenses and income, totals them into \
                  reports and tells you whether you are running a surplus or \
                  a deficit. Data is kept in a JSON file, ./data/budget.json \
                  by default."
)]
struct Cli {
    /// Budget file to use instead of the configured one
    #[arg(short, long, global = true, env = "BUDGET_ROCKET_FILE")]
    file: Option<PathBuf>,

    /// Save even if invalid entries were skipped while loading (they are lost)
    #[arg(long, global = true)]
    force: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense report commands
    #[command(subcommand, alias = "exp")]
    Expense(EntryCommands),

    /// Income report commands
    #[command(subcommand, alias = "inc")]
    Income(EntryCommands),

    /// Show totals and whether the budget is in surplus or deficit
    Summary,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let budget_file = cli.file.unwrap_or_else(|| settings.budget_file(&paths));
    let store = BudgetStore::new(budget_file);

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_entry_command(&store, &settings, EntryKind::Expense, cmd, cli.force)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_entry_command(&store, &settings, EntryKind::Income, cmd, cli.force)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&store, &settings)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
                println!();
            }
            handle_config_command(&paths, &settings, &store);
        }
        None => {
            println!("Budget Rocket - expense and income tracking");
            println!();
            println!("Run 'budget --help' for usage information.");
        }
    }

    Ok(())
}
