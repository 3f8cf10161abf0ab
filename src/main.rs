use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expenses::cli::{handle_expense_command, normalize_args, print_help, ExpenseCommands, HELP_TEXT};
use expenses::config::{paths::ExpensePaths, settings::Settings};
use expenses::storage::ExpenseStore;

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "EXPENSES_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Command-line expense tracker",
    override_help = HELP_TEXT,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        // Unknown commands and malformed argument lists get the usage block
        Err(_) => {
            print_help();
            return Ok(ExitCode::SUCCESS);
        }
    };

    let Some(command) = cli.command else {
        println!("ERROR: No arguments supplied.");
        println!();
        print_help();
        return Ok(ExitCode::FAILURE);
    };

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_logging(&settings);

    let cmd = match command {
        Commands::Expense(cmd) => cmd,
        Commands::Config => {
            show_config(&paths, &settings)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    paths.ensure_directories()?;
    let store = ExpenseStore::open(paths.database_file())?;
    if store.ensure_table()? {
        println!("Table does not exist...");
        println!("Creating table...");
    }

    handle_expense_command(&store, &settings, cmd)?;
    Ok(ExitCode::SUCCESS)
}

/// Print paths and settings; writes a default settings file on first use
fn show_config(paths: &ExpensePaths, settings: &Settings) -> Result<()> {
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        println!("Wrote default settings to {}", paths.settings_file().display());
        println!();
    }

    println!("shell-expenses Configuration");
    println!("============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Database file:    {}", paths.database_file().display());
    println!();
    println!("Settings:");
    println!("  Schema version: {}", settings.schema_version);
    println!("  Confirm clear:  {}", settings.confirm_clear);
    println!("  Log level:      {}", settings.log_level);
    Ok(())
}

/// Log to stderr so stdout carries only command output
fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
