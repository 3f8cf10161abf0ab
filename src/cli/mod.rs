//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod args;
pub mod expense;
pub mod prompt;

pub use args::{normalize_args, print_help, HELP_TEXT};
pub use expense::{handle_expense_command, ExpenseCommands};
