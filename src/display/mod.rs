//! Display formatting for terminal output
//!
//! Turns query results into the text printed by the CLI.

pub mod expense;

pub use expense::{
    format_count, format_expense_report, format_expense_row, format_expense_table,
    format_search_header,
};
