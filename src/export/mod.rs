//! Export module for shell-expenses
//!
//! Provides CSV export of the expenses table.

pub mod csv;

pub use self::csv::{export_expenses_csv, write_expenses_csv};
