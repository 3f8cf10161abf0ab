//! Storage layer for shell-expenses
//!
//! A single SQLite database file holds the `expenses` table. The
//! [`ExpenseStore`] owns the connection; [`init`] handles first-run table
//! creation.

pub mod expenses;
pub mod init;

pub use expenses::ExpenseStore;
