//! shell-expenses - a command-line expense tracker
//!
//! Records, lists, searches, and deletes expenses kept in a single SQLite
//! table.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The expense entity and its money amount
//! - `storage`: The expense store owning the database connection
//! - `display`: Text formatting for query results
//! - `export`: CSV export
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use expenses::models::{Money, NewExpense};
//! use expenses::storage::ExpenseStore;
//!
//! # fn main() -> expenses::error::ExpenseResult<()> {
//! let store = ExpenseStore::open("shell-expenses.db")?;
//! store.ensure_table()?;
//! store.insert(&NewExpense::new(Money::from_cents(1000), "Lunch"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
