//! Core data models for shell-expenses
//!
//! The domain is a single flat entity: an expense with an amount, a memo and
//! the date it was recorded.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
