//! Custom error types for shell-expenses
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use rusqlite::ErrorCode;
use thiserror::Error;

/// The main error type for expense operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A table constraint rejected the row (e.g. non-positive amount)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other database failure, including connection errors
    #[error("Database error: {0}")]
    Database(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Interactive prompt errors
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ExpenseError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if a table constraint rejected the operation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<rusqlite::Error> for ExpenseError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => Self::ConstraintViolation(err.to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Result type alias for expense operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
