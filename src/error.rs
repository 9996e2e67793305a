//! Error types for the fixture kit.

use thiserror::Error;

/// Result type alias for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur in the fixture kit.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// `Calculator::divide` was called with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: fixture-kit <users.csv> [currency]")]
    MissingArgument,
}
