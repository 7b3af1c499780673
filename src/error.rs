//! Error types for the calculator engine.
//!
//! The calculator core never fails: invalid input is ignored. These errors
//! only come from the outer layers (key entry, CSV streaming, CLI).

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors that can occur during engine operation.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Display text could not be read back as a number
    #[error("Display text {text:?} is not a valid operand")]
    InvalidOperand { text: String },

    /// Invalid key record
    #[error("Invalid key at row {row}: {message}")]
    InvalidKey { row: usize, message: String },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: desk-calc <keys.csv>")]
    MissingArgument,
}
