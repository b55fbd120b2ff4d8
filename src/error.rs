//! Error types for input validation and reference table loading

use std::path::PathBuf;

/// Errors raised while loading a reference table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read table {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table row: {0}")]
    Csv(#[from] csv::Error),

    #[error("drawdown table lists age {0} more than once")]
    DuplicateAge(u32),

    #[error("drawdown rule for age {age} has invalid {field}: {value}")]
    InvalidRule { age: u32, field: &'static str, value: f64 },

    #[error("table has no rows")]
    Empty,
}

/// Errors that reject a projection before any row is produced
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    #[error("retirement age {retirement_age} must be greater than current age {age}")]
    RetirementNotAfterAge { age: u32, retirement_age: u32 },

    #[error("retirement age {retirement_age} must be between {min} and {max}")]
    RetirementAgeOutOfRange { retirement_age: u32, min: u32, max: u32 },

    #[error("life expectancy {life_expectancy} must be greater than retirement age {retirement_age}")]
    LifeExpectancyTooLow { life_expectancy: u32, retirement_age: u32 },

    #[error("{field} must be a non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} must be a finite rate, got {value}")]
    NonFiniteRate { field: &'static str, value: f64 },

    #[error("reference table error: {0}")]
    Table(#[from] TableError),
}
