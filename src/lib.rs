//! Pension Projection - year-by-year fund projection with regulated drawdown
//!
//! This library provides:
//! - Validated simulation inputs built from form-style (percentage) parameters
//! - Accumulation phase projection (contributions + average-balance growth)
//! - Drawdown phase projection governed by an age-indexed rule table
//! - Guidance classification of the projected outcome
//! - Text, CSV, JSON and HTML renderings of the results

pub mod error;
pub mod input;
pub mod assumptions;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{ProjectionError, TableError};
pub use input::{FormParams, SimulationInput};
pub use assumptions::{DrawdownRule, DrawdownTable, RoiOption, RoiTable};
pub use projection::{
    AccumulationRow, DrawdownRow, DrawdownStop, Guidance, ProjectionConfig, ProjectionEngine,
    ProjectionResult,
};
