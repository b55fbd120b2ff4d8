//! Simulation inputs and form-boundary validation

mod data;
pub mod params;

pub use data::{SimulationInput, MIN_RETIREMENT_AGE, MAX_RETIREMENT_AGE, DEFAULT_LIFE_EXPECTANCY};
pub use params::{FormParams, DEFAULT_ROI_PERCENT};
