//! Projection engine for the accumulation and drawdown phases

mod engine;
mod cashflows;
mod guidance;

pub use engine::{ProjectionEngine, ProjectionConfig, AccumulationOutcome, DrawdownOutcome};
pub use cashflows::{AccumulationRow, DrawdownRow, DrawdownStop, ProjectionResult};
pub use guidance::Guidance;

// ============================================================================
// Guidance Policy
// ============================================================================
// The outlook is judged by the balance left at a fixed reference age.

/// Age whose start-of-year balance drives the guidance label
pub const GUIDANCE_REFERENCE_AGE: u32 = 85;

/// Balance above which the outlook is "good"
pub const GUIDANCE_COMFORT_BALANCE: f64 = 50_000.0;

/// Last drawdown age before any remaining fund may be taken as a lump sum
pub const LUMP_SUM_NOTICE_AGE: u32 = 89;
