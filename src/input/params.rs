//! Form-style projection parameters
//!
//! Rates arrive as percentages, the way they are typed into the calculator
//! form (5.0 = 5%). [`FormParams::into_input`] converts them to fractions and
//! validates the result.

use super::{SimulationInput, DEFAULT_LIFE_EXPECTANCY};
use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Return on investment used when none is given, percent
pub const DEFAULT_ROI_PERCENT: f64 = 5.0;

/// Raw parameters as entered on the form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormParams {
    /// Current age
    pub age: u32,

    /// Planned retirement age (50 to 79)
    pub retirement_age: u32,

    /// Current fund balance
    #[serde(default)]
    pub fund: f64,

    /// First-year contribution
    #[serde(default)]
    pub contribution: f64,

    /// Annual contribution growth, percent
    #[serde(default)]
    pub growth_rate: f64,

    /// Annual return on investment, percent
    #[serde(default = "default_roi")]
    pub roi: f64,

    /// Annual inflation, percent
    #[serde(default)]
    pub inflation_rate: f64,

    /// Age at which drawdown stops
    #[serde(default = "default_life_expectancy")]
    pub life_expectancy: u32,
}

fn default_roi() -> f64 { DEFAULT_ROI_PERCENT }
fn default_life_expectancy() -> u32 { DEFAULT_LIFE_EXPECTANCY }

impl Default for FormParams {
    fn default() -> Self {
        Self {
            age: 30,
            retirement_age: 65,
            fund: 0.0,
            contribution: 0.0,
            growth_rate: 0.0,
            roi: DEFAULT_ROI_PERCENT,
            inflation_rate: 0.0,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
        }
    }
}

impl FormParams {
    /// Convert percentages to fractions and validate
    ///
    /// `anchor_year` is the calendar year of the first accumulation row.
    pub fn into_input(self, anchor_year: i32) -> Result<SimulationInput, ProjectionError> {
        let input = SimulationInput {
            age: self.age,
            retirement_age: self.retirement_age,
            initial_fund: self.fund,
            initial_contribution: self.contribution,
            contribution_growth_rate: self.growth_rate / 100.0,
            return_rate: self.roi / 100.0,
            inflation_rate: self.inflation_rate / 100.0,
            life_expectancy: self.life_expectancy,
            anchor_year,
        };
        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_percent_conversion() {
        let params = FormParams {
            age: 30,
            retirement_age: 65,
            fund: 10_000.0,
            contribution: 1_000.0,
            growth_rate: 3.0,
            roi: 5.0,
            inflation_rate: 2.5,
            life_expectancy: 90,
        };
        let input = params.into_input(2025).expect("valid params");

        assert_relative_eq!(input.contribution_growth_rate, 0.03);
        assert_relative_eq!(input.return_rate, 0.05);
        assert_relative_eq!(input.inflation_rate, 0.025);
        assert_eq!(input.life_expectancy, 90);
        assert_eq!(input.anchor_year, 2025);
    }

    #[test]
    fn test_rejects_invalid_retirement() {
        let params = FormParams { age: 45, retirement_age: 40, ..Default::default() };
        assert!(matches!(
            params.into_input(2025),
            Err(ProjectionError::RetirementNotAfterAge { .. })
        ));
    }

    #[test]
    fn test_json_defaults() {
        let params: FormParams =
            serde_json::from_str(r#"{"age": 40, "retirementAge": 67, "fund": 50000}"#)
                .expect("parse params");

        assert_eq!(params.roi, DEFAULT_ROI_PERCENT);
        assert_eq!(FormParams::default().roi, DEFAULT_ROI_PERCENT);
        assert_eq!(params.inflation_rate, 0.0);
        assert_eq!(params.contribution, 0.0);
        assert_eq!(params.life_expectancy, 100);
    }
}
