//! Validated simulation input

use crate::error::ProjectionError;
use serde::{Deserialize, Serialize};

/// Earliest accepted retirement age
pub const MIN_RETIREMENT_AGE: u32 = 50;

/// Latest accepted retirement age
pub const MAX_RETIREMENT_AGE: u32 = 79;

/// Age at which the drawdown projection ends
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 100;

/// Inputs for a single projection run
///
/// All rates are fractions (0.05 = 5%). Build one with [`SimulationInput::new`]
/// or [`crate::FormParams::into_input`]; both validate before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Current age in whole years
    pub age: u32,
    /// Age at which contributions stop and drawdown begins
    pub retirement_age: u32,
    /// Fund balance today
    pub initial_fund: f64,
    /// Contribution paid in the first projected year
    pub initial_contribution: f64,
    /// Annual growth of the contribution (0.03 = contributions rise 3% a year)
    pub contribution_growth_rate: f64,
    /// Annual investment return on the fund
    pub return_rate: f64,
    /// Annual inflation used to index the minimum withdrawal
    pub inflation_rate: f64,
    /// Drawdown runs for ages below this
    pub life_expectancy: u32,
    /// Calendar year of the first accumulation row
    pub anchor_year: i32,
}

impl SimulationInput {
    /// Create a validated input with zero inflation and the default life expectancy
    pub fn new(
        age: u32,
        retirement_age: u32,
        initial_fund: f64,
        initial_contribution: f64,
        contribution_growth_rate: f64,
        return_rate: f64,
        anchor_year: i32,
    ) -> Result<Self, ProjectionError> {
        let input = Self {
            age,
            retirement_age,
            initial_fund,
            initial_contribution,
            contribution_growth_rate,
            return_rate,
            inflation_rate: 0.0,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            anchor_year,
        };
        input.validate()?;
        Ok(input)
    }

    /// Set the inflation rate used to index minimum withdrawals
    pub fn with_inflation(mut self, inflation_rate: f64) -> Result<Self, ProjectionError> {
        self.inflation_rate = inflation_rate;
        self.validate()?;
        Ok(self)
    }

    /// Set the age at which drawdown stops
    pub fn with_life_expectancy(mut self, life_expectancy: u32) -> Result<Self, ProjectionError> {
        self.life_expectancy = life_expectancy;
        self.validate()?;
        Ok(self)
    }

    /// Check every precondition of the projection
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.retirement_age <= self.age {
            return Err(ProjectionError::RetirementNotAfterAge {
                age: self.age,
                retirement_age: self.retirement_age,
            });
        }

        if !(MIN_RETIREMENT_AGE..=MAX_RETIREMENT_AGE).contains(&self.retirement_age) {
            return Err(ProjectionError::RetirementAgeOutOfRange {
                retirement_age: self.retirement_age,
                min: MIN_RETIREMENT_AGE,
                max: MAX_RETIREMENT_AGE,
            });
        }

        if self.life_expectancy <= self.retirement_age {
            return Err(ProjectionError::LifeExpectancyTooLow {
                life_expectancy: self.life_expectancy,
                retirement_age: self.retirement_age,
            });
        }

        for (field, value) in [
            ("fund", self.initial_fund),
            ("contribution", self.initial_contribution),
        ] {
            // NaN fails this check too
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ProjectionError::NegativeAmount { field, value });
            }
        }

        for (field, value) in [
            ("contribution growth rate", self.contribution_growth_rate),
            ("return rate", self.return_rate),
            ("inflation rate", self.inflation_rate),
        ] {
            if !value.is_finite() {
                return Err(ProjectionError::NonFiniteRate { field, value });
            }
        }

        Ok(())
    }

    /// Number of accumulation years
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.age)
    }

    /// Calendar year in which the person reaches `attained_age`
    pub fn calendar_year(&self, attained_age: u32) -> i32 {
        self.anchor_year + (attained_age as i32 - self.age as i32)
    }
}
