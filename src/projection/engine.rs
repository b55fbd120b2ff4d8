//! Two-phase projection: accumulation to retirement, then regulated drawdown

use serde::{Deserialize, Serialize};

use super::{AccumulationRow, DrawdownRow, DrawdownStop, Guidance, ProjectionResult, LUMP_SUM_NOTICE_AGE};
use crate::assumptions::DrawdownTable;
use crate::error::ProjectionError;
use crate::input::SimulationInput;

/// Projection switches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Grow each rule's minimum withdrawal with inflation from today
    #[serde(default = "default_true")]
    pub index_minimum_to_inflation: bool,
}

fn default_true() -> bool { true }

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self { index_minimum_to_inflation: true }
    }
}

/// Output of the accumulation phase
#[derive(Debug, Clone)]
pub struct AccumulationOutcome {
    pub rows: Vec<AccumulationRow>,
    /// Fund on the retirement date
    pub fund_at_retirement: f64,
}

/// Output of the drawdown phase
#[derive(Debug, Clone)]
pub struct DrawdownOutcome {
    pub rows: Vec<DrawdownRow>,
    pub final_fund: f64,
    pub stop: DrawdownStop,
}

/// Projection engine over one drawdown rule table
///
/// The engine holds no per-run state; a single engine can project many
/// inputs, including from several threads.
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine<'a> {
    rules: &'a DrawdownTable,
    config: ProjectionConfig,
}

impl<'a> ProjectionEngine<'a> {
    pub fn new(rules: &'a DrawdownTable, config: ProjectionConfig) -> Self {
        Self { rules, config }
    }

    /// Validate the input and run both phases
    pub fn project(&self, input: &SimulationInput) -> Result<ProjectionResult, ProjectionError> {
        input.validate()?;

        let accumulation = self.accumulate(input);
        let drawdown = self.draw_down(accumulation.fund_at_retirement, input);
        let guidance = Guidance::classify(&drawdown.rows);

        log::debug!(
            "Projected age {} to {}: fund at retirement {:.2}, {} drawdown years, {}, guidance {}",
            input.age,
            input.retirement_age,
            accumulation.fund_at_retirement,
            drawdown.rows.len(),
            drawdown.stop.describe(),
            guidance
        );

        Ok(ProjectionResult {
            accumulation: accumulation.rows,
            drawdown: drawdown.rows,
            fund_at_retirement: accumulation.fund_at_retirement,
            final_fund: drawdown.final_fund,
            stop: drawdown.stop,
            guidance,
        })
    }

    /// Project contributions and growth for each year before retirement
    ///
    /// Growth uses the average-balance approximation: the contribution is
    /// assumed to be invested for half the year.
    pub fn run_accumulation_phase(
        &self,
        input: &SimulationInput,
    ) -> Result<AccumulationOutcome, ProjectionError> {
        input.validate()?;
        Ok(self.accumulate(input))
    }

    /// Project regulated withdrawals from `fund` starting at retirement age
    ///
    /// Each year takes the larger of the rule percentage of the start balance
    /// and the (optionally inflation-indexed) minimum. A withdrawal that would
    /// meet or exceed the balance takes the whole balance, earns no growth,
    /// and ends the phase.
    pub fn run_drawdown_phase(
        &self,
        fund: f64,
        input: &SimulationInput,
    ) -> Result<DrawdownOutcome, ProjectionError> {
        input.validate()?;
        Ok(self.draw_down(fund, input))
    }

    fn accumulate(&self, input: &SimulationInput) -> AccumulationOutcome {
        let mut fund = input.initial_fund;
        let mut contribution = input.initial_contribution;
        let mut rows = Vec::with_capacity(input.years_to_retirement() as usize);

        for age in input.age..input.retirement_age {
            let growth = input.return_rate * (fund + contribution / 2.0);

            rows.push(AccumulationRow {
                calendar_year: input.calendar_year(age),
                age,
                fund_at_start: fund,
                contribution,
                growth,
            });

            fund += contribution + growth;
            contribution *= 1.0 + input.contribution_growth_rate;
        }

        AccumulationOutcome { rows, fund_at_retirement: fund }
    }

    fn draw_down(&self, mut fund: f64, input: &SimulationInput) -> DrawdownOutcome {
        let capacity = input.life_expectancy.saturating_sub(input.retirement_age) as usize;
        let mut rows = Vec::with_capacity(capacity);

        for age in input.retirement_age..input.life_expectancy {
            let Some(rule) = self.rules.get(age) else {
                log::debug!("No drawdown rule for age {age}, stopping");
                return DrawdownOutcome { rows, final_fund: fund, stop: DrawdownStop::NoRule { age } };
            };

            if fund <= 0.0 {
                log::debug!("Fund exhausted at age {age}");
                return DrawdownOutcome { rows, final_fund: fund, stop: DrawdownStop::Exhausted { age } };
            }

            let start_balance = fund;
            let percentage_amount = start_balance * rule.withdrawal_percentage;

            // Indexed from today: years to retirement plus years into drawdown
            let effective_minimum = if self.config.index_minimum_to_inflation {
                rule.indexed_minimum(input.inflation_rate, age - input.age)
            } else {
                rule.minimum_withdrawal
            };

            let used_minimum = effective_minimum >= percentage_amount;
            let mut amount = percentage_amount.max(effective_minimum);

            let liquidated = amount >= start_balance;
            let growth = if liquidated {
                amount = start_balance;
                0.0
            } else {
                input.return_rate * (start_balance - amount / 2.0)
            };

            rows.push(DrawdownRow {
                calendar_year: input.calendar_year(age),
                age,
                balance_at_start: start_balance,
                percentage: rule.withdrawal_percentage,
                effective_minimum,
                amount_withdrawn: amount,
                growth,
                used_minimum,
                lump_sum_notice: age == LUMP_SUM_NOTICE_AGE && start_balance - amount > 0.0,
            });

            fund = start_balance - amount + growth;

            if liquidated {
                log::debug!("Fund fully withdrawn at age {age}");
                return DrawdownOutcome {
                    rows,
                    final_fund: fund,
                    stop: DrawdownStop::FullyLiquidated { age },
                };
            }
        }

        DrawdownOutcome { rows, final_fund: fund, stop: DrawdownStop::ReachedLifeExpectancy }
    }
}
