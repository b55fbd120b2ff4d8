//! Yearly projection rows and the combined result

use serde::Serialize;

use super::Guidance;

/// One accumulation year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccumulationRow {
    pub calendar_year: i32,
    pub age: u32,
    /// Fund at the start of the year
    pub fund_at_start: f64,
    /// Contribution paid during the year
    pub contribution: f64,
    /// Investment growth credited during the year
    pub growth: f64,
}

impl AccumulationRow {
    /// Fund at the end of the year
    pub fn fund_at_end(&self) -> f64 {
        self.fund_at_start + self.contribution + self.growth
    }
}

/// One drawdown year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownRow {
    pub calendar_year: i32,
    pub age: u32,
    pub balance_at_start: f64,
    /// Rule percentage applied to the start balance (fraction)
    pub percentage: f64,
    /// Minimum withdrawal after inflation indexing
    pub effective_minimum: f64,
    pub amount_withdrawn: f64,
    pub growth: f64,
    /// Minimum was at least the percentage amount
    pub used_minimum: bool,
    /// Funds remain after the last withdrawal before age 90
    pub lump_sum_notice: bool,
}

impl DrawdownRow {
    /// Balance at the end of the year
    pub fn balance_at_end(&self) -> f64 {
        self.balance_at_start - self.amount_withdrawn + self.growth
    }

    /// Percentage-based withdrawal before the minimum is applied
    pub fn percentage_amount(&self) -> f64 {
        self.balance_at_start * self.percentage
    }

    /// Whole remaining balance was withdrawn
    pub fn is_full_liquidation(&self) -> bool {
        self.amount_withdrawn >= self.balance_at_start
    }
}

/// Reason the drawdown phase ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawdownStop {
    /// Rule table has no entry for this age
    NoRule { age: u32 },
    /// Fund was empty at the start of this age
    Exhausted { age: u32 },
    /// Remaining fund withdrawn in full at this age
    FullyLiquidated { age: u32 },
    /// Projection reached life expectancy
    ReachedLifeExpectancy,
}

impl DrawdownStop {
    pub fn describe(&self) -> String {
        match self {
            DrawdownStop::NoRule { age } => format!("no drawdown rule for age {age}"),
            DrawdownStop::Exhausted { age } => format!("fund exhausted by age {age}"),
            DrawdownStop::FullyLiquidated { age } => format!("fund fully withdrawn at age {age}"),
            DrawdownStop::ReachedLifeExpectancy => "reached life expectancy".to_string(),
        }
    }
}

/// Complete projection output
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub accumulation: Vec<AccumulationRow>,
    pub drawdown: Vec<DrawdownRow>,
    /// Fund on the retirement date
    pub fund_at_retirement: f64,
    /// Fund after the last drawdown year
    pub final_fund: f64,
    pub stop: DrawdownStop,
    pub guidance: Guidance,
}

impl ProjectionResult {
    /// Drawdown row for an attained age
    pub fn drawdown_at(&self, age: u32) -> Option<&DrawdownRow> {
        self.drawdown.iter().find(|row| row.age == age)
    }

    /// Sum of all drawdown withdrawals
    pub fn total_withdrawn(&self) -> f64 {
        self.drawdown.iter().map(|row| row.amount_withdrawn).sum()
    }

    /// Sum of all accumulation contributions
    pub fn total_contributed(&self) -> f64 {
        self.accumulation.iter().map(|row| row.contribution).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawdown_row(balance: f64, percentage: f64, amount: f64, growth: f64) -> DrawdownRow {
        DrawdownRow {
            calendar_year: 2060,
            age: 65,
            balance_at_start: balance,
            percentage,
            effective_minimum: 0.0,
            amount_withdrawn: amount,
            growth,
            used_minimum: false,
            lump_sum_notice: false,
        }
    }

    #[test]
    fn test_row_balances() {
        let acc = AccumulationRow {
            calendar_year: 2025,
            age: 30,
            fund_at_start: 10_000.0,
            contribution: 1_000.0,
            growth: 525.0,
        };
        assert_eq!(acc.fund_at_end(), 11_525.0);

        let row = drawdown_row(100_000.0, 0.05, 5_000.0, 4_875.0);
        assert_eq!(row.percentage_amount(), 5_000.0);
        assert_eq!(row.balance_at_end(), 99_875.0);
        assert!(!row.is_full_liquidation());
        assert!(drawdown_row(3_000.0, 0.05, 3_000.0, 0.0).is_full_liquidation());
    }

    #[test]
    fn test_stop_serializes_tagged() {
        let json = serde_json::to_string(&DrawdownStop::NoRule { age: 91 }).expect("serialize");
        assert_eq!(json, r#"{"noRule":{"age":91}}"#);
        assert_eq!(DrawdownStop::Exhausted { age: 80 }.describe(), "fund exhausted by age 80");
    }
}
