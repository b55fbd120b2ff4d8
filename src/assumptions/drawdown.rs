//! Drawdown rules by attained age
//!
//! Each rule sets the withdrawal percentage of the start-of-year balance and
//! an absolute minimum withdrawal. The amount taken is the larger of the two.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Withdrawal rule for one attained age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownRule {
    /// Fraction of the start-of-year balance (0.06 = 6%)
    pub withdrawal_percentage: f64,
    /// Absolute floor on the withdrawal, before inflation indexing
    pub minimum_withdrawal: f64,
}

impl DrawdownRule {
    pub fn new(withdrawal_percentage: f64, minimum_withdrawal: f64) -> Self {
        Self { withdrawal_percentage, minimum_withdrawal }
    }

    /// Reject percentages and minimums that are negative or not finite
    fn check(&self, age: u32) -> Result<(), TableError> {
        for (field, value) in [
            ("percentage", self.withdrawal_percentage),
            ("minimum", self.minimum_withdrawal),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(TableError::InvalidRule { age, field, value });
            }
        }
        Ok(())
    }

    /// Minimum withdrawal indexed by compounding inflation over `years`
    pub fn indexed_minimum(&self, inflation_rate: f64, years: u32) -> f64 {
        self.minimum_withdrawal * (1.0 + inflation_rate).powi(years as i32)
    }
}

/// Drawdown rules keyed by attained age
///
/// Ages without a rule are not covered; the projection stops there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawdownTable {
    rules: BTreeMap<u32, DrawdownRule>,
}

impl DrawdownTable {
    /// Build from (age, rule) pairs, rejecting repeated ages
    pub fn from_rules<I>(rules: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u32, DrawdownRule)>,
    {
        let mut table = BTreeMap::new();
        for (age, rule) in rules {
            rule.check(age)?;
            if table.insert(age, rule).is_some() {
                return Err(TableError::DuplicateAge(age));
            }
        }
        if table.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { rules: table })
    }

    /// Rule for an attained age, if the table covers it
    pub fn get(&self, attained_age: u32) -> Option<&DrawdownRule> {
        self.rules.get(&attained_age)
    }

    /// Youngest and oldest covered ages
    pub fn age_range(&self) -> Option<(u32, u32)> {
        let first = self.rules.keys().next()?;
        let last = self.rules.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
