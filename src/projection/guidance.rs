//! Qualitative guidance derived from the drawdown projection

use serde::Serialize;

use super::{DrawdownRow, GUIDANCE_COMFORT_BALANCE, GUIDANCE_REFERENCE_AGE};

/// Coarse outlook label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Guidance {
    /// Comfortable balance remains at the reference age
    Good,
    /// Funds last to the reference age but the balance is low
    Warning,
    /// Funds run out before the reference age
    Alert,
}

impl Guidance {
    /// Classify a drawdown sequence by its balance at the reference age
    pub fn classify(drawdown: &[DrawdownRow]) -> Self {
        match drawdown.iter().find(|row| row.age == GUIDANCE_REFERENCE_AGE) {
            None => Guidance::Alert,
            Some(row) if row.balance_at_start > GUIDANCE_COMFORT_BALANCE => Guidance::Good,
            Some(_) => Guidance::Warning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Guidance::Good => "good",
            Guidance::Warning => "warning",
            Guidance::Alert => "alert",
        }
    }

    /// Message shown under the results
    pub fn message(&self) -> &'static str {
        match self {
            Guidance::Good => {
                "Your projected fund still holds a healthy balance at age 85. \
                 You are on track for a sustainable retirement income."
            }
            Guidance::Warning => {
                "Your fund is projected to last until age 85, but with a low remaining balance. \
                 Consider increasing contributions or retiring later."
            }
            Guidance::Alert => {
                "Your fund is projected to run out before age 85. \
                 Review your contributions, investment choice or retirement age."
            }
        }
    }
}

impl std::fmt::Display for Guidance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(age: u32, balance: f64) -> DrawdownRow {
        DrawdownRow {
            calendar_year: 2025 + age as i32,
            age,
            balance_at_start: balance,
            percentage: 0.05,
            effective_minimum: 0.0,
            amount_withdrawn: balance * 0.05,
            growth: 0.0,
            used_minimum: false,
            lump_sum_notice: false,
        }
    }

    #[test]
    fn test_classification() {
        assert_eq!(Guidance::classify(&[row(84, 70_000.0), row(85, 60_000.0)]), Guidance::Good);
        assert_eq!(Guidance::classify(&[row(85, 10_000.0)]), Guidance::Warning);
        assert_eq!(Guidance::classify(&[row(80, 90_000.0), row(84, 60_000.0)]), Guidance::Alert);
        assert_eq!(Guidance::classify(&[]), Guidance::Alert);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(Guidance::classify(&[row(85, 50_000.0)]), Guidance::Warning);
        assert_eq!(Guidance::classify(&[row(85, 50_000.01)]), Guidance::Good);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Guidance::Alert.to_string(), "alert");
        assert!(Guidance::Warning.message().contains("age 85"));
    }
}
