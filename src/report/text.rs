//! Plain-text tables for terminal output

use std::fmt::Write;

use super::{format_money, format_percent};
use crate::projection::ProjectionResult;

/// Render both phases, the stop reason and the guidance message
pub fn render_text(result: &ProjectionResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Accumulation Phase");
    let _ = writeln!(
        out,
        "{:<6} {:>4} {:>16} {:>14} {:>14}",
        "Year", "Age", "Fund", "Contribution", "Growth"
    );
    for row in &result.accumulation {
        let _ = writeln!(
            out,
            "{:<6} {:>4} {:>16} {:>14} {:>14}",
            row.calendar_year,
            row.age,
            format_money(row.fund_at_start),
            format_money(row.contribution),
            format_money(row.growth),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Fund at retirement: {}", format_money(result.fund_at_retirement));
    let _ = writeln!(out);

    let _ = writeln!(out, "Drawdown Phase");
    let _ = writeln!(
        out,
        "{:<6} {:>4} {:>16} {:>7} {:>14} {:>14}",
        "Year", "Age", "Balance", "%", "Drawdown", "Growth"
    );
    for row in &result.drawdown {
        let marker = if row.used_minimum { " (min)" } else { "" };
        let _ = writeln!(
            out,
            "{:<6} {:>4} {:>16} {:>7} {:>14} {:>14}{}",
            row.calendar_year,
            row.age,
            format_money(row.balance_at_start),
            format_percent(row.percentage),
            format_money(row.amount_withdrawn),
            format_money(row.growth),
            marker,
        );
        if row.lump_sum_notice {
            let _ = writeln!(
                out,
                "       Remaining balance of {} may be taken as a lump sum at age {}.",
                format_money(row.balance_at_end()),
                row.age + 1
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Drawdown ended: {}", result.stop.describe());
    let _ = writeln!(out, "Final fund: {}", format_money(result.final_fund));
    let _ = writeln!(out, "Guidance ({}): {}", result.guidance, result.guidance.message());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{DrawdownRule, DrawdownTable};
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use crate::SimulationInput;

    #[test]
    fn test_render_sections() {
        let table = DrawdownTable::from_rules((65..100).map(|a| (a, DrawdownRule::new(0.05, 1_000.0))))
            .expect("table");
        let input = SimulationInput::new(30, 65, 10_000.0, 1_000.0, 0.03, 0.05, 2025).expect("input");
        let result = ProjectionEngine::new(&table, ProjectionConfig::default())
            .project(&input)
            .expect("projection");

        let text = render_text(&result);
        assert!(text.contains("Accumulation Phase"));
        assert!(text.contains("Drawdown Phase"));
        assert!(text.contains("2025"));
        assert!(text.contains("10,000.00"));
        assert!(text.contains("525.00"));
        assert!(text.contains("may be taken as a lump sum at age 90"));
        assert!(text.contains(result.guidance.message()));
    }
}
