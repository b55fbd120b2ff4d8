//! Property tests for the projection recurrences

use approx::relative_eq;
use proptest::prelude::*;

use pension_projection::assumptions::{DrawdownRule, DrawdownTable};
use pension_projection::{
    DrawdownStop, Guidance, ProjectionConfig, ProjectionEngine, SimulationInput,
};

fn close(a: f64, b: f64) -> bool {
    relative_eq!(a, b, epsilon = 1e-6, max_relative = 1e-9)
}

fn input_strategy() -> impl Strategy<Value = SimulationInput> {
    (
        20u32..50,
        50u32..=79,
        0.0..1_000_000.0f64,
        0.0..50_000.0f64,
        0.0..0.10f64,
        -0.05..0.12f64,
        0.0..0.05f64,
        prop_oneof![Just(90u32), Just(100u32)],
    )
        .prop_map(|(age, retirement_age, fund, contribution, growth, ret, inflation, life)| {
            SimulationInput {
                age,
                retirement_age,
                initial_fund: fund,
                initial_contribution: contribution,
                contribution_growth_rate: growth,
                return_rate: ret,
                inflation_rate: inflation,
                life_expectancy: life,
                anchor_year: 2025,
            }
        })
}

fn table_strategy() -> impl Strategy<Value = DrawdownTable> {
    (
        prop::collection::vec((0.01..0.40f64, 0.0..20_000.0f64), 50),
        50u32..100,
    )
        .prop_map(|(rules, last_age)| {
            DrawdownTable::from_rules(
                (50u32..=last_age).zip(rules).map(|(age, (p, m))| (age, DrawdownRule::new(p, m))),
            )
            .expect("ages are unique")
        })
}

proptest! {
    #[test]
    fn prop_accumulation_rows_are_contiguous(input in input_strategy(), table in table_strategy()) {
        let engine = ProjectionEngine::new(&table, ProjectionConfig::default());
        let outcome = engine.run_accumulation_phase(&input).expect("valid input");

        prop_assert_eq!(outcome.rows.len() as u32, input.retirement_age - input.age);
        prop_assert_eq!(outcome.rows[0].age, input.age);
        prop_assert_eq!(outcome.rows[0].calendar_year, input.anchor_year);
        prop_assert!(close(outcome.rows[0].fund_at_start, input.initial_fund));

        for pair in outcome.rows.windows(2) {
            prop_assert_eq!(pair[1].age, pair[0].age + 1);
            prop_assert_eq!(pair[1].calendar_year, pair[0].calendar_year + 1);
            prop_assert!(close(pair[1].fund_at_start, pair[0].fund_at_end()));
        }

        let last = outcome.rows.last().expect("at least one year");
        prop_assert!(close(outcome.fund_at_retirement, last.fund_at_end()));
    }

    #[test]
    fn prop_drawdown_follows_rules(input in input_strategy(), table in table_strategy()) {
        let engine = ProjectionEngine::new(&table, ProjectionConfig::default());
        let result = engine.project(&input).expect("valid input");

        prop_assert!(result.drawdown.len() as u32 <= input.life_expectancy - input.retirement_age);

        for row in &result.drawdown {
            let rule = table.get(row.age).expect("rows only for covered ages");
            let pct_amount = row.balance_at_start * rule.withdrawal_percentage;
            let expected_min = rule.minimum_withdrawal
                * (1.0 + input.inflation_rate).powi((row.age - input.age) as i32);
            let uncapped = pct_amount.max(expected_min);

            prop_assert!(row.balance_at_start > 0.0);
            prop_assert!(close(row.effective_minimum, expected_min));
            prop_assert_eq!(row.used_minimum, row.effective_minimum >= pct_amount);

            if row.is_full_liquidation() {
                prop_assert!(uncapped >= row.balance_at_start);
                prop_assert!(close(row.amount_withdrawn, row.balance_at_start));
                prop_assert_eq!(row.growth, 0.0);
            } else {
                prop_assert!(close(row.amount_withdrawn, uncapped));
                prop_assert!(close(
                    row.growth,
                    input.return_rate * (row.balance_at_start - row.amount_withdrawn / 2.0)
                ));
            }
        }

        for pair in result.drawdown.windows(2) {
            prop_assert!(close(pair[1].balance_at_start, pair[0].balance_at_end()));
        }

        if let Some(last) = result.drawdown.last() {
            prop_assert!(close(result.final_fund, last.balance_at_end()));
            if let DrawdownStop::FullyLiquidated { age } = result.stop {
                prop_assert_eq!(age, last.age);
                prop_assert!(result.final_fund <= last.balance_at_start);
            }
        }

        prop_assert_eq!(result.guidance, Guidance::classify(&result.drawdown));
    }
}
