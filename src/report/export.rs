//! Machine-readable exports: one CSV with both phases, or JSON

use std::io::Write;

use serde::Serialize;

use crate::projection::ProjectionResult;

/// Flattened row shared by both phases
#[derive(Debug, Serialize)]
struct CsvRecord {
    phase: &'static str,
    year: i32,
    age: u32,
    balance: String,
    contribution: String,
    percentage: String,
    withdrawn: String,
    growth: String,
    used_minimum: String,
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Write accumulation then drawdown rows as CSV
///
/// Columns not used by a phase are left empty.
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);

    for row in &result.accumulation {
        wtr.serialize(CsvRecord {
            phase: "accumulation",
            year: row.calendar_year,
            age: row.age,
            balance: money(row.fund_at_start),
            contribution: money(row.contribution),
            percentage: String::new(),
            withdrawn: String::new(),
            growth: money(row.growth),
            used_minimum: String::new(),
        })?;
    }

    for row in &result.drawdown {
        wtr.serialize(CsvRecord {
            phase: "drawdown",
            year: row.calendar_year,
            age: row.age,
            balance: money(row.balance_at_start),
            contribution: String::new(),
            percentage: format!("{:.4}", row.percentage),
            withdrawn: money(row.amount_withdrawn),
            growth: money(row.growth),
            used_minimum: row.used_minimum.to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Pretty-printed JSON of the whole result
pub fn to_json(result: &ProjectionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
