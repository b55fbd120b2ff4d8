//! Compare projections across every option in the ROI table
//!
//! Runs one projection per option in parallel and prints a summary line each.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use rayon::prelude::*;

use pension_projection::assumptions::{
    load_default_drawdown_table, load_default_roi_table, load_drawdown_table, load_roi_table,
    RoiHorizon,
};
use pension_projection::report::format_money;
use pension_projection::{FormParams, ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionResult};

#[derive(Debug, Parser)]
#[command(name = "compare_roi", about = "Project a pension fund under each ROI option")]
struct Args {
    #[arg(long)]
    age: u32,

    #[arg(long)]
    retirement_age: u32,

    #[arg(long, default_value_t = 0.0)]
    fund: f64,

    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    /// Annual contribution growth, percent
    #[arg(long, default_value_t = 0.0)]
    growth_rate: f64,

    /// Annual inflation, percent
    #[arg(long, default_value_t = 0.0)]
    inflation_rate: f64,

    #[arg(long, default_value_t = pension_projection::input::DEFAULT_LIFE_EXPECTANCY)]
    life_expectancy: u32,

    /// Use 5-year rates rather than 10-year rates
    #[arg(long)]
    five_year: bool,

    #[arg(long)]
    roi_table: Option<PathBuf>,

    #[arg(long)]
    drawdown_table: Option<PathBuf>,

    #[arg(long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let options = match &args.roi_table {
        Some(path) => load_roi_table(path),
        None => load_default_roi_table(),
    }
    .context("Failed to load ROI table")?;

    let rules = match &args.drawdown_table {
        Some(path) => load_drawdown_table(path),
        None => load_default_drawdown_table(),
    }
    .context("Failed to load drawdown table")?;

    let anchor_year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let horizon = if args.five_year { RoiHorizon::FiveYear } else { RoiHorizon::TenYear };
    let engine = ProjectionEngine::new(&rules, ProjectionConfig::default());

    let results: Vec<(String, f64, ProjectionResult)> = options
        .options()
        .par_iter()
        .map(|option| -> Result<(String, f64, ProjectionResult), ProjectionError> {
            let roi = option.rate(horizon);
            let params = FormParams {
                age: args.age,
                retirement_age: args.retirement_age,
                fund: args.fund,
                contribution: args.contribution,
                growth_rate: args.growth_rate,
                roi,
                inflation_rate: args.inflation_rate,
                life_expectancy: args.life_expectancy,
            };
            let input = params.into_input(anchor_year)?;
            let result = engine.project(&input)?;
            Ok((option.description.clone(), roi, result))
        })
        .collect::<Result<Vec<_>, _>>()
        .context("Invalid projection inputs")?;

    println!(
        "{:<24} {:>7} {:>16} {:>16} {:<8} {}",
        "Option", "ROI %", "At retirement", "Final fund", "Guidance", "Drawdown"
    );
    for (description, roi, result) in &results {
        println!(
            "{:<24} {:>7.2} {:>16} {:>16} {:<8} {}",
            description,
            roi,
            format_money(result.fund_at_retirement),
            format_money(result.final_fund),
            result.guidance.label(),
            result.stop.describe(),
        );
    }

    log::info!("Compared {} options in {:?}", results.len(), start.elapsed());
    Ok(())
}
