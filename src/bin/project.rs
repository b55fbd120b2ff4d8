//! Run a single pension projection from command-line inputs
//!
//! Rates are given in percent, as on the calculator form.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, ValueEnum};

use pension_projection::assumptions::{
    load_default_drawdown_table, load_default_roi_table, load_drawdown_table, load_roi_table,
    RoiHorizon,
};
use pension_projection::input::DEFAULT_ROI_PERCENT;
use pension_projection::report::{self, OutputFormat};
use pension_projection::{FormParams, ProjectionConfig, ProjectionEngine};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliFormat {
    Text,
    Csv,
    Json,
    Html,
}

impl From<CliFormat> for OutputFormat {
    fn from(value: CliFormat) -> Self {
        match value {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Csv => OutputFormat::Csv,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Html => OutputFormat::Html,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "project", about = "Project a pension fund through accumulation and drawdown")]
struct Args {
    /// Current age
    #[arg(long)]
    age: u32,

    /// Retirement age (50 to 79)
    #[arg(long)]
    retirement_age: u32,

    /// Current fund balance
    #[arg(long, default_value_t = 0.0)]
    fund: f64,

    /// First-year contribution
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    /// Annual contribution growth, percent
    #[arg(long, default_value_t = 0.0)]
    growth_rate: f64,

    /// Annual return on investment, percent
    #[arg(long, conflicts_with = "roi_option")]
    roi: Option<f64>,

    /// Take the return from this ROI table option instead of --roi
    #[arg(long)]
    roi_option: Option<String>,

    /// ROI option table (defaults to the shipped table)
    #[arg(long)]
    roi_table: Option<PathBuf>,

    /// Use the option's 5-year rate rather than its 10-year rate
    #[arg(long, requires = "roi_option")]
    five_year: bool,

    /// Annual inflation for indexing minimum withdrawals, percent
    #[arg(long, default_value_t = 0.0)]
    inflation_rate: f64,

    /// Keep minimum withdrawals at their table values
    #[arg(long)]
    no_inflation_index: bool,

    /// Drawdown stops at this age
    #[arg(long, default_value_t = pension_projection::input::DEFAULT_LIFE_EXPECTANCY)]
    life_expectancy: u32,

    /// Drawdown rule table (defaults to the shipped table)
    #[arg(long)]
    drawdown_table: Option<PathBuf>,

    /// Calendar year of the first projected year (defaults to this year)
    #[arg(long)]
    year: Option<i32>,

    #[arg(long, value_enum, default_value_t = CliFormat::Text)]
    format: CliFormat,

    /// Currency symbol for HTML headers
    #[arg(long, default_value = "£")]
    currency: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn resolve_roi(args: &Args) -> Result<f64> {
    let Some(description) = &args.roi_option else {
        return Ok(args.roi.unwrap_or(DEFAULT_ROI_PERCENT));
    };

    let table = match &args.roi_table {
        Some(path) => load_roi_table(path),
        None => load_default_roi_table(),
    }
    .context("Failed to load ROI table")?;

    let option = table
        .find(description)
        .with_context(|| format!("No ROI option named {description:?}"))?;
    let horizon = if args.five_year { RoiHorizon::FiveYear } else { RoiHorizon::TenYear };

    log::info!("Using ROI option {:?}: {:.2}%", option.description, option.rate(horizon));
    Ok(option.rate(horizon))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let anchor_year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let params = FormParams {
        age: args.age,
        retirement_age: args.retirement_age,
        fund: args.fund,
        contribution: args.contribution,
        growth_rate: args.growth_rate,
        roi: resolve_roi(&args)?,
        inflation_rate: args.inflation_rate,
        life_expectancy: args.life_expectancy,
    };
    let input = params.into_input(anchor_year).context("Invalid projection inputs")?;

    let rules = match &args.drawdown_table {
        Some(path) => load_drawdown_table(path),
        None => load_default_drawdown_table(),
    }
    .context("Failed to load drawdown table")?;

    let config = ProjectionConfig { index_minimum_to_inflation: !args.no_inflation_index };
    let result = ProjectionEngine::new(&rules, config).project(&input)?;

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match OutputFormat::from(args.format) {
        OutputFormat::Text => sink.write_all(report::render_text(&result).as_bytes())?,
        OutputFormat::Csv => report::write_csv(&result, &mut sink)?,
        OutputFormat::Json => writeln!(sink, "{}", report::to_json(&result)?)?,
        OutputFormat::Html => sink.write_all(report::render_html(&result, &args.currency).as_bytes())?,
    }
    sink.flush()?;

    if let Some(path) = &args.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}
