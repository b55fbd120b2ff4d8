//! CSV loading for the drawdown rule table and ROI option table
//!
//! Drawdown table columns: `age,percentage,minimum`
//! ROI table columns: `description,five_year,ten_year`

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{DrawdownRule, DrawdownTable, RoiOption, RoiTable};
use crate::error::TableError;

/// Drawdown table shipped with the crate
pub const DEFAULT_DRAWDOWN_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/drawdown.csv");

/// ROI option table shipped with the crate
pub const DEFAULT_ROI_TABLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/roi.csv");

#[derive(Debug, Deserialize)]
struct DrawdownRecord {
    age: u32,
    percentage: f64,
    minimum: f64,
}

#[derive(Debug, Deserialize)]
struct RoiRecord {
    description: String,
    five_year: f64,
    ten_year: f64,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, TableError> {
    File::open(path).map_err(|source| TableError::Io { path: PathBuf::from(path), source })
}

/// Load drawdown rules from any CSV reader
pub fn load_drawdown_table_from_reader<R: Read>(reader: R) -> Result<DrawdownTable, TableError> {
    let mut rules = Vec::new();
    for record in csv_reader(reader).deserialize() {
        let record: DrawdownRecord = record?;
        rules.push((record.age, DrawdownRule::new(record.percentage, record.minimum)));
    }
    DrawdownTable::from_rules(rules)
}

/// Load drawdown rules from a CSV file
pub fn load_drawdown_table(path: impl AsRef<Path>) -> Result<DrawdownTable, TableError> {
    let path = path.as_ref();
    let table = load_drawdown_table_from_reader(open(path)?)?;
    if let Some((first, last)) = table.age_range() {
        log::info!(
            "Loaded {} drawdown rules (ages {}-{}) from {}",
            table.len(), first, last, path.display()
        );
    }
    Ok(table)
}

/// Load the drawdown table shipped in `data/`
pub fn load_default_drawdown_table() -> Result<DrawdownTable, TableError> {
    load_drawdown_table(DEFAULT_DRAWDOWN_TABLE)
}

/// Load ROI options from any CSV reader
pub fn load_roi_table_from_reader<R: Read>(reader: R) -> Result<RoiTable, TableError> {
    let mut options = Vec::new();
    for record in csv_reader(reader).deserialize() {
        let record: RoiRecord = record?;
        options.push(RoiOption {
            description: record.description,
            five_year_rate: record.five_year,
            ten_year_rate: record.ten_year,
        });
    }
    RoiTable::from_options(options)
}

/// Load ROI options from a CSV file
pub fn load_roi_table(path: impl AsRef<Path>) -> Result<RoiTable, TableError> {
    let path = path.as_ref();
    let table = load_roi_table_from_reader(open(path)?)?;
    log::info!("Loaded {} ROI options from {}", table.len(), path.display());
    Ok(table)
}

/// Load the ROI table shipped in `data/`
pub fn load_default_roi_table() -> Result<RoiTable, TableError> {
    load_roi_table(DEFAULT_ROI_TABLE)
}
