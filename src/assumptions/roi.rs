//! Return-on-investment options offered to the user
//!
//! Each option carries annualised 5-year and 10-year returns in percent.

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Horizon used to pick a rate from an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoiHorizon {
    FiveYear,
    TenYear,
}

/// One selectable investment option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiOption {
    pub description: String,
    /// Annualised 5-year return, percent
    pub five_year_rate: f64,
    /// Annualised 10-year return, percent
    pub ten_year_rate: f64,
}

impl RoiOption {
    /// Rate for the horizon, percent
    pub fn rate(&self, horizon: RoiHorizon) -> f64 {
        match horizon {
            RoiHorizon::FiveYear => self.five_year_rate,
            RoiHorizon::TenYear => self.ten_year_rate,
        }
    }
}

/// Ordered list of options, as listed in the source table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoiTable {
    options: Vec<RoiOption>,
}

impl RoiTable {
    pub fn from_options(options: Vec<RoiOption>) -> Result<Self, TableError> {
        if options.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { options })
    }

    /// Find an option by description, ignoring case and surrounding spaces
    pub fn find(&self, description: &str) -> Option<&RoiOption> {
        let wanted = description.trim();
        self.options
            .iter()
            .find(|o| o.description.trim().eq_ignore_ascii_case(wanted))
    }

    pub fn options(&self) -> &[RoiOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
