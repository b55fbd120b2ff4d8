//! Rendering of projection results
//!
//! The engine returns structured rows; these renderers turn them into
//! plain-text tables, CSV, JSON or the HTML results fragment.

pub mod text;
pub mod export;
pub mod html;

pub use text::render_text;
pub use export::{to_json, write_csv};
pub use html::render_html;

use serde::{Deserialize, Serialize};

/// Output format selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Html,
}

/// Money with two decimals and comma thousands separators
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" is shown as "0.00"
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Fraction shown as a percentage with two decimals (0.055 -> "5.50")
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}
