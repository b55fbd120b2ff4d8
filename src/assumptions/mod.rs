//! Reference tables consumed by the projection

mod drawdown;
mod roi;
pub mod loader;

pub use drawdown::{DrawdownRule, DrawdownTable};
pub use roi::{RoiHorizon, RoiOption, RoiTable};
pub use loader::{
    load_drawdown_table, load_drawdown_table_from_reader, load_default_drawdown_table,
    load_roi_table, load_roi_table_from_reader, load_default_roi_table,
};
