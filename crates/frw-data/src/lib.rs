//! Fate-fraction lookup tables and interpolation for the frw engine.

pub mod curve;
pub mod table;

pub use curve::MonotoneCurve;
pub use table::{
    FateFractionTable, TableFileInfo, TableSummary, TargetRegime, DATA_DIR_ENV,
};
