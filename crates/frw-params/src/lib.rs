//! Systematic dial parameter sets for hadron transport reweighting.

pub mod fates;
pub mod mfp;
pub mod nominal;
pub mod params;
pub mod scaling;
pub mod uncert;

pub use fates::FateParams;
pub use mfp::MfpParams;
pub use nominal::EnergyDependentFateModel;
pub use params::ReweightParams;
pub use scaling::{linear_scale, NOMINAL_GUARD};
pub use uncert::DialUncertainties;
