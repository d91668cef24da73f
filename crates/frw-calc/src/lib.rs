//! Weight calculators consuming the frw parameter sets.

pub mod coh_norm;
pub mod registrar;
pub mod res_fix;
pub mod transport;

pub use coh_norm::CoherentNormCalc;
pub use registrar::{is_extended_dial, EXTENDED_DIALS};
pub use res_fix::ResonanceBugFixCalc;
pub use transport::HadronTransportCalc;
