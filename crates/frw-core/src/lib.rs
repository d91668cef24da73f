#![deny(missing_docs)]
#![doc = "Core dial catalog, traits and data types for the frw reweighting engine."]

pub mod dial;
pub mod errors;
pub mod event;
pub mod traits;

pub use dial::{
    CascadeModel, Dial, EnergyBin, EnergyWindow, FateCategory, HadronType, NormChannel,
};
pub use errors::{ErrorInfo, FrwError};
pub use event::{EventSummary, HadronStep, Resonance, ScatteringType};
pub use traits::{NominalFateModel, UncertaintyProvider, WeightCalculator};
