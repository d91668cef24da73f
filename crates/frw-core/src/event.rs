//! Minimal event-facing types consumed by the weight calculators.
//!
//! The full particle record lives in the generator; calculators only see the
//! flags and hadron transport steps summarized here.

use serde::{Deserialize, Serialize};

use crate::dial::{FateCategory, HadronType};

/// Scattering process class of the primary interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScatteringType {
    /// Quasi-elastic scattering.
    QuasiElastic,
    /// Baryon resonance production.
    Resonant,
    /// Deep inelastic scattering.
    DeepInelastic,
    /// Coherent pion production.
    Coherent,
}

/// Baryon resonances relevant to the mislabeling bug fix.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resonance {
    /// The P33(1600) state.
    P33_1600,
    /// The F17(1970) state.
    F17_1970,
    /// Any other resonance.
    Other,
}

/// One hadron transport step inside the nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HadronStep {
    /// Hadron species being transported.
    pub hadron: HadronType,
    /// Kinetic energy at the step, in GeV.
    pub kinetic_energy: f64,
    /// Whether the hadron interacted at this step.
    pub interacted: bool,
    /// Interaction fate, when the hadron interacted.
    pub fate: Option<FateCategory>,
}

/// Per-event summary handed to the weight calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    /// Scattering process class.
    pub scattering: ScatteringType,
    /// Whether the event is charged current.
    pub is_cc: bool,
    /// Whether a neutral pion survives into the final state.
    pub has_final_state_pi0: bool,
    /// Resonance produced at the vertex, for resonant events.
    pub resonance: Option<Resonance>,
    /// Whether the event record carries the mislabeled-resonance marker.
    pub has_mislabeled_resonance: bool,
    /// Mass number of the struck nucleus.
    pub target_mass_number: u32,
    /// Hadron transport steps recorded during cascade replay.
    pub hadron_steps: Vec<HadronStep>,
}

impl EventSummary {
    /// Creates a summary with no hadron steps and no special flags.
    pub fn new(scattering: ScatteringType, is_cc: bool, target_mass_number: u32) -> Self {
        Self {
            scattering,
            is_cc,
            has_final_state_pi0: false,
            resonance: None,
            has_mislabeled_resonance: false,
            target_mass_number,
            hadron_steps: Vec::new(),
        }
    }
}
