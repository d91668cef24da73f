//! Weight calculator for intranuclear hadron transport systematics.

use std::sync::Arc;

use frw_core::{
    Dial, EventSummary, FateCategory, NominalFateModel, ScatteringType, UncertaintyProvider,
    WeightCalculator,
};
use frw_data::FateFractionTable;
use frw_params::ReweightParams;

use crate::registrar::is_extended_dial;

/// Calculator owning the four transport parameter sets.
///
/// Handles the baseline fate and whole-range mean free path dials for both
/// hadron types plus the extended nucleon-sector dials; the per-event weight
/// is the product of the per-step scale factors.
#[derive(Debug)]
pub struct HadronTransportCalc {
    name: String,
    params: ReweightParams,
}

impl HadronTransportCalc {
    /// Creates an untweaked calculator for the given target.
    pub fn new(
        target_a: u32,
        table: Arc<FateFractionTable>,
        uncert: Arc<dyn UncertaintyProvider>,
        nominal: Arc<dyn NominalFateModel>,
    ) -> Self {
        Self {
            name: "hadron-transport".to_string(),
            params: ReweightParams::new(target_a, table, uncert, nominal),
        }
    }

    /// Read access to the owned parameter sets.
    pub fn params(&self) -> &ReweightParams {
        &self.params
    }
}

impl WeightCalculator for HadronTransportCalc {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies_to(&self, _scattering: ScatteringType, _is_cc: bool) -> bool {
        // Hadron transport reweighting touches every event class.
        true
    }

    fn is_handled(&self, dial: Dial) -> bool {
        if let Some(fate) = dial.fate() {
            return FateCategory::DIAL_FATES.contains(&fate);
        }
        matches!(dial, Dial::Mfp { .. }) || is_extended_dial(dial)
    }

    fn set_systematic(&mut self, dial: Dial, value: f64) {
        if !self.is_handled(dial) {
            log::debug!("{} does not handle dial {}", self.name, dial.label());
            return;
        }
        self.params.set_dial(dial, value);
    }

    fn reset(&mut self) {
        self.params.reset();
    }

    fn reconfigure(&mut self) {
        // Parameter sets recompute scale factors on every query.
    }

    fn calc_weight(&self, event: &EventSummary) -> f64 {
        let mut weight = 1.0;
        for step in &event.hadron_steps {
            weight *= self.params.mfp(step.hadron).scale_factor(step.kinetic_energy);
            if !step.interacted {
                continue;
            }
            let Some(fate) = step.fate else {
                continue;
            };
            if !FateCategory::DIAL_FATES.contains(&fate) {
                continue;
            }
            let dial = Dial::Fate {
                hadron: step.hadron,
                fate,
            };
            weight *= self
                .params
                .fates(step.hadron)
                .scale_factor(dial, step.kinetic_energy);
        }
        weight.max(0.0)
    }
}
