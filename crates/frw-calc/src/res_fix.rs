//! Bug-fix calculator zeroing events with a mislabeled baryon resonance.

use frw_core::{Dial, EventSummary, Resonance, ScatteringType, WeightCalculator};

/// Zero-weights resonant events whose P33(1600) or F17(1970) was written to
/// the event record as an unidentified particle during generation.
///
/// The tweak dial value is irrelevant: the dial is a dummy knob that turns
/// the fix on through the systematic-set machinery.
#[derive(Debug)]
pub struct ResonanceBugFixCalc {
    name: String,
}

impl Default for ResonanceBugFixCalc {
    fn default() -> Self {
        Self::new()
    }
}

impl ResonanceBugFixCalc {
    /// Creates the calculator.
    pub fn new() -> Self {
        Self {
            name: "resonance-bugfix".to_string(),
        }
    }
}

impl WeightCalculator for ResonanceBugFixCalc {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies_to(&self, scattering: ScatteringType, _is_cc: bool) -> bool {
        scattering == ScatteringType::Resonant
    }

    fn is_handled(&self, dial: Dial) -> bool {
        dial == Dial::ResonanceBugFix
    }

    fn set_systematic(&mut self, _dial: Dial, _value: f64) {}

    fn reset(&mut self) {}

    fn reconfigure(&mut self) {}

    fn calc_weight(&self, event: &EventSummary) -> f64 {
        if event.scattering != ScatteringType::Resonant {
            return 1.0;
        }
        match event.resonance {
            Some(Resonance::P33_1600) | Some(Resonance::F17_1970) => {}
            _ => return 1.0,
        }
        if event.has_mislabeled_resonance {
            0.0
        } else {
            1.0
        }
    }
}
