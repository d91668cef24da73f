//! Normalization calculator for coherent production and final state pi0.

use std::collections::BTreeMap;
use std::sync::Arc;

use frw_core::{
    Dial, EventSummary, NormChannel, ScatteringType, UncertaintyProvider, WeightCalculator,
};
use frw_params::linear_scale;

/// Applies per-channel normalization factors to coherent events and to
/// non-coherent events with a final state neutral pion.
///
/// `reconfigure` caches one normalization per channel from the stored tweak
/// and the registered uncertainty; `calc_weight` picks the cached factor by
/// event class.
pub struct CoherentNormCalc {
    name: String,
    tweaks: BTreeMap<NormChannel, f64>,
    norms: BTreeMap<NormChannel, f64>,
    uncert: Arc<dyn UncertaintyProvider>,
}

impl CoherentNormCalc {
    /// Creates a calculator with all normalizations at one.
    pub fn new(uncert: Arc<dyn UncertaintyProvider>) -> Self {
        let mut calc = Self {
            name: "coherent-norm".to_string(),
            tweaks: BTreeMap::new(),
            norms: BTreeMap::new(),
            uncert,
        };
        calc.reset();
        calc
    }

    fn channel_for(event: &EventSummary) -> Option<NormChannel> {
        if event.scattering == ScatteringType::Coherent {
            Some(if event.is_cc {
                NormChannel::CcCoherent
            } else {
                NormChannel::NcCoherent
            })
        } else if event.has_final_state_pi0 {
            // A pi0 can come out of the cascade as well as the vertex.
            Some(if event.is_cc {
                NormChannel::CcNonCoherentPi0
            } else {
                NormChannel::NcNonCoherentPi0
            })
        } else {
            None
        }
    }
}

impl WeightCalculator for CoherentNormCalc {
    fn name(&self) -> &str {
        &self.name
    }

    fn applies_to(&self, _scattering: ScatteringType, _is_cc: bool) -> bool {
        // The pi0 normalization can touch any event class.
        true
    }

    fn is_handled(&self, dial: Dial) -> bool {
        matches!(dial, Dial::Norm { .. })
    }

    fn set_systematic(&mut self, dial: Dial, value: f64) {
        let Dial::Norm { channel } = dial else {
            log::debug!("{} does not handle dial {}", self.name, dial.label());
            return;
        };
        self.tweaks.insert(channel, value);
    }

    fn reset(&mut self) {
        for channel in NormChannel::ALL {
            self.tweaks.insert(channel, 0.0);
        }
        self.reconfigure();
    }

    fn reconfigure(&mut self) {
        for channel in NormChannel::ALL {
            let tweak = self.tweaks.get(&channel).copied().unwrap_or(0.0);
            let sigma = self.uncert.one_sigma_err(Dial::Norm { channel });
            self.norms.insert(channel, linear_scale(tweak, sigma));
        }
    }

    fn calc_weight(&self, event: &EventSummary) -> f64 {
        match Self::channel_for(event) {
            Some(channel) => self.norms.get(&channel).copied().unwrap_or(1.0),
            None => 1.0,
        }
    }
}
