//! Registry of one-sigma fractional uncertainties per dial.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use frw_core::{
    CascadeModel, Dial, EnergyBin, FateCategory, HadronType, NormChannel, UncertaintyProvider,
};

/// Registered one-sigma fractional errors.
///
/// The default registry carries the physics defaults for every dial the
/// engine knows about; unregistered dials report zero, which leaves their
/// scale factors neutral. Serializes as a list of `(dial, sigma)` entries so
/// registries can live in configuration files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<(Dial, f64)>", into = "Vec<(Dial, f64)>")]
pub struct DialUncertainties {
    sigmas: BTreeMap<Dial, f64>,
}

impl From<Vec<(Dial, f64)>> for DialUncertainties {
    fn from(entries: Vec<(Dial, f64)>) -> Self {
        Self {
            sigmas: entries.into_iter().collect(),
        }
    }
}

impl From<DialUncertainties> for Vec<(Dial, f64)> {
    fn from(registry: DialUncertainties) -> Self {
        registry.sigmas.into_iter().collect()
    }
}

impl DialUncertainties {
    /// Registers or overrides the one-sigma error for a dial.
    pub fn set(&mut self, dial: Dial, sigma: f64) {
        self.sigmas.insert(dial, sigma);
    }

    /// Registered value, zero when absent.
    pub fn get(&self, dial: Dial) -> f64 {
        self.sigmas.get(&dial).copied().unwrap_or(0.0)
    }

    /// Number of registered dials.
    pub fn len(&self) -> usize {
        self.sigmas.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.sigmas.is_empty()
    }
}

impl Default for DialUncertainties {
    fn default() -> Self {
        let mut sigmas = BTreeMap::new();

        for hadron in [HadronType::Pion, HadronType::Nucleon] {
            sigmas.insert(
                Dial::Fate {
                    hadron,
                    fate: FateCategory::ChargeExchange,
                },
                0.5,
            );
            sigmas.insert(
                Dial::Fate {
                    hadron,
                    fate: FateCategory::Inelastic,
                },
                0.4,
            );
            sigmas.insert(
                Dial::Fate {
                    hadron,
                    fate: FateCategory::Absorption,
                },
                0.2,
            );
            sigmas.insert(
                Dial::Fate {
                    hadron,
                    fate: FateCategory::PionProduction,
                },
                0.2,
            );

            sigmas.insert(Dial::Mfp { hadron }, 0.2);
            for bin in EnergyBin::ALL {
                sigmas.insert(Dial::MfpBin { hadron, bin }, 0.2);
            }

            // Switch dials are expressed in full model differences, so one
            // sigma is the whole substitution.
            for model in [CascadeModel::Geant4, CascadeModel::Incl] {
                sigmas.insert(
                    Dial::ModelSwitch {
                        hadron,
                        model,
                        bin: None,
                    },
                    1.0,
                );
                for bin in EnergyBin::ALL {
                    sigmas.insert(
                        Dial::ModelSwitch {
                            hadron,
                            model,
                            bin: Some(bin),
                        },
                        1.0,
                    );
                }
            }
        }

        for channel in NormChannel::ALL {
            sigmas.insert(Dial::Norm { channel }, 0.5);
        }

        Self { sigmas }
    }
}

impl UncertaintyProvider for DialUncertainties {
    fn one_sigma_err(&self, dial: Dial) -> f64 {
        self.get(dial)
    }
}
