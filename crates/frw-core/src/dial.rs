//! Systematic dial catalog: identifiers, families and classification.

use serde::{Deserialize, Serialize};

/// Hadron species tracked by the transport reweighting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HadronType {
    /// Charged pions.
    Pion,
    /// Protons and neutrons.
    Nucleon,
}

impl HadronType {
    /// Short label used in dial names and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            HadronType::Pion => "pi",
            HadronType::Nucleon => "n",
        }
    }
}

/// Categorical outcome of a hadron interaction inside the nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FateCategory {
    /// Elastic scattering off a bound nucleon.
    Elastic,
    /// Inelastic scattering.
    Inelastic,
    /// Charge exchange.
    ChargeExchange,
    /// Absorption on the nucleus.
    Absorption,
    /// Pion production.
    PionProduction,
}

impl FateCategory {
    /// The fate categories that carry a tunable dial.
    ///
    /// Elastic scattering has a tabulated fraction but no dial; the inelastic
    /// entry doubles as the cushion term that absorbs residual fractions.
    pub const DIAL_FATES: [FateCategory; 4] = [
        FateCategory::ChargeExchange,
        FateCategory::Inelastic,
        FateCategory::Absorption,
        FateCategory::PionProduction,
    ];

    /// Short label used in dial names and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            FateCategory::Elastic => "elas",
            FateCategory::Inelastic => "inel",
            FateCategory::ChargeExchange => "cex",
            FateCategory::Absorption => "abs",
            FateCategory::PionProduction => "pipro",
        }
    }
}

/// Alternate intranuclear cascade model whose prediction can be substituted
/// for the nominal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CascadeModel {
    /// Geant4 Bertini cascade.
    Geant4,
    /// Liege intranuclear cascade.
    Incl,
}

impl CascadeModel {
    /// Short label used in dial names, file names and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            CascadeModel::Geant4 => "g4",
            CascadeModel::Incl => "incl",
        }
    }
}

/// Kinetic energy bin qualifier carried by the binned dial variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnergyBin {
    /// Kinetic energy in `[0, 0.15)` GeV.
    Low,
    /// Kinetic energy in `[0.15, 0.3)` GeV.
    Mid1,
    /// Kinetic energy in `[0.3, 0.6)` GeV.
    Mid2,
    /// Kinetic energy in `[0.6, unbounded)` GeV.
    High,
}

impl EnergyBin {
    /// All four bins in ascending energy order.
    pub const ALL: [EnergyBin; 4] = [
        EnergyBin::Low,
        EnergyBin::Mid1,
        EnergyBin::Mid2,
        EnergyBin::High,
    ];

    /// The half-open kinetic energy window covered by this bin, in GeV.
    pub fn window(&self) -> EnergyWindow {
        match self {
            EnergyBin::Low => EnergyWindow::new(0.0, 0.15),
            EnergyBin::Mid1 => EnergyWindow::new(0.15, 0.3),
            EnergyBin::Mid2 => EnergyWindow::new(0.3, 0.6),
            EnergyBin::High => EnergyWindow::new(0.6, EnergyWindow::UNBOUNDED),
        }
    }

    /// Short label used in dial names and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            EnergyBin::Low => "lo_e",
            EnergyBin::Mid1 => "mid1_e",
            EnergyBin::Mid2 => "mid2_e",
            EnergyBin::High => "hi_e",
        }
    }
}

/// Half-open kinetic energy interval `[low, high)` in GeV.
///
/// A negative bound means the interval is unbounded on that side. The reset
/// state is unbounded on both sides, i.e. every energy is inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyWindow {
    low: f64,
    high: f64,
}

impl EnergyWindow {
    /// Sentinel marking an unbounded edge.
    pub const UNBOUNDED: f64 = -1.0;

    /// Window covering the whole kinetic energy axis.
    pub const UNRESTRICTED: EnergyWindow = EnergyWindow {
        low: EnergyWindow::UNBOUNDED,
        high: EnergyWindow::UNBOUNDED,
    };

    /// Creates a window from explicit bounds; pass [`EnergyWindow::UNBOUNDED`]
    /// to leave an edge open.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Lower bound in GeV, negative when unbounded.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound in GeV, negative when unbounded.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Whether the window covers the whole axis.
    pub fn is_unrestricted(&self) -> bool {
        self.low < 0.0 && self.high < 0.0
    }

    /// Whether the kinetic energy falls inside `[low, high)`.
    pub fn contains(&self, ke: f64) -> bool {
        (self.low < 0.0 || ke >= self.low) && (self.high < 0.0 || ke < self.high)
    }
}

impl Default for EnergyWindow {
    fn default() -> Self {
        EnergyWindow::UNRESTRICTED
    }
}

/// Normalization channel handled by the coherent-production calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NormChannel {
    /// Charged current coherent production.
    CcCoherent,
    /// Neutral current coherent production.
    NcCoherent,
    /// Charged current non-coherent events with a final state neutral pion.
    CcNonCoherentPi0,
    /// Neutral current non-coherent events with a final state neutral pion.
    NcNonCoherentPi0,
}

impl NormChannel {
    /// All four normalization channels.
    pub const ALL: [NormChannel; 4] = [
        NormChannel::CcCoherent,
        NormChannel::NcCoherent,
        NormChannel::CcNonCoherentPi0,
        NormChannel::NcNonCoherentPi0,
    ];

    /// Short label used in dial names and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            NormChannel::CcCoherent => "cc_coh",
            NormChannel::NcCoherent => "nc_coh",
            NormChannel::CcNonCoherentPi0 => "cc_pi0",
            NormChannel::NcNonCoherentPi0 => "nc_pi0",
        }
    }
}

/// Identifier for one independently tunable systematic knob.
///
/// Identifiers are immutable values partitioned into families: fate-fraction
/// dials and whole-range mean free path dials per hadron type, energy-binned
/// mean free path dials, model-switch dials with an optional bin qualifier,
/// and the dials consumed by the peripheral calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dial {
    /// Fraction of one interaction fate for one hadron type.
    Fate {
        /// Hadron species the dial applies to.
        hadron: HadronType,
        /// Fate category being scaled.
        fate: FateCategory,
    },
    /// Whole-range mean free path scaling for one hadron type.
    Mfp {
        /// Hadron species the dial applies to.
        hadron: HadronType,
    },
    /// Energy-binned mean free path scaling for one hadron type.
    MfpBin {
        /// Hadron species the dial applies to.
        hadron: HadronType,
        /// Kinetic energy bin the dial is restricted to.
        bin: EnergyBin,
    },
    /// Substitution of an alternate cascade model for the nominal fates.
    ModelSwitch {
        /// Hadron species the dial applies to.
        hadron: HadronType,
        /// Alternate model whose fractions replace the nominal ones.
        model: CascadeModel,
        /// Optional kinetic energy bin restriction.
        bin: Option<EnergyBin>,
    },
    /// Event-class normalization handled by the coherent calculator.
    Norm {
        /// Normalization channel the dial scales.
        channel: NormChannel,
    },
    /// Zero-weights events carrying a mislabeled baryon resonance.
    ResonanceBugFix,
}

impl Dial {
    /// Hadron species the dial applies to, if it belongs to a hadron family.
    pub fn hadron(&self) -> Option<HadronType> {
        match self {
            Dial::Fate { hadron, .. }
            | Dial::Mfp { hadron }
            | Dial::MfpBin { hadron, .. }
            | Dial::ModelSwitch { hadron, .. } => Some(*hadron),
            Dial::Norm { .. } | Dial::ResonanceBugFix => None,
        }
    }

    /// Whether the dial scales one fate fraction.
    pub fn is_fate(&self) -> bool {
        matches!(self, Dial::Fate { .. })
    }

    /// Whether the dial scales the mean free path (binned or whole-range).
    pub fn is_mfp(&self) -> bool {
        matches!(self, Dial::Mfp { .. } | Dial::MfpBin { .. })
    }

    /// Whether the dial substitutes an alternate cascade model.
    pub fn is_model_switch(&self) -> bool {
        matches!(self, Dial::ModelSwitch { .. })
    }

    /// Kinetic energy bin qualifier, if the dial carries one.
    pub fn energy_bin(&self) -> Option<EnergyBin> {
        match self {
            Dial::MfpBin { bin, .. } => Some(*bin),
            Dial::ModelSwitch { bin, .. } => *bin,
            _ => None,
        }
    }

    /// Fate category, for fate dials.
    pub fn fate(&self) -> Option<FateCategory> {
        match self {
            Dial::Fate { fate, .. } => Some(*fate),
            _ => None,
        }
    }

    /// Whether this dial may serve as the cushion term of its family.
    ///
    /// Exactly one fate dial per hadron type (the inelastic fate) is eligible;
    /// its value is then derived to keep the family's fractions summing to one.
    pub fn is_cushion_eligible(&self) -> bool {
        matches!(
            self,
            Dial::Fate {
                fate: FateCategory::Inelastic,
                ..
            }
        )
    }

    /// The four fate dials making up one hadron type's family.
    pub fn fate_dials(hadron: HadronType) -> [Dial; 4] {
        [
            Dial::Fate {
                hadron,
                fate: FateCategory::ChargeExchange,
            },
            Dial::Fate {
                hadron,
                fate: FateCategory::Inelastic,
            },
            Dial::Fate {
                hadron,
                fate: FateCategory::Absorption,
            },
            Dial::Fate {
                hadron,
                fate: FateCategory::PionProduction,
            },
        ]
    }

    /// Stable label used in diagnostics and serialized reports.
    pub fn label(&self) -> String {
        match self {
            Dial::Fate { hadron, fate } => format!("fate_{}_{}", fate.label(), hadron.label()),
            Dial::Mfp { hadron } => format!("mfp_{}", hadron.label()),
            Dial::MfpBin { hadron, bin } => format!("mfp_{}_{}", bin.label(), hadron.label()),
            Dial::ModelSwitch {
                hadron,
                model,
                bin: None,
            } => format!("switch_{}_{}", model.label(), hadron.label()),
            Dial::ModelSwitch {
                hadron,
                model,
                bin: Some(bin),
            } => format!("switch_{}_{}_{}", model.label(), bin.label(), hadron.label()),
            Dial::Norm { channel } => format!("norm_{}", channel.label()),
            Dial::ResonanceBugFix => "res_rootino_fix".to_string(),
        }
    }
}
