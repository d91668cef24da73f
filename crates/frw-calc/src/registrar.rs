//! Dial identifiers the transport calculator extends beyond the baseline.

use frw_core::{CascadeModel, Dial, EnergyBin, HadronType};

/// Nucleon-sector dials added on top of the baseline fate and whole-range
/// mean free path handling: the four energy-binned mean free path dials,
/// the two whole-range model switches and the eight binned model switches.
///
/// The calling framework uses this set to route dial requests here rather
/// than to the baseline calculator.
pub const EXTENDED_DIALS: [Dial; 14] = [
    Dial::MfpBin {
        hadron: HadronType::Nucleon,
        bin: EnergyBin::Low,
    },
    Dial::MfpBin {
        hadron: HadronType::Nucleon,
        bin: EnergyBin::Mid1,
    },
    Dial::MfpBin {
        hadron: HadronType::Nucleon,
        bin: EnergyBin::Mid2,
    },
    Dial::MfpBin {
        hadron: HadronType::Nucleon,
        bin: EnergyBin::High,
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Geant4,
        bin: None,
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: None,
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Geant4,
        bin: Some(EnergyBin::Low),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Geant4,
        bin: Some(EnergyBin::Mid1),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Geant4,
        bin: Some(EnergyBin::Mid2),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Geant4,
        bin: Some(EnergyBin::High),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: Some(EnergyBin::Low),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: Some(EnergyBin::Mid1),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: Some(EnergyBin::Mid2),
    },
    Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: Some(EnergyBin::High),
    },
];

/// Whether the dial belongs to the extended set.
pub fn is_extended_dial(dial: Dial) -> bool {
    EXTENDED_DIALS.contains(&dial)
}
