use std::collections::BTreeSet;

use frw_core::{CascadeModel, Dial, EnergyBin, EnergyWindow, FateCategory, HadronType, NormChannel};

fn all_dials() -> Vec<Dial> {
    let mut dials = Vec::new();
    for hadron in [HadronType::Pion, HadronType::Nucleon] {
        dials.extend(Dial::fate_dials(hadron));
        dials.push(Dial::Mfp { hadron });
        for bin in EnergyBin::ALL {
            dials.push(Dial::MfpBin { hadron, bin });
        }
        for model in [CascadeModel::Geant4, CascadeModel::Incl] {
            dials.push(Dial::ModelSwitch {
                hadron,
                model,
                bin: None,
            });
            for bin in EnergyBin::ALL {
                dials.push(Dial::ModelSwitch {
                    hadron,
                    model,
                    bin: Some(bin),
                });
            }
        }
    }
    for channel in NormChannel::ALL {
        dials.push(Dial::Norm { channel });
    }
    dials.push(Dial::ResonanceBugFix);
    dials
}

#[test]
fn labels_are_unique() {
    let dials = all_dials();
    let labels: BTreeSet<String> = dials.iter().map(|d| d.label()).collect();
    assert_eq!(labels.len(), dials.len());
}

#[test]
fn families_are_disjoint() {
    for dial in all_dials() {
        let classes = [dial.is_fate(), dial.is_mfp(), dial.is_model_switch()];
        assert!(classes.iter().filter(|&&c| c).count() <= 1, "{}", dial.label());
    }
}

#[test]
fn exactly_one_cushion_eligible_dial_per_family() {
    for hadron in [HadronType::Pion, HadronType::Nucleon] {
        let eligible: Vec<Dial> = Dial::fate_dials(hadron)
            .into_iter()
            .filter(|d| d.is_cushion_eligible())
            .collect();
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].fate(), Some(FateCategory::Inelastic));
    }
}

#[test]
fn energy_bin_qualifiers() {
    let binned = Dial::MfpBin {
        hadron: HadronType::Nucleon,
        bin: EnergyBin::Mid2,
    };
    assert_eq!(binned.energy_bin(), Some(EnergyBin::Mid2));

    let unbinned_switch = Dial::ModelSwitch {
        hadron: HadronType::Nucleon,
        model: CascadeModel::Incl,
        bin: None,
    };
    assert_eq!(unbinned_switch.energy_bin(), None);

    let whole_range = Dial::Mfp {
        hadron: HadronType::Pion,
    };
    assert_eq!(whole_range.energy_bin(), None);
}

#[test]
fn window_sentinels() {
    let unrestricted = EnergyWindow::UNRESTRICTED;
    assert!(unrestricted.is_unrestricted());
    assert!(unrestricted.contains(0.0));
    assert!(unrestricted.contains(1e6));

    let top = EnergyBin::High.window();
    assert!(top.high() < 0.0, "top bin must use the unbounded sentinel");
    assert!(top.contains(0.6));
    assert!(top.contains(1e9));
    assert!(!top.contains(0.599));
}

#[test]
fn bin_boundaries_belong_to_the_upper_bin() {
    for (lower, upper, edge) in [
        (EnergyBin::Low, EnergyBin::Mid1, 0.15),
        (EnergyBin::Mid1, EnergyBin::Mid2, 0.3),
        (EnergyBin::Mid2, EnergyBin::High, 0.6),
    ] {
        assert!(!lower.window().contains(edge));
        assert!(upper.window().contains(edge));
    }
}

#[test]
fn peripheral_dials_have_no_hadron() {
    assert_eq!(
        Dial::Norm {
            channel: NormChannel::CcCoherent
        }
        .hadron(),
        None
    );
    assert_eq!(Dial::ResonanceBugFix.hadron(), None);
    assert_eq!(
        Dial::Mfp {
            hadron: HadronType::Pion
        }
        .hadron(),
        Some(HadronType::Pion)
    );
}
