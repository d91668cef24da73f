use std::sync::Arc;

use frw_core::{Dial, EnergyBin, FateCategory, HadronType};
use frw_params::{DialUncertainties, MfpParams};

fn mfp_params(hadron: HadronType) -> MfpParams {
    MfpParams::new(hadron, Arc::new(DialUncertainties::default()))
}

#[test]
fn untweaked_set_is_neutral() {
    let params = mfp_params(HadronType::Pion);
    assert!(!params.is_included());
    for ke in [0.0, 0.1, 0.5, 10.0] {
        assert_eq!(params.scale_factor(ke), 1.0);
    }
    assert_eq!(params.chisq_penalty(), 0.0);
}

#[test]
fn whole_range_dial_scales_everywhere() {
    let mut params = mfp_params(HadronType::Nucleon);
    params.set_dial(
        Dial::Mfp {
            hadron: HadronType::Nucleon,
        },
        1.0,
    );
    assert!(params.is_included());
    assert!(params.active_window().is_unrestricted());
    // Default mean free path uncertainty is 0.2.
    for ke in [0.01, 0.2, 0.7, 3.0] {
        assert!((params.scale_factor(ke) - 1.2).abs() < 1e-12);
    }
}

#[test]
fn binned_dial_scales_only_inside_its_bin() {
    let mut params = mfp_params(HadronType::Nucleon);
    params.set_dial(
        Dial::MfpBin {
            hadron: HadronType::Nucleon,
            bin: EnergyBin::Mid2,
        },
        -1.0,
    );

    assert!((params.scale_factor(0.3) - 0.8).abs() < 1e-12);
    assert!((params.scale_factor(0.45) - 0.8).abs() < 1e-12);

    // Outside the bin the stored tweak has no effect; the 0.6 boundary
    // belongs to the upper bin.
    assert_eq!(params.scale_factor(0.29), 1.0);
    assert_eq!(params.scale_factor(0.6), 1.0);
    assert_eq!(params.scale_factor(2.0), 1.0);
}

#[test]
fn last_dial_wins_for_window_and_value() {
    let mut params = mfp_params(HadronType::Nucleon);
    params.set_dial(
        Dial::MfpBin {
            hadron: HadronType::Nucleon,
            bin: EnergyBin::Low,
        },
        2.0,
    );
    params.set_dial(
        Dial::MfpBin {
            hadron: HadronType::Nucleon,
            bin: EnergyBin::High,
        },
        0.5,
    );
    assert_eq!(params.scale_factor(0.1), 1.0);
    assert!((params.scale_factor(0.8) - 1.1).abs() < 1e-12);
    assert_eq!(params.tweak_value(), 0.5);
}

#[test]
fn foreign_dials_are_ignored() {
    let mut params = mfp_params(HadronType::Pion);
    params.set_dial(
        Dial::Mfp {
            hadron: HadronType::Nucleon,
        },
        2.0,
    );
    params.set_dial(
        Dial::Fate {
            hadron: HadronType::Pion,
            fate: FateCategory::Absorption,
        },
        2.0,
    );
    assert!(!params.is_included());
    assert_eq!(params.scale_factor(0.2), 1.0);
}

#[test]
fn reset_clears_everything() {
    let mut params = mfp_params(HadronType::Pion);
    params.set_dial(
        Dial::MfpBin {
            hadron: HadronType::Pion,
            bin: EnergyBin::Low,
        },
        3.0,
    );
    params.reset();
    assert!(!params.is_included());
    assert_eq!(params.tweak_value(), 0.0);
    assert!(params.active_window().is_unrestricted());
    assert_eq!(params.scale_factor(0.1), 1.0);
    assert_eq!(params.chisq_penalty(), 0.0);
}

#[test]
fn scale_floors_at_zero() {
    let mut params = mfp_params(HadronType::Pion);
    params.set_dial(
        Dial::Mfp {
            hadron: HadronType::Pion,
        },
        -10.0,
    );
    assert_eq!(params.scale_factor(0.2), 0.0);
}
