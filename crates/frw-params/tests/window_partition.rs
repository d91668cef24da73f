use std::sync::Arc;

use frw_core::{Dial, EnergyBin, HadronType, UncertaintyProvider};
use frw_params::{DialUncertainties, MfpParams};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_energy_falls_in_exactly_one_bin(ke in 0.0f64..10.0) {
        let hits = EnergyBin::ALL
            .iter()
            .filter(|bin| bin.window().contains(ke))
            .count();
        prop_assert_eq!(hits, 1);
    }

    #[test]
    fn exactly_one_binned_mfp_dial_is_active_per_energy(ke in 0.0f64..10.0) {
        let uncert: Arc<dyn UncertaintyProvider> = Arc::new(DialUncertainties::default());
        let mut active = 0;
        for bin in EnergyBin::ALL {
            let mut params = MfpParams::new(HadronType::Nucleon, Arc::clone(&uncert));
            params.set_dial(
                Dial::MfpBin {
                    hadron: HadronType::Nucleon,
                    bin,
                },
                1.0,
            );
            if params.scale_factor(ke) != 1.0 {
                active += 1;
            }
        }
        prop_assert_eq!(active, 1);
    }
}

#[test]
fn boundaries_belong_to_the_upper_bin() {
    for (edge, expected) in [
        (0.0, EnergyBin::Low),
        (0.15, EnergyBin::Mid1),
        (0.3, EnergyBin::Mid2),
        (0.6, EnergyBin::High),
    ] {
        let owners: Vec<EnergyBin> = EnergyBin::ALL
            .into_iter()
            .filter(|bin| bin.window().contains(edge))
            .collect();
        assert_eq!(owners, vec![expected], "edge {edge}");
    }
}
