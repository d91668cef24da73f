//! Routing of dial writes into the per-hadron parameter sets.

use std::sync::Arc;

use frw_core::{Dial, HadronType, NominalFateModel, UncertaintyProvider};
use frw_data::FateFractionTable;

use crate::fates::FateParams;
use crate::mfp::MfpParams;

/// The four parameter sets backing hadron transport reweighting: fate and
/// mean free path state for pions and nucleons.
#[derive(Debug)]
pub struct ReweightParams {
    pion_fates: FateParams,
    nucl_fates: FateParams,
    pion_mfp: MfpParams,
    nucl_mfp: MfpParams,
}

impl ReweightParams {
    /// Creates untweaked sets sharing the given collaborators.
    pub fn new(
        target_a: u32,
        table: Arc<FateFractionTable>,
        uncert: Arc<dyn UncertaintyProvider>,
        nominal: Arc<dyn NominalFateModel>,
    ) -> Self {
        Self {
            pion_fates: FateParams::new(
                HadronType::Pion,
                target_a,
                Arc::clone(&table),
                Arc::clone(&uncert),
                Arc::clone(&nominal),
            ),
            nucl_fates: FateParams::new(
                HadronType::Nucleon,
                target_a,
                table,
                Arc::clone(&uncert),
                nominal,
            ),
            pion_mfp: MfpParams::new(HadronType::Pion, Arc::clone(&uncert)),
            nucl_mfp: MfpParams::new(HadronType::Nucleon, uncert),
        }
    }

    /// Fate parameter set for one hadron type.
    pub fn fates(&self, hadron: HadronType) -> &FateParams {
        match hadron {
            HadronType::Pion => &self.pion_fates,
            HadronType::Nucleon => &self.nucl_fates,
        }
    }

    /// Mean free path parameter set for one hadron type.
    pub fn mfp(&self, hadron: HadronType) -> &MfpParams {
        match hadron {
            HadronType::Pion => &self.pion_mfp,
            HadronType::Nucleon => &self.nucl_mfp,
        }
    }

    /// Routes a dial write into the owning parameter set.
    ///
    /// Dials outside the fate and mean free path families are a logged
    /// no-op; the framework probes every calculator with every dial.
    pub fn set_dial(&mut self, dial: Dial, value: f64) {
        let Some(hadron) = dial.hadron() else {
            log::debug!("transport params ignore dial {}", dial.label());
            return;
        };
        if dial.is_mfp() {
            match hadron {
                HadronType::Pion => self.pion_mfp.set_dial(dial, value),
                HadronType::Nucleon => self.nucl_mfp.set_dial(dial, value),
            }
        } else {
            match hadron {
                HadronType::Pion => self.pion_fates.set_dial(dial, value),
                HadronType::Nucleon => self.nucl_fates.set_dial(dial, value),
            }
        }
    }

    /// Resets all four sets to the untweaked state.
    pub fn reset(&mut self) {
        self.pion_fates.reset();
        self.nucl_fates.reset();
        self.pion_mfp.reset();
        self.nucl_mfp.reset();
    }

    /// Sum of the four sets' squared-tweak penalties.
    pub fn chisq_penalty(&self) -> f64 {
        self.pion_fates.chisq_penalty()
            + self.nucl_fates.chisq_penalty()
            + self.pion_mfp.chisq_penalty()
            + self.nucl_mfp.chisq_penalty()
    }
}
