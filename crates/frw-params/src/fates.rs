//! Fate-fraction parameter set: baseline scaling plus energy windows and
//! model switching layered on top.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use frw_core::{
    CascadeModel, Dial, EnergyWindow, FateCategory, HadronType, NominalFateModel,
    UncertaintyProvider,
};
use frw_data::{FateFractionTable, TargetRegime};

use crate::scaling::{linear_scale, NOMINAL_GUARD};

/// Per-hadron-type fate dial state.
///
/// Holds the user tweak values for the fate family of one hadron type, the
/// per-dial cushion flags, one active kinetic energy window and one active
/// model switch. The inelastic fate is the designated cushion term: its
/// tweak is derived, never user-set, so the family's fractions keep summing
/// to the nominal total.
pub struct FateParams {
    hadron: HadronType,
    target_a: u32,
    values: BTreeMap<Dial, f64>,
    cushions: BTreeMap<Dial, bool>,
    window: EnergyWindow,
    model_switch: Option<CascadeModel>,
    table: Arc<FateFractionTable>,
    uncert: Arc<dyn UncertaintyProvider>,
    nominal: Arc<dyn NominalFateModel>,
}

impl fmt::Debug for FateParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FateParams")
            .field("hadron", &self.hadron)
            .field("target_a", &self.target_a)
            .field("values", &self.values)
            .field("window", &self.window)
            .field("model_switch", &self.model_switch)
            .finish_non_exhaustive()
    }
}

impl FateParams {
    /// Creates an untweaked set for one hadron type on the given target.
    pub fn new(
        hadron: HadronType,
        target_a: u32,
        table: Arc<FateFractionTable>,
        uncert: Arc<dyn UncertaintyProvider>,
        nominal: Arc<dyn NominalFateModel>,
    ) -> Self {
        Self {
            hadron,
            target_a,
            values: BTreeMap::new(),
            cushions: default_cushions(hadron),
            window: EnergyWindow::UNRESTRICTED,
            model_switch: None,
            table,
            uncert,
            nominal,
        }
    }

    /// Hadron type this set was constructed for.
    pub fn hadron(&self) -> HadronType {
        self.hadron
    }

    /// Whether the dial belongs to the model-switch family.
    pub fn is_model_transform(&self, dial: Dial) -> bool {
        dial.is_model_switch()
    }

    /// Whether the dial is currently flagged as a cushion term.
    pub fn is_cushion(&self, dial: Dial) -> bool {
        self.cushions.get(&dial).copied().unwrap_or(false)
    }

    /// Stored user tweak value, if the dial has been set.
    pub fn tweak_value(&self, dial: Dial) -> Option<f64> {
        self.values.get(&dial).copied()
    }

    /// Currently active kinetic energy window.
    pub fn active_window(&self) -> EnergyWindow {
        self.window
    }

    /// Currently active model switch.
    pub fn active_model(&self) -> Option<CascadeModel> {
        self.model_switch
    }

    /// Records a tweak value for the dial.
    ///
    /// Non-model-switch dials follow the baseline behavior: dials outside
    /// this set's family and dials currently flagged as cushion terms are
    /// rejected as a logged no-op. Model-switch dials additionally record
    /// the active model and window and fan the value out to every sibling
    /// fate dial except the cushion term.
    pub fn set_dial(&mut self, dial: Dial, value: f64) {
        if !self.is_model_transform(dial) {
            self.set_fate_dial(dial, value);
            return;
        }

        if dial.hadron() != Some(self.hadron) {
            log::debug!(
                "fate set for {:?} ignores dial {}",
                self.hadron,
                dial.label()
            );
            return;
        }
        if self.is_cushion(dial) {
            log::warn!(
                "cannot set cushion term {}; its value is derived to maintain unitarity",
                dial.label()
            );
            return;
        }

        let Dial::ModelSwitch { model, bin, .. } = dial else {
            return;
        };
        self.model_switch = Some(model);
        self.window = match bin {
            Some(bin) => bin.window(),
            None => EnergyWindow::UNRESTRICTED,
        };

        // Fan the value out to the siblings; under the switch each one is
        // scaled by the model difference at query time. The inelastic fate
        // stays the cushion and absorbs the residual fraction.
        for sibling in Dial::fate_dials(self.hadron) {
            if sibling.is_cushion_eligible() {
                continue;
            }
            self.values.insert(sibling, value);
            self.cushions.insert(sibling, false);
        }
    }

    fn set_fate_dial(&mut self, dial: Dial, value: f64) {
        let in_family = dial
            .fate()
            .is_some_and(|fate| FateCategory::DIAL_FATES.contains(&fate));
        if !in_family || dial.hadron() != Some(self.hadron) {
            log::debug!(
                "fate set for {:?} ignores dial {}",
                self.hadron,
                dial.label()
            );
            return;
        }
        if self.is_cushion(dial) {
            log::warn!(
                "cannot set cushion term {}; its value is derived to maintain unitarity",
                dial.label()
            );
            return;
        }
        self.values.insert(dial, value);
        self.cushions.insert(dial, false);
    }

    /// Effective tweak value entering the scale factor at `ke`.
    ///
    /// Non-cushion dials report their stored value. The cushion dial reports
    /// the derived value that cancels the siblings' net fraction shift, so
    /// the family's fractions keep summing to the nominal total.
    pub fn actual_tweak(&self, dial: Dial, ke: f64) -> f64 {
        if ke < 0.0 {
            return 0.0;
        }
        if !self.is_cushion(dial) {
            return self.values.get(&dial).copied().unwrap_or(0.0);
        }

        let mut shift = 0.0;
        for sibling in Dial::fate_dials(self.hadron) {
            if self.is_cushion(sibling) {
                continue;
            }
            let tweak = self.values.get(&sibling).copied().unwrap_or(0.0);
            if tweak == 0.0 {
                continue;
            }
            let sigma = self.one_sigma_err(sibling, ke);
            let frac = self.nominal.fate_fraction(sibling, ke, self.target_a, 1.0);
            shift += tweak * sigma * frac;
        }

        let cushion_sigma = self.one_sigma_err(dial, ke);
        let cushion_frac = self.nominal.fate_fraction(dial, ke, self.target_a, 1.0);
        let denom = cushion_sigma * cushion_frac;
        if denom.abs() <= NOMINAL_GUARD {
            return 0.0;
        }
        -shift / denom
    }

    /// Multiplicative scale for the dial's fate fraction at `ke` (GeV).
    ///
    /// Returns `1.0` outside the active window; disjoint energy bins compose
    /// without interfering through this check.
    pub fn scale_factor(&self, dial: Dial, ke: f64) -> f64 {
        if !self.window.contains(ke) {
            return 1.0;
        }
        linear_scale(self.actual_tweak(dial, ke), self.one_sigma_err(dial, ke))
    }

    /// One-sigma fractional error for the dial at `ke` (GeV).
    ///
    /// With no model switch active this is the registered per-dial
    /// uncertainty. With a switch active it is the registered uncertainty of
    /// the active switch dial scaled by the relative difference between the
    /// alternate-model and nominal fractions; dials the table does not cover
    /// and near-zero nominal fractions report zero.
    pub fn one_sigma_err(&self, dial: Dial, ke: f64) -> f64 {
        let Some(model) = self.model_switch else {
            return self.uncert.one_sigma_err(dial);
        };

        let switch_dial = Dial::ModelSwitch {
            hadron: self.hadron,
            model,
            bin: None,
        };
        let one_sigma = self.uncert.one_sigma_err(switch_dial);

        if !self.table.covers(dial) {
            return 0.0;
        }
        let Some(fate) = dial.fate() else {
            return 0.0;
        };

        let nominal = self.nominal.fate_fraction(dial, ke, self.target_a, 1.0);
        if nominal <= NOMINAL_GUARD {
            return 0.0;
        }
        let regime = TargetRegime::from_mass_number(self.target_a);
        let alternate = self.table.fraction(model, regime, fate, ke);
        ((alternate - nominal) / nominal) * one_sigma
    }

    /// Sum of squared user tweaks over the non-cushion dials.
    pub fn chisq_penalty(&self) -> f64 {
        self.values
            .iter()
            .filter(|(dial, _)| !self.is_cushion(**dial))
            .map(|(_, value)| value * value)
            .sum()
    }

    /// Clears all tweaks, restores the declared cushion flags, and resets
    /// the window and model switch.
    pub fn reset(&mut self) {
        self.values.clear();
        self.cushions = default_cushions(self.hadron);
        self.window = EnergyWindow::UNRESTRICTED;
        self.model_switch = None;
    }
}

fn default_cushions(hadron: HadronType) -> BTreeMap<Dial, bool> {
    Dial::fate_dials(hadron)
        .into_iter()
        .map(|dial| (dial, dial.is_cushion_eligible()))
        .collect()
}
