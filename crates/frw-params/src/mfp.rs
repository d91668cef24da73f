//! Mean-free-path parameter set: single tweak, single energy window.

use std::fmt;
use std::sync::Arc;

use frw_core::{Dial, EnergyWindow, HadronType, UncertaintyProvider};

use crate::scaling::linear_scale;

/// Per-hadron-type mean free path dial state.
///
/// Simpler sibling of the fate set: one tweak value, one window, no model
/// switch and no cushion concept.
pub struct MfpParams {
    hadron: HadronType,
    tweak: f64,
    included: bool,
    active_dial: Option<Dial>,
    window: EnergyWindow,
    uncert: Arc<dyn UncertaintyProvider>,
}

impl fmt::Debug for MfpParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MfpParams")
            .field("hadron", &self.hadron)
            .field("tweak", &self.tweak)
            .field("included", &self.included)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl MfpParams {
    /// Creates an untweaked set for one hadron type.
    pub fn new(hadron: HadronType, uncert: Arc<dyn UncertaintyProvider>) -> Self {
        Self {
            hadron,
            tweak: 0.0,
            included: false,
            active_dial: None,
            window: EnergyWindow::UNRESTRICTED,
            uncert,
        }
    }

    /// Hadron type this set was constructed for.
    pub fn hadron(&self) -> HadronType {
        self.hadron
    }

    /// Whether a dial has been set since the last reset.
    pub fn is_included(&self) -> bool {
        self.included
    }

    /// Stored tweak value.
    pub fn tweak_value(&self) -> f64 {
        self.tweak
    }

    /// Currently active kinetic energy window.
    pub fn active_window(&self) -> EnergyWindow {
        self.window
    }

    /// Records a tweak value for the dial.
    ///
    /// The window comes from the dial's energy bin qualifier; the
    /// whole-range dial leaves it unrestricted. Dials outside this set's
    /// family are rejected as a logged no-op.
    pub fn set_dial(&mut self, dial: Dial, value: f64) {
        if !dial.is_mfp() || dial.hadron() != Some(self.hadron) {
            log::debug!(
                "mfp set for {:?} ignores dial {}",
                self.hadron,
                dial.label()
            );
            return;
        }
        self.window = match dial.energy_bin() {
            Some(bin) => bin.window(),
            None => EnergyWindow::UNRESTRICTED,
        };
        self.tweak = value;
        self.included = true;
        self.active_dial = Some(dial);
    }

    /// Multiplicative mean free path scale at `ke` (GeV).
    ///
    /// Returns `1.0` when untweaked or outside the active window.
    pub fn scale_factor(&self, ke: f64) -> f64 {
        if !self.included || !self.window.contains(ke) {
            return 1.0;
        }
        let Some(dial) = self.active_dial else {
            return 1.0;
        };
        linear_scale(self.tweak, self.uncert.one_sigma_err(dial))
    }

    /// Squared user tweak, zero when untweaked.
    pub fn chisq_penalty(&self) -> f64 {
        if self.included {
            self.tweak * self.tweak
        } else {
            0.0
        }
    }

    /// Clears the tweak and resets the window to unrestricted.
    pub fn reset(&mut self) {
        self.tweak = 0.0;
        self.included = false;
        self.active_dial = None;
        self.window = EnergyWindow::UNRESTRICTED;
    }
}
