//! Collaborator traits consumed and exposed by the reweighting engine.

use crate::dial::Dial;
use crate::event::{EventSummary, ScatteringType};

/// Supplies the one-sigma fractional uncertainty registered for a dial.
pub trait UncertaintyProvider: Send + Sync {
    /// Registered one-sigma fractional error; zero for unregistered dials.
    fn one_sigma_err(&self, dial: Dial) -> f64;
}

/// Supplies the nominal (un-perturbed) fate fraction predicted by the
/// generator's own cascade model.
pub trait NominalFateModel: Send + Sync {
    /// Nominal fraction for the dial's fate at the given kinetic energy (GeV)
    /// on a target with the given mass number, scaled by `norm`.
    ///
    /// Returns zero for dials outside the fate family.
    fn fate_fraction(&self, dial: Dial, ke: f64, target_a: u32, norm: f64) -> f64;
}

/// Generic weight calculator interface the reweighting framework drives.
///
/// The framework probes many dial identifiers against many calculators;
/// a calculator must reject dials it does not handle gracefully rather
/// than failing.
pub trait WeightCalculator: Send + Sync {
    /// Stable calculator name used for routing and diagnostics.
    fn name(&self) -> &str;

    /// Whether this calculator contributes to events of the given class.
    fn applies_to(&self, scattering: ScatteringType, is_cc: bool) -> bool;

    /// Whether this calculator accepts the given dial.
    fn is_handled(&self, dial: Dial) -> bool;

    /// Records a tweak value for the given dial; unhandled dials are a no-op.
    fn set_systematic(&mut self, dial: Dial, value: f64);

    /// Clears all recorded tweak values back to the untweaked state.
    fn reset(&mut self);

    /// Recomputes any cached state after a batch of `set_systematic` calls.
    fn reconfigure(&mut self);

    /// Multiplicative weight contribution for one event; total over all
    /// valid inputs, never fails at query time.
    fn calc_weight(&self, event: &EventSummary) -> f64;
}
