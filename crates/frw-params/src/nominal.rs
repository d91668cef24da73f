//! Default nominal fate model with smooth energy dependence.
//!
//! The physics-accurate nominal fractions live in the generator; this
//! default keeps the engine self-contained and the unitarity machinery
//! exercised with normalized, energy-dependent fractions.

use frw_core::{Dial, FateCategory, HadronType, NominalFateModel};

/// Kinetic energy anchor points for the piecewise-linear fractions, in GeV.
const ANCHOR_KE: [f64; 3] = [0.0, 0.3, 1.0];

/// Mass number boundary above which absorption is enhanced.
const HEAVY_TARGET_A: u32 = 20;

/// Absorption enhancement applied for heavy targets before normalization.
const HEAVY_ABS_BOOST: f64 = 1.2;

/// Nominal fate fractions interpolated between energy anchors and
/// normalized so each hadron type's categories sum to one.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyDependentFateModel;

fn anchors(hadron: HadronType, fate: FateCategory) -> [f64; 3] {
    match (hadron, fate) {
        (HadronType::Pion, FateCategory::Elastic) => [0.25, 0.20, 0.15],
        (HadronType::Pion, FateCategory::Inelastic) => [0.35, 0.40, 0.35],
        (HadronType::Pion, FateCategory::ChargeExchange) => [0.15, 0.12, 0.08],
        (HadronType::Pion, FateCategory::Absorption) => [0.25, 0.20, 0.07],
        (HadronType::Pion, FateCategory::PionProduction) => [0.0, 0.08, 0.35],
        (HadronType::Nucleon, FateCategory::Elastic) => [0.30, 0.25, 0.20],
        (HadronType::Nucleon, FateCategory::Inelastic) => [0.45, 0.40, 0.30],
        (HadronType::Nucleon, FateCategory::ChargeExchange) => [0.15, 0.10, 0.05],
        (HadronType::Nucleon, FateCategory::Absorption) => [0.10, 0.10, 0.05],
        (HadronType::Nucleon, FateCategory::PionProduction) => [0.0, 0.15, 0.40],
    }
}

fn interpolate(values: [f64; 3], ke: f64) -> f64 {
    if ke <= ANCHOR_KE[0] {
        return values[0];
    }
    if ke >= ANCHOR_KE[2] {
        return values[2];
    }
    let (lo, hi, a, b) = if ke < ANCHOR_KE[1] {
        (ANCHOR_KE[0], ANCHOR_KE[1], values[0], values[1])
    } else {
        (ANCHOR_KE[1], ANCHOR_KE[2], values[1], values[2])
    };
    let t = (ke - lo) / (hi - lo);
    a + t * (b - a)
}

fn raw_fraction(hadron: HadronType, fate: FateCategory, ke: f64, target_a: u32) -> f64 {
    let mut value = interpolate(anchors(hadron, fate), ke);
    if fate == FateCategory::Absorption && target_a >= HEAVY_TARGET_A {
        value *= HEAVY_ABS_BOOST;
    }
    value
}

impl NominalFateModel for EnergyDependentFateModel {
    fn fate_fraction(&self, dial: Dial, ke: f64, target_a: u32, norm: f64) -> f64 {
        let Some(fate) = dial.fate() else {
            return 0.0;
        };
        let Some(hadron) = dial.hadron() else {
            return 0.0;
        };

        let categories = [
            FateCategory::Elastic,
            FateCategory::Inelastic,
            FateCategory::ChargeExchange,
            FateCategory::Absorption,
            FateCategory::PionProduction,
        ];
        let total: f64 = categories
            .iter()
            .map(|&cat| raw_fraction(hadron, cat, ke, target_a))
            .sum();
        if total <= 0.0 {
            return 0.0;
        }
        raw_fraction(hadron, fate, ke, target_a) / total * norm
    }
}
