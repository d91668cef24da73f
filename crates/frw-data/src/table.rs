//! Process-wide fate-fraction and cross-section lookup tables.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use frw_core::errors::{ErrorInfo, FrwError};
use frw_core::{CascadeModel, Dial, FateCategory};

use crate::curve::MonotoneCurve;

/// Environment variable naming the directory that holds the table files.
pub const DATA_DIR_ENV: &str = "FRW_DATA_DIR";

const GEV_TO_MEV: f64 = 1000.0;
const COLUMNS: usize = 8;

/// Target mass regime selecting a curve set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TargetRegime {
    /// Mass number below 20.
    Light,
    /// Mass number 20 and above.
    Heavy,
}

impl TargetRegime {
    /// Regime for a target with the given mass number.
    pub fn from_mass_number(a: u32) -> Self {
        if a < 20 {
            TargetRegime::Light
        } else {
            TargetRegime::Heavy
        }
    }
}

/// Interpolated curves built from one model's table file.
#[derive(Debug, Clone)]
struct CurveSet {
    frac_total: MonotoneCurve,
    elastic: MonotoneCurve,
    inelastic: MonotoneCurve,
    charge_exchange: MonotoneCurve,
    absorption: MonotoneCurve,
    pion_production: MonotoneCurve,
    xsec_total: MonotoneCurve,
}

impl CurveSet {
    fn fraction_curve(&self, category: FateCategory) -> &MonotoneCurve {
        match category {
            FateCategory::Elastic => &self.elastic,
            FateCategory::Inelastic => &self.inelastic,
            FateCategory::ChargeExchange => &self.charge_exchange,
            FateCategory::Absorption => &self.absorption,
            FateCategory::PionProduction => &self.pion_production,
        }
    }
}

/// Per-regime curve sets for one alternate cascade model.
///
/// Both regimes are currently built from the single nucleon-target dataset
/// shipped per model; the regime axis keeps separate datasets expressible.
#[derive(Debug, Clone)]
struct RegimePair {
    light: CurveSet,
    heavy: CurveSet,
}

impl RegimePair {
    fn regime(&self, regime: TargetRegime) -> &CurveSet {
        match regime {
            TargetRegime::Light => &self.light,
            TargetRegime::Heavy => &self.heavy,
        }
    }
}

/// Provenance entry for one loaded table file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFileInfo {
    /// Model the file belongs to.
    pub model: String,
    /// Path the file was read from.
    pub path: String,
    /// Number of tabulated rows.
    pub rows: usize,
    /// Smallest tabulated kinetic energy, in MeV.
    pub ke_min_mev: f64,
    /// Largest tabulated kinetic energy, in MeV.
    pub ke_max_mev: f64,
    /// Hex sha256 digest of the raw file bytes.
    pub sha256: String,
}

/// Serializable provenance report for a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSummary {
    /// One entry per loaded file, in model order.
    pub files: Vec<TableFileInfo>,
}

/// Fate-fraction and cross-section curves for the alternate cascade models.
///
/// Loaded once from tabular files, immutable afterwards and safe for
/// unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct FateFractionTable {
    geant4: RegimePair,
    incl: RegimePair,
    summary: TableSummary,
}

impl FateFractionTable {
    /// File name holding one model's table inside the data directory.
    pub fn file_name(model: CascadeModel) -> String {
        format!("fsi-fractions-{}.dat", model.label())
    }

    /// Loads both model tables from the given directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self, FrwError> {
        let (geant4, g4_info) = load_model(dir, CascadeModel::Geant4)?;
        let (incl, incl_info) = load_model(dir, CascadeModel::Incl)?;
        Ok(Self {
            geant4,
            incl,
            summary: TableSummary {
                files: vec![g4_info, incl_info],
            },
        })
    }

    /// Returns the process-wide shared table, loading it on first use.
    ///
    /// The data directory is resolved from [`DATA_DIR_ENV`]. Exactly one
    /// load is attempted per process; an unset variable or unreadable files
    /// yield the same error to every caller. Loading the tables is a startup
    /// precondition, so callers are expected to propagate the error fatally.
    pub fn shared() -> Result<Arc<FateFractionTable>, FrwError> {
        static SHARED: OnceLock<Result<Arc<FateFractionTable>, FrwError>> = OnceLock::new();
        SHARED
            .get_or_init(|| {
                let dir = std::env::var(DATA_DIR_ENV).map_err(|_| {
                    FrwError::Data(
                        ErrorInfo::new("D110", "fate fraction data directory is unset")
                            .with_context("env", DATA_DIR_ENV)
                            .with_hint(
                                "point FRW_DATA_DIR at the directory holding the \
                                 fsi-fractions-*.dat files",
                            ),
                    )
                })?;
                FateFractionTable::load_from_dir(Path::new(&dir)).map(Arc::new)
            })
            .clone()
    }

    /// Whether the table carries substitute curves for the given dial.
    ///
    /// Only the four dialed fate categories are covered; elastic scattering
    /// and every non-fate dial are not.
    pub fn covers(&self, dial: Dial) -> bool {
        match dial.fate() {
            Some(FateCategory::Elastic) | None => false,
            Some(_) => true,
        }
    }

    /// Interpolated fate fraction at the given kinetic energy (GeV).
    ///
    /// The energy is clamped into the tabulated range before evaluation.
    pub fn fraction(
        &self,
        model: CascadeModel,
        regime: TargetRegime,
        category: FateCategory,
        ke_gev: f64,
    ) -> f64 {
        self.curves(model, regime)
            .fraction_curve(category)
            .eval(ke_gev * GEV_TO_MEV)
    }

    /// Interpolated sum of the tabulated fate fractions at `ke_gev`.
    pub fn total_fraction(&self, model: CascadeModel, regime: TargetRegime, ke_gev: f64) -> f64 {
        self.curves(model, regime).frac_total.eval(ke_gev * GEV_TO_MEV)
    }

    /// Interpolated total cross section at `ke_gev`, in the table's unit.
    pub fn total_cross_section(
        &self,
        model: CascadeModel,
        regime: TargetRegime,
        ke_gev: f64,
    ) -> f64 {
        self.curves(model, regime).xsec_total.eval(ke_gev * GEV_TO_MEV)
    }

    /// Provenance report for the loaded files.
    pub fn summary(&self) -> &TableSummary {
        &self.summary
    }

    fn curves(&self, model: CascadeModel, regime: TargetRegime) -> &CurveSet {
        match model {
            CascadeModel::Geant4 => self.geant4.regime(regime),
            CascadeModel::Incl => self.incl.regime(regime),
        }
    }
}

fn data_error(code: &str, message: String, path: &Path) -> FrwError {
    FrwError::Data(ErrorInfo::new(code, message).with_context("path", path.display().to_string()))
}

fn load_model(dir: &Path, model: CascadeModel) -> Result<(RegimePair, TableFileInfo), FrwError> {
    let path: PathBuf = dir.join(FateFractionTable::file_name(model));
    let bytes = std::fs::read(&path).map_err(|err| {
        FrwError::Data(
            ErrorInfo::new("D111", format!("cannot read table file: {err}"))
                .with_context("model", model.label())
                .with_context("path", path.display().to_string()),
        )
    })?;
    let sha256 = format!("{:x}", Sha256::digest(&bytes));
    let text = std::str::from_utf8(&bytes)
        .map_err(|err| data_error("D112", format!("table file is not utf-8: {err}"), &path))?;

    let rows = parse_rows(text, &path)?;
    let set = build_curves(&rows, &path)?;
    let info = TableFileInfo {
        model: model.label().to_string(),
        path: path.display().to_string(),
        rows: rows.len(),
        ke_min_mev: rows[0][0],
        ke_max_mev: rows[rows.len() - 1][0],
        sha256,
    };

    // The single dataset serves both target regimes.
    Ok((
        RegimePair {
            light: set.clone(),
            heavy: set,
        },
        info,
    ))
}

fn parse_rows(text: &str, path: &Path) -> Result<Vec<[f64; COLUMNS]>, FrwError> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != COLUMNS {
            return Err(data_error(
                "D113",
                format!(
                    "row {} has {} columns, expected {COLUMNS}",
                    lineno + 1,
                    fields.len()
                ),
                path,
            ));
        }
        let mut row = [0.0; COLUMNS];
        for (idx, field) in fields.iter().enumerate() {
            row[idx] = field.parse::<f64>().map_err(|err| {
                data_error(
                    "D114",
                    format!("row {} column {} is not a number: {err}", lineno + 1, idx + 1),
                    path,
                )
            })?;
        }
        rows.push(row);
    }
    if rows.len() < 2 {
        return Err(data_error(
            "D115",
            format!("table has {} rows, at least 2 are required", rows.len()),
            path,
        ));
    }
    Ok(rows)
}

fn build_curves(rows: &[[f64; COLUMNS]], path: &Path) -> Result<CurveSet, FrwError> {
    let ke: Vec<f64> = rows.iter().map(|r| r[0]).collect();
    let column = |idx: usize| -> Result<MonotoneCurve, FrwError> {
        MonotoneCurve::from_points(ke.clone(), rows.iter().map(|r| r[idx]).collect()).map_err(
            |err| {
                let info = err.info().clone().with_context("path", path.display().to_string());
                FrwError::Data(info)
            },
        )
    };
    Ok(CurveSet {
        frac_total: column(1)?,
        elastic: column(2)?,
        inelastic: column(3)?,
        charge_exchange: column(4)?,
        absorption: column(5)?,
        pion_production: column(6)?,
        xsec_total: column(7)?,
    })
}
