use std::path::PathBuf;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use frw_core::{CascadeModel, Dial, FateCategory, HadronType};
use frw_data::FateFractionTable;
use frw_params::{DialUncertainties, EnergyDependentFateModel, FateParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fixture_table() -> Arc<FateFractionTable> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../frw-data/fixtures");
    Arc::new(FateFractionTable::load_from_dir(&dir).expect("fixture tables"))
}

fn query_energies() -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(7171);
    (0..1024).map(|_| rng.gen_range(0.0..1.2)).collect()
}

fn bench_baseline_scale(c: &mut Criterion) {
    let mut params = FateParams::new(
        HadronType::Nucleon,
        40,
        fixture_table(),
        Arc::new(DialUncertainties::default()),
        Arc::new(EnergyDependentFateModel),
    );
    let cex = Dial::Fate {
        hadron: HadronType::Nucleon,
        fate: FateCategory::ChargeExchange,
    };
    params.set_dial(cex, 1.0);
    let kes = query_energies();
    c.bench_function("baseline_scale_factor", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &ke in &kes {
                acc += params.scale_factor(cex, ke);
            }
            acc
        })
    });
}

fn bench_switched_scale(c: &mut Criterion) {
    let mut params = FateParams::new(
        HadronType::Nucleon,
        40,
        fixture_table(),
        Arc::new(DialUncertainties::default()),
        Arc::new(EnergyDependentFateModel),
    );
    params.set_dial(
        Dial::ModelSwitch {
            hadron: HadronType::Nucleon,
            model: CascadeModel::Incl,
            bin: None,
        },
        1.0,
    );
    let cex = Dial::Fate {
        hadron: HadronType::Nucleon,
        fate: FateCategory::ChargeExchange,
    };
    let kes = query_energies();
    c.bench_function("switched_scale_factor", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for &ke in &kes {
                acc += params.scale_factor(cex, ke);
            }
            acc
        })
    });
}

criterion_group!(benches, bench_baseline_scale, bench_switched_scale);
criterion_main!(benches);
