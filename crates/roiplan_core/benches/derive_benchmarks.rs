//! Criterion benchmarks for the ROI derivation pipeline
//!
//! Run with: cargo bench -p roiplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use roiplan_core::model::{ParamField, ParameterSet};
use roiplan_core::{derive_metrics, validate};

fn create_scaled_scenario(lines: f64) -> ParameterSet {
    let mut params = ParameterSet::default();
    params.general.number_of_lines = lines;
    params.general.number_of_ie_officers = (lines / 8.0).max(1.0);
    params
}

fn benchmark_derive_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_metrics");

    group.bench_function("defaults", |b| {
        let params = ParameterSet::default();
        b.iter(|| derive_metrics(black_box(&params)))
    });

    // Cost should be flat in plant size: the pipeline is a fixed number of
    // arithmetic operations regardless of the parameter values.
    for lines in [10.0, 100.0, 1_000.0] {
        let params = create_scaled_scenario(lines);
        group.bench_with_input(
            BenchmarkId::new("lines", lines as u64),
            &params,
            |b, params| b.iter(|| derive_metrics(black_box(params))),
        );
    }

    group.finish();
}

fn benchmark_edit_cycle(c: &mut Criterion) {
    // One UI keystroke: write a field, recompute metrics and warnings.
    c.bench_function("edit_recompute_cycle", |b| {
        let mut params = ParameterSet::default();
        let mut value = 0.0;
        b.iter(|| {
            value += 1.0;
            ParamField::RebalanceTime.set(&mut params, value % 30.0);
            let metrics = derive_metrics(black_box(&params));
            let warnings = validate(black_box(&params));
            (metrics, warnings)
        })
    });
}

criterion_group!(benches, benchmark_derive_metrics, benchmark_edit_cycle);
criterion_main!(benches);
