//! Run these benches with `cargo bench --bench background -- --verbose`
use criterion::{criterion_group, criterion_main, Criterion};
use skewt_thermo::{coords, DiagramBounds, Isopleth};
use strum::IntoEnumIterator;

fn build_tester() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(std::time::Duration::from_secs(10))
        .noise_threshold(0.03)
        .significance_level(0.01)
}

criterion_main!(background_benches);

criterion_group!(
    name = background_benches;
    config = build_tester();
    targets = background_lines_bench, moist_fields_bench
);

fn background_lines_bench(c: &mut Criterion) {
    let bounds = DiagramBounds::default();

    c.bench_function("background_lines", |b| {
        b.iter(|| {
            for family in Isopleth::iter() {
                let _x = coords::background_lines(family, &bounds).unwrap();
            }
        });
    });
}

fn moist_fields_bench(c: &mut Criterion) {
    let bounds = DiagramBounds::default();

    c.bench_function("moist_fields", |b| {
        b.iter(|| {
            let _theta_ep = coords::pseudoequivalent_field(&bounds).unwrap();
            let _theta_e = coords::equivalent_field(&bounds).unwrap();
        });
    });
}
