//! Conversion Benchmarks
//!
//! Measures the two halves of the hot path separately:
//! - Expression resolution (lex + parse + registry lookups)
//! - The arithmetic of an already-resolved conversion

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use unit_convert::UnitRegistry;

fn bench_resolve_expression(c: &mut Criterion) {
    let reg = UnitRegistry::with_defaults();

    let mut group = c.benchmark_group("resolve");
    group.bench_function("simple", |b| {
        b.iter(|| reg.resolve_unit(black_box("m/s")).unwrap())
    });
    group.bench_function("compound", |b| {
        b.iter(|| reg.resolve_unit(black_box("kg cm^2 / hour / min / ms")).unwrap())
    });
    group.bench_function("prefixed", |b| {
        b.iter(|| reg.resolve_unit(black_box("MWh")).unwrap())
    });
    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let reg = UnitRegistry::with_defaults();
    let mut rng = StdRng::seed_from_u64(42);
    let values: Vec<f64> = (0..1024).map(|_| rng.gen_range(-1e6..1e6)).collect();

    let mut group = c.benchmark_group("convert");

    group.bench_function("parse_and_convert", |b| {
        let mut i = 0;
        b.iter(|| {
            let v = values[i % values.len()];
            i += 1;
            reg.make_quantity_parts(black_box(v), "mph")
                .unwrap()
                .to("m/s")
                .unwrap()
                .value()
        })
    });

    group.bench_function("preresolved", |b| {
        let source = reg.resolve_unit("mph").unwrap();
        let target = reg.resolve_unit("m/s").unwrap();
        let mut i = 0;
        b.iter(|| {
            let v = values[i % values.len()];
            i += 1;
            unit_convert::convert_value(black_box(v), &source, &target).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_resolve_expression, bench_convert);
criterion_main!(benches);
