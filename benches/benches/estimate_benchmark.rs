//! Estimation, formatting and signature benchmarks.
//!
//! Run with: `cargo bench --package mailco2-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mailco2_bench::{SHAPES, message};
use mailco2_lib::{
    Catalogs, Estimator, SignatureMode, UnitFamily, UnitFormatter, signature_for,
    strip_signature_text,
};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::global();
    let mut group = c.benchmark_group("estimate");

    for (name, shape) in SHAPES {
        let (details, attachments) = message(*shape, false);
        group.throughput(Throughput::Bytes(shape.body_bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &details, |b, details| {
            b.iter(|| estimator.estimate(black_box(details), black_box(&attachments)));
        });
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for locale in ["en", "fr"] {
        let formatter = UnitFormatter::new(Catalogs::global().resolve(locale));
        let values: Vec<f64> = (0..64).map(|i| 1.7_f64.powi(i) / 1000.0).collect();

        for family in UnitFamily::all() {
            group.bench_with_input(
                BenchmarkId::new(family.to_string(), locale),
                &values,
                |b, values| {
                    b.iter(|| {
                        for value in values {
                            black_box(formatter.format(black_box(*value), *family));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn signature_benchmark(c: &mut Criterion) {
    let catalog = Catalogs::global().resolve("fr");
    let mut group = c.benchmark_group("signature");

    for mode in [SignatureMode::PlainText, SignatureMode::Html] {
        let (details, attachments) = message(SHAPES[1].1, mode == SignatureMode::PlainText);
        let estimate = Estimator::global().estimate(&details, &attachments);
        let signed = format!(
            "{}{}",
            details.active_body(),
            signature_for(mode, &estimate, catalog)
        );

        group.bench_function(BenchmarkId::new("build", format!("{mode:?}")), |b| {
            b.iter(|| signature_for(mode, black_box(&estimate), catalog));
        });
        group.bench_function(BenchmarkId::new("strip", format!("{mode:?}")), |b| {
            b.iter(|| strip_signature_text(mode, black_box(&signed), catalog));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    estimate_benchmark,
    format_benchmark,
    signature_benchmark
);
criterion_main!(benches);
