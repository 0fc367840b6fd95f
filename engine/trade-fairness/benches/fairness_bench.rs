use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trade_fairness::{fairness_description, fairness_score, parse_valuation};

fn bench_fairness_score(c: &mut Criterion) {
    c.bench_function("fairness_score", |b| {
        b.iter(|| fairness_score(black_box(20.0), black_box(80.0)))
    });
}

fn bench_fairness_description(c: &mut Criterion) {
    let scores: Vec<f64> = (0..=100).map(f64::from).collect();

    c.bench_function("fairness_description_sweep", |b| {
        b.iter(|| {
            for score in &scores {
                black_box(fairness_description(black_box(*score)));
            }
        })
    });
}

fn bench_parse_and_evaluate(c: &mut Criterion) {
    c.bench_function("parse_and_evaluate", |b| {
        b.iter(|| {
            let valuation = parse_valuation(black_box("37.5"), black_box("42")).unwrap();
            black_box(valuation.evaluate())
        })
    });
}

criterion_group!(
    benches,
    bench_fairness_score,
    bench_fairness_description,
    bench_parse_and_evaluate
);
criterion_main!(benches);
