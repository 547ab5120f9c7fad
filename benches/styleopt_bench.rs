//! Criterion benchmarks for mutation and recombination.
//!
//! Uses a synthetic configuration document holding every registered
//! setting, so timings reflect registry dispatch plus nested recursion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_styleopt::evolve::rules::{Rule, RULES};
use u_styleopt::evolve::{mutate, recombine, Document, ScoredCandidate, Value};
use u_styleopt::random::create_rng;

// ===========================================================================
// Synthetic style document
// ===========================================================================

fn nested(pairs: &[(&str, Value)]) -> Document {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

fn full_style() -> Document {
    RULES
        .iter()
        .map(|(name, rule)| {
            let value = match rule {
                Rule::Choice(c) => Value::from(c.choices()[0]),
                Rule::Delta(d) => Value::Int(d.minimum() + 4),
                Rule::Range(r) => Value::Int(r.start()),
                Rule::Keep => Value::from(".*"),
                Rule::ForceBool(_) => Value::Bool(true),
                Rule::Nested => Value::Map(nested(&[
                    ("AfterClass", Value::Bool(true)),
                    ("AfterEnum", Value::Bool(false)),
                    ("AfterFunction", Value::Bool(true)),
                    ("SplitEmptyRecord", Value::Bool(true)),
                ])),
                Rule::NestedSeq => Value::Seq(
                    (1..=3)
                        .map(|p| {
                            Value::Map(nested(&[
                                ("Regex", Value::from("^<.*>")),
                                ("Priority", Value::Int(p)),
                            ]))
                        })
                        .collect(),
                ),
            };
            ((*name).to_owned(), value)
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutate");
    let style = full_style();

    for &rate in &[0.01, 0.1, 0.5] {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            let mut rng = create_rng(42);
            b.iter(|| {
                let out = mutate(black_box(&style), rate, &mut rng).expect("well-typed style");
                black_box(out)
            })
        });
    }
    group.finish();
}

fn bench_recombine(c: &mut Criterion) {
    let mut group = c.benchmark_group("recombine");
    group.sample_size(20);

    for &pop in &[10usize, 50, 200] {
        let scored: Vec<ScoredCandidate> = (0..pop)
            .map(|i| ScoredCandidate::new(i as f64, full_style()))
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(pop), &scored, |b, scored| {
            let mut rng = create_rng(42);
            b.iter(|| {
                let next = recombine(black_box(scored), 0.1, pop, &mut rng).expect("valid inputs");
                black_box(next)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mutate, bench_recombine);
criterion_main!(benches);
