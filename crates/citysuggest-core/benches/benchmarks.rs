use citysuggest_core::{CityCatalog, SuggestionIndex};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let index = SuggestionIndex::builtin();
    c.bench_function("search short prefix", |b| {
        b.iter(|| index.search(black_box("ma"), 8))
    });
    c.bench_function("search single letter", |b| {
        b.iter(|| index.search(black_box("a"), 8))
    });

    let folded = index.with_fold_accents(true);
    c.bench_function("search folded", |b| {
        b.iter(|| folded.search(black_box("bogota"), 8))
    });

    let big = CityCatalog::from_labels(
        (0..10_000).map(|i| format!("Town {i}, Region {}", i % 97)),
    );
    let big_index = SuggestionIndex::new(&big);
    c.bench_function("search 10k catalog", |b| {
        b.iter(|| big_index.search(black_box("town 12"), 8))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
