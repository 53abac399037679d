//! Performance benchmarks for compound splitting
//!
//! Run with: cargo bench --bench split_benchmarks

use compsplit_core::{Config, LanguageProfile, LexiconStore, SegmentEnumerator, Splitter};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;

const STEMS: [&str; 12] = [
    "kranken", "haus", "arbeit", "zeit", "stadt", "rand", "bahn", "hof", "wasser", "kraft",
    "werk", "schule",
];

fn store() -> LexiconStore {
    let profile = LanguageProfile::new("de", ["s", "e", "en", "es", "n", "er"], []);
    let mut builder = LexiconStore::builder(&profile);
    for (rank, stem) in STEMS.iter().enumerate() {
        builder = builder.word(stem, 1000 - rank as u64 * 50);
    }
    builder.build()
}

/// Build a compound from `parts` stems, joined with binding morphemes
fn compound(parts: usize) -> String {
    (0..parts)
        .map(|i| STEMS[i % STEMS.len()])
        .collect::<Vec<_>>()
        .join("s")
}

/// Benchmark candidate enumeration as the word grows
fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");
    let store = store();
    let enumerator = SegmentEnumerator::new(&store);

    for parts in [2, 3, 4, 5] {
        let word = compound(parts);
        group.bench_with_input(BenchmarkId::new("parts", parts), &word, |b, word| {
            b.iter(|| enumerator.enumerate(black_box(word)).count());
        });
    }

    group.finish();
}

/// Benchmark the complete pipeline per word
fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    let splitter = Splitter::new(Arc::new(store()), Config::default());

    for parts in [2, 3, 4] {
        let word = compound(parts);
        group.bench_with_input(BenchmarkId::new("parts", parts), &word, |b, word| {
            b.iter(|| splitter.split(black_box(word)));
        });
    }

    group.finish();
}

/// Benchmark batch splitting
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let splitter = Splitter::new(Arc::new(store()), Config::default());

    for size in [100, 1000] {
        let words: Vec<String> = (0..size).map(|i| compound(2 + i % 3)).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("words", size), &words, |b, words| {
            b.iter(|| splitter.split_batch(black_box(words)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_enumeration, bench_split, bench_batch);
criterion_main!(benches);
