//! Performance benchmarks for word scoring.
//!
//! Scoring is linear in word length; these benchmarks track the per-character
//! cost across a few input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use word_points::{points_for_word, WordScorer};

fn bench_points_for_word(c: &mut Criterion) {
    c.bench_function("points_for_word_test", |b| {
        b.iter(|| points_for_word(black_box("test")))
    });
}

fn bench_word_lengths(c: &mut Criterion) {
    let scorer = WordScorer::default();
    let mut group = c.benchmark_group("score_by_length");

    for len in [16usize, 256, 4096] {
        let word: String = "Pneumonoultramicroscopic-123 "
            .chars()
            .cycle()
            .take(len)
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &word, |b, word| {
            b.iter(|| scorer.score(black_box(word)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_points_for_word, bench_word_lengths);
criterion_main!(benches);
