use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use palindrome_pairs::{find_pairs_with, naive_pairs, PairConfig, ReverseTrie, TrieStrategy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

// Benchmarks comparing the two trie strategies against the quadratic scan.

/// Generate words over a small alphabet, seeding some palindromes and reverses
fn generate_words(n: usize, max_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    let letters = b"abcde";
    let mut words = Vec::with_capacity(n);

    while words.len() < n {
        let len = rng.gen_range(1..=max_len);
        let word: String = (0..len)
            .map(|_| letters[rng.gen_range(0..letters.len())] as char)
            .collect();

        if rng.gen_bool(0.2) && words.len() + 1 < n {
            words.push(word.chars().rev().collect());
        }
        words.push(word);
    }

    words
}

fn bench_trie_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie_construction");

    for n in [100, 1000, 10_000] {
        let words = generate_words(n, 12);
        for strategy in [TrieStrategy::Traversal, TrieStrategy::PalindromesBelow] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &words,
                |b, words| b.iter(|| ReverseTrie::build(black_box(words), strategy)),
            );
        }
    }

    group.finish();
}

fn bench_find_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_pairs");
    group.measurement_time(Duration::from_secs(10));

    for n in [100, 1000, 10_000] {
        let words = generate_words(n, 12);
        for strategy in [TrieStrategy::Traversal, TrieStrategy::PalindromesBelow] {
            let config = PairConfig::with_strategy(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), n),
                &words,
                |b, words| b.iter(|| find_pairs_with(black_box(words), config)),
            );
        }
    }

    group.finish();
}

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("naive_pairs");
    group.sample_size(10);

    for n in [100, 1000] {
        let words = generate_words(n, 12);
        group.bench_with_input(BenchmarkId::new("naive", n), &words, |b, words| {
            b.iter(|| naive_pairs(black_box(words)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie_construction, bench_find_pairs, bench_naive);
criterion_main!(benches);
