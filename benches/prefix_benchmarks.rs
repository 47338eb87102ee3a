//! Prefix Index Benchmarks
//!
//! Benchmarks for building and querying the prefix trie, implemented with
//! the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use prefix_index_lib::catalog::{build_fruit_index, sample_fruits};
use prefix_index_lib::data_structures::{KeyNormalizer, PrefixTrie};
use std::time::Duration;

/// Deterministic pseudo-words: every key of length 1..=len over a 4-letter alphabet.
fn generate_keys(len: usize) -> Vec<String> {
    let mut keys = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| "acgt".chars().map(move |c| format!("{prefix}{c}")))
            .collect();
        keys.extend(frontier.iter().cloned());
    }
    keys.remove(0);
    keys
}

/// Benchmark trie construction
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("prefix_trie_insert");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for len in [4, 6, 8].iter() {
        let keys = generate_keys(*len);
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", keys.len()), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = PrefixTrie::new();
                for key in keys {
                    trie.insert(black_box(key.chars()));
                }
                trie
            });
        });
    }

    group.finish();
}

/// Benchmark lookups and suggestion enumeration
fn bench_queries(c: &mut Criterion) {
    let keys = generate_keys(8);
    let trie: PrefixTrie = keys.iter().map(|k| k.chars()).collect();

    let mut group = c.benchmark_group("prefix_trie_query");
    group.measurement_time(Duration::from_secs(2));

    group.bench_function("search_hit", |b| {
        b.iter(|| trie.search(black_box("acgtacgt").chars()))
    });
    group.bench_function("search_miss", |b| {
        b.iter(|| trie.search(black_box("acgtacgx").chars()))
    });

    for prefix in ["acgtac", "acgt", "ac"] {
        group.bench_with_input(BenchmarkId::new("suggestions", prefix), prefix, |b, prefix| {
            b.iter(|| trie.get_suggestions::<_, String>(black_box(prefix).chars()))
        });
    }

    let fruits = build_fruit_index(sample_fruits(), KeyNormalizer::case_insensitive());
    group.bench_function("fruit_payloads", |b| {
        b.iter(|| fruits.get_suggestions_with_payload(black_box("pa")).len())
    });

    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
