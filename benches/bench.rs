#![allow(missing_docs)]

use alloy_primitives::{keccak256, Bytes, B256};
use bintrie::{BinaryTrie, BitSequence};
use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion,
};
use std::{hint::black_box, time::Duration};

/// Benchmarks the order-preserving bit-sequence codec.
pub fn codec_benchmark(c: &mut Criterion) {
    let lengths = [8usize, 64, 248, 256];

    let mut g = group(c, "bits_encode");
    for len in lengths {
        g.throughput(criterion::Throughput::Elements(len as u64));
        let id = criterion::BenchmarkId::new("encode", len);
        g.bench_function(id, |b| {
            let bits = get_bits(len);
            b.iter(|| black_box(&bits).encode())
        });
        let id = criterion::BenchmarkId::new("decode", len);
        g.bench_function(id, |b| {
            let encoded = get_bits(len).encode();
            b.iter(|| BitSequence::decode(black_box(&encoded)))
        });
    }
}

/// Benchmarks trie insertion and lookup with various numbers of keys.
pub fn trie_benchmark(c: &mut Criterion) {
    let counts = [100usize, 1000];

    let mut g = group(c, "trie");
    for count in counts {
        let keys = get_keys(count);

        let id = criterion::BenchmarkId::new("put", count);
        g.bench_function(id, |b| {
            b.iter(|| {
                let mut trie: BinaryTrie = BinaryTrie::new();
                for key in &keys {
                    trie.put(*key, Bytes::copy_from_slice(key.as_slice()));
                }
                trie
            })
        });

        let id = criterion::BenchmarkId::new("get", count);
        let mut trie: BinaryTrie = BinaryTrie::new();
        for key in &keys {
            trie.put(*key, Bytes::copy_from_slice(key.as_slice()));
        }
        g.bench_function(id, |b| {
            b.iter(|| {
                for key in &keys {
                    black_box(trie.get(key));
                }
            })
        });
    }
}

fn group<'a>(c: &'a mut Criterion, name: &str) -> BenchmarkGroup<'a, WallTime> {
    let mut g = c.benchmark_group(name);
    g.noise_threshold(0.02).warm_up_time(Duration::from_secs(1));
    g
}

fn get_bits(len: usize) -> BitSequence {
    let seed = keccak256(len.to_be_bytes());
    BitSequence::from_bytes(seed.as_slice()).slice(0, len).unwrap()
}

fn get_keys(count: usize) -> Vec<B256> {
    // Half the keys share stems pairwise, half are unique.
    (0..count)
        .map(|i| {
            let mut key = keccak256((i / 2).to_be_bytes());
            key.0[31] = i as u8;
            key
        })
        .collect()
}

criterion_group!(benches, codec_benchmark, trie_benchmark);
criterion_main!(benches);
