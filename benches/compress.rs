//! Criterion benchmarks for the Xpress-Huffman compressor.
//!
//! Run with:
//!   cargo bench --bench compress

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xpress_huffman::{compress, config::CHUNK_SIZE, max_compressed_size};

fn corpus_text(len: usize) -> Vec<u8> {
    let sample = b"The quick brown fox jumps over the lazy dog. Pack my box with five dozen liquor jugs. ";
    let mut v = Vec::with_capacity(len);
    while v.len() < len {
        v.extend_from_slice(sample);
    }
    v.truncate(len);
    v
}

fn corpus_zeros(len: usize) -> Vec<u8> {
    vec![0u8; len]
}

fn corpus_random(len: usize) -> Vec<u8> {
    let mut state: u32 = 0xC0FF_EE11;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    let shapes: &[(&str, fn(usize) -> Vec<u8>)] = &[
        ("text", corpus_text),
        ("zeros", corpus_zeros),
        ("random", corpus_random),
    ];

    for &(name, make) in shapes {
        let input = make(CHUNK_SIZE);
        let mut out = vec![0u8; max_compressed_size(input.len())];

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("one_chunk", name), &input, |b, input| {
            b.iter(|| compress(input, &mut out).unwrap());
        });
    }

    group.finish();
}

fn bench_compress_multi_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_multi_chunk");

    let input = corpus_text(CHUNK_SIZE * 8);
    let mut out = vec![0u8; max_compressed_size(input.len())];

    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("eight_chunks_text", |b| {
        b.iter(|| compress(&input, &mut out).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_compress, bench_compress_multi_chunk);
criterion_main!(benches);
