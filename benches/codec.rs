//! Benchmarks for the hex frame codec
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use toflog_rs::codec::{decode_frame_hex, encode_hex};
use toflog_rs::types::ZONE_COUNT;

fn bench_codec(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..ZONE_COUNT).map(|i| (i * 7) as u8).collect();
    let payload = encode_hex(&bytes);

    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(ZONE_COUNT as u64));

    group.bench_function("decode_frame_hex", |b| {
        b.iter(|| decode_frame_hex(black_box(&payload)))
    });

    group.bench_function("encode_hex", |b| b.iter(|| encode_hex(black_box(&bytes))));

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
