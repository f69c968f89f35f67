use base_r::{base64, z85, Codec, VariantsConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn get_codec(name: &str) -> Codec {
    let config = VariantsConfig::load_default().unwrap();
    config.get(name).unwrap().build().unwrap()
}

fn bench_encode_z85(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_z85");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| z85::encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode_z85(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_z85");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let encoded = z85::encode(&data);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| z85::decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_base64(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_base64");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| base64::encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode_base64(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_base64");

    for size in [64, 256, 1024, 4096, 16384].iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let encoded = base64::encode(&data);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| base64::decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_runtime_codec_encode(c: &mut Criterion) {
    let codec = get_codec("base32-crockford");
    let mut group = c.benchmark_group("encode_crockford_runtime");

    for size in [64, 1024, 16384].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| codec.encode(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_z85,
    bench_decode_z85,
    bench_encode_base64,
    bench_decode_base64,
    bench_runtime_codec_encode,
);
criterion_main!(benches);
