use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sms_split::{EncodingMode, decode, segment, select_encoding};
use std::hint::black_box;

fn sample(size: usize, unicode: bool) -> String {
    let base = if unicode {
        "Zażółć gęślą jaźń 😀 "
    } else {
        "The quick brown fox jumps over the lazy dog {€} "
    };
    base.chars().cycle().take(size).collect()
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [160, 1024, 16384].iter() {
        let text = sample(*size, true);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)));
        });
    }
    group.finish();
}

fn bench_select_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_encoding");

    for size in [160, 1024, 16384].iter() {
        let text = sample(*size, false);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| select_encoding(black_box(text)));
        });
    }
    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    for (name, unicode) in [("segment_gsm7", false), ("segment_ucs2", true)] {
        let mut group = c.benchmark_group(name);

        for size in [160, 1024, 16384].iter() {
            let text = sample(*size, unicode);
            group.throughput(Throughput::Elements(*size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
                b.iter(|| segment(black_box(text), EncodingMode::Auto));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_decode, bench_select_encoding, bench_segment);
criterion_main!(benches);
