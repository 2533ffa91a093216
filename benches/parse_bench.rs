//! Criterion benchmarks for parseint
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use parseint::{base10, base10_64, base16};

const I32_INPUTS: &[(&str, &str)] = &[
    ("min", "-2147483648"),
    ("neg7", "-429495"),
    ("plus", "+429495"),
    ("pos1", "0"),
    ("pos3", "100"),
    ("pos6", "429495"),
    ("max", "2147483647"),
    ("syntax", "-"),
    ("overflow_min", "-2147483649"),
    ("overflow_max", "2147483648"),
    ("overflow_len", "999999999999999999"),
    ("leadzero31", "00000000000000000000000000000001"),
];

const U64_INPUTS: &[(&str, &str)] = &[
    ("pos1", "0"),
    ("pos3", "100"),
    ("pos10", "4294967295"),
    ("max", "18446744073709551615"),
    ("syntax", "1234567x"),
    ("overflow", "18446744073709551616"),
    ("leadzero63", "0000000000000000000000000000000000000000000000000000000000000001"),
];

const I64_INPUTS: &[(&str, &str)] = &[
    ("min", "-9223372036854775808"),
    ("neg7", "-4294967"),
    ("plus", "+4294967"),
    ("pos1", "0"),
    ("max", "9223372036854775807"),
    ("syntax", "-"),
    ("overflow_min", "-9223372036854775809"),
    ("overflow_max", "9223372036854775808"),
];

const HEX_INPUTS: &[(&str, &str)] = &[
    ("d1", "f"),
    ("d2", "ff"),
    ("d4", "ffff"),
    ("d8", "ffffffff"),
    ("syntax", "fffx"),
    ("overflow", "100000000"),
    ("leadzero28", "0000000000000000000000000000ffff"),
];

fn bench_base10_i32(c: &mut Criterion) {
    let mut group = c.benchmark_group("base10_i32");

    for &(name, input) in I32_INPUTS {
        group.bench_with_input(BenchmarkId::new("str", name), input, |b, input| {
            b.iter(|| black_box(base10::i32::<i64>(black_box(input))));
        });
        group.bench_with_input(
            BenchmarkId::new("bytes", name),
            input.as_bytes(),
            |b, input| {
                b.iter(|| black_box(base10::i32::<i64>(black_box(input))));
            },
        );
    }

    group.finish();
}

fn bench_base10_u32(c: &mut Criterion) {
    let mut group = c.benchmark_group("base10_u32");

    for &(name, input) in I32_INPUTS.iter().filter(|(_, s)| !s.starts_with(['-', '+'])) {
        group.bench_with_input(BenchmarkId::new("str", name), input, |b, input| {
            b.iter(|| black_box(base10::u32::<u64>(black_box(input))));
        });
    }

    group.finish();
}

fn bench_base10_64(c: &mut Criterion) {
    let mut group = c.benchmark_group("base10_64");

    for &(name, input) in U64_INPUTS {
        group.bench_with_input(BenchmarkId::new("u64", name), input, |b, input| {
            b.iter(|| black_box(base10_64::u64(black_box(input))));
        });
    }
    for &(name, input) in I64_INPUTS {
        group.bench_with_input(BenchmarkId::new("i64", name), input, |b, input| {
            b.iter(|| black_box(base10_64::i64(black_box(input))));
        });
    }

    group.finish();
}

fn bench_base16(c: &mut Criterion) {
    let mut group = c.benchmark_group("base16");

    for &(name, input) in HEX_INPUTS {
        group.bench_with_input(BenchmarkId::new("u16", name), input, |b, input| {
            b.iter(|| black_box(base16::u16::<u64>(black_box(input))));
        });
        group.bench_with_input(BenchmarkId::new("u32", name), input, |b, input| {
            b.iter(|| black_box(base16::u32::<u64>(black_box(input))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_base10_i32,
    bench_base10_u32,
    bench_base10_64,
    bench_base16
);
criterion_main!(benches);
