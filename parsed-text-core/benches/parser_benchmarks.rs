//! Performance benchmarks for TextParser
//!
//! Run with: cargo bench --bench parser_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use parsed_text_core::TextParser;
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "Ping @ann about https://example.com/docs, #release notes and mail ops@example.com. ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

/// Benchmark different text sizes with the full built-in library
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let parser = TextParser::with_builtins(&["url", "email", "phone", "mention", "hashtag"])
        .expect("built-in patterns compile");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark how the number of patterns affects throughput
fn bench_pattern_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_counts");
    let text = generate_text(102_400);
    let names = ["url", "email", "phone", "mention", "hashtag"];

    for count in 1..=names.len() {
        let parser = TextParser::with_builtins(&names[..count]).expect("built-in patterns compile");

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("patterns", count), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_pattern_counts);
criterion_main!(benches);
