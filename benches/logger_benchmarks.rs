//! Criterion benchmarks for composite_logger

use composite_logger::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn sample_record() -> LogRecord {
    LogRecord::new(
        "Benchmark message",
        LogLevel::Info,
        Some("BENCH".to_string()),
        "benches/logger_benchmarks.rs",
        1,
    )
}

// ============================================================================
// Record and Formatter Benchmarks
// ============================================================================

fn bench_record_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("new", |b| {
        b.iter(|| {
            let record = LogRecord::new(
                black_box("Benchmark message"),
                LogLevel::Info,
                None,
                "benches/logger_benchmarks.rs",
                1,
            );
            black_box(record)
        });
    });

    group.bench_function("with_formatted", |b| {
        let record = sample_record();
        b.iter(|| black_box(record.clone().with_formatted("rendered")));
    });

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();
    let simple = LogFormatter::simple();
    let medium = LogFormatter::medium();
    let full = LogFormatter::full();

    group.bench_function("simple", |b| {
        b.iter(|| black_box(simple.format(black_box(&record))));
    });

    group.bench_function("medium", |b| {
        b.iter(|| black_box(medium.format(black_box(&record))));
    });

    group.bench_function("full", |b| {
        b.iter(|| black_box(full.format(black_box(&record))));
    });

    group.finish();
}

// ============================================================================
// Pipeline Delivery Benchmarks
// ============================================================================

fn bench_pipeline_delivery(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_delivery");
    group.throughput(Throughput::Elements(1));

    let record = sample_record();

    let bare = NullWriter;
    group.bench_function("null_sink", |b| {
        b.iter(|| bare.deliver(black_box(&record)));
    });

    let filtered = NullWriter.filter_level(LogLevel::Warning);
    group.bench_function("filtered_drop", |b| {
        b.iter(|| filtered.deliver(black_box(&record)));
    });

    let chain = NullWriter
        .format(LogFormatter::simple())
        .filter_level(LogLevel::Trace);
    group.bench_function("filter_then_format", |b| {
        b.iter(|| chain.deliver(black_box(&record)));
    });

    let fork = ForkWriter::new(vec![
        Box::new(NullWriter),
        Box::new(NullWriter.format(LogFormatter::simple())),
        Box::new(NullWriter.filter_level(LogLevel::Error)),
    ]);
    group.bench_function("fork_three_branches", |b| {
        b.iter(|| fork.deliver(black_box(&record)));
    });

    group.finish();
}

fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.throughput(Throughput::Elements(1));

    let log = StaticLogger::new();
    group.bench_function("unbound_noop", |b| {
        b.iter(|| log.info(black_box("Benchmark message")));
    });

    log.set_writer(NullWriter);
    group.bench_function("bound_null", |b| {
        b.iter(|| log.info(black_box("Benchmark message")));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_record_creation,
    bench_formatters,
    bench_pipeline_delivery,
    bench_facade
);
criterion_main!(benches);
