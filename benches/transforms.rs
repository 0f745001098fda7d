//! Benchmarks for textkit transformations on a large document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use textkit::transform::{
    extract_column, find_and_replace, remove_duplicate_lines, remove_extra_whitespace,
    sort_alphabetical, sort_numerical,
};
use textkit::{ReplaceFlags, Stats};

fn generate_sample_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!(
            "{}, Élodie  Müller, item {} costs {}.5 units\n",
            (i * 7919) % 1000,
            i % 50,
            i % 13
        ));
        if i % 10 == 0 {
            text.push('\n');
        }
    }
    text
}

fn benchmark_sorts(c: &mut Criterion) {
    let text = generate_sample_text(1000);

    c.bench_function("sort alphabetical (locale)", |b| {
        b.iter(|| sort_alphabetical(black_box(&text), false))
    });
    c.bench_function("sort numerical", |b| {
        b.iter(|| sort_numerical(black_box(&text), true))
    });
}

fn benchmark_line_filters(c: &mut Criterion) {
    let text = generate_sample_text(1000);

    c.bench_function("remove duplicate lines", |b| {
        b.iter(|| remove_duplicate_lines(black_box(&text)))
    });
    c.bench_function("remove extra whitespace", |b| {
        b.iter(|| remove_extra_whitespace(black_box(&text)))
    });
    c.bench_function("extract column", |b| {
        b.iter(|| extract_column(black_box(&text), ",", "1"))
    });
}

fn benchmark_find_and_replace(c: &mut Criterion) {
    let text = generate_sample_text(1000);

    c.bench_function("find and replace (literal)", |b| {
        b.iter(|| find_and_replace(black_box(&text), "units", "pcs", ReplaceFlags::empty()))
    });
    c.bench_function("find and replace (regex captures)", |b| {
        b.iter(|| {
            find_and_replace(
                black_box(&text),
                r"item (\d+)",
                "#$1",
                ReplaceFlags::REGEX | ReplaceFlags::CASE_SENSITIVE,
            )
        })
    });
}

fn benchmark_stats(c: &mut Criterion) {
    let text = generate_sample_text(1000);

    c.bench_function("document stats", |b| b.iter(|| Stats::of(black_box(&text))));
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_sorts,
              benchmark_line_filters,
              benchmark_find_and_replace,
              benchmark_stats
}
criterion_main!(benches);
