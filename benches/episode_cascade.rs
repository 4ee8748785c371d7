//! Benchmarks for episode extraction
//!
//! Tests performance of the pattern cascade over representative filenames.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use renomiq_parser::episode::extract;
use renomiq_parser::similarity::{name_similarity, normalize};

/// Filenames hitting different cascade depths.
const SAMPLES: &[(&str, &str)] = &[
    ("sxe_first_pattern", "Breaking.Bad.S01E05.720p.BluRay.mkv"),
    ("xsep_second_pattern", "Show.1x05.HDTV.mkv"),
    ("episode_word", "Some Show Episode 12.mkv"),
    ("part_late_pattern", "Documentary Part 3.mkv"),
    ("no_match_full_cascade", "Family Video Collection.mkv"),
];

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("episode_extract");

    for (label, name) in SAMPLES {
        group.bench_with_input(BenchmarkId::new("cascade", label), name, |b, name| {
            b.iter(|| extract(black_box(name)));
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_release_name", |b| {
        b.iter(|| {
            normalize(black_box(
                "Show.Name.S01E05.1080p.BluRay.x265-[GROUP].mkv",
            ))
        });
    });
}

fn bench_similarity(c: &mut Criterion) {
    c.bench_function("name_similarity_video_vs_subtitle", |b| {
        b.iter(|| {
            name_similarity(
                black_box("Show.Name.S01E05.1080p.WEB-DL.mkv"),
                black_box("Show.Name.S01E05.Fa.srt"),
            )
        });
    });
}

criterion_group!(benches, bench_extract, bench_normalize, bench_similarity);
criterion_main!(benches);
