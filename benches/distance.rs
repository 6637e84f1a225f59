use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pathdist::{
    edit_distance_ignore_case, filename_distance, levenshtein, levenshtein_bytes, path_distance,
    relative_distance,
};

fn bench_levenshtein(c: &mut Criterion) {
    let long_a: String = ('a'..='z').cycle().take(96).collect();
    let long_b: String = ('b'..='z').cycle().take(96).collect();

    let pairs: [(&str, &str, &str); 3] = [
        ("short", "kitten", "sitting"),
        ("filename", "quarterly_report_2024.txt", "quarterly_report_2025.txt"),
        ("beyond_block", &long_a, &long_b),
    ];

    let mut group = c.benchmark_group("levenshtein");
    for (name, a, b) in pairs {
        group.bench_with_input(BenchmarkId::new("chars", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(levenshtein(a, b)))
        });
        group.bench_with_input(BenchmarkId::new("bytes", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| black_box(levenshtein_bytes(a, b)))
        });
    }
    group.finish();
}

fn bench_structured(c: &mut Criterion) {
    let left_segments: Vec<String> =
        ["src", "services", "ingest", "parser"].map(String::from).to_vec();
    let right_segments: Vec<String> =
        ["src", "services", "intake", "parser"].map(String::from).to_vec();

    let mut group = c.benchmark_group("structured");

    group.bench_function("relative_distance", |b| {
        b.iter(|| black_box(relative_distance("annual_report_final", "annual_report_draft")))
    });

    group.bench_function("segment_edit_distance", |b| {
        b.iter(|| black_box(edit_distance_ignore_case(&left_segments, &right_segments)))
    });

    group.bench_function("filename_distance", |b| {
        b.iter(|| black_box(filename_distance("summary_2024.txt", "summary_2025.csv")))
    });

    group.bench_function("path_distance", |b| {
        b.iter(|| black_box(path_distance("src/parser/lexer.rs", "src/scan/lexer.rs")))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_structured);
criterion_main!(benches);
