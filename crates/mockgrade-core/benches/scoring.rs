use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mockgrade_core::export::to_plain_text;
use mockgrade_core::scorer::{grade, score_components};

fn make_text(words: usize, per_sentence: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        text.push_str("lorem");
        if (i + 1) % per_sentence == 0 {
            text.push('.');
        }
        text.push(' ');
    }
    text
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");

    group.bench_function("empty", |b| b.iter(|| grade(black_box(""), black_box(""))));

    let ideal = make_text(300, 30);
    group.bench_function("ideal_300_words", |b| {
        b.iter(|| grade(black_box("Essay"), black_box(&ideal)))
    });

    let long = make_text(20_000, 25);
    group.bench_function("long_20k_words", |b| {
        b.iter(|| grade(black_box("Essay"), black_box(&long)))
    });

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let text = make_text(1_000, 15);
    c.bench_function("score_components_1k", |b| {
        b.iter(|| score_components(black_box(&text)))
    });
}

fn bench_export(c: &mut Criterion) {
    let result = grade("Essay", &make_text(300, 30));
    c.bench_function("to_plain_text", |b| b.iter(|| to_plain_text(black_box(&result))));
}

criterion_group!(benches, bench_grade, bench_components, bench_export);
criterion_main!(benches);
