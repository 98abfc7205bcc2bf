use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill_core::{count, extract_headings, render};

fn prepare_document(sections: usize) -> String {
    (0..sections)
        .map(|i| {
            format!(
                "## Section {i}\n\n中文段落 with some **bold** and *italic* words, `code` and a [link](https://example.com).\n\n- first\n- second\n\n```\nfn main() {{}}\n```\n\n"
            )
        })
        .collect()
}

fn bench_text_analysis(c: &mut Criterion) {
    let document = prepare_document(500);

    c.bench_function("count 500 sections", |b| {
        b.iter(|| count(black_box(&document)))
    });

    c.bench_function("extract_headings 500 sections", |b| {
        b.iter(|| extract_headings(black_box(&document)))
    });

    c.bench_function("render 500 sections", |b| {
        b.iter(|| render(black_box(&document)))
    });
}

criterion_group!(benches, bench_text_analysis);
criterion_main!(benches);
