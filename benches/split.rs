use camelsplit::{split, split_with};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_split(c: &mut Criterion) {
    let large_input = "HelloWorld99HTML".repeat(10_000);

    c.bench_function("split_large", |b| {
        b.iter(|| split(black_box(large_input.as_str())))
    });

    c.bench_function("split_short", |b| b.iter(|| split(black_box("PDFLoader"))));

    c.bench_function("split_with_no_split_words", |b| {
        b.iter(|| {
            split_with(
                black_box("1Tls2IsUsedInHttpCommunicationAndIsSecure"),
                black_box(&["Tls2", "HttpCommunication"]),
            )
        })
    });
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
