use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn media(c: &mut Criterion) {
    let mut doc = String::new();
    let mut index = 0;
    while index < 1000 {
        doc.push_str("Lorem ipsum [dolor](/sit \"amet\") consectetur ![adipiscing][x] elit [sed] do [eiusmod](tempor) incididunt [ut \n");
        index += 1;
    }

    let options = mediamark::ParseOptions {
        definitions: vec!["x".into(), "sed".into()],
        ..mediamark::ParseOptions::default()
    };

    c.bench_with_input(BenchmarkId::new("media", "synthetic"), &doc, |b, s| {
        b.iter(|| mediamark::to_events_with_options(s, &options));
    });
}

criterion_group!(benches, media);
criterion_main!(benches);
