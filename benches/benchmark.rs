use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_matrix::{MatrixBuilder, UnicodeWordTokenizer, VectorizerConfig, Vocabulary};

// 擬似コーパス: 語彙を共有する短文を大量に作る
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Vec<String> {
    const WORDS: [&str; 16] = [
        "rust", "vector", "matrix", "term", "document", "cosine", "weight", "corpus",
        "token", "index", "frequency", "inverse", "similar", "distance", "count", "row",
    ];
    (0..docs)
        .map(|d| {
            (0..words_per_doc)
                .map(|w| {
                    let k = (d * 7 + w * 13 + d * w) % (WORDS.len() * 4);
                    if k < WORDS.len() { WORDS[k].to_string() } else { format!("{}{}", WORDS[k % WORDS.len()], k) }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn matrix_benchmark(c: &mut Criterion) {
    let docs = synthetic_corpus(400, 60);

    c.bench_function("vocabulary_from_corpus", |b| {
        b.iter(|| Vocabulary::from_corpus(&docs, &UnicodeWordTokenizer))
    });

    for (name, parallel) in [("report_sequential", false), ("report_parallel", true)] {
        let config = VectorizerConfig { parallel, parallel_min_docs: 1, ..Default::default() };
        let builder: MatrixBuilder<String> = MatrixBuilder::new(&docs, &UnicodeWordTokenizer).config(config);
        c.bench_function(name, |b| b.iter(|| builder.report().expect("corpus vocabulary covers every document")));
    }

    let memo = VectorizerConfig { memoize_counts: true, ..Default::default() };
    let builder: MatrixBuilder<String> = MatrixBuilder::new(&docs, &UnicodeWordTokenizer).config(memo);
    c.bench_function("report_memoized", |b| b.iter(|| builder.report().expect("corpus vocabulary covers every document")));
}

criterion_group!(benches, matrix_benchmark);
criterion_main!(benches);
