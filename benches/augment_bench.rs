//! Criterion benchmarks for query augmentation.
//!
//! Measures both ranking strategies and the full augmentation step over
//! synthetic result sets of increasing size.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use requery::document::{Document, Relevance, RelevanceFeedback};
use requery::expansion::{QueryExpansion, Strategy};

/// Generate ranked documents from a fixed word pool.
fn generate_documents(count: usize) -> Vec<Document> {
    let words = [
        "friends", "sitcom", "television", "series", "created", "david", "crane", "marta",
        "kauffman", "netflix", "stream", "reunion", "special", "cast", "earth", "climate",
        "garden", "lyric", "video", "music", "young", "people", "comfort", "support",
    ];

    (0..count)
        .map(|i| {
            let title: Vec<&str> = (0..4).map(|j| words[(i * 7 + j * 3) % words.len()]).collect();
            let snippet: Vec<&str> = (0..20).map(|j| words[(i * 5 + j * 11) % words.len()]).collect();
            Document::new(i + 1, format!("https://example.com/{i}"), title.join(" "), snippet.join(" "))
        })
        .collect()
}

fn feedback_for(count: usize) -> RelevanceFeedback {
    let labels: Vec<Relevance> = (0..count).map(|i| Relevance::from(i % 3 == 1)).collect();
    RelevanceFeedback::from_labels(&labels)
}

fn bench_strategies(c: &mut Criterion) {
    let engine = QueryExpansion::builder().build().expect("engine");
    let mut group = c.benchmark_group("augment");

    for &count in &[10usize, 50, 200] {
        let documents = generate_documents(count);
        let feedback = feedback_for(count);
        group.throughput(Throughput::Elements(count as u64));

        for strategy in [Strategy::Rocchio, Strategy::LogOdds] {
            group.bench_with_input(
                BenchmarkId::new(strategy.as_str(), count),
                &documents,
                |b, documents| {
                    b.iter(|| {
                        let augmentation = engine
                            .augment_with(strategy, black_box("friends"), documents, &feedback)
                            .expect("augment");
                        black_box(augmentation)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let engine = QueryExpansion::builder().build().expect("engine");
    let documents = generate_documents(10);
    let feedback = feedback_for(10);

    c.bench_function("rank_log_odds_10", |b| {
        b.iter(|| {
            engine
                .rank(Strategy::LogOdds, black_box("friends"), &documents, &feedback)
                .expect("rank")
        })
    });

    c.bench_function("rank_rocchio_10", |b| {
        b.iter(|| {
            engine
                .rank(Strategy::Rocchio, black_box("friends"), &documents, &feedback)
                .expect("rank")
        })
    });
}

criterion_group!(benches, bench_strategies, bench_ranking);
criterion_main!(benches);
