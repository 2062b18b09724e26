//! Benchmarks for pdfsift analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the analysis pipeline with synthetic
//! parsed-document data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfsift::{Analyzer, KeywordRanker, PageChar, ParsedDocument, PatternMiner, RawPage, SourceInfo};

/// Build a synthetic parsed document with the given number of pages.
fn create_test_document(page_count: usize) -> ParsedDocument {
    let pages = (0..page_count)
        .map(|i| {
            let text = format!(
                "Invoice {i} issued 03/15/2024 by Acme Corp for $1,{:03}.00. \
                 Payment due within thirty days. Reference: INV-{i:04}. \
                 Questions go to the billing department.",
                (i * 7) % 1000
            );
            let mut page = RawPage::with_text(612.0, 792.0, &text);
            page.chars = text
                .chars()
                .enumerate()
                .map(|(j, c)| PageChar::new(100.0 + (j / 80) as f32 * 14.0, c))
                .collect();
            page.tables = vec![vec![
                vec![Some("Item".to_string()), Some("Amount".to_string())],
                vec![Some(format!("Widget {i}")), None],
            ]];
            page
        })
        .collect();

    ParsedDocument::new(
        SourceInfo {
            filename: "bench.pdf".to_string(),
            file_size: 1 << 20,
            created: None,
            modified: None,
        },
        pages,
    )
}

/// Benchmark full-document analysis at various sizes.
fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for page_count in [1, 10, 50].iter() {
        let doc = create_test_document(*page_count);
        group.bench_function(format!("{}_pages", page_count), |b| {
            let analyzer = Analyzer::new();
            b.iter(|| analyzer.analyze(black_box(&doc)));
        });
    }

    group.finish();
}

/// Benchmark pattern mining over a single large page of text.
fn bench_pattern_mining(c: &mut Criterion) {
    let doc = create_test_document(1);
    let text = doc.pages[0].text.repeat(100);

    c.bench_function("mine_page", |b| {
        let miner = PatternMiner::new();
        b.iter(|| {
            let mut builder = pdfsift::model::MetadataBuilder::from_source(&doc.source, 1);
            miner.mine_page(black_box(&text), &mut builder);
        });
    });
}

/// Benchmark keyword ranking over accumulated text.
fn bench_keyword_ranking(c: &mut Criterion) {
    let doc = create_test_document(20);
    let record = Analyzer::new().analyze(&doc);

    c.bench_function("rank_keywords", |b| {
        let ranker = KeywordRanker::default();
        b.iter(|| ranker.rank(black_box(&record.full_text)));
    });
}

criterion_group!(benches, bench_analyze, bench_pattern_mining, bench_keyword_ranking);
criterion_main!(benches);
