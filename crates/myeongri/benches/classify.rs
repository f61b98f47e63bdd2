//! Benchmarks for ten-god lookup and pattern classification.
//!
//! Measures the O(1) table lookup against the formula it is built from, and
//! the full classification pipeline over every month branch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use myeongri::chart::{BirthContext, Chart};
use myeongri::config::{AnalysisConfig, AuthorityBasis};
use myeongri::direction::Sex;
use myeongri::pattern::classify;
use myeongri::relation::ten_god::{ten_god, TenGod};
use myeongri::{Branch, Pillar, Stem};

// ============================================================================
// Fixtures
// ============================================================================

fn charts() -> Vec<Chart> {
    // One chart per month branch, day master fixed at 甲子.
    Branch::ALL
        .iter()
        .map(|&b| {
            let month = Pillar::new(Stem::wrap(b.index() as i64), b);
            Chart::new(Pillar::GAPJA, month, Pillar::GAPJA, Pillar::from_sexagenary(2))
        })
        .collect()
}

// ============================================================================
// Benchmark: ten gods
// ============================================================================

fn bench_ten_god(c: &mut Criterion) {
    let mut group = c.benchmark_group("ten_god");
    group.throughput(Throughput::Elements(100));

    group.bench_function("lut", |b| {
        b.iter(|| {
            for r in Stem::ALL {
                for t in Stem::ALL {
                    black_box(ten_god(black_box(r), black_box(t)));
                }
            }
        });
    });

    group.bench_function("formula", |b| {
        b.iter(|| {
            for r in Stem::ALL {
                for t in Stem::ALL {
                    black_box(TenGod::derive(black_box(r), black_box(t)));
                }
            }
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark: classification
// ============================================================================

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let charts = charts();
    group.throughput(Throughput::Elements(charts.len() as u64));

    for basis in [AuthorityBasis::MainQi, AuthorityBasis::Governing] {
        let config = AnalysisConfig {
            authority_basis: basis,
            ..AnalysisConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new("pipeline", format!("{basis:?}")),
            &config,
            |b, config| {
                b.iter(|| {
                    for chart in &charts {
                        black_box(chart.classify(config, Some(12)));
                    }
                });
            },
        );
    }

    group.bench_function("main_qi_context", |b| {
        b.iter(|| {
            for chart in &charts {
                let ctx = chart.pattern_context(&AnalysisConfig::default(), None);
                black_box(classify(&ctx));
            }
        });
    });

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let chart: Chart = "庚午 乙酉 甲子 丙寅".parse().unwrap();
    let birth = BirthContext::new(Sex::Female, 20, 8);
    let config = AnalysisConfig::default();

    c.bench_function("analyze", |b| {
        b.iter(|| black_box(chart.analyze(black_box(&birth), &config)));
    });
}

criterion_group!(benches, bench_ten_god, bench_classify, bench_analyze);
criterion_main!(benches);
