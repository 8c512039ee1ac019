use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scc_dagsp::{analyze, AnalysisConfig, DatasetGenerator, DirectedGraph};

fn generated_graph(n: usize, density: f64) -> DirectedGraph<u64> {
    let dataset = DatasetGenerator::new(7)
        .generate(n, density, true)
        .expect("valid generator parameters");
    dataset.to_graph().expect("generated datasets are well formed")
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    for &n in &[50usize, 200, 800] {
        let graph = generated_graph(n, 4.0 / n as f64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| analyze(black_box(graph), &AnalysisConfig::default()).expect("analysis succeeds"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
