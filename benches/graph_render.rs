//! Benchmarks for parsing, filtering and exporting large module graphs
//!
//! Inputs mimic `go mod graph` output for projects with hundreds to
//! thousands of modules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modv::export::export_to_string;
use modv::parser::parse_str;

/// Build an edge list where every module depends on the next `fan_out`
/// modules, wrapping around so the graph contains cycles.
fn synthetic_edge_list(modules: usize, fan_out: usize) -> String {
    let mut input = String::new();
    for i in 0..modules {
        for step in 1..=fan_out {
            let dep = (i + step) % modules;
            input.push_str(&format!(
                "example.com/mod{}@v1.{}.0 example.com/mod{}@v1.{}.0\n",
                i, i, dep, dep
            ));
        }
    }
    input
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 500, 1000, 5000].iter() {
        let input = synthetic_edge_list(*size, 4);

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(parse_str(&input).unwrap()));
        });
    }

    group.finish();
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachable_from");

    for size in [100, 500, 1000, 5000].iter() {
        let graph = parse_str(&synthetic_edge_list(*size, 4)).unwrap();

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(graph.reachable_from("example.com/mod0@v1.0.0").unwrap()));
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_dot");

    for size in [100, 500, 1000, 5000].iter() {
        let graph = parse_str(&synthetic_edge_list(*size, 4)).unwrap();

        group.bench_with_input(BenchmarkId::new("modules", size), size, |b, _| {
            b.iter(|| black_box(export_to_string(&graph).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_filter, bench_export);
criterion_main!(benches);
