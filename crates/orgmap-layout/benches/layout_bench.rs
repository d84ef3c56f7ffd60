//! Benchmarks for the chart layout engine.
//!
//! Run with: cargo bench -p orgmap-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use orgmap_core::diag::NullSink;
use orgmap_core::employee::Employee;
use orgmap_core::hierarchy::{OrgTree, build_hierarchy};
use orgmap_layout::{LayoutConfig, layout_chart_with_config};
use std::hint::black_box;

/// Balanced tree: every manager has `fanout` reports down to `depth` levels.
fn balanced_company(depth: u32, fanout: u64) -> Vec<Employee> {
    let mut employees = vec![Employee::new(1, "Root")];
    let mut level: Vec<u64> = vec![1];
    let mut next_raw = 2u64;
    for _ in 1..depth {
        let mut next_level = Vec::new();
        for &manager in &level {
            for _ in 0..fanout {
                employees.push(Employee::new(next_raw, format!("E{next_raw}")).with_manager(manager));
                next_level.push(next_raw);
                next_raw += 1;
            }
        }
        level = next_level;
    }
    employees
}

/// One root with `width` direct reports.
fn flat_company(width: u64) -> Vec<Employee> {
    let mut employees = vec![Employee::new(1, "Root")];
    for raw in 2..=width + 1 {
        employees.push(Employee::new(raw, format!("E{raw}")).with_manager(1));
    }
    employees
}

/// Single reporting chain of the given length.
fn chain_company(length: u64) -> Vec<Employee> {
    let mut employees = vec![Employee::new(1, "Root")];
    for raw in 2..=length {
        employees.push(Employee::new(raw, format!("E{raw}")).with_manager(raw - 1));
    }
    employees
}

fn build(employees: &[Employee]) -> OrgTree {
    build_hierarchy(employees, &NullSink).expect("bench hierarchy is valid")
}

fn bench_balanced(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/balanced");
    for (depth, fanout) in [(4u32, 3u64), (5, 3), (4, 6)] {
        let tree = build(&balanced_company(depth, fanout));
        let nodes = tree.node_count() as u64;
        group.throughput(Throughput::Elements(nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{depth}x{fanout}")),
            &tree,
            |b, tree| {
                let config = LayoutConfig::default();
                b.iter(|| layout_chart_with_config(black_box(&tree.root), &config));
            },
        );
    }
    group.finish();
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/flat");
    for width in [50u64, 500, 2000] {
        let tree = build(&flat_company(width));
        group.throughput(Throughput::Elements(width + 1));
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            let config = LayoutConfig::default();
            b.iter(|| layout_chart_with_config(black_box(&tree.root), &config));
        });
    }
    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/chain");
    for length in [50u64, 200] {
        let tree = build(&chain_company(length));
        group.throughput(Throughput::Elements(length));
        group.bench_with_input(BenchmarkId::from_parameter(length), &tree, |b, tree| {
            let config = LayoutConfig::default();
            b.iter(|| layout_chart_with_config(black_box(&tree.root), &config));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_balanced, bench_flat, bench_chain);
criterion_main!(benches);
