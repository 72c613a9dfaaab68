//! Benchmarks for topology reconstruction.

use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Point3;
use trellis::prelude::*;

/// Generate an n x n grid as a true triangle soup: every triangle carries
/// its own copies of the corner coordinates, so interior corners repeat up
/// to six times and the builder has real welding work to do.
fn grid_soup(n: usize) -> Vec<[Point3<f64>; 3]> {
    let at = |i: usize, j: usize| Point3::new(i as f64, j as f64, 0.0);

    let mut soup = Vec::with_capacity(n * n * 2);
    for j in 0..n {
        for i in 0..n {
            let (p00, p10) = (at(i, j), at(i + 1, j));
            let (p01, p11) = (at(i, j + 1), at(i + 1, j + 1));

            soup.push([p00, p10, p11]);
            soup.push([p00, p11, p01]);
        }
    }
    soup
}

fn bench_reconstruction(c: &mut Criterion) {
    let soup = grid_soup(10);
    c.bench_function("build_soup_grid_10x10", |b| {
        b.iter(|| build_from_soup(&soup));
    });

    let soup = grid_soup(50);
    c.bench_function("build_soup_grid_50x50", |b| {
        b.iter(|| build_from_soup(&soup));
    });
}

fn bench_traversal(c: &mut Criterion) {
    let mesh = build_from_soup(&grid_soup(50));

    c.bench_function("vertex_edge_adjacency_all", |b| {
        b.iter(|| {
            let mut count = 0;
            for v in mesh.vertex_ids() {
                count += mesh.vertex(v).edges.len();
            }
            count
        });
    });

    c.bench_function("manifold_edge_scan", |b| {
        b.iter(|| mesh.edge_ids().filter(|&e| mesh.is_manifold_edge(e)).count());
    });
}

criterion_group!(benches, bench_reconstruction, bench_traversal);
criterion_main!(benches);
