//! Criterion benchmarks for convex containment queries.
//! Focus sizes: fans of {2, 6, 12} triangles, 256 query coords per iteration.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::geom::Coord;
use planar::poly::rand::{draw_triangle_fan, FanCfg, FanCount, ReplayToken};
use planar::poly::Convex;
use planar::rect::Rectangle;
use rand::{rngs::StdRng, SeedableRng};

fn assemble_fan(n: usize, seed: u64) -> Convex {
    let cfg = FanCfg {
        triangles: FanCount::Fixed(n),
        ..FanCfg::default()
    };
    let fan = draw_triangle_fan(cfg, ReplayToken { seed, index: 0 });
    let mut poly = Convex::from_triangle(fan[0].clone(), 1);
    for t in &fan[1..] {
        assert!(poly.merge_triangle(t));
    }
    poly.normalize_ccw();
    poly
}

fn query_coords(count: usize, seed: u64) -> Vec<Coord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let field = Rectangle::new(-6_000, -6_000, 12_000, 12_000);
    (0..count).map(|_| field.rand_coord(&mut rng)).collect()
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    let coords = query_coords(256, 7);
    for &n in &[2usize, 6, 12] {
        let poly = assemble_fan(n, 42);
        group.bench_with_input(BenchmarkId::new("halfplane_scan", n), &poly, |b, poly| {
            b.iter(|| {
                let mut hits = 0usize;
                for &coord in &coords {
                    hits += poly.contains(coord) as usize;
                }
                hits
            })
        });
        group.bench_with_input(BenchmarkId::new("raycast", n), &poly, |b, poly| {
            b.iter(|| {
                let mut hits = 0usize;
                for &coord in &coords {
                    hits += poly.contains_raycast(coord) as usize;
                }
                hits
            })
        });
        group.bench_with_input(BenchmarkId::new("bisect", n), &poly, |b, poly| {
            b.iter(|| {
                let mut hits = 0usize;
                for &coord in &coords {
                    hits += poly.contains_bisect(coord) as usize;
                }
                hits
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_contains);
criterion_main!(benches);
