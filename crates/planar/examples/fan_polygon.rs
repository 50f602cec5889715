//! Assemble a convex polygon from a random triangle fan and query it.
//!
//! Usage:
//!   cargo run -p planar --example fan_polygon -- [seed]
//!
//! Prints the merged vertex cycle, both centroid variants, and a containment
//! cross-check of the three algorithms over a probe grid.

use planar::geom::Coord;
use planar::poly::rand::{draw_triangle_fan, FanCfg, FanCount, ReplayToken};
use planar::poly::{Convex, Polygon};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2026u64);
    let cfg = FanCfg {
        triangles: FanCount::Uniform { min: 3, max: 8 },
        ..FanCfg::default()
    };
    let fan = draw_triangle_fan(cfg, ReplayToken { seed, index: 0 });
    let mut poly = Convex::from_triangle(fan[0].clone(), 1);
    for t in &fan[1..] {
        assert!(poly.merge_triangle(t), "fan triangle failed to merge");
    }
    poly.normalize_ccw();
    assert!(poly.validate());

    let cycle: Vec<i64> = poly.vertices().iter().map(|v| v.index).collect();
    println!(
        "seed {seed}: {} triangles merged, vertex cycle {cycle:?}",
        poly.merged().len()
    );
    println!(
        "center {:?}, weighted center {:?}",
        poly.center_coord(),
        poly.weighted_center_coord()
    );

    let mut inside = 0usize;
    let mut disagreements = 0usize;
    for x in (-6_000..=6_000).step_by(500) {
        for z in (-6_000..=6_000).step_by(500) {
            let coord = Coord::new(x, z);
            let scan = poly.contains(coord);
            let ray = poly.contains_raycast(coord);
            let bis = poly.contains_bisect(coord);
            inside += scan as usize;
            if scan != ray || scan != bis {
                disagreements += 1;
                println!("disagreement at {coord:?}: scan={scan} raycast={ray} bisect={bis}");
            }
        }
    }
    println!("probe grid: {inside} coords inside, {disagreements} disagreements");
}
