//! Random triangle fans for polygon assembly (seeded, replayable).
//!
//! Purpose
//! - Provide a deterministic source of convex-mergeable triangles for
//!   property tests, benches, and the command-line demos. Every triangle
//!   shares the fan's hub, so merging them in emission order into a polygon
//!   seeded from the first one succeeds for every draw.
//!
//! Model
//! - `n + 1` rim points on a circle around the hub, at increasing angles
//!   inside a span below pi, with bounded angular jitter. Triangle `k`
//!   connects the hub to rim points `k+1` and `k`, clockwise. Vertex indices
//!   and edge keys are unique within one draw.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Coord;

use super::triangle::Triangle;
use super::vertex::{edge_key, Vertex};

/// Fan size distribution.
#[derive(Clone, Copy, Debug)]
pub enum FanCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl FanCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            FanCount::Fixed(n) => n.max(1),
            FanCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Fan sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct FanCfg {
    pub triangles: FanCount,
    /// Rim radius in integer units. Below 1000 the rounded rim points lose
    /// too much angular resolution; clamped up.
    pub radius: i64,
    /// Angular span of the whole fan, radians. Clamped to (0, pi).
    pub span: f64,
    /// Angular jitter as a fraction of the base spacing. Clamped to [0, 0.49]
    /// so jitter can never reorder the rim.
    pub angle_jitter_frac: f64,
    /// Hub coordinate shared by every triangle.
    pub hub: Coord,
}

impl Default for FanCfg {
    fn default() -> Self {
        Self {
            triangles: FanCount::Fixed(6),
            radius: 5_000,
            span: 0.9 * std::f64::consts::PI,
            angle_jitter_frac: 0.3,
            hub: Coord::new(0, 0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a clockwise triangle fan.
///
/// The hub takes vertex index 1 and rim point `k` takes `k + 2`, keeping
/// indices well under the edge-key collision bound. Rim points sit exactly
/// on the circle; jitter moves angles, never radii, so convexity of the
/// merged fan survives integer rounding.
pub fn draw_triangle_fan(cfg: FanCfg, tok: ReplayToken) -> Vec<Triangle> {
    let mut rng = tok.to_std_rng();
    let n = cfg.triangles.sample(&mut rng);
    let radius = cfg.radius.max(1_000) as f64;
    let span = cfg.span.clamp(0.05, std::f64::consts::PI - 0.05);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = span / (n as f64);
    let rim: Vec<Vertex> = (0..=n)
        .map(|k| {
            let jitter = if k == 0 || k == n {
                0.0
            } else {
                (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta
            };
            let th = (k as f64) * delta + jitter;
            let coord = Coord::new(
                cfg.hub.x + (th.cos() * radius).round() as i32,
                cfg.hub.z + (th.sin() * radius).round() as i32,
            );
            Vertex::new(k as i64 + 2, coord)
        })
        .collect();
    let hub = Vertex::new(1, cfg.hub);
    (0..n)
        .map(|k| {
            let far = rim[k + 1];
            let near = rim[k];
            Triangle::new(
                k as i64,
                [hub, far, near],
                [
                    edge_key(hub.index, far.index),
                    edge_key(far.index, near.index),
                    edge_key(near.index, hub.index),
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{dist, turn_sign};

    #[test]
    fn reproducible_draw() {
        let cfg = FanCfg {
            triangles: FanCount::Uniform { min: 3, max: 9 },
            ..FanCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let f1 = draw_triangle_fan(cfg, tok);
        let f2 = draw_triangle_fan(cfg, tok);
        assert_eq!(f1.len(), f2.len());
        for (a, b) in f1.iter().zip(f2.iter()) {
            assert_eq!(a.vertices.map(|v| v.coord), b.vertices.map(|v| v.coord));
            assert_eq!(a.edge_ids, b.edge_ids);
        }
    }

    #[test]
    fn consecutive_triangles_share_two_identities() {
        let fan = draw_triangle_fan(FanCfg::default(), ReplayToken { seed: 3, index: 0 });
        assert_eq!(fan.len(), 6);
        for pair in fan.windows(2) {
            assert_eq!(pair[0].neighbor_edge_count(&pair[1]), 2);
        }
    }

    #[test]
    fn rim_sits_on_the_circle() {
        let cfg = FanCfg {
            radius: 4_000,
            hub: Coord::new(-300, 800),
            ..FanCfg::default()
        };
        let fan = draw_triangle_fan(cfg, ReplayToken { seed: 9, index: 4 });
        for t in &fan {
            for v in &t.vertices[1..] {
                let d = dist(cfg.hub, v.coord);
                assert!((d - 4_000.0).abs() < 1.0, "rim point off circle: {d}");
            }
        }
    }

    #[test]
    fn triangles_wind_clockwise() {
        let fan = draw_triangle_fan(FanCfg::default(), ReplayToken { seed: 11, index: 2 });
        for t in &fan {
            let [a, b, c] = t.vertices;
            assert!(turn_sign(a.coord, b.coord, c.coord) < 0);
        }
    }
}
