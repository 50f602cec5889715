//! Line segments and segment-to-segment predicates.
//!
//! Intersection detection is pure integer arithmetic (bounding boxes plus
//! straddle orientation tests). Only the final intersection point leaves the
//! integers, through one floating division whose result is truncated back
//! onto the grid.

use super::circle::Circle;
use super::coord::{dist, Coord};
use super::util::greater;
use super::vector::{orient, Vector};

/// A directed segment from `a` to `b`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: Coord,
    pub b: Coord,
}

impl Segment {
    #[inline]
    pub fn new(a: Coord, b: Coord) -> Segment {
        Segment { a, b }
    }

    /// Displacement from `a` to `b`.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::between(self.a, self.b)
    }

    /// Distance from `coord` to the segment.
    ///
    /// Starts from the nearer endpoint distance, then takes the perpendicular
    /// line distance unless the projection of `coord` runs past `b`. The
    /// projection guard watches only the far end: behind `a` the line
    /// distance still wins the minimum, so points beyond `a` but close to the
    /// carrying line report the line distance rather than the true segment
    /// distance. See the regression test before changing this.
    pub fn dist_to_coord(&self, coord: Coord) -> f64 {
        let a = dist(coord, self.a);
        let b = dist(coord, self.b);
        let dst = a.min(b);
        let ab = Vector::between(self.a, self.b);
        let ap = Vector::between(self.a, coord);
        let lab = ab.length();
        if greater(ap.dot(ab) / lab, lab) {
            return dst;
        }
        let c = ab.perp_dist(self.a, coord);
        dst.min(c)
    }

    /// Point on the segment nearest to `coord`.
    ///
    /// Clamped projection: the parameter `t = (AP · AB) / |AB|²` picks `a`
    /// below 0, `b` above 1, and the rounded interpolated point in between.
    /// A zero-length segment yields `a`.
    pub fn closest_point(&self, coord: Coord) -> Coord {
        let ab = Vector::between(self.a, self.b);
        let len2 = ab.length_squared();
        if len2 == 0.0 {
            return self.a;
        }
        let t = Vector::between(self.a, coord).dot(ab) / len2;
        if t < 0.0 {
            self.a
        } else if t > 1.0 {
            self.b
        } else {
            self.a + ab.scaled(t)
        }
    }

    /// First crossing with the circle boundary, walking from `a` toward `b`.
    /// Delegates to [`Circle::segment_cross`].
    #[inline]
    pub fn cross_circle(&self, circle: &Circle) -> Option<Coord> {
        circle.segment_cross(self)
    }

    /// Segment translated `dst` units along its normal.
    ///
    /// `positive` picks the left normal `(-z, x)` of the direction `a → b`,
    /// otherwise the right normal `(z, -x)`. Undefined for zero-length
    /// segments (the ratio divides by zero).
    pub fn pan(&self, dst: i64, positive: bool) -> Segment {
        let vec = self.to_vector();
        let n = if positive {
            Vector::new(-vec.z, vec.x)
        } else {
            Vector::new(vec.z, -vec.x)
        };
        let n = n.scaled(dst as f64 / n.length());
        Segment {
            a: self.a + n,
            b: self.b + n,
        }
    }
}

/// An infinite line `a·x + b·z + c == 0` through two coords.
///
/// Coefficients are widened to `i64` so the constant term cannot overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Line {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Line {
    /// Line through `p` and `q`.
    #[inline]
    pub fn through(p: Coord, q: Coord) -> Line {
        Line {
            a: q.z as i64 - p.z as i64,
            b: p.x as i64 - q.x as i64,
            c: q.x as i64 * p.z as i64 - p.x as i64 * q.z as i64,
        }
    }

    /// Exact membership test.
    #[inline]
    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.a * coord.x as i64 + self.b * coord.z as i64 + self.c == 0
    }

    /// A valid line has a nonzero direction and a zero constant term, i.e.
    /// it passes through the origin.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.a == 0 && self.b == 0) && self.c == 0
    }
}

/// Whether the bounding boxes of segments `p0p1` and `q0q1` overlap.
#[inline]
pub fn rects_overlap(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> bool {
    p0.x.min(p1.x) <= q0.x.max(q1.x)
        && q0.x.min(q1.x) <= p0.x.max(p1.x)
        && p0.z.min(p1.z) <= q0.z.max(q1.z)
        && q0.z.min(q1.z) <= p0.z.max(p1.z)
}

/// Straddle test for segments `p0p1` and `q0q1`.
///
/// Any orientation value of exactly zero (an endpoint on the other carrying
/// line) counts as straddling immediately, before the opposite pair is even
/// computed. Otherwise both segments must have their endpoints on opposite
/// sides of each other.
pub fn segments_straddle(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> bool {
    let b1 = orient(q1, p0, q0);
    let b2 = orient(q1, p1, q0);
    if b1 == 0 || b2 == 0 {
        return true;
    }
    let a1 = orient(p1, q0, p0);
    let a2 = orient(p1, q1, p0);
    if a1 == 0 || a2 == 0 {
        return true;
    }
    ((a1 < 0) != (a2 < 0)) && ((b1 < 0) != (b2 < 0))
}

/// Intersection point of segments `p0p1` and `q0q1`.
///
/// Rejection order: exactly parallel directions first (collinear overlaps
/// report no intersection), then disjoint bounding boxes, then the straddle
/// test. The surviving pair intersects in exactly one point, computed from
/// the line parameter `t` and truncated toward zero onto the grid.
pub fn cross_coord(p0: Coord, p1: Coord, q0: Coord, q1: Coord) -> Option<Coord> {
    let v1 = Vector::between(p0, p1);
    let v2 = Vector::between(q0, q1);
    if v1.cross(v2) == 0 {
        return None;
    }
    if !rects_overlap(p0, p1, q0, q1) {
        return None;
    }
    if !segments_straddle(p0, p1, q0, q1) {
        return None;
    }
    let s1x = v1.x as f64;
    let s1z = v1.z as f64;
    let s2x = v2.x as f64;
    let s2z = v2.z as f64;
    let t = (s2x * (p0.z as i64 - q0.z as i64) as f64 - s2z * (p0.x as i64 - q0.x as i64) as f64)
        / (-s2x * s1z + s1x * s2z);
    Some(Coord {
        x: p0.x + (t * s1x) as i32,
        z: p0.z + (t * s1z) as i32,
    })
}
