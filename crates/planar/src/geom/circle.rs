//! Circles and circle-versus-segment/polygon predicates.

use super::coord::{dist, Coord};
use super::segment::Segment;
use super::util::{equal, greater_or_equal, smaller, smaller_or_equal, EPS};
use super::vector::Vector;

/// A circle on the grid with an integer radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Circle {
    pub center: Coord,
    pub radius: i64,
}

impl Circle {
    #[inline]
    pub fn new(center: Coord, radius: i64) -> Circle {
        Circle { center, radius }
    }

    /// Axis-aligned bounding box as `(min_x, min_z, max_x, max_z)`.
    #[inline]
    pub fn to_rect(&self) -> (i64, i64, i64, i64) {
        let x = self.center.x as i64;
        let z = self.center.z as i64;
        (
            x - self.radius,
            z - self.radius,
            x + self.radius,
            z + self.radius,
        )
    }

    /// Point on the circle in the direction of `coord`, rounded onto the
    /// grid. Returns the center itself when `coord` coincides with it.
    pub fn boundary_toward(&self, coord: Coord) -> Coord {
        let vec = Vector::between(self.center, coord);
        let dis = vec.length();
        if equal(dis, 0.0) {
            return self.center;
        }
        self.center + vec.scaled(self.radius as f64 / dis)
    }

    /// Whether the segment comes within `radius` of the center.
    ///
    /// Built on [`Segment::dist_to_coord`] and therefore inherits its
    /// one-sided projection guard.
    #[inline]
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        smaller_or_equal(seg.dist_to_coord(self.center), self.radius as f64)
    }

    /// First crossing of the segment with the circle boundary, walking from
    /// `seg.a` toward `seg.b`.
    ///
    /// Closest-approach parametrization: with `a` the projection of the
    /// center onto the direction and `disc = r² - |e|² + a²`, the candidate
    /// parameters are `a - √disc` then `a + √disc`; the first one inside
    /// `[-ε, |seg| + ε]` wins and is truncated onto the grid. A segment that
    /// lies entirely inside the circle crosses the boundary nowhere and
    /// reports `None`.
    pub fn segment_cross(&self, seg: &Segment) -> Option<Coord> {
        let fdis = dist(seg.a, seg.b);
        let dir = seg.to_vector();
        let dx = dir.x as f64 / fdis;
        let dz = dir.z as f64 / fdis;
        let e = Vector::between(seg.a, self.center);
        let a = e.x as f64 * dx + e.z as f64 * dz;
        let disc = (self.radius * self.radius) as f64 - e.length_squared() + a * a;
        if smaller(disc, 0.0) {
            return None;
        }
        let f = disc.sqrt();
        for t in [a - f, a + f] {
            if t > -EPS && t - fdis < EPS {
                return Some(Coord {
                    x: seg.a.x + (t * dx) as i32,
                    z: seg.a.z + (t * dz) as i32,
                });
            }
        }
        None
    }

    /// Whether the circle and a convex polygon overlap.
    ///
    /// `vectors` are the polygon's vertices as position vectors in
    /// counter-clockwise order (at least one). Single pass over the edges:
    /// a vertex within the radius or an edge projection within the radius is
    /// an immediate hit, a projection that falls outside its edge's inner
    /// half-plane is an immediate miss, and if neither resolves, the verdict
    /// comes from the tracked nearest vertex and whether either edge flanking
    /// it projected inside.
    pub fn overlaps_polygon(&self, vectors: &[Vector]) -> bool {
        let radius_squared = (self.radius * self.radius) as f64;
        let center = Vector::from_coord(self.center);
        let mut vertex = vectors[vectors.len() - 1];
        let mut nearest_distance = f64::MAX;
        let mut nearest_is_inside = false;
        let mut nearest_vertex = usize::MAX;
        let mut last_is_inside = false;
        for (i, &next_vertex) in vectors.iter().enumerate() {
            let axis = center - vertex;
            let distance = axis.length_squared() - radius_squared;
            if smaller_or_equal(distance, 0.0) {
                return true;
            }
            let mut is_inside = false;
            let edge = next_vertex - vertex;
            let edge_len2 = edge.length_squared();
            if !equal(edge_len2, 0.0) {
                let dot = edge.dot(axis);
                if greater_or_equal(dot, 0.0) && smaller_or_equal(dot, edge_len2) {
                    let projection = vertex + edge.scaled(dot / edge_len2);
                    let axis = projection - center;
                    if smaller_or_equal(axis.length_squared(), radius_squared) {
                        return true;
                    }
                    if !is_inside_edge(edge, axis) {
                        return false;
                    }
                    is_inside = true;
                }
            }
            if smaller(distance, nearest_distance) {
                nearest_distance = distance;
                nearest_is_inside = is_inside || last_is_inside;
                nearest_vertex = i;
            }
            vertex = next_vertex;
            last_is_inside = is_inside;
        }
        if nearest_vertex == 0 {
            return nearest_is_inside || last_is_inside;
        }
        nearest_is_inside
    }
}

/// Side test for the projection axis against a counter-clockwise edge.
///
/// `axis` points from the circle center to its projection on the edge's
/// carrying line. For a counter-clockwise polygon the interior is to the
/// left of `edge`; the sign table below says whether the center is on the
/// interior side.
fn is_inside_edge(edge: Vector, axis: Vector) -> bool {
    if edge.x > 0 && axis.z > 0 {
        return false;
    }
    if edge.x < 0 && axis.z < 0 {
        return false;
    }
    if edge.x == 0 && edge.z > 0 && axis.x < 0 {
        return false;
    }
    if edge.x == 0 && edge.z <= 0 && axis.x > 0 {
        return false;
    }
    true
}

/// First crossing of the segment `start → end` with the circle around
/// `center`.
#[inline]
pub fn line_cross_circle(start: Coord, end: Coord, center: Coord, radius: i64) -> Option<Coord> {
    Circle { center, radius }.segment_cross(&Segment::new(start, end))
}

/// Point on the circle of `radius` around `center` in the direction of
/// `end`.
#[inline]
pub fn circle_coord_toward(center: Coord, end: Coord, radius: i64) -> Coord {
    Circle { center, radius }.boundary_toward(end)
}
