//! Shared polygon contract and the convexity vote.

use crate::geom::{Coord, Vector};

use super::vertex::Vertex;

/// Read-only view shared by every polygon shape in the mesh layer.
pub trait Polygon {
    /// Boundary-inclusive containment test.
    fn contains(&self, coord: Coord) -> bool;

    /// Vertices as position vectors in counter-clockwise order.
    fn vectors(&self) -> Vec<Vector>;

    /// Bounding rect as `(min_x, min_z, max_x, max_z)`.
    fn to_rect(&self) -> (i64, i64, i64, i64);

    /// Identity of the polygon within its mesh.
    fn index(&self) -> i64;

    /// Symmetric edge keys of the merged boundary.
    fn edge_ids(&self) -> &[i64];

    /// Midpoint of every consecutive vertex pair, wrapping around.
    fn edge_mid_coords(&self) -> Vec<Coord>;

    fn vertices(&self) -> &[Vertex];
}

/// Whether the vertex cycle is strictly convex.
///
/// Every vertex votes with the cross product of its two outgoing chords
/// `v[i] → v[i+1]` and `v[i] → v[i+2]`; the cycle passes when the votes are
/// unanimous. A zero cross (collinear triple) votes with the clockwise
/// bucket, so a counter-clockwise cycle with a straight vertex is rejected
/// while a clockwise one is accepted. Fewer than three vertices never pass.
pub fn is_convex(vertices: &[Vertex]) -> bool {
    let l = vertices.len();
    if l < 3 {
        return false;
    }
    let mut pos = 0;
    let mut neg = 0;
    for i in 0..l {
        let cur = Vector::between(vertices[i].coord, vertices[(i + 1) % l].coord);
        let next = Vector::between(vertices[i].coord, vertices[(i + 2) % l].coord);
        if cur.cross(next) > 0 {
            pos += 1;
        } else {
            neg += 1;
        }
    }
    pos == l || neg == l
}
