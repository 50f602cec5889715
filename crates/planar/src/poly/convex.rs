//! Convex polygons assembled by merging mesh triangles.
//!
//! Purpose
//! - Grow convex polygons out of triangles that share an edge, keeping the
//!   vertex cycle, the merged-triangle set, and the edge keys in step with
//!   each other. All mutation funnels through the merge operations, so a
//!   `Convex` that exists is coherent.
//! - Answer containment three ways (half-plane scan, parity ray cast,
//!   angular bisection). The three agree, boundary included; tests pin that.
//!
//! Winding
//! - Merging is winding-agnostic. [`Convex::normalize_ccw`] flips the stored
//!   cycle to counter-clockwise; exports through [`Polygon::vectors`] are
//!   counter-clockwise regardless of the stored order.

use std::collections::HashMap;

use crate::geom::{mid_coord, orient, turn_sign, Coord, Vector};

use super::shape::{is_convex, Polygon};
use super::triangle::Triangle;
use super::vertex::Vertex;

/// A convex polygon, its vertex cycle, and the triangles it absorbed.
#[derive(Clone, Debug)]
pub struct Convex {
    index: i64,
    vertices: Vec<Vertex>,
    merged: Vec<Triangle>,
    edge_ids: Vec<i64>,
}

impl Convex {
    /// Seed a polygon from a single triangle.
    pub fn from_triangle(triangle: Triangle, index: i64) -> Convex {
        Convex {
            index,
            vertices: triangle.vertices.to_vec(),
            edge_ids: triangle.edge_ids.to_vec(),
            merged: vec![triangle],
        }
    }

    /// Assemble a polygon from prebuilt parts, for callers reloading mesh
    /// data that was merged elsewhere. Edge keys are collected from the
    /// triangles. Nothing is checked here; pair with [`Convex::validate`].
    pub fn from_parts(index: i64, vertices: Vec<Vertex>, merged: Vec<Triangle>) -> Convex {
        let mut edge_ids = Vec::new();
        for t in &merged {
            for &id in &t.edge_ids {
                if !edge_ids.contains(&id) {
                    edge_ids.push(id);
                }
            }
        }
        Convex {
            index,
            vertices,
            merged,
            edge_ids,
        }
    }

    pub fn merged(&self) -> &[Triangle] {
        &self.merged
    }

    /// Absorb a triangle that shares an edge with the polygon.
    ///
    /// The shared vertices are derived by index identity; exactly two must
    /// match. On success the vertex cycle, the merged set, and the edge keys
    /// are updated together; on failure the polygon is untouched.
    pub fn merge_triangle(&mut self, triangle: &Triangle) -> bool {
        let mut shared = Vec::new();
        let mut incoming = Vec::new();
        for v in &triangle.vertices {
            if self.vertices.iter().any(|u| u.index == v.index) {
                shared.push(*v);
            } else {
                incoming.push(*v);
            }
        }
        if shared.len() != 2 {
            return false;
        }
        if !self.splice_vertices(shared[0], shared[1], &incoming) {
            return false;
        }
        for &id in &triangle.edge_ids {
            if !self.edge_ids.contains(&id) {
                self.edge_ids.push(id);
            }
        }
        self.merged.push(triangle.clone());
        true
    }

    /// Splice `incoming` vertices into the cycle next to the shared pair.
    ///
    /// Candidate generation, not geometry: the insertion point is right
    /// after the first cycle vertex matching either shared identity, except
    /// that a match at position 0 whose successor is not the other shared
    /// vertex appends to the end instead. Each position is tried with
    /// `incoming` in the given and the reversed order, and the first
    /// candidate passing the convexity vote is committed. Returns false,
    /// leaving the cycle unchanged, when no candidate is convex or the
    /// shared vertices are absent.
    pub fn splice_vertices(&mut self, shared1: Vertex, shared2: Vertex, incoming: &[Vertex]) -> bool {
        let Some(at) = self
            .vertices
            .iter()
            .position(|v| v.index == shared1.index || v.index == shared2.index)
        else {
            return false;
        };
        let insert_between = at != 0 || {
            let successor = self.vertices[1].index;
            successor == shared2.index || successor == shared1.index
        };
        let mut order = incoming.to_vec();
        for _ in 0..2 {
            let mut candidate = Vec::with_capacity(self.vertices.len() + order.len());
            if insert_between {
                candidate.extend_from_slice(&self.vertices[..=at]);
                candidate.extend_from_slice(&order);
                candidate.extend_from_slice(&self.vertices[at + 1..]);
            } else {
                candidate.extend_from_slice(&self.vertices);
                candidate.extend_from_slice(&order);
            }
            if is_convex(&candidate) {
                self.vertices = candidate;
                return true;
            }
            order.reverse();
        }
        false
    }

    /// Flip the stored cycle to counter-clockwise if its first corner turns
    /// clockwise. A collinear first corner is left alone.
    pub fn normalize_ccw(&mut self) {
        let v = &self.vertices;
        if turn_sign(v[0].coord, v[1].coord, v[2].coord) < 0 {
            self.vertices.reverse();
        }
    }

    /// Half-plane scan containment, boundary inclusive.
    ///
    /// The first edge with a nonzero orientation against `coord` sets the
    /// expected sign; the point is inside iff no later edge contradicts it.
    /// Zero orientations (point on an edge's carrying line) always match.
    pub fn contains(&self, coord: Coord) -> bool {
        let n = self.vertices.len();
        let mut want = 0;
        for i in 0..n {
            let a = self.vertices[i].coord;
            let b = self.vertices[(i + 1) % n].coord;
            let sign = turn_sign(a, b, coord);
            if sign == 0 {
                continue;
            }
            if want == 0 {
                want = sign;
            } else if sign != want {
                return false;
            }
        }
        true
    }

    /// Parity ray-cast containment, boundary inclusive.
    ///
    /// A single merged triangle delegates to the triangle test. Otherwise a
    /// ray toward increasing X counts edge crossings in exact integer
    /// arithmetic: an edge toggles the parity when the query's X sits left
    /// of the edge's X-intercept within the edge's half-open Z-span, and a
    /// zero cross product inside the closed span is an immediate on-edge
    /// hit. Horizontal edges only ever produce on-edge hits.
    pub fn contains_raycast(&self, coord: Coord) -> bool {
        if self.merged.len() == 1 {
            return self.merged[0].contains(coord);
        }
        let n = self.vertices.len();
        let mut inside = false;
        for i in 0..n {
            let j = if i == 0 { n - 1 } else { i - 1 };
            let vi = self.vertices[i].coord;
            let vj = self.vertices[j].coord;
            if vi.z == vj.z {
                if coord.z == vi.z
                    && vi.x.min(vj.x) <= coord.x
                    && coord.x <= vi.x.max(vj.x)
                {
                    return true;
                }
                continue;
            }
            let (zmin, zmax) = if vi.z < vj.z { (vi.z, vj.z) } else { (vj.z, vi.z) };
            // (vj - vi) × (coord - vi): zero exactly on the carrying line,
            // and matching the sign of the Z-step exactly when the query is
            // left of the X-intercept.
            let cr = orient(vj, coord, vi);
            if cr == 0 && zmin <= coord.z && coord.z <= zmax {
                return true;
            }
            if (cr > 0) == (vj.z > vi.z) && cr != 0 && zmin <= coord.z && coord.z < zmax {
                inside = !inside;
            }
        }
        inside
    }

    /// Bisection containment, boundary inclusive. O(log n).
    ///
    /// Reads the winding off the first fan edge, handles queries collinear
    /// with either edge incident to `v0` directly (on the edge means
    /// inside), rejects queries outside the angular span of the fan, then
    /// bisects the fan around `v0` and tests the query against the one hull
    /// edge it can face. Zero on that edge counts as inside.
    pub fn contains_bisect(&self, coord: Coord) -> bool {
        let n = self.vertices.len();
        let v0 = self.vertices[0].coord;
        let vec1 = Vector::between(v0, self.vertices[1].coord);
        let vec2 = Vector::between(v0, self.vertices[n - 1].coord);
        let vec_p = Vector::between(v0, coord);
        let len_p = vec_p.length();
        let cp1 = vec1.cross(vec_p);
        let cp2 = vec2.cross(vec_p);
        if cp1 == 0 {
            return vec1.dot(vec_p) >= 0.0 && len_p <= vec1.length();
        }
        if cp2 == 0 {
            return vec2.dot(vec_p) >= 0.0 && len_p <= vec2.length();
        }
        // Strictly between the two boundary directions means inside the cone
        // spanned by them. Comparing cp1 against cp2 alone would also admit
        // the mirrored cone behind v0 and flip the winding read.
        let span = vec1.cross(vec2);
        if (cp1 > 0) != (span > 0) || (cp2 > 0) == (span > 0) {
            return false;
        }
        let ccw = cp1 > 0;
        let mut s = 1;
        let mut e = n - 1;
        while e != s + 1 {
            let m = (s + e) / 2;
            if (turn_sign(coord, self.vertices[m].coord, v0) > 0) == ccw {
                e = m;
            } else {
                s = m;
            }
        }
        let edge = Vector::between(self.vertices[s].coord, self.vertices[e].coord);
        let toward = Vector::between(self.vertices[s].coord, coord);
        let side = edge.cross(toward);
        side == 0 || (side > 0) == ccw
    }

    /// The other polygon's vertices rotated so the shared edge comes first.
    ///
    /// Walks this polygon's cycle collecting positions of shared identities
    /// in `other`; exactly two must match or the result is `None`. The
    /// rotation starts at whichever shared position is directly followed by
    /// the other one.
    pub fn neighbor_points(&self, other: &impl Polygon) -> Option<Vec<Vertex>> {
        let vertices = other.vertices();
        let mut positions = Vec::new();
        for v in &self.vertices {
            for (j, u) in vertices.iter().enumerate() {
                if v.index == u.index {
                    positions.push(j);
                }
            }
        }
        if positions.len() != 2 {
            return None;
        }
        let (mut first, second) = (positions[0], positions[1]);
        if (first + 1) % vertices.len() != second {
            first = second;
        }
        Some(
            (0..vertices.len())
                .map(|i| vertices[(first + i) % vertices.len()])
                .collect(),
        )
    }

    /// Vertex-mean center, components truncated toward zero.
    pub fn center_coord(&self) -> Coord {
        let mut x = 0i64;
        let mut z = 0i64;
        for v in &self.vertices {
            x += v.coord.x as i64;
            z += v.coord.z as i64;
        }
        let n = self.vertices.len() as i64;
        Coord {
            x: (x / n) as i32,
            z: (z / n) as i32,
        }
    }

    /// Area-weighted barycenter via the shoelace formula, dividing by six
    /// times the signed area. Panics (division by zero) for a degenerate
    /// zero-area cycle.
    pub fn weighted_center_coord(&self) -> Coord {
        let n = self.vertices.len();
        let mut s = 0i64;
        let mut cx = 0i64;
        let mut cz = 0i64;
        for i in 0..n {
            let a = self.vertices[i].coord;
            let b = self.vertices[(i + 1) % n].coord;
            let cross = a.x as i64 * b.z as i64 - b.x as i64 * a.z as i64;
            s += cross;
            cx += (a.x as i64 + b.x as i64) * cross;
            cz += (a.z as i64 + b.z as i64) * cross;
        }
        // 6 * area == 3 * s.
        Coord {
            x: (cx / (3 * s)) as i32,
            z: (cz / (3 * s)) as i32,
        }
    }

    /// Index of the first merged triangle containing `coord`.
    pub fn triangle_with_coord(&self, coord: Coord) -> Option<i64> {
        self.merged
            .iter()
            .find(|t| t.contains(coord))
            .map(|t| t.index)
    }

    /// Check the polygon against its own bookkeeping: the cycle must pass
    /// the convexity vote, every merged triangle may only reference cycle
    /// vertices, and every cycle vertex must be covered by some triangle.
    /// Violations are logged with the polygon index.
    pub fn validate(&self) -> bool {
        if !is_convex(&self.vertices) {
            tracing::error!(index = self.index, "vertex cycle failed the convexity vote");
            return false;
        }
        let mut covered: HashMap<i64, bool> =
            self.vertices.iter().map(|v| (v.index, false)).collect();
        let listed = covered.len();
        for t in &self.merged {
            for v in &t.vertices {
                covered.insert(v.index, true);
            }
        }
        if covered.len() != listed {
            tracing::error!(
                index = self.index,
                "merged triangles reference vertices outside the cycle"
            );
            return false;
        }
        if covered.values().any(|&seen| !seen) {
            tracing::error!(index = self.index, "cycle vertices not covered by any triangle");
            return false;
        }
        true
    }
}

impl Polygon for Convex {
    fn contains(&self, coord: Coord) -> bool {
        Convex::contains(self, coord)
    }

    /// Position vectors in counter-clockwise order, flipping a clockwise
    /// stored cycle on the fly.
    fn vectors(&self) -> Vec<Vector> {
        let v = &self.vertices;
        let flip = turn_sign(v[0].coord, v[1].coord, v[2].coord) < 0;
        if flip {
            v.iter().rev().map(|u| Vector::from_coord(u.coord)).collect()
        } else {
            v.iter().map(|u| Vector::from_coord(u.coord)).collect()
        }
    }

    fn to_rect(&self) -> (i64, i64, i64, i64) {
        let mut min_x = i64::MAX;
        let mut min_z = i64::MAX;
        let mut max_x = i64::MIN;
        let mut max_z = i64::MIN;
        for v in &self.vertices {
            min_x = min_x.min(v.coord.x as i64);
            min_z = min_z.min(v.coord.z as i64);
            max_x = max_x.max(v.coord.x as i64);
            max_z = max_z.max(v.coord.z as i64);
        }
        (min_x, min_z, max_x, max_z)
    }

    fn index(&self) -> i64 {
        self.index
    }

    fn edge_ids(&self) -> &[i64] {
        &self.edge_ids
    }

    fn edge_mid_coords(&self) -> Vec<Coord> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| mid_coord(self.vertices[i].coord, self.vertices[(i + 1) % n].coord))
            .collect()
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}
