//! Mesh triangles.

use crate::geom::{mid_coord, Coord, Vector};

use super::shape::Polygon;
use super::vertex::Vertex;

/// A mesh triangle with identity-carrying vertices and precomputed edge keys.
///
/// The mesh builder hands triangles over wound clockwise; nothing here
/// depends on that except [`Polygon::vectors`], which reverses the order so
/// the export is counter-clockwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub index: i64,
    pub vertices: [Vertex; 3],
    pub edge_ids: [i64; 3],
    center: Coord,
}

impl Triangle {
    pub fn new(index: i64, vertices: [Vertex; 3], edge_ids: [i64; 3]) -> Triangle {
        Triangle {
            index,
            vertices,
            edge_ids,
            center: Coord::default(),
        }
    }

    /// Compute and cache the vertex-mean center.
    pub fn cache_center(&mut self) {
        let v = &self.vertices;
        self.center = Coord {
            x: ((v[0].coord.x as i64 + v[1].coord.x as i64 + v[2].coord.x as i64) / 3) as i32,
            z: ((v[0].coord.z as i64 + v[1].coord.z as i64 + v[2].coord.z as i64) / 3) as i32,
        };
    }

    /// Cached center. Stays at the origin until [`Triangle::cache_center`]
    /// has run.
    #[inline]
    pub fn center(&self) -> Coord {
        self.center
    }

    /// Boundary-inclusive containment via pairwise cross-product signs.
    ///
    /// With `pa`, `pb`, `pc` the vectors from `coord` to the vertices, the
    /// point is inside iff the three signs (zero counted as non-negative)
    /// agree. The zero bucket makes the boundary count as inside for
    /// counter-clockwise vertex order; for clockwise storage a boundary
    /// point sees one non-negative vote among negatives and lands outside.
    pub fn contains(&self, coord: Coord) -> bool {
        let pa = Vector::between(coord, self.vertices[0].coord);
        let pb = Vector::between(coord, self.vertices[1].coord);
        let pc = Vector::between(coord, self.vertices[2].coord);
        let t1 = pa.cross(pb) >= 0;
        let t2 = pb.cross(pc) >= 0;
        let t3 = pc.cross(pa) >= 0;
        t1 == t2 && t2 == t3
    }

    /// Number of vertex identities shared with `other` (0 to 3). Two shared
    /// identities mean a shared edge.
    pub fn neighbor_edge_count(&self, other: &Triangle) -> usize {
        self.vertices
            .iter()
            .filter(|v| other.vertices.iter().any(|u| u.index == v.index))
            .count()
    }
}

impl Polygon for Triangle {
    fn contains(&self, coord: Coord) -> bool {
        Triangle::contains(self, coord)
    }

    /// Position vectors in the order `v0, v2, v1`: clockwise storage comes
    /// out counter-clockwise.
    fn vectors(&self) -> Vec<Vector> {
        vec![
            Vector::from_coord(self.vertices[0].coord),
            Vector::from_coord(self.vertices[2].coord),
            Vector::from_coord(self.vertices[1].coord),
        ]
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
        let v = &self.vertices;
        vec![
            mid_coord(v[0].coord, v[1].coord),
            mid_coord(v[1].coord, v[2].coord),
            mid_coord(v[2].coord, v[0].coord),
        ]
    }

    fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::vertex::edge_key;

    fn tri(coords: [(i32, i32); 3]) -> Triangle {
        let vs = [
            Vertex::new(1, Coord::new(coords[0].0, coords[0].1)),
            Vertex::new(2, Coord::new(coords[1].0, coords[1].1)),
            Vertex::new(3, Coord::new(coords[2].0, coords[2].1)),
        ];
        Triangle::new(
            7,
            vs,
            [edge_key(1, 2), edge_key(2, 3), edge_key(3, 1)],
        )
    }

    #[test]
    fn contains_interior_and_exterior() {
        let t = tri([(0, 0), (100, 0), (50, 100)]);
        assert!(t.contains(Coord::new(50, 30)));
        assert!(!t.contains(Coord::new(50, -5)));
        assert!(!t.contains(Coord::new(-10, 0)));
        // Counter-clockwise storage includes the boundary.
        assert!(t.contains(Coord::new(50, 0)));
        assert!(t.contains(Coord::new(0, 0)));
    }

    #[test]
    fn center_is_cached_lazily() {
        let mut t = tri([(0, 0), (100, 0), (50, 100)]);
        assert_eq!(t.center(), Coord::new(0, 0));
        t.cache_center();
        assert_eq!(t.center(), Coord::new(50, 33));
    }

    #[test]
    fn neighbor_edge_count_counts_shared_identities() {
        let a = tri([(0, 0), (100, 0), (50, 100)]);
        let mut b = a.clone();
        b.vertices[2] = Vertex::new(9, Coord::new(50, -100));
        assert_eq!(a.neighbor_edge_count(&a), 3);
        assert_eq!(a.neighbor_edge_count(&b), 2);
        b.vertices[0] = Vertex::new(8, Coord::new(-10, -10));
        assert_eq!(a.neighbor_edge_count(&b), 1);
    }

    #[test]
    fn vectors_reverse_the_winding() {
        let t = tri([(0, 0), (0, 100), (100, 0)]); // clockwise
        let vs = t.vectors();
        assert_eq!(vs[0], Vector::new(0, 0));
        assert_eq!(vs[1], Vector::new(100, 0));
        assert_eq!(vs[2], Vector::new(0, 100));
    }

    #[test]
    fn to_rect_handles_negative_coords() {
        let t = tri([(-50, -20), (30, -80), (10, 40)]);
        assert_eq!(Polygon::to_rect(&t), (-50, -80, 30, 40));
    }

    #[test]
    fn edge_mid_coords_follow_the_cycle() {
        let t = tri([(0, 0), (100, 0), (50, 100)]);
        assert_eq!(
            t.edge_mid_coords(),
            vec![Coord::new(50, 0), Coord::new(75, 50), Coord::new(25, 50)]
        );
    }
}
