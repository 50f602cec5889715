//! Identity-carrying vertices and mesh edges.
//!
//! Merging and adjacency operate on vertex *identities*: two vertices are
//! the same iff their indices match, never by comparing coordinates.

use crate::geom::{mid_coord, Coord};

/// A mesh vertex: a grid coord plus the identity the mesh assigned to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vertex {
    pub index: i64,
    pub coord: Coord,
}

impl Vertex {
    #[inline]
    pub fn new(index: i64, coord: Coord) -> Vertex {
        Vertex { index, coord }
    }
}

/// Symmetric key for the edge between vertex identities `i` and `j`:
/// `10000 * min + max`. Collision-free while vertex indices stay below
/// 10000, which the mesh numbering guarantees.
#[inline]
pub fn edge_key(i: i64, j: i64) -> i64 {
    if i < j {
        10_000 * i + j
    } else {
        10_000 * j + i
    }
}

/// An edge between two mesh vertices, with the adjacency bookkeeping the
/// mesh layer hangs off it.
#[derive(Clone, Debug, Default)]
pub struct Edge {
    pub vertices: [Vertex; 2],
    /// Indices of the triangles this edge borders (at most two).
    pub adjacent_triangles: Vec<i64>,
    /// Inflection points placed a fixed step past each endpoint.
    pub inflects: [Vertex; 2],
    pub is_adjacency: bool,
}

impl Edge {
    pub fn new(a: Vertex, b: Vertex) -> Edge {
        Edge {
            vertices: [a, b],
            ..Edge::default()
        }
    }

    /// Midpoint of the edge, truncated onto the grid.
    #[inline]
    pub fn mid_coord(&self) -> Coord {
        mid_coord(self.vertices[0].coord, self.vertices[1].coord)
    }

    /// Symmetric edge key of the two endpoint identities.
    #[inline]
    pub fn key(&self) -> i64 {
        edge_key(self.vertices[0].index, self.vertices[1].index)
    }
}
