//! Convex polygons assembled from identity-carrying mesh triangles.
//!
//! Purpose
//! - Model the triangle mesh vocabulary (vertices with caller-assigned
//!   indices, edge keys, triangles) and grow convex polygons by merging
//!   triangles that share an edge.
//! - Expose one polygon contract ([`Polygon`]) over triangles and merged
//!   polygons so downstream queries need not care which they hold.
//!
//! Conventions
//! - Vertex identity is the caller-assigned `Vertex::index`; merging and
//!   adjacency compare indices, never coordinates.
//! - Orientation tests are exact integer arithmetic throughout. Containment
//!   is boundary inclusive.

mod convex;
pub mod rand;
mod shape;
mod triangle;
mod vertex;

pub use convex::Convex;
pub use shape::{is_convex, Polygon};
pub use triangle::Triangle;
pub use vertex::{edge_key, Edge, Vertex};
