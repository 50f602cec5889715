//! Deterministic fixed-precision 2D geometry on the XZ plane.
//!
//! Coordinates are integers on a millimeter-scale grid; every predicate that
//! can be decided in integer arithmetic is, so results are reproducible across
//! machines. Floating point enters only for lengths, angles, and ratios, and is
//! fenced by the epsilon helpers in [`geom::util`].
//!
//! Layers:
//! - [`geom`]: coords, vectors, segments, circles, and their predicates.
//! - [`poly`]: vertices with identities, triangles, and convex polygons
//!   assembled by merging triangles.
//! - [`rect`]: axis-aligned rectangles and quadrant classification.
//! - [`raster`]: grid sampling along lines, arcs, and spirals.

pub mod geom;
pub mod poly;
pub mod raster;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        coord_at_ratio, cross_coord, dist, dist_squared, mid_coord, Circle, Coord, Line, Segment,
        Vector,
    };
    pub use crate::poly::rand::{draw_triangle_fan, FanCfg, FanCount, ReplayToken};
    pub use crate::poly::{edge_key, is_convex, Convex, Polygon, Triangle, Vertex};
    pub use crate::rect::{rect_intersection, Border, LocationState, Rectangle};
}
