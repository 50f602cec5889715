//! Planar primitives on the integer XZ grid.
//!
//! Purpose
//! - Provide coords, displacement vectors, segments, and circles with
//!   predicates that stay in integer arithmetic wherever the question is
//!   decidable there (orientation, straddling, edge membership).
//! - Keep floating point at the edges (lengths, angles, ratios), fenced by
//!   the epsilon helpers in [`util`].
//!
//! Conventions
//! - The plane is XZ: `x` grows right, `z` grows up, and a positive cross
//!   product means a counter-clockwise turn.
//! - Coordinates are `i32`; displacement vectors widen to `i64` on
//!   construction so products of coordinate differences cannot overflow.

pub mod circle;
pub mod coord;
pub mod segment;
pub mod util;
pub mod vector;

pub use circle::{circle_coord_toward, line_cross_circle, Circle};
pub use coord::{coord_at_ratio, dist, dist_squared, mid_coord, step_coord, Coord};
pub use segment::{cross_coord, rects_overlap, segments_straddle, Line, Segment};
pub use vector::{orient, turn_sign, Vector};

#[cfg(test)]
mod tests;
