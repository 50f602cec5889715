//! Grid coordinates and point-to-point helpers.

use super::vector::Vector;

/// A point on the integer XZ grid.
///
/// Arithmetic that could leave `i32` (differences, sums of several coords)
/// widens to `i64` internally. Overflow is only possible near the extremes of
/// the coordinate range, which callers keep clear of by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, z: i32) -> Coord {
        Coord { x, z }
    }
}

/// Squared Euclidean distance between two coords. Exact, returned as `f64`
/// for callers that compare it against floating radii.
#[inline]
pub fn dist_squared(a: Coord, b: Coord) -> f64 {
    let dx = a.x as i64 - b.x as i64;
    let dz = a.z as i64 - b.z as i64;
    (dx * dx + dz * dz) as f64
}

/// Euclidean distance between two coords.
#[inline]
pub fn dist(a: Coord, b: Coord) -> f64 {
    dist_squared(a, b).sqrt()
}

/// Midpoint of two coords, components truncated toward zero.
#[inline]
pub fn mid_coord(a: Coord, b: Coord) -> Coord {
    Coord {
        x: ((a.x as i64 + b.x as i64) / 2) as i32,
        z: ((a.z as i64 + b.z as i64) / 2) as i32,
    }
}

/// Point at `ratio` along the way from `start` to `end`.
///
/// Each component is rounded half away from zero back onto the grid. Ratios
/// outside `[0, 1]` extrapolate beyond the endpoints.
#[inline]
pub fn coord_at_ratio(start: Coord, end: Coord, ratio: f64) -> Coord {
    start + Vector::between(start, end).scaled(ratio)
}

/// Point 1000 grid units from `start` toward `end`.
///
/// Used when placing inflection points a fixed step away from a corner.
/// Undefined for `start == end` (the ratio divides by zero).
#[inline]
pub fn step_coord(start: Coord, end: Coord) -> Coord {
    let vec = Vector::between(start, end);
    start + vec.scaled(1000.0 / vec.length())
}
