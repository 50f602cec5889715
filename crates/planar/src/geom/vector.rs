//! Displacement vectors and orientation arithmetic.
//!
//! Vectors carry `i64` components even though coords are `i32`: widening at
//! construction keeps cross and dot products of coordinate differences exact.
//! A positive cross product is a counter-clockwise turn on the XZ plane.

use std::ops::{Add, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use super::coord::Coord;

/// A displacement on the XZ plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i64,
    pub z: i64,
}

impl Vector {
    #[inline]
    pub fn new(x: i64, z: i64) -> Vector {
        Vector { x, z }
    }

    /// Displacement from `start` to `end`.
    #[inline]
    pub fn between(start: Coord, end: Coord) -> Vector {
        Vector {
            x: end.x as i64 - start.x as i64,
            z: end.z as i64 - start.z as i64,
        }
    }

    /// Position vector of `coord` (displacement from the origin).
    #[inline]
    pub fn from_coord(coord: Coord) -> Vector {
        Vector {
            x: coord.x as i64,
            z: coord.z as i64,
        }
    }

    /// Dot product. Exact for coordinate-derived vectors, returned as `f64`
    /// because every consumer feeds it into floating-point ratios.
    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        (self.x * other.x) as f64 + (self.z * other.z) as f64
    }

    /// Cross product (z-component of the 3D cross). Exact.
    #[inline]
    pub fn cross(self, other: Vector) -> i64 {
        self.x * other.z - self.z * other.x
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        (self.x * self.x + self.z * self.z) as f64
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Vector scaled by `ratio`, components rounded half away from zero.
    #[inline]
    pub fn scaled(self, ratio: f64) -> Vector {
        Vector {
            x: (ratio * self.x as f64).round() as i64,
            z: (ratio * self.z as f64).round() as i64,
        }
    }

    /// Vector rotated by `angle` radians (counter-clockwise for positive
    /// angles), rounded back onto the grid.
    pub fn rotated(self, angle: f64) -> Vector {
        let rotated = Rotation2::new(angle) * Vector2::new(self.x as f64, self.z as f64);
        Vector {
            x: rotated.x.round() as i64,
            z: rotated.y.round() as i64,
        }
    }

    /// Unsigned angle to `other` in `[0, π]`.
    ///
    /// When the cosine ratio leaves `[-1, 1]` (rounding, or a zero-length
    /// operand) the arc cosine is NaN and the angle resolves by the sign of
    /// the ratio: `0` when positive, `π` otherwise.
    pub fn angle_to(self, other: Vector) -> f64 {
        let t = self.dot(other) / (self.length() * other.length());
        let angle = t.acos();
        if angle.is_nan() {
            if t > 0.0 {
                return 0.0;
            }
            return std::f64::consts::PI;
        }
        angle
    }

    /// Distance from `target` to the infinite line through `start` along
    /// `self`, computed as `|start → target| · sin(angle)`.
    pub fn perp_dist(self, start: Coord, target: Coord) -> f64 {
        let vec = Vector::between(start, target);
        let angle = self.angle_to(vec);
        vec.length() * angle.sin()
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector {
            x: self.x + rhs.x,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector {
            x: self.x - rhs.x,
            z: self.z - rhs.z,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            z: -self.z,
        }
    }
}

impl Add<Vector> for Coord {
    type Output = Coord;

    /// Coord translated by a vector, components truncated back to `i32`.
    #[inline]
    fn add(self, rhs: Vector) -> Coord {
        Coord {
            x: (self.x as i64 + rhs.x) as i32,
            z: (self.z as i64 + rhs.z) as i32,
        }
    }
}

impl Sub for Coord {
    type Output = Vector;

    /// Displacement from `rhs` to `self`.
    #[inline]
    fn sub(self, rhs: Coord) -> Vector {
        Vector::between(rhs, self)
    }
}

/// Raw orientation value of `p1` and `p2` relative to pivot `p3`:
/// `(p1 - p3) × (p2 - p3)`. Positive when `p1` is reached before `p2` going
/// counter-clockwise around `p3`, zero when the three are collinear.
#[inline]
pub fn orient(p1: Coord, p2: Coord, p3: Coord) -> i64 {
    Vector::between(p3, p1).cross(Vector::between(p3, p2))
}

/// Turn direction at `p2` walking `p1 → p2 → p3`: `1` for a counter-clockwise
/// turn, `-1` for clockwise, `0` for collinear.
#[inline]
pub fn turn_sign(p1: Coord, p2: Coord, p3: Coord) -> i64 {
    Vector::between(p1, p2)
        .cross(Vector::between(p2, p3))
        .signum()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn cross_is_positive_for_ccw() {
        let right = Vector::new(1, 0);
        let up = Vector::new(0, 1);
        assert_eq!(right.cross(up), 1);
        assert_eq!(up.cross(right), -1);
        assert_eq!(right.cross(Vector::new(5, 0)), 0);
    }

    #[test]
    fn coord_ops_round_trip() {
        let a = Coord::new(10, -3);
        let b = Coord::new(-5, 7);
        let v = b - a;
        assert_eq!(v, Vector::new(-15, 10));
        assert_eq!(a + v, b);
    }

    #[test]
    fn scaled_rounds_half_away_from_zero() {
        let v = Vector::new(5, -5);
        assert_eq!(v.scaled(0.5), Vector::new(3, -3));
        assert_eq!(v.scaled(0.1), Vector::new(1, -1));
    }

    #[test]
    fn rotated_quarter_turn() {
        let v = Vector::new(100, 0);
        assert_eq!(v.rotated(PI / 2.0), Vector::new(0, 100));
        assert_eq!(v.rotated(-PI / 2.0), Vector::new(0, -100));
        assert_eq!(v.rotated(PI), Vector::new(-100, 0));
    }

    #[test]
    fn angle_between_axes() {
        let right = Vector::new(10, 0);
        let up = Vector::new(0, 10);
        assert!((right.angle_to(up) - PI / 2.0).abs() < 1e-9);
        assert!((right.angle_to(Vector::new(-10, 0)) - PI).abs() < 1e-9);
    }

    #[test]
    fn degenerate_angle_resolves_by_ratio_sign() {
        // Zero-length operand: the cosine ratio is NaN, which lands in the
        // negative bucket.
        let zero = Vector::new(0, 0);
        let v = Vector::new(10, 0);
        assert_eq!(v.angle_to(zero), PI);
        assert!(v.angle_to(Vector::new(3, 0)).abs() < 1e-7);
    }

    #[test]
    fn perp_dist_measures_line_offset() {
        let along = Vector::new(100, 0);
        let d = along.perp_dist(Coord::new(0, 0), Coord::new(50, 30));
        assert!((d - 30.0).abs() < 1e-6);
    }

    #[test]
    fn orient_matches_turn_direction() {
        let a = Coord::new(0, 0);
        let b = Coord::new(10, 0);
        let up = Coord::new(5, 5);
        let down = Coord::new(5, -5);
        assert!(orient(b, up, a) > 0);
        assert!(orient(b, down, a) < 0);
        assert_eq!(orient(b, Coord::new(20, 0), a), 0);
        assert_eq!(turn_sign(a, b, up), 1);
        assert_eq!(turn_sign(a, b, down), -1);
        assert_eq!(turn_sign(a, b, Coord::new(20, 0)), 0);
    }
}
