//! Axis-aligned rectangles and quadrant borders.
//!
//! Purpose
//! - Bounding-box arithmetic for broad-phase queries: containment, random
//!   interior points, intersection rectangles, and classification of boxes
//!   into the four quadrants of a border region.
//!
//! Conventions
//! - A rectangle is anchored at its bottom-left corner; corners enumerate
//!   counter-clockwise. Width and height run along +X and +Z.

use rand::Rng;

use crate::geom::{Coord, Vector};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub coord: Coord,
    pub width: i64,
    pub height: i64,
}

impl Rectangle {
    pub fn new(x: i32, z: i32, width: i64, height: i64) -> Rectangle {
        Rectangle {
            coord: Coord::new(x, z),
            width,
            height,
        }
    }

    /// Corner coordinates, counter-clockwise from the bottom-left.
    pub fn corner_coords(&self) -> [Coord; 4] {
        let x = self.coord.x as i64;
        let z = self.coord.z as i64;
        [
            Coord::new(x as i32, z as i32),
            Coord::new((x + self.width) as i32, z as i32),
            Coord::new((x + self.width) as i32, (z + self.height) as i32),
            Coord::new(x as i32, (z + self.height) as i32),
        ]
    }

    /// Corner position vectors, counter-clockwise.
    pub fn vectors(&self) -> [Vector; 4] {
        let c = self.corner_coords();
        [
            Vector::from_coord(c[0]),
            Vector::from_coord(c[1]),
            Vector::from_coord(c[2]),
            Vector::from_coord(c[3]),
        ]
    }

    /// Boundary-inclusive containment via pairwise cross-product signs over
    /// the corner fan, the same test triangles use.
    pub fn contains(&self, p: Coord) -> bool {
        let c = self.corner_coords();
        let pa = Vector::between(p, c[0]);
        let pb = Vector::between(p, c[1]);
        let pc = Vector::between(p, c[2]);
        let b1 = pa.cross(pb) >= 0;
        let b2 = pb.cross(pc) >= 0;
        if b1 != b2 {
            return false;
        }
        let pd = Vector::between(p, c[3]);
        let b3 = pc.cross(pd) >= 0;
        if b2 != b3 {
            return false;
        }
        let b4 = pd.cross(pa) >= 0;
        b3 == b4
    }

    /// Uniform random interior coordinate. Width and height must be
    /// positive.
    pub fn rand_coord<R: Rng>(&self, rng: &mut R) -> Coord {
        Coord::new(
            (self.coord.x as i64 + rng.gen_range(0..self.width)) as i32,
            (self.coord.z as i64 + rng.gen_range(0..self.height)) as i32,
        )
    }

    /// Quadrant flags of this rectangle's bounding box against `border`.
    pub fn location_to(&self, border: &Border) -> LocationState {
        let min_x = self.coord.x as i64;
        let min_z = self.coord.z as i64;
        border.rect_location(min_x, min_z, min_x + self.width, min_z + self.height)
    }
}

bitflags::bitflags! {
    /// Quadrant flags within a border region.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LocationState: u32 {
        const LEFT_TOP = 0b0001;
        const RIGHT_TOP = 0b0010;
        const LEFT_BOTTOM = 0b0100;
        const RIGHT_BOTTOM = 0b1000;
    }
}

/// A rectangular region split into four quadrants at its center.
#[derive(Clone, Copy, Debug)]
pub struct Border {
    pub rect: Rectangle,
}

impl Border {
    pub fn new(x: i32, z: i32, width: i64, height: i64) -> Border {
        Border {
            rect: Rectangle::new(x, z, width, height),
        }
    }

    /// Quadrant flags a bounding box overlaps, empty when it lies fully
    /// outside the border.
    ///
    /// The split comparisons are closed toward the left half and open toward
    /// the right: a degenerate box lying exactly on the horizontal center
    /// line collects both left flags and neither right flag.
    pub fn rect_location(&self, min_x: i64, min_z: i64, max_x: i64, max_z: i64) -> LocationState {
        let bx = self.rect.coord.x as i64;
        let bz = self.rect.coord.z as i64;
        if min_x > bx + self.rect.width
            || min_z > bz + self.rect.height
            || max_x < bx
            || max_z < bz
        {
            return LocationState::empty();
        }
        let center_x = bx + self.rect.width / 2;
        let center_z = bz + self.rect.height / 2;
        let mut location = LocationState::empty();
        if min_x <= center_x {
            if max_z >= center_z {
                location |= LocationState::LEFT_TOP;
            }
            if min_z <= center_z {
                location |= LocationState::LEFT_BOTTOM;
            }
        }
        if max_x > center_x {
            if max_z > center_z {
                location |= LocationState::RIGHT_TOP;
            }
            if min_z < center_z {
                location |= LocationState::RIGHT_BOTTOM;
            }
        }
        location
    }

    /// Quadrant of a single point, empty when outside the border. Points on
    /// the center lines classify left and top first.
    pub fn coord_location(&self, p: Coord) -> LocationState {
        if !self.rect.contains(p) {
            return LocationState::empty();
        }
        let center_x = self.rect.coord.x as i64 + self.rect.width / 2;
        let center_z = self.rect.coord.z as i64 + self.rect.height / 2;
        if (p.x as i64) <= center_x {
            if (p.z as i64) >= center_z {
                return LocationState::LEFT_TOP;
            }
            return LocationState::LEFT_BOTTOM;
        }
        if (p.z as i64) >= center_z {
            return LocationState::RIGHT_TOP;
        }
        LocationState::RIGHT_BOTTOM
    }
}

/// Axis-aligned intersection of two rectangles. Touching edges do not
/// count; the result always has positive area.
pub fn rect_intersection(r0: &Rectangle, r1: &Rectangle) -> Option<Rectangle> {
    let x = (r0.coord.x as i64).max(r1.coord.x as i64);
    let z = (r0.coord.z as i64).max(r1.coord.z as i64);
    let width = (r0.coord.x as i64 + r0.width).min(r1.coord.x as i64 + r1.width) - x;
    let height = (r0.coord.z as i64 + r0.height).min(r1.coord.z as i64 + r1.height) - z;
    if width <= 0 || height <= 0 {
        return None;
    }
    Some(Rectangle::new(x as i32, z as i32, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::geom::Circle;

    #[test]
    fn corners_run_counter_clockwise() {
        let r = Rectangle::new(10, 20, 30, 40);
        let c = r.corner_coords();
        assert_eq!(c[0], Coord::new(10, 20));
        assert_eq!(c[1], Coord::new(40, 20));
        assert_eq!(c[2], Coord::new(40, 60));
        assert_eq!(c[3], Coord::new(10, 60));
    }

    #[test]
    fn corner_vectors_feed_the_circle_overlap() {
        let vs = Rectangle::new(0, 0, 100, 100).vectors();
        assert!(Circle::new(Coord::new(50, 50), 10).overlaps_polygon(&vs));
        assert!(!Circle::new(Coord::new(200, 50), 10).overlaps_polygon(&vs));
    }

    #[test]
    fn contains_includes_boundary() {
        let r = Rectangle::new(0, 0, 100, 100);
        assert!(r.contains(Coord::new(50, 50)));
        assert!(r.contains(Coord::new(0, 50)));
        assert!(r.contains(Coord::new(100, 100)));
        assert!(!r.contains(Coord::new(-1, 50)));
        assert!(!r.contains(Coord::new(50, 101)));
    }

    #[test]
    fn rand_coord_stays_inside() {
        let r = Rectangle::new(-50, 200, 30, 7);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let p = r.rand_coord(&mut rng);
            assert!(p.x >= -50 && p.x < -20);
            assert!(p.z >= 200 && p.z < 207);
        }
    }

    #[test]
    fn rect_location_collects_overlapped_quadrants() {
        let b = Border::new(0, 0, 100, 100);
        assert_eq!(b.rect_location(-10, -10, 110, 110), LocationState::all());
        assert_eq!(b.rect_location(0, 0, 10, 10), LocationState::LEFT_BOTTOM);
        assert_eq!(
            b.rect_location(60, 60, 70, 70),
            LocationState::RIGHT_TOP
        );
        assert_eq!(b.rect_location(200, 0, 210, 10), LocationState::empty());
    }

    #[test]
    fn center_line_splits_are_asymmetric() {
        let b = Border::new(0, 0, 100, 100);
        // Degenerate box on the horizontal center line: the closed left
        // comparisons take both quadrants, the open right ones take none.
        assert_eq!(
            b.rect_location(20, 50, 30, 50),
            LocationState::LEFT_TOP | LocationState::LEFT_BOTTOM
        );
        assert_eq!(b.rect_location(60, 50, 70, 50), LocationState::empty());
    }

    #[test]
    fn coord_location_prefers_left_and_top_on_center_lines() {
        let b = Border::new(0, 0, 100, 100);
        assert_eq!(b.coord_location(Coord::new(50, 50)), LocationState::LEFT_TOP);
        assert_eq!(b.coord_location(Coord::new(50, 49)), LocationState::LEFT_BOTTOM);
        assert_eq!(b.coord_location(Coord::new(51, 50)), LocationState::RIGHT_TOP);
        assert_eq!(b.coord_location(Coord::new(51, 49)), LocationState::RIGHT_BOTTOM);
        assert_eq!(b.coord_location(Coord::new(120, 50)), LocationState::empty());
    }

    #[test]
    fn intersection_requires_positive_area() {
        let a = Rectangle::new(0, 0, 100, 100);
        let b = Rectangle::new(60, -40, 100, 100);
        let hit = rect_intersection(&a, &b).unwrap();
        assert_eq!(hit, Rectangle::new(60, 0, 40, 60));
        // Sharing only an edge is not an intersection.
        let c = Rectangle::new(100, 0, 50, 100);
        assert!(rect_intersection(&a, &c).is_none());
        let inner = Rectangle::new(10, 10, 5, 5);
        assert_eq!(rect_intersection(&a, &inner), Some(inner));
    }
}
