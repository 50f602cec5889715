//! Rasterized paths over the integer grid.
//!
//! Purpose
//! - Turn continuous paths into integer coordinate chains: Bresenham lines,
//!   rings and arcs around a center, spirals with growing radius, and the
//!   set of grid cells a segment passes through.
//!
//! Conventions
//! - Arc-family samplers emit roughly ten points per radian, always starting
//!   at the given start coordinate. Every sample rotates the one
//!   center-to-start vector by the accumulated angle, so rounding error does
//!   not compound across steps.

use std::collections::HashSet;
use std::f64::consts::PI;

use crate::geom::{cross_coord, dist, Coord, Vector};

/// Every grid coordinate on the rasterized line from `p1` to `p2`.
///
/// Classic integer Bresenham: steep lines transpose into the shallow octant
/// and right-to-left runs swap endpoints, with a final reversal so the chain
/// always starts at `p1` and ends at `p2`.
pub fn bresenham_coords(p1: Coord, p2: Coord) -> Vec<Coord> {
    let (mut x0, mut z0) = (p1.x as i64, p1.z as i64);
    let (mut x1, mut z1) = (p2.x as i64, p2.z as i64);
    let steep = (z1 - z0).abs() > (x1 - x0).abs();
    if steep {
        std::mem::swap(&mut x0, &mut z0);
        std::mem::swap(&mut x1, &mut z1);
    }
    let reversed = x0 > x1;
    if reversed {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut z0, &mut z1);
    }
    let dx = x1 - x0;
    let dz = (z1 - z0).abs();
    let step = if z0 < z1 { 1 } else { -1 };
    let mut err = dx / 2;
    let mut z = z0;
    let mut coords = Vec::with_capacity((dx + 1) as usize);
    for x in x0..=x1 {
        coords.push(if steep {
            Coord::new(z as i32, x as i32)
        } else {
            Coord::new(x as i32, z as i32)
        });
        err -= dz;
        if err < 0 {
            z += step;
            err += dx;
        }
    }
    if reversed {
        coords.reverse();
    }
    coords
}

/// Points sampled by rotating the center-to-start vector in `n - 1` equal
/// steps up to `angle`. Empty for `n < 2`.
fn rotation_samples(start: Coord, center: Coord, n: usize, angle: f64) -> Vec<Coord> {
    if n < 2 {
        return Vec::new();
    }
    let vec = Vector::between(center, start);
    let step = angle / (n - 1) as f64;
    let mut coords = Vec::with_capacity(n);
    coords.push(start);
    for i in 1..n {
        coords.push(center + vec.rotated(step * i as f64));
    }
    coords
}

/// `n` evenly spaced coords around the full circle, starting and closing at
/// `circle_coord`.
pub fn ring_coords(circle_coord: Coord, center: Coord, n: usize) -> Vec<Coord> {
    rotation_samples(circle_coord, center, n, 2.0 * PI)
}

/// Coords along the arc from `start` around `center`, roughly ten per radian
/// and at least two. A positive `angle` sweeps clockwise.
pub fn arc_coords(start: Coord, center: Coord, angle: f64) -> Vec<Coord> {
    let n = ((angle.abs() * 10.0) as i64).max(2) as usize;
    rotation_samples(start, center, n, -angle)
}

/// Arc path around a circular obstacle, from `start` on the circle toward an
/// external `end`, stopping where `end` becomes tangent-visible. The sweep
/// direction follows the shorter way around, read off the cross product of
/// the two radius vectors.
pub fn coords_around(start: Coord, end: Coord, center: Coord) -> Vec<Coord> {
    let center_vec = Vector::between(center, start);
    let end_vec = Vector::between(center, end);
    let radius = dist(start, center);
    let mut angle = center_vec.angle_to(end_vec) - tangent_cutoff_angle(end, center, radius);
    if center_vec.cross(end_vec) > 0 {
        angle = -angle;
    }
    arc_coords(start, center, angle)
}

/// Coords along a spiral from `start` around `center`, growing the radius by
/// `delta` over the sweep.
///
/// A positive `angle` sweeps counter-clockwise, unlike [`arc_coords`]. The
/// path has `|angle| * 10` points truncated, ending one rotation step short
/// of the full sweep; sweeps below 0.2 rad degenerate to a two-point radial
/// step of `delta`.
pub fn spiral_coords(start: Coord, center: Coord, angle: f64, delta: f64) -> Vec<Coord> {
    let vec = Vector::between(center, start);
    let n = (angle.abs() * 10.0) as i64;
    if n < 2 {
        let dst = dist(start, center);
        return vec![start, center + vec.scaled((delta + dst) / dst)];
    }
    let radius = vec.length();
    let angle_step = angle / n as f64;
    let delta_step = delta / n as f64;
    let mut coords = Vec::with_capacity(n as usize);
    coords.push(start);
    for i in 1..n {
        let v = vec.rotated(angle_step * i as f64);
        coords.push(center + v.scaled((radius + delta_step * i as f64) / radius));
    }
    coords
}

/// Angle at `center` between the direction toward `end` and the tangent
/// point a circle of `radius` shows to `end`. Zero when `end` lies inside
/// the circle and no tangent exists.
pub fn tangent_cutoff_angle(end: Coord, center: Coord, radius: f64) -> f64 {
    let angle = (radius / dist(end, center)).acos();
    if angle.is_nan() {
        return 0.0;
    }
    angle
}

/// Bottom-left corners of the grid cells the segment `p0p1` passes through.
///
/// Seeds the cells of both endpoints, then walks every horizontal and
/// vertical grid line in the segment's span: each crossing contributes the
/// two cells meeting at that line, with the hit coordinate snapped back onto
/// the line before cell rounding. A crossing exactly on a cell corner admits
/// the extra neighbors. Cells snap with truncating division, so the grid is
/// expected to live in the positive quadrant; `width` and `height` bound the
/// grid lines.
pub fn grid_cells_on_segment(
    p0: Coord,
    p1: Coord,
    cell_w: i64,
    cell_h: i64,
    width: i64,
    height: i64,
) -> HashSet<Coord> {
    let mut cells = HashSet::new();
    for p in [p0, p1] {
        cells.insert(Coord::new(
            (p.x as i64 / cell_w * cell_w) as i32,
            (p.z as i64 / cell_h * cell_h) as i32,
        ));
    }
    let (z_lo, z_hi) = (p0.z.min(p1.z) as i64, p0.z.max(p1.z) as i64);
    for i in z_lo / cell_h..=z_hi / cell_h {
        let line_z = (i * cell_h) as i32;
        let q0 = Coord::new(0, line_z);
        let q1 = Coord::new(width as i32, line_z);
        if let Some(mut hit) = cross_coord(p0, p1, q0, q1) {
            hit.z = line_z;
            let up = Coord::new(
                (hit.x as i64 / cell_w * cell_w) as i32,
                (hit.z as i64 / cell_h * cell_h) as i32,
            );
            let down = Coord::new(up.x, ((hit.z as i64 / cell_h - 1) * cell_h) as i32);
            cells.insert(up);
            cells.insert(down);
        }
    }
    let (x_lo, x_hi) = (p0.x.min(p1.x) as i64, p0.x.max(p1.x) as i64);
    for i in x_lo / cell_w..=x_hi / cell_w {
        let line_x = (i * cell_w) as i32;
        let q0 = Coord::new(line_x, 0);
        let q1 = Coord::new(line_x, height as i32);
        if let Some(mut hit) = cross_coord(p0, p1, q0, q1) {
            hit.x = line_x;
            let right = Coord::new(
                (hit.x as i64 / cell_w * cell_w) as i32,
                (hit.z as i64 / cell_h * cell_h) as i32,
            );
            let left = Coord::new(((hit.x as i64 / cell_w - 1) * cell_w) as i32, right.z);
            cells.insert(right);
            cells.insert(left);
        }
    }
    cells
}
