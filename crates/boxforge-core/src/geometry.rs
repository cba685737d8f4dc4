//! 2D geometry primitives for panel outlines.
//!
//! Outlines are plain values: an ordered sequence of points forming a closed
//! polyline (the segment from the last point back to the first is implicit).
//! All coordinates are f64 millimetres-or-whatever; callers supply consistent
//! units.

use serde::{Deserialize, Serialize};

/// Tolerance for treating two coordinates as identical.
pub const POINT_EPSILON: f64 = 1e-9;

/// A point in a panel's local 2D frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A panel's flat base rectangle, before any finger cutting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A closed cut boundary: an ordered polyline, implicitly closed from the
/// last point back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outline {
    points: Vec<Point2>,
}

impl Outline {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point, dropping it if it coincides with the previous one.
    /// Keeps corner handoffs between edges from producing duplicate vertices.
    pub fn push_unique(&mut self, point: Point2) {
        if let Some(last) = self.points.last() {
            if (point.x - last.x).abs() < POINT_EPSILON && (point.y - last.y).abs() < POINT_EPSILON
            {
                return;
            }
        }
        self.points.push(point);
    }

    /// Drop a trailing point that coincides with the first point, so the
    /// closure stays implicit.
    pub fn seal(&mut self) {
        if self.points.len() > 1 {
            let first = self.points[0];
            let last = *self.points.last().unwrap();
            if (first.x - last.x).abs() < POINT_EPSILON && (first.y - last.y).abs() < POINT_EPSILON
            {
                self.points.pop();
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }

    /// Axis-aligned bounds as (min_x, min_y, max_x, max_y).
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min_x = self.points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = self
            .points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_y = self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = self
            .points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min_x, min_y, max_x, max_y))
    }

    /// Signed area via the shoelace formula. Positive for counter-clockwise
    /// winding.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Whether the closed polyline is a simple polygon: no two non-adjacent
    /// segments cross, overlap, or form a T-junction. Two non-adjacent
    /// segments meeting exactly at shared vertices are tolerated; a slot on
    /// one edge can pinch against a slot on the neighbouring edge when an
    /// edge is exactly three thicknesses long, and that is still a valid
    /// cut path. Quadratic scan; outlines are small.
    pub fn is_simple(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        for i in 0..n {
            let a1 = self.points[i];
            let a2 = self.points[(i + 1) % n];
            for j in (i + 1)..n {
                // Skip the shared-endpoint neighbours, including the
                // first/last segment pair around the implicit closure.
                if j == i + 1 || (i == 0 && j == n - 1) {
                    continue;
                }
                let b1 = self.points[j];
                let b2 = self.points[(j + 1) % n];
                if segments_conflict(a1, a2, b1, b2) {
                    return false;
                }
            }
        }
        true
    }
}

impl From<Vec<Point2>> for Outline {
    fn from(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

fn orientation(p: Point2, q: Point2, r: Point2) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

fn points_coincide(a: Point2, b: Point2) -> bool {
    (a.x - b.x).abs() < POINT_EPSILON && (a.y - b.y).abs() < POINT_EPSILON
}

fn on_segment(p: Point2, q: Point2, r: Point2) -> bool {
    q.x <= p.x.max(r.x) + POINT_EPSILON
        && q.x + POINT_EPSILON >= p.x.min(r.x)
        && q.y <= p.y.max(r.y) + POINT_EPSILON
        && q.y + POINT_EPSILON >= p.y.min(r.y)
}

/// A collinear point that lies on the segment but is not one of its
/// endpoints.
fn strictly_inside(p: Point2, q: Point2, r: Point2) -> bool {
    on_segment(p, q, r) && !points_coincide(q, p) && !points_coincide(q, r)
}

/// Whether two segments conflict in a way that breaks polygon simplicity:
/// a proper crossing, a collinear overlap longer than a point, or one
/// segment's endpoint landing in the other's interior. Shared endpoints
/// alone do not conflict.
fn segments_conflict(a1: Point2, a2: Point2, b1: Point2, b2: Point2) -> bool {
    let d1 = orientation(a1, a2, b1);
    let d2 = orientation(a1, a2, b2);
    let d3 = orientation(b1, b2, a1);
    let d4 = orientation(b1, b2, a2);

    // Proper crossing: each segment strictly straddles the other's line.
    if ((d1 > POINT_EPSILON && d2 < -POINT_EPSILON) || (d1 < -POINT_EPSILON && d2 > POINT_EPSILON))
        && ((d3 > POINT_EPSILON && d4 < -POINT_EPSILON)
            || (d3 < -POINT_EPSILON && d4 > POINT_EPSILON))
    {
        return true;
    }

    // Fully collinear: conflict unless the shared region is at most a
    // single point.
    if d1.abs() <= POINT_EPSILON
        && d2.abs() <= POINT_EPSILON
        && d3.abs() <= POINT_EPSILON
        && d4.abs() <= POINT_EPSILON
    {
        let touches = [
            (b1, on_segment(a1, b1, a2)),
            (b2, on_segment(a1, b2, a2)),
            (a1, on_segment(b1, a1, b2)),
            (a2, on_segment(b1, a2, b2)),
        ];
        let mut contact: Option<Point2> = None;
        for (p, on) in touches {
            if !on {
                continue;
            }
            match contact {
                None => contact = Some(p),
                Some(c) if points_coincide(c, p) => {}
                Some(_) => return true,
            }
        }
        return false;
    }

    // T-junction: one endpoint in the other segment's interior.
    if d1.abs() <= POINT_EPSILON && strictly_inside(a1, b1, a2) {
        return true;
    }
    if d2.abs() <= POINT_EPSILON && strictly_inside(a1, b2, a2) {
        return true;
    }
    if d3.abs() <= POINT_EPSILON && strictly_inside(b1, a1, b2) {
        return true;
    }
    if d4.abs() <= POINT_EPSILON && strictly_inside(b1, a2, b2) {
        return true;
    }

    false
}
