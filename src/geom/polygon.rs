//! Planar convex polygons: the face machinery shared by triangles and hexahedron faces.
//!
//! A face is mapped into an orthonormal 2D frame lying in its plane, where containment is the
//! same-side test against every edge and coplanar segments are clipped edge by edge.

use super::core::{Point3, Tolerance, Vec3};
use super::plane::Plane;
use super::segment::LineSegment;

#[derive(Debug, Clone, Copy)]
struct PlanarFrame {
    origin: Point3,
    u: Vec3,
    v: Vec3,
}

impl PlanarFrame {
    /// `normal` must be unit length; `(u, v, normal)` is right-handed.
    fn new(origin: Point3, normal: Vec3) -> Option<Self> {
        let helper = if normal.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
        let u = normal.cross(helper).normalized()?;
        let v = normal.cross(u);
        Some(Self { origin, u, v })
    }

    fn project(self, p: Point3) -> [f64; 2] {
        let d = p - self.origin;
        [d.dot(self.u), d.dot(self.v)]
    }
}

/// Overlap of a coplanar segment with a polygon, as parameters along the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Overlap {
    Empty,
    Point(f64),
    Span(f64, f64),
}

#[derive(Debug, Clone)]
pub(crate) struct PlanarPolygon {
    plane: Plane,
    frame: PlanarFrame,
    vertices: Vec<[f64; 2]>,
    /// `+1` when the projected vertices wind counter-clockwise, `-1` otherwise.
    winding: f64,
}

impl PlanarPolygon {
    /// Build from convex, coplanar vertices in boundary order. `None` when they span no area.
    pub(crate) fn new(points: &[Point3]) -> Option<Self> {
        let (&origin, _) = points.split_first()?;
        let plane = Plane::from_point_normal(origin, newell_normal(points))?;
        let frame = PlanarFrame::new(origin, plane.normal())?;
        let vertices: Vec<[f64; 2]> = points.iter().map(|&p| frame.project(p)).collect();
        let winding = if signed_area(&vertices) < 0.0 { -1.0 } else { 1.0 };
        Some(Self {
            plane,
            frame,
            vertices,
            winding,
        })
    }

    pub(crate) const fn plane(&self) -> Plane {
        self.plane
    }

    /// Same face with its plane facing the other way.
    pub(crate) fn flipped(mut self) -> Self {
        self.plane = self.plane.negated();
        self
    }

    fn edges(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// In-plane signed distance from the edge line `p -> q`, positive toward the interior.
    /// `None` for a collapsed edge.
    fn edge_distance(&self, p: [f64; 2], q: [f64; 2], x: [f64; 2]) -> Option<f64> {
        let e = [q[0] - p[0], q[1] - p[1]];
        let len = e[0].hypot(e[1]);
        if len <= f64::EPSILON {
            return None;
        }
        let cross = e[0] * (x[1] - p[1]) - e[1] * (x[0] - p[0]);
        Some(self.winding * cross / len)
    }

    fn contains_2d(&self, x: [f64; 2], tol: Tolerance) -> bool {
        self.edges()
            .filter_map(|(p, q)| self.edge_distance(p, q, x))
            .all(|dist| !tol.is_less_than(dist, 0.0))
    }

    /// Closed containment of a point assumed to lie in the polygon's plane.
    pub(crate) fn contains_point(&self, point: Point3, tol: Tolerance) -> bool {
        self.contains_2d(self.frame.project(point), tol)
    }

    /// Within tolerance of one of the edge lines. Meant for points already known to be inside.
    pub(crate) fn on_boundary(&self, point: Point3, tol: Tolerance) -> bool {
        let x = self.frame.project(point);
        self.edges()
            .filter_map(|(p, q)| self.edge_distance(p, q, x))
            .any(|dist| tol.approx_zero_f64(dist))
    }

    /// Clip a segment lying in the polygon's plane against the closed polygon.
    pub(crate) fn clip(&self, segment: LineSegment, tol: Tolerance) -> Overlap {
        let a = self.frame.project(segment.a);
        let b = self.frame.project(segment.b);
        let (mut t_lo, mut t_hi) = (0.0_f64, 1.0_f64);

        for (p, q) in self.edges() {
            let (Some(fa), Some(fb)) = (self.edge_distance(p, q, a), self.edge_distance(p, q, b))
            else {
                continue;
            };
            let a_out = tol.is_less_than(fa, 0.0);
            let b_out = tol.is_less_than(fb, 0.0);
            match (a_out, b_out) {
                (true, true) => return Overlap::Empty,
                (false, false) => {}
                (true, false) => t_lo = t_lo.max(tol.clamp(fa / (fa - fb), 0.0, 1.0)),
                (false, true) => t_hi = t_hi.min(tol.clamp(fa / (fa - fb), 0.0, 1.0)),
            }
        }

        let span = (t_hi - t_lo) * segment.length();
        if tol.is_less_than(span, 0.0) {
            Overlap::Empty
        } else if tol.approx_zero_f64(span) {
            Overlap::Point(0.5 * (t_lo + t_hi))
        } else {
            Overlap::Span(t_lo, t_hi)
        }
    }

    /// Both points lie on the same edge line; used to tell contact along the boundary apart
    /// from a crossing through the interior.
    pub(crate) fn on_common_edge(&self, p: Point3, q: Point3, tol: Tolerance) -> bool {
        let p2 = self.frame.project(p);
        let q2 = self.frame.project(q);
        self.edges().any(|(e0, e1)| {
            matches!(
                (self.edge_distance(e0, e1, p2), self.edge_distance(e0, e1, q2)),
                (Some(dp), Some(dq)) if tol.approx_zero_f64(dp) && tol.approx_zero_f64(dq)
            )
        })
    }
}

/// Area-weighted normal, stable for quads whose first three vertices are nearly collinear.
fn newell_normal(points: &[Point3]) -> Vec3 {
    let n = points.len();
    (0..n).fold(Vec3::ZERO, |acc, i| {
        let p = points[i];
        let q = points[(i + 1) % n];
        acc + Vec3::new(
            (p.y - q.y) * (p.z + q.z),
            (p.z - q.z) * (p.x + q.x),
            (p.x - q.x) * (p.y + q.y),
        )
    })
}

fn signed_area(vertices: &[[f64; 2]]) -> f64 {
    let n = vertices.len();
    0.5 * (0..n)
        .map(|i| {
            let p = vertices[i];
            let q = vertices[(i + 1) % n];
            p[0] * q[1] - q[0] * p[1]
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> PlanarPolygon {
        PlanarPolygon::new(&[
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_newell_normal_matches_winding() {
        let square = unit_square();
        assert_relative_eq!(square.plane().c, 1.0);
        assert_relative_eq!(square.plane().d, 0.0);
    }

    #[test]
    fn test_contains_point_closed() {
        let tol = Tolerance::DEFAULT;
        let square = unit_square();
        assert!(square.contains_point(Point3::new(0.5, 0.5, 0.0), tol));
        assert!(square.contains_point(Point3::new(1.0, 0.5, 0.0), tol));
        assert!(square.contains_point(Point3::new(1.0, 1.0, 0.0), tol));
        assert!(!square.contains_point(Point3::new(1.1, 0.5, 0.0), tol));
    }

    #[test]
    fn test_clip_crossing_and_miss() {
        let tol = Tolerance::DEFAULT;
        let square = unit_square();
        let crossing = LineSegment::from_arrays([-1.0, 0.5, 0.0], [3.0, 0.5, 0.0]);
        assert_eq!(square.clip(crossing, tol), Overlap::Span(0.25, 0.5));

        let miss = LineSegment::from_arrays([-1.0, 2.0, 0.0], [3.0, 2.0, 0.0]);
        assert_eq!(square.clip(miss, tol), Overlap::Empty);

        let diagonal_miss = LineSegment::from_arrays([1.5, 0.0, 0.0], [3.0, 1.5, 0.0]);
        assert_eq!(square.clip(diagonal_miss, tol), Overlap::Empty);
    }

    #[test]
    fn test_clip_vertex_touch_is_point() {
        let tol = Tolerance::DEFAULT;
        let square = unit_square();
        let touch = LineSegment::from_arrays([0.0, 2.0, 0.0], [2.0, 0.0, 0.0]);
        assert_eq!(square.clip(touch, tol), Overlap::Point(0.5));
    }

    #[test]
    fn test_on_boundary() {
        let tol = Tolerance::DEFAULT;
        let square = unit_square();
        assert!(square.on_boundary(Point3::new(1.0, 0.3, 0.0), tol));
        assert!(square.on_boundary(Point3::new(0.0, 0.0, 0.0), tol));
        assert!(!square.on_boundary(Point3::new(0.5, 0.5, 0.0), tol));
    }

    #[test]
    fn test_on_common_edge() {
        let tol = Tolerance::DEFAULT;
        let square = unit_square();
        assert!(square.on_common_edge(Point3::new(0.2, 0.0, 0.0), Point3::new(0.7, 0.0, 0.0), tol));
        assert!(!square.on_common_edge(Point3::new(0.0, 0.5, 0.0), Point3::new(1.0, 0.5, 0.0), tol));
    }

    #[test]
    fn test_collinear_points_rejected() {
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(PlanarPolygon::new(&line).is_none());
    }
}
