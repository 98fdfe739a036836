use serde::{Deserialize, Serialize};

use super::core::{Point3, Tolerance, Transform, Vec3};

/// Finite segment between two stored endpoints.
///
/// Storage order matters only for output ordering: intersection points are reported in the order
/// met while walking from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub a: Point3,
    pub b: Point3,
}

/// Closest points between two segments, as parameters on each and the points themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentClosestPoints {
    pub s: f64,
    pub t: f64,
    pub on_self: Point3,
    pub on_other: Point3,
}

impl SegmentClosestPoints {
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.on_self.distance_to(self.on_other)
    }
}

impl LineSegment {
    #[must_use]
    pub const fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub const fn from_arrays(a: [f64; 3], b: [f64; 3]) -> Self {
        Self::new(Point3::from_array(a), Point3::from_array(b))
    }

    /// `b - a`.
    #[must_use]
    pub const fn direction(self) -> Vec3 {
        self.b.sub_point(self.a)
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.direction().length()
    }

    #[must_use]
    pub const fn length_squared(self) -> f64 {
        self.direction().length_squared()
    }

    #[must_use]
    pub fn center(self) -> Point3 {
        self.a.midpoint(self.b)
    }

    /// Interpolates from the nearer endpoint, so `t = 0` and `t = 1` return `a` and `b` exactly.
    #[must_use]
    pub fn point_at(self, t: f64) -> Point3 {
        if t <= 0.5 {
            self.a.lerp(self.b, t)
        } else {
            self.b.lerp(self.a, 1.0 - t)
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Endpoints coincide within tolerance.
    #[must_use]
    pub fn is_degenerate(self, tol: Tolerance) -> bool {
        tol.approx_eq_point3(self.a, self.b)
    }

    /// Parameter of the point on the segment closest to `p`, clamped to `[0, 1]`.
    #[must_use]
    pub fn closest_parameter(self, p: Point3) -> f64 {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq <= 0.0 {
            return 0.0;
        }
        ((p - self.a).dot(dir) / len_sq).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn closest_point_to(self, p: Point3) -> Point3 {
        self.point_at(self.closest_parameter(p))
    }

    #[must_use]
    pub fn min_distance_to_point(self, p: Point3) -> f64 {
        self.closest_point_to(p).distance_to(p)
    }

    /// Distance to the farther endpoint, or zero when `p` lies on the segment.
    #[must_use]
    pub fn max_distance_to_point(self, p: Point3, tol: Tolerance) -> f64 {
        if self.contains_point(p, tol) {
            return 0.0;
        }
        self.a.distance_to(p).max(self.b.distance_to(p))
    }

    #[must_use]
    pub fn contains_point(self, p: Point3, tol: Tolerance) -> bool {
        tol.approx_zero_f64(self.min_distance_to_point(p))
    }

    /// Closest points between `self` and `other`, robust to either segment being a point.
    #[must_use]
    pub fn closest_points(self, other: Self) -> SegmentClosestPoints {
        let d1 = self.direction();
        let d2 = other.direction();
        let r = self.a - other.a;
        let a = d1.length_squared();
        let e = d2.length_squared();
        let f = d2.dot(r);

        let (s, t) = if a <= f64::EPSILON && e <= f64::EPSILON {
            (0.0, 0.0)
        } else if a <= f64::EPSILON {
            (0.0, (f / e).clamp(0.0, 1.0))
        } else {
            let c = d1.dot(r);
            if e <= f64::EPSILON {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else {
                let b = d1.dot(d2);
                let denom = a * e - b * b;
                // parallel segments: any s works, start from self.a
                let mut s = if denom > f64::EPSILON * a * e {
                    ((b * f - c * e) / denom).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let mut t = (b * s + f) / e;
                if t < 0.0 {
                    t = 0.0;
                    s = (-c / a).clamp(0.0, 1.0);
                } else if t > 1.0 {
                    t = 1.0;
                    s = ((b - c) / a).clamp(0.0, 1.0);
                }
                (s, t)
            }
        };

        SegmentClosestPoints {
            s,
            t,
            on_self: self.point_at(s),
            on_other: other.point_at(t),
        }
    }

    #[must_use]
    pub fn min_distance_to_segment(self, other: Self) -> f64 {
        self.closest_points(other).distance()
    }

    #[must_use]
    pub fn intersects_segment(self, other: Self, tol: Tolerance) -> bool {
        tol.approx_zero_f64(self.min_distance_to_segment(other))
    }

    #[must_use]
    pub fn translate(self, offset: Vec3) -> Self {
        Self::new(self.a + offset, self.b + offset)
    }

    #[must_use]
    pub fn transform(self, t: Transform) -> Self {
        Self::new(t.apply_point(self.a), t.apply_point(self.b))
    }

    /// Scale about the center. A factor of `0` collapses the segment onto its center.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        self.scale_about(self.center(), factor)
    }

    /// Scale keeping `a` fixed.
    #[must_use]
    pub fn scale_from_a(self, factor: f64) -> Self {
        self.scale_about(self.a, factor)
    }

    /// Scale keeping `b` fixed.
    #[must_use]
    pub fn scale_from_b(self, factor: f64) -> Self {
        self.scale_about(self.b, factor)
    }

    fn scale_about(self, pivot: Point3, factor: f64) -> Self {
        Self::new(
            pivot + (self.a - pivot) * factor,
            pivot + (self.b - pivot) * factor,
        )
    }
}
