use serde::{Deserialize, Serialize};

use super::core::{Point3, Tolerance, Transform, Vec3};
use super::plane::Plane;
use super::polygon::PlanarPolygon;
use super::segment::LineSegment;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
}

impl Triangle {
    #[must_use]
    pub const fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub const fn vertices(self) -> [Point3; 3] {
        [self.a, self.b, self.c]
    }

    /// Unnormalized normal `(b - a) x (c - a)`; its length is twice the area.
    #[must_use]
    pub const fn normal(self) -> Vec3 {
        self.b.sub_point(self.a).cross(self.c.sub_point(self.a))
    }

    /// Normalized supporting plane, `None` for a degenerate triangle.
    #[must_use]
    pub fn plane(self) -> Option<Plane> {
        Plane::from_point_normal(self.a, self.normal())
    }

    #[must_use]
    pub fn centroid(self) -> Point3 {
        Point3::new(
            (self.a.x + self.b.x + self.c.x) / 3.0,
            (self.a.y + self.b.y + self.c.y) / 3.0,
            (self.a.z + self.b.z + self.c.z) / 3.0,
        )
    }

    #[must_use]
    pub const fn edges(self) -> [LineSegment; 3] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.a),
        ]
    }

    /// Two coincident vertices, or all three collinear: the height over the longest edge
    /// vanishes within tolerance.
    #[must_use]
    pub fn is_degenerate(self, tol: Tolerance) -> bool {
        let longest = self.longest_edge();
        if longest.is_degenerate(tol) {
            return true;
        }
        let height = self.normal().length() / longest.length();
        tol.approx_zero_f64(height)
    }

    /// The edge between the two farthest-apart vertices. For a degenerate triangle this is the
    /// whole point set.
    #[must_use]
    pub fn longest_edge(self) -> LineSegment {
        let [ab, bc, ca] = self.edges();
        [bc, ca]
            .into_iter()
            .fold(ab, |best, e| if e.length_squared() > best.length_squared() { e } else { best })
    }

    /// Closed containment: on the supporting plane and inside or on the boundary.
    #[must_use]
    pub fn contains_point(self, p: Point3, tol: Tolerance) -> bool {
        if self.is_degenerate(tol) {
            return self.longest_edge().contains_point(p, tol);
        }
        let Some(polygon) = self.polygon() else {
            return false;
        };
        polygon.plane().contains_point(p, tol) && polygon.contains_point(p, tol)
    }

    #[must_use]
    pub fn transform(self, t: Transform) -> Self {
        Self::new(t.apply_point(self.a), t.apply_point(self.b), t.apply_point(self.c))
    }

    pub(crate) fn polygon(self) -> Option<PlanarPolygon> {
        PlanarPolygon::new(&self.vertices())
    }
}
