use serde::{Deserialize, Serialize};

use super::contract::{GeomContext, GeometryError, ShapeKind};
use super::core::{Point3, Tolerance, Vec3};

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// Distances are only metric when `(a, b, c)` has unit length; [`Plane::from_points`] and
/// [`Plane::from_point_normal`] return normalized planes, [`Plane::new`] stores the coefficients
/// as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneSide {
    Negative,
    Positive,
    OnPlane,
}

impl Plane {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` with the given normal, normalized.
    #[must_use]
    pub fn from_point_normal(point: Point3, normal: Vec3) -> Option<Self> {
        let n = normal.normalized()?;
        Some(Self::new(n.x, n.y, n.z, -n.dot(point.to_vec3())))
    }

    /// Plane through three points; the normal follows the right-hand rule `p0 -> p1 -> p2`.
    /// Returns `None` when the points are collinear or coincident.
    #[must_use]
    pub fn from_points(p0: Point3, p1: Point3, p2: Point3) -> Option<Self> {
        Self::from_point_normal(p0, (p1 - p0).cross(p2 - p0))
    }

    #[must_use]
    pub const fn normal(self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    /// A plane whose normal is (within tolerance) the zero vector.
    #[must_use]
    pub fn is_null(self, tol: Tolerance) -> bool {
        tol.is_zero_vec3(self.normal())
    }

    /// The same plane with a unit normal, or `None` for a null plane.
    #[must_use]
    pub fn normalize(self) -> Option<Self> {
        let len = self.normal().length();
        if len.is_finite() && len > 0.0 {
            Some(Self::new(self.a / len, self.b / len, self.c / len, self.d / len))
        } else {
            None
        }
    }

    /// Same plane, opposite orientation.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }

    /// `n . p + d`; positive on the side the normal points toward.
    #[must_use]
    pub const fn signed_distance(self, p: Point3) -> f64 {
        self.normal().dot(p.to_vec3()) + self.d
    }

    #[must_use]
    pub fn side(self, p: Point3, tol: Tolerance) -> PlaneSide {
        side_of(self.signed_distance(p), tol)
    }

    #[must_use]
    pub fn contains_point(self, p: Point3, tol: Tolerance) -> bool {
        self.side(p, tol) == PlaneSide::OnPlane
    }

    /// Orthogonal projection `p - dist(p) * n`.
    #[must_use]
    pub fn project_point(self, p: Point3) -> Point3 {
        p - self.normal() * self.signed_distance(p)
    }
}

pub(crate) fn side_of(signed: f64, tol: Tolerance) -> PlaneSide {
    match tol.compare(signed, 0.0) {
        std::cmp::Ordering::Greater => PlaneSide::Positive,
        std::cmp::Ordering::Less => PlaneSide::Negative,
        std::cmp::Ordering::Equal => PlaneSide::OnPlane,
    }
}

/// Report a null plane through the context. In permissive mode the caller continues with the
/// plane as given, so every signed distance collapses to `d`.
pub(crate) fn ensure_plane(plane: Plane, op: &str, ctx: GeomContext) -> Result<(), GeometryError> {
    if plane.is_null(ctx.tolerance) {
        ctx.violation(op, GeometryError::DegenerateShape(ShapeKind::Plane))?;
    }
    Ok(())
}

/// Signed distance of `point` to `plane`, rejecting a null plane under a strict context.
pub fn point_plane_signed_distance(
    point: Point3,
    plane: Plane,
    ctx: GeomContext,
) -> Result<f64, GeometryError> {
    ensure_plane(plane, "point_plane_signed_distance", ctx)?;
    Ok(plane.signed_distance(point))
}

/// Side of `plane` that `point` lies on, rejecting a null plane under a strict context.
pub fn point_plane_side(
    point: Point3,
    plane: Plane,
    ctx: GeomContext,
) -> Result<PlaneSide, GeometryError> {
    ensure_plane(plane, "point_plane_side", ctx)?;
    Ok(plane.side(point, ctx.tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_distance_and_side() {
        let plane = Plane::new(0.0, 1.0, 0.0, -4.0);
        let tol = Tolerance::DEFAULT;
        assert_relative_eq!(plane.signed_distance(Point3::new(3.0, 6.0, -1.0)), 2.0);
        assert_eq!(plane.side(Point3::new(0.0, 6.0, 0.0), tol), PlaneSide::Positive);
        assert_eq!(plane.side(Point3::new(0.0, 1.0, 0.0), tol), PlaneSide::Negative);
        assert_eq!(plane.side(Point3::new(9.0, 4.0 + 1e-12, 2.0), tol), PlaneSide::OnPlane);
        assert_eq!(plane.negated().side(Point3::new(0.0, 6.0, 0.0), tol), PlaneSide::Negative);
    }

    #[test]
    fn test_from_points_is_normalized_right_handed() {
        let plane = Plane::from_points(
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(1.0, 0.0, 2.0),
            Point3::new(0.0, 1.0, 2.0),
        )
        .unwrap();
        assert_relative_eq!(plane.normal().length(), 1.0);
        assert_relative_eq!(plane.c, 1.0);
        assert_relative_eq!(plane.d, -2.0);
    }

    #[test]
    fn test_from_points_collinear_is_none() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Plane::from_points(p, Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0)).is_none());
        assert!(Plane::from_points(p, p, p).is_none());
    }

    #[test]
    fn test_normalize() {
        let plane = Plane::new(1.0, 2.0, 3.0, -4.0).normalize().unwrap();
        let len = 14.0_f64.sqrt();
        assert_relative_eq!(plane.a, 1.0 / len);
        assert_relative_eq!(plane.d, -4.0 / len);
        assert!(Plane::new(0.0, 0.0, 0.0, 1.0).normalize().is_none());
    }

    #[test]
    fn test_project_point_lands_on_plane() {
        let plane = Plane::new(1.0, 2.0, 3.0, -4.0).normalize().unwrap();
        let p = plane.project_point(Point3::new(5.0, 6.0, 7.0));
        assert!(plane.contains_point(p, Tolerance::DEFAULT));
    }

    #[test]
    fn test_null_plane_strict_and_permissive() {
        let null = Plane::new(0.0, 0.0, 0.0, 2.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            point_plane_side(p, null, GeomContext::strict()),
            Err(GeometryError::DegenerateShape(ShapeKind::Plane))
        );
        assert_eq!(point_plane_side(p, null, GeomContext::permissive()), Ok(PlaneSide::Positive));
        assert_eq!(point_plane_signed_distance(p, null, GeomContext::permissive()), Ok(2.0));
    }
}
