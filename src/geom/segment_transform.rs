use serde::{Deserialize, Serialize};

use super::contract::{GeomContext, GeometryError};
use super::core::Transform;
use super::plane::{Plane, PlaneSide, ensure_plane};
use super::segment::LineSegment;

/// Where a segment lies relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceRelation {
    NegativeSide,
    PositiveSide,
    /// Endpoints on opposite sides, or exactly one endpoint on the plane.
    BothSides,
    /// Both endpoints on the plane.
    Contained,
}

/// Orthogonal projection of both endpoints onto `plane`.
///
/// The plane should be normalized: the offset applied is `signed_distance * normal`, so a scaled
/// plane equation moves points by a scaled amount.
pub fn project_segment_to_plane(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<LineSegment, GeometryError> {
    ensure_plane(plane, "project_segment_to_plane", ctx)?;
    Ok(LineSegment::new(
        plane.project_point(segment.a),
        plane.project_point(segment.b),
    ))
}

pub fn segment_space_relation(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<SpaceRelation, GeometryError> {
    ensure_plane(plane, "segment_space_relation", ctx)?;
    let tol = ctx.tolerance;
    Ok(match (plane.side(segment.a, tol), plane.side(segment.b, tol)) {
        (PlaneSide::OnPlane, PlaneSide::OnPlane) => SpaceRelation::Contained,
        (PlaneSide::Negative, PlaneSide::Negative) => SpaceRelation::NegativeSide,
        (PlaneSide::Positive, PlaneSide::Positive) => SpaceRelation::PositiveSide,
        _ => SpaceRelation::BothSides,
    })
}

#[must_use]
pub fn transform_segment(segment: LineSegment, transform: Transform) -> LineSegment {
    segment.transform(transform)
}

/// Apply `transform` with the segment's center as the fixed point.
#[must_use]
pub fn transform_segment_about_center(segment: LineSegment, transform: Transform) -> LineSegment {
    segment.transform(transform.about_pivot(segment.center()))
}

/// Apply a rotation (or any linear transform) keeping endpoint `a` fixed.
#[must_use]
pub fn rotate_segment_about_a(segment: LineSegment, rotation: Transform) -> LineSegment {
    segment.transform(rotation.about_pivot(segment.a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::contract::ShapeKind;
    use crate::geom::core::{Point3, Tolerance, Vec3};
    use approx::assert_relative_eq;

    fn ground() -> Plane {
        Plane::new(0.0, 1.0, 0.0, 0.0)
    }

    fn seg(a: [f64; 3], b: [f64; 3]) -> LineSegment {
        LineSegment::from_arrays(a, b)
    }

    #[test]
    fn test_space_relation_cases() {
        let ctx = GeomContext::new();
        let rel = |s| segment_space_relation(s, ground(), ctx).unwrap();
        assert_eq!(rel(seg([0.0, 1.0, 0.0], [3.0, 2.0, 0.0])), SpaceRelation::PositiveSide);
        assert_eq!(rel(seg([0.0, -1.0, 0.0], [3.0, -2.0, 0.0])), SpaceRelation::NegativeSide);
        assert_eq!(rel(seg([0.0, -1.0, 0.0], [3.0, 2.0, 0.0])), SpaceRelation::BothSides);
        assert_eq!(rel(seg([0.0, 0.0, 0.0], [3.0, 2.0, 0.0])), SpaceRelation::BothSides);
        assert_eq!(rel(seg([0.0, -2.0, 0.0], [3.0, 0.0, 0.0])), SpaceRelation::BothSides);
        assert_eq!(rel(seg([0.0, 0.0, 0.0], [3.0, 0.0, 7.0])), SpaceRelation::Contained);
    }

    #[test]
    fn test_projection_flattens_and_is_idempotent() {
        let ctx = GeomContext::new();
        let plane = Plane::new(1.0, 2.0, 3.0, -4.0).normalize().unwrap();
        let s = seg([5.0, 6.0, 7.0], [-1.0, 0.5, 2.0]);
        let once = project_segment_to_plane(s, plane, ctx).unwrap();
        let twice = project_segment_to_plane(once, plane, ctx).unwrap();
        assert_relative_eq!(plane.signed_distance(once.a), 0.0, epsilon = 1e-12);
        assert_relative_eq!(plane.signed_distance(once.b), 0.0, epsilon = 1e-12);
        assert!(Tolerance::DEFAULT.approx_eq_point3(once.a, twice.a));
        assert!(Tolerance::DEFAULT.approx_eq_point3(once.b, twice.b));
    }

    #[test]
    fn test_projection_depends_on_normalization() {
        let ctx = GeomContext::new();
        let scaled = Plane::new(0.0, 2.0, 0.0, 0.0);
        let s = seg([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
        let projected = project_segment_to_plane(s, scaled, ctx).unwrap();
        assert_eq!(projected.a, Point3::new(0.0, -3.0, 0.0));
        let normalized = project_segment_to_plane(s, scaled.normalize().unwrap(), ctx).unwrap();
        assert_eq!(normalized.a, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_null_plane_modes() {
        let null = Plane::new(0.0, 0.0, 0.0, -1.0);
        let s = seg([0.0, 1.0, 0.0], [1.0, 1.0, 0.0]);
        assert_eq!(
            segment_space_relation(s, null, GeomContext::strict()),
            Err(GeometryError::DegenerateShape(ShapeKind::Plane))
        );
        assert_eq!(
            segment_space_relation(s, null, GeomContext::permissive()),
            Ok(SpaceRelation::NegativeSide)
        );
        assert_eq!(project_segment_to_plane(s, null, GeomContext::permissive()), Ok(s));
    }

    #[test]
    fn test_transforms_keep_pivots() {
        let tol = Tolerance::DEFAULT;
        let s = seg([1.0, 0.0, 0.0], [3.0, 0.0, 0.0]);
        let quarter = Transform::rotate_z(std::f64::consts::FRAC_PI_2);

        let about_a = rotate_segment_about_a(s, quarter);
        assert!(tol.approx_eq_point3(about_a.a, s.a));
        assert!(tol.approx_eq_point3(about_a.b, Point3::new(1.0, 2.0, 0.0)));

        let about_center = transform_segment_about_center(s, quarter);
        assert!(tol.approx_eq_point3(about_center.a, Point3::new(2.0, -1.0, 0.0)));
        assert!(tol.approx_eq_point3(about_center.b, Point3::new(2.0, 1.0, 0.0)));

        let moved = transform_segment(s, Transform::translate(Vec3::new(0.0, 0.0, 5.0)));
        assert_eq!(moved, seg([1.0, 0.0, 5.0], [3.0, 0.0, 5.0]));
    }
}
