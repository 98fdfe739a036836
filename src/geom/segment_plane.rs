use super::contract::{GeomContext, GeometryError};
use super::core::{Point3, Tolerance};
use super::intersection::SegmentIntersection;
use super::plane::{Plane, PlaneSide, ensure_plane, side_of};
use super::segment::LineSegment;

/// Plane-level classification of a segment, keeping the segment parameter of the contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PlaneHit {
    Miss,
    Crossing { t: f64, point: Point3 },
    Coplanar,
}

pub(crate) fn segment_plane_hit(segment: LineSegment, plane: Plane, tol: Tolerance) -> PlaneHit {
    let d_a = plane.signed_distance(segment.a);
    let d_b = plane.signed_distance(segment.b);
    match (side_of(d_a, tol), side_of(d_b, tol)) {
        (PlaneSide::OnPlane, PlaneSide::OnPlane) => PlaneHit::Coplanar,
        (PlaneSide::OnPlane, _) => PlaneHit::Crossing {
            t: 0.0,
            point: segment.a,
        },
        (_, PlaneSide::OnPlane) => PlaneHit::Crossing {
            t: 1.0,
            point: segment.b,
        },
        (PlaneSide::Positive, PlaneSide::Negative) | (PlaneSide::Negative, PlaneSide::Positive) => {
            let t = tol.clamp(d_a / (d_a - d_b), 0.0, 1.0);
            PlaneHit::Crossing {
                t,
                point: segment.point_at(t),
            }
        }
        _ => PlaneHit::Miss,
    }
}

/// Check the segment precondition. Returns `true` when the caller must fall back to a point
/// containment test for `segment.a`.
pub(crate) fn ensure_segment(
    segment: LineSegment,
    op: &str,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    if segment.is_degenerate(ctx.tolerance) {
        ctx.violation(op, GeometryError::DegenerateSegment)?;
        return Ok(true);
    }
    Ok(false)
}

/// Intersection of a segment with a plane.
///
/// `One` carries the crossing point (or the single endpoint lying on the plane); `Infinite`
/// means the whole segment lies in the plane.
pub fn segment_plane_intersection(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<SegmentIntersection, GeometryError> {
    const OP: &str = "segment_plane_intersection";
    let point_only = ensure_segment(segment, OP, ctx)?;
    ensure_plane(plane, OP, ctx)?;

    if point_only {
        return Ok(if plane.contains_point(segment.a, ctx.tolerance) {
            SegmentIntersection::Infinite
        } else {
            SegmentIntersection::None
        });
    }

    Ok(match segment_plane_hit(segment, plane, ctx.tolerance) {
        PlaneHit::Miss => SegmentIntersection::None,
        PlaneHit::Crossing { point, .. } => SegmentIntersection::One(point),
        PlaneHit::Coplanar => SegmentIntersection::Infinite,
    })
}

pub fn segment_intersects_plane(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    segment_plane_intersection(segment, plane, ctx).map(|hit| hit.intersects())
}

/// Smallest distance from any point of the segment to the plane; zero when they touch.
pub fn segment_plane_min_distance(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<f64, GeometryError> {
    ensure_plane(plane, "segment_plane_min_distance", ctx)?;
    let tol = ctx.tolerance;
    let d_a = plane.signed_distance(segment.a);
    let d_b = plane.signed_distance(segment.b);
    Ok(match (side_of(d_a, tol), side_of(d_b, tol)) {
        (PlaneSide::Positive, PlaneSide::Positive) | (PlaneSide::Negative, PlaneSide::Negative) => {
            d_a.abs().min(d_b.abs())
        }
        _ => 0.0,
    })
}

/// Largest distance from any point of the segment to the plane, reached at an endpoint.
pub fn segment_plane_max_distance(
    segment: LineSegment,
    plane: Plane,
    ctx: GeomContext,
) -> Result<f64, GeometryError> {
    ensure_plane(plane, "segment_plane_max_distance", ctx)?;
    let tol = ctx.tolerance;
    let d_a = plane.signed_distance(segment.a);
    let d_b = plane.signed_distance(segment.b);
    if tol.approx_zero_f64(d_a) && tol.approx_zero_f64(d_b) {
        return Ok(0.0);
    }
    Ok(d_a.abs().max(d_b.abs()))
}
