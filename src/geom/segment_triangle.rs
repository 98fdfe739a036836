use super::contract::{GeomContext, GeometryError, ShapeKind};
use super::core::{Point3, Tolerance};
use super::intersection::SegmentIntersection;
use super::polygon::{Overlap, PlanarPolygon};
use super::segment::LineSegment;
use super::segment_plane::{PlaneHit, ensure_segment, segment_plane_hit};
use super::triangle::Triangle;

/// Contact between a segment and one planar convex face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FaceHit {
    Miss,
    Point { t: f64, point: Point3 },
    /// Coplanar overlap of positive length between parameters `t0 < t1`.
    Span { t0: f64, t1: f64, along_edge: bool },
}

/// Plane classification first, then containment of the crossing point, or an in-plane clip
/// when the segment is coplanar with the face.
pub(crate) fn segment_face_hit(
    segment: LineSegment,
    face: &PlanarPolygon,
    tol: Tolerance,
) -> FaceHit {
    match segment_plane_hit(segment, face.plane(), tol) {
        PlaneHit::Miss => FaceHit::Miss,
        PlaneHit::Crossing { t, point } => {
            if face.contains_point(point, tol) {
                FaceHit::Point { t, point }
            } else {
                FaceHit::Miss
            }
        }
        PlaneHit::Coplanar => match face.clip(segment, tol) {
            Overlap::Empty => FaceHit::Miss,
            Overlap::Point(t) => FaceHit::Point {
                t,
                point: segment.point_at(t),
            },
            Overlap::Span(t0, t1) => FaceHit::Span {
                t0,
                t1,
                along_edge: face.on_common_edge(segment.point_at(t0), segment.point_at(t1), tol),
            },
        },
    }
}

/// Intersection of a segment with a closed triangle.
///
/// A segment crossing the triangle's plane yields `One` when the crossing is inside the
/// triangle. A coplanar segment is classified by its overlap with the triangle:
/// - `One` for a single touching point, or an endpoint on the boundary with the rest inside;
/// - `Two` for the boundary points where it enters and leaves, an interior endpoint standing in
///   for a missing entry or exit;
/// - `Infinite` when the overlap runs along an edge or the whole segment is strictly inside.
pub fn segment_triangle_intersection(
    segment: LineSegment,
    triangle: Triangle,
    ctx: GeomContext,
) -> Result<SegmentIntersection, GeometryError> {
    const OP: &str = "segment_triangle_intersection";
    let tol = ctx.tolerance;
    let point_only = ensure_segment(segment, OP, ctx)?;

    let face = if triangle.is_degenerate(tol) {
        ctx.violation(OP, GeometryError::DegenerateShape(ShapeKind::Triangle))?;
        None
    } else {
        triangle.polygon()
    };
    let Some(face) = face else {
        return Ok(collapsed_triangle_intersection(segment, triangle, point_only, tol));
    };

    if point_only {
        return Ok(if triangle.contains_point(segment.a, tol) {
            SegmentIntersection::Infinite
        } else {
            SegmentIntersection::None
        });
    }

    Ok(match segment_face_hit(segment, &face, tol) {
        FaceHit::Miss => SegmentIntersection::None,
        FaceHit::Point { point, .. } => SegmentIntersection::One(point),
        FaceHit::Span {
            along_edge: true, ..
        } => SegmentIntersection::Infinite,
        FaceHit::Span { t0, t1, .. } => coplanar_overlap(segment, &face, t0, t1, tol),
    })
}

/// Classify the overlap `[t0, t1]` of a coplanar segment with the triangle by whether each end
/// lies on the triangle's boundary or strictly inside it.
///
/// An interior end is always one of the segment's endpoints. It is reported only alongside a
/// boundary point where the segment enters or leaves the triangle; when the other end is the
/// segment's own endpoint resting on the boundary, that boundary point is the single contact.
fn coplanar_overlap(
    segment: LineSegment,
    face: &PlanarPolygon,
    t0: f64,
    t1: f64,
    tol: Tolerance,
) -> SegmentIntersection {
    let p0 = segment.point_at(t0);
    let p1 = segment.point_at(t1);
    match (face.on_boundary(p0, tol), face.on_boundary(p1, tol)) {
        (true, true) => SegmentIntersection::Two(p0, p1),
        (false, false) => SegmentIntersection::Infinite,
        (true, false) if tol.approx_eq_point3(p0, segment.a) => SegmentIntersection::One(p0),
        (false, true) if tol.approx_eq_point3(p1, segment.b) => SegmentIntersection::One(p1),
        _ => SegmentIntersection::Two(p0, p1),
    }
}

pub fn segment_intersects_triangle(
    segment: LineSegment,
    triangle: Triangle,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    segment_triangle_intersection(segment, triangle, ctx).map(|hit| hit.intersects())
}

/// A degenerate triangle is the segment between its farthest vertices (or a single point).
fn collapsed_triangle_intersection(
    segment: LineSegment,
    triangle: Triangle,
    point_only: bool,
    tol: Tolerance,
) -> SegmentIntersection {
    let hull = triangle.longest_edge();
    if point_only {
        return if hull.contains_point(segment.a, tol) {
            SegmentIntersection::Infinite
        } else {
            SegmentIntersection::None
        };
    }
    if hull.is_degenerate(tol) {
        return if segment.contains_point(hull.a, tol) {
            SegmentIntersection::One(hull.a)
        } else {
            SegmentIntersection::None
        };
    }

    let closest = segment.closest_points(hull);
    if !tol.approx_zero_f64(closest.distance()) {
        return SegmentIntersection::None;
    }

    let Some(axis) = segment.direction().normalized() else {
        return SegmentIntersection::None;
    };
    let Some(hull_axis) = hull.direction().normalized() else {
        return SegmentIntersection::None;
    };
    if !tol.is_zero_vec3(axis.cross(hull_axis)) {
        return SegmentIntersection::One(closest.on_self);
    }

    // collinear: overlap of the two parameter ranges along `segment`
    let len_sq = segment.length_squared();
    let s0 = (hull.a - segment.a).dot(segment.direction()) / len_sq;
    let s1 = (hull.b - segment.a).dot(segment.direction()) / len_sq;
    let lo = s0.min(s1).max(0.0);
    let hi = s0.max(s1).min(1.0);
    if tol.is_greater_than((hi - lo) * segment.length(), 0.0) {
        SegmentIntersection::Infinite
    } else {
        SegmentIntersection::One(segment.point_at(lo))
    }
}
