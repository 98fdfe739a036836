use super::contract::{GeomContext, GeometryError, ShapeKind};
use super::intersection::{Candidates, SegmentIntersection};
use super::segment::LineSegment;
use super::segment_plane::ensure_segment;
use super::sphere::Sphere;

/// Intersection of a segment with a solid sphere, following the hexahedron convention: the
/// surface crossings, an interior endpoint standing in for a missing entry or exit, and
/// `Infinite` for a segment lying strictly inside the ball.
pub fn segment_sphere_intersection(
    segment: LineSegment,
    sphere: Sphere,
    ctx: GeomContext,
) -> Result<SegmentIntersection, GeometryError> {
    const OP: &str = "segment_sphere_intersection";
    let tol = ctx.tolerance;
    let point_only = ensure_segment(segment, OP, ctx)?;
    if sphere.is_degenerate() {
        ctx.violation(OP, GeometryError::DegenerateShape(ShapeKind::Sphere))?;
    }

    if point_only {
        return Ok(if sphere.contains_point(segment.a, tol) {
            SegmentIntersection::Infinite
        } else {
            SegmentIntersection::None
        });
    }

    let radius = sphere.effective_radius();
    let dir = segment.direction();
    let len = segment.length();
    let t_mid = (sphere.center - segment.a).dot(dir) / (len * len);
    let dist = segment.point_at(t_mid).distance_to(sphere.center);
    if tol.is_greater_than(dist, radius) {
        return Ok(SegmentIntersection::None);
    }

    let half_chord = (radius * radius - dist * dist).max(0.0).sqrt() / len;
    let mut contacts = Candidates::new(tol);
    for t in [t_mid - half_chord, t_mid + half_chord] {
        if !tol.is_less_than(t * len, 0.0) && !tol.is_greater_than(t * len, len) {
            let t = t.clamp(0.0, 1.0);
            contacts.push(t, segment.point_at(t));
        }
    }

    Ok(contacts.close_solid(
        segment,
        sphere.is_interior_point(segment.a, tol),
        sphere.is_interior_point(segment.b, tol),
    ))
}

pub fn segment_intersects_sphere(
    segment: LineSegment,
    sphere: Sphere,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    segment_sphere_intersection(segment, sphere, ctx).map(|hit| hit.intersects())
}
