use super::contract::{GeomContext, GeometryError, ShapeKind};
use super::core::BBox;
use super::hexahedron::Hexahedron;
use super::intersection::{Candidates, SegmentIntersection};
use super::segment::LineSegment;
use super::segment_plane::ensure_segment;
use super::segment_triangle::{FaceHit, segment_face_hit};

/// Intersection of a segment with a closed, convex hexahedron.
///
/// Reports where the segment's passage through the solid begins and ends:
/// - `None` when they do not meet;
/// - `One` when they meet in a single point: a graze at a vertex, an edge or a face, or an
///   endpoint on the surface with the rest of the segment inside;
/// - `Two` with the entry and exit points, an interior endpoint standing in for a missing
///   entry or exit;
/// - `Infinite` when the segment runs along the surface for a positive length, or lies
///   strictly inside the solid.
pub fn segment_hexahedron_intersection(
    segment: LineSegment,
    hexahedron: Hexahedron,
    ctx: GeomContext,
) -> Result<SegmentIntersection, GeometryError> {
    const OP: &str = "segment_hexahedron_intersection";
    let tol = ctx.tolerance;
    let point_only = ensure_segment(segment, OP, ctx)?;

    if hexahedron.is_degenerate(tol) {
        ctx.violation(OP, GeometryError::DegenerateShape(ShapeKind::Hexahedron))?;
        let p = hexahedron.a;
        return Ok(if point_only {
            if tol.approx_eq_point3(segment.a, p) {
                SegmentIntersection::Infinite
            } else {
                SegmentIntersection::None
            }
        } else if segment.contains_point(p, tol) {
            SegmentIntersection::One(p)
        } else {
            SegmentIntersection::None
        });
    }

    if point_only {
        return Ok(if hexahedron.contains_point(segment.a, tol) {
            SegmentIntersection::Infinite
        } else {
            SegmentIntersection::None
        });
    }

    let reach = BBox::new(segment.a, segment.a).expand_point(segment.b);
    if !hexahedron.bbox().expand_tolerance(tol).intersects(reach) {
        return Ok(SegmentIntersection::None);
    }

    let mut hits = Candidates::new(tol);
    for face in hexahedron.face_polygons().iter().flatten() {
        match segment_face_hit(segment, face, tol) {
            FaceHit::Miss => {}
            FaceHit::Point { t, point } => hits.push(t, point),
            FaceHit::Span { .. } => return Ok(SegmentIntersection::Infinite),
        }
    }

    Ok(hits.close_solid(
        segment,
        hexahedron.is_interior_point(segment.a, tol),
        hexahedron.is_interior_point(segment.b, tol),
    ))
}

pub fn segment_intersects_hexahedron(
    segment: LineSegment,
    hexahedron: Hexahedron,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    segment_hexahedron_intersection(segment, hexahedron, ctx).map(|hit| hit.intersects())
}
