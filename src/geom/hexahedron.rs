use serde::{Deserialize, Serialize};

use super::contract::{GeomContext, GeometryError, ShapeKind};
use super::core::{BBox, Point3, Tolerance, Transform, Vec3};
use super::plane::Plane;
use super::polygon::PlanarPolygon;
use super::segment::LineSegment;

/// Convex solid with eight vertices and six planar quadrilateral faces.
///
/// Vertex layout, shown for the unit cube centred at the origin:
///
/// ```text
///        A(-,+,+) ---- D(+,+,+)          top    ABCD (+y)
///       /|            /|                 bottom EFGH (-y)
///   B(-,+,-) ---- C(+,+,-)               front  AEFD (+z)
///      | E(-,-,+) --|- F(+,-,+)          left   ABHE (-x)
///      |/           |/                   back   BCGH (-z)
///   H(-,-,-) ---- G(+,-,-)               right  CDFG (+x)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hexahedron {
    pub a: Point3,
    pub b: Point3,
    pub c: Point3,
    pub d: Point3,
    pub e: Point3,
    pub f: Point3,
    pub g: Point3,
    pub h: Point3,
}

impl Hexahedron {
    /// Vertices in `A..H` order.
    #[must_use]
    pub const fn from_vertices(v: [Point3; 8]) -> Self {
        Self {
            a: v[0],
            b: v[1],
            c: v[2],
            d: v[3],
            e: v[4],
            f: v[5],
            g: v[6],
            h: v[7],
        }
    }

    /// Axis-aligned cube of edge length one centred at the origin.
    #[must_use]
    pub fn unit_cube() -> Self {
        Self::from_center_and_lengths(Point3::ORIGIN, 1.0, 1.0, 1.0)
    }

    /// Axis-aligned box spanned by the opposite corners `A` and `G`.
    #[must_use]
    pub const fn from_corners(a: Point3, g: Point3) -> Self {
        Self::from_vertices([
            a,
            Point3::new(a.x, a.y, g.z),
            Point3::new(g.x, a.y, g.z),
            Point3::new(g.x, a.y, a.z),
            Point3::new(a.x, g.y, a.z),
            Point3::new(g.x, g.y, a.z),
            g,
            Point3::new(a.x, g.y, g.z),
        ])
    }

    /// Axis-aligned box with the given edge lengths along x, y and z.
    #[must_use]
    pub fn from_center_and_lengths(center: Point3, lx: f64, ly: f64, lz: f64) -> Self {
        let half = Vec3::new(0.5 * lx, 0.5 * ly, 0.5 * lz);
        Self::from_corners(
            Point3::new(center.x - half.x, center.y + half.y, center.z + half.z),
            Point3::new(center.x + half.x, center.y - half.y, center.z - half.z),
        )
    }

    #[must_use]
    pub const fn vertices(self) -> [Point3; 8] {
        [self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h]
    }

    /// Faces in boundary order: ABCD, EFGH, AEFD, ABHE, BCGH, CDFG.
    #[must_use]
    pub const fn faces(self) -> [[Point3; 4]; 6] {
        [
            [self.a, self.b, self.c, self.d],
            [self.e, self.f, self.g, self.h],
            [self.a, self.e, self.f, self.d],
            [self.a, self.b, self.h, self.e],
            [self.b, self.c, self.g, self.h],
            [self.c, self.d, self.f, self.g],
        ]
    }

    #[must_use]
    pub const fn edges(self) -> [LineSegment; 12] {
        [
            LineSegment::new(self.a, self.b),
            LineSegment::new(self.b, self.c),
            LineSegment::new(self.c, self.d),
            LineSegment::new(self.d, self.a),
            LineSegment::new(self.e, self.f),
            LineSegment::new(self.f, self.g),
            LineSegment::new(self.g, self.h),
            LineSegment::new(self.h, self.e),
            LineSegment::new(self.a, self.e),
            LineSegment::new(self.b, self.h),
            LineSegment::new(self.c, self.g),
            LineSegment::new(self.d, self.f),
        ]
    }

    #[must_use]
    pub fn center(self) -> Point3 {
        let sum = self
            .vertices()
            .iter()
            .fold(Vec3::ZERO, |acc, p| acc + p.to_vec3());
        Point3::ORIGIN + sum / 8.0
    }

    /// Normalized face planes with normals pointing away from the solid, in [`Self::faces`]
    /// order. A face that collapsed to a line or a point has no plane.
    #[must_use]
    pub fn face_planes(self) -> [Option<Plane>; 6] {
        self.face_polygons().map(|face| face.map(|polygon| polygon.plane()))
    }

    /// All eight vertices coincide.
    #[must_use]
    pub fn is_degenerate(self, tol: Tolerance) -> bool {
        self.vertices().iter().all(|&v| tol.approx_eq_point3(v, self.a))
    }

    /// Closed containment: interior, faces, edges and vertices all count as inside.
    ///
    /// A degenerate hexahedron contains only its single point.
    #[must_use]
    pub fn contains_point(self, p: Point3, tol: Tolerance) -> bool {
        if self.is_degenerate(tol) {
            return tol.approx_eq_point3(p, self.a);
        }
        self.face_planes()
            .iter()
            .flatten()
            .all(|plane| !tol.is_greater_than(plane.signed_distance(p), 0.0))
    }

    /// Strictly inside: farther than the tolerance from every face plane.
    #[must_use]
    pub fn is_interior_point(self, p: Point3, tol: Tolerance) -> bool {
        !self.is_degenerate(tol)
            && self
                .face_planes()
                .iter()
                .flatten()
                .all(|plane| tol.is_less_than(plane.signed_distance(p), 0.0))
    }

    #[must_use]
    pub fn bbox(self) -> BBox {
        let v = self.vertices();
        v.iter()
            .skip(1)
            .fold(BBox::new(v[0], v[0]), |bbox, &p| bbox.expand_point(p))
    }

    #[must_use]
    pub fn transform(self, t: Transform) -> Self {
        Self::from_vertices(self.vertices().map(|v| t.apply_point(v)))
    }

    /// Face polygons oriented so that their planes face outward.
    pub(crate) fn face_polygons(self) -> [Option<PlanarPolygon>; 6] {
        let center = self.center();
        self.faces().map(|face| {
            let polygon = PlanarPolygon::new(&face)?;
            Some(if polygon.plane().signed_distance(center) > 0.0 {
                polygon.flipped()
            } else {
                polygon
            })
        })
    }
}

impl Default for Hexahedron {
    fn default() -> Self {
        Self::unit_cube()
    }
}

/// Point containment, rejecting a degenerate hexahedron under a strict context.
pub fn point_in_hexahedron(
    point: Point3,
    hexahedron: Hexahedron,
    ctx: GeomContext,
) -> Result<bool, GeometryError> {
    if hexahedron.is_degenerate(ctx.tolerance) {
        ctx.violation(
            "point_in_hexahedron",
            GeometryError::DegenerateShape(ShapeKind::Hexahedron),
        )?;
    }
    Ok(hexahedron.contains_point(point, ctx.tolerance))
}
