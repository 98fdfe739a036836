mod contract;
mod core;
mod hexahedron;
mod intersection;
mod plane;
mod polygon;
mod segment;
mod segment_hexahedron;
mod segment_plane;
mod segment_sphere;
mod segment_transform;
mod segment_triangle;
mod sphere;
mod triangle;

pub use contract::{ContractMode, GeomContext, GeometryError, ShapeKind};
pub use core::{BBox, Point3, Tolerance, Transform, Vec3};
pub use hexahedron::{Hexahedron, point_in_hexahedron};
pub use intersection::{IntersectionCount, SegmentIntersection};
pub use plane::{Plane, PlaneSide, point_plane_side, point_plane_signed_distance};
pub use segment::{LineSegment, SegmentClosestPoints};
pub use segment_hexahedron::{segment_hexahedron_intersection, segment_intersects_hexahedron};
pub use segment_plane::{
    segment_intersects_plane, segment_plane_intersection, segment_plane_max_distance,
    segment_plane_min_distance,
};
pub use segment_sphere::{segment_intersects_sphere, segment_sphere_intersection};
pub use segment_transform::{
    SpaceRelation, project_segment_to_plane, rotate_segment_about_a, segment_space_relation,
    transform_segment, transform_segment_about_center,
};
pub use segment_triangle::{segment_intersects_triangle, segment_triangle_intersection};
pub use sphere::Sphere;
pub use triangle::Triangle;

#[cfg(test)]
mod tests;
