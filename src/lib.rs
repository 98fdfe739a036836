//! Intersection, distance and projection queries between a finite 3D line segment and convex
//! primitives: planes, triangles, hexahedra and spheres.
//!
//! Every query is a pure function of value types. Queries with preconditions take a
//! [`GeomContext`] that carries the tolerance and the contract policy for degenerate inputs.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod geom;

pub use geom::{
    ContractMode, GeomContext, GeometryError, Hexahedron, IntersectionCount, LineSegment, Plane,
    PlaneSide, Point3, SegmentIntersection, ShapeKind, SpaceRelation, Sphere, Tolerance,
    Transform, Triangle, Vec3,
};
