use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{
    GeomContext, Hexahedron, IntersectionCount, LineSegment, Point3, SegmentIntersection,
    Transform, Vec3, point_in_hexahedron, segment_hexahedron_intersection,
    segment_intersects_hexahedron,
};

#[test]
fn diagonal_across_cube_face_touches_edge_midpoint() {
    let seg = LineSegment::from_arrays([0.0, 1.0, 0.0], [1.0, 0.0, 0.0]);
    let hit = segment_hexahedron_intersection(seg, Hexahedron::unit_cube(), GeomContext::new());
    assert_eq!(hit, Ok(SegmentIntersection::One(Point3::new(0.5, 0.5, 0.0))));
}

fn random_point(rng: &mut StdRng, half: f64) -> Point3 {
    Point3::new(
        rng.random_range(-half..half),
        rng.random_range(-half..half),
        rng.random_range(-half..half),
    )
}

#[test]
fn segment_with_interior_endpoint_never_misses() {
    let mut rng = StdRng::seed_from_u64(31);
    let ctx = GeomContext::new();
    let cube = Hexahedron::unit_cube();
    for _ in 0..500 {
        let inside = random_point(&mut rng, 0.45);
        let other = random_point(&mut rng, 3.0);
        let hit = segment_hexahedron_intersection(LineSegment::new(inside, other), cube, ctx)
            .unwrap();
        assert_ne!(hit.count(), IntersectionCount::None, "{inside:?} -> {other:?}");
        if cube.is_interior_point(other, ctx.tolerance) {
            assert_eq!(hit, SegmentIntersection::Infinite);
        } else {
            assert_eq!(hit.count(), IntersectionCount::Two, "{inside:?} -> {other:?}");
            assert_eq!(hit.first(), Some(inside));
        }
    }
}

#[test]
fn intersects_matches_hexahedron_intersection_count() {
    let mut rng = StdRng::seed_from_u64(32);
    let ctx = GeomContext::new();
    let tilt = Transform::rotate_axis(Vec3::new(1.0, 2.0, 0.5), 0.6).unwrap();
    let hex = Hexahedron::unit_cube().transform(tilt);
    let mut hits = 0;
    for _ in 0..500 {
        let seg = LineSegment::new(random_point(&mut rng, 1.5), random_point(&mut rng, 1.5));
        let count = segment_hexahedron_intersection(seg, hex, ctx).unwrap().count();
        let intersects = segment_intersects_hexahedron(seg, hex, ctx).unwrap();
        assert_eq!(intersects, count != IntersectionCount::None);
        let backward = segment_hexahedron_intersection(seg.reversed(), hex, ctx).unwrap();
        assert_eq!(count, backward.count());
        if intersects {
            hits += 1;
        }
    }
    assert!(hits > 0);
}

#[test]
fn fully_inside_segment_is_infinite() {
    let hex = Hexahedron::from_center_and_lengths(Point3::new(10.0, -2.0, 3.0), 4.0, 2.0, 6.0);
    let seg = LineSegment::from_arrays([9.0, -2.5, 1.0], [11.0, -1.5, 5.0]);
    assert_eq!(
        segment_hexahedron_intersection(seg, hex, GeomContext::new()),
        Ok(SegmentIntersection::Infinite)
    );

    let point = LineSegment::new(seg.a, seg.a);
    assert_eq!(
        segment_hexahedron_intersection(point, hex, GeomContext::permissive()),
        Ok(SegmentIntersection::Infinite)
    );
}

#[test]
fn interior_endpoint_resting_on_face_is_one() {
    let hex = Hexahedron::from_center_and_lengths(Point3::new(10.0, -2.0, 3.0), 4.0, 2.0, 6.0);
    let seg = LineSegment::from_arrays([9.0, -2.5, 1.0], [12.0, -1.5, 5.0]);
    assert_eq!(
        segment_hexahedron_intersection(seg, hex, GeomContext::new()),
        Ok(SegmentIntersection::One(seg.b))
    );
}

#[test]
fn moved_cube_follows_its_transform() {
    let ctx = GeomContext::new();
    let moved = Hexahedron::unit_cube().transform(Transform::translate(Vec3::new(5.0, 0.0, 0.0)));
    let seg = LineSegment::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
    assert_eq!(segment_intersects_hexahedron(seg, moved, ctx), Ok(false));
    assert_eq!(point_in_hexahedron(Point3::new(5.25, 0.0, 0.0), moved, ctx), Ok(true));

    let long = LineSegment::from_arrays([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let SegmentIntersection::Two(p, q) = segment_hexahedron_intersection(long, moved, ctx).unwrap()
    else {
        panic!("expected two points");
    };
    approx::assert_relative_eq!(p.x, 4.5, epsilon = 1e-12);
    approx::assert_relative_eq!(q.x, 5.5, epsilon = 1e-12);
}
