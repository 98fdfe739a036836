use serde::{Deserialize, Serialize};

use super::core::{Point3, Tolerance};
use super::segment::LineSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntersectionCount {
    None,
    One,
    Two,
    Infinite,
}

/// Outcome of a segment query against a shape.
///
/// Points are ordered by where the segment meets them while traversing `a -> b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentIntersection {
    None,
    One(Point3),
    Two(Point3, Point3),
    /// The contact set has positive length; no representative points are reported.
    Infinite,
}

impl SegmentIntersection {
    #[must_use]
    pub const fn count(&self) -> IntersectionCount {
        match self {
            Self::None => IntersectionCount::None,
            Self::One(_) => IntersectionCount::One,
            Self::Two(..) => IntersectionCount::Two,
            Self::Infinite => IntersectionCount::Infinite,
        }
    }

    #[must_use]
    pub const fn intersects(&self) -> bool {
        !matches!(self, Self::None)
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point3> {
        match *self {
            Self::None | Self::Infinite => Vec::new(),
            Self::One(p) => vec![p],
            Self::Two(p, q) => vec![p, q],
        }
    }

    /// First point met along `a -> b`, if any was reported.
    #[must_use]
    pub const fn first(&self) -> Option<Point3> {
        match *self {
            Self::One(p) | Self::Two(p, _) => Some(p),
            Self::None | Self::Infinite => None,
        }
    }
}

/// Intersection candidates tagged with their segment parameter.
///
/// Points that agree on every axis within tolerance are merged; at shared edges of a polyhedron
/// both adjacent faces report the same physical point.
#[derive(Debug)]
pub(crate) struct Candidates {
    hits: Vec<(f64, Point3)>,
    tol: Tolerance,
}

impl Candidates {
    pub(crate) fn new(tol: Tolerance) -> Self {
        Self {
            hits: Vec::with_capacity(4),
            tol,
        }
    }

    pub(crate) fn push(&mut self, t: f64, point: Point3) {
        if self.hits.iter().any(|&(_, p)| self.tol.approx_eq_point3(p, point)) {
            return;
        }
        self.hits.push((t, point));
    }

    /// Collapse the surface contacts of a closed convex solid into a result, given which segment
    /// endpoints lie strictly inside it.
    ///
    /// An interior endpoint is reported only when the segment also crosses the surface somewhere
    /// other than at its own endpoints. With no surface contact, a segment with both endpoints
    /// inside lies entirely in the solid and yields `Infinite`.
    pub(crate) fn close_solid(
        mut self,
        segment: LineSegment,
        a_inside: bool,
        b_inside: bool,
    ) -> SegmentIntersection {
        if self.hits.is_empty() {
            return match (a_inside, b_inside) {
                (true, true) => SegmentIntersection::Infinite,
                (true, false) => SegmentIntersection::One(segment.a),
                (false, true) => SegmentIntersection::One(segment.b),
                (false, false) => SegmentIntersection::None,
            };
        }
        let tol = self.tol;
        let crosses = self.hits.iter().any(|&(_, p)| {
            !tol.approx_eq_point3(p, segment.a) && !tol.approx_eq_point3(p, segment.b)
        });
        if crosses {
            if a_inside {
                self.push(0.0, segment.a);
            }
            if b_inside {
                self.push(1.0, segment.b);
            }
        }
        self.finish()
    }

    /// Collapse into a result. More than two distinct survivors only happens through rounding at
    /// shared vertices; the outermost pair along the segment is kept.
    pub(crate) fn finish(mut self) -> SegmentIntersection {
        self.hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        match self.hits.as_slice() {
            [] => SegmentIntersection::None,
            [(_, p)] => SegmentIntersection::One(*p),
            [(_, first), .., (_, last)] => SegmentIntersection::Two(*first, *last),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_points() {
        let p = Point3::new(1.0, 0.0, 0.0);
        let q = Point3::new(2.0, 0.0, 0.0);
        assert_eq!(SegmentIntersection::None.count(), IntersectionCount::None);
        assert_eq!(SegmentIntersection::One(p).points(), vec![p]);
        assert_eq!(SegmentIntersection::Two(p, q).count(), IntersectionCount::Two);
        assert_eq!(SegmentIntersection::Two(p, q).first(), Some(p));
        assert!(SegmentIntersection::Infinite.points().is_empty());
        assert!(SegmentIntersection::Infinite.intersects());
        assert!(!SegmentIntersection::None.intersects());
    }

    #[test]
    fn test_candidates_dedup_and_order() {
        let mut hits = Candidates::new(Tolerance::DEFAULT);
        hits.push(0.75, Point3::new(0.75, 0.0, 0.0));
        hits.push(0.25, Point3::new(0.25, 0.0, 0.0));
        hits.push(0.75, Point3::new(0.75 + 1e-12, 0.0, 0.0));
        assert_eq!(
            hits.finish(),
            SegmentIntersection::Two(Point3::new(0.25, 0.0, 0.0), Point3::new(0.75, 0.0, 0.0))
        );
    }

    #[test]
    fn test_candidates_keep_outermost_pair() {
        let mut hits = Candidates::new(Tolerance::DEFAULT);
        for t in [0.5, 0.1, 0.9] {
            hits.push(t, Point3::new(t, 0.0, 0.0));
        }
        assert_eq!(
            hits.finish(),
            SegmentIntersection::Two(Point3::new(0.1, 0.0, 0.0), Point3::new(0.9, 0.0, 0.0))
        );
    }

    #[test]
    fn test_candidates_single_and_empty() {
        assert_eq!(Candidates::new(Tolerance::DEFAULT).finish(), SegmentIntersection::None);
        let mut hits = Candidates::new(Tolerance::DEFAULT);
        hits.push(0.5, Point3::ORIGIN);
        hits.push(0.5, Point3::ORIGIN);
        assert_eq!(hits.finish(), SegmentIntersection::One(Point3::ORIGIN));
    }

    #[test]
    fn test_close_solid_interior_endpoints() {
        let tol = Tolerance::DEFAULT;
        let seg = LineSegment::from_arrays([0.0, 0.0, 0.0], [2.0, 0.0, 0.0]);

        assert_eq!(
            Candidates::new(tol).close_solid(seg, true, true),
            SegmentIntersection::Infinite
        );
        assert_eq!(
            Candidates::new(tol).close_solid(seg, false, false),
            SegmentIntersection::None
        );

        let mut exit = Candidates::new(tol);
        exit.push(0.5, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(
            exit.close_solid(seg, true, false),
            SegmentIntersection::Two(seg.a, Point3::new(1.0, 0.0, 0.0))
        );

        // the only contact is the segment's own endpoint on the surface
        let mut touch = Candidates::new(tol);
        touch.push(1.0, seg.b);
        assert_eq!(touch.close_solid(seg, true, false), SegmentIntersection::One(seg.b));
    }
}
