//! Epsilon-aware geometric predicates.
//!
//! All predicates take an explicit tolerance parameter; nothing in this
//! module hides an epsilon. The boolean operations use [`default_epsilon`]
//! unless the caller supplies a tolerance of their own.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// The tolerance used by the convenience boolean entry points.
///
/// Defined as `sqrt(machine epsilon)`: about `1.5e-8` for `f64` and `3.5e-4`
/// for `f32`. Inputs are expected to live in a bounded working coordinate
/// range, so an absolute tolerance is appropriate.
#[inline]
pub fn default_epsilon<F: Float>() -> F {
    F::epsilon().sqrt()
}

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points turn counter-clockwise (positive area).
    CounterClockwise,
    /// Points turn clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// The test is the sign of the cross product of `b - a` and `c - a` (twice
/// the signed area of the triangle); magnitudes below `eps` count as
/// collinear.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Checks whether a point lies on a segment within tolerance.
#[inline]
pub fn point_on_segment<F: Float>(p: Point2<F>, segment: Segment2<F>, eps: F) -> bool {
    segment.distance_squared_to_point(p) <= eps * eps
}

/// One endpoint of a collinear overlap interval, with its parameter on each
/// segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapEnd<F> {
    /// The coordinate of the interval endpoint.
    pub point: Point2<F>,
    /// Parameter along the first segment (0 = start, 1 = end).
    pub t1: F,
    /// Parameter along the second segment.
    pub t2: F,
}

/// Result of a segment intersection test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection<F> {
    /// Segments do not intersect.
    None,
    /// Segments meet at a single point.
    Point {
        /// The intersection point.
        point: Point2<F>,
        /// Parameter along the first segment (0 = start, 1 = end).
        t1: F,
        /// Parameter along the second segment.
        t2: F,
    },
    /// Segments are collinear and share an interval of positive length.
    Overlap {
        /// Start of the shared interval (smaller parameter on segment 1).
        start: OverlapEnd<F>,
        /// End of the shared interval.
        end: OverlapEnd<F>,
    },
}

/// Tests two line segments for intersection, with tolerance.
///
/// Returns `Point` for a single contact (crossings, T-junctions, endpoint
/// touches), `Overlap` when the segments are collinear and share an interval
/// of length greater than `eps`, and `None` otherwise. Pairs whose lines
/// deviate by less than `eps` across the extent of both segments are treated
/// as parallel and resolved by the collinear rules.
pub fn segments_intersect<F: Float>(
    s1: Segment2<F>,
    s2: Segment2<F>,
    eps: F,
) -> SegmentIntersection<F> {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let cross = d1.cross(d2);
    let d = s2.start - s1.start;

    let len1 = s1.length();
    let len2 = s2.length();

    // The raw cross product scales with both lengths (len1 * len2 * sin),
    // so the parallel test normalizes it back to a distance.
    if cross.abs() <= eps * (len1 + len2) {
        return collinear_overlap(s1, s2, eps);
    }

    // Cramer's rule on s1.start + t1*d1 = s2.start + t2*d2.
    let t1 = d.cross(d2) / cross;
    let t2 = d.cross(d1) / cross;

    // Tolerance on the parameters is scaled so that it corresponds to an
    // absolute distance of eps along each segment.
    let p_eps1 = if len1 > eps { eps / len1 } else { F::one() };
    let p_eps2 = if len2 > eps { eps / len2 } else { F::one() };

    if t1 >= -p_eps1 && t1 <= F::one() + p_eps1 && t2 >= -p_eps2 && t2 <= F::one() + p_eps2 {
        let t1 = t1.max(F::zero()).min(F::one());
        let t2 = t2.max(F::zero()).min(F::one());
        SegmentIntersection::Point {
            point: s1.point_at(t1),
            t1,
            t2,
        }
    } else {
        SegmentIntersection::None
    }
}

/// Handles the parallel branch of [`segments_intersect`]: decides between
/// no contact, a single touching point, and a shared interval.
fn collinear_overlap<F: Float>(s1: Segment2<F>, s2: Segment2<F>, eps: F) -> SegmentIntersection<F> {
    let eps_sq = eps * eps;

    // No endpoint of either segment lies near the other: parallel on
    // distinct lines, or collinear without contact. Both directions must be
    // checked, otherwise a segment strictly containing the other looks
    // distinct.
    if s1.distance_squared_to_point(s2.start) > eps_sq
        && s1.distance_squared_to_point(s2.end) > eps_sq
        && s2.distance_squared_to_point(s1.start) > eps_sq
        && s2.distance_squared_to_point(s1.end) > eps_sq
    {
        return SegmentIntersection::None;
    }

    let d1 = s1.direction();
    let len_sq = d1.magnitude_squared();
    if len_sq <= eps_sq {
        // s1 is degenerate; treat as a point probe against s2.
        if point_on_segment(s1.start, s2, eps) {
            let (_, t2) = s2.closest_point(s1.start);
            return SegmentIntersection::Point {
                point: s1.start,
                t1: F::zero(),
                t2,
            };
        }
        return SegmentIntersection::None;
    }

    // Project s2's endpoints into s1's parameter space and clip to [0, 1].
    let u_start = (s2.start - s1.start).dot(d1) / len_sq;
    let u_end = (s2.end - s1.start).dot(d1) / len_sq;
    let (u_min, u_max) = if u_start <= u_end {
        (u_start, u_end)
    } else {
        (u_end, u_start)
    };

    let lo = u_min.max(F::zero());
    let hi = u_max.min(F::one());

    let p_eps = eps / len_sq.sqrt();
    if lo > hi + p_eps {
        return SegmentIntersection::None;
    }

    if hi - lo <= p_eps {
        // Interval shrinks to a single touching point.
        let mid = (lo + hi) * F::from(0.5).unwrap();
        let point = s1.point_at(mid);
        let (_, t2) = s2.closest_point(point);
        return SegmentIntersection::Point {
            point,
            t1: mid.max(F::zero()).min(F::one()),
            t2,
        };
    }

    let start_point = s1.point_at(lo);
    let end_point = s1.point_at(hi);
    let (_, t2_lo) = s2.closest_point(start_point);
    let (_, t2_hi) = s2.closest_point(end_point);

    SegmentIntersection::Overlap {
        start: OverlapEnd {
            point: start_point,
            t1: lo,
            t2: t2_lo,
        },
        end: OverlapEnd {
            point: end_point,
            t1: hi,
            t2: t2_hi,
        },
    }
}
