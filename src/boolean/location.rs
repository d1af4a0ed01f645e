//! Boundary locations: canonical addresses of points on a ring.

use num_traits::Float;
use std::cmp::Ordering;

/// A position on a polygon's boundary: ring index, segment index within the
/// ring, and fractional position along that segment.
///
/// `ratio = 0` is the segment's start vertex and `ratio = 1` its end vertex.
/// Those two encodings name the same physical vertex; [`canonicalized`]
/// collapses a near-1 ratio onto the next segment's start so that one vertex
/// never appears under two addresses in a sorted crossing list.
///
/// Locations order by ring, then segment, then ratio, all ascending. They
/// are only comparable within one polygon's indexing scheme.
///
/// [`canonicalized`]: BoundaryLocation::canonicalized
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLocation<F> {
    /// Index of the ring within its polygon.
    pub ring: usize,
    /// Index of the segment within the ring.
    pub segment: usize,
    /// Fractional position along the segment, in `[0, 1]`.
    pub ratio: F,
}

impl<F: Float> BoundaryLocation<F> {
    /// Creates a boundary location.
    ///
    /// The ratio must lie in `[0, 1]`; this is debug-asserted. Negative
    /// indices are unrepresentable by construction.
    #[inline]
    pub fn new(ring: usize, segment: usize, ratio: F) -> Self {
        debug_assert!(
            ratio >= F::zero() && ratio <= F::one(),
            "segment ratio out of [0, 1]"
        );
        Self {
            ring,
            segment,
            ratio,
        }
    }

    /// Collapses the 0/1 vertex ambiguity onto a single canonical form.
    ///
    /// A ratio within `ratio_eps` of 1 becomes ratio 0 on the following
    /// segment (wrapping past the last segment of a ring with
    /// `segment_count` segments); a ratio within `ratio_eps` of 0 snaps to
    /// exactly 0.
    pub fn canonicalized(self, segment_count: usize, ratio_eps: F) -> Self {
        if self.ratio >= F::one() - ratio_eps {
            Self {
                ring: self.ring,
                segment: (self.segment + 1) % segment_count,
                ratio: F::zero(),
            }
        } else if self.ratio <= ratio_eps {
            Self {
                ring: self.ring,
                segment: self.segment,
                ratio: F::zero(),
            }
        } else {
            self
        }
    }

    /// Strict total order: ring, then segment, then ratio.
    ///
    /// Ratios are finite by construction, so the partial float comparison
    /// never fails in practice; a NaN would compare equal.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.ring
            .cmp(&other.ring)
            .then(self.segment.cmp(&other.segment))
            .then(self.ratio.partial_cmp(&other.ratio).unwrap_or(Ordering::Equal))
    }

    /// True if both locations address the same point within `ratio_eps`
    /// along the segment.
    pub fn approx_eq(&self, other: &Self, ratio_eps: F) -> bool {
        self.ring == other.ring
            && self.segment == other.segment
            && (self.ratio - other.ratio).abs() <= ratio_eps
    }

    /// Scalar key `segment + ratio`, used for cyclic arithmetic along one
    /// ring.
    pub(crate) fn scalar_key(&self) -> F {
        F::from(self.segment).unwrap() + self.ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_ring_then_segment_then_ratio() {
        let a: BoundaryLocation<f64> = BoundaryLocation::new(0, 2, 0.9);
        let b = BoundaryLocation::new(1, 0, 0.0);
        let c = BoundaryLocation::new(0, 3, 0.1);
        let d = BoundaryLocation::new(0, 2, 0.95);

        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(a.total_cmp(&c), Ordering::Less);
        assert_eq!(a.total_cmp(&d), Ordering::Less);
        assert_eq!(d.total_cmp(&a), Ordering::Greater);
        assert_eq!(a.total_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn test_canonicalize_end_vertex_wraps() {
        let loc: BoundaryLocation<f64> = BoundaryLocation::new(0, 3, 1.0);
        let canon = loc.canonicalized(4, 1e-9);
        assert_eq!(canon.segment, 0);
        assert_eq!(canon.ratio, 0.0);
    }

    #[test]
    fn test_canonicalize_near_end_vertex() {
        let loc: BoundaryLocation<f64> = BoundaryLocation::new(0, 1, 1.0 - 1e-12);
        let canon = loc.canonicalized(4, 1e-9);
        assert_eq!(canon.segment, 2);
        assert_eq!(canon.ratio, 0.0);
    }

    #[test]
    fn test_canonicalize_near_start_snaps() {
        let loc: BoundaryLocation<f64> = BoundaryLocation::new(0, 1, 1e-12);
        let canon = loc.canonicalized(4, 1e-9);
        assert_eq!(canon.segment, 1);
        assert_eq!(canon.ratio, 0.0);
    }

    #[test]
    fn test_canonicalize_interior_unchanged() {
        let loc: BoundaryLocation<f64> = BoundaryLocation::new(2, 1, 0.5);
        assert_eq!(loc.canonicalized(4, 1e-9), loc);
    }

    #[test]
    fn test_vertex_ambiguity_resolves_to_equal() {
        // The same physical vertex addressed as end-of-segment-1 and
        // start-of-segment-2 must canonicalize to one address.
        let as_end: BoundaryLocation<f64> = BoundaryLocation::new(0, 1, 1.0);
        let as_start = BoundaryLocation::new(0, 2, 0.0);
        assert_eq!(
            as_end.canonicalized(4, 1e-9),
            as_start.canonicalized(4, 1e-9)
        );
    }
}
