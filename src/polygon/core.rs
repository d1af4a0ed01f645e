//! Polygon type: an ordered collection of rings.

use super::Ring;
use crate::predicates::default_epsilon;
use crate::primitives::Point2;
use num_traits::Float;

/// A polygon composed of zero or more closed rings.
///
/// Ring order carries no geometric meaning; it only provides index stability
/// during an operation. The filled region is the set of points contained in
/// an odd number of rings (even-odd rule), so holes are simply rings nested
/// inside fills. Boolean operations never mutate their inputs; every result
/// is a newly constructed polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<F> {
    rings: Vec<Ring<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from a list of rings.
    #[inline]
    pub fn new(rings: Vec<Ring<F>>) -> Self {
        Self { rings }
    }

    /// Creates a polygon with a single ring.
    #[inline]
    pub fn from_ring(ring: Ring<F>) -> Self {
        Self { rings: vec![ring] }
    }

    /// Creates a polygon with no rings (the empty region).
    #[inline]
    pub fn empty() -> Self {
        Self { rings: Vec::new() }
    }

    /// Returns the rings in order.
    #[inline]
    pub fn rings(&self) -> &[Ring<F>] {
        &self.rings
    }

    /// Returns true if the polygon has no rings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Tests whether a point is inside the polygon's filled region.
    ///
    /// Even-odd parity across all rings: a point inside an outer ring and a
    /// hole ring (two rings) is outside the filled region.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        let mut crossings_odd = false;
        for ring in &self.rings {
            if ring.contains_point(point) {
                crossings_odd = !crossings_odd;
            }
        }
        crossings_odd
    }

    /// Returns the net enclosed area: ring areas added for fills, subtracted
    /// for holes, as determined by nesting depth among this polygon's rings.
    pub fn area(&self) -> F {
        let mut total = F::zero();
        for (i, ring) in self.rings.iter().enumerate() {
            // The probe is nudged off the boundary so the depth test stays
            // decisive when rings share edges.
            let Some(probe) = ring.interior_probe(default_epsilon()) else {
                continue;
            };
            // Depth = how many other rings enclose this one.
            let mut depth = 0usize;
            for (j, other) in self.rings.iter().enumerate() {
                if i != j && other.contains_point(probe) {
                    depth += 1;
                }
            }
            if depth % 2 == 0 {
                total = total + ring.area();
            } else {
                total = total - ring.area();
            }
        }
        total
    }

    /// Returns the bounding box as `(min, max)` corners, or `None` for an
    /// empty polygon.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let mut points = self.rings.iter().flat_map(|r| r.points().iter());
        let first = *points.next()?;
        let mut min = first;
        let mut max = first;
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}
