//! Closed boundary rings.

use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;

/// A closed boundary loop of a polygon.
///
/// Points are stored without repeating the first point at the end; the last
/// point connects implicitly back to the first. The `hole` flag records
/// whether the producer considers this ring to subtract area from its
/// polygon. The flag is bookkeeping only: it may disagree with the ring's
/// geometric winding, and the boolean engine reconciles the two through
/// even-odd parity rather than trusting either blindly.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    points: Vec<Point2<F>>,
    hole: bool,
}

impl<F: Float> Ring<F> {
    /// Creates a ring from points and an explicit hole flag.
    #[inline]
    pub fn new(points: Vec<Point2<F>>, hole: bool) -> Self {
        Self { points, hole }
    }

    /// Creates a fill ring (hole flag unset).
    #[inline]
    pub fn filled(points: Vec<Point2<F>>) -> Self {
        Self::new(points, false)
    }

    /// Creates a hole ring (hole flag set).
    #[inline]
    pub fn hole(points: Vec<Point2<F>>) -> Self {
        Self::new(points, true)
    }

    /// Returns the ring's points in order, closing point not repeated.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Returns the number of points (equal to the number of segments).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the advisory hole flag.
    #[inline]
    pub fn is_hole(&self) -> bool {
        self.hole
    }

    /// Returns the point at `index`, wrapping past the end.
    #[inline]
    pub fn point(&self, index: usize) -> Point2<F> {
        self.points[index % self.points.len()]
    }

    /// Returns segment `index`, from point `index` to the next point
    /// (wrapping at the end).
    #[inline]
    pub fn segment(&self, index: usize) -> Segment2<F> {
        let n = self.points.len();
        Segment2::new(self.points[index % n], self.points[(index + 1) % n])
    }

    /// Returns the signed area via the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        if self.points.len() < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + self.points[i].x * self.points[j].y;
            area = area - self.points[j].x * self.points[i].y;
        }
        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute enclosed area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns true if the ring winds clockwise (negative signed area).
    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < F::zero()
    }

    /// Tests whether a point is inside this single ring via even-odd ray
    /// casting. Points on the boundary may report either way.
    pub fn contains_point(&self, point: Point2<F>) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.points[i];
            let vj = self.points[j];
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Returns the ring with reversed point order and flipped hole flag.
    pub fn inverted(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self {
            points,
            hole: !self.hole,
        }
    }

    /// Returns a copy with the hole flag replaced.
    pub(crate) fn with_hole_flag(&self, hole: bool) -> Self {
        Self {
            points: self.points.clone(),
            hole,
        }
    }

    /// A point just inside the ring's enclosed region: the midpoint of its
    /// longest edge, nudged toward the interior side given by the winding.
    /// Staying off the boundary keeps even-odd tests against other rings
    /// decisive even when rings share edges.
    pub(crate) fn interior_probe(&self, eps: F) -> Option<Point2<F>> {
        if self.len() < 3 {
            return None;
        }

        let mut best = 0;
        let mut best_len = F::neg_infinity();
        for i in 0..self.len() {
            let len = self.segment(i).length_squared();
            if len > best_len {
                best_len = len;
                best = i;
            }
        }

        let edge = self.segment(best);
        let d = edge.direction();
        let mag = d.magnitude();
        if mag <= F::zero() {
            return None;
        }

        // Interior lies to the left of travel for CCW rings, to the right
        // for CW rings.
        let normal = Vec2::new(-d.y / mag, d.x / mag);
        let side = if self.is_clockwise() {
            -F::one()
        } else {
            F::one()
        };
        Some(edge.point_at(F::from(0.5).unwrap()) + normal * (side * eps))
    }
}
