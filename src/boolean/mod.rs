//! Boolean operations between polygons.
//!
//! The pipeline shared by all binary operations:
//!
//! 1. [`crossing`]: find every intersection between the two boundaries.
//! 2. [`fragment`]: split each ring at its crossings and classify every arc
//!    against the other polygon.
//! 3. Keep the arcs the requested operation selects (see the table on
//!    [`BooleanOp`]).
//! 4. [`assemble`]: stitch kept arcs into closed rings at the crossing
//!    nodes and recompute hole flags from nesting parity.
//!
//! Inputs are never mutated; independent operations may run concurrently on
//! shared polygons. A ring with no crossings flows through the same pipeline
//! as a single closed arc, which covers the fully nested, fully disjoint,
//! and hole-enclosed configurations without a separate path.
//!
//! Exactly coincident boundaries have no universally correct result. Here
//! every shared edge classifies as same-direction coincident and is kept
//! only on the A side, so for two identical polygons: union and
//! intersection return A's boundary, difference and xor return the empty
//! polygon. Inputs whose rings self-intersect violate a documented
//! precondition; the result is unspecified but the call still returns.

mod assemble;
mod crossing;
mod fragment;
mod location;

pub use crossing::CrossingDiagnostics;
pub use location::BoundaryLocation;

use crate::error::OverlayError;
use crate::polygon::{Polygon, Ring};
use crate::predicates::default_epsilon;
use assemble::{assemble, assign_hole_flags};
use crossing::find_crossings;
use fragment::{build_fragments, Fragment, FragmentKind, Owner};
use num_traits::Float;

/// The available boolean operations.
///
/// Arc selection per operation (coincident arcs are taken from A only, so
/// shared edges appear exactly once in a result):
///
/// | Operation    | kept from A                 | kept from B        |
/// |--------------|-----------------------------|--------------------|
/// | Union        | outside, coincident-same    | outside            |
/// | Intersection | inside, coincident-same     | inside             |
/// | Difference   | outside, coincident-opposite| inside, reversed   |
/// | Xor          | composed: (A−B) plus (B−A)  |                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Region covered by A or B.
    Union,
    /// Region covered by both A and B.
    Intersection,
    /// Region covered by A but not B.
    Difference,
    /// Region covered by exactly one of A and B.
    Xor,
}

/// Computes the union of two polygons with the default epsilon.
///
/// # Example
///
/// ```
/// use overlay2d::{union, Point2, Polygon, Ring};
///
/// let a: Polygon<f64> = Polygon::from_ring(Ring::filled(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]));
/// let b = Polygon::from_ring(Ring::filled(vec![
///     Point2::new(1.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 1.0),
///     Point2::new(1.0, 1.0),
/// ]));
///
/// // Two boxes sharing an edge merge into one ring.
/// let merged = union(&a, &b).unwrap();
/// assert_eq!(merged.rings().len(), 1);
/// assert!((merged.area() - 2.0).abs() < 1e-10);
/// ```
pub fn union<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Result<Polygon<F>, OverlayError> {
    union_with_epsilon(a, b, default_epsilon())
}

/// Computes the union of two polygons with an explicit epsilon.
pub fn union_with_epsilon<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Result<Polygon<F>, OverlayError> {
    Ok(boolean_op_with_diagnostics(a, b, BooleanOp::Union, eps)?.0)
}

/// Computes the intersection of two polygons with the default epsilon.
///
/// Returns the empty polygon when the filled regions share no area, shared
/// boundary edges included (a shared edge has zero area).
pub fn intersection<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Result<Polygon<F>, OverlayError> {
    intersection_with_epsilon(a, b, default_epsilon())
}

/// Computes the intersection of two polygons with an explicit epsilon.
pub fn intersection_with_epsilon<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Result<Polygon<F>, OverlayError> {
    Ok(boolean_op_with_diagnostics(a, b, BooleanOp::Intersection, eps)?.0)
}

/// Computes the difference `A − B` with the default epsilon.
///
/// A subtrahend that fully covers A yields the empty polygon.
///
/// # Example
///
/// ```
/// use overlay2d::{difference, Point2, Polygon, Ring};
///
/// let outer = Polygon::from_ring(Ring::filled(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]));
/// let inner = Polygon::from_ring(Ring::filled(vec![
///     Point2::new(0.25, 0.25),
///     Point2::new(0.75, 0.25),
///     Point2::new(0.75, 0.75),
///     Point2::new(0.25, 0.75),
/// ]));
///
/// // Subtracting a fully nested square punches a hole.
/// let result = difference(&outer, &inner).unwrap();
/// assert_eq!(result.rings().len(), 2);
/// assert_eq!(result.rings().iter().filter(|r| r.is_hole()).count(), 1);
/// ```
pub fn difference<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Result<Polygon<F>, OverlayError> {
    difference_with_epsilon(a, b, default_epsilon())
}

/// Computes the difference `A − B` with an explicit epsilon.
pub fn difference_with_epsilon<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Result<Polygon<F>, OverlayError> {
    Ok(boolean_op_with_diagnostics(a, b, BooleanOp::Difference, eps)?.0)
}

/// Computes the symmetric difference of two polygons with the default
/// epsilon.
pub fn xor<F: Float>(a: &Polygon<F>, b: &Polygon<F>) -> Result<Polygon<F>, OverlayError> {
    xor_with_epsilon(a, b, default_epsilon())
}

/// Computes the symmetric difference with an explicit epsilon.
///
/// Composed as `(A − B) ∪ (B − A)`; the two partial results have disjoint
/// interiors, so their rings are pooled and hole flags recomputed over the
/// combined set.
pub fn xor_with_epsilon<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    eps: F,
) -> Result<Polygon<F>, OverlayError> {
    Ok(boolean_op_with_diagnostics(a, b, BooleanOp::Xor, eps)?.0)
}

/// Runs the operation selected by `op`.
pub fn boolean_op<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    op: BooleanOp,
    eps: F,
) -> Result<Polygon<F>, OverlayError> {
    Ok(boolean_op_with_diagnostics(a, b, op, eps)?.0)
}

/// Runs the operation selected by `op` and also returns the crossing
/// finder's counters for conditions it resolved silently, such as
/// zero-length input edges it had to skip.
pub fn boolean_op_with_diagnostics<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    op: BooleanOp,
    eps: F,
) -> Result<(Polygon<F>, CrossingDiagnostics), OverlayError> {
    validate(a, "A")?;
    validate(b, "B")?;

    Ok(match op {
        BooleanOp::Xor => {
            // Both difference passes scan the same segments, so the first
            // pass's counters already cover the pair.
            let (mut rings, diagnostics) = combine(a, b, BooleanOp::Difference, eps);
            let (more, _) = combine(b, a, BooleanOp::Difference, eps);
            rings.extend(more);
            (Polygon::new(assign_hole_flags(rings, eps)), diagnostics)
        }
        _ => {
            let (rings, diagnostics) = combine(a, b, op, eps);
            (Polygon::new(rings), diagnostics)
        }
    })
}

/// Flips every ring's fill/hole sense by reversing its point order and
/// toggling its hole flag. Total: valid for any polygon, and applying it
/// twice returns a ring-for-ring equal copy of the input.
///
/// # Example
///
/// ```
/// use overlay2d::{invert, Point2, Polygon, Ring};
///
/// let a = Polygon::from_ring(Ring::filled(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
/// ]));
///
/// let flipped = invert(&a);
/// assert!(flipped.rings()[0].is_hole());
/// assert_eq!(invert(&flipped), a);
/// ```
pub fn invert<F: Float>(a: &Polygon<F>) -> Polygon<F> {
    Polygon::new(a.rings().iter().map(Ring::inverted).collect())
}

/// Rejects rings that cannot enclose area before any geometric work.
fn validate<F: Float>(poly: &Polygon<F>, operand: &'static str) -> Result<(), OverlayError> {
    for (i, ring) in poly.rings().iter().enumerate() {
        if ring.len() < 3 {
            return Err(OverlayError::InvalidRing {
                operand,
                ring: i,
                points: ring.len(),
            });
        }
    }
    Ok(())
}

/// Shared pipeline for union, intersection, and difference.
fn combine<F: Float>(
    a: &Polygon<F>,
    b: &Polygon<F>,
    op: BooleanOp,
    eps: F,
) -> (Vec<Ring<F>>, CrossingDiagnostics) {
    let set = find_crossings(a, b, eps);

    let mut kept: Vec<Fragment<F>> = Vec::new();
    for frag in build_fragments(a, b, Owner::A, &set, eps) {
        if keeps(op, Owner::A, frag.kind) {
            kept.push(frag);
        }
    }
    for mut frag in build_fragments(b, a, Owner::B, &set, eps) {
        if keeps(op, Owner::B, frag.kind) {
            if op == BooleanOp::Difference {
                // The bite taken out of A is traced along B's boundary
                // walked backwards.
                frag.reverse();
            }
            kept.push(frag);
        }
    }

    (assemble(&kept, set.node_points.len(), eps), set.diagnostics)
}

/// Arc selection rule; see the table on [`BooleanOp`].
fn keeps(op: BooleanOp, owner: Owner, kind: FragmentKind) -> bool {
    match (op, owner) {
        (BooleanOp::Union, Owner::A) => {
            matches!(kind, FragmentKind::Outside | FragmentKind::CoincidentSame)
        }
        (BooleanOp::Union, Owner::B) => matches!(kind, FragmentKind::Outside),
        (BooleanOp::Intersection, Owner::A) => {
            matches!(kind, FragmentKind::Inside | FragmentKind::CoincidentSame)
        }
        (BooleanOp::Intersection, Owner::B) => matches!(kind, FragmentKind::Inside),
        (BooleanOp::Difference, Owner::A) => matches!(
            kind,
            FragmentKind::Outside | FragmentKind::CoincidentOpposite
        ),
        (BooleanOp::Difference, Owner::B) => matches!(kind, FragmentKind::Inside),
        (BooleanOp::Xor, _) => unreachable!("xor is composed from two differences"),
    }
}
