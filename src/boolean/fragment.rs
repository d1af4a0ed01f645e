//! Boundary fragments: the arcs between consecutive crossings on one ring.
//!
//! Each ring of a polygon is split at its sorted crossings into open
//! fragments; a ring with no crossings at all becomes a single closed
//! whole-ring fragment. Every fragment is classified against the *other*
//! polygon: strictly inside its filled region, strictly outside, or
//! coincident with one of its edges (same or opposite traversal direction).
//! Fragments are transient working data for a single operation call.

use super::crossing::CrossingSet;
use super::location::BoundaryLocation;
use crate::polygon::Polygon;
use crate::predicates::point_on_segment;
use crate::primitives::Point2;
use num_traits::Float;

/// Which operand a fragment's ring belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
    A,
    B,
}

/// A fragment's relationship to the other polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FragmentKind {
    /// Strictly inside the other polygon's filled region.
    Inside,
    /// Strictly outside the other polygon's filled region.
    Outside,
    /// On an edge of the other polygon, traversed in the same direction.
    CoincidentSame,
    /// On an edge of the other polygon, traversed in the opposite direction.
    CoincidentOpposite,
}

/// An arc of one ring between two crossing nodes, or a whole crossing-free
/// ring (`start`/`end` are `None` and the point list is an unclosed cycle).
#[derive(Debug, Clone)]
pub(crate) struct Fragment<F> {
    pub owner: Owner,
    /// The arc's points in traversal order, both endpoints included for
    /// open fragments.
    pub points: Vec<Point2<F>>,
    /// Node id the arc leaves from (`None` for whole rings).
    pub start: Option<usize>,
    /// Node id the arc arrives at (`None` for whole rings).
    pub end: Option<usize>,
    pub kind: FragmentKind,
}

impl<F: Float> Fragment<F> {
    /// True for a whole-ring fragment with no crossing endpoints.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.start.is_none()
    }

    /// Reverses the traversal direction in place (used when difference
    /// splices B's boundary walked backwards).
    pub fn reverse(&mut self) {
        self.points.reverse();
        std::mem::swap(&mut self.start, &mut self.end);
    }
}

/// Splits every ring of `poly` at its crossings and classifies the
/// resulting fragments against `other`.
pub(crate) fn build_fragments<F: Float>(
    poly: &Polygon<F>,
    other: &Polygon<F>,
    owner: Owner,
    set: &CrossingSet<F>,
    eps: F,
) -> Vec<Fragment<F>> {
    let mut fragments = Vec::new();

    for (ring_index, ring) in poly.rings().iter().enumerate() {
        if ring.is_empty() {
            continue;
        }

        // Crossings on this ring, in boundary order.
        let mut cuts: Vec<(BoundaryLocation<F>, usize)> = set
            .crossings
            .iter()
            .filter_map(|c| {
                let loc = match owner {
                    Owner::A => c.a,
                    Owner::B => c.b,
                };
                (loc.ring == ring_index).then_some((loc, c.node))
            })
            .collect();
        cuts.sort_by(|x, y| x.0.total_cmp(&y.0));
        cuts.dedup_by(|x, first| {
            // Same physical location on this ring implies the same node.
            x.0.segment == first.0.segment && (x.0.ratio - first.0.ratio).abs() <= ratio_tiny()
        });

        if cuts.is_empty() {
            let points = ring.points().to_vec();
            let kind = classify(&points, true, other, eps);
            fragments.push(Fragment {
                owner,
                points,
                start: None,
                end: None,
                kind,
            });
            continue;
        }

        let n = ring.len();
        let n_f = F::from(n).unwrap();
        for k in 0..cuts.len() {
            let (from, from_node) = cuts[k];
            let (to, to_node) = cuts[(k + 1) % cuts.len()];

            // Arc length in location-key space; a single crossing wraps the
            // whole way around back to itself.
            let mut span = to.scalar_key() - from.scalar_key();
            if cuts.len() == 1 {
                span = n_f;
            } else if span <= F::zero() {
                span = span + n_f;
            }

            let mut points = vec![set.node_points[from_node]];
            let mut j = 1usize;
            loop {
                let dv = F::from(j).unwrap() - from.ratio;
                if dv >= span - ratio_tiny::<F>() || j > n {
                    break;
                }
                points.push(ring.point(from.segment + j));
                j += 1;
            }
            points.push(set.node_points[to_node]);

            let kind = classify(&points, false, other, eps);
            fragments.push(Fragment {
                owner,
                points,
                start: Some(from_node),
                end: Some(to_node),
                kind,
            });
        }
    }

    fragments
}

/// Classifies an arc against the other polygon.
///
/// The probe is the midpoint of the arc's longest sub-segment, which keeps
/// it away from the arc's crossing endpoints where inside/outside is
/// ambiguous. Coincidence is checked first: a probe on one of the other
/// polygon's edges makes the whole arc a shared-boundary fragment, with the
/// direction read from the dot product of the two traversal directions.
fn classify<F: Float>(
    points: &[Point2<F>],
    closed: bool,
    other: &Polygon<F>,
    eps: F,
) -> FragmentKind {
    let Some((probe_start, probe_end)) = longest_sub_segment(points, closed) else {
        return FragmentKind::Outside;
    };
    let probe = probe_start.midpoint(probe_end);
    let direction = probe_end - probe_start;

    for ring in other.rings() {
        for i in 0..ring.len() {
            let edge = ring.segment(i);
            if edge.length() <= eps {
                continue;
            }
            if point_on_segment(probe, edge, eps) {
                return if direction.dot(edge.direction()) >= F::zero() {
                    FragmentKind::CoincidentSame
                } else {
                    FragmentKind::CoincidentOpposite
                };
            }
        }
    }

    if other.contains_point(probe) {
        FragmentKind::Inside
    } else {
        FragmentKind::Outside
    }
}

/// Returns the endpoints of the longest consecutive point pair, including
/// the wrapping pair for closed arcs.
fn longest_sub_segment<F: Float>(
    points: &[Point2<F>],
    closed: bool,
) -> Option<(Point2<F>, Point2<F>)> {
    if points.len() < 2 {
        return None;
    }

    let pair_count = if closed {
        points.len()
    } else {
        points.len() - 1
    };

    let mut best = None;
    let mut best_len = F::neg_infinity();
    for i in 0..pair_count {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        let len = p.distance_squared(q);
        if len > best_len {
            best_len = len;
            best = Some((p, q));
        }
    }
    best
}

/// Slack for comparisons in location-key space. Canonicalized crossing
/// ratios are exact at vertices, so this only absorbs float noise from the
/// span arithmetic.
#[inline]
fn ratio_tiny<F: Float>() -> F {
    F::from(1e-9).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boolean::crossing::find_crossings;
    use crate::polygon::Ring;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring<f64> {
        Ring::filled(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    const EPS: f64 = 1e-9;

    #[test]
    fn test_crossing_boxes_fragments() {
        let a = Polygon::from_ring(square(0.0, 0.0, 1.0, 1.0));
        let b = Polygon::from_ring(square(0.5, 0.5, 1.5, 1.5));
        let set = find_crossings(&a, &b, EPS);

        let frags = build_fragments(&a, &b, Owner::A, &set, EPS);
        assert_eq!(frags.len(), 2);

        let inside: Vec<_> = frags
            .iter()
            .filter(|f| f.kind == FragmentKind::Inside)
            .collect();
        let outside: Vec<_> = frags
            .iter()
            .filter(|f| f.kind == FragmentKind::Outside)
            .collect();
        assert_eq!(inside.len(), 1);
        assert_eq!(outside.len(), 1);

        // The inside arc runs through A's corner at (1,1).
        assert!(inside[0]
            .points
            .iter()
            .any(|p| *p == Point2::new(1.0, 1.0)));
        // The outside arc carries A's other three corners.
        assert_eq!(outside[0].points.len(), 5);
    }

    #[test]
    fn test_no_crossings_whole_ring_fragment() {
        let a = Polygon::from_ring(square(0.0, 0.0, 1.0, 1.0));
        let b = Polygon::from_ring(square(0.25, 0.25, 0.75, 0.75));
        let set = find_crossings(&a, &b, EPS);
        assert!(set.crossings.is_empty());

        let frags_a = build_fragments(&a, &b, Owner::A, &set, EPS);
        assert_eq!(frags_a.len(), 1);
        assert!(frags_a[0].is_closed());
        assert_eq!(frags_a[0].kind, FragmentKind::Outside);

        let frags_b = build_fragments(&b, &a, Owner::B, &set, EPS);
        assert_eq!(frags_b.len(), 1);
        assert!(frags_b[0].is_closed());
        assert_eq!(frags_b[0].kind, FragmentKind::Inside);
    }

    #[test]
    fn test_shared_edge_coincident_directions() {
        let a = Polygon::from_ring(square(0.0, 0.0, 1.0, 1.0));
        let b = Polygon::from_ring(square(1.0, 0.0, 2.0, 1.0));
        let set = find_crossings(&a, &b, EPS);

        let frags = build_fragments(&a, &b, Owner::A, &set, EPS);
        assert_eq!(frags.len(), 2);

        // Two CCW fills sharing an edge traverse it in opposite directions.
        let coincident: Vec<_> = frags
            .iter()
            .filter(|f| f.kind == FragmentKind::CoincidentOpposite)
            .collect();
        assert_eq!(coincident.len(), 1);
        assert_eq!(coincident[0].points.len(), 2);

        assert!(frags.iter().any(|f| f.kind == FragmentKind::Outside));
    }

    #[test]
    fn test_identical_squares_all_coincident_same() {
        let a = Polygon::from_ring(square(0.0, 0.0, 1.0, 1.0));
        let b = Polygon::from_ring(square(0.0, 0.0, 1.0, 1.0));
        let set = find_crossings(&a, &b, EPS);

        let frags = build_fragments(&a, &b, Owner::A, &set, EPS);
        assert!(!frags.is_empty());
        assert!(frags
            .iter()
            .all(|f| f.kind == FragmentKind::CoincidentSame));
    }

    #[test]
    fn test_fragment_reverse_swaps_nodes() {
        let mut frag = Fragment {
            owner: Owner::B,
            points: vec![Point2::new(0.0_f64, 0.0), Point2::new(1.0, 0.0)],
            start: Some(3),
            end: Some(7),
            kind: FragmentKind::Inside,
        };
        frag.reverse();
        assert_eq!(frag.start, Some(7));
        assert_eq!(frag.end, Some(3));
        assert_eq!(frag.points[0], Point2::new(1.0, 0.0));
    }
}
