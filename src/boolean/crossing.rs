//! Crossing finder: enumerates every boundary intersection between two
//! polygons.
//!
//! Every segment of A is tested against every segment of B. Single-point
//! contacts produce one crossing; collinear overlaps produce crossings at
//! both interval endpoints (the interior of the overlap is a coincident
//! fragment, handled by classification, not here). Vertex touches are
//! de-duplicated through location canonicalization, and crossings whose
//! points fall within epsilon of each other are merged into shared nodes so
//! that ring assembly can splice by node identity.

use super::location::BoundaryLocation;
use crate::polygon::Polygon;
use crate::predicates::{segments_intersect, SegmentIntersection};
use crate::primitives::Point2;
use num_traits::Float;

/// One boundary crossing: a location on each polygon plus the shared point.
#[derive(Debug, Clone)]
pub(crate) struct Crossing<F> {
    /// Canonical location on polygon A.
    pub a: BoundaryLocation<F>,
    /// Canonical location on polygon B.
    pub b: BoundaryLocation<F>,
    /// Node id after coordinate clustering; crossings within epsilon of
    /// each other share a node.
    pub node: usize,
}

/// Counters for numeric conditions that an operation resolved silently.
///
/// Returned by [`boolean_op_with_diagnostics`](super::boolean_op_with_diagnostics)
/// for callers that want to know when inputs were degenerate enough to need
/// skipping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrossingDiagnostics {
    /// Input segments shorter than epsilon, skipped during crossing
    /// detection.
    pub degenerate_segments: usize,
}

/// The full crossing set for one operation.
#[derive(Debug)]
pub(crate) struct CrossingSet<F> {
    /// All de-duplicated crossings, sorted by (A location, B location).
    pub crossings: Vec<Crossing<F>>,
    /// Representative point per node id.
    pub node_points: Vec<Point2<F>>,
    pub diagnostics: CrossingDiagnostics,
}

/// Finds all crossings between the boundaries of `a` and `b`.
pub(crate) fn find_crossings<F: Float>(a: &Polygon<F>, b: &Polygon<F>, eps: F) -> CrossingSet<F> {
    let mut diagnostics = CrossingDiagnostics::default();
    for poly in [a, b] {
        for ring in poly.rings() {
            for i in 0..ring.len() {
                if ring.segment(i).length() <= eps {
                    diagnostics.degenerate_segments += 1;
                }
            }
        }
    }

    // Raw records: (location on A, location on B, point).
    let mut records: Vec<(BoundaryLocation<F>, BoundaryLocation<F>, Point2<F>)> = Vec::new();

    for (ra, ring_a) in a.rings().iter().enumerate() {
        for i in 0..ring_a.len() {
            let sa = ring_a.segment(i);
            let len_a = sa.length();
            if len_a <= eps {
                continue;
            }
            let eps_a = ratio_eps(eps, len_a);

            for (rb, ring_b) in b.rings().iter().enumerate() {
                for j in 0..ring_b.len() {
                    let sb = ring_b.segment(j);
                    let len_b = sb.length();
                    if len_b <= eps {
                        continue;
                    }
                    let eps_b = ratio_eps(eps, len_b);

                    match segments_intersect(sa, sb, eps) {
                        SegmentIntersection::None => {}
                        SegmentIntersection::Point { point, t1, t2 } => {
                            records.push((
                                BoundaryLocation::new(ra, i, t1)
                                    .canonicalized(ring_a.len(), eps_a),
                                BoundaryLocation::new(rb, j, t2)
                                    .canonicalized(ring_b.len(), eps_b),
                                point,
                            ));
                        }
                        SegmentIntersection::Overlap { start, end } => {
                            for hit in [start, end] {
                                records.push((
                                    BoundaryLocation::new(ra, i, hit.t1)
                                        .canonicalized(ring_a.len(), eps_a),
                                    BoundaryLocation::new(rb, j, hit.t2)
                                        .canonicalized(ring_b.len(), eps_b),
                                    hit.point,
                                ));
                            }
                        }
                    }
                }
            }
        }
    }

    // Sort by location pair; adjacent records addressing the same pair of
    // locations are duplicates (vertex touches are seen by up to four
    // segment pairs).
    records.sort_by(|x, y| x.0.total_cmp(&y.0).then(x.1.total_cmp(&y.1)));

    let mut deduped: Vec<(BoundaryLocation<F>, BoundaryLocation<F>, Point2<F>)> = Vec::new();
    for rec in records {
        let dup = deduped.last().is_some_and(|last: &(_, _, _)| {
            rec.0.approx_eq(&last.0, location_eps(a, &rec.0, eps))
                && rec.1.approx_eq(&last.1, location_eps(b, &rec.1, eps))
        });
        if !dup {
            deduped.push(rec);
        }
    }

    // Cluster records by coordinate so that near-coincident crossings share
    // one splice node.
    let k = deduped.len();
    let mut parent: Vec<usize> = (0..k).collect();
    for i in 0..k {
        for j in (i + 1)..k {
            if deduped[i].2.distance_squared(deduped[j].2) <= eps * eps {
                union(&mut parent, i, j);
            }
        }
    }

    let mut node_of_root: Vec<Option<usize>> = vec![None; k];
    let mut node_points: Vec<Point2<F>> = Vec::new();
    let mut crossings: Vec<Crossing<F>> = Vec::with_capacity(k);
    for (i, (loc_a, loc_b, point)) in deduped.into_iter().enumerate() {
        let root = find(&mut parent, i);
        let node = match node_of_root[root] {
            Some(n) => n,
            None => {
                let n = node_points.len();
                node_of_root[root] = Some(n);
                node_points.push(point);
                n
            }
        };
        crossings.push(Crossing {
            a: loc_a,
            b: loc_b,
            node,
        });
    }

    CrossingSet {
        crossings,
        node_points,
        diagnostics,
    }
}

/// Converts the absolute tolerance to a segment-parameter tolerance.
#[inline]
fn ratio_eps<F: Float>(eps: F, segment_length: F) -> F {
    (eps / segment_length).min(F::from(0.5).unwrap())
}

/// Parameter tolerance for an existing location, looked up from its segment.
fn location_eps<F: Float>(poly: &Polygon<F>, loc: &BoundaryLocation<F>, eps: F) -> F {
    let len = poly.rings()[loc.ring].segment(loc.segment).length();
    if len <= eps {
        F::one()
    } else {
        ratio_eps(eps, len)
    }
}

fn find(parent: &mut Vec<usize>, mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn union(parent: &mut Vec<usize>, i: usize, j: usize) {
    let ri = find(parent, i);
    let rj = find(parent, j);
    // Smaller root wins, keeping node numbering deterministic.
    if ri < rj {
        parent[rj] = ri;
    } else if rj < ri {
        parent[ri] = rj;
    }
}
