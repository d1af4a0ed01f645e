//! Ring assembly: stitching kept fragments into closed output rings.
//!
//! Kept fragments and crossing nodes form a graph; walking it joins arcs
//! end-to-end at shared nodes until each walk returns to its starting node.
//! Fragments live in an index-addressed arena and "visited" is a flat
//! boolean per fragment id, so the cyclic graph needs no linked structure.
//! After emission, each ring's hole flag is recomputed from nesting parity
//! among the result rings; the inputs' flags carry no authority here.

use super::fragment::Fragment;
use crate::polygon::Ring;
use crate::primitives::Point2;
use num_traits::Float;

/// Stitches kept fragments into closed rings and assigns hole flags.
///
/// `node_count` bounds the node ids referenced by open fragments. Walks
/// that cannot return to their starting node (degenerate topology) are
/// abandoned and produce no ring.
pub(crate) fn assemble<F: Float>(
    fragments: &[Fragment<F>],
    node_count: usize,
    eps: F,
) -> Vec<Ring<F>> {
    let mut loops: Vec<Vec<Point2<F>>> = Vec::new();

    // Whole crossing-free rings pass through unchanged.
    for frag in fragments {
        if frag.is_closed() {
            loops.push(frag.points.clone());
        }
    }

    // Outgoing kept fragments per node, in fragment-id order.
    let mut out: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    for (id, frag) in fragments.iter().enumerate() {
        if let Some(start) = frag.start {
            out[start].push(id);
        }
    }

    let mut used = vec![false; fragments.len()];
    for first in 0..fragments.len() {
        if used[first] || fragments[first].is_closed() {
            continue;
        }

        let start_node = fragments[first].start.expect("open fragment has start");
        let mut points = fragments[first].points.clone();
        used[first] = true;
        let mut current = first;
        let mut closed = false;

        // Each step consumes a fragment, so the fragment count bounds the
        // walk.
        for _ in 0..fragments.len() {
            let node = fragments[current].end.expect("open fragment has end");
            if node == start_node {
                closed = true;
                break;
            }

            // Splice rule: prefer switching to the other polygon's
            // boundary at a crossing, then lowest id for determinism.
            let next = out[node]
                .iter()
                .copied()
                .filter(|&f| !used[f])
                .min_by_key(|&f| (fragments[f].owner == fragments[current].owner, f));

            match next {
                Some(f) => {
                    points.extend_from_slice(&fragments[f].points[1..]);
                    used[f] = true;
                    current = f;
                }
                None => break,
            }
        }

        if closed {
            loops.push(points);
        }
    }

    let rings: Vec<Ring<F>> = loops
        .into_iter()
        .filter_map(|l| cleanup_loop(l, eps))
        .map(|points| Ring::new(points, false))
        .collect();

    assign_hole_flags(rings, eps)
}

/// Removes consecutive duplicate points (including the wrap-around pair)
/// and rejects loops that no longer enclose area.
fn cleanup_loop<F: Float>(mut points: Vec<Point2<F>>, eps: F) -> Option<Vec<Point2<F>>> {
    let eps_sq = eps * eps;
    points.dedup_by(|p, q| p.distance_squared(*q) <= eps_sq);
    while points.len() > 1
        && points
            .last()
            .is_some_and(|p| p.distance_squared(points[0]) <= eps_sq)
    {
        points.pop();
    }
    (points.len() >= 3).then_some(points)
}

/// Recomputes every ring's hole flag from nesting parity: a ring enclosed
/// by an odd number of the other result rings is a hole.
pub(crate) fn assign_hole_flags<F: Float>(rings: Vec<Ring<F>>, eps: F) -> Vec<Ring<F>> {
    let probes: Vec<Option<Point2<F>>> = rings.iter().map(|r| r.interior_probe(eps)).collect();

    rings
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            let hole = match probes[i] {
                Some(probe) => {
                    let depth = rings
                        .iter()
                        .enumerate()
                        .filter(|(j, other)| *j != i && other.contains_point(probe))
                        .count();
                    depth % 2 == 1
                }
                None => false,
            };
            ring.with_hole_flag(hole)
        })
        .collect()
}
