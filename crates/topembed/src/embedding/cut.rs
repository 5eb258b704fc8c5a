//! Cutting an embedded graph along a cycle.
//!
//! Every cycle vertex `u` splits into `u` (kept) and a new `u'`. At `u` the
//! two cycle edges divide the rotation into two arcs: edges strictly between
//! the incoming and the outgoing cycle edge stay on `u` (right arc), the rest
//! move to `u'` (left arc). Each cycle edge is replaced by two copies, one per
//! side. A positive cycle edge joins right to right and left to left; a
//! negative one reverses the local orientation, so its copies run crosswise.
//!
//! Non-cycle edges keep their indices. Their final endpoints are only known
//! once both ends have been classified (a chord may move at one end, both, or
//! neither), so the walk records endpoint moves first and rewires afterwards.

use crate::graph::{EdgeId, VertexId};

use super::types::{EmbeddedGraph, EmbeddingError, Signal};

/// Record of a cut: split vertices and the copies of each cycle edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleCut {
    /// `(u, u')` per cycle vertex, in walk order.
    pub split: Vec<(VertexId, VertexId)>,
    /// `(a, b)` per cycle edge: `a` keeps the original index and is attached
    /// to the kept vertex where the edge leaves it; `b` is new.
    pub copies: Vec<(EdgeId, EdgeId)>,
}

/// Vertices `u_0..u_{L-1}` with cycle edge `i` joining `u_i` and `u_{i+1}`.
fn walk_vertices(eg: &EmbeddedGraph, cycle: &[EdgeId]) -> Result<Vec<VertexId>, EmbeddingError> {
    let g = eg.graph();
    let not_a_cycle = |e: EdgeId| EmbeddingError::NotACycle { edge: e.0 };
    if cycle.len() < 2 {
        return Err(not_a_cycle(cycle.first().copied().unwrap_or(EdgeId(0))));
    }
    for (i, &e) in cycle.iter().enumerate() {
        if !g.contains_edge(e) || cycle[..i].contains(&e) {
            return Err(not_a_cycle(e));
        }
    }
    let last = cycle[cycle.len() - 1];
    let (la, lb) = g.endpoints(last);
    let (a, b) = g.endpoints(cycle[0]);
    let mut u = if a == la || a == lb {
        a
    } else if b == la || b == lb {
        b
    } else {
        return Err(not_a_cycle(cycle[0]));
    };
    let mut seen = vec![false; g.num_vertices()];
    let mut walk = Vec::with_capacity(cycle.len());
    for &e in cycle {
        let (x, y) = g.endpoints(e);
        if (x != u && y != u) || seen[u.0] {
            return Err(not_a_cycle(e));
        }
        seen[u.0] = true;
        walk.push(u);
        u = if x == u { y } else { x };
    }
    if u != walk[0] {
        return Err(not_a_cycle(last));
    }
    Ok(walk)
}

/// Edges of `rotation` strictly after `from` and strictly before `to`, cyclically.
fn arc(rotation: &[EdgeId], from: EdgeId, to: EdgeId) -> Vec<EdgeId> {
    let d = rotation.len();
    let start = rotation.iter().position(|&e| e == from);
    let Some(start) = start else {
        panic!("{from:?} missing from rotation");
    };
    (1..d)
        .map(|k| rotation[(start + k) % d])
        .take_while(|&e| e != to)
        .collect()
}

/// Cut `eg` along the closed walk `cycle` (consecutive edges share a vertex,
/// vertices pairwise distinct). Mutates `eg` in place.
pub fn cut_along_cycle(eg: &mut EmbeddedGraph, cycle: &[EdgeId]) -> Result<CycleCut, EmbeddingError> {
    let walk = walk_vertices(eg, cycle)?;
    let len = cycle.len();
    let prev = |i: usize| (i + len - 1) % len;

    // Classify both arcs at every cycle vertex against the original rotations.
    let mut right = Vec::with_capacity(len);
    let mut left = Vec::with_capacity(len);
    for (i, &u) in walk.iter().enumerate() {
        let rot = eg.rotation(u);
        let (incoming, outgoing) = (cycle[prev(i)], cycle[i]);
        right.push(arc(rot, incoming, outgoing));
        left.push(arc(rot, outgoing, incoming));
    }

    let mut partner = Vec::with_capacity(len);
    for _ in 0..len {
        let up = eg.graph.add_vertex();
        eg.rotations.push_vertex(Vec::new());
        partner.push(up);
    }

    // Deferred endpoint resolution for edges on left arcs.
    let mut moved: Vec<(EdgeId, VertexId, VertexId)> = Vec::new();
    for (i, arc) in left.iter().enumerate() {
        for &h in arc {
            let (from, to) = (walk[i], partner[i]);
            match moved.iter_mut().find(|m| m.0 == h) {
                Some(m) => {
                    if m.1 == from {
                        m.1 = to;
                    } else {
                        m.2 = to;
                    }
                }
                None => {
                    let (a, b) = eg.graph.endpoints(h);
                    let (a, b) = if a == from { (to, b) } else { (a, to) };
                    moved.push((h, a, b));
                }
            }
        }
    }
    for &(h, a, b) in &moved {
        eg.graph.remove_edge(h);
        eg.graph.add_edge_at(a, b, h);
    }

    // Replace each cycle edge by a right-attached copy (old index) and a left-attached one.
    let signals: Vec<Signal> = cycle.iter().map(|&c| eg.signal(c)).collect();
    let mut copies = Vec::with_capacity(len);
    for i in 0..len {
        let next = (i + 1) % len;
        let (near_right, near_left) = (walk[next], partner[next]);
        let (a_end, b_end) = match signals[i] {
            Signal::Positive => (near_right, near_left),
            Signal::Negative => (near_left, near_right),
        };
        let c = cycle[i];
        eg.graph.remove_edge(c);
        eg.graph.add_edge_at(walk[i], a_end, c);
        let b = eg.graph.add_edge(partner[i], b_end);
        if eg.signals.len() < eg.graph.edge_bound() {
            eg.signals.resize(eg.graph.edge_bound(), Signal::Positive);
        }
        eg.signals[b.0] = signals[i];
        copies.push((c, b));
    }

    for i in 0..len {
        let p = prev(i);
        // Copy of the incoming edge that ends on the kept (right) vertex.
        let (in_right, in_left) = match signals[p] {
            Signal::Positive => (copies[p].0, copies[p].1),
            Signal::Negative => (copies[p].1, copies[p].0),
        };
        let mut kept = Vec::with_capacity(right[i].len() + 2);
        kept.push(in_right);
        kept.extend_from_slice(&right[i]);
        kept.push(copies[i].0);
        *eg.rotations.at_mut(walk[i]) = kept;

        let mut split = Vec::with_capacity(left[i].len() + 2);
        split.push(copies[i].1);
        split.extend_from_slice(&left[i]);
        split.push(in_left);
        *eg.rotations.at_mut(partner[i]) = split;
    }
    debug_assert_eq!(eg.validate(), Ok(()));

    Ok(CycleCut {
        split: walk.into_iter().zip(partner).collect(),
        copies,
    })
}
