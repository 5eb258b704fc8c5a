//! Facial walks of signed embeddings and the Euler genus derived from them.
//!
//! Traversal rule: leaving `v` along `e` with orientation `s`, arrive at `w`
//! with `s' = s * signal(e)` and continue with the successor of `e` in the
//! rotation of `w` if `s'` is positive, its predecessor otherwise. A walk ends
//! when the triple `(vertex, edge, orientation)` repeats; the edge/vertex pair
//! alone is not enough, since a face of a non-orientable embedding may run
//! along the same edge twice in the same direction.

use crate::graph::{EdgeId, VertexId};

use super::types::{EmbeddedGraph, Signal};

/// One traversal of an edge along a face boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WalkStep {
    pub edge: EdgeId,
    pub from: VertexId,
    pub orientation: Signal,
}

/// Closed boundary walk of one face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacialWalk {
    pub steps: Vec<WalkStep>,
}

impl FacialWalk {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.steps.iter().map(|s| s.from)
    }
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.steps.iter().map(|s| s.edge)
    }
}

struct Tracer<'a> {
    eg: &'a EmbeddedGraph,
    /// Position of each edge in the rotation of its first/second endpoint.
    pos: Vec<[usize; 2]>,
}

impl<'a> Tracer<'a> {
    fn new(eg: &'a EmbeddedGraph) -> Self {
        let g = eg.graph();
        let mut pos = vec![[usize::MAX; 2]; g.edge_bound()];
        for v in g.vertices() {
            for (i, &e) in eg.rotation(v).iter().enumerate() {
                pos[e.0][Self::side(eg, e, v)] = i;
            }
        }
        Self { eg, pos }
    }

    #[inline]
    fn side(eg: &EmbeddedGraph, e: EdgeId, v: VertexId) -> usize {
        usize::from(eg.endpoints(e).0 != v)
    }

    #[inline]
    fn key(&self, step: &WalkStep) -> usize {
        let side = Self::side(self.eg, step.edge, step.from);
        (step.edge.0 * 2 + side) * 2 + usize::from(step.orientation.is_negative())
    }

    /// Step following `step`, plus the reverse of `step` (same edge traversed
    /// back with the opposite orientation).
    fn advance(&self, step: &WalkStep) -> (WalkStep, WalkStep) {
        let g = self.eg.graph();
        let w = g.other_endpoint(step.edge, step.from);
        let s = step.orientation * self.eg.signal(step.edge);
        let rot = self.eg.rotation(w);
        let d = rot.len();
        let i = self.pos[step.edge.0][Self::side(self.eg, step.edge, w)];
        let next = match s {
            Signal::Positive => rot[(i + 1) % d],
            Signal::Negative => rot[(i + d - 1) % d],
        };
        let reverse = WalkStep {
            edge: step.edge,
            from: w,
            orientation: s.flipped(),
        };
        let forward = WalkStep {
            edge: next,
            from: w,
            orientation: s,
        };
        (forward, reverse)
    }
}

/// Every face of the embedding, each reported once (a face and its reverse
/// traversal are the same face). Lengths sum to `2 * num_edges`.
pub fn all_facial_walks(eg: &EmbeddedGraph) -> Vec<FacialWalk> {
    let g = eg.graph();
    let tracer = Tracer::new(eg);
    let mut seen = vec![false; g.edge_bound() * 4];
    let limit = g.edge_bound() * 4;
    let mut walks = Vec::new();
    for e in g.edges() {
        let (a, b) = g.endpoints(e);
        for from in [a, b] {
            for orientation in [Signal::Positive, Signal::Negative] {
                let start = WalkStep {
                    edge: e,
                    from,
                    orientation,
                };
                if seen[tracer.key(&start)] {
                    continue;
                }
                let mut steps = Vec::new();
                let mut cur = start;
                loop {
                    let (next, reverse) = tracer.advance(&cur);
                    seen[tracer.key(&cur)] = true;
                    seen[tracer.key(&reverse)] = true;
                    steps.push(cur);
                    assert!(steps.len() <= limit, "facial walk does not close");
                    if next == start {
                        break;
                    }
                    cur = next;
                }
                walks.push(FacialWalk { steps });
            }
        }
    }
    walks
}

/// Euler genus `sum over components (2 - V + E - F)`; isolated vertices are ignored.
/// Zero means every component is embedded in the sphere.
pub fn euler_genus(eg: &EmbeddedGraph) -> usize {
    let g = eg.graph();
    let mut parent: Vec<usize> = (0..g.num_vertices()).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    for e in g.edges() {
        let (u, v) = g.endpoints(e);
        let (ru, rv) = (find(&mut parent, u.0), find(&mut parent, v.0));
        if ru != rv {
            parent[ru] = rv;
        }
    }
    let mut components = 0isize;
    let mut vertices = 0isize;
    for v in g.vertices() {
        if g.degree(v) == 0 {
            continue;
        }
        vertices += 1;
        if find(&mut parent, v.0) == v.0 {
            components += 1;
        }
    }
    let faces = all_facial_walks(eg).len() as isize;
    let genus = 2 * components - vertices + g.num_edges() as isize - faces;
    debug_assert!(genus >= 0, "negative Euler genus {genus}");
    genus.max(0) as usize
}
