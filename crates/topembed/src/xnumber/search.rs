//! Branch and bound over synthetic crossings.

use tracing::{debug, trace};

use crate::embedding::{EmbeddedGraph, RotationSystem, Signal};
use crate::graph::{EdgeId, Graph, VertexId};
use crate::planarity::PlanarityOracle;

/// Search knobs for the planar crossing-number search.
#[derive(Clone, Copy, Debug)]
pub struct XCfg {
    /// At the last level, only try pairs of disjoint edges from the
    /// Kuratowski witness. Off means every disjoint pair.
    pub use_witness_pairs: bool,
}

impl Default for XCfg {
    fn default() -> Self {
        Self {
            use_witness_pairs: true,
        }
    }
}

/// A synthetic degree-4 vertex standing for one crossing.
///
/// `first` and `second` are the two halves of each crossed edge; index 0 of
/// each keeps the crossed edge's own index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossingVertex {
    pub vertex: VertexId,
    pub first: [EdgeId; 2],
    pub second: [EdgeId; 2],
}

/// Planar drawing of a graph with its crossings replaced by vertices.
///
/// Vertices `0..n` and the uncrossed edges keep their indices from the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossingDrawing {
    pub embedding: EmbeddedGraph,
    pub crossings: Vec<CrossingVertex>,
}

/// Result of the generic search: the graph with crossings inserted, and
/// whatever the caller's predicate produced for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spread<T> {
    pub graph: Graph,
    pub crossings: Vec<CrossingVertex>,
    pub value: T,
}

/// Undo record for one inserted crossing.
#[derive(Clone, Copy, Debug)]
struct Crossing {
    at: CrossingVertex,
    e_ends: (VertexId, VertexId),
    f_ends: (VertexId, VertexId),
}

struct CrossingSearch {
    graph: Graph,
    trail: Vec<Crossing>,
    /// Vertex and edge-slot counts, moved in lock-step with `cross`/`uncross`.
    vertices: usize,
    edge_slots: usize,
}

impl CrossingSearch {
    /// Copy of `g` with room for `k` crossings.
    fn new(g: &Graph, k: usize) -> Self {
        let mut graph = g.clone();
        graph.reserve_vertices(k);
        graph.reserve_edges(2 * k);
        Self {
            vertices: graph.num_vertices(),
            edge_slots: graph.edge_bound(),
            graph,
            trail: Vec::with_capacity(k),
        }
    }

    /// Replace disjoint edges `e = (u, v)` and `f = (a, b)` by a new vertex `w`
    /// with edges `e = (w, u)`, `f = (w, a)`, and fresh `(w, v)`, `(w, b)`.
    fn cross(&mut self, e: EdgeId, f: EdgeId) {
        let g = &mut self.graph;
        debug_assert!(g.are_disjoint(e, f), "{e:?} and {f:?} share an endpoint");
        let w = g.add_vertex();
        let (u, v) = g.remove_edge(e);
        let (a, b) = g.remove_edge(f);
        g.add_edge_at(w, u, e);
        g.add_edge_at(w, a, f);
        let ev = g.add_edge(w, v);
        let fb = g.add_edge(w, b);
        self.vertices += 1;
        self.edge_slots += 2;
        debug_assert_eq!((self.vertices, self.edge_slots), (g.num_vertices(), g.edge_bound()));
        trace!(depth = self.trail.len() + 1, ?e, ?f, ?w, "cross");
        self.trail.push(Crossing {
            at: CrossingVertex {
                vertex: w,
                first: [e, ev],
                second: [f, fb],
            },
            e_ends: (u, v),
            f_ends: (a, b),
        });
    }

    /// Undo the most recent `cross`, restoring indices and the edge bound exactly.
    fn uncross(&mut self) {
        let Some(c) = self.trail.pop() else {
            panic!("uncross without a crossing");
        };
        let g = &mut self.graph;
        for h in [c.at.second[1], c.at.first[1], c.at.second[0], c.at.first[0]] {
            g.remove_edge(h);
        }
        let popped = g.pop_isolated_vertex();
        assert_eq!(popped, Some(c.at.vertex), "crossing vertex is not the last vertex");
        g.add_edge_at(c.e_ends.0, c.e_ends.1, c.at.first[0]);
        g.add_edge_at(c.f_ends.0, c.f_ends.1, c.at.second[0]);
        self.vertices -= 1;
        self.edge_slots -= 2;
        debug_assert_eq!((self.vertices, self.edge_slots), (g.num_vertices(), g.edge_bound()));
        trace!(depth = self.trail.len(), "uncross");
    }

    fn disjoint_pairs(&self, edges: &[EdgeId]) -> Vec<(EdgeId, EdgeId)> {
        let mut pairs = Vec::new();
        for (i, &e) in edges.iter().enumerate() {
            for &f in &edges[i + 1..] {
                if self.graph.are_disjoint(e, f) {
                    pairs.push((e, f));
                }
            }
        }
        pairs
    }

    fn all_pairs(&self) -> Vec<(EdgeId, EdgeId)> {
        let edges: Vec<EdgeId> = self.graph.edges().collect();
        self.disjoint_pairs(&edges)
    }

    /// At most `k` further crossings until `test` accepts the graph.
    fn general<T>(&mut self, k: usize, test: &mut impl FnMut(&Graph) -> Option<T>) -> Option<T> {
        if k == 0 {
            return test(&self.graph);
        }
        if let Some(found) = self.general(k - 1, test) {
            return Some(found);
        }
        for (e, f) in self.all_pairs() {
            self.cross(e, f);
            if let Some(found) = self.general(k - 1, test) {
                return Some(found);
            }
            self.uncross();
        }
        None
    }

    /// At most `k` further crossings until the graph is planar.
    fn planar<O: PlanarityOracle + ?Sized>(
        &mut self,
        oracle: &O,
        k: usize,
        cfg: XCfg,
    ) -> Option<RotationSystem> {
        if k >= 2 {
            if let Some(found) = self.planar(oracle, k - 1, cfg) {
                return Some(found);
            }
            for (e, f) in self.all_pairs() {
                self.cross(e, f);
                if let Some(found) = self.planar(oracle, k - 1, cfg) {
                    return Some(found);
                }
                self.uncross();
            }
            return None;
        }
        let witness = match oracle.embed(&self.graph) {
            Ok(rotations) => return Some(rotations),
            Err(witness) => witness,
        };
        if k == 0 {
            return None;
        }
        // Both edges of a single crossing lie on every Kuratowski subgraph.
        let pairs = if cfg.use_witness_pairs {
            self.disjoint_pairs(&witness.edges)
        } else {
            self.all_pairs()
        };
        for (e, f) in pairs {
            self.cross(e, f);
            if let Some(found) = oracle.try_embed(&self.graph) {
                return Some(found);
            }
            self.uncross();
        }
        None
    }

    fn crossings(&self) -> Vec<CrossingVertex> {
        self.trail.iter().map(|c| c.at).collect()
    }
}

/// Planar drawing of `g` with at most `k` crossings, if one exists.
pub fn planar_xnumber<O: PlanarityOracle + ?Sized>(
    oracle: &O,
    g: &Graph,
    k: usize,
    cfg: XCfg,
) -> Option<CrossingDrawing> {
    debug!(n = g.num_vertices(), m = g.num_edges(), k, "planar crossing search");
    let mut search = CrossingSearch::new(g, k);
    let rotations = search.planar(oracle, k, cfg)?;
    let crossings = search.crossings();
    debug!(crossings = crossings.len(), "planar drawing found");
    let signals = vec![Signal::Positive; search.graph.edge_bound()];
    Some(CrossingDrawing {
        embedding: EmbeddedGraph::from_parts(search.graph, rotations, signals),
        crossings,
    })
}

/// True if `g` can be drawn in the plane with at most `k` crossings.
pub fn leq_xnumber<O: PlanarityOracle + ?Sized>(oracle: &O, g: &Graph, k: usize) -> bool {
    planar_xnumber(oracle, g, k, XCfg::default()).is_some()
}

/// Insert at most `k` crossings into `g` until `test` accepts the result.
///
/// Every pair of disjoint edges of the current graph is a candidate,
/// including halves of edges crossed earlier.
pub fn xnumber<T>(g: &Graph, k: usize, mut test: impl FnMut(&Graph) -> Option<T>) -> Option<Spread<T>> {
    debug!(n = g.num_vertices(), m = g.num_edges(), k, "crossing search");
    let mut search = CrossingSearch::new(g, k);
    let value = search.general(k, &mut test)?;
    let crossings = search.crossings();
    Some(Spread {
        graph: search.graph,
        crossings,
        value,
    })
}

/// Smallest `k <= max_k` with a planar drawing, and that drawing.
pub fn crossing_number<O: PlanarityOracle + ?Sized>(
    oracle: &O,
    g: &Graph,
    max_k: usize,
    cfg: XCfg,
) -> Option<CrossingDrawing> {
    (0..=max_k).find_map(|k| planar_xnumber(oracle, g, k, cfg))
}
