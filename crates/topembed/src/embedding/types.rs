//! Signals, rotation systems, and the embedded graph itself.

use std::iter::Product;
use std::ops::Mul;

use thiserror::Error;

use crate::graph::{EdgeId, Graph, VertexId};

/// Edge signal: whether crossing the edge preserves (`Positive`) or reverses
/// (`Negative`) the local orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Signal {
    #[default]
    Positive,
    Negative,
}

impl Signal {
    /// `+1` or `-1`.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Signal::Positive => 1,
            Signal::Negative => -1,
        }
    }
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Signal::Positive => Signal::Negative,
            Signal::Negative => Signal::Positive,
        }
    }
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Signal::Negative
    }
}

impl Mul for Signal {
    type Output = Signal;
    #[inline]
    fn mul(self, rhs: Signal) -> Signal {
        if self == rhs {
            Signal::Positive
        } else {
            Signal::Negative
        }
    }
}

impl Product for Signal {
    fn product<I: Iterator<Item = Signal>>(iter: I) -> Signal {
        iter.fold(Signal::Positive, |acc, s| acc * s)
    }
}

/// Per-vertex cyclic order of incident edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RotationSystem {
    lists: Vec<Vec<EdgeId>>,
}

impl RotationSystem {
    /// `n` empty rotations.
    pub fn new(n: usize) -> Self {
        Self {
            lists: vec![Vec::new(); n],
        }
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.lists.len()
    }
    #[inline]
    pub fn at(&self, v: VertexId) -> &[EdgeId] {
        &self.lists[v.0]
    }
    #[inline]
    pub fn at_mut(&mut self, v: VertexId) -> &mut Vec<EdgeId> {
        &mut self.lists[v.0]
    }
    pub fn push_vertex(&mut self, rotation: Vec<EdgeId>) -> VertexId {
        self.lists.push(rotation);
        VertexId(self.lists.len() - 1)
    }
}

impl From<Vec<Vec<EdgeId>>> for RotationSystem {
    fn from(lists: Vec<Vec<EdgeId>>) -> Self {
        Self { lists }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmbeddingError {
    #[error("rotation system has {found} vertices, graph has {expected}")]
    VertexCount { expected: usize, found: usize },
    #[error("signal table has {found} entries, graph has {expected} edge slots")]
    SignalCount { expected: usize, found: usize },
    #[error("rotation at vertex {vertex} lists edge {edge}, which is not incident to it")]
    ForeignEdge { vertex: usize, edge: usize },
    #[error("rotation at vertex {vertex} has {found} distinct edges, degree is {degree}")]
    RotationMismatch {
        vertex: usize,
        degree: usize,
        found: usize,
    },
    #[error("edge walk is not a closed simple cycle (at edge {edge})")]
    NotACycle { edge: usize },
}

/// Graph + rotation system + edge signals.
///
/// Invariant: every live edge `(u, v)` appears exactly once in the rotation of
/// `u` and once in the rotation of `v`; `signals` has one entry per edge slot.
/// Cloning renumbers edges densely from 0 (see `compacted`).
#[derive(Debug, PartialEq, Eq)]
pub struct EmbeddedGraph {
    pub(crate) graph: Graph,
    pub(crate) rotations: RotationSystem,
    pub(crate) signals: Vec<Signal>,
}

impl EmbeddedGraph {
    /// Checked constructor.
    pub fn new(
        graph: Graph,
        rotations: RotationSystem,
        signals: Vec<Signal>,
    ) -> Result<Self, EmbeddingError> {
        let eg = Self {
            graph,
            rotations,
            signals,
        };
        eg.validate()?;
        Ok(eg)
    }

    /// Checked constructor with all signals positive.
    pub fn orientable(graph: Graph, rotations: RotationSystem) -> Result<Self, EmbeddingError> {
        let signals = vec![Signal::Positive; graph.edge_bound()];
        Self::new(graph, rotations, signals)
    }

    /// Trusted constructor for engine outputs; validated in debug builds only.
    pub(crate) fn from_parts(graph: Graph, rotations: RotationSystem, signals: Vec<Signal>) -> Self {
        let eg = Self {
            graph,
            rotations,
            signals,
        };
        debug_assert_eq!(eg.validate(), Ok(()));
        eg
    }

    pub fn validate(&self) -> Result<(), EmbeddingError> {
        let g = &self.graph;
        if self.rotations.num_vertices() != g.num_vertices() {
            return Err(EmbeddingError::VertexCount {
                expected: g.num_vertices(),
                found: self.rotations.num_vertices(),
            });
        }
        if self.signals.len() != g.edge_bound() {
            return Err(EmbeddingError::SignalCount {
                expected: g.edge_bound(),
                found: self.signals.len(),
            });
        }
        let mut stamp = vec![usize::MAX; g.edge_bound()];
        for v in g.vertices() {
            let mut distinct = 0;
            for &e in self.rotations.at(v) {
                let incident = matches!(g.try_endpoints(e), Some((a, b)) if a == v || b == v);
                if !incident {
                    return Err(EmbeddingError::ForeignEdge {
                        vertex: v.0,
                        edge: e.0,
                    });
                }
                if stamp[e.0] != v.0 {
                    stamp[e.0] = v.0;
                    distinct += 1;
                }
            }
            let found = self.rotations.at(v).len();
            if distinct != found || found != g.degree(v) {
                return Err(EmbeddingError::RotationMismatch {
                    vertex: v.0,
                    degree: g.degree(v),
                    found: distinct,
                });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }
    #[inline]
    pub fn rotations(&self) -> &RotationSystem {
        &self.rotations
    }
    #[inline]
    pub fn rotation(&self, v: VertexId) -> &[EdgeId] {
        self.rotations.at(v)
    }
    #[inline]
    pub fn signal(&self, e: EdgeId) -> Signal {
        debug_assert!(self.graph.contains_edge(e), "signal of dead edge {e:?}");
        self.signals[e.0]
    }
    pub fn set_signal(&mut self, e: EdgeId, s: Signal) {
        debug_assert!(self.graph.contains_edge(e), "signal of dead edge {e:?}");
        self.signals[e.0] = s;
    }
    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        self.graph.endpoints(e)
    }
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    pub fn negative_edges(&self) -> Vec<EdgeId> {
        self.graph
            .edges()
            .filter(|&e| self.signals[e.0].is_negative())
            .collect()
    }

    pub fn into_parts(self) -> (Graph, RotationSystem, Vec<Signal>) {
        (self.graph, self.rotations, self.signals)
    }

    /// Local switch at `v`: reverse its rotation and flip every incident signal.
    /// Describes the same embedding.
    pub fn switch_at(&mut self, v: VertexId) {
        self.rotations.at_mut(v).reverse();
        for &e in self.graph.incident_edges(v) {
            self.signals[e.0] = self.signals[e.0].flipped();
        }
    }

    /// Dense 0-based copy: edges renumbered in index order, rotations and
    /// signals translated through the same map.
    pub fn compacted(&self) -> EmbeddedGraph {
        self.remapped(|_| true)
    }

    /// Dense copy without degree-0 vertices.
    pub fn without_isolated_vertices(&self) -> EmbeddedGraph {
        self.remapped(|v| self.graph.degree(v) > 0)
    }

    fn remapped(&self, keep: impl FnMut(VertexId) -> bool) -> EmbeddedGraph {
        let (graph, map) = self.graph.renumbered(keep);
        let mut rotations = RotationSystem::new(graph.num_vertices());
        let mut signals = vec![Signal::Positive; graph.edge_bound()];
        for v in self.graph.vertices() {
            let Some(nv) = map.vertex(v) else { continue };
            *rotations.at_mut(nv) = self
                .rotations
                .at(v)
                .iter()
                .map(|&e| match map.edge(e) {
                    Some(ne) => ne,
                    None => panic!("edge {e:?} at kept vertex {v:?} was dropped"),
                })
                .collect();
        }
        for e in self.graph.edges() {
            if let Some(ne) = map.edge(e) {
                signals[ne.0] = self.signals[e.0];
            }
        }
        EmbeddedGraph::from_parts(graph, rotations, signals)
    }
}

impl Clone for EmbeddedGraph {
    fn clone(&self) -> Self {
        self.compacted()
    }
}
