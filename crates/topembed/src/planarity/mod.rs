//! Planarity oracle: the one primitive every engine builds on.
//!
//! Purpose
//! - `PlanarityOracle::embed` returns a planar rotation system or a
//!   `KuratowskiWitness` (edges of a non-planar subgraph). Engines treat the
//!   call as atomic and never look inside it.
//! - `PathAddition` is the bundled implementation; anything else satisfying
//!   the trait (e.g. a linear-time Boyer–Myrvold binding) can be swapped in.
//!
//! Contract
//! - Rotations returned by `embed` are planar: tracing them with
//!   `all_facial_walks` gives Euler genus 0.
//! - A witness is itself non-planar and uses only live edges of the input.

mod blocks;
mod path_addition;

use thiserror::Error;

use crate::embedding::{EmbeddedGraph, RotationSystem, Signal};
use crate::graph::{EdgeId, Graph};

pub use blocks::biconnected_blocks;
pub use path_addition::PathAddition;

/// Edges certifying non-planarity (a subdivision of `K_5` or `K_{3,3}` when minimal).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KuratowskiWitness {
    pub edges: Vec<EdgeId>,
}

pub trait PlanarityOracle {
    fn embed(&self, g: &Graph) -> Result<RotationSystem, KuratowskiWitness>;

    /// Like `embed` but without building a witness on failure.
    fn try_embed(&self, g: &Graph) -> Option<RotationSystem> {
        self.embed(g).ok()
    }

    fn is_planar(&self, g: &Graph) -> bool {
        self.try_embed(g).is_some()
    }
}

/// Non-planar input handed back together with its witness.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("graph is not planar (witness of {} edges)", .witness.edges.len())]
pub struct NonPlanarGraph {
    pub graph: Graph,
    pub witness: KuratowskiWitness,
}

/// Plane embedding of `graph` (all signals positive), taking ownership.
pub fn plane_embedding<O: PlanarityOracle + ?Sized>(
    oracle: &O,
    graph: Graph,
) -> Result<EmbeddedGraph, NonPlanarGraph> {
    match oracle.embed(&graph) {
        Ok(rotations) => {
            let signals = vec![Signal::Positive; graph.edge_bound()];
            Ok(EmbeddedGraph::from_parts(graph, rotations, signals))
        }
        Err(witness) => Err(NonPlanarGraph { graph, witness }),
    }
}
