//! Topological embedding engine.
//!
//! Combinatorial embeddings (signed rotation systems) of graphs and the
//! searches built on them: crossing number by branch and bound, projective
//! embeddings through planar double covers, and transforms such as cutting
//! along a cycle.
//!
//! Layout
//! - `graph`: indexed multigraph with a fixed edge-index reuse policy.
//! - `embedding`: `EmbeddedGraph`, facial walks, orientability, cuts.
//! - `planarity`: the oracle trait and the bundled path-addition oracle.
//! - `projective`, `xnumber`: the two search engines.
//! - `surface`: tagged result for callers that branch on the surface.

pub mod api;
pub mod embedding;
pub mod graph;
pub mod planarity;
pub mod projective;
pub mod surface;
pub mod xnumber;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{EdgeId, Graph, VertexId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::embedding::{EmbeddedGraph, RotationSystem, Signal};
    pub use crate::graph::{families, EdgeId, Graph, VertexId};
    pub use crate::planarity::{PathAddition, PlanarityOracle};
    pub use crate::projective::CoverCfg;
    pub use crate::xnumber::XCfg;
}
