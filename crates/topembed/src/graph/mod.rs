//! Graph ADT consumed by the embedding engines.
//!
//! Purpose
//! - Dense integer handles (`VertexId`, `EdgeId`) into growable arrays, never
//!   pointers or borrowed iterators, so that engines can mutate and backtrack
//!   freely while holding plain indices.
//! - A single documented reuse rule for freed edge slots (`IndexPolicy`), which
//!   the crossing-number search relies on for exact restoration on undo.
//!
//! Also here: rooted forests and fundamental cycles (`trees`) and the small
//! graph families used throughout the tests (`families`).

pub mod families;
mod trees;
mod types;

pub use trees::{
    bfs_tree, co_subgraph_edges, dfs_forest, find_cycle, fundamental_cycle,
    random_spanning_forest, RootedForest,
};
pub use types::{EdgeId, Graph, GraphError, IndexPolicy, Renumbering, VertexId};
