//! Orientability: positive spanning trees and one-sided cycles.

use crate::graph::{bfs_tree, dfs_forest, fundamental_cycle, EdgeId, RootedForest, VertexId};

use super::types::{EmbeddedGraph, Signal};

/// A cycle is one-sided when the product of its signals is negative.
pub fn is_one_sided(eg: &EmbeddedGraph, cycle: &[EdgeId]) -> bool {
    cycle.iter().map(|&e| eg.signal(e)).product::<Signal>() == Signal::Negative
}

/// Switch vertices top-down along `forest` until every tree edge is positive.
///
/// A negative tree edge into `v` triggers a switch at `v`: its rotation is
/// reversed and all of its incident signals flip. The embedding is unchanged.
pub fn positive_spanning_tree(eg: &mut EmbeddedGraph, forest: &RootedForest) {
    for &v in &forest.order {
        if let Some(e) = forest.parent[v.0] {
            if eg.signal(e).is_negative() {
                eg.switch_at(v);
            }
        }
    }
}

/// True if the embedding lives on an orientable surface.
///
/// Leaves `eg` normalized as by `positive_spanning_tree` over a DFS forest.
pub fn is_orientable(eg: &mut EmbeddedGraph) -> bool {
    if eg.num_vertices() == 0 {
        return true;
    }
    let forest = dfs_forest(eg.graph(), VertexId(0));
    positive_spanning_tree(eg, &forest);
    eg.graph().edges().all(|e| !eg.signal(e).is_negative())
}

/// Shortest one-sided cycle, or `None` if the embedding is orientable.
///
/// Scans the fundamental cycles of BFS trees from every vertex; some shortest
/// one-sided cycle is always among them.
pub fn smallest_one_sided_cycle(eg: &EmbeddedGraph) -> Option<Vec<EdgeId>> {
    let g = eg.graph();
    let mut best: Option<Vec<EdgeId>> = None;
    for root in g.vertices() {
        let tree = bfs_tree(g, root);
        for e in g.edges() {
            let (a, _) = g.endpoints(e);
            if !tree.contains(a) || tree.is_tree_edge(g, e) {
                continue;
            }
            let cycle = fundamental_cycle(g, &tree, e);
            if is_one_sided(eg, &cycle) && best.as_ref().map_or(true, |c| cycle.len() < c.len()) {
                best = Some(cycle);
            }
        }
    }
    best
}
