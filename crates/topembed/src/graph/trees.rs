//! Spanning trees, forests, and fundamental cycles.
//!
//! Trees are stored as parent edges per vertex (`RootedForest`), so that
//! multigraphs are handled without ambiguity.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{EdgeId, Graph, VertexId};

/// Rooted forest over the vertices of a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootedForest {
    /// Edge towards the parent; `None` for roots and unreached vertices.
    pub parent: Vec<Option<EdgeId>>,
    /// Distance from the root; `None` for unreached vertices.
    pub depth: Vec<Option<usize>>,
    /// Reached vertices in visiting order; every vertex comes after its parent.
    pub order: Vec<VertexId>,
}

impl RootedForest {
    fn empty(n: usize) -> Self {
        Self {
            parent: vec![None; n],
            depth: vec![None; n],
            order: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.depth[v.0].is_some()
    }

    pub fn is_root(&self, v: VertexId) -> bool {
        self.contains(v) && self.parent[v.0].is_none()
    }

    /// True if `e` is the parent edge of one of its endpoints.
    pub fn is_tree_edge(&self, g: &Graph, e: EdgeId) -> bool {
        let (a, b) = g.endpoints(e);
        self.parent[a.0] == Some(e) || self.parent[b.0] == Some(e)
    }

    pub fn tree_edges(&self) -> Vec<EdgeId> {
        self.order.iter().filter_map(|v| self.parent[v.0]).collect()
    }
}

/// Depth-first forest: a tree from `root`, then one from every vertex not yet reached.
///
/// Iterative; each stack frame is a vertex and the next incident slot to scan.
pub fn dfs_forest(g: &Graph, root: VertexId) -> RootedForest {
    let mut forest = RootedForest::empty(g.num_vertices());
    let mut stack: Vec<(VertexId, usize)> = Vec::new();
    let starts = std::iter::once(root).chain(g.vertices());
    for s in starts {
        if forest.depth[s.0].is_some() {
            continue;
        }
        forest.depth[s.0] = Some(0);
        forest.order.push(s);
        stack.push((s, 0));
        while let Some(top) = stack.last_mut() {
            let (u, i) = *top;
            let Some(&e) = g.incident_edges(u).get(i) else {
                stack.pop();
                continue;
            };
            top.1 += 1;
            let v = g.other_endpoint(e, u);
            if forest.depth[v.0].is_none() {
                forest.parent[v.0] = Some(e);
                forest.depth[v.0] = Some(stack.len());
                forest.order.push(v);
                stack.push((v, 0));
            }
        }
    }
    forest
}

/// Breadth-first tree of the component containing `root`.
pub fn bfs_tree(g: &Graph, root: VertexId) -> RootedForest {
    let mut forest = RootedForest::empty(g.num_vertices());
    forest.depth[root.0] = Some(0);
    forest.order.push(root);
    let mut head = 0;
    while head < forest.order.len() {
        let u = forest.order[head];
        head += 1;
        let du = forest.depth[u.0].unwrap_or(0);
        for &e in g.incident_edges(u) {
            let v = g.other_endpoint(e, u);
            if forest.depth[v.0].is_none() {
                forest.parent[v.0] = Some(e);
                forest.depth[v.0] = Some(du + 1);
                forest.order.push(v);
            }
        }
    }
    forest
}

/// Random spanning forest: Kruskal over a shuffled edge order.
///
/// The tree only steers search order in the cover engine; uniformity is not required.
pub fn random_spanning_forest<R: Rng + ?Sized>(g: &Graph, rng: &mut R) -> Vec<EdgeId> {
    let mut order: Vec<EdgeId> = g.edges().collect();
    order.shuffle(rng);
    let mut parent: Vec<usize> = (0..g.num_vertices()).collect();
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    let mut tree = Vec::with_capacity(g.num_vertices().saturating_sub(1));
    for e in order {
        let (u, v) = g.endpoints(e);
        let (ru, rv) = (find(&mut parent, u.0), find(&mut parent, v.0));
        if ru != rv {
            parent[ru] = rv;
            tree.push(e);
        }
    }
    tree.sort_unstable();
    tree
}

/// Live edges of `g` that are not in `subgraph_edges`, in index order.
pub fn co_subgraph_edges(g: &Graph, subgraph_edges: &[EdgeId]) -> Vec<EdgeId> {
    let mut in_sub = vec![false; g.edge_bound()];
    for e in subgraph_edges {
        in_sub[e.0] = true;
    }
    g.edges().filter(|e| !in_sub[e.0]).collect()
}

/// Cycle closed by the non-tree edge `e`, as a closed walk starting with `e`.
///
/// For `e = (u, v)` the walk is `u -e-> v`, up the tree to the common ancestor,
/// then down to `u`. Both endpoints must lie in the same tree.
pub fn fundamental_cycle(g: &Graph, forest: &RootedForest, e: EdgeId) -> Vec<EdgeId> {
    let (u, v) = g.endpoints(e);
    let depth = |x: VertexId| match forest.depth[x.0] {
        Some(d) => d,
        None => panic!("{x:?} is not covered by the forest"),
    };
    let step_up = |x: VertexId, path: &mut Vec<EdgeId>| -> VertexId {
        let p = match forest.parent[x.0] {
            Some(p) => p,
            None => panic!("endpoints of {e:?} lie in different trees"),
        };
        path.push(p);
        g.other_endpoint(p, x)
    };
    let (mut a, mut b) = (u, v);
    let mut up_from_u = Vec::new();
    let mut up_from_v = Vec::new();
    while depth(a) > depth(b) {
        a = step_up(a, &mut up_from_u);
    }
    while depth(b) > depth(a) {
        b = step_up(b, &mut up_from_v);
    }
    while a != b {
        a = step_up(a, &mut up_from_u);
        b = step_up(b, &mut up_from_v);
    }
    let mut cycle = Vec::with_capacity(1 + up_from_u.len() + up_from_v.len());
    cycle.push(e);
    cycle.extend(up_from_v);
    cycle.extend(up_from_u.into_iter().rev());
    cycle
}

/// Any cycle of `g`, if one exists.
pub fn find_cycle(g: &Graph) -> Option<Vec<EdgeId>> {
    if g.num_vertices() == 0 {
        return None;
    }
    let forest = dfs_forest(g, VertexId(0));
    g.edges()
        .find(|&e| !forest.is_tree_edge(g, e))
        .map(|e| fundamental_cycle(g, &forest, e))
}
