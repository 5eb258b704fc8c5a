//! Graph storage with stable integer handles.
//!
//! - `VertexId`, `EdgeId`: plain indices into growable arrays.
//! - `Graph`: undirected multigraph (no self-loops) whose edge slots may have
//!   holes; see `IndexPolicy` for how freed slots are handed out again.

use thiserror::Error;

/// Identifier types for clarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// How edge indices are assigned after removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexPolicy {
    /// `add_edge` always returns `edge_bound()`. A removed slot stays empty until
    /// `add_edge_at` refills it with the same index; trailing empty slots are
    /// trimmed so that undoing an append restores the previous bound exactly.
    AppendOnly,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for a graph with {n} vertices")]
    VertexOutOfRange { vertex: usize, n: usize },
    #[error("self-loop at vertex {vertex} is not supported")]
    SelfLoop { vertex: usize },
}

/// Undirected graph on vertices `0..n` with edge slots `0..edge_bound()`.
///
/// Endpoints are stored with the smaller vertex first. Incidence lists keep
/// insertion order; nothing in the engines relies on that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    ends: Vec<Option<(VertexId, VertexId)>>,
    incident: Vec<Vec<EdgeId>>,
    live: usize,
}

/// Old→new index maps produced by `Graph::renumbered`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renumbering {
    pub vertices: Vec<Option<VertexId>>,
    pub edges: Vec<Option<EdgeId>>,
}

impl Renumbering {
    #[inline]
    pub fn vertex(&self, v: VertexId) -> Option<VertexId> {
        self.vertices.get(v.0).copied().flatten()
    }
    #[inline]
    pub fn edge(&self, e: EdgeId) -> Option<EdgeId> {
        self.edges.get(e.0).copied().flatten()
    }
}

impl Graph {
    pub const INDEX_POLICY: IndexPolicy = IndexPolicy::AppendOnly;

    /// Edgeless graph on `n` vertices.
    pub fn new(n: usize) -> Self {
        Self {
            ends: Vec::new(),
            incident: vec![Vec::new(); n],
            live: 0,
        }
    }

    /// Build from an edge list; edge `i` of the list gets index `i`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut g = Self::new(n);
        for &(u, v) in edges {
            for x in [u, v] {
                if x >= n {
                    return Err(GraphError::VertexOutOfRange { vertex: x, n });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            g.add_edge(VertexId(u), VertexId(v));
        }
        Ok(g)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.incident.len()
    }
    /// Number of live edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.live
    }
    /// One past the largest edge slot in use.
    #[inline]
    pub fn edge_bound(&self) -> usize {
        self.ends.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_vertices()).map(VertexId)
    }

    /// Live edges in index order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.ends
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_some())
            .map(|(i, _)| EdgeId(i))
    }

    pub fn add_vertex(&mut self) -> VertexId {
        self.incident.push(Vec::new());
        VertexId(self.incident.len() - 1)
    }

    /// Reserve room for `extra` further vertices.
    pub fn reserve_vertices(&mut self, extra: usize) {
        self.incident.reserve(extra);
    }

    /// Reserve room for `extra` further edge slots.
    pub fn reserve_edges(&mut self, extra: usize) {
        self.ends.reserve(extra);
    }

    /// Append an edge at index `edge_bound()`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> EdgeId {
        let e = EdgeId(self.ends.len());
        self.add_edge_at(u, v, e);
        e
    }

    /// Insert an edge at a specific (free) index, growing the slot table if needed.
    ///
    /// Panics if the slot is taken, an endpoint is out of range, or `u == v`.
    pub fn add_edge_at(&mut self, u: VertexId, v: VertexId, e: EdgeId) {
        let n = self.num_vertices();
        assert!(
            u.0 < n && v.0 < n,
            "edge {e:?} endpoints ({u:?}, {v:?}) out of range for {n} vertices"
        );
        assert_ne!(u, v, "self-loop at {u:?}");
        if e.0 >= self.ends.len() {
            self.ends.resize(e.0 + 1, None);
        }
        assert!(self.ends[e.0].is_none(), "edge slot {e:?} already in use");
        self.ends[e.0] = Some(if u < v { (u, v) } else { (v, u) });
        self.incident[u.0].push(e);
        self.incident[v.0].push(e);
        self.live += 1;
    }

    /// Remove a live edge and return its endpoints.
    pub fn remove_edge(&mut self, e: EdgeId) -> (VertexId, VertexId) {
        let (u, v) = self.endpoints(e);
        self.ends[e.0] = None;
        self.incident[u.0].retain(|&f| f != e);
        self.incident[v.0].retain(|&f| f != e);
        self.live -= 1;
        while matches!(self.ends.last(), Some(None)) {
            self.ends.pop();
        }
        (u, v)
    }

    /// Remove the last vertex, which must be isolated.
    pub fn pop_isolated_vertex(&mut self) -> Option<VertexId> {
        match self.incident.last() {
            Some(inc) if inc.is_empty() => {
                self.incident.pop();
                Some(VertexId(self.incident.len()))
            }
            _ => None,
        }
    }

    #[inline]
    pub fn contains_edge(&self, e: EdgeId) -> bool {
        matches!(self.ends.get(e.0), Some(Some(_)))
    }

    #[inline]
    pub fn try_endpoints(&self, e: EdgeId) -> Option<(VertexId, VertexId)> {
        self.ends.get(e.0).copied().flatten()
    }

    /// Endpoints of a live edge (smaller vertex first). Panics on a dead index.
    #[inline]
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        match self.try_endpoints(e) {
            Some(uv) => uv,
            None => panic!("edge {e:?} is not live"),
        }
    }

    /// The endpoint of `e` that is not `v`.
    #[inline]
    pub fn other_endpoint(&self, e: EdgeId, v: VertexId) -> VertexId {
        let (a, b) = self.endpoints(e);
        debug_assert!(a == v || b == v, "{v:?} is not an endpoint of {e:?}");
        if a == v {
            b
        } else {
            a
        }
    }

    #[inline]
    pub fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.incident[v.0]
    }

    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.incident[v.0].len()
    }

    /// Some edge joining `u` and `v`, if any.
    pub fn edge_between(&self, u: VertexId, v: VertexId) -> Option<EdgeId> {
        self.incident[u.0]
            .iter()
            .copied()
            .find(|&e| self.other_endpoint(e, u) == v)
    }

    /// True if `e` and `f` share no endpoint.
    pub fn are_disjoint(&self, e: EdgeId, f: EdgeId) -> bool {
        let (u, v) = self.endpoints(e);
        let (a, b) = self.endpoints(f);
        u != a && u != b && v != a && v != b
    }

    /// True if no two live edges join the same pair of vertices.
    pub fn is_simple(&self) -> bool {
        let mut pairs: Vec<(VertexId, VertexId)> = self.ends.iter().flatten().copied().collect();
        pairs.sort_unstable();
        pairs.windows(2).all(|w| w[0] != w[1])
    }

    /// Copy keeping the live edges accepted by `keep`, at their original indices.
    pub fn edge_subgraph(&self, mut keep: impl FnMut(EdgeId) -> bool) -> Graph {
        let mut h = Graph::new(self.num_vertices());
        for e in self.edges() {
            if keep(e) {
                let (u, v) = self.endpoints(e);
                h.add_edge_at(u, v, e);
            }
        }
        h
    }

    /// Dense 0-based copy of the vertices accepted by `keep_vertex`.
    ///
    /// Edges keep their relative order; an edge survives only if both endpoints do.
    pub fn renumbered(&self, mut keep_vertex: impl FnMut(VertexId) -> bool) -> (Graph, Renumbering) {
        let mut vertices = vec![None; self.num_vertices()];
        let mut next = 0;
        for v in self.vertices() {
            if keep_vertex(v) {
                vertices[v.0] = Some(VertexId(next));
                next += 1;
            }
        }
        let mut h = Graph::new(next);
        let mut edges = vec![None; self.edge_bound()];
        for e in self.edges() {
            let (u, v) = self.endpoints(e);
            if let (Some(nu), Some(nv)) = (vertices[u.0], vertices[v.0]) {
                edges[e.0] = Some(h.add_edge(nu, nv));
            }
        }
        (h, Renumbering { vertices, edges })
    }
}
