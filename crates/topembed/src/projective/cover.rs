//! Double covers and the planar-double-cover search.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::embedding::{euler_genus, EmbeddedGraph, RotationSystem, Signal};
use crate::graph::{co_subgraph_edges, random_spanning_forest, EdgeId, Graph, VertexId};
use crate::planarity::PlanarityOracle;

use super::subsets::{binomial, Subsets};

/// Search knobs for `find_double_planar_cover`.
#[derive(Clone, Copy, Debug)]
pub struct CoverCfg {
    /// Seed for the random spanning tree whose co-tree is searched.
    pub seed: u64,
    /// Largest crossed subset to try; `None` searches the whole co-tree.
    pub max_crossed: Option<usize>,
}

impl Default for CoverCfg {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            max_crossed: None,
        }
    }
}

/// Two-sheeted cover of a base graph with `n` vertices and edge bound `b`.
///
/// Vertex `v` of the base lifts to `v` (sheet 0) and `v + n` (sheet 1); edge
/// `e` lifts to `e` and `e + b`. A crossed edge `(u, v)` lifts to
/// `(u, v + n)` and `(u + n, v)`, otherwise to `(u, v)` and `(u + n, v + n)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleCover {
    pub graph: Graph,
    pub base_vertices: usize,
    pub base_edge_bound: usize,
    /// Crossed base edges, ascending.
    pub crossed: Vec<EdgeId>,
}

impl DoubleCover {
    #[inline]
    pub fn project_vertex(&self, v: VertexId) -> VertexId {
        VertexId(v.0 % self.base_vertices)
    }
    #[inline]
    pub fn project_edge(&self, e: EdgeId) -> EdgeId {
        EdgeId(e.0 % self.base_edge_bound)
    }
    /// 0 or 1.
    #[inline]
    pub fn sheet(&self, v: VertexId) -> usize {
        v.0 / self.base_vertices
    }
    pub fn is_crossed(&self, base: EdgeId) -> bool {
        self.crossed.binary_search(&base).is_ok()
    }
    /// Cover edges joining the two sheets.
    pub fn cross_edges(&self) -> Vec<EdgeId> {
        self.graph
            .edges()
            .filter(|&e| {
                let (u, v) = self.graph.endpoints(e);
                self.sheet(u) != self.sheet(v)
            })
            .collect()
    }
}

/// Build the double cover of `g` with the edges of `crossed` cross-wired.
pub fn double_cover(g: &Graph, crossed: &[EdgeId]) -> DoubleCover {
    let n = g.num_vertices();
    let b = g.edge_bound();
    let mut crossed = crossed.to_vec();
    crossed.sort_unstable();
    crossed.dedup();
    let mut h = Graph::new(2 * n);
    h.reserve_edges(2 * b);
    let lift = |v: VertexId, sheet: usize| VertexId(v.0 + sheet * n);
    for e in g.edges() {
        let (u, v) = g.endpoints(e);
        let far = usize::from(crossed.binary_search(&e).is_ok());
        h.add_edge_at(lift(u, 0), lift(v, far), e);
        h.add_edge_at(lift(u, 1), lift(v, 1 - far), EdgeId(e.0 + b));
    }
    DoubleCover {
        graph: h,
        base_vertices: n,
        base_edge_bound: b,
        crossed,
    }
}

/// A double cover together with a planar rotation system of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanarDoubleCover {
    pub cover: DoubleCover,
    pub rotations: RotationSystem,
}

impl PlanarDoubleCover {
    /// The cover as a plane embedding.
    pub fn embedding(&self) -> EmbeddedGraph {
        let signals = vec![Signal::Positive; self.cover.graph.edge_bound()];
        EmbeddedGraph::from_parts(self.cover.graph.clone(), self.rotations.clone(), signals)
    }
}

/// Signed embedding of the base graph `g` read off sheet 0 of a planar cover.
///
/// The rotation at `v` is the cover rotation at `v` projected to base edges;
/// an edge is negative exactly when its lift leaves the sheet.
pub fn embedding_from_dpc(g: &Graph, dpc: &PlanarDoubleCover) -> EmbeddedGraph {
    let cover = &dpc.cover;
    assert_eq!(
        (cover.base_vertices, cover.base_edge_bound),
        (g.num_vertices(), g.edge_bound()),
        "cover was not built from this graph"
    );
    let mut rotations = RotationSystem::new(g.num_vertices());
    for v in g.vertices() {
        *rotations.at_mut(v) = dpc
            .rotations
            .at(v)
            .iter()
            .map(|&e| cover.project_edge(e))
            .collect();
    }
    let mut signals = vec![Signal::Positive; g.edge_bound()];
    for e in cover.cross_edges() {
        if e.0 < cover.base_edge_bound {
            signals[e.0] = Signal::Negative;
        }
    }
    EmbeddedGraph::from_parts(g.clone(), rotations, signals)
}

/// Subset search shared by the public entry points; `accept` sees every planar cover.
fn search_covers<O, T>(
    oracle: &O,
    g: &Graph,
    cfg: CoverCfg,
    mut accept: impl FnMut(PlanarDoubleCover) -> Option<T>,
) -> Option<T>
where
    O: PlanarityOracle + ?Sized,
{
    let (n, m) = (g.num_vertices(), g.num_edges());
    // A simple projective graph satisfies m <= 3n - 3, and its positive part is planar.
    let simple = n >= 3 && g.is_simple();
    if simple && m > 3 * n - 3 {
        debug!(n, m, "too many edges for the projective plane");
        return None;
    }
    let min_crossed = if simple { (m + 6).saturating_sub(3 * n) } else { 0 };

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let tree = random_spanning_forest(g, &mut rng);
    let cotree = co_subgraph_edges(g, &tree);
    let max_crossed = cfg.max_crossed.map_or(cotree.len(), |k| k.min(cotree.len()));
    debug!(n, m, cotree = cotree.len(), min_crossed, max_crossed, "double cover search");

    for k in min_crossed..=max_crossed {
        debug!(size = k, candidates = binomial(cotree.len(), k), "crossed subset size");
        for crossed in Subsets::new(&cotree, k) {
            trace!(?crossed, "testing cover");
            let cover = double_cover(g, &crossed);
            if let Some(rotations) = oracle.try_embed(&cover.graph) {
                if let Some(found) = accept(PlanarDoubleCover { cover, rotations }) {
                    debug!(size = k, "planar double cover found");
                    return Some(found);
                }
            }
        }
    }
    debug!("no planar double cover");
    None
}

/// First planar double cover over subsets of a random co-tree, smallest subsets first.
pub fn find_double_planar_cover<O: PlanarityOracle + ?Sized>(
    oracle: &O,
    g: &Graph,
    cfg: CoverCfg,
) -> Option<PlanarDoubleCover> {
    search_covers(oracle, g, cfg, Some)
}

/// Embedding of `g` with Euler genus at most 1, projected from a planar double cover.
///
/// Covers whose sheet-0 projection does not close up into the projective
/// plane are skipped.
pub fn find_projective_embedding<O: PlanarityOracle + ?Sized>(
    oracle: &O,
    g: &Graph,
    cfg: CoverCfg,
) -> Option<EmbeddedGraph> {
    search_covers(oracle, g, cfg, |dpc| {
        let eg = embedding_from_dpc(g, &dpc);
        let genus = euler_genus(&eg);
        if genus <= 1 {
            Some(eg)
        } else {
            debug!(genus, crossed = ?dpc.cover.crossed, "projection leaves the projective plane");
            None
        }
    })
}
