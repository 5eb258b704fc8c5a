use super::*;
use crate::embedding::{euler_genus, is_orientable};
use crate::graph::{families, EdgeId, Graph, VertexId};
use crate::planarity::{PathAddition, PlanarityOracle};
use proptest::prelude::*;

fn assert_projects_onto(g: &Graph, cover: &DoubleCover) {
    let h = &cover.graph;
    assert_eq!(h.num_vertices(), 2 * g.num_vertices());
    assert_eq!(h.num_edges(), 2 * g.num_edges());
    for e in h.edges() {
        let (u, v) = h.endpoints(e);
        let base = cover.project_edge(e);
        let (a, b) = g.endpoints(base);
        let (pu, pv) = (cover.project_vertex(u), cover.project_vertex(v));
        assert!((pu, pv) == (a, b) || (pu, pv) == (b, a), "{e:?} does not lie over {base:?}");
        assert_eq!(cover.sheet(u) != cover.sheet(v), cover.is_crossed(base));
    }
}

#[test]
fn cover_of_k33_plus_edge() {
    let mut g = families::complete_bipartite(3, 3);
    g.add_edge(VertexId(0), VertexId(1));
    // (0,3), (1,4), (2,5)
    let crossed = [EdgeId(8), EdgeId(4), EdgeId(0)];
    let cover = double_cover(&g, &crossed);
    assert_eq!(cover.graph.num_vertices(), 12);
    assert_eq!(cover.graph.num_edges(), 20);
    assert_eq!(cover.crossed, vec![EdgeId(0), EdgeId(4), EdgeId(8)]);
    assert_eq!(cover.cross_edges().len(), 6);
    assert_eq!(cover.graph.endpoints(EdgeId(0)), (VertexId(0), VertexId(9)));
    assert_eq!(cover.graph.endpoints(EdgeId(10)), (VertexId(3), VertexId(6)));
    assert_eq!(cover.graph.endpoints(EdgeId(19)), (VertexId(6), VertexId(7)));
    assert_projects_onto(&g, &cover);
}

#[test]
fn planar_graphs_need_no_crossed_edges() {
    let g = families::complete(4);
    let dpc = find_double_planar_cover(&PathAddition, &g, CoverCfg::default()).unwrap();
    assert!(dpc.cover.crossed.is_empty());
    let mut eg = embedding_from_dpc(&g, &dpc);
    assert_eq!(euler_genus(&eg), 0);
    assert!(is_orientable(&mut eg));
}

#[test]
fn kuratowski_graphs_have_planar_double_covers() {
    for g in [families::complete(5), families::complete_bipartite(3, 3), families::petersen()] {
        let dpc = find_double_planar_cover(&PathAddition, &g, CoverCfg::default()).unwrap();
        assert!(!dpc.cover.crossed.is_empty());
        assert!(PathAddition.is_planar(&dpc.cover.graph));
        assert_projects_onto(&g, &dpc.cover);
        assert_eq!(euler_genus(&dpc.embedding()), 0);
    }
}

#[test]
fn k6_projects_to_the_projective_plane() {
    let g = families::complete(6);
    let dpc = find_double_planar_cover(&PathAddition, &g, CoverCfg::default()).unwrap();
    // 15 edges against 3n - 6 = 12 planar ones.
    assert!(dpc.cover.crossed.len() >= 3);
    let mut eg = embedding_from_dpc(&g, &dpc);
    assert_eq!(eg.validate(), Ok(()));
    assert_eq!(euler_genus(&eg), 1);
    assert!(!is_orientable(&mut eg));
}

#[test]
fn projective_embeddings_of_small_obstructions() {
    for g in [
        families::complete(5),
        families::complete_bipartite(3, 3),
        families::complete_bipartite(3, 4),
        families::petersen(),
    ] {
        let mut eg = find_projective_embedding(&PathAddition, &g, CoverCfg { seed: 7, max_crossed: None })
            .unwrap();
        assert_eq!(eg.graph(), &g);
        assert_eq!(euler_genus(&eg), 1);
        assert!(!is_orientable(&mut eg));
    }
}

#[test]
fn non_projective_graphs_are_rejected() {
    // K7 fails the edge count, K_{4,4} exhausts its co-tree.
    assert!(find_double_planar_cover(&PathAddition, &families::complete(7), CoverCfg::default()).is_none());
    assert!(find_projective_embedding(&PathAddition, &families::complete_bipartite(4, 4), CoverCfg::default())
        .is_none());
}

#[test]
fn subset_cap_limits_the_search() {
    let g = families::complete(6);
    let cfg = CoverCfg {
        seed: 1,
        max_crossed: Some(2),
    };
    assert!(find_double_planar_cover(&PathAddition, &g, cfg).is_none());
}

#[test]
fn same_seed_same_cover() {
    let g = families::petersen();
    let cfg = CoverCfg {
        seed: 42,
        max_crossed: None,
    };
    let a = find_double_planar_cover(&PathAddition, &g, cfg).unwrap();
    let b = find_double_planar_cover(&PathAddition, &g, cfg).unwrap();
    assert_eq!(a, b);
}

fn graph_and_subset() -> impl Strategy<Value = (Graph, Vec<EdgeId>)> {
    (2usize..8).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, any::<bool>()), 0..16).prop_map(move |pairs| {
            let mut g = Graph::new(n);
            let mut crossed = Vec::new();
            for (a, b, cross) in pairs {
                if a != b {
                    let e = g.add_edge(VertexId(a), VertexId(b));
                    if cross {
                        crossed.push(e);
                    }
                }
            }
            (g, crossed)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cover_counts_and_projection((g, crossed) in graph_and_subset()) {
        let cover = double_cover(&g, &crossed);
        prop_assert_eq!(cover.cross_edges().len(), 2 * crossed.len());
        assert_projects_onto(&g, &cover);
        for v in cover.graph.vertices() {
            prop_assert_eq!(cover.graph.degree(v), g.degree(cover.project_vertex(v)));
        }
    }
}
