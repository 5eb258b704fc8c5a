use super::*;
use crate::embedding::euler_genus;
use crate::graph::{families, EdgeId, Graph, VertexId};
use crate::planarity::{PathAddition, PlanarityOracle};
use proptest::prelude::*;

fn leq(g: &Graph, k: usize) -> bool {
    leq_xnumber(&PathAddition, g, k)
}

fn check_drawing(g: &Graph, drawing: &CrossingDrawing) {
    let eg = &drawing.embedding;
    assert_eq!(eg.validate(), Ok(()));
    assert_eq!(euler_genus(eg), 0);
    assert_eq!(eg.num_vertices(), g.num_vertices() + drawing.crossings.len());
    assert_eq!(eg.num_edges(), g.num_edges() + 2 * drawing.crossings.len());
    for c in &drawing.crossings {
        assert!(c.vertex.0 >= g.num_vertices());
        assert_eq!(eg.graph().degree(c.vertex), 4);
        for h in c.first.iter().chain(&c.second) {
            let (a, b) = eg.endpoints(*h);
            assert!(a == c.vertex || b == c.vertex);
        }
    }
}

#[test]
fn k5_needs_one_crossing() {
    let g = families::complete(5);
    assert!(!leq(&g, 0));
    assert!(leq(&g, 1));
    let drawing = planar_xnumber(&PathAddition, &g, 1, XCfg::default()).unwrap();
    assert_eq!(drawing.crossings.len(), 1);
    assert_eq!(drawing.crossings[0].vertex, VertexId(5));
    check_drawing(&g, &drawing);
}

#[test]
fn k33_needs_one_crossing() {
    let g = families::complete_bipartite(3, 3);
    assert!(!leq(&g, 0));
    assert!(leq(&g, 1));
    assert!(leq(&g, 2));
}

#[test]
fn k34_needs_two_crossings() {
    let g = families::complete_bipartite(3, 4);
    assert!(!leq(&g, 1));
    let all_pairs = XCfg {
        use_witness_pairs: false,
    };
    assert!(planar_xnumber(&PathAddition, &g, 1, all_pairs).is_none());
    let drawing = planar_xnumber(&PathAddition, &g, 2, XCfg::default()).unwrap();
    assert_eq!(drawing.crossings.len(), 2);
    check_drawing(&g, &drawing);
}

#[test]
fn planar_graphs_get_no_crossings() {
    let g = families::complete(4);
    assert!(leq(&g, 0));
    let drawing = planar_xnumber(&PathAddition, &g, 1, XCfg::default()).unwrap();
    assert!(drawing.crossings.is_empty());
    assert_eq!(drawing.embedding.graph(), &g);
}

#[test]
fn uncrossed_edges_keep_their_indices() {
    let g = families::complete(5);
    let drawing = planar_xnumber(&PathAddition, &g, 1, XCfg::default()).unwrap();
    let c = drawing.crossings[0];
    let crossed = [c.first[0], c.second[0]];
    for e in g.edges().filter(|e| !crossed.contains(e)) {
        assert_eq!(drawing.embedding.endpoints(e), g.endpoints(e));
    }
}

#[test]
fn petersen_crossing_number_is_two() {
    let g = families::petersen();
    let drawing = crossing_number(&PathAddition, &g, 3, XCfg::default()).unwrap();
    assert_eq!(drawing.crossings.len(), 2);
    check_drawing(&g, &drawing);
}

#[test]
fn k6_exceeds_two_crossings() {
    assert!(!leq(&families::complete(6), 2));
}

#[test]
#[ignore = "exhaustive three-level search, several seconds in release mode"]
fn k6_needs_three_crossings() {
    let g = families::complete(6);
    let drawing = planar_xnumber(&PathAddition, &g, 3, XCfg::default()).unwrap();
    assert_eq!(drawing.crossings.len(), 3);
    check_drawing(&g, &drawing);
}

#[test]
fn generic_search_with_planarity_predicate() {
    let g = families::complete_bipartite(3, 3);
    assert!(xnumber(&g, 0, |h| PathAddition.try_embed(h)).is_none());
    let spread = xnumber(&g, 1, |h| PathAddition.try_embed(h)).unwrap();
    assert_eq!(spread.crossings.len(), 1);
    assert_eq!(spread.graph.num_vertices(), 7);
    assert_eq!(spread.value.num_vertices(), 7);
}

#[test]
fn generic_search_crosses_synthetic_halves() {
    // Three disjoint edges; the predicate wants two crossings. The first pair
    // tried after (0,1) x (2,3) is the half (w,0) against (4,5).
    let g = Graph::from_edges(6, &[(0, 1), (2, 3), (4, 5)]).unwrap();
    let spread = xnumber(&g, 2, |h| (h.num_vertices() == 8).then_some(h.num_edges())).unwrap();
    assert_eq!(spread.crossings.len(), 2);
    assert_eq!(spread.value, 7);
    let first = spread.crossings[0];
    let second = spread.crossings[1];
    assert_eq!(first.first[0], EdgeId(0));
    assert_eq!(second.first[0], EdgeId(0));
    assert_eq!(second.second[0], EdgeId(2));
    assert_eq!(spread.graph.endpoints(EdgeId(0)), (VertexId(0), VertexId(7)));
}

fn small_graph() -> impl Strategy<Value = Graph> {
    (4usize..7).prop_flat_map(|n| {
        prop::collection::btree_set((0..n, 0..n), 0..12).prop_map(move |pairs| {
            let mut g = Graph::new(n);
            for (a, b) in pairs {
                if a < b {
                    g.add_edge(VertexId(a), VertexId(b));
                }
            }
            g
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn crossing_bound_is_monotone(g in small_graph()) {
        prop_assert_eq!(leq(&g, 0), PathAddition.is_planar(&g));
        let mut prev = false;
        for k in 0..3 {
            let now = leq(&g, k);
            prop_assert!(!prev || now, "cr <= {} but not <= {}", k - 1, k);
            prev = now;
        }
    }
}
