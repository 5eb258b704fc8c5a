use super::*;
use crate::graph::{families, EdgeId, Graph, VertexId};
use crate::planarity::{PathAddition, PlanarityOracle};
use proptest::prelude::*;

/// Embedding of a simple graph from neighbour orders; `negative` lists vertex pairs.
fn by_neighbours(
    g: Graph,
    orders: &[&[usize]],
    negative: &[(usize, usize)],
) -> EmbeddedGraph {
    let mut rot = RotationSystem::new(g.num_vertices());
    for (v, order) in orders.iter().enumerate() {
        let v = VertexId(v);
        *rot.at_mut(v) = order
            .iter()
            .map(|&w| g.edge_between(v, VertexId(w)).unwrap())
            .collect();
    }
    let mut signals = vec![Signal::Positive; g.edge_bound()];
    for &(a, b) in negative {
        let e = g.edge_between(VertexId(a), VertexId(b)).unwrap();
        signals[e.0] = Signal::Negative;
    }
    EmbeddedGraph::new(g, rot, signals).unwrap()
}

/// `K_{3,3}` in the projective plane: four faces, two negative edges.
fn projective_k33() -> EmbeddedGraph {
    by_neighbours(
        families::complete_bipartite(3, 3),
        &[&[3, 4, 5], &[5, 4, 3], &[3, 5, 4], &[1, 2, 0], &[0, 2, 1], &[0, 2, 1]],
        &[(1, 4), (2, 5)],
    )
}

/// Plane `K_4` with outer triangle `0 1 2` and vertex 3 inside.
fn plane_k4(negative: &[(usize, usize)]) -> EmbeddedGraph {
    by_neighbours(
        families::complete(4),
        &[&[1, 3, 2], &[2, 3, 0], &[0, 3, 1], &[0, 1, 2]],
        negative,
    )
}

fn face_lengths(eg: &EmbeddedGraph) -> Vec<usize> {
    let mut lens: Vec<usize> = all_facial_walks(eg).iter().map(FacialWalk::len).collect();
    lens.sort_unstable();
    lens
}

#[test]
fn projective_k33_faces_and_genus() {
    let eg = projective_k33();
    assert_eq!(face_lengths(&eg), vec![4, 4, 4, 6]);
    assert_eq!(euler_genus(&eg), 1);
    for walk in all_facial_walks(&eg) {
        // Consecutive steps share a vertex.
        let n = walk.len();
        for i in 0..n {
            let s = walk.steps[i];
            let next = walk.steps[(i + 1) % n];
            assert_eq!(eg.graph().other_endpoint(s.edge, s.from), next.from);
        }
    }
}

#[test]
fn plane_k4_is_a_sphere() {
    let eg = plane_k4(&[]);
    assert_eq!(face_lengths(&eg), vec![3, 3, 3, 3]);
    assert_eq!(euler_genus(&eg), 0);
}

#[test]
fn cycle_has_two_faces_and_chord_adds_one() {
    let g = families::cycle(4);
    let eg = by_neighbours(g, &[&[1, 3], &[2, 0], &[3, 1], &[0, 2]], &[]);
    assert_eq!(face_lengths(&eg), vec![4, 4]);
    assert_eq!(euler_genus(&eg), 0);

    let mut g = families::cycle(4);
    g.add_edge(VertexId(0), VertexId(2));
    let eg = by_neighbours(g, &[&[1, 2, 3], &[2, 0], &[3, 0, 1], &[2, 0]], &[]);
    assert_eq!(face_lengths(&eg), vec![3, 3, 4]);
    assert_eq!(face_lengths(&eg).iter().sum::<usize>(), 2 * eg.num_edges());
}

#[test]
fn projective_k33_is_not_orientable() {
    let mut eg = projective_k33();
    assert!(!is_orientable(&mut eg));
    // Normalization is a sequence of switches, so the surface is unchanged.
    assert_eq!(euler_genus(&eg), 1);
    let cycle = smallest_one_sided_cycle(&eg).unwrap();
    assert_eq!(cycle.len(), 4);
    assert!(is_one_sided(&eg, &cycle));
}

#[test]
fn negative_edges_that_switch_away_are_orientable() {
    // Switching at 0 and 3 of a plane K4 negates exactly these four edges.
    let mut eg = plane_k4(&[(0, 1), (0, 2), (3, 1), (3, 2)]);
    assert_eq!(eg.negative_edges().len(), 4);
    assert!(is_orientable(&mut eg));
    assert!(eg.negative_edges().is_empty());
    assert_eq!(euler_genus(&eg), 0);
    assert_eq!(smallest_one_sided_cycle(&eg), None);

    let mut eg = plane_k4(&[]);
    assert!(is_orientable(&mut eg));
}

#[test]
fn long_signed_path_is_orientable() {
    let n = 100_000;
    let edges: Vec<(usize, usize)> = (1..n).map(|i| (i - 1, i)).collect();
    let g = Graph::from_edges(n, &edges).unwrap();
    let rotations: Vec<Vec<EdgeId>> = g.vertices().map(|v| g.incident_edges(v).to_vec()).collect();
    let mut eg = EmbeddedGraph::orientable(g, rotations.into()).unwrap();
    for i in (0..n - 1).step_by(3) {
        eg.set_signal(EdgeId(i), Signal::Negative);
    }
    assert!(is_orientable(&mut eg));
    assert!(eg.negative_edges().is_empty());
}

#[test]
fn positive_spanning_tree_clears_tree_edges() {
    let mut eg = projective_k33();
    let forest = crate::graph::dfs_forest(eg.graph(), VertexId(2));
    positive_spanning_tree(&mut eg, &forest);
    for e in forest.tree_edges() {
        assert_eq!(eg.signal(e), Signal::Positive);
    }
    assert_eq!(forest.tree_edges().len(), 5);
}

#[test]
fn switch_keeps_faces() {
    let eg = projective_k33();
    let mut switched = projective_k33();
    switched.switch_at(VertexId(1));
    switched.switch_at(VertexId(4));
    assert_ne!(eg.negative_edges(), switched.negative_edges());
    assert_eq!(face_lengths(&eg), face_lengths(&switched));
    let cycle = [EdgeId(0), EdgeId(3), EdgeId(4), EdgeId(1)];
    assert_eq!(is_one_sided(&eg, &cycle), is_one_sided(&switched, &cycle));
}

#[test]
fn clone_compacts_edge_holes() {
    let mut g = families::cycle(4);
    let chord = g.add_edge(VertexId(0), VertexId(2));
    g.add_edge(VertexId(1), VertexId(3));
    g.remove_edge(chord);
    assert_eq!(g.edge_bound(), 6);
    let eg = by_neighbours(g, &[&[1, 3], &[3, 2, 0], &[3, 1], &[0, 1, 2]], &[(1, 2)]);
    let copy = eg.clone();
    assert_eq!(copy.graph().edge_bound(), 5);
    assert_eq!(copy.num_edges(), 5);
    assert_eq!(copy.endpoints(EdgeId(4)), (VertexId(1), VertexId(3)));
    assert_eq!(copy.negative_edges(), vec![EdgeId(1)]);
    assert_eq!(face_lengths(&copy), face_lengths(&eg));
}

#[test]
fn without_isolated_vertices_drops_only_degree_zero() {
    let mut g = families::complete(3);
    g.add_vertex();
    let eg = by_neighbours(g, &[&[1, 2], &[2, 0], &[0, 1], &[]], &[]);
    let trimmed = eg.without_isolated_vertices();
    assert_eq!(trimmed.num_vertices(), 3);
    assert_eq!(euler_genus(&trimmed), euler_genus(&eg));
}

#[test]
fn validate_reports_broken_rotations() {
    let g = families::complete(3);
    let ok = vec![
        vec![EdgeId(0), EdgeId(1)],
        vec![EdgeId(0), EdgeId(2)],
        vec![EdgeId(1), EdgeId(2)],
    ];
    assert!(EmbeddedGraph::orientable(g.clone(), ok.clone().into()).is_ok());

    let mut missing = ok.clone();
    missing[1].pop();
    assert_eq!(
        EmbeddedGraph::orientable(g.clone(), missing.into()),
        Err(EmbeddingError::RotationMismatch {
            vertex: 1,
            degree: 2,
            found: 1
        })
    );

    let mut foreign = ok.clone();
    foreign[0][1] = EdgeId(2);
    assert_eq!(
        EmbeddedGraph::orientable(g.clone(), foreign.into()),
        Err(EmbeddingError::ForeignEdge { vertex: 0, edge: 2 })
    );

    assert_eq!(
        EmbeddedGraph::new(g.clone(), ok.clone().into(), vec![Signal::Positive; 2]),
        Err(EmbeddingError::SignalCount {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        EmbeddedGraph::orientable(g, ok[..2].to_vec().into()),
        Err(EmbeddingError::VertexCount {
            expected: 3,
            found: 2
        })
    );
}

#[test]
fn cut_one_sided_cycle_opens_projective_plane_to_disk() {
    let mut eg = projective_k33();
    let cycle = [EdgeId(0), EdgeId(3), EdgeId(4), EdgeId(1)];
    assert!(is_one_sided(&eg, &cycle));
    let cut = cut_along_cycle(&mut eg, &cycle).unwrap();
    assert_eq!(
        cut.split,
        vec![
            (VertexId(0), VertexId(6)),
            (VertexId(3), VertexId(7)),
            (VertexId(1), VertexId(8)),
            (VertexId(4), VertexId(9)),
        ]
    );
    assert_eq!(
        cut.copies,
        vec![
            (EdgeId(0), EdgeId(9)),
            (EdgeId(3), EdgeId(10)),
            (EdgeId(4), EdgeId(11)),
            (EdgeId(1), EdgeId(12)),
        ]
    );
    assert_eq!(eg.validate(), Ok(()));
    assert_eq!(eg.num_vertices(), 10);
    assert_eq!(eg.num_edges(), 13);
    assert_eq!(face_lengths(&eg), vec![4, 4, 4, 6, 8]);
    assert_eq!(euler_genus(&eg), 0);
    assert!(is_orientable(&mut eg));
    assert!(PathAddition.is_planar(eg.graph()));
}

#[test]
fn cut_two_sided_triangle_separates_plane_k4() {
    let mut eg = plane_k4(&[]);
    let cut = cut_along_cycle(&mut eg, &[EdgeId(0), EdgeId(3), EdgeId(1)]).unwrap();
    assert_eq!(cut.split.len(), 3);
    assert_eq!(eg.num_vertices(), 7);
    assert_eq!(eg.num_edges(), 9);
    assert_eq!(face_lengths(&eg), vec![3; 6]);
    assert_eq!(euler_genus(&eg), 0);
    // The copy side of the triangle is a separate component.
    for &(_, b) in &cut.copies {
        let (x, y) = eg.endpoints(b);
        assert!(x.0 >= 4 && y.0 >= 4);
    }
}

#[test]
fn cut_rejects_open_walks() {
    let mut eg = plane_k4(&[]);
    assert_eq!(
        cut_along_cycle(&mut eg, &[EdgeId(0), EdgeId(3)]),
        Err(EmbeddingError::NotACycle { edge: 3 })
    );
    assert_eq!(
        cut_along_cycle(&mut eg, &[EdgeId(0), EdgeId(0)]),
        Err(EmbeddingError::NotACycle { edge: 0 })
    );
    assert_eq!(
        cut_along_cycle(&mut eg, &[EdgeId(0), EdgeId(9), EdgeId(1)]),
        Err(EmbeddingError::NotACycle { edge: 9 })
    );
    assert_eq!(eg, plane_k4(&[]));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn faces_cover_every_edge_twice(neg in prop::collection::vec(any::<bool>(), 9), flips in prop::collection::vec(any::<bool>(), 6)) {
        let g = families::complete_bipartite(3, 3);
        let mut eg = projective_k33();
        for e in g.edges() {
            eg.set_signal(e, if neg[e.0] { Signal::Negative } else { Signal::Positive });
        }
        let lens = face_lengths(&eg);
        prop_assert_eq!(lens.iter().sum::<usize>(), 2 * eg.num_edges());
        let mut used = vec![0usize; eg.graph().edge_bound()];
        for walk in all_facial_walks(&eg) {
            for e in walk.edges() {
                used[e.0] += 1;
            }
        }
        prop_assert!(used.iter().all(|&k| k == 2));

        for (v, &flip) in flips.iter().enumerate() {
            if flip {
                eg.switch_at(VertexId(v));
            }
        }
        prop_assert_eq!(face_lengths(&eg), lens);
    }
}
