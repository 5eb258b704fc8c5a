//! Common graph families used in tests, benches, and the CLI.
//!
//! Edge indices follow the construction order documented on each generator.

use super::types::{Graph, VertexId};

fn push(g: &mut Graph, u: usize, v: usize) {
    g.add_edge(VertexId(u), VertexId(v));
}

/// Complete graph `K_n`; edges in lexicographic order `(i, j)`, `i < j`.
pub fn complete(n: usize) -> Graph {
    let mut g = Graph::new(n);
    for i in 0..n {
        for j in i + 1..n {
            push(&mut g, i, j);
        }
    }
    g
}

/// Complete bipartite graph `K_{p,q}` with parts `0..p` and `p..p+q`.
pub fn complete_bipartite(p: usize, q: usize) -> Graph {
    let mut g = Graph::new(p + q);
    for i in 0..p {
        for j in p..p + q {
            push(&mut g, i, j);
        }
    }
    g
}

/// Cycle `C_n` (`n >= 3`); edge `i` joins `i` and `i+1 mod n`.
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a simple cycle needs at least 3 vertices");
    let mut g = Graph::new(n);
    for i in 0..n {
        push(&mut g, i, (i + 1) % n);
    }
    g
}

/// Möbius ladder `V_{2n}`: the cycle `C_{2n}` plus the `n` diameters `(i, i+n)`.
pub fn mobius_ladder(n: usize) -> Graph {
    let mut g = cycle(2 * n);
    for i in 0..n {
        push(&mut g, i, i + n);
    }
    g
}

/// Wagner graph `V_8`.
pub fn wagner() -> Graph {
    mobius_ladder(4)
}

/// Petersen graph: outer 5-cycle `0..5`, spokes `(i, i+5)`, inner pentagram.
pub fn petersen() -> Graph {
    let mut g = Graph::new(10);
    for i in 0..5 {
        push(&mut g, i, (i + 1) % 5);
    }
    for i in 0..5 {
        push(&mut g, i, i + 5);
    }
    for i in 0..5 {
        push(&mut g, 5 + i, 5 + (i + 2) % 5);
    }
    g
}
