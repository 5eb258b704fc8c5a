//! Path-addition planarity test (Demoucron, Malgrange, Pertuiset).
//!
//! Each biconnected block is embedded on its own: start from a cycle (two
//! faces), then repeatedly pick a fragment of the unembedded part, choose one
//! of its admissible faces (a face whose boundary holds every attachment
//! vertex of the fragment), and draw a path of the fragment through that face.
//! A fragment with no admissible face proves the block non-planar. Fragments
//! with a single admissible face go first; with that rule the greedy choice
//! never paints itself into a corner.
//!
//! Faces are closed dart sequences. A block rotation is read back from the
//! faces: where a face enters `v` along `e` and leaves along `f`, `f` follows
//! `e` in the rotation at `v`. That is the successor rule `all_facial_walks`
//! uses, so retracing the result reproduces the faces.

use tracing::trace;

use crate::embedding::RotationSystem;
use crate::graph::{EdgeId, Graph, VertexId};

use super::blocks::biconnected_blocks;
use super::{KuratowskiWitness, PlanarityOracle};

/// Quadratic planarity oracle; see the module docs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathAddition;

/// Edge traversed away from `tail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Dart {
    edge: EdgeId,
    tail: VertexId,
}

struct Fragment {
    edges: Vec<EdgeId>,
    attachments: Vec<VertexId>,
}

struct BlockEmbedder<'g> {
    g: &'g Graph,
    in_block: Vec<bool>,
    vertices: Vec<VertexId>,
    placed_edge: Vec<bool>,
    placed_vertex: Vec<bool>,
    faces: Vec<Vec<Dart>>,
    remaining: usize,
}

impl<'g> BlockEmbedder<'g> {
    fn new(g: &'g Graph, block: &[EdgeId]) -> Self {
        let mut in_block = vec![false; g.edge_bound()];
        let mut seen = vec![false; g.num_vertices()];
        let mut vertices = Vec::new();
        for &e in block {
            in_block[e.0] = true;
            let (u, v) = g.endpoints(e);
            for x in [u, v] {
                if !seen[x.0] {
                    seen[x.0] = true;
                    vertices.push(x);
                }
            }
        }
        Self {
            g,
            in_block,
            vertices,
            placed_edge: vec![false; g.edge_bound()],
            placed_vertex: vec![false; g.num_vertices()],
            faces: Vec::new(),
            remaining: block.len(),
        }
    }

    fn head(&self, d: Dart) -> VertexId {
        self.g.other_endpoint(d.edge, d.tail)
    }

    fn reversed(&self, path: &[Dart]) -> Vec<Dart> {
        path.iter()
            .rev()
            .map(|&d| Dart {
                edge: d.edge,
                tail: self.head(d),
            })
            .collect()
    }

    fn block_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.g
            .incident_edges(v)
            .iter()
            .copied()
            .filter(|e| self.in_block[e.0])
    }

    fn place(&mut self, path: &[Dart]) {
        for &d in path {
            self.placed_vertex[d.tail.0] = true;
            let h = self.head(d);
            self.placed_vertex[h.0] = true;
            self.placed_edge[d.edge.0] = true;
            self.remaining -= 1;
        }
    }

    /// First block edge closed into a cycle by a BFS path that avoids it.
    fn initial_cycle(&self, first: EdgeId) -> Vec<Dart> {
        let (u, v) = self.g.endpoints(first);
        let mut via: Vec<Option<Dart>> = vec![None; self.g.num_vertices()];
        let mut reached = vec![false; self.g.num_vertices()];
        reached[v.0] = true;
        let mut queue = std::collections::VecDeque::from([v]);
        while let Some(x) = queue.pop_front() {
            if x == u {
                break;
            }
            for e in self.block_edges(x) {
                let y = self.g.other_endpoint(e, x);
                if e != first && !reached[y.0] {
                    reached[y.0] = true;
                    via[y.0] = Some(Dart { edge: e, tail: x });
                    queue.push_back(y);
                }
            }
        }
        let mut back = Vec::new();
        let mut x = u;
        while let Some(d) = via[x.0] {
            back.push(d);
            x = d.tail;
        }
        debug_assert_eq!(x, v, "block edge {first:?} lies on no cycle");
        let mut cycle = vec![Dart { edge: first, tail: u }];
        cycle.extend(back.into_iter().rev());
        cycle
    }

    fn fragments(&self) -> Vec<Fragment> {
        let g = self.g;
        let mut out = Vec::new();
        for &v in &self.vertices {
            if !self.placed_vertex[v.0] {
                continue;
            }
            for e in self.block_edges(v) {
                let w = g.other_endpoint(e, v);
                if !self.placed_edge[e.0] && self.placed_vertex[w.0] && v < w {
                    out.push(Fragment {
                        edges: vec![e],
                        attachments: vec![v, w],
                    });
                }
            }
        }
        let mut in_fragment = vec![false; g.num_vertices()];
        let mut edge_seen = vec![false; g.edge_bound()];
        let mut attached = vec![usize::MAX; g.num_vertices()];
        for &start in &self.vertices {
            if self.placed_vertex[start.0] || in_fragment[start.0] {
                continue;
            }
            let tag = out.len();
            let mut frag = Fragment {
                edges: Vec::new(),
                attachments: Vec::new(),
            };
            in_fragment[start.0] = true;
            let mut stack = vec![start];
            while let Some(x) = stack.pop() {
                for e in self.block_edges(x) {
                    if !edge_seen[e.0] {
                        edge_seen[e.0] = true;
                        frag.edges.push(e);
                    }
                    let y = g.other_endpoint(e, x);
                    if self.placed_vertex[y.0] {
                        if attached[y.0] != tag {
                            attached[y.0] = tag;
                            frag.attachments.push(y);
                        }
                    } else if !in_fragment[y.0] {
                        in_fragment[y.0] = true;
                        stack.push(y);
                    }
                }
            }
            out.push(frag);
        }
        out
    }

    /// Faces whose boundary contains every attachment of `frag`.
    fn admissible_faces(&self, frag: &Fragment, on_face: &[Vec<bool>]) -> Vec<usize> {
        (0..self.faces.len())
            .filter(|&f| frag.attachments.iter().all(|a| on_face[f][a.0]))
            .collect()
    }

    /// Path through `frag` between two distinct attachments.
    fn fragment_path(&self, frag: &Fragment) -> Vec<Dart> {
        let g = self.g;
        let a = frag.attachments[0];
        if let [e] = frag.edges[..] {
            return vec![Dart { edge: e, tail: a }];
        }
        let mut usable = vec![false; g.edge_bound()];
        for e in &frag.edges {
            usable[e.0] = true;
        }
        let mut via: Vec<Option<Dart>> = vec![None; g.num_vertices()];
        let mut reached = vec![false; g.num_vertices()];
        reached[a.0] = true;
        let mut queue = std::collections::VecDeque::from([a]);
        let mut end = None;
        'bfs: while let Some(x) = queue.pop_front() {
            for e in self.block_edges(x) {
                if !usable[e.0] {
                    continue;
                }
                let y = g.other_endpoint(e, x);
                if reached[y.0] {
                    continue;
                }
                reached[y.0] = true;
                via[y.0] = Some(Dart { edge: e, tail: x });
                if self.placed_vertex[y.0] {
                    end = Some(y);
                    break 'bfs;
                }
                queue.push_back(y);
            }
        }
        let Some(b) = end else {
            panic!("fragment at {a:?} has a single attachment inside a biconnected block");
        };
        let mut back = Vec::new();
        let mut x = b;
        while x != a {
            let Some(d) = via[x.0] else {
                panic!("broken BFS chain at {x:?}");
            };
            back.push(d);
            x = d.tail;
        }
        back.reverse();
        back
    }

    /// Split face `f` by `path`, which runs between two vertices of its boundary.
    fn split_face(&mut self, f: usize, path: &[Dart]) {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return;
        };
        let (a, b) = (first.tail, self.head(*last));
        let face = std::mem::take(&mut self.faces[f]);
        let len = face.len();
        let pos = |v: VertexId| match face.iter().position(|d| d.tail == v) {
            Some(i) => i,
            None => panic!("{v:?} is not on face {f}"),
        };
        let (i, j) = (pos(a), pos(b));
        let span = |from: usize, to: usize| -> Vec<Dart> {
            let n = (to + len - from) % len;
            (0..n).map(|k| face[(from + k) % len]).collect()
        };
        let mut one = span(i, j);
        one.extend(self.reversed(path));
        let mut two = span(j, i);
        two.extend_from_slice(path);
        self.faces[f] = one;
        self.faces.push(two);
    }

    /// Embed the block; `None` if it is not planar.
    fn run(mut self, first: EdgeId) -> Option<Vec<(VertexId, Vec<EdgeId>)>> {
        let cycle = self.initial_cycle(first);
        self.place(&cycle);
        let reverse = self.reversed(&cycle);
        self.faces = vec![cycle, reverse];

        while self.remaining > 0 {
            let frags = self.fragments();
            let on_face: Vec<Vec<bool>> = self
                .faces
                .iter()
                .map(|face| {
                    let mut mark = vec![false; self.g.num_vertices()];
                    for d in face {
                        mark[d.tail.0] = true;
                    }
                    mark
                })
                .collect();
            let mut choice = None;
            for frag in &frags {
                let faces = self.admissible_faces(frag, &on_face);
                match faces.len() {
                    0 => {
                        trace!(attachments = frag.attachments.len(), "fragment has no admissible face");
                        return None;
                    }
                    1 => {
                        choice = Some((frag, faces[0]));
                        break;
                    }
                    _ => {
                        if choice.is_none() {
                            choice = Some((frag, faces[0]));
                        }
                    }
                }
            }
            let Some((frag, f)) = choice else {
                panic!("{} block edges left but no fragment found", self.remaining);
            };
            let path = self.fragment_path(frag);
            self.place(&path);
            self.split_face(f, &path);
        }
        Some(self.rotations())
    }

    fn rotations(&self) -> Vec<(VertexId, Vec<EdgeId>)> {
        let g = self.g;
        let side = |e: EdgeId, v: VertexId| usize::from(g.endpoints(e).0 != v);
        let mut succ = vec![[EdgeId(usize::MAX); 2]; g.edge_bound()];
        for face in &self.faces {
            for k in 0..face.len() {
                let (d, next) = (face[k], face[(k + 1) % face.len()]);
                succ[d.edge.0][side(d.edge, next.tail)] = next.edge;
            }
        }
        self.vertices
            .iter()
            .map(|&v| {
                let start = self.block_edges(v).next();
                let mut rot = Vec::new();
                if let Some(start) = start {
                    let mut e = start;
                    loop {
                        rot.push(e);
                        e = succ[e.0][side(e, v)];
                        if e == start {
                            break;
                        }
                    }
                }
                debug_assert_eq!(rot.len(), self.block_edges(v).count(), "rotation at {v:?} is not one cycle");
                (v, rot)
            })
            .collect()
    }
}

impl PathAddition {
    /// Embedding of `g`, or the edges of its first non-planar block.
    fn embed_blocks(&self, g: &Graph) -> Result<RotationSystem, Vec<EdgeId>> {
        let mut rotations = RotationSystem::new(g.num_vertices());
        for block in biconnected_blocks(g) {
            if let [e] = block[..] {
                let (u, v) = g.endpoints(e);
                rotations.at_mut(u).push(e);
                rotations.at_mut(v).push(e);
                continue;
            }
            match BlockEmbedder::new(g, &block).run(block[0]) {
                Some(parts) => {
                    for (v, rot) in parts {
                        rotations.at_mut(v).extend(rot);
                    }
                }
                None => return Err(block),
            }
        }
        Ok(rotations)
    }

    /// Edge-minimal non-planar subgraph of the non-planar `block`.
    fn minimal_witness(&self, g: &Graph, block: &[EdgeId]) -> KuratowskiWitness {
        let mut in_block = vec![false; g.edge_bound()];
        for e in block {
            in_block[e.0] = true;
        }
        let mut h = g.edge_subgraph(|e| in_block[e.0]);
        for &e in block {
            let (u, v) = h.remove_edge(e);
            if self.embed_blocks(&h).is_ok() {
                h.add_edge_at(u, v, e);
            }
        }
        KuratowskiWitness {
            edges: h.edges().collect(),
        }
    }
}

impl PlanarityOracle for PathAddition {
    fn embed(&self, g: &Graph) -> Result<RotationSystem, KuratowskiWitness> {
        self.embed_blocks(g)
            .map_err(|block| self.minimal_witness(g, &block))
    }

    fn try_embed(&self, g: &Graph) -> Option<RotationSystem> {
        self.embed_blocks(g).ok()
    }
}
