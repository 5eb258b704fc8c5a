//! Biconnected blocks (Tarjan, edge stack).

use crate::graph::{EdgeId, Graph, VertexId};

struct Walk<'g> {
    g: &'g Graph,
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    time: usize,
    stack: Vec<EdgeId>,
    blocks: Vec<Vec<EdgeId>>,
}

/// DFS frame: vertex, the tree edge it was entered by, next incident slot.
struct Frame {
    u: VertexId,
    via: Option<EdgeId>,
    next: usize,
}

impl Walk<'_> {
    fn discover(&mut self, u: VertexId) {
        self.disc[u.0] = Some(self.time);
        self.low[u.0] = self.time;
        self.time += 1;
    }

    /// Iterative Tarjan walk of the component of `root`.
    fn visit(&mut self, root: VertexId) {
        self.discover(root);
        let mut frames = vec![Frame {
            u: root,
            via: None,
            next: 0,
        }];
        while let Some(top) = frames.last_mut() {
            let (u, via) = (top.u, top.via);
            let Some(&e) = self.g.incident_edges(u).get(top.next) else {
                frames.pop();
                if let (Some(e), Some(parent)) = (via, frames.last()) {
                    self.retreat(parent.u, u, e);
                }
                continue;
            };
            top.next += 1;
            if via == Some(e) {
                continue;
            }
            let w = self.g.other_endpoint(e, u);
            let du = self.disc_time(u);
            match self.disc[w.0] {
                None => {
                    self.stack.push(e);
                    self.discover(w);
                    frames.push(Frame {
                        u: w,
                        via: Some(e),
                        next: 0,
                    });
                }
                // Back edge to an ancestor; the descendant side pushed it already otherwise.
                Some(dw) if dw < du => {
                    self.stack.push(e);
                    self.low[u.0] = self.low[u.0].min(dw);
                }
                Some(_) => {}
            }
        }
    }

    #[inline]
    fn disc_time(&self, u: VertexId) -> usize {
        self.disc[u.0].unwrap_or(0)
    }

    /// Child `w` of `u` (tree edge `e`) is finished: fold its low point, cut a block.
    fn retreat(&mut self, u: VertexId, w: VertexId, e: EdgeId) {
        self.low[u.0] = self.low[u.0].min(self.low[w.0]);
        if self.low[w.0] >= self.disc_time(u) {
            let mut block = Vec::new();
            while let Some(f) = self.stack.pop() {
                block.push(f);
                if f == e {
                    break;
                }
            }
            self.blocks.push(block);
        }
    }
}

/// Edge sets of the biconnected blocks of `g`. Parallel edges share a block;
/// a bridge is a block of its own. Isolated vertices belong to no block.
pub fn biconnected_blocks(g: &Graph) -> Vec<Vec<EdgeId>> {
    let n = g.num_vertices();
    let mut walk = Walk {
        g,
        disc: vec![None; n],
        low: vec![0; n],
        time: 0,
        stack: Vec::new(),
        blocks: Vec::new(),
    };
    for v in g.vertices() {
        if walk.disc[v.0].is_none() {
            walk.visit(v);
        }
    }
    for block in &mut walk.blocks {
        block.sort_unstable();
    }
    walk.blocks
}
