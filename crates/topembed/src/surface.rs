//! Which surface a graph was found to embed in.
//!
//! The one place callers branch on the kind of result; engines themselves
//! return plain `Option`/`Result` values.

use tracing::debug;

use crate::embedding::EmbeddedGraph;
use crate::graph::Graph;
use crate::planarity::{plane_embedding, KuratowskiWitness, PlanarityOracle};
use crate::projective::{find_projective_embedding, CoverCfg};

/// Euler genus of the sphere.
pub const PLANE_EULER_GENUS: usize = 0;
/// Euler genus of the projective plane.
pub const PROJECTIVE_PLANE_EULER_GENUS: usize = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEmbedding {
    /// All signals positive, Euler genus 0.
    Planar(EmbeddedGraph),
    /// Euler genus 1 with a one-sided cycle.
    ProjectivePlanar(EmbeddedGraph),
    /// Neither search succeeded; the witness certifies non-planarity.
    Unknown(KuratowskiWitness),
}

impl SurfaceEmbedding {
    pub fn euler_genus(&self) -> Option<usize> {
        match self {
            SurfaceEmbedding::Planar(_) => Some(PLANE_EULER_GENUS),
            SurfaceEmbedding::ProjectivePlanar(_) => Some(PROJECTIVE_PLANE_EULER_GENUS),
            SurfaceEmbedding::Unknown(_) => None,
        }
    }

    pub fn embedding(&self) -> Option<&EmbeddedGraph> {
        match self {
            SurfaceEmbedding::Planar(eg) | SurfaceEmbedding::ProjectivePlanar(eg) => Some(eg),
            SurfaceEmbedding::Unknown(_) => None,
        }
    }
}

/// Try the plane, then the projective plane.
pub fn classify<O: PlanarityOracle + ?Sized>(oracle: &O, g: &Graph, cfg: CoverCfg) -> SurfaceEmbedding {
    let nonplanar = match plane_embedding(oracle, g.clone()) {
        Ok(eg) => return SurfaceEmbedding::Planar(eg),
        Err(nonplanar) => nonplanar,
    };
    match find_projective_embedding(oracle, g, cfg) {
        Some(eg) => SurfaceEmbedding::ProjectivePlanar(eg),
        None => {
            debug!(witness = nonplanar.witness.edges.len(), "not projective-planar");
            SurfaceEmbedding::Unknown(nonplanar.witness)
        }
    }
}
