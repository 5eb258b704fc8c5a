//! Curated API surface.
//!
//! One import for the CLI, benches, and integration tests. Module paths stay
//! available for anything not listed here.

// Graph model
pub use crate::graph::{
    families, find_cycle, fundamental_cycle, random_spanning_forest, EdgeId, Graph, GraphError,
    IndexPolicy, VertexId,
};
// Embeddings and transforms
pub use crate::embedding::{
    all_facial_walks, cut_along_cycle, euler_genus, is_one_sided, is_orientable,
    positive_spanning_tree, smallest_one_sided_cycle, CycleCut, EmbeddedGraph, EmbeddingError,
    FacialWalk, RotationSystem, Signal,
};
// Planarity
pub use crate::planarity::{
    plane_embedding, KuratowskiWitness, NonPlanarGraph, PathAddition, PlanarityOracle,
};
// Double planar cover
pub use crate::projective::{
    double_cover, embedding_from_dpc, find_double_planar_cover, find_projective_embedding,
    CoverCfg, DoubleCover, PlanarDoubleCover,
};
// Crossing number
pub use crate::xnumber::{
    crossing_number, leq_xnumber, planar_xnumber, xnumber, CrossingDrawing, CrossingVertex,
    Spread, XCfg,
};
// Boundary result
pub use crate::surface::{classify, SurfaceEmbedding};
