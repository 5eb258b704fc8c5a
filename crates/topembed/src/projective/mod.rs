//! Double planar cover engine.
//!
//! Purpose
//! - `double_cover(G, S)`: two copies of `G` with the copies of every edge in
//!   `S` cross-wired between the sheets.
//! - `find_double_planar_cover`: search crossed subsets `S` of a random
//!   co-tree by increasing size until the cover is planar.
//! - `embedding_from_dpc`: read a signed embedding of `G` off sheet 0 of a
//!   planar cover; `find_projective_embedding` chains the two.
//!
//! Subsets are restricted to a co-tree because switching along a spanning
//! tree makes every tree edge positive without changing the embedding.

mod cover;
mod subsets;

pub use cover::{
    double_cover, embedding_from_dpc, find_double_planar_cover, find_projective_embedding,
    CoverCfg, DoubleCover, PlanarDoubleCover,
};

#[cfg(test)]
mod tests;
