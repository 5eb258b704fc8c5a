//! Signed rotation systems (general embeddings) and transforms on them.
//!
//! Purpose
//! - `EmbeddedGraph`: a graph together with a cyclic order of incident edges
//!   at every vertex and a signal per edge. Planar embeddings are the
//!   all-positive ones with Euler genus 0; projective-planar embeddings have
//!   Euler genus 1 and at least one one-sided cycle.
//! - Face tracing (`all_facial_walks`, `euler_genus`), orientation
//!   normalization (`positive_spanning_tree`, `is_orientable`) and surgery
//!   (`cut_along_cycle`).
//!
//! Conventions
//! - A local switch at a vertex (reverse its rotation, flip its incident
//!   signals) yields an equivalent embedding; all queries here are invariant
//!   under switches.
//! - Edge indices inside an embedding follow the graph's `IndexPolicy`.
//!   `Clone` compacts them; use `compacted` explicitly when that matters.

mod cut;
mod faces;
mod orient;
mod types;

pub use cut::{cut_along_cycle, CycleCut};
pub use faces::{all_facial_walks, euler_genus, FacialWalk, WalkStep};
pub use orient::{is_one_sided, is_orientable, positive_spanning_tree, smallest_one_sided_cycle};
pub use types::{EmbeddedGraph, EmbeddingError, RotationSystem, Signal};

#[cfg(test)]
mod tests;
