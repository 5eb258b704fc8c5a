//! Crossing number engine.
//!
//! Purpose
//! - Decide `cr(G) <= k` by inserting synthetic crossing vertices and asking
//!   the planarity oracle about the result, with exact undo between branches.
//! - `planar_xnumber` returns the planar drawing with its crossing vertices;
//!   `xnumber` runs the same search against any caller-supplied predicate.
//!
//! Index contract
//! - Crossing `e = (u, v)` with `f = (a, b)` keeps `e` on `(w, u)` and `f` on
//!   `(w, a)`; `(w, v)` and `(w, b)` get the next two free indices. Undo
//!   restores the endpoints, the indices, and the edge bound exactly, so sibling
//!   branches see identical graphs.
//! - The last search level only tries disjoint pairs from the Kuratowski
//!   witness of the current graph (`XCfg::use_witness_pairs`).

mod search;

pub use search::{
    crossing_number, leq_xnumber, planar_xnumber, xnumber, CrossingDrawing, CrossingVertex,
    Spread, XCfg,
};

#[cfg(test)]
mod tests;
