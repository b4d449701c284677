// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex-level tables for a [`crate::planar::graph::PlanarGraph`].
//!
//! Per-vertex state is small enough (a degree, an entry edge, a neighbour
//! bitset) that it is kept as parallel `Vec`s on the graph rather than a
//! `Vertex` struct per element — this matches how `firstedge`/`degree`/
//! `neighbours` are laid out as separate tables in the original C source,
//! and avoids an extra indirection on the decoder's hot loop.

use crate::bitset::BitSet;
use crate::planar::edge::{EdgeId, VertexId};

/// A vertex's degree and rotation entry point, plus its neighbour set.
///
/// Bundled into one struct for callers that want a single value rather
/// than indexing three parallel arrays; `PlanarGraph` itself stores these
/// fields as parallel `Vec`s (see `graph.rs`) for cache locality during
/// decode.
#[derive(Debug, Clone, Copy)]
pub struct VertexInfo {
    pub id: VertexId,
    pub degree: u32,
    pub firstedge: EdgeId,
    pub neighbours: BitSet,
}
