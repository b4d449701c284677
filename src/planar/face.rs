// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face-level data produced by the dual builder.

use crate::bitset::BitSet;
use crate::planar::edge::{EdgeId, FaceId};

/// A face of the embedding: its boundary length, one boundary edge, and
/// the set of vertices on its boundary.
///
/// For a triangulation every `size` is 3, but nothing here assumes that —
/// the dual builder (§4.3) walks the actual rotation system and counts
/// whatever it finds.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub id: FaceId,
    pub size: u32,
    pub start_edge: EdgeId,
    pub vertices_in_face: BitSet,
}
