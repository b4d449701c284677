// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rotation-system representation of a plane graph.
//!
//! `PlanarGraph` owns a single contiguous arena of oriented edges plus the
//! per-vertex and per-face tables built on top of it. A graph is built once
//! by the decoder (`crate::decode`), has its dual filled in by
//! `crate::planar::dual`, is then handed read-only to the search engine,
//! and is discarded when the next record is decoded (see spec §3.8).

use crate::bitset::BitSet;
use crate::planar::constants::{MAX_E, MAX_N};
use crate::planar::edge::{EdgeId, FaceId, OrientedEdge, VertexId, UNSET};

/// A decoded plane graph: its rotation system plus the derived face
/// structure (once [`crate::planar::dual::build_dual`] has run).
#[derive(Debug, Clone)]
pub struct PlanarGraph {
    /// Number of vertices.
    pub n: usize,
    /// Number of oriented edges (== 2 * number of undirected edges).
    pub ne: usize,
    /// Number of faces. Zero until the dual has been built.
    pub nf: usize,

    /// The oriented-edge arena, indexed by [`EdgeId`].
    pub edges: Vec<OrientedEdge>,
    /// One arbitrary outgoing edge per vertex, indexed by [`VertexId`].
    pub firstedge: Vec<EdgeId>,
    /// Out-degree per vertex.
    pub degree: Vec<u32>,
    /// Adjacency bitset per vertex.
    pub neighbours: Vec<BitSet>,

    /// One arbitrary boundary edge per face, indexed by [`FaceId`].
    pub facestart: Vec<EdgeId>,
    /// Boundary length per face.
    pub face_size: Vec<u32>,
    /// Vertex bitset per face.
    pub vertices_in_face: Vec<BitSet>,

    /// The verbatim input bytes this graph was decoded from, captured so
    /// filter-mode output (§6.2) can re-emit the record unchanged.
    pub source_bytes: Vec<u8>,
}

impl PlanarGraph {
    /// Allocate an empty graph with room for `n` vertices' worth of
    /// tables. The edge arena is filled in by the decoder.
    pub fn with_vertex_count(n: usize) -> Self {
        Self {
            n,
            ne: 0,
            nf: 0,
            edges: Vec::new(),
            firstedge: vec![UNSET; n],
            degree: vec![0; n],
            neighbours: vec![BitSet::empty(); n],
            facestart: Vec::new(),
            face_size: Vec::new(),
            vertices_in_face: Vec::new(),
            source_bytes: Vec::new(),
        }
    }

    /// Given two oriented edges `from` and `to` such that following `next`
    /// from `from` eventually reaches `to`, returns the bitset of
    /// right-faces of all edges strictly between `from` and `to` in that
    /// clockwise traversal — including `from` itself, excluding `to`.
    ///
    /// Returns the empty set when `from == to`. This is the fundamental
    /// primitive the search engine uses to attribute a vertex's face
    /// neighbourhood to a side of the partial cycle (spec §4.4).
    pub fn faces_between(&self, from: EdgeId, to: EdgeId) -> BitSet {
        let mut faces = BitSet::empty();
        let mut e = from;
        while e != to {
            faces.add_mut(self.edges[e].right_face);
            e = self.edges[e].next;
        }
        faces
    }

    /// Find the oriented edge with `start == from` and `end == to` by
    /// walking `from`'s rotation. Used to locate the cycle-closing edge
    /// and to pair inverses during decode.
    ///
    /// Returns `None` if no such edge exists (the caller treats this as
    /// `InternalInconsistency`, spec §7).
    pub fn find_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let start_edge = self.firstedge[from];
        if start_edge == UNSET {
            return None;
        }
        let mut e = start_edge;
        loop {
            if self.edges[e].end == to {
                return Some(e);
            }
            e = self.edges[e].next;
            if e == start_edge {
                return None;
            }
        }
    }

    /// Validate the invariants in spec §8.1 (I1, I2, I4, I5) plus Euler's
    /// relation (I3). Intended for tests and debug assertions, not the
    /// decode/search hot path.
    pub fn validate_invariants(&self) -> Result<(), String> {
        // I1: involution.
        for (i, e) in self.edges.iter().enumerate() {
            let inv = &self.edges[e.inverse];
            if inv.inverse != i {
                return Err(format!("edge {i}: inverse.inverse != self"));
            }
            if inv.start != e.end || inv.end != e.start {
                return Err(format!("edge {i}: inverse endpoints don't match"));
            }
        }

        // I2: rotation closure.
        for v in 0..self.n {
            let start = self.firstedge[v];
            let mut e = start;
            let mut count = 0;
            loop {
                if self.edges[e].start != v {
                    return Err(format!("vertex {v}: rotation edge has wrong start"));
                }
                count += 1;
                e = self.edges[e].next;
                if e == start {
                    break;
                }
                if count > MAX_VAL_GUARD {
                    return Err(format!("vertex {v}: rotation never closes"));
                }
            }
            if count != self.degree[v] as usize {
                return Err(format!(
                    "vertex {v}: rotation length {count} != degree {}",
                    self.degree[v]
                ));
            }
        }

        // I3: Euler's relation.
        if self.nf > 0 {
            let lhs = self.n as isize - (self.ne as isize) / 2 + self.nf as isize;
            if lhs != 2 {
                return Err(format!("Euler's relation violated: {lhs} != 2"));
            }
        }

        // I4: face consistency.
        for f in 0..self.nf {
            let start = self.facestart[f];
            let mut e = start;
            let mut count = 0;
            loop {
                if self.edges[e].right_face != f {
                    return Err(format!("face {f}: boundary edge has wrong right_face"));
                }
                count += 1;
                e = self.edges[e].inverse;
                e = self.edges[e].prev;
                if e == start {
                    break;
                }
                if count > MAX_E {
                    return Err(format!("face {f}: boundary walk never closes"));
                }
            }
            if count != self.face_size[f] as usize {
                return Err(format!(
                    "face {f}: walk length {count} != face_size {}",
                    self.face_size[f]
                ));
            }
        }

        // I5: vertices_in_face consistency.
        for (i, e) in self.edges.iter().enumerate() {
            if e.right_face == UNSET {
                continue;
            }
            if !self.vertices_in_face[e.right_face].contains(e.end) {
                return Err(format!(
                    "edge {i}: end vertex {} missing from vertices_in_face[{}]",
                    e.end, e.right_face
                ));
            }
        }

        Ok(())
    }
}

const MAX_VAL_GUARD: usize = MAX_N;
