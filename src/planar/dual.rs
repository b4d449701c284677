// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dual builder: labels every oriented edge with the face on its right.
//!
//! Faces are discovered by the standard half-edge face walk (spec §4.3):
//! starting from any unmarked oriented edge `e`, the face to its right is
//! traced by repeatedly taking `e := e.inverse.prev` until the walk
//! returns to the starting edge.
//!
//! Rather than the mark-epoch scheme sketched in spec §3.6/§9 (reusable
//! across graphs without clearing), this uses a fresh `visited: BitSet`
//! sized to `ne` per graph — spec §9 calls the two "equally correct", and
//! since a graph is rebuilt from scratch on every input record anyway
//! there is nothing to amortize by keeping an epoch counter around.

use crate::bitset::BitSet;
use crate::planar::edge::UNSET;
use crate::planar::face::Face;
use crate::planar::graph::PlanarGraph;

/// Build the dual (face structure) of `graph` in place.
///
/// Iterates vertices in index order and, within each vertex, its cyclic
/// edge list via `next`; the first unmarked edge encountered seeds a new
/// face. This order is deterministic given a deterministic rotation
/// system, but callers must not rely on any particular face numbering
/// beyond that (spec §4.3 "Discovery order").
pub fn build_dual(graph: &mut PlanarGraph) {
    let ne = graph.edges.len();
    let mut visited = vec![false; ne];
    let mut faces: Vec<Face> = Vec::new();

    for v in 0..graph.n {
        let start = graph.firstedge[v];
        if start == UNSET {
            continue;
        }
        let mut e = start;
        loop {
            if !visited[e] {
                let face_id = faces.len();
                let mut size = 0u32;
                let mut walk = e;
                loop {
                    visited[walk] = true;
                    graph.edges[walk].right_face = face_id;
                    size += 1;
                    walk = graph.edges[graph.edges[walk].inverse].prev;
                    if walk == e {
                        break;
                    }
                }
                faces.push(Face {
                    id: face_id,
                    size,
                    start_edge: e,
                    vertices_in_face: BitSet::empty(),
                });
            }
            e = graph.edges[e].next;
            if e == start {
                break;
            }
        }
    }

    graph.nf = faces.len();
    graph.facestart = faces.iter().map(|f| f.start_edge).collect();
    graph.face_size = faces.iter().map(|f| f.size).collect();
    graph.vertices_in_face = vec![BitSet::empty(); faces.len()];

    // incident_faces and vertices_in_face, per spec §4.2 post-pass.
    for e in 0..ne {
        let inv = graph.edges[e].inverse;
        let rf = graph.edges[e].right_face;
        let rf_inv = graph.edges[inv].right_face;
        graph.edges[e].incident_faces = BitSet::singleton(rf).add(rf_inv);
        let end = graph.edges[e].end;
        graph.vertices_in_face[rf].add_mut(end);
    }
}
