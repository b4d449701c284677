// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decoder: turns `planar_code` bytes into a populated [`PlanarGraph`].
//!
//! Two layers:
//! - [`wire`] reads the byte-level container format (header, element
//!   width, record framing) and produces plain adjacency lists.
//! - [`decode_adjacency`] in this module builds the rotation system from
//!   those adjacency lists, per spec §4.2, then calls
//!   [`crate::planar::dual::build_dual`].

pub mod error;
pub mod wire;

#[cfg(test)]
pub mod testdata;

pub use error::DecodeError;
pub use wire::{PlanarCodeReader, Record};

use crate::bitset::BitSet;
use crate::planar::constants::MAX_VAL;
use crate::planar::dual::build_dual;
use crate::planar::edge::{OrientedEdge, VertexId, UNSET};
use crate::planar::graph::PlanarGraph;

/// Build a [`PlanarGraph`] from already-parsed adjacency lists.
///
/// `adjacency[i]` is vertex `i`'s neighbours, 0-based, in clockwise
/// rotation order. This is the part of spec §4.2 that is independent of
/// the wire format: allocate each vertex's edges, link them into a
/// clockwise cycle, and pair up inverses for any neighbour already laid
/// out (`j < i`).
pub fn decode_adjacency(adjacency: &[Vec<VertexId>]) -> Result<PlanarGraph, DecodeError> {
    let n = adjacency.len();
    let mut graph = PlanarGraph::with_vertex_count(n);
    let mut first_edge_of = vec![UNSET; n];

    for (i, neighbours) in adjacency.iter().enumerate() {
        if neighbours.is_empty() {
            return Err(DecodeError::IsolatedVertex { vertex: i });
        }
        if neighbours.len() > MAX_VAL {
            return Err(DecodeError::CapacityError {
                vertex: i,
                degree: neighbours.len(),
                max: MAX_VAL,
            });
        }

        let first = graph.edges.len();
        first_edge_of[i] = first;
        for &j in neighbours {
            graph.edges.push(OrientedEdge {
                start: i,
                end: j,
                next: UNSET,
                prev: UNSET,
                inverse: UNSET,
                right_face: UNSET,
                incident_faces: BitSet::empty(),
            });
        }

        let count = neighbours.len();
        for k in 0..count {
            let cur = first + k;
            graph.edges[cur].next = first + (k + 1) % count;
            graph.edges[cur].prev = first + (k + count - 1) % count;
        }

        graph.firstedge[i] = first;
        graph.degree[i] = count as u32;
        for &j in neighbours {
            graph.neighbours[i].add_mut(j);
        }
    }

    for (i, neighbours) in adjacency.iter().enumerate() {
        let first = first_edge_of[i];
        for (k, &j) in neighbours.iter().enumerate() {
            if j < i {
                let e = first + k;
                let inv = graph
                    .find_edge(j, i)
                    .ok_or(DecodeError::InternalInconsistency { from: j, to: i })?;
                graph.edges[e].inverse = inv;
                graph.edges[inv].inverse = e;
            }
        }
    }

    graph.ne = graph.edges.len();
    build_dual(&mut graph);
    Ok(graph)
}

/// Decode a single headerless `planar_code` record, requiring the whole
/// slice to be consumed exactly. Convenience for tests and fixtures;
/// `driver::run` uses [`PlanarCodeReader`] directly to handle headers and
/// multi-record streams.
pub fn decode_bytes(bytes: &[u8]) -> Result<PlanarGraph, DecodeError> {
    let mut reader = PlanarCodeReader::new(bytes);
    let record = reader.next_record()?.ok_or(DecodeError::TruncatedRecord)?;
    let mut graph = decode_adjacency(&record.adjacency)?;
    graph.source_bytes = record.source_bytes;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tetrahedron_decodes_with_expected_shape() {
        let g = decode_bytes(&testdata::TETRAHEDRON).unwrap();
        assert_eq!(g.n, 4);
        assert_eq!(g.ne, 12);
        assert_eq!(g.nf, 4);
        for v in 0..4 {
            assert_eq!(g.degree[v], 3);
        }
    }

    #[test]
    fn round_trip_preserves_source_bytes() {
        let g = decode_bytes(&testdata::TETRAHEDRON).unwrap();
        assert_eq!(g.source_bytes, testdata::TETRAHEDRON.to_vec());
    }

    #[test]
    fn degree_exceeding_max_val_is_capacity_error() {
        let too_many: Vec<usize> = (1..=(MAX_VAL + 2)).collect();
        let adjacency = vec![too_many];
        let err = decode_adjacency(&adjacency).unwrap_err();
        assert!(matches!(err, DecodeError::CapacityError { vertex: 0, .. }));
    }

    #[test]
    fn stacked_five_decodes() {
        let g = decode_bytes(&testdata::STACKED_FIVE).unwrap();
        assert_eq!(g.n, 5);
    }

    #[test]
    fn isolated_vertex_is_rejected() {
        let adjacency = vec![vec![1], vec![]];
        let err = decode_adjacency(&adjacency).unwrap_err();
        assert_eq!(err, DecodeError::IsolatedVertex { vertex: 1 });
    }
}
