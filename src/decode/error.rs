// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error taxonomy for the `planar_code` decoder (spec §7).
//!
//! All three fatal cases from §7 (`FormatError`, `CapacityError`,
//! `InternalInconsistency`) are variants here; "normal search failure" is
//! not an error at all and never appears in this enum (the search engine
//! returns a plain `bool`, spec §4.5.7).

use thiserror::Error;

/// Everything that can go wrong while decoding a `planar_code` record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The `>>planar_code<<` header is missing or has no closing `<<`.
    #[error("missing or malformed >>planar_code<< header")]
    MissingHeader,

    /// The byte stream ended in the middle of a record.
    #[error("truncated record: unexpected end of input")]
    TruncatedRecord,

    /// `n` exceeds the compiled-in `MAX_N`.
    #[error("vertex count {n} exceeds MAX_N ({max})")]
    VertexCountExceedsMax { n: usize, max: usize },

    /// A neighbour index decoded to something outside `1..=n`.
    #[error("neighbour index {value} is not a valid 1-based vertex for n={n}")]
    ImpossibleElementValue { value: usize, n: usize },

    /// A vertex's adjacency list is longer than `MAX_VAL`.
    #[error("vertex {vertex} has degree {degree}, exceeding MAX_VAL ({max})")]
    CapacityError {
        vertex: usize,
        degree: usize,
        max: usize,
    },

    /// The decoder could not find the expected reverse half-edge for an
    /// edge whose other end was already laid out (spec §4.2 step 3).
    #[error("could not find the reverse edge from vertex {from} to vertex {to}")]
    InternalInconsistency { from: usize, to: usize },

    /// A vertex has no neighbours at all. No triangulation has an
    /// isolated vertex, so a record containing one is malformed rather
    /// than merely unsupported (spec §8.3 boundary case).
    #[error("vertex {vertex} is isolated (degree 0); not a triangulation")]
    IsolatedVertex { vertex: usize },
}
