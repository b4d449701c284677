// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared `planar_code` fixtures for the integration tests. Duplicated
//! from `src/decode/testdata.rs` rather than exposed from the library,
//! since that module is `#[cfg(test)]`-gated and integration tests link
//! against the library as an external crate.

pub const TETRAHEDRON: [u8; 17] = [
    4, //
    3, 4, 2, 0, 1, 4, 3, 0, 2, 4, 1, 0, 3, 2, 1, 0,
];

pub const OCTAHEDRON: [u8; 31] = [
    6, //
    3, 4, 5, 6, 0, 3, 6, 5, 4, 0, 4, 1, 6, 2, 0, 1, 3, 2, 5, 0, 1, 4, 2, 6, 0, 1, 5, 2, 3, 0,
];

pub const ICOSAHEDRON: [u8; 73] = [
    12, //
    2, 3, 4, 5, 6, 0, 1, 6, 7, 8, 3, 0, 1, 2, 8, 9, 4, 0, 1, 3, 9, 10, 5, 0, 1, 4, 10, 11, 6, 0,
    1, 5, 11, 7, 2, 0, 2, 6, 11, 12, 8, 0, 3, 2, 7, 12, 9, 0, 4, 3, 8, 12, 10, 0, 5, 4, 9, 12, 11,
    0, 6, 5, 10, 12, 7, 0, 8, 7, 11, 10, 9, 0,
];

pub const STACKED_FIVE: [u8; 24] = [
    5, //
    3, 4, 5, 2, 0, 1, 5, 4, 3, 0, 2, 4, 1, 0, 3, 2, 5, 1, 0, 4, 2, 1, 0,
];
