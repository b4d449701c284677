// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hand-encoded `planar_code` byte fixtures for the end-to-end scenarios
//! in spec §8.4, shared between unit tests here and the integration tests
//! under `tests/`.
//!
//! Each fixture's adjacency was derived from an explicit straight-line
//! planar embedding (vertex coordinates, neighbours sorted by angle into
//! clockwise rotation order) so that the rotation system is guaranteed
//! combinatorially valid, not merely plausible-looking.

/// `K4` drawn as an outer triangle (1,2,3) with vertex 4 at the center:
/// 4 vertices, 4 triangular faces, `ne = 12`.
pub const TETRAHEDRON: [u8; 17] = [
    4, //
    3, 4, 2, 0, // vertex 1
    1, 4, 3, 0, // vertex 2
    2, 4, 1, 0, // vertex 3
    3, 2, 1, 0, // vertex 4
];

/// Two apexes (1, 2) plus an equatorial 4-cycle (3,4,5,6): 6 vertices,
/// 8 triangular faces, `ne = 24`.
pub const OCTAHEDRON: [u8; 31] = [
    6, //
    3, 4, 5, 6, 0, // vertex 1 (apex)
    3, 6, 5, 4, 0, // vertex 2 (apex)
    4, 1, 6, 2, 0, // vertex 3 (belt)
    1, 3, 2, 5, 0, // vertex 4 (belt)
    1, 4, 2, 6, 0, // vertex 5 (belt)
    1, 5, 2, 3, 0, // vertex 6 (belt)
];

/// Pentagonal antiprism belt (2..=11) between poles 1 (north) and 12
/// (south): 12 vertices, 20 triangular faces, `ne = 60`.
pub const ICOSAHEDRON: [u8; 73] = [
    12, //
    2, 3, 4, 5, 6, 0, // vertex 1 (north pole)
    1, 6, 7, 8, 3, 0, // vertex 2
    1, 2, 8, 9, 4, 0, // vertex 3
    1, 3, 9, 10, 5, 0, // vertex 4
    1, 4, 10, 11, 6, 0, // vertex 5
    1, 5, 11, 7, 2, 0, // vertex 6
    2, 6, 11, 12, 8, 0, // vertex 7
    3, 2, 7, 12, 9, 0, // vertex 8
    4, 3, 8, 12, 10, 0, // vertex 9
    5, 4, 9, 12, 11, 0, // vertex 10
    6, 5, 10, 12, 7, 0, // vertex 11
    8, 7, 11, 10, 9, 0, // vertex 12 (south pole)
];

/// Stacked-triangles construction (spec §8.4 scenario 4): a tetrahedron
/// (outer triangle 1,2,3 plus interior vertex 4 adjacent to all three)
/// with a fifth vertex stacked inside face (1,2,4). No Hamiltonian cycle
/// can avoid enclosing a triangle on each side of it.
pub const STACKED_FIVE: [u8; 24] = [
    5, //
    3, 4, 5, 2, 0, // vertex 1
    1, 5, 4, 3, 0, // vertex 2
    2, 4, 1, 0, // vertex 3
    3, 2, 5, 1, 0, // vertex 4
    4, 2, 1, 0, // vertex 5
];
