// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pruned backtracking search deciding the path-Hamiltonian property
//! (spec §4.5).
//!
//! The search extends a simple path rooted at a minimum-degree vertex,
//! tracking which faces the partial cycle has already touched
//! (`saturated_faces`) and, relative to the anchor edge, which faces have
//! been provisionally assigned to the right or left side of the eventual
//! closed curve. Two pruning rules cut the recursion:
//!
//! - **P1** (two-sides): a face can't be claimed by both sides at once.
//! - **P2** (empty-on-both-sides): once a face is "empty" (its whole
//!   boundary is already in the cycle, yet the cycle never touched one of
//!   its edges) on each side, no future edge can rescue it, so the branch
//!   is dead.
//!
//! `current_cycle` is a single mutable bitset threaded through the whole
//! recursion and committed/undone around each recursive call — the
//! bitset is cheap to copy, but there is only ever one partial cycle live
//! at a time, so sharing it avoids copying on every frame.

use crate::bitset::BitSet;
use crate::planar::edge::{EdgeId, VertexId};
use crate::planar::graph::PlanarGraph;

/// Recursion and pruning counters for one top-level search, surfaced via
/// `tracing::debug!` once the search completes. Counters only — they
/// never influence the decision.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStats {
    pub recursive_calls: u64,
    pub p1_prunes: u64,
    pub p2_prunes: u64,
}

/// Decide whether `graph` admits a path-Hamiltonian cycle.
pub fn has_path_hamiltonian_cycle(graph: &PlanarGraph) -> bool {
    has_path_hamiltonian_cycle_with_stats(graph).0
}

/// As [`has_path_hamiltonian_cycle`], also returning the search's
/// recursion/prune counters.
pub fn has_path_hamiltonian_cycle_with_stats(graph: &PlanarGraph) -> (bool, SearchStats) {
    let mut search = Search::new(graph);
    let found = search.run();
    tracing::debug!(
        n = graph.n,
        nf = graph.nf,
        found,
        recursive_calls = search.stats.recursive_calls,
        p1_prunes = search.stats.p1_prunes,
        p2_prunes = search.stats.p2_prunes,
        "path-Hamiltonian search finished"
    );
    (found, search.stats)
}

struct Search<'a> {
    graph: &'a PlanarGraph,
    current_cycle: BitSet,
    first_vertex_cycle: VertexId,
    first_edge_cycle: EdgeId,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(graph: &'a PlanarGraph) -> Self {
        Self {
            graph,
            current_cycle: BitSet::empty(),
            first_vertex_cycle: 0,
            first_edge_cycle: 0,
            stats: SearchStats::default(),
        }
    }

    /// Vertex of minimum degree, ties broken by lowest index (spec §4.5.4).
    fn min_degree_vertex(&self) -> VertexId {
        let mut best = 0;
        for v in 1..self.graph.n {
            if self.graph.degree[v] < self.graph.degree[best] {
                best = v;
            }
        }
        best
    }

    /// §4.5.4: try every starting edge out of the minimum-degree vertex,
    /// then every second edge out of its far endpoint, short-circuiting on
    /// the first completed cycle.
    fn run(&mut self) -> bool {
        let v0 = self.min_degree_vertex();
        self.first_vertex_cycle = v0;

        let start_edge = self.graph.firstedge[v0];
        let mut e = start_edge;
        loop {
            self.first_edge_cycle = e;
            let tail = self.graph.edges[e].end;
            self.current_cycle = BitSet::singleton(v0).add(tail);
            let saturated = self.graph.edges[e].incident_faces;
            let e_inv = self.graph.edges[e].inverse;

            let second_start = self.graph.firstedge[tail];
            let mut e2 = second_start;
            loop {
                if !self.current_cycle.contains(self.graph.edges[e2].end) {
                    let faces_right = self.graph.faces_between(e2, e_inv);
                    let faces_left = self.graph.faces_between(e_inv, e2);
                    if self.continue_cycle(
                        e2,
                        self.graph.n - 2,
                        saturated,
                        faces_right,
                        faces_left,
                        BitSet::empty(),
                    ) {
                        return true;
                    }
                }
                e2 = self.graph.edges[e2].next;
                if e2 == second_start {
                    break;
                }
            }
            self.current_cycle = BitSet::empty();

            e = self.graph.edges[e].next;
            if e == start_edge {
                break;
            }
        }
        false
    }

    /// §4.5.5: extend the partial cycle with `e_new`. On entry,
    /// `e_new.start` is already a member of `self.current_cycle` (it was
    /// committed by the caller); `e_new.end` is not.
    fn continue_cycle(
        &mut self,
        e_new: EdgeId,
        remaining_vertices: usize,
        mut saturated_faces: BitSet,
        faces_right: BitSet,
        faces_left: BitSet,
        mut empty_faces: BitSet,
    ) -> bool {
        self.stats.recursive_calls += 1;

        // 1. P1.
        if faces_right.intersection(faces_left).is_not_empty() {
            self.stats.p1_prunes += 1;
            return false;
        }

        // 2. Newly empty faces: only those touching e_new.start can have
        // just become empty.
        let start = self.graph.edges[e_new].start;
        for f in 0..self.graph.nf {
            if saturated_faces.contains(f) {
                continue;
            }
            let boundary = self.graph.vertices_in_face[f];
            if boundary.contains(start) && self.current_cycle.contains_all(boundary) {
                empty_faces.add_mut(f);
            }
        }

        // 3. P2.
        if faces_right.intersection(empty_faces).is_not_empty()
            && faces_left.intersection(empty_faces).is_not_empty()
        {
            self.stats.p2_prunes += 1;
            return false;
        }

        // 4. Commit.
        let end = self.graph.edges[e_new].end;
        self.current_cycle.add_mut(end);
        saturated_faces.add_all_mut(self.graph.edges[e_new].incident_faces);
        let e_new_inv = self.graph.edges[e_new].inverse;

        let result = if remaining_vertices == 1 {
            // 5. Close the cycle.
            if self.graph.neighbours[end].contains(self.first_vertex_cycle) {
                let e_close = self
                    .graph
                    .find_edge(end, self.first_vertex_cycle)
                    .expect("neighbour set and rotation system agree on this edge");
                let faces_right = faces_right.union(self.graph.faces_between(e_close, e_new_inv));
                let faces_left = faces_left.union(self.graph.faces_between(e_new_inv, e_close));
                self.finish_cycle(e_close, saturated_faces, faces_right, faces_left)
            } else {
                false
            }
        } else {
            // 6. Recurse over the next edge out of `end`.
            let mut success = false;
            let next_start = self.graph.firstedge[end];
            let mut e2 = next_start;
            loop {
                if !self.current_cycle.contains(self.graph.edges[e2].end) {
                    let faces_right = faces_right.union(self.graph.faces_between(e2, e_new_inv));
                    let faces_left = faces_left.union(self.graph.faces_between(e_new_inv, e2));
                    if self.continue_cycle(
                        e2,
                        remaining_vertices - 1,
                        saturated_faces,
                        faces_right,
                        faces_left,
                        empty_faces,
                    ) {
                        success = true;
                        break;
                    }
                }
                e2 = self.graph.edges[e2].next;
                if e2 == next_start {
                    break;
                }
            }
            success
        };

        // 7. Undo the commit so a sibling branch (or the caller's loop)
        // sees the cycle as it was before this call.
        self.current_cycle.remove_mut(end);
        result
    }

    /// §4.5.6: `e_close` closes the cycle back to `first_vertex_cycle`.
    fn finish_cycle(
        &mut self,
        e_close: EdgeId,
        mut saturated_faces: BitSet,
        mut faces_right: BitSet,
        mut faces_left: BitSet,
    ) -> bool {
        // 1. P1.
        if faces_right.intersection(faces_left).is_not_empty() {
            self.stats.p1_prunes += 1;
            return false;
        }

        // 2. Fold in the closing edge, and attribute the faces around
        // first_vertex_cycle (never visited by any forward extension
        // step) to a side, same as the C reference's finishCycle.
        saturated_faces.add_all_mut(self.graph.edges[e_close].incident_faces);
        let e_close_inv = self.graph.edges[e_close].inverse;
        faces_right = faces_right.union(self.graph.faces_between(self.first_edge_cycle, e_close_inv));
        faces_left = faces_left.union(self.graph.faces_between(e_close_inv, self.first_edge_cycle));

        // 3. Every unsaturated face was, by definition, entirely missed.
        let mut empty_faces = BitSet::empty();
        for f in 0..self.graph.nf {
            if !saturated_faces.contains(f) {
                empty_faces.add_mut(f);
            }
        }

        // 4. P2.
        if faces_right.intersection(empty_faces).is_not_empty()
            && faces_left.intersection(empty_faces).is_not_empty()
        {
            self.stats.p2_prunes += 1;
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_bytes, testdata};

    #[test]
    fn tetrahedron_is_path_hamiltonian() {
        let g = decode_bytes(&testdata::TETRAHEDRON).unwrap();
        assert!(has_path_hamiltonian_cycle(&g));
    }

    #[test]
    fn octahedron_is_path_hamiltonian() {
        let g = decode_bytes(&testdata::OCTAHEDRON).unwrap();
        assert!(has_path_hamiltonian_cycle(&g));
    }

    #[test]
    fn icosahedron_is_path_hamiltonian() {
        let g = decode_bytes(&testdata::ICOSAHEDRON).unwrap();
        assert!(has_path_hamiltonian_cycle(&g));
    }

    #[test]
    fn stacked_five_is_not_path_hamiltonian() {
        let g = decode_bytes(&testdata::STACKED_FIVE).unwrap();
        assert!(!has_path_hamiltonian_cycle(&g));
    }

    #[test]
    fn stats_record_some_recursion_for_icosahedron() {
        let g = decode_bytes(&testdata::ICOSAHEDRON).unwrap();
        let (found, stats) = has_path_hamiltonian_cycle_with_stats(&g);
        assert!(found);
        assert!(stats.recursive_calls > 0);
    }
}
