// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The stream loop (spec §2 "Driver", out of core but specified in full
//! in `SPEC_FULL.md`): read records, decode, search, and either
//! accumulate counts or re-emit matching records verbatim.
//!
//! This module owns no CLI parsing or process exit codes — `main.rs`
//! handles those — it just turns a byte slice and a mode into counts
//! and/or written output, so it can be exercised directly from tests.

use std::io::Write;

use crate::decode::{decode_adjacency, PlanarCodeReader};
use crate::search::has_path_hamiltonian_cycle;

/// Totals accumulated over one run of the driver loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub total: usize,
    pub hits: usize,
}

impl RunOutcome {
    pub fn misses(&self) -> usize {
        self.total - self.hits
    }
}

/// Read every `planar_code` record from `input`, decode it, and run the
/// search. When `filter` is set, matching records (or non-matching ones,
/// if `invert` is set) are re-emitted verbatim to `out`, preceded by a
/// single `>>planar_code<<` header (spec §6.2) written once before the
/// first emitted record.
///
/// Always returns the accumulated [`RunOutcome`] regardless of mode, so
/// callers can print a counting-mode summary even when they also asked
/// for filtered output.
pub fn run(input: &[u8], filter: bool, invert: bool, mut out: impl Write) -> anyhow::Result<RunOutcome> {
    let mut reader = PlanarCodeReader::new(input);
    let mut outcome = RunOutcome::default();
    let mut header_written = false;

    while let Some(record) = reader.next_record()? {
        outcome.total += 1;
        let graph = decode_adjacency(&record.adjacency)?;
        let matches = has_path_hamiltonian_cycle(&graph);
        if matches {
            outcome.hits += 1;
        }

        if filter && (matches != invert) {
            if !header_written {
                out.write_all(b">>planar_code<<")?;
                header_written = true;
            }
            out.write_all(&record.source_bytes)?;
        }
    }

    Ok(outcome)
}
