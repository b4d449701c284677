// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Byte-level reader for the `planar_code` container format (spec §6.1).
//!
//! A stream is a sequence of records, each optionally preceded by the
//! ASCII header `>>planar_code<<` (possibly with endianness-suffix
//! characters before the trailing `<<`, e.g. `>>planar_code le<<`);
//! interior headers between records are skipped identically. Each record
//! is `n`, then for each vertex its clockwise neighbour list as 1-based
//! indices terminated by a `0` element, using either 8-bit or 16-bit
//! little-endian elements depending on the leading byte.

use crate::decode::error::DecodeError;
use crate::planar::constants::MAX_N;

/// One decoded record: its vertex count, its adjacency lists (0-based
/// vertex ids, in clockwise rotation order), and the exact input bytes it
/// was read from (for verbatim filter-mode re-emission, spec §6.2).
pub struct Record {
    pub n: usize,
    pub adjacency: Vec<Vec<usize>>,
    pub source_bytes: Vec<u8>,
}

/// A cursor over a `planar_code` byte stream that yields one [`Record`]
/// at a time.
pub struct PlanarCodeReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PlanarCodeReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_header_if_present(&mut self) -> Result<(), DecodeError> {
        if self.data[self.pos..].starts_with(b">>") {
            let rest = &self.data[self.pos..];
            let close = rest
                .windows(2)
                .position(|w| w == b"<<")
                .ok_or(DecodeError::MissingHeader)?;
            self.pos += close + 2;
        }
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let b = *self.data.get(self.pos).ok_or(DecodeError::TruncatedRecord)?;
        self.pos += 1;
        Ok(b)
    }

    fn read_u16le(&mut self) -> Result<u16, DecodeError> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Read and return the next record, or `Ok(None)` at a clean end of
    /// stream.
    pub fn next_record(&mut self) -> Result<Option<Record>, DecodeError> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }

        self.skip_header_if_present()?;
        if self.pos >= self.data.len() {
            return Ok(None);
        }

        let record_start = self.pos;
        let b0 = self.read_u8()?;
        let (n, sixteen_bit) = if b0 != 0 {
            (b0 as usize, false)
        } else {
            (self.read_u16le()? as usize, true)
        };

        if n == 0 {
            return Err(DecodeError::ImpossibleElementValue { value: 0, n: 0 });
        }
        if n > MAX_N {
            return Err(DecodeError::VertexCountExceedsMax { n, max: MAX_N });
        }

        let mut adjacency = Vec::with_capacity(n);
        for _vertex in 0..n {
            let mut neighbours = Vec::new();
            loop {
                let element = if sixteen_bit {
                    self.read_u16le()? as usize
                } else {
                    self.read_u8()? as usize
                };
                if element == 0 {
                    break;
                }
                if element > n {
                    return Err(DecodeError::ImpossibleElementValue { value: element, n });
                }
                neighbours.push(element - 1);
            }
            adjacency.push(neighbours);
        }

        let source_bytes = self.data[record_start..self.pos].to_vec();
        Ok(Some(Record {
            n,
            adjacency,
            source_bytes,
        }))
    }
}
