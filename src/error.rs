// Error types for constellation construction and lookup.
//
// Every fallible operation in the crate reports one of these variants.
// Validation is front-loaded into constructors (PitchRange, Cell,
// StartingPartition, Constellation); after construction the only remaining
// failure is 1-based indexing outside a table, which is always caller error
// and is reported, never clamped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstellationError {
    /// Pitch range bounds are malformed: the low bound must lie strictly
    /// below the high bound.
    #[error("invalid pitch range: low bound {low} must be below high bound {high}")]
    InvalidRange { low: i32, high: i32 },

    /// Two members of one cell share a pitch class, so the cell could never
    /// voice both without an octave collision.
    #[error("duplicate pitch class {pitch_class} in cell {pitches:?}")]
    DuplicatePitchClass { pitch_class: u8, pitches: Vec<i32> },

    /// The cells of a starting partition do not cover the 12-tone aggregate
    /// exactly once.
    #[error(
        "cells do not partition the aggregate: missing pitch classes {missing:?}, \
         duplicated pitch classes {duplicated:?}"
    )]
    PartitionCoverage { missing: Vec<u8>, duplicated: Vec<u8> },

    /// A cell's seed placement does not fit inside the pitch range, so the
    /// partition has no identity placement and its generator chord would not
    /// be a table member.
    #[error("cell {pitches:?} does not fit inside pitch range [{low}, {high}]")]
    CellOutOfRange { pitches: Vec<i32>, low: i32, high: i32 },

    /// A 1-based table index outside 1..=len.
    #[error("index {index} out of range 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },
}
