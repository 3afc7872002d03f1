// Pitch Constellation Engine
//
// Given a fixed registral partition of the twelve pitch classes into ordered
// cells, this crate enumerates every chord reachable by transposing each cell
// up or down by whole octaves inside a bounded pitch range, numbers the
// chords canonically, and answers exact forward/inverse lookups over the
// resulting table. Several partitions over one shared range form a circuit
// with uniform two-level (constellation, chord) addressing.
//
// Architecture:
// - pitch.rs: pitch-number arithmetic (0 = middle C), pitch classes,
//   note-name display, and the bounded PitchRange
// - partition.rs: Cell (an ordered registral unit of pitches) and
//   StartingPartition (cells covering the 12-tone aggregate exactly once)
// - constellation.rs: Chord plus the enumeration engine for one partition
//   (octave-transposition windows, cartesian product, canonical ordering,
//   generator/pivot derivation)
// - circuit.rs: ConstellationCircuit composition layer and the built-in
//   eight-constellation preset
// - error.rs: ConstellationError, every failure the crate can report
//
// All validation happens in constructors; a successfully built constellation
// or circuit is immutable and every query on it is total except 1-based
// indexing, which reports out-of-range indices as errors.

pub mod circuit;
pub mod constellation;
pub mod error;
pub mod partition;
pub mod pitch;
