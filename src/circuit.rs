// The circuit: an ordered collection of constellations over one range.
//
// A circuit is built once from a list of starting partitions and a shared
// pitch range; each partition becomes one constellation, numbered 1-based in
// input order. Constellations are independent of each other, so construction
// fans out across a rayon thread pool; the order-preserving collect keeps
// the result identical to sequential construction.
//
// Beyond two-level (constellation, chord) addressing, the circuit exposes
// per-constellation summary tables: generator chords (each partition's seed
// spelling), pivot chords (highest placements), and portal chords. A portal
// chord is formed directly from a partition's own pitch content and serves
// as the fixed entry point into its constellation's table.
//
// The built-in eight-partition preset over the 88-key range ships as
// `default_circuit`, so callers and tests have the canonical material
// without supplying partitions by hand.

use rayon::prelude::*;
use serde::Serialize;

use crate::constellation::{Chord, Constellation};
use crate::error::ConstellationError;
use crate::partition::StartingPartition;
use crate::pitch::PitchRange;

/// The eight standard partitions: each splits the aggregate into three
/// cells, placed so that consecutive partitions share chords to pivot
/// through. Spelled here as seed pitch numbers, cell by cell.
const DEFAULT_PARTITIONS: [[&[i32]; 3]; 8] = [
    [&[-12, -10, 4], &[-2, 8, 11, 17], &[19, 27, 30, 33, 37]],
    [&[-12, -10, -2], &[4, 11, 27, 33, 37], &[8, 17, 19, 30]],
    [&[-8, 2, 15, 25], &[-1, 20, 29, 31], &[0, 10, 21, 42]],
    [&[-8, 2, 10, 21], &[0, 11, 32, 41], &[15, 25, 42, 43]],
    [&[-12, -9, 1, 4], &[-1, 18, 20, 33], &[14, 19, 22, 29]],
    [&[-10, -2, 0, 5], &[-5, 3, 13, 16], &[11, 30, 32, 45]],
    [&[-10, -2, 5, 15, 25], &[-1, 7, 18, 20], &[0, 28, 33]],
    [&[-12, 17, 27, 37], &[-1, 7, 18, 21], &[2, 10, 16, 20]],
];

/// An ordered, immutable collection of constellations sharing one pitch
/// range, with uniform (constellation, chord) addressing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstellationCircuit {
    range: PitchRange,
    constellations: Vec<Constellation>,
}

impl ConstellationCircuit {
    /// Build one constellation per partition, in input order, numbering
    /// them 1-based. All tables are materialized before this returns.
    pub fn new(
        starting_partitions: Vec<StartingPartition>,
        total_range: PitchRange,
    ) -> Result<Self, ConstellationError> {
        let mut constellations: Vec<Constellation> = starting_partitions
            .into_par_iter()
            .map(|partition| Constellation::new(partition, total_range))
            .collect::<Result<_, _>>()?;
        for (i, constellation) in constellations.iter_mut().enumerate() {
            constellation.set_number(i + 1);
        }
        Ok(ConstellationCircuit {
            range: total_range,
            constellations,
        })
    }

    /// The standard eight-constellation circuit over A0..C8.
    pub fn default_circuit() -> Self {
        let range = PitchRange::new(-39, 48).expect("built-in range is valid");
        ConstellationCircuit::new(Self::default_partitions(), range)
            .expect("built-in partitions are valid")
    }

    /// The eight standard starting partitions, for callers that want to
    /// re-enumerate them over a different range.
    pub fn default_partitions() -> Vec<StartingPartition> {
        DEFAULT_PARTITIONS
            .iter()
            .map(|cells| {
                StartingPartition::from_pitches(cells.iter().map(|c| c.to_vec()).collect())
                    .expect("built-in partitions are valid")
            })
            .collect()
    }

    /// Number of constellations.
    pub fn len(&self) -> usize {
        self.constellations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constellations.is_empty()
    }

    /// All constellations, in circuit order.
    pub fn constellations(&self) -> &[Constellation] {
        &self.constellations
    }

    /// Constellation by 1-based number.
    pub fn get(&self, constellation_number: usize) -> Result<&Constellation, ConstellationError> {
        if constellation_number == 0 || constellation_number > self.constellations.len() {
            return Err(ConstellationError::IndexOutOfRange {
                index: constellation_number,
                len: self.constellations.len(),
            });
        }
        Ok(&self.constellations[constellation_number - 1])
    }

    /// Two-level accessor: chord `chord_number` of constellation
    /// `constellation_number`, both 1-based.
    pub fn get_chord(
        &self,
        constellation_number: usize,
        chord_number: usize,
    ) -> Result<&Chord, ConstellationError> {
        self.get(constellation_number)?.get_chord(chord_number)
    }

    /// Per constellation, the chord formed from its starting partition's
    /// own pitch content.
    pub fn portal_chords(&self) -> Vec<Chord> {
        self.constellations
            .iter()
            .map(|c| Chord::new(c.partition().pitch_numbers()))
            .collect()
    }

    /// Per constellation, the sequence number of its portal chord within
    /// its own table.
    pub fn portal_chord_numbers(&self) -> Vec<usize> {
        self.constellations
            .iter()
            .map(|c| {
                c.get_number_of_chord(&Chord::new(c.partition().pitch_numbers()))
                    .expect("the seed spelling is always a table member")
            })
            .collect()
    }

    /// `"{constellation_number}-{portal_chord_number}"` labels for
    /// human-facing summaries.
    pub fn portal_chord_labels(&self) -> Vec<String> {
        self.constellations
            .iter()
            .zip(self.portal_chord_numbers())
            .map(|(c, n)| format!("{}-{}", c.constellation_number(), n))
            .collect()
    }

    /// One generator chord per constellation, in circuit order.
    pub fn generator_chords(&self) -> Vec<Chord> {
        self.constellations
            .iter()
            .map(|c| c.generator_chord().clone())
            .collect()
    }

    /// One generator chord number per constellation.
    pub fn generator_chord_numbers(&self) -> Vec<usize> {
        self.constellations
            .iter()
            .map(Constellation::generator_chord_number)
            .collect()
    }

    /// One pivot chord per constellation, in circuit order.
    pub fn pivot_chords(&self) -> Vec<Chord> {
        self.constellations
            .iter()
            .map(|c| c.pivot_chord().clone())
            .collect()
    }

    /// One pivot chord number per constellation.
    pub fn pivot_chord_numbers(&self) -> Vec<usize> {
        self.constellations
            .iter()
            .map(Constellation::pivot_chord_number)
            .collect()
    }

    /// The shared pitch range.
    pub fn pitch_range(&self) -> PitchRange {
        self.range
    }
}
