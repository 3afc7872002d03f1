// The enumeration engine: one starting partition -> the complete chord table.
//
// Every admissible chord of a partition is one choice of octave
// transposition per cell, flattened and sorted. Cells have pairwise-disjoint
// pitch classes and transpose by whole octaves, so members of different
// cells can never collide and every chord sounds twelve distinct pitches,
// one per pitch class.
//
// The table is materialized eagerly at construction, sorted into the
// canonical order (lexicographic by pitch content, low to high) and numbered
// 1..=N. That order is the index: forward lookup is a slice access, inverse
// lookup a binary search, and the two are exact inverses.
//
// Two chords of the table are singled out:
// - the generator chord: every cell at its seed placement (the chord the
//   partition itself spells)
// - the pivot chord: every cell at its highest admissible placement
// Their sequence numbers are found by lookup, never assumed.

use std::fmt;

use serde::Serialize;

use crate::error::ConstellationError;
use crate::partition::StartingPartition;
use crate::pitch::PitchRange;

/// One fully registered chord: pitch numbers sorted ascending.
///
/// Chords taken from a constellation's table are strictly increasing and
/// sound each pitch class exactly once; `Ord` is lexicographic by pitch
/// content, matching the canonical table order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Chord(Vec<i32>);

impl Chord {
    /// Create a chord from pitch numbers in any order; they are sorted.
    pub fn new(mut pitches: Vec<i32>) -> Self {
        pitches.sort_unstable();
        Chord(pitches)
    }

    /// The pitch numbers, ascending.
    pub fn pitches(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pitch) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{pitch}")?;
        }
        Ok(())
    }
}

/// The complete, canonically numbered chord table of one starting partition
/// over one pitch range. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constellation {
    /// 1-based position among siblings; assigned by the owning circuit.
    number: usize,
    partition: StartingPartition,
    range: PitchRange,
    /// Canonical table, lexicographically sorted; chord n lives at n - 1.
    chords: Vec<Chord>,
    generator_number: usize,
    pivot_number: usize,
}

impl Constellation {
    /// Enumerate the complete table for `partition` inside `range`.
    ///
    /// Fails fast if any cell's seed placement leaves the range; enumeration
    /// itself is total once the inputs are validated. A constellation built
    /// directly carries number 1 until a circuit renumbers it.
    pub fn new(
        partition: StartingPartition,
        range: PitchRange,
    ) -> Result<Self, ConstellationError> {
        for cell in partition.cells() {
            if cell.pitches().iter().any(|&p| !range.contains(p)) {
                return Err(ConstellationError::CellOutOfRange {
                    pitches: cell.pitches().to_vec(),
                    low: range.low(),
                    high: range.high(),
                });
            }
        }

        let transpositions: Vec<Vec<Vec<i32>>> = partition
            .cells()
            .iter()
            .map(|cell| cell.octave_transpositions(&range))
            .collect();

        let chords = enumerate_chords(&transpositions, partition.pitch_count());

        // Seed placements are inside the range, so transposition 0 is in
        // every cell's window and both extremal chords are table members.
        let generator = Chord::new(partition.pitch_numbers());
        let generator_number = chords
            .binary_search(&generator)
            .map(|i| i + 1)
            .expect("seed placement is always enumerated");

        let pivot_pitches: Vec<i32> = transpositions
            .iter()
            .flat_map(|options| {
                options
                    .last()
                    .expect("every cell admits its seed placement")
                    .iter()
                    .copied()
            })
            .collect();
        let pivot_number = chords
            .binary_search(&Chord::new(pivot_pitches))
            .map(|i| i + 1)
            .expect("highest placement is always enumerated");

        Ok(Constellation {
            number: 1,
            partition,
            range,
            chords,
            generator_number,
            pivot_number,
        })
    }

    /// Total number of chords in the table.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// The full canonical table, chord n at index n - 1.
    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// Chord by 1-based sequence number.
    pub fn get_chord(&self, n: usize) -> Result<&Chord, ConstellationError> {
        if n == 0 || n > self.chords.len() {
            return Err(ConstellationError::IndexOutOfRange {
                index: n,
                len: self.chords.len(),
            });
        }
        Ok(&self.chords[n - 1])
    }

    /// 1-based sequence number of an exact chord, or None for a non-member.
    pub fn get_number_of_chord(&self, chord: &Chord) -> Option<usize> {
        self.chords.binary_search(chord).ok().map(|i| i + 1)
    }

    /// Whether `field`, compared as a set of pitch numbers, equals some
    /// chord of the table.
    pub fn contains(&self, field: &[i32]) -> bool {
        let mut sorted = field.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        self.chords
            .binary_search_by(|chord| chord.pitches().cmp(sorted.as_slice()))
            .is_ok()
    }

    /// The chord spelled by the partition's own seed placements.
    pub fn generator_chord(&self) -> &Chord {
        &self.chords[self.generator_number - 1]
    }

    /// Sequence number of the generator chord.
    pub fn generator_chord_number(&self) -> usize {
        self.generator_number
    }

    /// The chord with every cell at its highest admissible placement.
    pub fn pivot_chord(&self) -> &Chord {
        &self.chords[self.pivot_number - 1]
    }

    /// Sequence number of the pivot chord.
    pub fn pivot_chord_number(&self) -> usize {
        self.pivot_number
    }

    /// The generator chord's pitch numbers regrouped per cell, preserving
    /// each cell's seed order.
    pub fn partitioned_generator_pitch_numbers(&self) -> Vec<Vec<i32>> {
        self.partition
            .cells()
            .iter()
            .map(|cell| cell.pitches().to_vec())
            .collect()
    }

    /// The starting partition this table was enumerated from.
    pub fn partition(&self) -> &StartingPartition {
        &self.partition
    }

    /// The pitch range the table was enumerated inside.
    pub fn pitch_range(&self) -> PitchRange {
        self.range
    }

    /// 1-based position among the sibling constellations of a circuit.
    pub fn constellation_number(&self) -> usize {
        self.number
    }

    pub(crate) fn set_number(&mut self, number: usize) {
        self.number = number;
    }
}

/// Cartesian product over per-cell transposition windows: one chord per
/// combination, last cell varying fastest, then sorted into canonical order.
fn enumerate_chords(transpositions: &[Vec<Vec<i32>>], chord_len: usize) -> Vec<Chord> {
    let total: usize = transpositions.iter().map(Vec::len).product();
    let mut chords = Vec::with_capacity(total);
    let mut indices = vec![0usize; transpositions.len()];

    'outer: loop {
        let mut pitches = Vec::with_capacity(chord_len);
        for (options, &i) in transpositions.iter().zip(indices.iter()) {
            pitches.extend_from_slice(&options[i]);
        }
        chords.push(Chord::new(pitches));

        let mut axis = indices.len();
        loop {
            if axis == 0 {
                break 'outer;
            }
            axis -= 1;
            indices[axis] += 1;
            if indices[axis] < transpositions[axis].len() {
                continue 'outer;
            }
            indices[axis] = 0;
        }
    }

    chords.sort_unstable();
    debug_assert!(
        chords.windows(2).all(|pair| pair[0] < pair[1]),
        "disjoint cells can never produce duplicate chords"
    );
    chords
}
