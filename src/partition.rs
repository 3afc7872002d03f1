// Cells and starting partitions: the registral seed material.
//
// A Cell is an ordered group of absolute pitch numbers that moves as a rigid
// unit: the only admissible placements of a cell are whole-octave
// transpositions of its seed pitches. No two members of a cell may share a
// pitch class, so no transposition can ever make two of its members collide.
//
// A StartingPartition is an ordered list of cells whose pitch classes,
// taken together, cover the 12-tone aggregate exactly once. Every chord a
// constellation enumerates therefore sounds each pitch class exactly once,
// in the register chosen for its cell.
//
// Consumed by constellation.rs, which turns one partition into the full
// chord table.

use serde::Serialize;

use crate::error::ConstellationError;
use crate::pitch::{PitchRange, pitch_class};

/// An ordered registral unit: absolute pitch numbers with pairwise-distinct
/// pitch classes. The seed order is preserved and surfaces again in
/// `Constellation::partitioned_generator_pitch_numbers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pitches: Vec<i32>,
}

impl Cell {
    /// Create a cell, rejecting any repeated pitch class.
    pub fn new(pitches: Vec<i32>) -> Result<Self, ConstellationError> {
        let mut seen = [false; 12];
        for &pitch in &pitches {
            let pc = pitch_class(pitch);
            if seen[pc as usize] {
                return Err(ConstellationError::DuplicatePitchClass {
                    pitch_class: pc,
                    pitches,
                });
            }
            seen[pc as usize] = true;
        }
        Ok(Cell { pitches })
    }

    /// The seed pitch numbers, in their original order.
    pub fn pitches(&self) -> &[i32] {
        &self.pitches
    }

    /// Pitch classes of the members, in cell order.
    pub fn pitch_classes(&self) -> Vec<u8> {
        self.pitches.iter().map(|&p| pitch_class(p)).collect()
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// All whole-octave transpositions of this cell that fit inside `range`,
    /// ordered from lowest to highest placement. Each entry keeps the cell's
    /// member order.
    ///
    /// An empty cell has exactly one placement: itself.
    pub fn octave_transpositions(&self, range: &PitchRange) -> Vec<Vec<i32>> {
        let Some((&min, &max)) = self
            .pitches
            .iter()
            .min()
            .zip(self.pitches.iter().max())
        else {
            return vec![Vec::new()];
        };

        // Lowest octave shift keeping min above the floor, highest keeping
        // max below the ceiling.
        let t_min = (range.low() - min + 11).div_euclid(12);
        let t_max = (range.high() - max).div_euclid(12);

        (t_min..=t_max)
            .map(|t| self.pitches.iter().map(|&p| p + 12 * t).collect())
            .collect()
    }
}

/// An ordered list of cells covering the 12-tone aggregate exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartingPartition {
    cells: Vec<Cell>,
}

impl StartingPartition {
    /// Create a partition, rejecting cells whose pitch classes miss part of
    /// the aggregate or sound any class twice.
    pub fn new(cells: Vec<Cell>) -> Result<Self, ConstellationError> {
        let mut counts = [0usize; 12];
        for cell in &cells {
            for pc in cell.pitch_classes() {
                counts[pc as usize] += 1;
            }
        }

        let missing: Vec<u8> = (0u8..12).filter(|&pc| counts[pc as usize] == 0).collect();
        let duplicated: Vec<u8> = (0u8..12).filter(|&pc| counts[pc as usize] > 1).collect();
        if !missing.is_empty() || !duplicated.is_empty() {
            return Err(ConstellationError::PartitionCoverage {
                missing,
                duplicated,
            });
        }

        Ok(StartingPartition { cells })
    }

    /// Convenience constructor from raw pitch-number lists, one per cell.
    pub fn from_pitches(lists: Vec<Vec<i32>>) -> Result<Self, ConstellationError> {
        let cells = lists
            .into_iter()
            .map(Cell::new)
            .collect::<Result<Vec<_>, _>>()?;
        StartingPartition::new(cells)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All seed pitch numbers, flattened in cell order (unsorted).
    pub fn pitch_numbers(&self) -> Vec<i32> {
        self.cells
            .iter()
            .flat_map(|c| c.pitches().iter().copied())
            .collect()
    }

    /// Total number of pitches a chord of this partition sounds.
    pub fn pitch_count(&self) -> usize {
        self.cells.iter().map(Cell::len).sum()
    }
}
