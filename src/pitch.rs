// Pitch-number arithmetic and the bounded pitch range.
//
// Pitches are signed integers with 0 = middle C, so an 88-key piano runs
// from -39 (A0) to 48 (C8). A pitch class is the pitch mod 12 (0 = C);
// euclidean mod/div keep the decomposition correct for negative pitches.
//
// PitchRange is the closed interval every enumerated chord must fit inside.
// Used by partition.rs to compute octave-transposition windows and by
// constellation.rs as the enumeration bound.

use serde::Serialize;

use crate::error::ConstellationError;

/// Pitch class (0 = C .. 11 = B) of a pitch number.
pub fn pitch_class(pitch: i32) -> u8 {
    pitch.rem_euclid(12) as u8
}

/// Octave index of a pitch number, in the scientific convention where
/// middle C (pitch 0) starts octave 4. Pitch -1 (B3) is octave 3.
pub fn octave(pitch: i32) -> i32 {
    4 + pitch.div_euclid(12)
}

/// Note-name display for a pitch number (e.g. 0 -> "C4", -39 -> "A0").
pub fn pitch_name(pitch: i32) -> String {
    const NAMES: [&str; 12] = [
        "C", "C#", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
    ];
    format!("{}{}", NAMES[pitch_class(pitch) as usize], octave(pitch))
}

/// A closed, totally ordered interval of pitch numbers.
///
/// Both bounds are inclusive and sounding: a chord member equal to either
/// bound is admissible. `low` must lie strictly below `high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PitchRange {
    low: i32,
    high: i32,
}

impl PitchRange {
    /// Create a range, rejecting `low >= high`.
    pub fn new(low: i32, high: i32) -> Result<Self, ConstellationError> {
        if low >= high {
            return Err(ConstellationError::InvalidRange { low, high });
        }
        Ok(PitchRange { low, high })
    }

    pub fn low(&self) -> i32 {
        self.low
    }

    pub fn high(&self) -> i32 {
        self.high
    }

    /// Whether a pitch lies inside the range (bounds inclusive).
    pub fn contains(&self, pitch: i32) -> bool {
        self.low <= pitch && pitch <= self.high
    }

    /// Number of distinct pitch numbers in the range.
    pub fn pitch_count(&self) -> usize {
        (self.high - self.low + 1) as usize
    }
}
