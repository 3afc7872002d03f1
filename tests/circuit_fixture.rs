// End-to-end tests for the built-in eight-constellation circuit.
//
// These pin the enumeration to known-good data: the table sizes, the first
// chord of the first constellation, and its generator/pivot chords are all
// fixed musical material, so any drift in the placement rule, ordering, or
// numbering shows up here first. The remaining tests check the laws the
// engine guarantees for every chord of every table.

use pitch_constellation::circuit::ConstellationCircuit;
use pitch_constellation::constellation::Chord;
use pitch_constellation::error::ConstellationError;
use pitch_constellation::pitch::pitch_class;

/// Table sizes of the eight built-in constellations.
const EXPECTED_SIZES: [usize; 8] = [180, 140, 80, 100, 180, 150, 120, 108];

/// Constellation 1's seed placement, cell by cell.
const SEED_1: [&[i32]; 3] = [&[-12, -10, 4], &[-2, 8, 11, 17], &[19, 27, 30, 33, 37]];

fn circuit() -> ConstellationCircuit {
    ConstellationCircuit::default_circuit()
}

// ---------------------------------------------------------------------------
// Golden data
// ---------------------------------------------------------------------------

#[test]
fn table_sizes_match_fixture() {
    let circuit = circuit();
    assert_eq!(circuit.len(), 8);
    let sizes: Vec<usize> = circuit.constellations().iter().map(|c| c.len()).collect();
    assert_eq!(sizes, EXPECTED_SIZES);
}

#[test]
fn first_chord_of_first_constellation() {
    let circuit = circuit();
    assert_eq!(
        circuit.get_chord(1, 1).unwrap().pitches(),
        &[-38, -36, -34, -29, -28, -25, -21, -20, -19, -18, -15, -11]
    );
}

#[test]
fn generator_of_first_constellation_is_its_seed_spelling() {
    let circuit = circuit();
    let constellation = circuit.get(1).unwrap();

    assert_eq!(
        constellation.generator_chord().pitches(),
        &[-12, -10, -2, 4, 8, 11, 17, 19, 27, 30, 33, 37]
    );

    // Regrouped per cell, the generator preserves the seed placements.
    let partitioned = constellation.partitioned_generator_pitch_numbers();
    assert_eq!(partitioned.len(), 3);
    for (cell, expected) in partitioned.iter().zip(SEED_1.iter()) {
        assert_eq!(cell.as_slice(), *expected);
    }

    // The sorted union of the cells is exactly the generator chord.
    let mut union: Vec<i32> = partitioned.into_iter().flatten().collect();
    union.sort_unstable();
    assert_eq!(constellation.generator_chord().pitches(), &union[..]);

    // The generator is a table member at its recorded number, and that
    // number is not 1: the seed spelling sorts into the interior.
    let n = constellation.generator_chord_number();
    assert!(n > 1);
    assert_eq!(
        constellation.get_chord(n).unwrap(),
        constellation.generator_chord()
    );
}

#[test]
fn pivot_of_first_constellation_is_highest_placement() {
    let circuit = circuit();
    let constellation = circuit.get(1).unwrap();

    // Cells at +3, +2, and 0 octaves from their seeds.
    assert_eq!(
        constellation.pivot_chord().pitches(),
        &[19, 22, 24, 26, 27, 30, 32, 33, 35, 37, 40, 41]
    );
    // For this constellation the highest placement is also the last chord
    // of the canonical order.
    assert_eq!(constellation.pivot_chord_number(), 180);
}

// ---------------------------------------------------------------------------
// Laws over every table
// ---------------------------------------------------------------------------

#[test]
fn number_and_chord_lookups_are_exact_inverses() {
    let circuit = circuit();
    for constellation in circuit.constellations() {
        for n in 1..=constellation.len() {
            let chord = constellation.get_chord(n).unwrap().clone();
            assert_eq!(constellation.get_number_of_chord(&chord), Some(n));
        }
    }
}

#[test]
fn every_chord_satisfies_the_partition_invariants() {
    let circuit = circuit();
    let range = circuit.pitch_range();
    for constellation in circuit.constellations() {
        for chord in constellation.chords() {
            assert_eq!(chord.len(), 12);

            // Strictly increasing, all members inside the range.
            for pair in chord.pitches().windows(2) {
                assert!(pair[0] < pair[1]);
            }
            assert!(chord.pitches().iter().all(|&p| range.contains(p)));

            // Each pitch class sounds exactly once.
            let mut classes: Vec<u8> = chord.pitches().iter().map(|&p| pitch_class(p)).collect();
            classes.sort_unstable();
            let aggregate: Vec<u8> = (0..12).collect();
            assert_eq!(classes, aggregate);
        }
        // No duplicates anywhere in the table.
        for pair in constellation.chords().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}

#[test]
fn containment_accepts_members_and_rejects_non_members() {
    let circuit = circuit();
    for constellation in circuit.constellations() {
        let member = constellation.generator_chord().pitches().to_vec();
        assert!(constellation.contains(&member));

        // Truncations and single-pitch alterations are not members.
        assert!(!constellation.contains(&member[..member.len() - 1]));
        let mut altered = member.clone();
        altered[0] -= 1;
        assert!(!constellation.contains(&altered));
    }
}

#[test]
fn extremal_chords_are_members_everywhere() {
    let circuit = circuit();
    for constellation in circuit.constellations() {
        let generator = constellation.generator_chord().clone();
        let pivot = constellation.pivot_chord().clone();
        assert_eq!(
            constellation.get_number_of_chord(&generator),
            Some(constellation.generator_chord_number())
        );
        assert_eq!(
            constellation.get_number_of_chord(&pivot),
            Some(constellation.pivot_chord_number())
        );
    }
}

// ---------------------------------------------------------------------------
// Circuit addressing and summaries
// ---------------------------------------------------------------------------

#[test]
fn circuit_indexing_is_one_based_and_checked() {
    let circuit = circuit();
    for (i, constellation) in circuit.constellations().iter().enumerate() {
        assert_eq!(constellation.constellation_number(), i + 1);
        assert_eq!(circuit.get(i + 1).unwrap(), constellation);
    }
    assert_eq!(
        circuit.get(0).unwrap_err(),
        ConstellationError::IndexOutOfRange { index: 0, len: 8 }
    );
    assert_eq!(
        circuit.get(9).unwrap_err(),
        ConstellationError::IndexOutOfRange { index: 9, len: 8 }
    );
    assert_eq!(
        circuit.get_chord(1, 181).unwrap_err(),
        ConstellationError::IndexOutOfRange {
            index: 181,
            len: 180
        }
    );
}

#[test]
fn portal_summaries_are_consistent() {
    let circuit = circuit();
    let portals = circuit.portal_chords();
    let numbers = circuit.portal_chord_numbers();
    let labels = circuit.portal_chord_labels();
    assert_eq!(portals.len(), 8);

    for i in 0..circuit.len() {
        let constellation = circuit.get(i + 1).unwrap();
        // The portal chord is a member, at its recorded number.
        assert_eq!(constellation.get_chord(numbers[i]).unwrap(), &portals[i]);
        assert_eq!(labels[i], format!("{}-{}", i + 1, numbers[i]));
    }
}

#[test]
fn summary_tables_have_one_entry_per_constellation() {
    let circuit = circuit();
    assert_eq!(circuit.generator_chords().len(), 8);
    assert_eq!(circuit.pivot_chords().len(), 8);
    assert_eq!(circuit.generator_chord_numbers().len(), 8);
    assert_eq!(circuit.pivot_chord_numbers().len(), 8);
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn reconstruction_yields_value_equal_circuits() {
    // Constellations are built on a rayon pool; the result must not depend
    // on scheduling.
    let first = ConstellationCircuit::default_circuit();
    let second = ConstellationCircuit::default_circuit();
    assert_eq!(first, second);

    let manual = ConstellationCircuit::new(
        ConstellationCircuit::default_partitions(),
        first.pitch_range(),
    )
    .unwrap();
    assert_eq!(first, manual);
}

#[test]
fn lookups_distinguish_near_miss_chords() {
    let circuit = circuit();
    let constellation = circuit.get(1).unwrap();

    // Transposing a member by one semitone changes every pitch class.
    let shifted: Vec<i32> = constellation
        .generator_chord()
        .pitches()
        .iter()
        .map(|&p| p + 1)
        .collect();
    assert_eq!(constellation.get_number_of_chord(&Chord::new(shifted)), None);
}
