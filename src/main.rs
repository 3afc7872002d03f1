// constellate: CLI entry point.
//
// Builds the standard eight-constellation circuit (or the standard
// partitions re-enumerated over a custom range) and prints a
// per-constellation summary: table size, generator/pivot chord numbers,
// and portal labels. Individual tables and chords can be printed, and the
// whole circuit exported as JSON.
//
// Usage:
//   constellate [--low N] [--high N] [--constellation N [--chord M]]
//     [--json PATH]

use pitch_constellation::circuit::ConstellationCircuit;
use pitch_constellation::constellation::Chord;
use pitch_constellation::pitch::{PitchRange, pitch_name};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let low: i32 = parse_flag(&args, "--low").unwrap_or(-39);
    let high: i32 = parse_flag(&args, "--high").unwrap_or(48);
    let constellation_number: Option<usize> = parse_flag(&args, "--constellation");
    let chord_number: Option<usize> = parse_flag(&args, "--chord");
    let json_path: Option<String> = parse_flag(&args, "--json");

    println!("=== Pitch Constellation Circuit ===");
    println!(
        "Range: [{}, {}] ({} to {})",
        low,
        high,
        pitch_name(low),
        pitch_name(high)
    );

    let range = match PitchRange::new(low, high) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let partitions = ConstellationCircuit::default_partitions();
    let circuit = match ConstellationCircuit::new(partitions, range) {
        Ok(circuit) => circuit,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let total: usize = circuit.constellations().iter().map(|c| c.len()).sum();
    println!(
        "{} constellations, {} chords total",
        circuit.len(),
        total
    );
    println!();

    println!(
        "{:>3}  {:>6}  {:>9}  {:>5}  {:>6}",
        "no", "chords", "generator", "pivot", "portal"
    );
    let labels = circuit.portal_chord_labels();
    for (constellation, label) in circuit.constellations().iter().zip(&labels) {
        println!(
            "{:>3}  {:>6}  {:>9}  {:>5}  {:>6}",
            constellation.constellation_number(),
            constellation.len(),
            constellation.generator_chord_number(),
            constellation.pivot_chord_number(),
            label
        );
    }

    if let Some(n) = constellation_number {
        println!();
        let constellation = match circuit.get(n) {
            Ok(constellation) => constellation,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };
        match chord_number {
            Some(m) => {
                let chord = match constellation.get_chord(m) {
                    Ok(chord) => chord,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                };
                println!("Chord {}-{}: {}", n, m, chord);
                println!("Names: {}", chord_names(chord));
            }
            None => {
                println!(
                    "Constellation {} ({} chords):",
                    n,
                    constellation.len()
                );
                for (i, chord) in constellation.chords().iter().enumerate() {
                    println!("{:>4}  {}", i + 1, chord);
                }
            }
        }
    }

    if let Some(path) = json_path {
        match write_json(&circuit, &path) {
            Ok(()) => println!("\nWrote circuit JSON to {}", path),
            Err(e) => {
                eprintln!("Error writing JSON: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn write_json(
    circuit: &ConstellationCircuit,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, circuit)?;
    Ok(())
}

fn chord_names(chord: &Chord) -> String {
    chord
        .pitches()
        .iter()
        .map(|&p| pitch_name(p))
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
