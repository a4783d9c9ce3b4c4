//! Example: name a chord given on the command line
//!
//! ```text
//! cargo run --example name_chord -- "C Eb Gb Bb" '{"unicodeHalfDiminished": true}'
//! RUST_LOG=chord_namer=trace cargo run --example name_chord -- "E G C"
//! ```

use chord_namer::{Chord, ChordNameOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let notes = args.next().unwrap_or_else(|| "C E G".to_string());
    let options = args
        .next()
        .map(|raw| ChordNameOptions::from_json_str(&raw))
        .unwrap_or_default()
        .sanitize();

    let chord: Chord = notes.parse()?;

    let readings = chord.names(&options, None, None);

    println!("Chord: {chord}");
    for (rank, reading) in readings.iter().enumerate() {
        println!("  {}. {:<16} score {:+}", rank + 1, reading.name, reading.score);
        if let Some(trace) = &reading.verbose {
            for line in trace {
                println!("       {line}");
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&readings.first())?);

    Ok(())
}
