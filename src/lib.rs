//! # chord_namer
//!
//! Name musical chords from an unordered set of notes: decide the quality,
//! extensions, suspensions and altered or added tones, and render a
//! conventional chord symbol together with a plausibility score. When the
//! root is not known, every note is tried and the readings are ranked.
//!
//! ## Example
//! ```rust
//! use chord_namer::{Chord, ChordNameOptions, NameOptions, Note};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Build a chord from note names
//!     let chord: Chord = "C Eb Gb Bb".parse()?;
//!
//!     // 2) Name it with a known root
//!     let root: Note = "C".parse()?;
//!     let named = chord.name(root, &NameOptions::default(), None);
//!     assert_eq!(named.name, "Cm7(b5)");
//!
//!     // 3) Or let every note compete for the root, with caller options
//!     let options = ChordNameOptions::from_json_str(r#"{"unicodeHalfDiminished": true}"#)
//!         .sanitize();
//!     for reading in chord.names(&options, None, None) {
//!         println!("{} ({:+})", reading.name, reading.score);
//!     }
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `parallel`: name many chords at once with `rayon` via `name_all_par`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chords and root inference.
pub use chord::{Chord, ChordError, NoteLike};

/// Batch naming on the rayon thread pool.
#[cfg(feature = "parallel")]
pub use chord::name_all_par;

/// Naming results.
pub use naming::{ChordNameResult, IntervalNote};

/// Pitch classes.
pub use note::{Note, NoteError};

/// Naming options, sparse and sanitized.
pub use options::{
    sanitize, AugSymbol, ChordNameOptions, DimSymbol, MajorSymbol, MinorSymbol, NameOptions,
    NameOptionsBuilder,
};

/// Pitches with octaves.
pub use pitch::{Pitch, PitchError};

/// Trace sinks.
pub use trace::{NoTrace, TraceLog, TraceSink};

/// Chord module.
pub mod chord;

/// Interval slots above a root.
pub mod intervals;

/// Chord naming and scoring.
pub mod naming;

/// Note module.
pub mod note;

/// Naming options.
pub mod options;

/// Pitch module.
pub mod pitch;

/// Chord name fragments and their rendering.
pub mod spelling;

/// Scoring trace output.
pub mod trace;
