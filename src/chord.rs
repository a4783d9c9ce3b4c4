//! Chord
//!
//! An unordered set of distinct notes, plus the bass note when the chord was
//! built from pitches. Naming delegates to [`crate::naming`]; when no root is
//! given every note is tried and the readings are ranked by score.

use std::cmp::Reverse;
use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::naming::{name_chord, name_chord_traced, ChordNameResult};
use crate::note::{Note, NoteError};
use crate::options::NameOptions;
use crate::pitch::Pitch;
use crate::trace::TraceSink;

/// Errors when building chords
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    /// No notes were supplied.
    #[error("a chord needs at least one note")]
    Empty,

    /// The input was not a note list at all.
    #[error("invalid chord input: {0}")]
    InvalidInput(String),

    /// One of the notes could not be read.
    #[error(transparent)]
    Note(#[from] NoteError),
}

/// Anything a chord can be built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteLike {
    /// A note name such as "Eb", parsed on use.
    Name(String),
    /// A pitch class.
    Note(Note),
    /// A pitch; its octave only matters for finding the bass.
    Pitch(Pitch),
}

impl From<&str> for NoteLike {
    fn from(name: &str) -> Self {
        NoteLike::Name(name.to_string())
    }
}

impl From<String> for NoteLike {
    fn from(name: String) -> Self {
        NoteLike::Name(name)
    }
}

impl From<Note> for NoteLike {
    fn from(note: Note) -> Self {
        NoteLike::Note(note)
    }
}

impl From<Pitch> for NoteLike {
    fn from(pitch: Pitch) -> Self {
        NoteLike::Pitch(pitch)
    }
}

impl TryFrom<NoteLike> for Note {
    type Error = NoteError;

    fn try_from(value: NoteLike) -> Result<Self, Self::Error> {
        match value {
            NoteLike::Name(name) => name.parse(),
            NoteLike::Note(note) => Ok(note),
            NoteLike::Pitch(pitch) => Ok(pitch.note()),
        }
    }
}

/// A set of distinct notes, kept in the order first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    notes: Vec<Note>,
    bass: Option<Note>,
}

impl Chord {
    /// Build a chord, dropping repeated pitch classes.
    ///
    /// When every input is a [`Pitch`], the lowest one becomes the bass
    /// note. Any other mix leaves the bass unknown.
    pub fn new<I, T>(notes: I) -> Result<Chord, ChordError>
    where
        I: IntoIterator<Item = T>,
        T: Into<NoteLike>,
    {
        let inputs: Vec<NoteLike> = notes.into_iter().map(Into::into).collect();

        let lowest = inputs
            .iter()
            .map(|input| match input {
                NoteLike::Pitch(pitch) => Some(*pitch),
                _ => None,
            })
            .collect::<Option<Vec<Pitch>>>()
            .and_then(|pitches| pitches.into_iter().min());

        let mut distinct: Vec<Note> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let note = Note::try_from(input)?;
            if !distinct.contains(&note) {
                distinct.push(note);
            }
        }
        if distinct.is_empty() {
            return Err(ChordError::Empty);
        }

        Ok(Chord {
            notes: distinct,
            bass: lowest.map(Note::from),
        })
    }

    /// Build a chord from JSON: a note string ("C E G" or "C,E,G") or an
    /// array of note names and semitone counts.
    pub fn from_json(value: &serde_json::Value) -> Result<Chord, ChordError> {
        match value {
            serde_json::Value::String(s) => s.parse(),
            serde_json::Value::Array(items) => {
                let notes = items
                    .iter()
                    .map(|item| -> Result<NoteLike, ChordError> {
                        match item {
                            serde_json::Value::String(s) => Ok(NoteLike::Name(s.clone())),
                            serde_json::Value::Number(_) => {
                                Ok(NoteLike::Note(Note::try_from(item)?))
                            }
                            other => Err(ChordError::InvalidInput(other.to_string())),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Chord::new(notes)
            }
            other => Err(ChordError::InvalidInput(other.to_string())),
        }
    }

    /// Distinct notes in the order they were supplied.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Lowest note, known only when the chord was built from pitches.
    pub fn bass_note(&self) -> Option<Note> {
        self.bass
    }

    /// Whether `note` (any spelling) is part of the chord.
    pub fn has_note(&self, note: &Note) -> bool {
        self.notes.contains(note)
    }

    /// Name the chord with `root` as its root.
    ///
    /// The bass is `bass` if given, else the chord's own bass note, else the
    /// root.
    pub fn name(&self, root: Note, options: &NameOptions, bass: Option<Note>) -> ChordNameResult {
        name_chord(&self.notes, root, self.resolve_bass(root, bass), options)
    }

    /// Like [`Chord::name`], with the root given as a note name.
    pub fn name_for(
        &self,
        root: &str,
        options: &NameOptions,
        bass: Option<Note>,
    ) -> Result<ChordNameResult, ChordError> {
        Ok(self.name(root.parse()?, options, bass))
    }

    /// Like [`Chord::name`], sending the scoring trace to `sink`.
    pub fn name_with_trace(
        &self,
        root: Note,
        options: &NameOptions,
        bass: Option<Note>,
        sink: &mut dyn TraceSink,
    ) -> ChordNameResult {
        name_chord_traced(&self.notes, root, self.resolve_bass(root, bass), options, sink)
    }

    /// All readings of the chord, best first.
    ///
    /// With a `root` there is exactly one reading. Without one, each note is
    /// tried as the root; equal scores keep the order the notes were given in.
    pub fn names(
        &self,
        options: &NameOptions,
        root: Option<Note>,
        bass: Option<Note>,
    ) -> Vec<ChordNameResult> {
        if let Some(root) = root {
            return vec![self.name(root, options, bass)];
        }
        let mut names: Vec<ChordNameResult> = self
            .notes
            .iter()
            .map(|&note| self.name(note, options, bass))
            .collect();
        names.sort_by_key(|result| Reverse(result.score));
        log::debug!(
            "{self}: {} candidate roots, best {:?}",
            names.len(),
            names.first().map(|result| result.name.as_str())
        );
        names
    }

    fn resolve_bass(&self, root: Note, bass: Option<Note>) -> Note {
        bass.or(self.bass).unwrap_or(root)
    }
}

/// Rank every chord's readings on the rayon thread pool.
///
/// Equivalent to calling [`Chord::names`] without a root on each chord.
#[cfg(feature = "parallel")]
pub fn name_all_par(chords: &[Chord], options: &NameOptions) -> Vec<Vec<ChordNameResult>> {
    use rayon::prelude::*;

    chords
        .par_iter()
        .map(|chord| chord.names(options, None, None))
        .collect()
}

impl Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.notes.iter().map(Note::to_string).collect();
        f.write_str(&names.join(" "))
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    /// Note names separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::new(
            s.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    fn pitch(s: &str) -> Pitch {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_str_dedups_and_keeps_order() {
        let chord: Chord = "   C    EB,G,    b,c,".parse().unwrap();
        assert_eq!(chord.to_string(), "C D# G B");
        assert_eq!(chord.bass_note(), None);
        assert!(chord.has_note(&note("Eb")));
        assert!(!chord.has_note(&note("E")));
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!("".parse::<Chord>(), Err(ChordError::Empty));
        assert_eq!(" , ,".parse::<Chord>(), Err(ChordError::Empty));
        assert_eq!(Chord::new(Vec::<Note>::new()), Err(ChordError::Empty));
        assert!(matches!("C H".parse::<Chord>(), Err(ChordError::Note(_))));
    }

    #[test]
    fn test_bass_only_from_pitches() {
        let pitches = Chord::new([
            pitch("C5"),
            pitch("EB6"),
            pitch("G4"),
            pitch("b3"),
            pitch("c2"),
        ])
        .unwrap();
        assert_eq!(pitches.bass_note(), Some(note("C")));
        assert_eq!(pitches.to_string(), "C D# G B");

        let mixed = Chord::new([
            NoteLike::from("C"),
            NoteLike::from(note("EB")),
            NoteLike::from(pitch("G5")),
            NoteLike::from(note("b")),
            NoteLike::from("c"),
        ])
        .unwrap();
        assert_eq!(mixed.bass_note(), None);
        assert_eq!(mixed.notes().len(), 4);
    }

    #[test]
    fn test_from_json() {
        let chord = Chord::from_json(&serde_json::json!(["C", 4, "G"])).unwrap();
        assert_eq!(chord.to_string(), "C E G");
        assert_eq!(
            Chord::from_json(&serde_json::json!("C,Eb")).unwrap().to_string(),
            "C D#"
        );
        assert!(matches!(
            Chord::from_json(&serde_json::json!(null)),
            Err(ChordError::InvalidInput(_))
        ));
        assert!(matches!(
            Chord::from_json(&serde_json::json!(["C", {}])),
            Err(ChordError::InvalidInput(_))
        ));
        assert!(matches!(
            Chord::from_json(&serde_json::json!(["C", 1.5])),
            Err(ChordError::Note(_))
        ));
        assert_eq!(Chord::from_json(&serde_json::json!([])), Err(ChordError::Empty));
    }

    #[test]
    fn test_bass_resolution() {
        let options = NameOptions::default();
        let voiced = Chord::new([pitch("E3"), pitch("G3"), pitch("C4")]).unwrap();
        assert_eq!(voiced.name(note("C"), &options, None).name, "C/E");
        assert_eq!(voiced.name(note("C"), &options, Some(note("C"))).name, "C");

        let plain: Chord = "C E G".parse().unwrap();
        assert_eq!(plain.name(note("C"), &options, None).name, "C");
        assert_eq!(plain.name(note("C"), &options, Some(note("G"))).name, "C/G");
    }
}
