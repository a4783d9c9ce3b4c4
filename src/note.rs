//! Note
//!
//! Pitch classes (C through B, no octave) with enharmonic spelling,
//! transposition and upward interval arithmetic.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::NameOptions;

/// Number of pitch classes in an octave.
pub const SEMITONES: u8 = 12;

/// Spellings used when sharps are preferred.
const NAMES_SHARP: [&str; SEMITONES as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Spellings used when flats are preferred.
const NAMES_FLAT: [&str; SEMITONES as usize] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Unicode flat glyph accepted on input and produced on request.
pub const UNICODE_FLAT: char = '\u{266D}';

/// Unicode sharp glyph accepted on input and produced on request.
pub const UNICODE_SHARP: char = '\u{266F}';

/// Errors when building notes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    /// The value could not be read as a note name or semitone count.
    #[error("invalid note: `{0}`")]
    InvalidNote(String),
}

/// A pitch class without an octave, e.g. "C", "Eb", "F#".
///
/// Stored as the number of half steps above C, always in `0..12`. Two notes
/// with the same pitch class are equal no matter how they were spelled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "NoteRepr")]
pub struct Note {
    id: u8,
}

impl Note {
    /// Build a note from any number of half steps above (or below) C.
    ///
    /// The value wraps into a single octave, so `-1` is B and `13` is C#.
    pub const fn new(semitones: i32) -> Note {
        Note {
            id: semitones.rem_euclid(SEMITONES as i32) as u8,
        }
    }

    /// Half steps above C, in `0..12`.
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Render this note with the spelling and glyphs picked by `options`.
    pub fn name(&self, options: &NameOptions) -> String {
        let table = if options.use_flats { &NAMES_FLAT } else { &NAMES_SHARP };
        let name = table[self.id as usize];
        if name.len() > 1 && options.unicode_accidentals {
            let glyph = if options.use_flats {
                options.flat_symbol()
            } else {
                options.sharp_symbol()
            };
            return format!("{}{}", &name[..1], glyph);
        }
        name.to_string()
    }

    /// A new note `n` half steps away from this one.
    pub const fn transpose(&self, n: i32) -> Note {
        Note::new(self.id as i32 + n.rem_euclid(SEMITONES as i32))
    }

    /// Half steps from this note up to the next `other`, in `0..12`.
    ///
    /// This note is treated as the root, so the result never goes negative:
    /// `A.interval(C)` is 3, `C.interval(A)` is 9.
    pub const fn interval(&self, other: &Note) -> u8 {
        (other.id + SEMITONES - self.id) % SEMITONES
    }

    /// Like [`Note::interval`], reading `other` from a note name first.
    pub fn interval_to_str(&self, other: &str) -> Result<u8, NoteError> {
        Ok(self.interval(&other.parse()?))
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name(&NameOptions::default()))
    }
}

impl From<i32> for Note {
    fn from(semitones: i32) -> Self {
        Note::new(semitones)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Accepts a letter `A`-`G` in either case followed by any run of
    /// accidentals: `b`, `B` or `♭` lower the note, `#` or `♯` raise it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NoteError::InvalidNote(s.to_string());
        let mut chars = s.chars();

        let natural = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('C') => 0,
            Some('D') => 2,
            Some('E') => 4,
            Some('F') => 5,
            Some('G') => 7,
            Some('A') => 9,
            Some('B') => 11,
            _ => return Err(invalid()),
        };

        let mut offset = 0i32;
        for c in chars {
            match c {
                'b' | 'B' | UNICODE_FLAT => offset -= 1,
                '#' | UNICODE_SHARP => offset += 1,
                _ => return Err(invalid()),
            }
        }

        Ok(Note::new(natural + offset))
    }
}

impl TryFrom<&serde_json::Value> for Note {
    type Error = NoteError;

    /// Strings are parsed as note names, integers as semitone counts.
    /// Fractional numbers and every other JSON type are rejected.
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(s) => s.parse(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Note::new(i.rem_euclid(SEMITONES as i64) as i32)),
                None => Err(NoteError::InvalidNote(n.to_string())),
            },
            other => Err(NoteError::InvalidNote(other.to_string())),
        }
    }
}

/// Wire form accepted when deserializing a [`Note`].
#[derive(Deserialize)]
#[serde(untagged)]
enum NoteRepr {
    Id(i64),
    Name(String),
}

impl TryFrom<NoteRepr> for Note {
    type Error = NoteError;

    fn try_from(repr: NoteRepr) -> Result<Self, Self::Error> {
        match repr {
            NoteRepr::Id(i) => Ok(Note::new(i.rem_euclid(SEMITONES as i64) as i32)),
            NoteRepr::Name(s) => s.parse(),
        }
    }
}
