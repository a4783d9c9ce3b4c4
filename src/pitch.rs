//! Pitch
//!
//! A note pinned to an octave ("C2", "Eb4", "F#0"), ordered from low to high.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::note::{Note, NoteError, SEMITONES};
use crate::options::NameOptions;

/// Lowest octave a pitch may sit in.
pub const MIN_OCTAVE: i32 = 0;

/// Highest octave a pitch may sit in.
pub const MAX_OCTAVE: i32 = 8;

/// Errors when building pitches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PitchError {
    /// The note part could not be read.
    #[error(transparent)]
    Note(#[from] NoteError),

    /// The octave fell outside `0..=8`.
    #[error("invalid octave {0}, expected 0..=8")]
    InvalidOctave(i32),

    /// A pitch string did not end with an octave digit.
    #[error("pitch `{0}` has no octave")]
    MissingOctave(String),
}

/// A [`Note`] plus an octave in `0..=8`.
///
/// Pitches order first by octave, then by pitch class, so the lowest pitch
/// of a voicing is simply the minimum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pitch {
    note: Note,
    octave: u8,
}

impl Pitch {
    /// Pair `note` with `octave`, rejecting octaves outside `0..=8`.
    pub fn new(note: Note, octave: i32) -> Result<Pitch, PitchError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(PitchError::InvalidOctave(octave));
        }
        Ok(Pitch {
            note,
            octave: octave as u8,
        })
    }

    /// Render as the note name followed by the octave digit.
    pub fn name(&self, options: &NameOptions) -> String {
        format!("{}{}", self.note.name(options), self.octave)
    }

    /// The pitch class, without octave.
    pub const fn note(&self) -> Note {
        self.note
    }

    /// The octave, `0..=8`.
    pub const fn octave(&self) -> u8 {
        self.octave
    }

    /// Move by `n` half steps, carrying into neighbouring octaves.
    ///
    /// Fails when the result would leave the `0..=8` octave range.
    pub fn transpose(&self, n: i32) -> Result<Pitch, PitchError> {
        let carry = (self.note.id() as i64 + n as i64).div_euclid(SEMITONES as i64);
        let octave = self.octave as i64 + carry;
        if !(MIN_OCTAVE as i64..=MAX_OCTAVE as i64).contains(&octave) {
            return Err(PitchError::InvalidOctave(
                octave.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Pitch::new(self.note.transpose(n), octave as i32)
    }

    /// Negative if this pitch is lower than `other`, zero if equal,
    /// positive if higher.
    pub fn compare_to(&self, other: &Pitch) -> i32 {
        if self.octave != other.octave {
            return self.octave as i32 - other.octave as i32;
        }
        self.note.id() as i32 - other.note.id() as i32
    }

    /// Signed half steps from this pitch to `other`.
    pub fn interval(&self, other: &Pitch) -> i32 {
        other.absolute() - self.absolute()
    }

    fn absolute(&self) -> i32 {
        self.octave as i32 * SEMITONES as i32 + self.note.id() as i32
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_to(other).cmp(&0)
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name(&NameOptions::default()))
    }
}

impl FromStr for Pitch {
    type Err = PitchError;

    /// A note name immediately followed by a single octave digit, e.g. "bB4".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digit = s
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| PitchError::MissingOctave(s.to_string()))?;
        let note = s[..s.len() - 1].parse()?;
        Pitch::new(note, digit as i32)
    }
}

impl TryFrom<String> for Pitch {
    type Error = PitchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> Self {
        pitch.to_string()
    }
}

impl From<Pitch> for Note {
    fn from(pitch: Pitch) -> Self {
        pitch.note
    }
}
