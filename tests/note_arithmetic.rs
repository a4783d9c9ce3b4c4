//! Integration tests for note and pitch arithmetic over every pitch class
//! and every octave.

use chord_namer::{NameOptions, Note, Pitch, PitchError};
use lazy_static::lazy_static;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

lazy_static! {
    /// Every spelling the parser should accept for each pitch class.
    static ref SPELLINGS: Vec<(&'static str, u8)> = vec![
        ("C", 0), ("B#", 0), ("Dbb", 0),
        ("C#", 1), ("Db", 1), ("c\u{266F}", 1), ("D\u{266D}", 1),
        ("D", 2), ("Ebb", 2), ("C##", 2),
        ("D#", 3), ("Eb", 3), ("EB", 3), ("eb", 3),
        ("E", 4), ("Fb", 4),
        ("F", 5), ("E#", 5),
        ("F#", 6), ("Gb", 6),
        ("G", 7), ("Abb", 7),
        ("G#", 8), ("Ab", 8), ("AB", 8),
        ("A", 9), ("BB", 10), ("bB", 10), ("A#", 10), ("Bb", 10),
        ("B", 11), ("Cb", 11), ("cB", 11),
    ];

    static ref ALL_NOTES: Vec<Note> = (0..12).map(Note::new).collect();

    static ref ALL_PITCHES: Vec<Pitch> = (0..=8)
        .flat_map(|octave| ALL_NOTES.iter().map(move |&note| Pitch::new(note, octave).unwrap()))
        .collect();
}

#[test]
fn test_spellings() {
    for &(spelling, id) in SPELLINGS.iter() {
        let note: Note = spelling.parse().unwrap();
        assert_eq!(note.id(), id, "`{spelling}`");
    }
}

#[test]
fn test_name_round_trips() {
    let option_sets = [
        NameOptions::default(),
        NameOptions::builder().use_flats(true).build(),
        NameOptions::builder().unicode_accidentals(true).build(),
        NameOptions::builder().use_flats(true).unicode_accidentals(true).build(),
    ];
    for options in &option_sets {
        for note in ALL_NOTES.iter() {
            let reparsed: Note = note.name(options).parse().unwrap();
            assert_eq!(reparsed, *note);
        }
    }
    let bb: Note = "BB".parse().unwrap();
    assert_eq!(bb.to_string(), "A#");
}

#[test]
fn test_transpose_is_invertible() {
    ALL_NOTES.par_iter().for_each(|note| {
        for n in -50..=50 {
            assert_eq!(note.transpose(n).transpose(-n), *note);
        }
        assert_eq!(note.transpose(i32::MAX).transpose(-i32::MAX), *note);
    });
}

#[test]
fn test_interval_symmetry() {
    for a in ALL_NOTES.iter() {
        assert_eq!(a.interval(a), 0);
        for b in ALL_NOTES.iter() {
            assert_eq!((a.interval(b) + b.interval(a)) % 12, 0);
            assert_eq!(a.transpose(a.interval(b) as i32), *b);
        }
    }
}

#[test]
fn test_pitch_order_matches_interval() {
    ALL_PITCHES.par_iter().for_each(|a| {
        for b in ALL_PITCHES.iter() {
            assert_eq!(a.compare_to(b) < 0, a.interval(b) > 0, "{a} vs {b}");
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
    });
}

#[test]
fn test_pitch_transpose_walks_the_range() {
    let lowest: Pitch = "C0".parse().unwrap();
    for (steps, expected) in ALL_PITCHES.iter().enumerate() {
        assert_eq!(lowest.transpose(steps as i32).unwrap(), *expected);
        assert_eq!(expected.transpose(-(steps as i32)).unwrap(), lowest);
    }
    let highest = ALL_PITCHES.last().unwrap();
    assert_eq!(highest.transpose(1), Err(PitchError::InvalidOctave(9)));
    assert_eq!(lowest.transpose(-1), Err(PitchError::InvalidOctave(-1)));
}

#[test]
fn test_pitch_serde() {
    let pitch: Pitch = serde_json::from_str(r#""Eb4""#).unwrap();
    assert_eq!(pitch.to_string(), "D#4");
    assert_eq!(serde_json::to_string(&pitch).unwrap(), r#""D#4""#);
    assert!(serde_json::from_str::<Pitch>(r#""Eb9""#).is_err());
}
