//! Interval slots
//!
//! The twelve intervals above a root, and a compact set of them.

use std::fmt;

use crate::note::{Note, SEMITONES};
use crate::options::NameOptions;

/// Root (unison).
pub const ROOT: u8 = 0;
/// Minor second.
pub const FLAT_SECOND: u8 = 1;
/// Major second.
pub const SECOND: u8 = 2;
/// Minor third.
pub const MIN_THIRD: u8 = 3;
/// Major third.
pub const MAJ_THIRD: u8 = 4;
/// Perfect fourth.
pub const FOURTH: u8 = 5;
/// Diminished fifth.
pub const FLAT_FIFTH: u8 = 6;
/// Perfect fifth.
pub const FIFTH: u8 = 7;
/// Augmented fifth.
pub const SHARP_FIFTH: u8 = 8;
/// Major sixth.
pub const SIXTH: u8 = 9;
/// Minor (dominant) seventh.
pub const DOM_SEVENTH: u8 = 10;
/// Major seventh.
pub const MAJ_SEVENTH: u8 = 11;

/// Ninth, same pitch class as the second.
pub const NINTH: u8 = SECOND;
/// Eleventh, same pitch class as the fourth.
pub const ELEVENTH: u8 = FOURTH;
/// Thirteenth, same pitch class as the sixth.
pub const THIRTEENTH: u8 = SIXTH;
/// Diminished seventh, same pitch class as the sixth.
pub const DOUBLE_FLAT_SEVENTH: u8 = SIXTH;
/// Augmented ninth, same pitch class as the minor third.
pub const SHARP_NINTH: u8 = MIN_THIRD;

/// Label for an interval slot when it is reported on its own.
///
/// Slots with more than one reading use their simplest name here (`2`, not
/// `9`); the naming code picks richer labels where the context allows.
pub fn label(slot: u8, options: &NameOptions) -> String {
    match slot % SEMITONES {
        ROOT => "R".to_string(),
        FLAT_SECOND => format!("{}2", options.flat_symbol()),
        SECOND => "2".to_string(),
        MIN_THIRD => "m3".to_string(),
        MAJ_THIRD => "3".to_string(),
        FOURTH => "4".to_string(),
        FLAT_FIFTH => format!("{}5", options.flat_symbol()),
        FIFTH => "5".to_string(),
        SHARP_FIFTH => format!("{}5", options.sharp_symbol()),
        SIXTH => "6".to_string(),
        DOM_SEVENTH => "dom7".to_string(),
        _ => "maj7".to_string(),
    }
}

/// A set of interval slots above a root, one bit per slot.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct IntervalSet(u16);

impl IntervalSet {
    /// No slots.
    pub const EMPTY: IntervalSet = IntervalSet(0);

    /// Slots occupied by `notes` when measured up from `root`.
    pub fn of<'a, I>(root: &Note, notes: I) -> IntervalSet
    where
        I: IntoIterator<Item = &'a Note>,
    {
        notes
            .into_iter()
            .fold(IntervalSet::EMPTY, |set, note| set.with(root.interval(note)))
    }

    /// This set plus `slot`.
    #[must_use]
    pub const fn with(self, slot: u8) -> IntervalSet {
        IntervalSet(self.0 | (1 << (slot % SEMITONES)))
    }

    /// Whether `slot` is in the set.
    pub const fn contains(self, slot: u8) -> bool {
        self.0 & (1 << (slot % SEMITONES)) != 0
    }

    /// Slots in either set.
    #[must_use]
    pub const fn union(self, other: IntervalSet) -> IntervalSet {
        IntervalSet(self.0 | other.0)
    }

    /// Slots in this set but not in `other`.
    #[must_use]
    pub const fn difference(self, other: IntervalSet) -> IntervalSet {
        IntervalSet(self.0 & !other.0)
    }

    /// Number of occupied slots.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Whether no slot is occupied.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Occupied slots in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..SEMITONES).filter(move |&slot| self.contains(slot))
    }
}

impl FromIterator<u8> for IntervalSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        iter.into_iter().fold(IntervalSet::EMPTY, IntervalSet::with)
    }
}

impl fmt::Debug for IntervalSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_measures_from_root() {
        let notes: Vec<Note> = ["C", "E", "G"].iter().map(|s| s.parse().unwrap()).collect();
        let from_c = IntervalSet::of(&notes[0], &notes);
        assert_eq!(from_c.iter().collect::<Vec<_>>(), vec![ROOT, MAJ_THIRD, FIFTH]);

        let from_e = IntervalSet::of(&notes[1], &notes);
        assert_eq!(from_e.iter().collect::<Vec<_>>(), vec![ROOT, MIN_THIRD, SHARP_FIFTH]);
    }

    #[test]
    fn test_set_algebra() {
        let set: IntervalSet = [ROOT, FIFTH, FIFTH].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(FIFTH));
        assert!(!set.contains(SIXTH));
        assert_eq!(set.difference(IntervalSet::EMPTY.with(ROOT)).len(), 1);
        assert_eq!(set.union(IntervalSet::EMPTY.with(SIXTH)).len(), 3);
        assert!(IntervalSet::EMPTY.is_empty());
        assert_eq!(format!("{set:?}"), "{0, 7}");
    }

    #[test]
    fn test_labels() {
        let plain = NameOptions::default();
        let labels: Vec<String> = (0..SEMITONES).map(|slot| label(slot, &plain)).collect();
        assert_eq!(
            labels,
            ["R", "b2", "2", "m3", "3", "4", "b5", "5", "#5", "6", "dom7", "maj7"]
        );
        let unicode = NameOptions::builder().unicode_accidentals(true).build();
        assert_eq!(label(FLAT_SECOND, &unicode), "\u{266D}2");
    }
}
