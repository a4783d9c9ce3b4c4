//! Chord Naming
//!
//! Names a set of notes relative to a chosen root and scores how natural
//! that reading is. The intervals present above the root pick one of five
//! branches (single note, two-note chord, major, minor, suspended). The
//! branch claims the intervals it can explain and returns the name
//! fragments for them. Whatever is left over is reported as an added tone.
//!
//! The score rewards complete, common shapes (a triad with its fifth, a
//! power chord) and penalizes missing fifths, stacked extensions, stray
//! tones and a bass that is not the root. It only means something when
//! comparing readings of the same notes.

use serde::Serialize;

use crate::intervals::{
    label, IntervalSet, DOM_SEVENTH, DOUBLE_FLAT_SEVENTH, ELEVENTH, FIFTH, FLAT_FIFTH, FOURTH,
    MAJ_SEVENTH, MAJ_THIRD, MIN_THIRD, NINTH, ROOT, SECOND, SHARP_FIFTH, SHARP_NINTH, SIXTH,
    THIRTEENTH,
};
use crate::note::{Note, SEMITONES};
use crate::options::NameOptions;
use crate::spelling::{stacked, ChordSpelling};
use crate::trace::{NoTrace, Trace, TraceLog, TraceSink};

/// One note used in a chord name, with the interval it plays above the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalNote {
    /// Interval label: "R", "m3", "5", "maj7", "9", "bb7", ...
    pub interval: String,
    /// The note itself.
    pub note: Note,
}

/// A chord name for one choice of root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordNameResult {
    /// The rendered name, e.g. "Cm7(b5)".
    pub name: String,
    /// Plausibility of this reading. Higher is better.
    pub score: i32,
    /// Notes that shaped the name, root first.
    pub notes: Vec<IntervalNote>,
    /// One line per scoring decision, when tracing was requested.
    pub verbose: Option<Vec<String>>,
}

/// Name `notes` with `root` as the root and `bass` as the lowest note.
///
/// With `options.verbose` the trace is returned in
/// [`ChordNameResult::verbose`].
pub fn name_chord(notes: &[Note], root: Note, bass: Note, options: &NameOptions) -> ChordNameResult {
    if options.verbose {
        let mut log = TraceLog::new();
        let mut result = name_chord_traced(notes, root, bass, options, &mut log);
        result.verbose = Some(log.into_lines());
        result
    } else {
        name_chord_traced(notes, root, bass, options, &mut NoTrace)
    }
}

/// Like [`name_chord`], sending the trace to `sink` instead of the result.
pub fn name_chord_traced(
    notes: &[Note],
    root: Note,
    bass: Note,
    options: &NameOptions,
    sink: &mut dyn TraceSink,
) -> ChordNameResult {
    let mut trace = Trace::new(sink);
    let found = IntervalSet::of(&root, notes);

    let mut base = Partial::default();
    let mut present = found;
    if !present.contains(ROOT) {
        base.adjust(&mut trace, -20, format_args!("root is not in the chord, assuming it anyway"));
        present = present.with(ROOT);
    }

    let bass_slot = root.interval(&bass);
    if !present.contains(bass_slot) {
        base.adjust(&mut trace, -20, format_args!("bass is not in the chord, assuming it anyway"));
        present = present.with(bass_slot);
    }

    let ctx = Context {
        root,
        present,
        options,
    };
    base.take(&ctx, ROOT, "R");

    if bass != root {
        base.adjust(&mut trace, -10, format_args!("bass is not the root"));
        base.spelling.bass = Some(bass.name(options));
    }

    let branch = Branch::classify(present);
    let shape = branch.run(&ctx, base.consumed, &mut trace);
    let mut partial = base.merge(shape);
    let leftovers = sweep(&ctx, partial.consumed, &mut trace);
    partial = partial.merge(leftovers);

    partial.spelling.root = root.name(options);
    let name = partial.spelling.render();
    log::debug!("{root} as root: {name} ({:+})", partial.score);

    ChordNameResult {
        name,
        score: partial.score,
        notes: partial.details,
        verbose: None,
    }
}

/// Read-only inputs shared by every branch.
struct Context<'a> {
    root: Note,
    present: IntervalSet,
    options: &'a NameOptions,
}

impl Context<'_> {
    fn has(&self, slot: u8) -> bool {
        self.present.contains(slot)
    }

    fn has_seventh(&self) -> bool {
        self.has(DOM_SEVENTH) || self.has(MAJ_SEVENTH)
    }

    fn flat(&self) -> &'static str {
        self.options.flat_symbol()
    }

    fn sharp(&self) -> &'static str {
        self.options.sharp_symbol()
    }

    fn maj(&self) -> &'static str {
        self.options.major_symbol.as_str()
    }

    fn min(&self) -> &'static str {
        self.options.minor_symbol.as_str()
    }

    fn dim(&self) -> &'static str {
        self.options.dim_symbol.as_str()
    }
}

/// What one step of the naming contributes.
#[derive(Debug, Default)]
struct Partial {
    score: i32,
    spelling: ChordSpelling,
    details: Vec<IntervalNote>,
    consumed: IntervalSet,
}

impl Partial {
    fn starting_from(consumed: IntervalSet) -> Self {
        Partial {
            consumed,
            ..Default::default()
        }
    }

    fn adjust(&mut self, trace: &mut Trace<'_>, delta: i32, message: std::fmt::Arguments<'_>) {
        self.score += delta;
        trace.line(delta, message);
    }

    /// Claim `slot`, recording the note there under `interval`.
    fn take(&mut self, ctx: &Context<'_>, slot: u8, interval: impl Into<String>) {
        self.details.push(IntervalNote {
            interval: interval.into(),
            note: ctx.root.transpose(slot as i32),
        });
        self.consumed = self.consumed.with(slot);
    }

    /// Present in the chord and not yet claimed.
    fn free(&self, ctx: &Context<'_>, slot: u8) -> bool {
        ctx.has(slot) && !self.consumed.contains(slot)
    }

    /// Fold a later step into this one, appending its fragments.
    ///
    /// Root and bass are only ever set on the first step, so a later step
    /// contributes neither.
    fn merge(mut self, later: Partial) -> Partial {
        self.score += later.score;
        self.details.extend(later.details);
        self.consumed = self.consumed.union(later.consumed);

        let spelling = &mut self.spelling;
        let ChordSpelling {
            root: _,
            lower_case_root,
            quality,
            extension,
            suspension,
            altered_fifth,
            added,
            omissions,
            bass: _,
        } = later.spelling;
        spelling.lower_case_root |= lower_case_root;
        spelling.quality.push_str(&quality);
        spelling.extension.push_str(&extension);
        spelling.suspension.push_str(&suspension);
        spelling.altered_fifth.push_str(&altered_fifth);
        spelling.added.extend(added);
        spelling.omissions.push_str(&omissions);
        self
    }
}

/// The reading chosen for a set of intervals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Branch {
    /// Only the root.
    Single,
    /// Root plus one other interval.
    Dyad,
    /// Contains a major third.
    Major,
    /// Contains a minor third but no major third.
    Minor,
    /// No third at all.
    Suspended,
}

impl Branch {
    fn classify(present: IntervalSet) -> Branch {
        match present.len() {
            1 => Branch::Single,
            2 => Branch::Dyad,
            _ if present.contains(MAJ_THIRD) => Branch::Major,
            _ if present.contains(MIN_THIRD) => Branch::Minor,
            _ => Branch::Suspended,
        }
    }

    fn run(self, ctx: &Context<'_>, consumed: IntervalSet, trace: &mut Trace<'_>) -> Partial {
        let part = Partial::starting_from(consumed);
        match self {
            Branch::Single => single(part, trace),
            Branch::Dyad => dyad(ctx, part, trace),
            Branch::Major => major(ctx, part, trace),
            Branch::Minor => minor(ctx, part, trace),
            Branch::Suspended => suspended(ctx, part, trace),
        }
    }
}

fn single(mut part: Partial, trace: &mut Trace<'_>) -> Partial {
    part.adjust(trace, 0, format_args!("one note, the name is just the root"));
    part
}

fn dyad(ctx: &Context<'_>, mut part: Partial, trace: &mut Trace<'_>) -> Partial {
    let spelling = &mut part.spelling;
    if ctx.has(MIN_THIRD) {
        if ctx.options.omit_minor {
            spelling.lower_case_root = true;
        } else {
            spelling.quality = ctx.min().to_string();
        }
        spelling.omissions.push_str("no5");
        part.adjust(trace, 18, format_args!("two notes: minor chord without a fifth"));
        part.take(ctx, MIN_THIRD, "m3");
    } else if ctx.has(MAJ_THIRD) {
        if !ctx.options.omit_major {
            spelling.quality = ctx.maj().to_string();
        }
        spelling.omissions.push_str("no5");
        part.adjust(trace, 20, format_args!("two notes: major chord without a fifth"));
        part.take(ctx, MAJ_THIRD, "3");
    } else if ctx.has(FLAT_FIFTH) {
        spelling.quality = ctx.dim().to_string();
        spelling.extension = "5".to_string();
        part.adjust(trace, 10, format_args!("two notes: {}5", ctx.dim()));
        part.take(ctx, FLAT_FIFTH, format!("{}5", ctx.flat()));
    } else if ctx.has(FIFTH) {
        spelling.extension = "5".to_string();
        part.adjust(trace, 30, format_args!("power chord, root and fifth"));
        part.take(ctx, FIFTH, "5");
    } else if ctx.has(SHARP_FIFTH) {
        spelling.quality = ctx.options.aug_symbol.as_str().to_string();
        spelling.extension = "5".to_string();
        part.adjust(trace, 10, format_args!("two notes: aug5"));
        part.take(ctx, SHARP_FIFTH, format!("{}5", ctx.sharp()));
    } else {
        let others: Vec<u8> = (1..SEMITONES).filter(|&slot| part.free(ctx, slot)).collect();
        for slot in others {
            let other = ctx.root.transpose(slot as i32);
            part.spelling.quality = format!("~{}", other.name(ctx.options));
            part.adjust(
                trace,
                0,
                format_args!("two notes with no common name, writing root~other"),
            );
            part.take(ctx, slot, label(slot, ctx.options));
        }
    }
    part
}

/// Fifth handling shared by the major and suspended readings.
enum SharpFifth {
    Augmented,
    Altered,
}

fn fifth(
    ctx: &Context<'_>,
    part: &mut Partial,
    trace: &mut Trace<'_>,
    sharp_fifth: SharpFifth,
) {
    if ctx.has(FIFTH) {
        part.adjust(trace, 10, format_args!("found fifth"));
        part.take(ctx, FIFTH, "5");
    } else if ctx.has(FLAT_FIFTH) {
        part.adjust(trace, -3, format_args!("found flat fifth"));
        part.take(ctx, FLAT_FIFTH, format!("{}5", ctx.flat()));
        part.spelling.altered_fifth.push_str(&format!("{}5", ctx.flat()));
    } else if ctx.has(SHARP_FIFTH) {
        part.take(ctx, SHARP_FIFTH, format!("{}5", ctx.sharp()));
        match sharp_fifth {
            SharpFifth::Augmented => {
                part.adjust(trace, -3, format_args!("found sharp fifth, augmented chord"));
                part.spelling.quality = ctx.options.aug_symbol.as_str().to_string();
            }
            SharpFifth::Altered => {
                part.adjust(trace, -3, format_args!("found sharp fifth"));
                part.spelling.altered_fifth.push_str(&format!("{}5", ctx.sharp()));
            }
        }
    } else {
        part.adjust(trace, -10, format_args!("missing fifth"));
        part.spelling.omissions.push_str("no5");
    }
}

/// Thirteenth over a seventh, shared by the major and minor readings.
fn thirteenth(ctx: &Context<'_>, part: &mut Partial, trace: &mut Trace<'_>) {
    if !(ctx.has(THIRTEENTH) && ctx.has_seventh()) {
        return;
    }
    part.adjust(trace, -8, format_args!("found thirteenth (sixth)"));
    part.take(ctx, THIRTEENTH, "13");
    if ctx.has(DOM_SEVENTH) {
        part.spelling.extension = "13".to_string();
    } else {
        part.spelling.extension = format!("{}13", ctx.maj());
    }
}

/// A sixth that was not read as a thirteenth.
fn plain_sixth(ctx: &Context<'_>, part: &mut Partial, trace: &mut Trace<'_>) {
    if part.free(ctx, SIXTH) {
        part.adjust(trace, -9, format_args!("found sixth"));
        part.take(ctx, SIXTH, "6");
        part.spelling.extension = "6".to_string();
    }
}

fn major(ctx: &Context<'_>, mut part: Partial, trace: &mut Trace<'_>) -> Partial {
    let maj = ctx.maj();
    part.adjust(trace, 30, format_args!("found major third, major chord"));
    part.take(ctx, MAJ_THIRD, "3");
    if !ctx.options.omit_major {
        part.spelling.quality = maj.to_string();
    }

    fifth(ctx, &mut part, trace, SharpFifth::Augmented);

    if ctx.has(DOM_SEVENTH) {
        part.adjust(trace, -5, format_args!("found dominant seventh"));
        part.take(ctx, DOM_SEVENTH, "7");
        part.spelling.extension = "7".to_string();
    } else if ctx.has(MAJ_SEVENTH) {
        part.adjust(trace, -5, format_args!("found major seventh"));
        part.take(ctx, MAJ_SEVENTH, format!("{maj}7"));
        part.spelling.extension = format!("{maj}7");
    }

    if ctx.has(NINTH) {
        part.adjust(trace, -6, format_args!("found ninth (second)"));
        part.take(ctx, NINTH, "9");
        if ctx.has(DOM_SEVENTH) {
            part.spelling.extension = "9".to_string();
        } else if ctx.has(MAJ_SEVENTH) {
            part.spelling.extension = format!("{maj}9");
        } else if ctx.has(SIXTH) {
            part.adjust(trace, 0, format_args!("sixth and ninth without a seventh, 6/9 chord"));
            part.take(ctx, SIXTH, "6");
            part.spelling.extension = stacked("6", "9", ctx.options.use_html);
        } else {
            part.adjust(trace, 0, format_args!("ninth without a seventh, add9 chord"));
            part.spelling.added.push("add9".to_string());
        }
    } else if part.free(ctx, SHARP_NINTH) && ctx.has_seventh() {
        let sharp = ctx.sharp();
        part.adjust(trace, -9, format_args!("found sharp ninth over a seventh"));
        part.take(ctx, SHARP_NINTH, format!("{sharp}9"));
        part.spelling.extension = if ctx.has(DOM_SEVENTH) {
            format!("7({sharp}9)")
        } else {
            format!("{maj}7({sharp}9)")
        };
    }

    if ctx.has(ELEVENTH) {
        part.adjust(trace, -7, format_args!("found eleventh (fourth)"));
        part.take(ctx, ELEVENTH, "11");
        if ctx.has(DOM_SEVENTH) {
            part.spelling.extension = "11".to_string();
        } else if ctx.has(MAJ_SEVENTH) {
            part.spelling.extension = format!("{maj}11");
        } else {
            part.adjust(trace, 0, format_args!("eleventh without a seventh, add11 chord"));
            part.spelling.added = vec!["add11".to_string()];
        }
    }

    thirteenth(ctx, &mut part, trace);
    plain_sixth(ctx, &mut part, trace);

    let spelling = &mut part.spelling;
    if !ctx.options.omit_major
        && spelling.quality == maj
        && !(spelling.extension.is_empty() && spelling.added.is_empty())
    {
        spelling.quality.clear();
    }
    part
}

fn minor(ctx: &Context<'_>, mut part: Partial, trace: &mut Trace<'_>) -> Partial {
    let (maj, min, dim) = (ctx.maj(), ctx.min(), ctx.dim());
    part.adjust(trace, 28, format_args!("found minor third, minor chord"));
    part.take(ctx, MIN_THIRD, "m3");
    if ctx.options.omit_minor {
        part.spelling.lower_case_root = true;
    } else {
        part.spelling.quality = min.to_string();
    }

    let mut diminished = false;
    if ctx.has(FIFTH) {
        part.adjust(trace, 10, format_args!("found fifth"));
        part.take(ctx, FIFTH, "5");
    } else if ctx.has(FLAT_FIFTH) {
        part.adjust(trace, -3, format_args!("found flat fifth, diminished chord"));
        part.take(ctx, FLAT_FIFTH, format!("{}5", ctx.flat()));
        part.spelling.quality = dim.to_string();
        part.spelling.lower_case_root = false;
        diminished = true;
    } else if ctx.has(SHARP_FIFTH) {
        part.adjust(trace, -3, format_args!("found sharp fifth"));
        part.take(ctx, SHARP_FIFTH, format!("{}5", ctx.sharp()));
        part.spelling.altered_fifth.push_str(&format!("{}5", ctx.sharp()));
    } else {
        part.adjust(trace, -10, format_args!("missing fifth"));
        part.spelling.omissions.push_str("no5");
    }

    if ctx.has(DOM_SEVENTH) {
        part.adjust(trace, -5, format_args!("found dominant seventh"));
        part.take(ctx, DOM_SEVENTH, "7");
        part.spelling.extension = "7".to_string();
        if diminished {
            let half_dim = ctx.options.half_dim_symbol();
            if half_dim.is_empty() {
                part.adjust(
                    trace,
                    0,
                    format_args!("flat fifth with dominant seventh is {min}7{}5", ctx.flat()),
                );
                if ctx.options.omit_minor {
                    part.spelling.lower_case_root = true;
                    part.spelling.quality.clear();
                } else {
                    part.spelling.quality = min.to_string();
                }
                part.spelling.altered_fifth = format!("{}5", ctx.flat());
            } else {
                part.adjust(
                    trace,
                    0,
                    format_args!("flat fifth with dominant seventh, writing {half_dim}"),
                );
                part.spelling.quality = half_dim.to_string();
                part.spelling.extension.clear();
            }
            diminished = false;
        }
    } else if ctx.has(MAJ_SEVENTH) {
        part.adjust(trace, -5, format_args!("found major seventh"));
        part.take(ctx, MAJ_SEVENTH, format!("{maj}7"));
        part.spelling.extension = format!("{maj}7");
    } else if diminished && ctx.has(DOUBLE_FLAT_SEVENTH) {
        part.adjust(trace, -5, format_args!("diminished with double flat seventh, {dim}7 chord"));
        part.take(ctx, DOUBLE_FLAT_SEVENTH, format!("{0}{0}7", ctx.flat()));
        part.spelling.extension = "7".to_string();
    }
    let full_diminished = diminished && ctx.has(DOUBLE_FLAT_SEVENTH);

    if ctx.has(NINTH) {
        part.adjust(trace, -6, format_args!("found ninth (second)"));
        part.take(ctx, NINTH, "9");
        if ctx.has(DOM_SEVENTH) {
            part.spelling.extension = "9".to_string();
        } else if ctx.has(MAJ_SEVENTH) {
            part.spelling.extension = format!("{maj}9");
        } else if full_diminished {
            part.spelling.extension = "9".to_string();
        } else if ctx.has(SIXTH) && !diminished {
            part.adjust(trace, 0, format_args!("sixth and ninth without a seventh, {min}6/9 chord"));
            part.take(ctx, SIXTH, "6");
            part.spelling.extension = stacked("6", "9", ctx.options.use_html);
        } else {
            part.adjust(trace, 0, format_args!("ninth without a seventh, add9"));
            part.spelling.added.push("add9".to_string());
        }
    }

    if ctx.has(ELEVENTH) {
        part.adjust(trace, -7, format_args!("found eleventh (fourth)"));
        part.take(ctx, ELEVENTH, "11");
        if ctx.has(DOM_SEVENTH) {
            part.spelling.extension = "11".to_string();
        } else if ctx.has(MAJ_SEVENTH) {
            part.spelling.extension = format!("{maj}11");
        } else if full_diminished {
            part.spelling.extension = "11".to_string();
        } else {
            part.adjust(trace, 0, format_args!("eleventh without a seventh, add11"));
            part.spelling.added.push("add11".to_string());
        }
    }

    thirteenth(ctx, &mut part, trace);
    plain_sixth(ctx, &mut part, trace);
    part
}

fn suspended(ctx: &Context<'_>, mut part: Partial, trace: &mut Trace<'_>) -> Partial {
    let maj = ctx.maj();
    part.adjust(trace, 0, format_args!("no third, suspended chord"));
    part.spelling.suspension = "sus".to_string();

    fifth(ctx, &mut part, trace, SharpFifth::Altered);

    let mut seventh = false;
    if part.free(ctx, DOM_SEVENTH) {
        part.adjust(trace, -5, format_args!("found dominant seventh, 7sus chord"));
        part.take(ctx, DOM_SEVENTH, "7");
        part.spelling.extension = "7".to_string();
        seventh = true;
    } else if part.free(ctx, MAJ_SEVENTH) {
        part.adjust(trace, -5, format_args!("found major seventh, {maj}7sus chord"));
        part.take(ctx, MAJ_SEVENTH, format!("{maj}7"));
        part.spelling.extension = format!("{maj}7");
        seventh = true;
    }

    if seventh {
        let over_seventh = |size: &str| {
            if ctx.has(DOM_SEVENTH) {
                size.to_string()
            } else {
                format!("{maj}{size}")
            }
        };
        if part.free(ctx, NINTH) {
            part.adjust(trace, -6, format_args!("found ninth (second)"));
            part.take(ctx, NINTH, "9");
            part.spelling.extension = over_seventh("9");
        }
        if part.free(ctx, ELEVENTH) {
            part.adjust(trace, -7, format_args!("found eleventh (fourth)"));
            part.take(ctx, ELEVENTH, "11");
            part.spelling.extension = over_seventh("11");
        }
        if part.free(ctx, THIRTEENTH) {
            part.adjust(trace, -8, format_args!("found thirteenth (sixth)"));
            part.take(ctx, THIRTEENTH, "13");
            part.spelling.extension = over_seventh("13");
        }
    }

    if part.free(ctx, SIXTH) {
        part.adjust(trace, 5, format_args!("found sixth, 6sus chord"));
        part.take(ctx, SIXTH, "6");
        part.spelling.extension = "6".to_string();

        if part.free(ctx, NINTH) {
            part.adjust(trace, -3, format_args!("found ninth, 6/9sus chord"));
            part.take(ctx, NINTH, "9");
            part.spelling.extension = stacked("6", "9", ctx.options.use_html);
        } else if part.free(ctx, ELEVENTH) {
            part.adjust(trace, -4, format_args!("found eleventh, 6/11sus chord"));
            part.take(ctx, ELEVENTH, "11");
            part.spelling.extension = stacked("6", "11", ctx.options.use_html);
        }
    }

    if part.free(ctx, SECOND) && part.free(ctx, FOURTH) {
        part.adjust(trace, 5, format_args!("found second and fourth, sus2/4"));
        part.take(ctx, SECOND, "2");
        part.take(ctx, FOURTH, "4");
        part.spelling.suspension.push_str(&stacked("2", "4", ctx.options.use_html));
    } else if part.free(ctx, SECOND) {
        part.adjust(trace, 10, format_args!("found second, sus2"));
        part.take(ctx, SECOND, "2");
        part.spelling.suspension.push('2');
    } else if part.free(ctx, FOURTH) {
        part.adjust(trace, 10, format_args!("found fourth, sus4"));
        part.take(ctx, FOURTH, "4");
        part.spelling.suspension.push('4');
    }
    part
}

/// Report every present interval no branch explained as an added tone.
fn sweep(ctx: &Context<'_>, consumed: IntervalSet, trace: &mut Trace<'_>) -> Partial {
    let mut part = Partial::default();
    for slot in ctx.present.difference(consumed).iter().filter(|&slot| slot != ROOT) {
        let interval = label(slot, ctx.options);
        part.adjust(trace, -10, format_args!("found {interval} that nothing else explains"));
        let added = if interval.starts_with(|c: char| c.is_ascii_lowercase()) {
            format!("add({interval})")
        } else {
            format!("add{interval}")
        };
        part.spelling.added.push(added);
        part.take(ctx, slot, interval);
    }
    part
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(s: &str) -> Vec<Note> {
        s.split_whitespace().map(|n| n.parse().unwrap()).collect()
    }

    fn name(s: &str) -> ChordNameResult {
        let notes = notes(s);
        name_chord(&notes, notes[0], notes[0], &NameOptions::default())
    }

    #[test]
    fn test_classify() {
        let set = |slots: &[u8]| slots.iter().copied().collect::<IntervalSet>();
        assert_eq!(Branch::classify(set(&[ROOT])), Branch::Single);
        assert_eq!(Branch::classify(set(&[ROOT, MAJ_THIRD])), Branch::Dyad);
        assert_eq!(Branch::classify(set(&[ROOT, MIN_THIRD, MAJ_THIRD])), Branch::Major);
        assert_eq!(Branch::classify(set(&[ROOT, MIN_THIRD, FIFTH])), Branch::Minor);
        assert_eq!(Branch::classify(set(&[ROOT, SECOND, FIFTH])), Branch::Suspended);
    }

    #[test]
    fn test_scores() {
        assert_eq!(name("C").score, 0);
        assert_eq!(name("C G").score, 30);
        assert_eq!(name("C E G").score, 40);
        assert_eq!(name("C Eb G").score, 38);
        assert_eq!(name("C E G Bb").score, 35);
        assert_eq!(name("C D G").score, 20);
        assert_eq!(name("C F").score, 0);
    }

    #[test]
    fn test_merge_appends_later_fragments() {
        let first = Partial {
            score: 30,
            spelling: ChordSpelling {
                root: "C".to_string(),
                bass: Some("E".to_string()),
                quality: "m".to_string(),
                ..Default::default()
            },
            details: Vec::new(),
            consumed: IntervalSet::EMPTY.with(ROOT),
        };
        let later = Partial {
            score: -10,
            spelling: ChordSpelling {
                root: "D".to_string(),
                bass: Some("F#".to_string()),
                extension: "7".to_string(),
                added: vec!["add9".to_string()],
                ..Default::default()
            },
            details: Vec::new(),
            consumed: IntervalSet::EMPTY.with(DOM_SEVENTH),
        };

        let merged = first.merge(later);
        assert_eq!(merged.score, 20);
        assert_eq!(merged.spelling.root, "C");
        assert_eq!(merged.spelling.bass.as_deref(), Some("E"));
        assert_eq!(merged.spelling.quality, "m");
        assert_eq!(merged.spelling.extension, "7");
        assert_eq!(merged.spelling.added, ["add9"]);
        assert!(merged.consumed.contains(ROOT) && merged.consumed.contains(DOM_SEVENTH));
    }

    #[test]
    fn test_interval_details() {
        let result = name("C Eb Gb A");
        assert_eq!(result.name, "Cdim7");
        let labels: Vec<&str> = result.notes.iter().map(|n| n.interval.as_str()).collect();
        assert_eq!(labels, ["R", "m3", "b5", "bb7"]);
        assert_eq!(result.notes[3].note, "A".parse().unwrap());
    }

    #[test]
    fn test_missing_root_and_bass() {
        let chord = notes("E G");
        let c: Note = "C".parse().unwrap();
        let d: Note = "D".parse().unwrap();
        let result = name_chord(&chord, c, d, &NameOptions::default());
        // the assumed bass D reads as an added ninth over the assumed root
        assert_eq!(result.name, "Cadd9/D");
        assert_eq!(result.score, -20 - 20 - 10 + 30 + 10 - 6);
        assert_eq!(result.notes.first().map(|n| n.interval.as_str()), Some("R"));
    }

    #[test]
    fn test_verbose_trace() {
        let chord = notes("C G");
        let options = NameOptions::builder().verbose(true).build();
        let result = name_chord(&chord, chord[0], chord[0], &options);
        assert_eq!(
            result.verbose,
            Some(vec!["+30 power chord, root and fifth".to_string()])
        );
        assert_eq!(name("C G").verbose, None);

        let mut lines = Vec::new();
        let traced = name_chord_traced(&chord, chord[0], chord[0], &NameOptions::default(), &mut lines);
        assert_eq!(traced.verbose, None);
        assert_eq!(lines.len(), 1);
    }
}
