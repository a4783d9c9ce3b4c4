//! Naming options
//!
//! A sparse, caller-facing [`ChordNameOptions`] record and the fully
//! resolved [`NameOptions`] the naming code consumes. Sanitizing never fails:
//! a missing, unknown or wrong-typed value falls back to its default.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// Symbol printed for a major chord when it cannot be omitted.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MajorSymbol {
    /// `maj`, e.g. "Cmaj7"
    #[default]
    #[serde(rename = "maj")]
    Maj,
    /// `M`, e.g. "CM7"
    #[serde(rename = "M")]
    UpperM,
}

impl MajorSymbol {
    /// Text of the symbol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MajorSymbol::Maj => "maj",
            MajorSymbol::UpperM => "M",
        }
    }
}

/// Symbol printed for a minor chord.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinorSymbol {
    /// `min`, e.g. "Cmin7"
    #[serde(rename = "min")]
    Min,
    /// `m`, e.g. "Cm7"
    #[default]
    #[serde(rename = "m")]
    M,
    /// `-`, e.g. "C-7"
    #[serde(rename = "-")]
    Dash,
}

impl MinorSymbol {
    /// Text of the symbol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MinorSymbol::Min => "min",
            MinorSymbol::M => "m",
            MinorSymbol::Dash => "-",
        }
    }
}

/// Symbol printed for an augmented chord.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AugSymbol {
    /// `aug`, e.g. "Caug"
    #[default]
    #[serde(rename = "aug")]
    Aug,
    /// `+`, e.g. "C+"
    #[serde(rename = "+")]
    Plus,
}

impl AugSymbol {
    /// Text of the symbol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AugSymbol::Aug => "aug",
            AugSymbol::Plus => "+",
        }
    }
}

/// Symbol printed for a diminished chord.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimSymbol {
    /// `dim`, e.g. "Cdim7"
    #[default]
    #[serde(rename = "dim")]
    Dim,
    /// Plain letter `o`
    #[serde(rename = "o")]
    O,
    /// Modifier letter small o (`\u{1D52}`); `"unicode"` is accepted as an alias.
    #[serde(rename = "\u{1D52}", alias = "unicode")]
    Degree,
}

impl DimSymbol {
    /// Text of the symbol.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DimSymbol::Dim => "dim",
            DimSymbol::O => "o",
            DimSymbol::Degree => "\u{1D52}",
        }
    }
}

/// Sparse naming options, as a caller would write them.
///
/// Every field is optional. When read from JSON (camelCase keys), a value of
/// the wrong type or outside the allowed set becomes `None` rather than an
/// error, so it falls back to its default once sanitized.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChordNameOptions {
    /// Spell accidentals as flats ("Gb") instead of sharps ("F#").
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub use_flats: Option<bool>,
    /// Symbol for a major chord.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub major_symbol: Option<MajorSymbol>,
    /// Leave out the major symbol when possible ("C" rather than "Cmaj").
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub omit_major: Option<bool>,
    /// Symbol for a minor chord.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub minor_symbol: Option<MinorSymbol>,
    /// Leave out the minor symbol and lower-case the root instead ("c7").
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub omit_minor: Option<bool>,
    /// Symbol for an augmented chord.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub aug_symbol: Option<AugSymbol>,
    /// Symbol for a diminished chord.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dim_symbol: Option<DimSymbol>,
    /// Use `♭`/`♯` instead of `b`/`#`.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub unicode_accidentals: Option<bool>,
    /// Call a half-diminished chord `ø` instead of `m7(b5)`.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub unicode_half_diminished: Option<bool>,
    /// Render 6/9, 6/11 and 2/4 clusters as stacked HTML.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub use_html: Option<bool>,
    /// Explain each scoring decision in the result.
    #[serde(deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

/// Read a field as `T`, turning any mismatch into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ChordNameOptions {
    /// Read options from a JSON value. Anything that is not an object yields
    /// the empty record.
    pub fn from_json_value(value: &serde_json::Value) -> ChordNameOptions {
        if !value.is_object() {
            log::debug!("ignoring naming options that are not an object: {value}");
            return ChordNameOptions::default();
        }
        match ChordNameOptions::deserialize(value) {
            Ok(options) => options,
            Err(err) => {
                log::debug!("ignoring naming options {value}: {err}");
                ChordNameOptions::default()
            }
        }
    }

    /// Read options from JSON text. Malformed text yields the empty record.
    pub fn from_json_str(text: &str) -> ChordNameOptions {
        match serde_json::from_str::<serde_json::Value>(text) {
            Ok(value) => ChordNameOptions::from_json_value(&value),
            Err(err) => {
                log::debug!("ignoring unparsable naming options: {err}");
                ChordNameOptions::default()
            }
        }
    }

    /// Resolve every field, see [`sanitize`].
    pub fn sanitize(&self) -> NameOptions {
        sanitize(self)
    }
}

/// Fully resolved naming options. Every field has a concrete value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameOptions {
    /// Spell accidentals as flats.
    pub use_flats: bool,
    /// Use unicode accidental glyphs.
    pub unicode_accidentals: bool,
    /// Symbol for a major chord.
    pub major_symbol: MajorSymbol,
    /// Leave out the major symbol when possible.
    pub omit_major: bool,
    /// Symbol for a minor chord.
    pub minor_symbol: MinorSymbol,
    /// Lower-case the root instead of printing the minor symbol.
    pub omit_minor: bool,
    /// Symbol for an augmented chord.
    pub aug_symbol: AugSymbol,
    /// Symbol for a diminished chord.
    pub dim_symbol: DimSymbol,
    /// Collapse half-diminished chords to `ø`.
    pub unicode_half_diminished: bool,
    /// Render stacked clusters as HTML.
    pub use_html: bool,
    /// Collect a trace of scoring decisions.
    pub verbose: bool,
}

impl NameOptions {
    /// Return a builder starting from the defaults.
    pub fn builder() -> NameOptionsBuilder {
        NameOptionsBuilder::new()
    }

    /// Flat glyph: `♭` with unicode accidentals, `b` otherwise.
    pub const fn flat_symbol(&self) -> &'static str {
        if self.unicode_accidentals {
            "\u{266D}"
        } else {
            "b"
        }
    }

    /// Sharp glyph: `♯` with unicode accidentals, `#` otherwise.
    pub const fn sharp_symbol(&self) -> &'static str {
        if self.unicode_accidentals {
            "\u{266F}"
        } else {
            "#"
        }
    }

    /// `ø` when half-diminished chords collapse to one symbol, empty otherwise.
    pub const fn half_dim_symbol(&self) -> &'static str {
        if self.unicode_half_diminished {
            "\u{00F8}"
        } else {
            ""
        }
    }
}

impl Default for NameOptions {
    fn default() -> Self {
        sanitize(&ChordNameOptions::default())
    }
}

impl From<&ChordNameOptions> for NameOptions {
    fn from(options: &ChordNameOptions) -> Self {
        sanitize(options)
    }
}

/// Fill every unset field of `options` with its default.
pub fn sanitize(options: &ChordNameOptions) -> NameOptions {
    NameOptions {
        use_flats: options.use_flats.unwrap_or(false),
        unicode_accidentals: options.unicode_accidentals.unwrap_or(false),
        major_symbol: options.major_symbol.unwrap_or_default(),
        omit_major: options.omit_major.unwrap_or(true),
        minor_symbol: options.minor_symbol.unwrap_or_default(),
        omit_minor: options.omit_minor.unwrap_or(false),
        aug_symbol: options.aug_symbol.unwrap_or_default(),
        dim_symbol: options.dim_symbol.unwrap_or_default(),
        unicode_half_diminished: options.unicode_half_diminished.unwrap_or(false),
        use_html: options.use_html.unwrap_or(false),
        verbose: options.verbose.unwrap_or(false),
    }
}

/// Builder for `NameOptions`
#[derive(Debug, Default, Clone)]
pub struct NameOptionsBuilder {
    options: ChordNameOptions,
}

impl NameOptionsBuilder {
    /// Start with nothing set, i.e. every field at its default.
    pub fn new() -> Self {
        NameOptionsBuilder {
            options: ChordNameOptions::default(),
        }
    }

    /// Spell accidentals as flats.
    pub fn use_flats(mut self, value: bool) -> Self {
        self.options.use_flats = Some(value);
        self
    }

    /// Use unicode accidental glyphs.
    pub fn unicode_accidentals(mut self, value: bool) -> Self {
        self.options.unicode_accidentals = Some(value);
        self
    }

    /// Set the major symbol.
    pub fn major_symbol(mut self, value: MajorSymbol) -> Self {
        self.options.major_symbol = Some(value);
        self
    }

    /// Leave out the major symbol when possible.
    pub fn omit_major(mut self, value: bool) -> Self {
        self.options.omit_major = Some(value);
        self
    }

    /// Set the minor symbol.
    pub fn minor_symbol(mut self, value: MinorSymbol) -> Self {
        self.options.minor_symbol = Some(value);
        self
    }

    /// Lower-case the root of minor chords instead of printing a symbol.
    pub fn omit_minor(mut self, value: bool) -> Self {
        self.options.omit_minor = Some(value);
        self
    }

    /// Set the augmented symbol.
    pub fn aug_symbol(mut self, value: AugSymbol) -> Self {
        self.options.aug_symbol = Some(value);
        self
    }

    /// Set the diminished symbol.
    pub fn dim_symbol(mut self, value: DimSymbol) -> Self {
        self.options.dim_symbol = Some(value);
        self
    }

    /// Collapse half-diminished chords to `ø`.
    pub fn unicode_half_diminished(mut self, value: bool) -> Self {
        self.options.unicode_half_diminished = Some(value);
        self
    }

    /// Render stacked clusters as HTML.
    pub fn use_html(mut self, value: bool) -> Self {
        self.options.use_html = Some(value);
        self
    }

    /// Collect a trace of scoring decisions.
    pub fn verbose(mut self, value: bool) -> Self {
        self.options.verbose = Some(value);
        self
    }

    /// Sanitize into `NameOptions`.
    pub fn build(self) -> NameOptions {
        sanitize(&self.options)
    }
}
