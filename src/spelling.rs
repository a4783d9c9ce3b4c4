//! Chord spelling
//!
//! A chord name is built from typed fragments (root, quality, extension,
//! suspension, altered fifth, additions, omissions, bass) and joined in one
//! place. Parentheses are inserted only where two fragments would otherwise
//! run together into something ambiguous, e.g. "Cm" + "maj7" becomes
//! "Cm(maj7)" while "C" + "maj7" stays "Cmaj7".

/// Fragments of a chord name, in rendering order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChordSpelling {
    /// Root note name as spelled by the naming options.
    pub root: String,
    /// Render the root in lower case (minor chords with the symbol omitted).
    pub lower_case_root: bool,
    /// Quality symbol: "m", "maj", "aug", "dim", "ø", "~D", ...
    pub quality: String,
    /// Extension: "7", "maj9", "6/9", "7(#9)", ...
    pub extension: String,
    /// Suspension, printed after the extension: "sus", "sus4", "sus2/4".
    pub suspension: String,
    /// Altered fifth, always parenthesized: "b5", "#5".
    pub altered_fifth: String,
    /// Added tones in the order found: "add9", "add(m3)".
    pub added: Vec<String>,
    /// Omitted tones, always parenthesized: "no5".
    pub omissions: String,
    /// Bass note name for slash chords.
    pub bass: Option<String>,
}

impl ChordSpelling {
    /// Join the fragments into a chord name.
    pub fn render(&self) -> String {
        let mut name = if self.lower_case_root {
            self.root.to_lowercase()
        } else {
            self.root.clone()
        };

        name.push_str(&self.quality);
        if ends_in_symbol_letter(&self.quality) && starts_with_letter(&self.extension) {
            name.push_str(&parenthesize(&self.extension));
        } else {
            name.push_str(&self.extension);
        }
        name.push_str(&self.suspension);
        name.push_str(&parenthesize(&self.altered_fifth));

        let added = self.added.concat();
        if ends_in_symbol_letter(&name) && starts_with_lowercase(&added) {
            name.push_str(&parenthesize(&added));
        } else {
            name.push_str(&added);
        }

        name.push_str(&parenthesize(&self.omissions));
        if let Some(bass) = &self.bass {
            name.push('/');
            name.push_str(bass);
        }
        name
    }
}

/// Two stacked numbers, as in "6/9" or "2/4".
///
/// With `use_html` the pair is wrapped for superscript/subscript styling.
pub fn stacked(upper: &str, lower: &str, use_html: bool) -> String {
    if use_html {
        format!(r#"<span class="supsub"><span>{upper}</span><span>{lower}</span></span>"#)
    } else {
        format!("{upper}/{lower}")
    }
}

/// `(text)`, or nothing for empty text.
pub fn parenthesize(text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        format!("({text})")
    }
}

/// Ends with a lowercase ASCII letter that could continue a word. A trailing
/// `b` reads as a flat sign, so it does not count.
fn ends_in_symbol_letter(text: &str) -> bool {
    text.chars()
        .last()
        .is_some_and(|c| c.is_ascii_lowercase() && c != 'b')
}

fn starts_with_letter(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
}

fn starts_with_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_lowercase())
}
