//! Fixed pattern rules consumed by the decision tree
//!
//! Set-shaped rules (deviation characters, exception sets) are range-table
//! scans; sequence-shaped rules (dangerous visual patterns, the recognized
//! script combination) are compiled regexes.

use regex::Regex;
use spoofguard_core::{Error, Result};
use spoofguard_checks::tables;
use unicode_script::{Script, UnicodeScript};

/// Whether the label contains an IDNA deviation character.
pub fn has_deviation_character(label: &str) -> bool {
    label.chars().any(tables::is_deviation)
}

/// Whether the label contains a kana letter from the cross-syllabary
/// exception set.
pub fn has_kana_exception(label: &str) -> bool {
    label.chars().any(tables::is_kana_exception)
}

/// Whether the label contains a combining diacritic from the exception set.
pub fn has_combining_diacritic_exception(label: &str) -> bool {
    label.chars().any(tables::is_combining_diacritic_exception)
}

/// Whether the label contains Latin-script code points beyond ASCII.
pub fn has_non_ascii_latin(label: &str) -> bool {
    label
        .chars()
        .any(|c| !c.is_ascii() && c.script() == Script::Latin)
}

/// Whether every code point is ASCII or belongs to the recognized
/// Latin+Greek+Cyrillic combination.
pub fn is_latin_greek_cyrillic_ascii(label: &str) -> bool {
    label.chars().all(|c| {
        c.is_ascii()
            || matches!(
                c.script(),
                Script::Latin | Script::Greek | Script::Cyrillic | Script::Common | Script::Inherited
            )
    })
}

/// Dangerous visual patterns: character sequences that render misleadingly
/// even when the repertoire itself passes the restriction checks.
pub struct DangerousPatterns {
    rules: Vec<(&'static str, Regex)>,
}

impl DangerousPatterns {
    /// Compile the fixed rule set.
    pub fn compile() -> Result<Self> {
        let sources = [
            // Katakana-Hiragana prolonged sound mark with a non-kana lead-in
            // reads as a hyphen or a Latin vowel.
            (
                "prolonged-sound-mark",
                r"(?:^|[^\p{Hiragana}\p{Katakana}])\u{30FC}",
            ),
            // Katakana middle dot glued to Latin letters poses as a period.
            ("katakana-middle-dot", r"[a-z]\u{30FB}|\u{30FB}[a-z]"),
            // Katakana NO, N, SO, ZO without neighboring CJK pose as
            // slashes and letters.
            (
                "lone-katakana-letter",
                r"(?:^|[^\p{Hiragana}\p{Katakana}\p{Han}])[\u{30CE}\u{30F3}\u{30BD}\u{30BE}](?:$|[^\p{Hiragana}\p{Katakana}\p{Han}])",
            ),
            // Han ONE and vertical-stroke glyphs outside a Han context pose
            // as hyphen and Latin l.
            (
                "han-stroke-lookalike",
                r"(?:^|[^\p{Han}])[\u{4E00}\u{4E28}](?:$|[^\p{Han}])",
            ),
        ];

        let mut rules = Vec::with_capacity(sources.len());
        for (name, source) in sources {
            let regex = Regex::new(source)
                .map_err(|e| Error::pattern(format!("failed to compile {name}: {e}")))?;
            rules.push((name, regex));
        }
        Ok(Self { rules })
    }

    /// Names of the rules matching the label.
    pub fn matches(&self, label: &str) -> Vec<String> {
        self.rules
            .iter()
            .filter(|(_, regex)| regex.is_match(label))
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}
