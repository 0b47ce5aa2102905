//! Precomputed code-point tables and the range query they sit behind
//!
//! Script and general-category data comes from the ecosystem Unicode crates;
//! the tables here cover only the sets specific to spoof screening: emoji
//! masking ranges, decimal zero references, the allowed/removed identifier
//! sets, Cyrillic glyphs that render identically to Latin letters, and the
//! kana, combining-diacritic, and IDNA-deviation exception sets.

use unicode_script::{Script, UnicodeScript};

/// Inclusive code point range.
type Range = (u32, u32);

/// Binary search over a sorted, non-overlapping range table.
fn in_table(c: char, table: &[Range]) -> bool {
    let cp = c as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                std::cmp::Ordering::Less
            } else if lo > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Emoji and pictograph blocks masked out before analysis.
const EMOJI: &[Range] = &[
    (0x2600, 0x27BF),   // Miscellaneous Symbols, Dingbats
    (0x2B00, 0x2BFF),   // Miscellaneous Symbols and Arrows
    (0xFE0F, 0xFE0F),   // Variation Selector-16
    (0x1F000, 0x1F02F), // Mahjong Tiles, Dominoes
    (0x1F0A0, 0x1F0FF), // Playing Cards
    (0x1F1E6, 0x1F1FF), // Regional Indicator Symbols
    (0x1F300, 0x1F5FF), // Miscellaneous Symbols and Pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and Map Symbols
    (0x1F900, 0x1F9FF), // Supplemental Symbols and Pictographs
    (0x1FA70, 0x1FAFF), // Symbols and Pictographs Extended-A
];

/// Whether the code point belongs to an emoji block.
pub fn is_emoji(c: char) -> bool {
    in_table(c, EMOJI)
}

/// Digit zero of every decimal numbering system (category Nd). Each system
/// occupies a contiguous run of ten code points starting at its zero.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030,  // ASCII
    0x0660,  // Arabic-Indic
    0x06F0,  // Extended Arabic-Indic
    0x07C0,  // NKo
    0x0966,  // Devanagari
    0x09E6,  // Bengali
    0x0A66,  // Gurmukhi
    0x0AE6,  // Gujarati
    0x0B66,  // Oriya
    0x0BE6,  // Tamil
    0x0C66,  // Telugu
    0x0CE6,  // Kannada
    0x0D66,  // Malayalam
    0x0DE6,  // Sinhala Lith
    0x0E50,  // Thai
    0x0ED0,  // Lao
    0x0F20,  // Tibetan
    0x1040,  // Myanmar
    0x1090,  // Myanmar Shan
    0x17E0,  // Khmer
    0x1810,  // Mongolian
    0x1946,  // Limbu
    0x19D0,  // New Tai Lue
    0x1A80,  // Tai Tham Hora
    0x1A90,  // Tai Tham Tham
    0x1B50,  // Balinese
    0x1BB0,  // Sundanese
    0x1C40,  // Lepcha
    0x1C50,  // Ol Chiki
    0xA620,  // Vai
    0xA8D0,  // Saurashtra
    0xA900,  // Kayah Li
    0xA9D0,  // Javanese
    0xA9F0,  // Myanmar Tai Laing
    0xAA50,  // Cham
    0xABF0,  // Meetei Mayek
    0xFF10,  // Fullwidth
];

/// Zero reference of a decimal digit: the code point of digit zero in the
/// digit's own numbering system. `None` when `c` is not a decimal digit.
pub fn decimal_zero(c: char) -> Option<char> {
    let cp = c as u32;
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    if idx == 0 {
        return None;
    }
    let zero = DECIMAL_ZEROS[idx - 1];
    if cp - zero <= 9 {
        // Runs of ten are guaranteed; the start of a run is its zero.
        char::from_u32(zero)
    } else {
        None
    }
}

/// Deprecated and obsolete code points, disallowed outright.
const REMOVED: &[Range] = &[
    (0x0340, 0x0341),   // combining grave/acute tone marks
    (0x17A3, 0x17A4),   // Khmer independent vowels QAQ, QAA
    (0x17B4, 0x17B5),   // Khmer inherent vowels
    (0x17D8, 0x17D8),   // Khmer sign beyyal
    (0x206A, 0x206F),   // deprecated format controls
    (0x2329, 0x232A),   // deprecated angle brackets
    (0xE0001, 0xE0001), // language tag
];

/// Whether the code point is in the removed (deprecated/obsolete) set.
pub fn is_removed(c: char) -> bool {
    in_table(c, REMOVED)
}

/// Scripts whose letters are admitted into identifiers.
const RECOMMENDED_SCRIPTS: &[Script] = &[
    Script::Arabic,
    Script::Armenian,
    Script::Bengali,
    Script::Bopomofo,
    Script::Cyrillic,
    Script::Devanagari,
    Script::Ethiopic,
    Script::Georgian,
    Script::Greek,
    Script::Gujarati,
    Script::Gurmukhi,
    Script::Han,
    Script::Hangul,
    Script::Hebrew,
    Script::Hiragana,
    Script::Kannada,
    Script::Katakana,
    Script::Khmer,
    Script::Lao,
    Script::Latin,
    Script::Malayalam,
    Script::Myanmar,
    Script::Oriya,
    Script::Sinhala,
    Script::Tamil,
    Script::Telugu,
    Script::Thaana,
    Script::Thai,
    Script::Tibetan,
];

/// Whether the code point is in the allowed set.
///
/// ASCII narrows to the hostname-label repertoire; everything else is
/// admitted when its script is recommended for identifiers. Common and
/// Inherited code points (digits, marks, joiners) stay admitted so that
/// script-specific checks can judge them in context.
pub fn is_allowed(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '-' || c == '_';
    }
    let script = c.script();
    script == Script::Common
        || script == Script::Inherited
        || RECOMMENDED_SCRIPTS.contains(&script)
}

/// Cyrillic lowercase glyphs visually identical to Latin letters.
const CYRILLIC_LATIN_ALIKE: &[Range] = &[
    (0x0430, 0x0430), // а
    (0x0435, 0x0435), // е
    (0x043E, 0x043E), // о
    (0x0440, 0x0441), // р с
    (0x0443, 0x0443), // у
    (0x0445, 0x0445), // х
    (0x0455, 0x0456), // ѕ і
    (0x0458, 0x0458), // ј
    (0x04BB, 0x04BB), // һ
    (0x04CF, 0x04CF), // ӏ
    (0x0501, 0x0501), // ԁ
    (0x050D, 0x050D), // ԍ
    (0x051B, 0x051B), // ԛ
    (0x051D, 0x051D), // ԝ
];

/// Whether the code point is a Cyrillic glyph rendered identically to a
/// Latin letter.
pub fn is_cyrillic_latin_alike(c: char) -> bool {
    in_table(c, CYRILLIC_LATIN_ALIKE)
}

/// Kana letters too easy to mistake for their cross-syllabary twins.
const KANA_EXCEPTION: &[Range] = &[
    (0x3078, 0x307A), // へ べ ぺ
    (0x30D8, 0x30DA), // ヘ ベ ペ
];

/// Whether the code point is in the kana-character exception set.
pub fn is_kana_exception(c: char) -> bool {
    in_table(c, KANA_EXCEPTION)
}

/// Combining diacritics whose presence routes a label away from the
/// single-script confusable check.
const COMBINING_DIACRITIC_EXCEPTION: &[Range] = &[(0x0300, 0x0339)];

/// Whether the code point is in the combining-diacritic exception set.
pub fn is_combining_diacritic_exception(c: char) -> bool {
    in_table(c, COMBINING_DIACRITIC_EXCEPTION)
}

/// IDNA deviation characters: transitional handling differs between
/// encoding standard versions.
const DEVIATION: &[Range] = &[
    (0x00DF, 0x00DF), // ß
    (0x03C2, 0x03C2), // ς
    (0x200C, 0x200D), // zero-width non-joiner, zero-width joiner
];

/// Whether the code point is an IDNA deviation character.
pub fn is_deviation(c: char) -> bool {
    in_table(c, DEVIATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_query_hits_bounds_and_misses_gaps() {
        assert!(is_deviation('\u{00DF}'));
        assert!(is_deviation('\u{200C}'));
        assert!(is_deviation('\u{200D}'));
        assert!(!is_deviation('\u{200B}'));
        assert!(!is_deviation('a'));
    }

    #[test]
    fn decimal_zero_resolves_per_numbering_system() {
        assert_eq!(decimal_zero('0'), Some('0'));
        assert_eq!(decimal_zero('7'), Some('0'));
        // Arabic-Indic digit four
        assert_eq!(decimal_zero('\u{0664}'), Some('\u{0660}'));
        // Devanagari digit nine
        assert_eq!(decimal_zero('\u{096F}'), Some('\u{0966}'));
        // Letters and non-decimal numbers are not digits
        assert_eq!(decimal_zero('a'), None);
        assert_eq!(decimal_zero('\u{2160}'), None); // Roman numeral one
    }

    #[test]
    fn ascii_allowed_set_is_the_label_repertoire() {
        for c in ['a', 'z', 'A', '0', '9', '-', '_'] {
            assert!(is_allowed(c), "{c:?} should be allowed");
        }
        for c in ['!', '$', ' ', '.', '/'] {
            assert!(!is_allowed(c), "{c:?} should not be allowed");
        }
    }

    #[test]
    fn recommended_script_letters_are_allowed() {
        assert!(is_allowed('д')); // Cyrillic
        assert!(is_allowed('漢')); // Han
        assert!(is_allowed('ひ')); // Hiragana
        assert!(is_allowed('ا')); // Arabic
    }

    #[test]
    fn excluded_script_letters_are_not_allowed() {
        // Ogham and Runic are not recommended identifier scripts
        assert!(!is_allowed('\u{1680}'));
        assert!(!is_allowed('\u{16A0}'));
    }

    #[test]
    fn removed_code_points_detected() {
        assert!(is_removed('\u{0340}'));
        assert!(is_removed('\u{206A}'));
        assert!(!is_removed('\u{0342}'));
    }

    #[test]
    fn cyrillic_look_alikes() {
        for c in ['а', 'е', 'о', 'р', 'с', 'у', 'х'] {
            assert!(is_cyrillic_latin_alike(c), "{c:?} should be a look-alike");
        }
        assert!(!is_cyrillic_latin_alike('д'));
        assert!(!is_cyrillic_latin_alike('ж'));
        // Latin letters are not members even when they look the same
        assert!(!is_cyrillic_latin_alike('a'));
    }

    #[test]
    fn emoji_blocks_detected() {
        assert!(is_emoji('\u{1F600}'));
        assert!(is_emoji('\u{2614}'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('漢'));
    }
}
