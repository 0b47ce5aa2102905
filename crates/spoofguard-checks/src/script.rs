//! Single-script resolution
//!
//! Decides whether a label's code points are compatible with one script.
//! Common and Inherited code points are compatible with anything and never
//! narrow the candidate set.

use unicode_script::{Script, UnicodeScript};

/// Resolves the candidate script set of a label.
pub struct ScriptResolver;

impl ScriptResolver {
    /// Whether every explicit-script code point of the label resolves to a
    /// single script.
    ///
    /// The candidate set is seeded from the first code point carrying an
    /// explicit script and intersected with each subsequent one; the scan
    /// stops the moment the intersection empties. A label with no explicit
    /// script at all resolves as single-script.
    pub fn single_script(label: &str) -> bool {
        let mut candidates: Option<Vec<Script>> = None;
        for c in label.chars() {
            let script = c.script();
            if script == Script::Common || script == Script::Inherited {
                continue;
            }
            let compatible = Self::compatible_scripts(script);
            match candidates.as_mut() {
                None => candidates = Some(compatible),
                Some(set) => {
                    set.retain(|s| compatible.contains(s));
                    if set.is_empty() {
                        return false;
                    }
                }
            }
        }
        true
    }

    // Candidate scripts a code point is compatible with. A singleton today;
    // the seam where script-extension data would widen the set.
    fn compatible_scripts(script: Script) -> Vec<Script> {
        vec![script]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_latin_is_single_script() {
        assert!(ScriptResolver::single_script("example"));
        assert!(ScriptResolver::single_script("exämple"));
    }

    #[test]
    fn pure_cyrillic_is_single_script() {
        assert!(ScriptResolver::single_script("пример"));
    }

    #[test]
    fn latin_cyrillic_mix_is_not() {
        // Latin "pa" followed by Cyrillic у
        assert!(!ScriptResolver::single_script("pa\u{0443}"));
    }

    #[test]
    fn common_code_points_never_narrow() {
        // digits and hyphen are Common
        assert!(ScriptResolver::single_script("абв-123"));
        assert!(ScriptResolver::single_script("123"));
        assert!(ScriptResolver::single_script(""));
    }

    #[test]
    fn inherited_marks_never_narrow() {
        // combining acute accent is Inherited
        assert!(ScriptResolver::single_script("a\u{0301}bc"));
    }

    #[test]
    fn han_kana_mix_is_not_single_script() {
        assert!(!ScriptResolver::single_script("漢ひら"));
    }
}
