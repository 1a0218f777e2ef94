// file: src/grouping/collation.rs
// description: Romanian-aware string collation for group labels
// reference: https://docs.rs/unicode-normalization

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const COMBINING_GRAVE: char = '\u{0300}';
const COMBINING_CIRCUMFLEX: char = '\u{0302}';
const COMBINING_BREVE: char = '\u{0306}';
const COMBINING_COMMA_BELOW: char = '\u{0326}';
const COMBINING_CEDILLA: char = '\u{0327}';

// primary weight classes: separators and punctuation, then digits, then letters
const CLASS_OTHER: u32 = 0;
const CLASS_DIGIT: u32 = 1 << 24;
const CLASS_LETTER: u32 = 2 << 24;

/// Multi-level sort key.
///
/// Primary compares base letters case-insensitively with the Romanian
/// alphabet order (`a < ă < â`, `i < î`, `s < ș`, `t < ț`), secondary
/// compares any remaining accents and tertiary puts lowercase before
/// uppercase. The source string breaks any remaining tie.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<u32>,
    secondary: Vec<u32>,
    tertiary: Vec<u8>,
    source: String,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let mut primary: Vec<u32> = Vec::with_capacity(text.len());
        let mut secondary: Vec<u32> = Vec::with_capacity(text.len());
        let mut tertiary: Vec<u8> = Vec::with_capacity(text.len());
        let mut last_base: Option<char> = None;

        for c in text.nfd() {
            if is_combining_mark(c) {
                if let Some(rank) = romanian_rank(last_base, c) {
                    if let Some(weight) = primary.last_mut() {
                        *weight += rank;
                    }
                } else if let Some(weight) = secondary.last_mut() {
                    let accent = (c as u32).saturating_sub(COMBINING_GRAVE as u32) + 1;
                    *weight = weight.saturating_add(accent);
                }
                // a second mark on the same letter never re-ranks it
                last_base = None;
                continue;
            }

            for lower in c.to_lowercase() {
                primary.push(primary_weight(lower));
                secondary.push(0);
                tertiary.push(u8::from(c.is_uppercase()));
                last_base = Some(lower);
            }
        }

        Self {
            primary,
            secondary,
            tertiary,
            source: text.to_string(),
        }
    }
}

fn primary_weight(c: char) -> u32 {
    if let Some(digit) = c.to_digit(10) {
        CLASS_DIGIT | digit
    } else if c.is_alphabetic() {
        CLASS_LETTER | ((c as u32) << 2)
    } else {
        CLASS_OTHER | c as u32
    }
}

/// Offset of a Romanian letter from its base, e.g. `ă` sits one step after `a`.
fn romanian_rank(base: Option<char>, mark: char) -> Option<u32> {
    match (base?, mark) {
        ('a', COMBINING_BREVE) => Some(1),
        ('a', COMBINING_CIRCUMFLEX) => Some(2),
        ('i', COMBINING_CIRCUMFLEX) => Some(1),
        ('s' | 't', COMBINING_COMMA_BELOW | COMBINING_CEDILLA) => Some(1),
        _ => None,
    }
}

pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(labels: &[&str]) -> Vec<String> {
        let mut out: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        out.sort_by(|a, b| compare(a, b));
        out
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(&["formulare", "Altele", "buget"]),
            vec!["Altele", "buget", "formulare"]
        );
    }

    #[test]
    fn test_lowercase_first_on_tie() {
        assert_eq!(sorted(&["Anexe", "anexe"]), vec!["anexe", "Anexe"]);
    }

    #[test]
    fn test_romanian_letters_follow_base() {
        assert_eq!(
            sorted(&["bani", "ăla", "âna", "az"]),
            vec!["az", "ăla", "âna", "bani"]
        );
        assert_eq!(sorted(&["știri", "sz", "ta"]), vec!["sz", "știri", "ta"]);
        assert_eq!(sorted(&["ține", "tz", "u"]), vec!["tz", "ține", "u"]);
        assert_eq!(sorted(&["încheiere", "iz", "j"]), vec!["iz", "încheiere", "j"]);
    }

    #[test]
    fn test_cedilla_and_comma_forms_share_primary() {
        let comma = CollationKey::new("așezare");
        let cedilla = CollationKey::new("aşezare");
        assert_eq!(comma.primary, cedilla.primary);
    }

    #[test]
    fn test_other_accents_are_secondary() {
        assert_eq!(sorted(&["cafè", "cafe", "cafz"]), vec!["cafe", "cafè", "cafz"]);
    }

    #[test]
    fn test_spaces_and_digits_before_letters() {
        assert_eq!(
            sorted(&["Alte categorii", "altele", "2024", "Alte ani"]),
            vec!["2024", "Alte ani", "Alte categorii", "altele"]
        );
    }

    #[test]
    fn test_identical_strings_are_equal() {
        assert_eq!(compare("rezultate", "rezultate"), Ordering::Equal);
    }
}
