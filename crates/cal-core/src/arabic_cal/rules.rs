use tracing::debug;

use crate::arabic::{ALEF, DAMMA, FATHA, KASRA, WAW, YEH};
use crate::mapper::{FromTo, MapRule, Mapped, WordProps};

/// Fatha + alef.
const LONG_A: &str = "(o";
/// Kasra + yeh. Arabic writes the vowel first, CAL the glide.
const LONG_I: &str = "yi";
/// Damma + waw, inverted like `LONG_I`.
const LONG_U: &str = "wu";

const HYPHEN: char = '-';

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Arabic→CAL override rules.
///
/// In dotted words a short vowel followed by its carrier letter becomes a
/// CAL digraph and the carrier is absorbed. Fatha + alef only counts when
/// the alef is neither word-final nor followed by a hyphen. Everything else
/// gets the positional mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArabicCalRule;

impl ArabicCalRule {
    fn long_vowel(word: &[&str], index: usize) -> Option<&'static str> {
        let next = word.get(index + 1).and_then(|t| single_char(t));
        match single_char(word[index])? {
            FATHA if next == Some(ALEF) => {
                let after = word.get(index + 2).and_then(|t| single_char(t));
                // `after` must exist: a word-final alef stays plain
                (index + 2 < word.len() && after != Some(HYPHEN)).then_some(LONG_A)
            }
            KASRA if next == Some(YEH) => Some(LONG_I),
            DAMMA if next == Some(WAW) => Some(LONG_U),
            _ => None,
        }
    }
}

impl MapRule for ArabicCalRule {
    fn apply(&self, word: &[&str], index: usize, from_to: &FromTo, props: &WordProps) -> Mapped {
        if props.is_dotted {
            if let Some(digraph) = Self::long_vowel(word, index) {
                debug!(index, digraph, "long vowel");
                return Mapped::spanning(digraph, 2);
            }
        }
        Mapped::one(from_to.to(word[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(word: &str) -> Vec<String> {
        word.chars().map(String::from).collect()
    }

    fn long_vowel(word: &str, index: usize) -> Option<&'static str> {
        let owned = tokens(word);
        let refs: Vec<&str> = owned.iter().map(String::as_str).collect();
        ArabicCalRule::long_vowel(&refs, index)
    }

    #[test]
    fn test_fatha_alef_mid_word() {
        assert_eq!(long_vowel("دَاق", 1), Some(LONG_A));
    }

    #[test]
    fn test_fatha_alef_word_final() {
        assert_eq!(long_vowel("شَا", 1), None);
    }

    #[test]
    fn test_fatha_alef_before_hyphen() {
        assert_eq!(long_vowel("يَا-د", 1), None);
    }

    #[test]
    fn test_kasra_yeh() {
        assert_eq!(long_vowel("دِي", 1), Some(LONG_I));
        // word-final yeh is still absorbed
        assert_eq!(long_vowel("رِي-", 1), Some(LONG_I));
    }

    #[test]
    fn test_damma_waw() {
        assert_eq!(long_vowel("فُوس", 1), Some(LONG_U));
    }

    #[test]
    fn test_bare_vowels() {
        assert_eq!(long_vowel("بُه", 1), None);
        assert_eq!(long_vowel("بِج", 1), None);
        assert_eq!(long_vowel("بَي", 1), None);
        // lookahead past the end
        assert_eq!(long_vowel("بِ", 1), None);
    }

    #[test]
    fn test_consonant_never_overrides() {
        assert_eq!(long_vowel("وا", 0), None);
    }
}
