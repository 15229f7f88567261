//! Character tables for Arabic script.
//!
//! `CONSONANTS` follows the Aramaic alphabet order so that it lines up with
//! `cal::CONSONANTS`. Letters with no Aramaic counterpart live at the tail of
//! `ALL_CONSONANTS`.

/// Arabic letters with an Aramaic counterpart, in alphabet order.
pub const CONSONANTS: [&str; 22] = [
    "\u{0627}", // ا ALEF
    "\u{0628}", // ب BEH
    "\u{062C}", // ج JEEM
    "\u{062F}", // د DAL
    "\u{0647}", // ه HEH
    "\u{0648}", // و WAW
    "\u{0632}", // ز ZAIN
    "\u{062D}", // ح HAH
    "\u{0637}", // ط TAH
    "\u{064A}", // ي YEH
    "\u{0643}", // ك KAF
    "\u{0644}", // ل LAM
    "\u{0645}", // م MEEM
    "\u{0646}", // ن NOON
    "\u{0633}", // س SEEN
    "\u{0639}", // ع AIN
    "\u{0641}", // ف FEH
    "\u{0635}", // ص SAD
    "\u{0642}", // ق QAF
    "\u{0631}", // ر REH
    "\u{0634}", // ش SHEEN
    "\u{062A}", // ت TEH
];

/// Letters used only in Arabic.
pub const ARABIC_ONLY: [&str; 13] = [
    "\u{062B}", // ث THEH
    "\u{062E}", // خ KHAH
    "\u{0630}", // ذ THAL
    "\u{0636}", // ض DAD
    "\u{0638}", // ظ ZAH
    "\u{063A}", // غ GHAIN
    "\u{0629}", // ة TEH MARBUTA
    "\u{0621}", // ء HAMZA
    "\u{0622}", // آ ALEF WITH MADDA ABOVE
    "\u{0623}", // أ ALEF WITH HAMZA ABOVE
    "\u{0624}", // ؤ WAW WITH HAMZA ABOVE
    "\u{0625}", // إ ALEF WITH HAMZA BELOW
    "\u{0626}", // ئ YEH WITH HAMZA ABOVE
];

/// Short vowel marks.
pub const VOWELS: [&str; 7] = [
    "\u{064E}", // FATHA
    "\u{0670}", // SUPERSCRIPT ALEF
    "\u{0650}", // KASRA
    "\u{064F}", // DAMMA
    "\u{064B}", // FATHATAN
    "\u{064D}", // KASRATAN
    "\u{064C}", // DAMMATAN
];

/// Non-vowel marks.
pub const DIACRITICS: [&str; 5] = [
    "\u{0651}", // SHADDA
    "\u{0652}", // SUKUN
    "\u{0653}", // MADDAH ABOVE
    "\u{0654}", // HAMZA ABOVE
    "\u{0655}", // HAMZA BELOW
];

pub const PUNCTUATION: [&str; 4] = [
    "\u{060C}", // ، ARABIC COMMA
    "\u{061B}", // ؛ ARABIC SEMICOLON
    "\u{061F}", // ؟ ARABIC QUESTION MARK
    "!",
];

pub const ALEF: char = '\u{0627}';
pub const WAW: char = '\u{0648}';
pub const YEH: char = '\u{064A}';
pub const FATHA: char = '\u{064E}';
pub const KASRA: char = '\u{0650}';
pub const DAMMA: char = '\u{064F}';

/// `CONSONANTS` followed by `ARABIC_ONLY`.
pub fn all_consonants() -> Vec<&'static str> {
    CONSONANTS.iter().chain(ARABIC_ONLY.iter()).copied().collect()
}

fn contains(table: &[&str], c: char) -> bool {
    let mut buf = [0u8; 4];
    let s: &str = c.encode_utf8(&mut buf);
    table.contains(&s)
}

pub fn is_consonant(c: char) -> bool {
    contains(&CONSONANTS, c) || contains(&ARABIC_ONLY, c)
}

pub fn is_vowel(c: char) -> bool {
    contains(&VOWELS, c)
}

pub fn is_diacritic(c: char) -> bool {
    contains(&DIACRITICS, c)
}

pub fn is_punctuation(c: char) -> bool {
    contains(&PUNCTUATION, c)
}

/// A word is dotted (vocalised) when it carries at least one vowel mark.
pub fn is_dotted(word: &str) -> bool {
    word.chars().any(is_vowel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_consonants_order() {
        let all = all_consonants();
        assert_eq!(all.len(), 35);
        assert_eq!(all[0], "\u{0627}");
        assert_eq!(all[21], "\u{062A}");
        assert_eq!(all[22], "\u{062B}");
        assert_eq!(all[34], "\u{0626}");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_consonant('ب'));
        assert!(is_consonant('غ'));
        assert!(!is_consonant(FATHA));
        assert!(is_vowel(FATHA));
        assert!(is_vowel('\u{0670}'));
        assert!(!is_vowel('\u{0651}'));
        assert!(is_diacritic('\u{0651}'));
        assert!(is_punctuation('؟'));
        assert!(!is_punctuation('-'));
        assert!(!is_consonant('A'));
    }

    #[test]
    fn test_is_dotted() {
        assert!(is_dotted("بِجَدكِفَت"));
        assert!(is_dotted("AZA\u{0650}D"));
        assert!(!is_dotted("دقسريا"));
        assert!(!is_dotted(""));
        // shadda and sukun alone do not vocalise a word
        assert!(!is_dotted("\u{0651}ساثب\u{0652}"));
    }
}
