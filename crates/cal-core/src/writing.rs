//! Writing system descriptors.

use serde::Serialize;

/// One of the four aligned tables of a `Writing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Consonant,
    Vowel,
    Diacritic,
    Punctuation,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Consonant,
        Category::Vowel,
        Category::Diacritic,
        Category::Punctuation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Consonant => "consonants",
            Category::Vowel => "vowels",
            Category::Diacritic => "diacritics",
            Category::Punctuation => "punctuation",
        }
    }
}

/// Consonants, vowels, diacritics and punctuation of one script.
///
/// Entries are usually single characters but may be short fixed strings
/// (`t,`, `)o`) that a `Mapper` treats as one unit. Index `i` of a table is
/// the join key with the same table of another `Writing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writing {
    consonants: Vec<String>,
    vowels: Vec<String>,
    diacritics: Vec<String>,
    punctuation: Vec<String>,
}

impl Writing {
    pub fn new<S: Into<String>>(
        consonants: impl IntoIterator<Item = S>,
        vowels: impl IntoIterator<Item = S>,
        diacritics: impl IntoIterator<Item = S>,
        punctuation: impl IntoIterator<Item = S>,
    ) -> Self {
        fn owned<S: Into<String>>(it: impl IntoIterator<Item = S>) -> Vec<String> {
            it.into_iter().map(Into::into).collect()
        }
        Self {
            consonants: owned(consonants),
            vowels: owned(vowels),
            diacritics: owned(diacritics),
            punctuation: owned(punctuation),
        }
    }

    pub fn consonants(&self) -> &[String] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[String] {
        &self.vowels
    }

    pub fn diacritics(&self) -> &[String] {
        &self.diacritics
    }

    pub fn punctuation(&self) -> &[String] {
        &self.punctuation
    }

    pub fn category(&self, category: Category) -> &[String] {
        match category {
            Category::Consonant => &self.consonants,
            Category::Vowel => &self.vowels,
            Category::Diacritic => &self.diacritics,
            Category::Punctuation => &self.punctuation,
        }
    }

    pub fn len(&self, category: Category) -> usize {
        self.category(category).len()
    }

    /// First category holding `entry`, with its index.
    pub fn position(&self, entry: &str) -> Option<(Category, usize)> {
        Category::ALL.into_iter().find_map(|cat| {
            self.category(cat)
                .iter()
                .position(|e| e == entry)
                .map(|i| (cat, i))
        })
    }

    /// All entries in category order.
    pub fn entries(&self) -> impl Iterator<Item = (Category, &str)> {
        Category::ALL
            .into_iter()
            .flat_map(move |cat| self.category(cat).iter().map(move |e| (cat, e.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Writing {
        Writing::new(["a", "b", "ch"], ["1"], ["", "~"], ["."])
    }

    #[test]
    fn test_preserves_order() {
        let w = sample();
        assert_eq!(w.consonants(), ["a", "b", "ch"]);
        assert_eq!(w.diacritics(), ["", "~"]);
        assert_eq!(w.len(Category::Consonant), 3);
        assert_eq!(w.len(Category::Punctuation), 1);
    }

    #[test]
    fn test_position() {
        let w = sample();
        assert_eq!(w.position("ch"), Some((Category::Consonant, 2)));
        assert_eq!(w.position("~"), Some((Category::Diacritic, 1)));
        assert_eq!(w.position("z"), None);
    }

    #[test]
    fn test_entries_in_category_order() {
        let w = sample();
        let cats: Vec<Category> = w.entries().map(|(c, _)| c).collect();
        assert_eq!(cats.first(), Some(&Category::Consonant));
        assert_eq!(cats.last(), Some(&Category::Punctuation));
        assert_eq!(cats.len(), 7);
    }
}
