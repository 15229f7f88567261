//! Positional mapping between two aligned `Writing`s.
//!
//! The source word is split into tokens (single chars, or multi-char source
//! entries taken as one unit), and each token is handed to a `MapRule`
//! together with the lookup table built from the two writings. The rule
//! decides what to emit and how many source tokens that output covers.


use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::writing::{Category, Writing};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapperError {
    #[error("{category} length mismatch: source has {from}, destination has {to}")]
    LengthMismatch {
        category: &'static str,
        from: usize,
        to: usize,
    },
}

/// Per-word context handed to every rule call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordProps {
    /// The word carries vowel marks.
    pub is_dotted: bool,
}

/// Result of looking up one source token.
///
/// `Empty` and `Unmapped` are kept apart: a mark mapped to `""` is dropped,
/// while a character missing from both writings passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Mapped(&'a str),
    Empty,
    Unmapped,
}

impl<'a> Lookup<'a> {
    /// Mapped text, `""` for an empty mapping, or `token` itself.
    pub fn or_source(self, token: &'a str) -> &'a str {
        match self {
            Lookup::Mapped(s) => s,
            Lookup::Empty => "",
            Lookup::Unmapped => token,
        }
    }
}

#[derive(Debug, Clone)]
struct TableEntry {
    to: String,
    category: Category,
}

/// Source token → destination text, built from two aligned writings.
#[derive(Debug, Clone)]
pub struct FromTo {
    entries: HashMap<String, TableEntry>,
}

impl FromTo {
    fn build(from: &Writing, to: &Writing) -> Self {
        let mut entries = HashMap::new();
        for cat in Category::ALL {
            for (src, dst) in from.category(cat).iter().zip(to.category(cat)) {
                if src.is_empty() {
                    continue;
                }
                // first occurrence wins
                entries.entry(src.clone()).or_insert_with(|| TableEntry {
                    to: dst.clone(),
                    category: cat,
                });
            }
        }
        Self { entries }
    }

    pub fn lookup(&self, token: &str) -> Lookup<'_> {
        match self.entries.get(token) {
            Some(e) if e.to.is_empty() => Lookup::Empty,
            Some(e) => Lookup::Mapped(&e.to),
            None => Lookup::Unmapped,
        }
    }

    /// Plain positional mapping of `token`.
    pub fn to<'a>(&'a self, token: &'a str) -> &'a str {
        self.lookup(token).or_source(token)
    }

    pub fn category(&self, token: &str) -> Option<Category> {
        self.entries.get(token).map(|e| e.category)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}

/// Output of one rule call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapped {
    pub text: String,
    /// Source tokens covered by `text`, at least 1.
    pub consumed: usize,
}

impl Mapped {
    pub fn one(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            consumed: 1,
        }
    }

    /// Output standing for `consumed` source tokens (a digraph that
    /// absorbs the following letter).
    pub fn spanning(text: impl Into<String>, consumed: usize) -> Self {
        Self {
            text: text.into(),
            consumed,
        }
    }
}

/// Maps the token at `index` of `word`.
///
/// Implementations must be total: every position yields some output.
pub trait MapRule {
    fn apply(&self, word: &[&str], index: usize, from_to: &FromTo, props: &WordProps) -> Mapped;
}

impl<F> MapRule for F
where
    F: Fn(&[&str], usize, &FromTo, &WordProps) -> Mapped,
{
    fn apply(&self, word: &[&str], index: usize, from_to: &FromTo, props: &WordProps) -> Mapped {
        self(word, index, from_to, props)
    }
}

/// One-to-one mapping with no context.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalRule;

impl MapRule for PositionalRule {
    fn apply(&self, word: &[&str], index: usize, from_to: &FromTo, _props: &WordProps) -> Mapped {
        Mapped::one(from_to.to(word[index]))
    }
}

/// One mapped position, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Token index in the source word.
    pub index: usize,
    /// Source text covered by this step.
    pub source: String,
    pub category: Option<Category>,
    /// What the plain positional mapping would emit for the first token.
    pub default: String,
    pub output: String,
}

pub struct Mapper<R = PositionalRule> {
    from: Writing,
    to: Writing,
    from_to: FromTo,
    rule: R,
    multiples: Vec<String>,
    /// Longest source entry, in chars.
    longest_source: usize,
}

impl<R: MapRule> Mapper<R> {
    /// Pair two writings. Every category must have the same length on both
    /// sides since position is the join key.
    pub fn new(from: Writing, to: Writing, rule: R) -> Result<Self, MapperError> {
        for cat in Category::ALL {
            let (f, t) = (from.len(cat), to.len(cat));
            if f != t {
                return Err(MapperError::LengthMismatch {
                    category: cat.name(),
                    from: f,
                    to: t,
                });
            }
        }
        let from_to = FromTo::build(&from, &to);
        let longest_source = from
            .entries()
            .map(|(_, e)| e.chars().count())
            .max()
            .unwrap_or(1);
        Ok(Self {
            from,
            to,
            from_to,
            rule,
            multiples: Vec::new(),
            longest_source,
        })
    }

    /// Destination tokens that must never be split when scanning output.
    ///
    /// Stored longest-first so the greedy scan in `split_output` does not
    /// depend on the order given here. Empty strings are ignored.
    pub fn with_multiples<S: Into<String>>(mut self, multiples: impl IntoIterator<Item = S>) -> Self {
        let mut list: Vec<String> = multiples
            .into_iter()
            .map(Into::into)
            .filter(|m| !m.is_empty())
            .collect();
        list.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        self.multiples = list;
        self
    }

    pub fn from_writing(&self) -> &Writing {
        &self.from
    }

    pub fn to_writing(&self) -> &Writing {
        &self.to
    }

    pub fn from_to(&self) -> &FromTo {
        &self.from_to
    }

    pub fn multiples(&self) -> &[String] {
        &self.multiples
    }

    /// Split a source word into tokens, taking the longest multi-char
    /// source entry at each position as one unit.
    pub fn tokenize<'w>(&self, word: &'w str) -> Vec<&'w str> {
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .collect();
        let n = bounds.len() - 1;
        let mut tokens = Vec::with_capacity(n);
        let mut i = 0;
        while i < n {
            let mut step = 1;
            for len in (2..=self.longest_source.min(n - i)).rev() {
                if self.from_to.contains(&word[bounds[i]..bounds[i + len]]) {
                    step = len;
                    break;
                }
            }
            tokens.push(&word[bounds[i]..bounds[i + step]]);
            i += step;
        }
        tokens
    }

    fn walk(&self, tokens: &[&str], props: &WordProps, mut f: impl FnMut(usize, usize, Mapped)) {
        let mut i = 0;
        while i < tokens.len() {
            let m = self.rule.apply(tokens, i, &self.from_to, props);
            let consumed = m.consumed.clamp(1, tokens.len() - i);
            f(i, consumed, m);
            i += consumed;
        }
    }

    /// Map `word` to the destination writing.
    pub fn map(&self, word: &str, props: &WordProps) -> String {
        let tokens = self.tokenize(word);
        let _span = debug_span!("map", tokens = tokens.len(), dotted = props.is_dotted).entered();
        let mut out = String::with_capacity(word.len());
        self.walk(&tokens, props, |i, consumed, m| {
            if consumed > 1 {
                debug!(index = i, consumed, output = %m.text, "absorbed");
            }
            out.push_str(&m.text);
        });
        out
    }

    /// Per-position trace of `map`.
    pub fn explain(&self, word: &str, props: &WordProps) -> Vec<Step> {
        let tokens = self.tokenize(word);
        let mut steps = Vec::with_capacity(tokens.len());
        self.walk(&tokens, props, |i, consumed, m| {
            let first = tokens[i];
            steps.push(Step {
                index: i,
                source: tokens[i..i + consumed].concat(),
                category: self.from_to.category(first),
                default: self.from_to.to(first).to_string(),
                output: m.text,
            });
        });
        steps
    }

    /// Split destination text into tokens, keeping multiples whole.
    pub fn split_output<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut out = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let len = self
                .multiples
                .iter()
                .find(|m| rest.starts_with(m.as_str()))
                .map_or(c.len_utf8(), |m| m.len());
            out.push(&rest[..len]);
            rest = &rest[len..];
        }
        out
    }

    /// Destination category of an output token, if it belongs to the
    /// destination writing.
    pub fn output_category(&self, token: &str) -> Option<Category> {
        self.to.position(token).map(|(cat, _)| cat)
    }
}
