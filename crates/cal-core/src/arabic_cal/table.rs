//! CAL destination table, loaded from TOML.
//!
//! - `init_custom(toml_content)` installs a custom table before first `mapper()` call
//! - `mapper()` returns the shared `&'static Mapper` (lazy-init singleton)
//! - The default table is embedded via `include_str!("default_cal.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use super::rules::ArabicCalRule;
use crate::arabic;
use crate::cal;
use crate::mapper::{Mapper, MapperError};
use crate::writing::Writing;

pub const DEFAULT_TOML: &str = include_str!("default_cal.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Mapper<ArabicCalRule>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{category}: expected {expected} entries, found {found}")]
    LengthMismatch {
        category: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("empty entry in multiples")]
    EmptyMultiple,
    #[error("multiple must be one or two characters: {0:?}")]
    MultipleTooLong(String),
    #[error(transparent)]
    Mapper(#[from] MapperError),
    #[error("CAL table already initialized")]
    AlreadyInitialized,
}

/// Destination entries layered on top of `cal::CONSONANTS`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalTable {
    pub multiples: Vec<String>,
    /// Aligned with `arabic::ARABIC_ONLY`.
    pub extra_consonants: Vec<String>,
    pub vowels: Vec<String>,
    pub diacritics: Vec<String>,
    pub punctuation: Vec<String>,
}

impl CalTable {
    /// Full CAL writing: base consonants followed by the extra ones.
    pub fn writing(&self) -> Writing {
        let consonants: Vec<String> = cal::CONSONANTS
            .iter()
            .map(|c| c.to_string())
            .chain(self.extra_consonants.iter().cloned())
            .collect();
        Writing::new(
            consonants,
            self.vowels.clone(),
            self.diacritics.clone(),
            self.punctuation.clone(),
        )
    }

    pub fn build_mapper(&self) -> Result<Mapper<ArabicCalRule>, TableError> {
        let mapper = Mapper::new(arabic_writing(), self.writing(), ArabicCalRule)?;
        Ok(mapper.with_multiples(self.multiples.iter().cloned()))
    }
}

/// Arabic source writing.
pub fn arabic_writing() -> Writing {
    Writing::new(
        arabic::all_consonants(),
        arabic::VOWELS.to_vec(),
        arabic::DIACRITICS.to_vec(),
        arabic::PUNCTUATION.to_vec(),
    )
}

/// Parse and validate a CAL table.
pub fn parse_cal_toml(toml_str: &str) -> Result<CalTable, TableError> {
    let table: CalTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    let expect = |category: &'static str, expected: usize, found: usize| {
        if expected == found {
            Ok(())
        } else {
            Err(TableError::LengthMismatch {
                category,
                expected,
                found,
            })
        }
    };
    expect(
        "extra_consonants",
        arabic::ARABIC_ONLY.len(),
        table.extra_consonants.len(),
    )?;
    expect("vowels", arabic::VOWELS.len(), table.vowels.len())?;
    expect("diacritics", arabic::DIACRITICS.len(), table.diacritics.len())?;
    expect("punctuation", arabic::PUNCTUATION.len(), table.punctuation.len())?;

    for m in &table.multiples {
        match m.chars().count() {
            0 => return Err(TableError::EmptyMultiple),
            1 | 2 => {}
            _ => return Err(TableError::MultipleTooLong(m.clone())),
        }
    }

    Ok(table)
}

/// Set a custom table before first `mapper()` call.
///
/// Fails with `AlreadyInitialized` once the shared mapper has been built
/// or another custom table was installed.
pub fn init_custom(toml_content: String) -> Result<(), TableError> {
    // Validate eagerly
    parse_cal_toml(&toml_content)?.build_mapper()?;
    if INSTANCE.get().is_some() {
        return Err(TableError::AlreadyInitialized);
    }
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| TableError::AlreadyInitialized)
}

/// Get or initialize the shared Arabic→CAL mapper.
pub fn mapper() -> &'static Mapper<ArabicCalRule> {
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_TOML);
        parse_cal_toml(toml_str)
            .and_then(|t| t.build_mapper())
            .expect("CAL table must be valid")
    })
}

/// Returns the embedded default table.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
