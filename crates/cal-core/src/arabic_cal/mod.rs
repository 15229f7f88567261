//! Arabic to CAL conversion.
//!
//! `to_cal` computes whether the word is dotted (vocalised), then runs the
//! shared `Mapper` with `ArabicCalRule`. Undotted words get a plain
//! letter-for-letter mapping.

mod rules;
mod table;
#[cfg(test)]
mod tests;

use serde_json::Value;

use crate::arabic;
use crate::mapper::{Step, WordProps};

pub use rules::ArabicCalRule;
pub use table::{
    arabic_writing, default_toml, init_custom, mapper, parse_cal_toml, CalTable, TableError,
    DEFAULT_TOML,
};

pub fn word_props(word: &str) -> WordProps {
    WordProps {
        is_dotted: arabic::is_dotted(word),
    }
}

/// Convert an Arabic word to CAL code. An empty word returns empty.
pub fn to_cal(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }
    mapper().map(word, &word_props(word))
}

/// `None` passes through.
pub fn to_cal_opt(word: Option<&str>) -> Option<String> {
    word.map(to_cal)
}

/// Convert a dynamically typed value.
///
/// Non-empty strings are converted. Everything else, including `null`,
/// `""`, `0` and `false`, is returned as is.
pub fn to_cal_value(value: &Value) -> Value {
    match value {
        Value::String(s) if !s.is_empty() => Value::String(to_cal(s)),
        other => other.clone(),
    }
}

/// Per-position trace of `to_cal`.
pub fn explain(word: &str) -> Vec<Step> {
    mapper().explain(word, &word_props(word))
}
