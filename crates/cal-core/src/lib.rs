//! Arabic to CAL transliteration.
//!
//! Two `Writing` descriptors (Arabic and CAL) are aligned position by
//! position and walked by a `Mapper`. The Arabic→CAL rule set overrides the
//! positional mapping for long vowels written in vocalised (dotted) words.

pub mod arabic;
pub mod arabic_cal;
pub mod cal;
pub mod mapper;
pub mod writing;

pub use arabic_cal::{to_cal, to_cal_opt, to_cal_value};
