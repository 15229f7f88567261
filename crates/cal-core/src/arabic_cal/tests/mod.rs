
use serde_json::{json, Value};

use super::*;
use crate::mapper::WordProps;
use crate::writing::Category;

#[test]
fn blank_word_returns_blank() {
    assert_eq!(to_cal(""), "");
}

#[test]
fn none_returns_none() {
    assert_eq!(to_cal_opt(None), None);
    assert_eq!(to_cal_opt(Some("")), Some(String::new()));
    assert_eq!(to_cal_opt(Some("شمك")), Some("$mk".to_string()));
}

#[test]
fn falsy_values_pass_through() {
    for v in [Value::Null, json!(""), json!(0), json!(false)] {
        assert_eq!(to_cal_value(&v), v);
    }
}

#[test]
fn other_values_pass_through() {
    for v in [json!(7), json!(true), json!(["شمك"]), json!({"w": "شمك"})] {
        assert_eq!(to_cal_value(&v), v);
    }
}

#[test]
fn string_value_is_converted() {
    assert_eq!(to_cal_value(&json!("شمٰخ")), json!("$mok,"));
}

#[test]
fn writings_are_aligned() {
    let m = mapper();
    for cat in Category::ALL {
        assert_eq!(
            m.from_writing().len(cat),
            m.to_writing().len(cat),
            "{} length differs",
            cat.name()
        );
    }
    assert!(m.from_writing().consonants().len() > 22);
    assert!(m.from_writing().vowels().len() > 5);
}

#[test]
fn diacritics_map_to_empty() {
    let m = mapper();
    assert!(m.to_writing().diacritics().iter().all(String::is_empty));
}

#[test]
fn deterministic() {
    let word = "دقِسَرِيَا-ذفِيلِيفُوس";
    assert_eq!(to_cal(word), to_cal(word));
}

#[test]
fn undotted_mode_bypasses_overrides() {
    // fatha + alef mid-word, mapped with the flag forced off
    let word = "دَاق";
    let plain = mapper().map(word, &WordProps { is_dotted: false });
    assert_eq!(plain, "da)q");
    assert_eq!(to_cal(word), "d(oq");
}

#[test]
fn hyphen_blocks_long_a() {
    assert_eq!(to_cal("يَا-د"), "ya)-d");
    assert_eq!(to_cal("يَاد"), "y(od");
}

#[test]
fn multiples_stay_whole_in_output() {
    let m = mapper();
    let cal = to_cal("آغشَا");
    assert_eq!(m.split_output(&cal), vec![")o", "g,", "$", "a", ")"]);
    assert_eq!(m.output_category("g,"), Some(Category::Consonant));
}

#[test]
fn explain_reports_absorbed_carrier() {
    let steps = explain("دِي");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].source, "\u{0650}\u{064A}");
    assert_eq!(steps[1].default, "i");
    assert_eq!(steps[1].output, "yi");
    assert_eq!(steps[1].category, Some(Category::Vowel));
}
