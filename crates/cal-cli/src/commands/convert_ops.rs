use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use cal_core::arabic_cal::{explain, to_cal, to_cal_value};
use cal_core::mapper::Step;
use unicode_width::UnicodeWidthStr;

use crate::CliError;

fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>, CliError> {
    Ok(match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    })
}

/// Convert every whitespace-separated word of `line`, keeping the spacing.
pub fn convert_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut word_start = None;
    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                out.push_str(&to_cal(&line[start..i]));
            }
            out.push(c);
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        out.push_str(&to_cal(&line[start..]));
    }
    out
}

/// Convert one JSON value per line; blank lines are skipped.
pub fn convert_jsonl(reader: impl BufRead, mut writer: impl Write) -> Result<usize, CliError> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(&line)?;
        serde_json::to_writer(&mut writer, &to_cal_value(&value))?;
        writeln!(writer)?;
        count += 1;
    }
    Ok(count)
}

pub fn convert_cmd(words: &[String]) {
    for word in words {
        println!("{}", to_cal(word));
    }
}

pub fn convert_file_cmd(input: Option<&str>) {
    let reader = die!(open_input(input), "Error opening input: {}");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in reader.lines() {
        let line = die!(line, "Error reading input: {}");
        die!(writeln!(out, "{}", convert_line(&line)), "Error writing output: {}");
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn convert_jsonl_cmd(input: Option<&str>) {
    let reader = die!(open_input(input), "Error opening input: {}");
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    die!(convert_jsonl(reader, &mut out), "Error: {}");
    die!(out.flush(), "Error writing output: {}");
}

pub fn explain_cmd(word: &str, json: bool) {
    let steps = explain(word);
    if json {
        let text = die!(serde_json::to_string_pretty(&steps), "Error: {}");
        println!("{text}");
    } else {
        print!("{}", format_steps(word, &steps));
    }
}

fn code_points(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format explain steps as a table.
///
/// Arabic marks have zero display width, so each source column also lists
/// its code points.
pub fn format_steps(word: &str, steps: &[Step]) -> String {
    let mut out = format!("=== {} -> {} ===\n", word, concat_output(steps));
    let pad_width: usize = 4;
    for step in steps {
        let width = UnicodeWidthStr::width(step.source.as_str());
        let padding = " ".repeat(pad_width.saturating_sub(width));
        let category = step.category.map_or("-", |c| c.name());
        let overridden = if step.output != step.default {
            format!("  (default {:?})", step.default)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  [{:>2}] {}{}{:<16} {:<12} {:?}{}\n",
            step.index,
            step.source,
            padding,
            code_points(&step.source),
            category,
            step.output,
            overridden,
        ));
    }
    out
}

fn concat_output(steps: &[Step]) -> String {
    steps.iter().map(|s| s.output.as_str()).collect()
}
