use std::fs;
use std::path::Path;

use cal_core::arabic_cal::{default_toml, init_custom, parse_cal_toml, CalTable};
use cal_core::writing::Category;

use crate::CliError;

/// Read and validate a CAL table file.
pub fn load_table(path: &Path) -> Result<CalTable, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_cal_toml(&content)?)
}

/// Install a custom table for the rest of the process, if one is given.
pub fn use_table(path: Option<&str>) {
    let Some(path) = path else {
        return;
    };
    let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
    die!(init_custom(content), "Error in table {path}: {}");
}

pub fn table_export() {
    print!("{}", default_toml());
}

pub fn table_validate(file: &str) {
    let table = die!(load_table(Path::new(file)), "Error: {}");
    println!("{}", summary(&table));
}

fn summary(table: &CalTable) -> String {
    let writing = table.writing();
    let sizes: Vec<String> = Category::ALL
        .into_iter()
        .map(|cat| format!("{} {}", writing.len(cat), cat.name()))
        .collect();
    format!(
        "OK: {}, {} multiples",
        sizes.join(", "),
        table.multiples.len()
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cal_core::arabic_cal::{TableError, DEFAULT_TOML};

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_default_table() {
        let file = write_temp(DEFAULT_TOML);
        let table = load_table(file.path()).unwrap();
        assert_eq!(
            summary(&table),
            "OK: 35 consonants, 7 vowels, 5 diacritics, 4 punctuation, 5 multiples"
        );
    }

    #[test]
    fn load_invalid_table() {
        let file = write_temp("multiples = [\"t,\"]\n");
        let err = load_table(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Table(TableError::Parse(_))));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
