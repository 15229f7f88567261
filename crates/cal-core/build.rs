fn main() {
    // Validate the embedded destination table at compile time.
    validate_toml(
        "src/arabic_cal/default_cal.toml",
        include_str!("src/arabic_cal/default_cal.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
