fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/affix/default_affixes.toml",
        include_str!("src/affix/default_affixes.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
