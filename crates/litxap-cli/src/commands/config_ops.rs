use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn affixes_export() {
    print!("{}", litxap_core::affix::default_toml());
}

pub fn affixes_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(
        litxap_core::affix::parse_affix_toml(&content),
        "Error: {}"
    );
    let (prefixes, infixes, suffixes) = tables.counts();
    println!("OK: {prefixes} prefixes, {infixes} infixes, {suffixes} suffixes");
}

pub fn phrases_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(litxap_line::parse_phrase_toml(&content), "Error: {}");
    println!("OK: {} pronunciations", table.len());
}

/// Install a custom affix table before anything generates a word.
pub fn install_affixes(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        litxap_core::AffixTables::init_custom(content),
        "Error loading affixes from {file}: {}"
    );
}
