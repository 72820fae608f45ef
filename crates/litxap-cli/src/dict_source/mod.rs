//! Fixture dictionaries for the CLI.
//!
//! Two formats are read, picked by file extension:
//!
//! - `.json`: an array of serialized `DictionaryEntry` values, keyed by `word`
//! - anything else: TOML with an `[entries]` table mapping each written word
//!   to one or more entries in compact notation
//!
//! Bare TOML keys are ASCII only, so words with `ì`, `ä` or `'` must be
//! quoted.
//!
//! ```toml
//! [entries]
//! kameie = ["k·a.m·e: <ei>: see", "k··ä: <am,ei>: go"]
//! "kaltxì" = ["kal.*txì"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use litxap_core::{DictionaryEntry, MemoryDictionary, MorphError, NotationError};

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("bad notation for '{word}': {source}")]
    Notation {
        word: String,
        #[source]
        source: NotationError,
    },

    #[error("invalid entry for '{word}': {source}")]
    Invalid {
        word: String,
        #[source]
        source: MorphError,
    },
}

#[derive(Deserialize)]
struct TomlFixture {
    #[serde(default)]
    entries: BTreeMap<String, Vec<String>>,
}

/// Load a fixture file into memory.
pub fn load_dictionary(path: &Path) -> Result<MemoryDictionary, DictSourceError> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let entries = if is_json {
        parse_json(&content)?
    } else {
        parse_toml(&content)?
    };

    for (word, entry) in &entries {
        entry.validate().map_err(|source| DictSourceError::Invalid {
            word: word.clone(),
            source,
        })?;
    }
    Ok(entries.into_iter().collect())
}

/// `(lookup word, entry)` pairs from an `[entries]` TOML table.
pub fn parse_toml(content: &str) -> Result<Vec<(String, DictionaryEntry)>, DictSourceError> {
    let fixture: TomlFixture =
        toml::from_str(content).map_err(|e| DictSourceError::Parse(e.to_string()))?;

    let mut entries = Vec::new();
    for (word, notations) in fixture.entries {
        for notation in notations {
            let entry = notation
                .parse::<DictionaryEntry>()
                .map_err(|source| DictSourceError::Notation {
                    word: word.clone(),
                    source,
                })?;
            entries.push((word.clone(), entry));
        }
    }
    Ok(entries)
}

/// `(lookup word, entry)` pairs from a JSON array of entries.
pub fn parse_json(content: &str) -> Result<Vec<(String, DictionaryEntry)>, DictSourceError> {
    let entries: Vec<DictionaryEntry> =
        serde_json::from_str(content).map_err(|e| DictSourceError::Parse(e.to_string()))?;
    Ok(entries.into_iter().map(|e| (e.word.clone(), e)).collect())
}
