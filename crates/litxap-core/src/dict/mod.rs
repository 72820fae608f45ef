//! Dictionary lookup contract.
//!
//! The core never stores dictionaries itself. Callers provide one or more
//! `Dictionary` implementations (a web service, a local word list, a
//! fixture) and `CompositeDictionary` merges them.

mod composite;

use std::collections::HashMap;
use std::error::Error;

use crate::entry::DictionaryEntry;

pub use composite::CompositeDictionary;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The word is unknown. Callers may fall back to other sources.
    #[error("entry not found")]
    NotFound,

    /// The source itself failed.
    #[error("dictionary source failed: {0}")]
    Source(#[source] Box<dyn Error + Send + Sync>),
}

impl LookupError {
    pub fn source_error<E: Into<Box<dyn Error + Send + Sync>>>(err: E) -> Self {
        Self::Source(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub trait Dictionary: Send + Sync {
    /// All entries for `word`, which the caller passes in lowercase.
    fn lookup_entries(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;
}

/// Entries held in memory, keyed by lowercase word.
#[derive(Debug, Default, Clone)]
pub struct MemoryDictionary {
    entries: HashMap<String, Vec<DictionaryEntry>>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `entry` under `word`. A word may carry several entries.
    pub fn insert(&mut self, word: &str, entry: DictionaryEntry) {
        self.entries.entry(word.to_lowercase()).or_default().push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, DictionaryEntry)> for MemoryDictionary {
    fn from_iter<I: IntoIterator<Item = (String, DictionaryEntry)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (word, entry) in iter {
            dict.insert(&word, entry);
        }
        dict
    }
}

impl Dictionary for MemoryDictionary {
    fn lookup_entries(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        match self.entries.get(&word.to_lowercase()) {
            Some(entries) if !entries.is_empty() => Ok(entries.clone()),
            _ => Err(LookupError::NotFound),
        }
    }
}
