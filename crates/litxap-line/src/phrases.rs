use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum PhraseTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("empty pronunciation for '{0}'")]
    EmptyPronunciation(String),
}

/// IPA pronunciations for words missing from the dictionary.
pub trait PronunciationSource {
    /// The transcription of `word`, which the caller passes in lowercase.
    fn pronunciation(&self, word: &str) -> Option<String>;
}

/// Pronunciations held in memory, keyed by lowercase word.
#[derive(Debug, Default, Clone)]
pub struct PhraseTable {
    entries: HashMap<String, String>,
}

impl PhraseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, ipa: &str) {
        self.entries.insert(word.to_lowercase(), ipa.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for PhraseTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, ipa) in iter {
            table.insert(word.as_ref(), ipa.as_ref());
        }
        table
    }
}

impl PronunciationSource for PhraseTable {
    fn pronunciation(&self, word: &str) -> Option<String> {
        self.entries.get(&word.to_lowercase()).cloned()
    }
}

#[derive(Deserialize)]
struct PhraseFile {
    #[serde(default)]
    pronunciations: HashMap<String, String>,
}

/// Parse a pronunciation table (`[pronunciations]` with `word = "ipa"`).
///
/// Words with `ì`, `ä` or `'` must be quoted keys (`"nìyu" = "..."`).
pub fn parse_phrase_toml(toml_str: &str) -> Result<PhraseTable, PhraseTableError> {
    let file: PhraseFile =
        toml::from_str(toml_str).map_err(|e| PhraseTableError::Parse(e.to_string()))?;

    if let Some((word, _)) = file.pronunciations.iter().find(|(_, ipa)| ipa.trim().is_empty()) {
        return Err(PhraseTableError::EmptyPronunciation(word.clone()));
    }

    Ok(file.pronunciations.into_iter().collect())
}
