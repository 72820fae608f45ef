//! Stress annotation for whole lines of Na'vi text.
//!
//! `parse_line` splits text into word and non-word parts. `Line::run` looks
//! every word up in a `Dictionary`, aligns it against each entry with
//! `litxap_core::run_word` and keeps the matches with a known stress. Words
//! the dictionary does not know can still be annotated from a table of IPA
//! pronunciations, directly or through a `Deconjugator`.

mod deconjugate;
mod parse;
mod phrases;
mod run;


use serde::Serialize;

use litxap_core::{DictionaryEntry, LookupError, MorphError};

pub use deconjugate::{Analysis, Deconjugator};
pub use parse::parse_line;
pub use phrases::{parse_phrase_toml, PhraseTable, PhraseTableError, PronunciationSource};

/// A tokenized line, in text order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Line(pub Vec<LinePart>);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePart {
    /// The text as written.
    pub raw: String,
    /// Explicit lookup key from `lookup|raw` syntax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_word: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<LinePartMatch>,
}

/// One way to read a word: its syllables as written and the stressed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinePartMatch {
    pub syllables: Vec<String>,
    pub stress: usize,
    /// The dictionary entry used, `None` when the match came from a
    /// pronunciation table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<DictionaryEntry>,
}

#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("failed to look up {word:?}: {source}")]
    Lookup {
        word: String,
        #[source]
        source: LookupError,
    },

    #[error("cannot build {word:?}: {source}")]
    Morph {
        word: String,
        #[source]
        source: MorphError,
    },
}

impl Line {
    pub fn parts(&self) -> &[LinePart] {
        &self.0
    }

    /// Word parts only.
    pub fn words(&self) -> impl Iterator<Item = &LinePart> {
        self.0.iter().filter(|p| p.is_word)
    }
}

impl LinePart {
    pub fn word(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            is_word: true,
            ..Self::default()
        }
    }

    pub fn text(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            ..Self::default()
        }
    }

    /// The key to look this part up by.
    pub fn lookup_key(&self) -> String {
        self.lookup.as_deref().unwrap_or(&self.raw).to_lowercase()
    }
}

/// Parse and annotate `text` in one go.
pub fn run_line(
    text: &str,
    dictionary: &dyn litxap_core::Dictionary,
    deconjugator: Option<&dyn Deconjugator>,
    pronunciations: &dyn PronunciationSource,
) -> Result<Line, LineError> {
    parse_line(text).run(dictionary, deconjugator, pronunciations)
}
