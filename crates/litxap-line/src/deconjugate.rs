/// One reading of an inflected word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub root: String,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    /// Part of speech the root must have for this reading, `"any"` if
    /// unconstrained.
    pub insist_pos: String,
}

impl Analysis {
    /// Readings that may stand for a proper noun.
    pub(crate) fn allows_noun(&self) -> bool {
        matches!(self.insist_pos.as_str(), "any" | "n.")
    }
}

/// Strips affixes off words the dictionary does not know.
pub trait Deconjugator: Send + Sync {
    fn deconjugate(&self, word: &str) -> Vec<Analysis>;
}
