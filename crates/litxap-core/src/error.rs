use crate::affix::Reanalysis;

/// Contract violations raised while building a canonical form.
///
/// These never describe a word that simply fails to match; that outcome is
/// a `None` from the matcher. An error here means the input entry or the
/// affix tables are inconsistent and the result would be wrong.
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    #[error("suffix -{suffix} applied to an empty word")]
    EmptyWord { suffix: String },

    #[error("{kind} {name:?} cannot use {} reanalysis", .reanalysis.label())]
    UnsupportedReanalysis {
        kind: &'static str,
        name: String,
        reanalysis: Reanalysis,
    },

    #[error("infix <{name}> has {fragments} fragment(s), needs at least two")]
    ShortInfix { name: String, fragments: usize },

    #[error("infix site ({syllable}, {offset}) is outside the word")]
    InvalidInfixPosition { syllable: usize, offset: usize },

    #[error("entry {word:?} has no syllables")]
    NoSyllables { word: String },

    #[error("syllables {syllables:?} do not spell {word:?}")]
    SpellingMismatch { word: String, syllables: String },
}
