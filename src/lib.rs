//! Syllable and stress alignment for Na'vi text.
//!
//! This crate bundles the word-level engine (`litxap_core`) and the line
//! orchestrator (`litxap_line`) behind one dependency, plus optional trace
//! output.

pub mod trace_init;

pub use litxap_core::{
    affix, apply_lenition, dict, entry, error, lenition, match_syllables, matcher, romanize,
    run_word, word, AffixTables, CanonicalForm, CompositeDictionary, Dictionary, DictionaryEntry,
    Lenition, LookupError, MemoryDictionary, MorphError, NotationError, Romanization,
    SurfaceMatch,
};
pub use litxap_line::{
    parse_line, parse_phrase_toml, run_line, Analysis, Deconjugator, Line, LineError, LinePart,
    LinePartMatch, PhraseTable, PhraseTableError, PronunciationSource,
};
