//! Na'vi word forms: affix application, surface alignment and IPA
//! romanization.
//!
//! The usual entry point is [`word::run_word`], which builds the canonical
//! form of a dictionary entry and aligns a written word against it.

pub mod affix;
pub mod dict;
pub mod entry;
pub mod error;
pub mod lenition;
pub mod matcher;
pub mod romanize;
pub mod word;

pub use affix::AffixTables;
pub use dict::{CompositeDictionary, Dictionary, LookupError, MemoryDictionary};
pub use entry::{CanonicalForm, DictionaryEntry, NotationError};
pub use error::MorphError;
pub use lenition::{apply_lenition, Lenition};
pub use matcher::{match_syllables, SurfaceMatch};
pub use romanize::{romanize, Romanization};
pub use word::run_word;
