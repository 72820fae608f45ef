//! Affix registries and the appliers that splice affixes into syllable lists.
//!
//! The registries are loaded from TOML once per process, following the same
//! OnceLock pattern as other embedded tables:
//!
//! - `AffixTables::init_custom(toml)` installs a custom table before first use
//! - `AffixTables::global()` returns the lazily built `&'static AffixTables`
//! - the default table is embedded via `include_str!("default_affixes.toml")`

mod config;
mod infix;
mod position;
mod prefix;
mod suffix;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use config::{parse_affix_toml, AffixConfigError};
pub use position::{InfixPositions, InfixSite};

pub const DEFAULT_AFFIXES_TOML: &str = include_str!("default_affixes.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Vowel cores a lose-tail prefix consonant or an attaching suffix may join.
/// Diphthongs come first so they win over their leading vowel.
pub(crate) const ATTACHABLE_CORES: &[&str] = &[
    "aw", "ay", "ew", "ey", "a", "ä", "e", "é", "i", "ì", "o", "u", "ù",
];

/// How an affix's fragments are stitched onto the neighbouring syllable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reanalysis {
    /// Fragments become syllables of their own.
    NewSyllable,
    /// The first fragment closes a vowel-final syllable.
    Attach,
    /// The first fragment takes the preceding coda as its onset.
    StealCoda,
    /// The prefix sheds this consonant onto a vowel-initial root.
    LoseTail(String),
}

impl Reanalysis {
    pub fn label(&self) -> &'static str {
        match self {
            Reanalysis::NewSyllable => "new-syllable",
            Reanalysis::Attach => "attach",
            Reanalysis::StealCoda => "steal-coda",
            Reanalysis::LoseTail(_) => "lose-tail",
        }
    }
}

/// A registered prefix or suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixDescriptor {
    pub name: String,
    pub fragments: Vec<String>,
    pub reanalysis: Reanalysis,
}

impl AffixDescriptor {
    /// Descriptor used for names missing from the registry.
    fn verbatim(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fragments: vec![name.to_string()],
            reanalysis: Reanalysis::NewSyllable,
        }
    }
}

/// A registered infix. `slot` is 0, 1 or 2 and decides where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Infix {
    pub name: String,
    pub slot: usize,
    pub fragments: Vec<String>,
}

/// Name → descriptor registries for prefixes, infixes and suffixes.
#[derive(Debug, Clone)]
pub struct AffixTables {
    prefixes: HashMap<String, AffixDescriptor>,
    infixes: HashMap<String, Infix>,
    suffixes: HashMap<String, AffixDescriptor>,
}

impl AffixTables {
    /// Build tables from already-constructed descriptors.
    pub fn from_descriptors(
        prefixes: Vec<AffixDescriptor>,
        infixes: Vec<Infix>,
        suffixes: Vec<AffixDescriptor>,
    ) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(|d| (d.name.clone(), d)).collect(),
            infixes: infixes.into_iter().map(|i| (i.name.clone(), i)).collect(),
            suffixes: suffixes.into_iter().map(|d| (d.name.clone(), d)).collect(),
        }
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), AffixConfigError> {
        // Validate eagerly
        parse_affix_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| AffixConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static AffixTables {
        static INSTANCE: OnceLock<AffixTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_AFFIXES_TOML);
            parse_affix_toml(toml_str).expect("affix TOML must be valid")
        })
    }

    pub fn prefix(&self, name: &str) -> Option<&AffixDescriptor> {
        self.prefixes.get(name)
    }

    pub fn infix(&self, name: &str) -> Option<&Infix> {
        self.infixes.get(name)
    }

    pub fn suffix(&self, name: &str) -> Option<&AffixDescriptor> {
        self.suffixes.get(name)
    }

    /// Counts of registered prefixes, infixes and suffixes.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.prefixes.len(), self.infixes.len(), self.suffixes.len())
    }
}

/// Returns the embedded default affix TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_AFFIXES_TOML
}
