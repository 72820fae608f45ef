use std::collections::BTreeMap;

use serde::Deserialize;

use super::{AffixDescriptor, AffixTables, Infix, Reanalysis};

#[derive(Deserialize)]
struct AffixConfig {
    #[serde(default)]
    prefixes: BTreeMap<String, RawPrefix>,
    #[serde(default)]
    infixes: BTreeMap<String, RawInfix>,
    #[serde(default)]
    suffixes: BTreeMap<String, RawSuffix>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPrefix {
    fragments: Vec<String>,
    #[serde(default)]
    lose_tail: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInfix {
    slot: usize,
    fragments: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSuffix {
    mode: SuffixMode,
    fragments: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum SuffixMode {
    NewSyllable,
    Attach,
    StealCoda,
}

impl From<SuffixMode> for Reanalysis {
    fn from(mode: SuffixMode) -> Self {
        match mode {
            SuffixMode::NewSyllable => Reanalysis::NewSyllable,
            SuffixMode::Attach => Reanalysis::Attach,
            SuffixMode::StealCoda => Reanalysis::StealCoda,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AffixConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no affixes defined")]
    Empty,
    #[error("{kind} {name:?} has no fragments")]
    NoFragments { kind: &'static str, name: String },
    #[error("infix {name:?} has slot {slot}, expected 0, 1 or 2")]
    InvalidSlot { name: String, slot: usize },
    #[error("infix {0:?} needs at least two fragments")]
    ShortInfix(String),
    #[error("prefix {0:?} has an empty lose_tail")]
    EmptyLoseTail(String),
    #[error("affix tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated affix registries.
pub fn parse_affix_toml(toml_str: &str) -> Result<AffixTables, AffixConfigError> {
    let config: AffixConfig =
        toml::from_str(toml_str).map_err(|e| AffixConfigError::Parse(e.to_string()))?;

    if config.prefixes.is_empty() && config.infixes.is_empty() && config.suffixes.is_empty() {
        return Err(AffixConfigError::Empty);
    }

    let mut prefixes = Vec::with_capacity(config.prefixes.len());
    for (name, raw) in config.prefixes {
        if raw.fragments.is_empty() {
            return Err(AffixConfigError::NoFragments {
                kind: "prefix",
                name,
            });
        }
        let reanalysis = match raw.lose_tail {
            Some(tail) if tail.is_empty() => return Err(AffixConfigError::EmptyLoseTail(name)),
            Some(tail) => Reanalysis::LoseTail(tail),
            None => Reanalysis::NewSyllable,
        };
        prefixes.push(AffixDescriptor {
            name,
            fragments: raw.fragments,
            reanalysis,
        });
    }

    let mut infixes = Vec::with_capacity(config.infixes.len());
    for (name, raw) in config.infixes {
        if raw.slot > 2 {
            return Err(AffixConfigError::InvalidSlot {
                name,
                slot: raw.slot,
            });
        }
        if raw.fragments.len() < 2 {
            return Err(AffixConfigError::ShortInfix(name));
        }
        infixes.push(Infix {
            name,
            slot: raw.slot,
            fragments: raw.fragments,
        });
    }

    let mut suffixes = Vec::with_capacity(config.suffixes.len());
    for (name, raw) in config.suffixes {
        if raw.fragments.is_empty() {
            return Err(AffixConfigError::NoFragments {
                kind: "suffix",
                name,
            });
        }
        suffixes.push(AffixDescriptor {
            name,
            fragments: raw.fragments,
            reanalysis: raw.mode.into(),
        });
    }

    Ok(AffixTables::from_descriptors(prefixes, infixes, suffixes))
}
