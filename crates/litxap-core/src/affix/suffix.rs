use tracing::debug;

use super::{AffixDescriptor, AffixTables, Reanalysis, ATTACHABLE_CORES};
use crate::error::MorphError;

/// Codas that never move to a following suffix.
const UNSTEALABLE_CODAS: &[&str] = &["ll", "rr"];

/// Codas a steal-coda suffix takes as its onset, longest first.
const STEALABLE_CODAS: &[&str] = &[
    "ng", "px", "tx", "kx", "p", "t", "k", "b", "d", "g", "'", "m", "n", "l", "r", "w", "y",
];

impl AffixTables {
    /// Append suffixes, innermost first. Suffixes never move stress.
    pub fn apply_suffixes<S: AsRef<str>>(
        &self,
        mut syllables: Vec<String>,
        names: &[S],
    ) -> Result<Vec<String>, MorphError> {
        for name in names {
            let name = name.as_ref();
            match self.suffix(name) {
                Some(suffix) => append(&mut syllables, suffix)?,
                None => {
                    debug!(suffix = name, "unregistered suffix kept verbatim");
                    append(&mut syllables, &AffixDescriptor::verbatim(name))?
                }
            }
        }
        Ok(syllables)
    }
}

fn append(syllables: &mut Vec<String>, suffix: &AffixDescriptor) -> Result<(), MorphError> {
    let Some(last) = syllables.last_mut() else {
        return Err(MorphError::EmptyWord {
            suffix: suffix.name.clone(),
        });
    };
    let (first, rest) = match suffix.fragments.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    match &suffix.reanalysis {
        Reanalysis::NewSyllable => {}
        Reanalysis::Attach => {
            // fko + -l -> fkol
            if ATTACHABLE_CORES.iter().any(|core| last.ends_with(core)) {
                last.push_str(first);
                syllables.extend(rest.iter().cloned());
                return Ok(());
            }
        }
        Reanalysis::StealCoda => {
            // u.ran + -it -> u.ra.nit
            let protected = UNSTEALABLE_CODAS.iter().any(|coda| last.ends_with(coda));
            let coda = STEALABLE_CODAS
                .iter()
                .find(|coda| !protected && last.ends_with(*coda));
            if let Some(coda) = coda {
                last.truncate(last.len() - coda.len());
                syllables.push(format!("{coda}{first}"));
                syllables.extend(rest.iter().cloned());
                return Ok(());
            }
        }
        other => {
            return Err(MorphError::UnsupportedReanalysis {
                kind: "suffix",
                name: suffix.name.clone(),
                reanalysis: other.clone(),
            })
        }
    }

    syllables.extend(suffix.fragments.iter().cloned());
    Ok(())
}
