use tracing::{debug, debug_span};

use litxap_core::{match_syllables, romanize, run_word, Dictionary, LookupError};

use super::{Deconjugator, Line, LineError, LinePart, LinePartMatch, PronunciationSource};

impl Line {
    /// Annotate every word part with its matches.
    ///
    /// Words the dictionary reports missing get at most one match from
    /// `pronunciations`, either for the word itself or for a root the
    /// deconjugator finds in it. Any other lookup failure aborts the line.
    pub fn run(
        &self,
        dictionary: &dyn Dictionary,
        deconjugator: Option<&dyn Deconjugator>,
        pronunciations: &dyn PronunciationSource,
    ) -> Result<Line, LineError> {
        let _span = debug_span!("run_line", parts = self.0.len()).entered();

        let mut parts = self.0.clone();
        for part in parts.iter_mut().filter(|p| p.is_word) {
            part.matches = match_part(part, dictionary, deconjugator, pronunciations)?;
        }
        Ok(Line(parts))
    }
}

fn match_part(
    part: &LinePart,
    dictionary: &dyn Dictionary,
    deconjugator: Option<&dyn Deconjugator>,
    pronunciations: &dyn PronunciationSource,
) -> Result<Vec<LinePartMatch>, LineError> {
    let key = part.lookup_key();
    let entries = match dictionary.lookup_entries(&key) {
        Ok(entries) => entries,
        Err(LookupError::NotFound) => {
            return Ok(pronounced_match(part, &key, deconjugator, pronunciations)
                .into_iter()
                .collect());
        }
        Err(source) => return Err(LineError::Lookup { word: key, source }),
    };

    // An explicit lookup key is a respelling the entry can explain; the
    // displayed text need not be.
    let written = part.lookup.as_deref().unwrap_or(&part.raw);
    let mut matches = Vec::with_capacity(entries.len());
    for entry in entries {
        let res = run_word(written, &entry).map_err(|source| LineError::Morph {
            word: key.clone(),
            source,
        })?;
        if let Some(m) = res {
            if let Some(stress) = m.stress {
                matches.push(LinePartMatch {
                    syllables: m.syllables,
                    stress,
                    entry: Some(entry),
                });
            }
        }
    }
    Ok(matches)
}

fn pronounced_match(
    part: &LinePart,
    key: &str,
    deconjugator: Option<&dyn Deconjugator>,
    pronunciations: &dyn PronunciationSource,
) -> Option<LinePartMatch> {
    let ipa = pronunciations.pronunciation(key).or_else(|| {
        deconjugator?
            .deconjugate(key)
            .into_iter()
            .filter(|a| a.allows_noun())
            .find_map(|a| pronunciations.pronunciation(&a.root.to_lowercase()))
    })?;

    let romanized = romanize(&ipa);
    let word = romanized.first_word()?;
    let stress = word.stress?;
    debug!(word = key, ipa = %ipa, stress, "pronunciation fallback");

    let syllables = match_syllables(&part.raw, &word.syllables, None, Some(stress))
        .map(|m| m.syllables)
        .unwrap_or_else(|| word.syllables.clone());

    Some(LinePartMatch {
        syllables,
        stress,
        entry: None,
    })
}
