//! Dictionary entries and canonical form generation.
//!
//! An entry is a root syllabification plus the affixes a deconjugator found
//! on the written word. `generate` applies prefixes, then infixes, then
//! suffixes and reports where the root ended up.

mod notation;

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::affix::{AffixTables, InfixPositions};
use crate::error::MorphError;

pub use notation::NotationError;

/// A dictionary root with the affixes to apply to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default)]
    pub translation: String,
    pub syllables: Vec<String>,
    /// Stressed syllable, `None` when the source does not say.
    #[serde(default)]
    pub stress: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infix_pos: Option<InfixPositions>,

    /// Outermost first; the last one touches the root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,
    /// Order does not matter, each one goes to its slot.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infixes: Vec<String>,
    /// Innermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suffixes: Vec<String>,
}

/// Syllables and stress predicted for an inflected entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalForm {
    pub syllables: Vec<String>,
    pub stress: Option<usize>,
    /// Index of the root's first syllable after prefixing.
    pub root_offset: usize,
}

impl DictionaryEntry {
    /// Build an uninflected entry from its syllables.
    pub fn new<S: Into<String>>(syllables: impl IntoIterator<Item = S>, stress: Option<usize>) -> Self {
        let syllables: Vec<String> = syllables.into_iter().map(Into::into).collect();
        Self {
            word: syllables.concat(),
            syllables,
            stress,
            ..Self::default()
        }
    }

    pub fn is_inflected(&self) -> bool {
        !(self.prefixes.is_empty() && self.infixes.is_empty() && self.suffixes.is_empty())
    }

    /// Check the entry is self-consistent: syllables spell the word and
    /// infix sites fall inside it.
    pub fn validate(&self) -> Result<(), MorphError> {
        if self.syllables.is_empty() {
            return Err(MorphError::NoSyllables {
                word: self.word.clone(),
            });
        }
        if self.syllables.concat() != self.word {
            return Err(MorphError::SpellingMismatch {
                word: self.word.clone(),
                syllables: self.syllables.join("."),
            });
        }
        for site in self.infix_pos.iter().flat_map(|p| p.0) {
            let inside = self
                .syllables
                .get(site.syllable)
                .is_some_and(|s| s.is_char_boundary(site.offset));
            if !inside {
                return Err(MorphError::InvalidInfixPosition {
                    syllable: site.syllable,
                    offset: site.offset,
                });
            }
        }
        Ok(())
    }

    /// Canonical form using the global affix tables.
    pub fn generate(&self) -> Result<CanonicalForm, MorphError> {
        self.generate_with(AffixTables::global())
    }

    pub fn generate_with(&self, tables: &AffixTables) -> Result<CanonicalForm, MorphError> {
        let _span = debug_span!("generate", word = %self.word).entered();

        let (mut syllables, offset) = tables.apply_prefixes(self.syllables.clone(), &self.prefixes)?;
        let mut stress = self.stress.map(|s| s + offset);

        if let Some(positions) = self.infix_pos.filter(|_| !self.infixes.is_empty()) {
            (syllables, stress) = tables.apply_infixes(
                syllables,
                &self.infixes,
                offset,
                stress,
                positions.shifted(offset),
            )?;
        }

        let syllables = tables.apply_suffixes(syllables, &self.suffixes)?;
        Ok(CanonicalForm {
            syllables,
            stress,
            root_offset: offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::affix::InfixSite;

    fn generated(notation: &str) -> (String, Option<usize>, usize) {
        let entry: DictionaryEntry = notation.parse().unwrap();
        let form = entry.generate().unwrap();
        (form.syllables.join("."), form.stress, form.root_offset)
    }

    #[test]
    fn uninflected() {
        assert_eq!(generated("tskxe"), ("tskxe".into(), Some(0), 0));
        assert_eq!(generated("u.*van"), ("u.van".into(), Some(1), 0));
    }

    #[test]
    fn prefixes_move_the_root() {
        assert_eq!(generated("lo.ran: pe-fne-"), ("pe.fne.lo.ran".into(), Some(2), 2));
        assert_eq!(generated("awkx: ay-"), ("a.yawkx".into(), Some(1), 1));
    }

    #[test]
    fn full_inflection() {
        assert_eq!(
            generated("t·ì.*r·an: tì- <us> -ìri: walk"),
            ("tì.tu.sì.ra.nì.ri".into(), Some(3), 1)
        );
        assert_eq!(
            generated("t·a.r·on: tì- <us> -ti: hunt"),
            ("tì.tu.sa.ron.ti".into(), Some(2), 1)
        );
        assert_eq!(generated("t··el: <ei>: get, receive"), ("te.i.el".into(), Some(2), 0));
    }

    #[test]
    fn word_initial_site_shifts_stress_only_without_prefix() {
        assert_eq!(generated("··i.nan: <ìyev>"), ("ì.ye.vi.nan".into(), Some(1), 0));
        assert_eq!(
            generated("··i.nan: tì- <ìyev>"),
            ("tì.ì.ye.vi.nan".into(), Some(3), 1)
        );
    }

    #[test]
    fn infixes_without_sites_are_ignored() {
        let mut entry = DictionaryEntry::new(["tì", "ran"], Some(1));
        entry.infixes = vec!["us".into()];
        assert_eq!(entry.generate().unwrap().syllables, vec!["tì", "ran"]);
    }

    #[test]
    fn validate() {
        let mut entry = DictionaryEntry::new(["tì", "ran"], Some(1));
        assert!(entry.validate().is_ok());

        entry.infix_pos = Some(InfixPositions::single(InfixSite::new(2, 0)));
        assert!(matches!(entry.validate(), Err(MorphError::InvalidInfixPosition { .. })));

        // Inside the two-byte ì.
        entry.infix_pos = Some(InfixPositions::single(InfixSite::new(0, 2)));
        assert!(entry.validate().is_err());

        entry.infix_pos = None;
        entry.word = "tìran'".into();
        assert!(matches!(entry.validate(), Err(MorphError::SpellingMismatch { .. })));

        assert!(matches!(
            DictionaryEntry::default().validate(),
            Err(MorphError::NoSyllables { .. })
        ));
    }

    #[test]
    fn json_shape() {
        let entry: DictionaryEntry = "t·ì.*r·an: <us>: walk".parse().unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "tìran",
                "translation": "walk",
                "syllables": ["tì", "ran"],
                "stress": 1,
                "infixPos": [[0, 1], [1, 1]],
                "infixes": ["us"],
            })
        );
        let back: DictionaryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn json_defaults() {
        let entry: DictionaryEntry =
            serde_json::from_str(r#"{"word":"uvan","syllables":["u","van"]}"#).unwrap();
        assert_eq!(entry.stress, None);
        assert!(entry.translation.is_empty());
        assert!(!entry.is_inflected());
    }

    fn arb_root() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["ta", "ron", "tì", "fme", "tok", "u", "van", "kxll"]),
            1..5,
        )
        .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    proptest! {
        #[test]
        fn no_affixes_is_identity(root in arb_root(), stress_seed in any::<usize>()) {
            let stress = stress_seed % root.len();
            let form = DictionaryEntry::new(root.clone(), Some(stress)).generate().unwrap();
            prop_assert_eq!(form.syllables, root);
            prop_assert_eq!(form.stress, Some(stress));
            prop_assert_eq!(form.root_offset, 0);
        }

        #[test]
        fn new_syllable_prefixes_add_their_fragments(
            root in arb_root(),
            prefixes in prop::collection::vec(prop::sample::select(vec!["pe", "fne", "tì", "sä", "fì"]), 0..4),
        ) {
            let tables = AffixTables::global();
            let added: usize = prefixes
                .iter()
                .map(|p| tables.prefix(p).map_or(1, |d| d.fragments.len()))
                .sum();
            let mut entry = DictionaryEntry::new(root.clone(), Some(0));
            entry.prefixes = prefixes.into_iter().map(String::from).collect();
            let form = entry.generate().unwrap();
            prop_assert_eq!(form.syllables.len(), root.len() + added);
            prop_assert_eq!(form.root_offset, added);
            prop_assert_eq!(form.stress, Some(added));
        }

        #[test]
        fn suffixes_keep_stress(
            root in arb_root(),
            suffixes in prop::collection::vec(prop::sample::select(vec!["ti", "ìl", "it", "ur", "o", "teri", "l", "ä"]), 0..3),
        ) {
            let stress = root.len() - 1;
            let mut entry = DictionaryEntry::new(root, Some(stress));
            entry.suffixes = suffixes.into_iter().map(String::from).collect();
            prop_assert_eq!(entry.generate().unwrap().stress, Some(stress));
        }
    }
}
