use tracing::debug;

use super::{AffixDescriptor, AffixTables, Reanalysis, ATTACHABLE_CORES};
use crate::error::MorphError;

impl AffixTables {
    /// Prepend prefixes, given outermost first, to `syllables`.
    ///
    /// The innermost prefix touches the root first. Returns the new syllables
    /// and how many syllables were added in front of the root.
    pub fn apply_prefixes<S: AsRef<str>>(
        &self,
        mut syllables: Vec<String>,
        names: &[S],
    ) -> Result<(Vec<String>, usize), MorphError> {
        let mut offset = 0;
        for name in names.iter().rev() {
            let name = name.as_ref();
            let added = match self.prefix(name) {
                Some(prefix) => prepend(&mut syllables, prefix)?,
                None => {
                    debug!(prefix = name, "unregistered prefix kept verbatim");
                    prepend(&mut syllables, &AffixDescriptor::verbatim(name))?
                }
            };
            offset += added;
        }
        Ok((syllables, offset))
    }
}

fn prepend(syllables: &mut Vec<String>, prefix: &AffixDescriptor) -> Result<usize, MorphError> {
    let n = prefix.fragments.len();
    syllables.splice(0..0, prefix.fragments.iter().cloned());

    match &prefix.reanalysis {
        Reanalysis::NewSyllable => {}
        Reanalysis::LoseTail(tail) => {
            // tsuk- + i.nan -> tsu.ki.nan, tsuk- + ha.haw -> tsuk.ha.haw
            let vowel_next = syllables
                .get(n)
                .is_some_and(|next| ATTACHABLE_CORES.iter().any(|core| next.starts_with(core)));
            if vowel_next {
                syllables[n].insert_str(0, tail);
            } else if let Some(last) = n.checked_sub(1).and_then(|i| syllables.get_mut(i)) {
                last.push_str(tail);
            }
        }
        other => {
            return Err(MorphError::UnsupportedReanalysis {
                kind: "prefix",
                name: prefix.name.clone(),
                reanalysis: other.clone(),
            })
        }
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed(word: &str, prefixes: &str) -> (String, usize) {
        let syllables = word.split('.').map(String::from).collect();
        let names: Vec<&str> = prefixes.split(',').collect();
        let (res, offset) = AffixTables::global()
            .apply_prefixes(syllables, &names)
            .unwrap();
        (res.join("."), offset)
    }

    #[test]
    fn unregistered_prefix_is_verbatim() {
        assert_eq!(prefixed("ta.ron", "fne"), ("fne.ta.ron".into(), 1));
    }

    #[test]
    fn lose_tail_stays_before_consonant() {
        assert_eq!(prefixed("ha.haw", "tsuk"), ("tsuk.ha.haw".into(), 1));
        assert_eq!(prefixed("tskxe", "ay"), ("ay.tskxe".into(), 1));
    }

    #[test]
    fn lose_tail_moves_onto_vowel() {
        assert_eq!(prefixed("i.nan", "tsuk"), ("tsu.ki.nan".into(), 1));
        assert_eq!(prefixed("eyk", "ketsuk"), ("ke.tsu.keyk".into(), 2));
        assert_eq!(prefixed("o.e", "ay"), ("a.yo.e".into(), 1));
    }

    #[test]
    fn lose_tail_moves_once_onto_diphthong() {
        assert_eq!(prefixed("awkx", "ay"), ("a.yawkx".into(), 1));
    }

    #[test]
    fn prefixes_apply_inner_first() {
        assert_eq!(
            prefixed("tì.fme.tok", "pe,pxe,fne"),
            ("pe.pxe.fne.tì.fme.tok".into(), 3)
        );
    }

    #[test]
    fn no_prefixes() {
        let syllables = vec!["lu".to_string()];
        let (res, offset) = AffixTables::global()
            .apply_prefixes(syllables, &[] as &[&str])
            .unwrap();
        assert_eq!(res, vec!["lu"]);
        assert_eq!(offset, 0);
    }

    #[test]
    fn attach_prefix_is_rejected() {
        let tables = AffixTables::from_descriptors(
            vec![AffixDescriptor {
                name: "ke".into(),
                fragments: vec!["ke".into()],
                reanalysis: Reanalysis::Attach,
            }],
            vec![],
            vec![],
        );
        let err = tables
            .apply_prefixes(vec!["lu".to_string()], &["ke"])
            .unwrap_err();
        assert!(matches!(
            err,
            MorphError::UnsupportedReanalysis { kind: "prefix", .. }
        ));
    }
}
