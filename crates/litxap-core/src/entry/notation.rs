//! Compact one-line notation for entries, used by fixtures and the CLI.
//!
//! `t·ì.*r·an: tì- <us> -ìri: walk` reads as syllables `tì.ran`, stress on
//! the second, infix sites marked with `·`, then prefixes, infixes and
//! suffixes, then the translation. An uninflected entry with a translation
//! keeps an empty affix field: `sä.*pxor: : explosion`.
//!
//! A verb with one infix site carries both slots there and is written with a
//! doubled mark (`t··el`). A lone mark (`k·an`) reads the same way, so it
//! comes back out doubled.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use super::DictionaryEntry;
use crate::affix::{InfixPositions, InfixSite};

const STRESS_MARK: char = '*';
const INFIX_MARK: char = '·';
const FIELD_SEP: &str = ": ";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty entry")]
    Empty,
    #[error("empty syllable at index {0}")]
    EmptySyllable(usize),
    #[error("{0} infix sites marked, at most two allowed")]
    TooManyInfixSites(usize),
    #[error("unrecognized affix token {0:?}")]
    UnknownToken(String),
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, syllable) in self.syllables.iter().enumerate() {
            if i > 0 {
                f.write_char('.')?;
            }
            if self.stress == Some(i) && i != 0 {
                f.write_char(STRESS_MARK)?;
            }
            write_marked(f, syllable, self.sites_in(i))?;
        }

        let inflected = self.is_inflected();
        if inflected {
            f.write_char(':')?;
        }
        if !self.prefixes.is_empty() {
            f.write_char(' ')?;
            for prefix in &self.prefixes {
                write!(f, "{prefix}-")?;
            }
        }
        if !self.infixes.is_empty() {
            write!(f, " <{}>", self.infixes.join(","))?;
        }
        if !self.suffixes.is_empty() {
            f.write_char(' ')?;
            for suffix in &self.suffixes {
                write!(f, "-{suffix}")?;
            }
        }

        if !self.translation.is_empty() {
            if !inflected {
                f.write_str(FIELD_SEP)?;
            }
            write!(f, "{FIELD_SEP}{}", self.translation)?;
        }
        Ok(())
    }
}

impl DictionaryEntry {
    /// Byte offsets of infix sites inside syllable `i`, in order.
    fn sites_in(&self, i: usize) -> Vec<usize> {
        let mut offsets: Vec<usize> = self
            .infix_pos
            .iter()
            .flat_map(|p| p.0)
            .filter(|site| site.syllable == i)
            .map(|site| site.offset)
            .collect();
        offsets.sort_unstable();
        offsets
    }
}

fn write_marked(f: &mut fmt::Formatter<'_>, syllable: &str, offsets: Vec<usize>) -> fmt::Result {
    let mut at = 0;
    for offset in offsets {
        // A site outside the syllable cannot be drawn; leave it out.
        let Some(piece) = syllable.get(at..offset) else {
            continue;
        };
        f.write_str(piece)?;
        f.write_char(INFIX_MARK)?;
        at = offset;
    }
    f.write_str(&syllable[at..])
}

impl FromStr for DictionaryEntry {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split(FIELD_SEP);
        let head = fields.next().unwrap_or_default();
        if head.is_empty() {
            return Err(NotationError::Empty);
        }

        let mut entry = DictionaryEntry {
            stress: Some(0),
            ..DictionaryEntry::default()
        };
        let mut sites = Vec::new();

        for (i, marked) in head.split('.').enumerate() {
            let marked = match marked.strip_prefix(STRESS_MARK) {
                Some(rest) => {
                    entry.stress = Some(i);
                    rest
                }
                None => marked,
            };

            let mut syllable = String::with_capacity(marked.len());
            for c in marked.chars() {
                if c == INFIX_MARK {
                    sites.push(InfixSite::new(i, syllable.len()));
                } else {
                    syllable.push(c);
                }
            }
            if syllable.is_empty() {
                return Err(NotationError::EmptySyllable(i));
            }
            entry.word.push_str(&syllable);
            entry.syllables.push(syllable);
        }

        entry.infix_pos = match sites[..] {
            [] => None,
            [site] => Some(InfixPositions::single(site)),
            [first, second] => Some(InfixPositions::new(first, second)),
            _ => return Err(NotationError::TooManyInfixSites(sites.len())),
        };

        if let Some(affixes) = fields.next() {
            for token in affixes.split(' ').filter(|t| !t.is_empty()) {
                parse_affix_token(token, &mut entry)?;
            }
        }

        let translation: Vec<&str> = fields.collect();
        entry.translation = translation.join(FIELD_SEP);

        Ok(entry)
    }
}

fn parse_affix_token(token: &str, entry: &mut DictionaryEntry) -> Result<(), NotationError> {
    let split = |s: &str, sep: char| s.split(sep).map(String::from).collect::<Vec<_>>();

    if let Some(inner) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        entry.infixes = split(inner, ',');
    } else if let Some(suffixes) = token.strip_prefix('-').filter(|s| !s.is_empty()) {
        entry.suffixes = split(suffixes, '-');
    } else if let Some(prefixes) = token.strip_suffix('-').filter(|s| !s.is_empty()) {
        entry.prefixes = split(prefixes, '-');
    } else {
        return Err(NotationError::UnknownToken(token.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn parse(s: &str) -> DictionaryEntry {
        s.parse().unwrap()
    }

    #[test]
    fn round_trip() {
        for s in [
            "tskxe",
            "lo.ran: pe-fne- -ìri",
            "u.*van: -ti",
            "t·ì.*r·an: <äpeyk,ol>: walk",
            "t··el: <ei>: get, receive",
            "t·a.r·on: tì- <us> -ti: hunt",
            "t·ì.*r·an: tì- <us> -ìri: walk",
            "sä.*pxor: : explosion",
        ] {
            assert_eq!(parse(s).to_string(), s);
        }
    }

    #[test]
    fn fields() {
        let entry = parse("t·ì.*r·an: tì- <us> -ìri: walk");
        assert_eq!(entry.word, "tìran");
        assert_eq!(entry.syllables, vec!["tì", "ran"]);
        assert_eq!(entry.stress, Some(1));
        assert_eq!(
            entry.infix_pos,
            Some(InfixPositions::new(InfixSite::new(0, 1), InfixSite::new(1, 1)))
        );
        assert_eq!(entry.prefixes, vec!["tì"]);
        assert_eq!(entry.infixes, vec!["us"]);
        assert_eq!(entry.suffixes, vec!["ìri"]);
        assert_eq!(entry.translation, "walk");
    }

    #[test]
    fn double_marker_is_one_site() {
        let entry = parse("t··el");
        assert_eq!(entry.infix_pos, Some(InfixPositions::single(InfixSite::new(0, 1))));

        let entry = parse("k·a.n·om");
        assert_eq!(
            entry.infix_pos,
            Some(InfixPositions::new(InfixSite::new(0, 1), InfixSite::new(1, 1)))
        );
    }

    #[test]
    fn lone_marker_reads_as_one_site() {
        let entry = parse("k·an: <am>");
        assert_eq!(entry.infix_pos, Some(InfixPositions::single(InfixSite::new(0, 1))));
        assert_eq!(entry.to_string(), "k··an: <am>");
        assert_eq!(parse(&entry.to_string()), entry);
    }

    #[test]
    fn offsets_are_bytes() {
        let entry = parse("sä·n");
        assert_eq!(entry.infix_pos.unwrap().first(), InfixSite::new(0, 3));
        assert_eq!(entry.to_string(), "sä··n");
    }

    #[test]
    fn spaced_syllable() {
        let entry = parse("tskxe.keng. s··i: <ìsy>");
        assert_eq!(entry.syllables, vec!["tskxe", "keng", " si"]);
        assert_eq!(entry.word, "tskxekeng si");
        assert_eq!(entry.infix_pos.unwrap().first(), InfixSite::new(2, 2));
    }

    #[test]
    fn translation_may_contain_separator() {
        let entry = parse("kaltxì: : hello: greeting");
        assert_eq!(entry.translation, "hello: greeting");
        assert_eq!(entry.to_string(), "kaltxì: : hello: greeting");
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<DictionaryEntry>(), Err(NotationError::Empty));
        assert_eq!("ta..ron".parse::<DictionaryEntry>(), Err(NotationError::EmptySyllable(1)));
        assert_eq!(
            "t·a.r·o·n".parse::<DictionaryEntry>(),
            Err(NotationError::TooManyInfixSites(3))
        );
        assert_eq!(
            "taron: ?".parse::<DictionaryEntry>(),
            Err(NotationError::UnknownToken("?".into()))
        );
    }

    fn arb_syllables() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::sample::select(vec!["ta", "rì", "ä", "kxll", "'ong", "txe", "sä", "u", "fpom"]),
            1..5,
        )
        .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    fn arb_affixes() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zäì']{1,4}", 0..3)
    }

    /// A site on a char boundary of some syllable, the end included.
    fn site_in(syllables: &[String], (syllable, offset): (usize, usize)) -> InfixSite {
        let i = syllable % syllables.len();
        let text = &syllables[i];
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(at, _)| at)
            .chain([text.len()])
            .collect();
        InfixSite::new(i, boundaries[offset % boundaries.len()])
    }

    fn arb_entry() -> impl Strategy<Value = DictionaryEntry> {
        (
            arb_syllables(),
            any::<usize>(),
            prop::collection::vec((any::<usize>(), any::<usize>()), 0..3),
            any::<bool>(),
            (arb_affixes(), arb_affixes(), arb_affixes()),
            "[a-z ,:]{0,12}",
        )
            .prop_map(|(syllables, stress, seeds, coincide, (prefixes, infixes, suffixes), translation)| {
                let mut sites: Vec<InfixSite> = seeds.into_iter().map(|s| site_in(&syllables, s)).collect();
                sites.sort_by_key(|site| (site.syllable, site.offset));
                let infix_pos = match sites[..] {
                    [] => None,
                    [site] => Some(InfixPositions::single(site)),
                    [first, _] if coincide => Some(InfixPositions::single(first)),
                    [first, second, ..] => Some(InfixPositions::new(first, second)),
                };
                DictionaryEntry {
                    word: syllables.concat(),
                    stress: Some(stress % syllables.len()),
                    syllables,
                    infix_pos,
                    prefixes,
                    infixes,
                    suffixes,
                    translation,
                }
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn notation_round_trips(entry in arb_entry()) {
            let rendered = entry.to_string();
            let parsed: DictionaryEntry = rendered.parse().unwrap();
            prop_assert_eq!(parsed.to_string(), rendered);
            prop_assert_eq!(parsed, entry);
        }
    }
}
