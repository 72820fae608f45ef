use tracing::{debug, debug_span};

use super::{AffixTables, Infix, InfixPositions, InfixSite};
use crate::error::MorphError;

/// Same-slot combinations that fuse into a single registered infix,
/// e.g. `<äp>` + `<eyk>` is written `<äpeyk>`.
const SLOT_MERGES: &[(&str, &str, &str)] = &[("äp", "eyk", "äpeyk")];

/// Syllables an infix can leave behind that belong to the previous syllable.
const STRANDED_PSEUDOVOWELS: &[&str] = &["lll", "rrr"];

impl Infix {
    /// Split the syllable at `site` and insert this infix's fragments.
    ///
    /// Returns the new syllables and the site right after the inserted
    /// material, where a following infix would go.
    pub fn apply(
        &self,
        syllables: &[String],
        site: InfixSite,
    ) -> Result<(Vec<String>, InfixSite), MorphError> {
        let invalid = || MorphError::InvalidInfixPosition {
            syllable: site.syllable,
            offset: site.offset,
        };
        let target = syllables.get(site.syllable).ok_or_else(invalid)?;
        if !target.is_char_boundary(site.offset) {
            return Err(invalid());
        }
        let [first, middle @ .., last] = &self.fragments[..] else {
            return Err(MorphError::ShortInfix {
                name: self.name.clone(),
                fragments: self.fragments.len(),
            });
        };
        let (head, tail) = target.split_at(site.offset);

        let mut out = Vec::with_capacity(syllables.len() + self.fragments.len());
        out.extend_from_slice(&syllables[..site.syllable]);
        out.push(format!("{head}{first}"));
        out.extend(middle.iter().cloned());
        let next_syllable = out.len();
        out.push(format!("{last}{tail}"));
        out.extend_from_slice(&syllables[site.syllable + 1..]);

        Ok((out, InfixSite::new(next_syllable, last.len())))
    }
}

/// The running pair of insertion sites, re-derived after every insertion.
fn push_sites(positions: InfixPositions, after: InfixSite) -> InfixPositions {
    let [first, second] = positions.0;
    let second = if first == second {
        after
    } else {
        InfixSite::new(
            after.syllable + second.syllable - first.syllable,
            second.offset,
        )
    };
    InfixPositions::new(after, second)
}

impl AffixTables {
    /// Resolve infix names into the three slots. Later names replace earlier
    /// ones in the same slot, except for the fused combinations.
    fn infix_slots<'a, S: AsRef<str>>(&'a self, names: &[S]) -> [Option<&'a Infix>; 3] {
        let mut slots: [Option<&Infix>; 3] = [None; 3];
        for name in names {
            let name = name.as_ref();
            let Some(mut infix) = self.infix(name) else {
                debug!(infix = name, "unregistered infix ignored");
                continue;
            };
            if let Some(prev) = slots.get(infix.slot).copied().flatten() {
                let merged = SLOT_MERGES.iter().find(|(a, b, _)| {
                    (prev.name == *a && infix.name == *b) || (prev.name == *b && infix.name == *a)
                });
                if let Some(fused) = merged.and_then(|(_, _, fused)| self.infix(fused)) {
                    infix = fused;
                }
            }
            if let Some(slot) = slots.get_mut(infix.slot) {
                *slot = Some(infix);
            }
        }
        slots
    }

    /// Insert infixes into `syllables` at `positions`.
    ///
    /// `root` is the index of the root's first syllable; `positions` are
    /// absolute. Slot 0 and 1 infixes go into the first site and slot 2
    /// into the second. Returns the new syllables and stress.
    pub fn apply_infixes<S: AsRef<str>>(
        &self,
        mut syllables: Vec<String>,
        names: &[S],
        root: usize,
        stress: Option<usize>,
        mut positions: InfixPositions,
    ) -> Result<(Vec<String>, Option<usize>), MorphError> {
        let _span = debug_span!("apply_infixes", infixes = names.len(), root).entered();

        let slots = self.infix_slots(names);
        let [pre_first, first, second] = slots;

        // A root-initial stress with the first site at the very start of the
        // word keeps stress on the same vowel, which ends up after the infix.
        // Once a prefix precedes the root the ordinary rule applies.
        let stress_shift =
            stress == Some(root) && positions.first() == InfixSite::new(0, 0);
        let together = positions.is_single();
        let mut stress = stress;

        for infix in [pre_first, first].into_iter().flatten() {
            let site = positions.first();
            let (next, after) = infix.apply(&syllables, site)?;
            if !stress_shift {
                stress = stress.map(|s| {
                    if s >= site.syllable {
                        s + after.syllable - site.syllable
                    } else {
                        s
                    }
                });
            }
            positions = push_sites(positions, after);
            syllables = next;
        }

        if let Some(infix) = second {
            let site = positions.second();
            let (next, after) = infix.apply(&syllables, site)?;
            if !stress_shift {
                stress = stress.map(|s| {
                    if s >= site.syllable {
                        s + after.syllable - site.syllable
                    } else {
                        s
                    }
                });
            }
            syllables = next;
        }

        if stress_shift {
            let added = |infix: Option<&Infix>| infix.map_or(0, |i| i.fragments.len() - 1);
            let inner = |infix: &Infix| infix.fragments.len().saturating_sub(2);
            let shift = match (pre_first, first, second) {
                (_, _, Some(s)) if together => inner(s) + added(first) + added(pre_first),
                (_, Some(f), _) => inner(f) + added(pre_first),
                (Some(p), _, _) => inner(p),
                _ => 0,
            };
            stress = stress.map(|s| s + shift);
            debug!(shift, "root-initial stress follows the infixed vowel");
        }

        // v<ol>ll -> vo.lll -> vol
        let stranded = syllables
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, s)| STRANDED_PSEUDOVOWELS.contains(&s.as_str()))
            .map(|(i, _)| i);
        if let Some(i) = stranded {
            let removed = syllables.remove(i);
            if let Some(consonant) = removed.chars().next() {
                syllables[i - 1].push(consonant);
            }
            stress = stress.map(|s| if s >= i { s - 1 } else { s });
        }

        Ok((syllables, stress))
    }
}
