//! Surface alignment: split a written word along a canonical syllabification.
//!
//! The canonical syllables come from a dictionary entry with its affixes
//! applied. The written word may differ in case, carry hyphens or spaces,
//! be lenited, contracted or use dialect spellings. `match_syllables` walks
//! both left to right and slices the written word into syllables, keeping
//! its original text, and carries the canonical stress over.
//!
//! The walk is greedy: at each step a fixed list of strategies is
//! tried in order and the first that fits wins. A first pass runs without
//! syllable fusion (`tsuk.kan` written `tsukan`); only if it fails is a
//! second pass with fusion attempted.

mod strategies;

use serde::Serialize;
use tracing::{debug, debug_span};

use strategies::{next_step, PassOptions};

/// Syllables sliced out of a written word, plus the stressed one if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceMatch {
    pub syllables: Vec<String>,
    pub stress: Option<usize>,
}

/// Align `word` with `syllables`.
///
/// `root` is the index of the root's first canonical syllable; lenition is
/// only considered up to and including it, and not at all when `None`.
/// Returns `None` if the word cannot be aligned.
pub fn match_syllables<S: AsRef<str>>(
    word: &str,
    syllables: &[S],
    root: Option<usize>,
    stress: Option<usize>,
) -> Option<SurfaceMatch> {
    let _span = debug_span!("match_syllables", word, syllables = syllables.len()).entered();
    let canonical: Vec<&str> = syllables.iter().map(AsRef::as_ref).collect();

    [false, true].into_iter().find_map(|fusion| {
        let res = match_pass(word, &canonical, root, stress, fusion);
        if res.is_none() {
            debug!(fusion, "no alignment");
        }
        res
    })
}

fn match_pass(
    word: &str,
    canonical: &[&str],
    root: Option<usize>,
    stress: Option<usize>,
    fusion: bool,
) -> Option<SurfaceMatch> {
    let mut syllables: Vec<String> = Vec::with_capacity(canonical.len());
    let mut surface_stress = None;
    let mut rest = word;
    let mut consumed = 0;

    while consumed < canonical.len() || !rest.is_empty() {
        let opts = PassOptions {
            lenition: root.is_some_and(|r| consumed <= r),
            fusion,
        };
        let step = next_step(rest, &canonical[consumed..], opts)?;

        if let Some(s) = stress {
            if let Some(target) = s.checked_sub(consumed).and_then(|k| step.targets.get(k)) {
                surface_stress = Some(syllables.len() + target);
            }
        }

        let mut at = 0;
        for len in &step.pieces {
            syllables.push(rest[at..at + len].to_string());
            at += len;
        }
        rest = &rest[at..];
        consumed += step.targets.len();
    }

    reanchor_hyphens(&mut syllables);
    let stress = surface_stress.filter(|&s| s < syllables.len());
    Some(SurfaceMatch { syllables, stress })
}

/// `mo-` `o` reads better as `mo` `-o`.
fn reanchor_hyphens(syllables: &mut [String]) {
    for i in 1..syllables.len() {
        if syllables[i - 1].len() > 1 && syllables[i - 1].ends_with('-') {
            syllables[i - 1].pop();
            syllables[i].insert(0, '-');
        }
    }
}
