use crate::lenition::apply_lenition;

/// Codas that may be written once across a syllable boundary (`tsuk.kan` as
/// `tsukan`), then vowels that may merge the same way.
const FUSABLE_TAILS: &[&str] = &["px", "tx", "kx", "m", "n", "l", "r", "p", "t", "k"];
const FUSABLE_MIDS: &[&str] = &["a", "ä", "e", "i", "ì", "o", "u", "ù"];

/// Reef dialect writes initial ejectives as voiced stops.
const EJECTIVE_SWAPS: &[(&str, &str)] = &[("px", "b"), ("tx", "d"), ("kx", "g")];

#[derive(Debug, Clone, Copy)]
pub(super) struct PassOptions {
    /// Onset lenition may explain a mismatch.
    pub lenition: bool,
    /// Two canonical syllables may share a written letter.
    pub fusion: bool,
}

/// One alignment step.
#[derive(Debug)]
pub(super) struct Step {
    /// Byte lengths of the surface syllables cut from the front of the word.
    pub pieces: Vec<usize>,
    /// For each canonical syllable consumed, the piece that carries it.
    pub targets: Vec<usize>,
}

impl Step {
    fn new(pieces: Vec<usize>, targets: Vec<usize>) -> Self {
        if pieces.iter().all(|&len| len > 0) {
            return Self { pieces, targets };
        }
        // Drop empty pieces; canonical syllables they carried move to the next one.
        let mut kept = Vec::with_capacity(pieces.len());
        let remap: Vec<usize> = pieces
            .iter()
            .map(|&len| {
                let idx = kept.len();
                if len > 0 {
                    kept.push(len);
                }
                idx
            })
            .collect();
        let last = kept.len().saturating_sub(1);
        let targets = targets.into_iter().map(|t| remap[t].min(last)).collect();
        Self {
            pieces: kept,
            targets,
        }
    }

    /// A single surface syllable carrying `consumed` canonical ones.
    fn single(len: usize, consumed: usize) -> Self {
        Self::new(vec![len], vec![0; consumed])
    }
}

type Strategy = fn(&str, &[&str], PassOptions) -> Option<Step>;

/// Tried in order; the first match wins.
const STRATEGIES: &[Strategy] = &[
    leading_spaces,
    fused_boundary,
    ia_contraction,
    hyphenated,
    ng_coda_with_a,
    ng_coda_with_e,
    exact,
    without_leading_space,
    lenited,
    fronted_vowel,
    voiced_ejective,
    reef_u,
    sa_contraction,
    ti_contraction,
    siyu_contraction,
    vowel_before_ya,
    aw_contraction,
];

/// Align the front of `curr` with the front of `syllables`.
pub(super) fn next_step(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    if syllables.is_empty() || curr.is_empty() {
        return None;
    }
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(curr, syllables, opts))
}

fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of the front of `text` that spells `pattern`, ignoring case.
pub(super) fn ci_prefix_len(text: &str, pattern: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for p in pattern.chars() {
        let (_, c) = chars.next()?;
        if !chars_eq_ci(c, p) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

/// Byte lengths of consecutive `parts` spelled at the front of `text`.
fn match_seq(text: &str, parts: &[&str]) -> Option<Vec<usize>> {
    let mut at = 0;
    let mut lens = Vec::with_capacity(parts.len());
    for part in parts {
        let len = ci_prefix_len(&text[at..], part)?;
        lens.push(len);
        at += len;
    }
    Some(lens)
}

fn replace_first<'a>(syllables: &[&'a str], first: &'a str) -> Vec<&'a str> {
    let mut alt = syllables.to_vec();
    alt[0] = first;
    alt
}

fn leading_spaces(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    let trimmed = curr.trim_start_matches(' ');
    let skipped = curr.len() - trimmed.len();
    if skipped == 0 {
        return None;
    }
    let mut step = next_step(trimmed, syllables, opts)?;
    match step.pieces.first_mut() {
        Some(first) => *first += skipped,
        None => step.pieces.push(skipped),
    }
    Some(step)
}

// tsuk.kan -> tsu.kan
fn fused_boundary(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    let (&[first, second, ..], true) = (syllables, opts.fusion) else {
        return None;
    };
    FUSABLE_TAILS.iter().chain(FUSABLE_MIDS).find_map(|&shared| {
        let head = first.strip_suffix(shared)?;
        if !second.starts_with(shared) {
            return None;
        }
        let lens = match_seq(curr, &[head, second])?;
        Some(Step::new(lens, vec![0, 1]))
    })
}

// so.a.i.a.ä -> so.a.i.ä
fn ia_contraction(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &[first, "a", "ä"] = syllables else {
        return None;
    };
    if !first.ends_with('i') {
        return None;
    }
    let lens = match_seq(curr, &[first, "ä"])?;
    Some(Step::new(lens, vec![0, 1, 1]))
}

// fne.mo.o written fnemo-o
fn hyphenated(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    let first = syllables[0];
    if !curr.contains('-') || first.ends_with('-') {
        return None;
    }
    let with_hyphen = format!("{first}-");
    next_step(curr, &replace_first(syllables, &with_hyphen), opts)
}

// o.eng.l -> o.e.ngal
fn ng_coda_with_a(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &[first, second, ..] = syllables else {
        return None;
    };
    let head = first.strip_suffix("ng")?;
    let lens = match_seq(curr, &[head, "nga", second])?;
    Some(Step::new(vec![lens[0], lens[1] + lens[2]], vec![0, 1]))
}

// 'e.kxong.yä -> 'e.kxo.nge.yä
fn ng_coda_with_e(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &[first, second, ..] = syllables else {
        return None;
    };
    let head = first.strip_suffix("ng")?;
    let lens = match_seq(curr, &[head, "nge", second])?;
    Some(Step::new(lens, vec![0, 2]))
}

fn exact(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    ci_prefix_len(curr, syllables[0]).map(|len| Step::single(len, 1))
}

fn without_leading_space(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    let trimmed = syllables[0].strip_prefix(' ')?;
    next_step(curr, &replace_first(syllables, trimmed), opts)
}

// tì.ran written sìran
fn lenited(curr: &str, syllables: &[&str], opts: PassOptions) -> Option<Step> {
    if !opts.lenition {
        return None;
    }
    let lenited = apply_lenition(syllables[0]).next;
    ci_prefix_len(curr, &lenited).map(|len| Step::single(len, 1))
}

// sä.nu.i written senui
fn fronted_vowel(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    if !syllables[0].contains('ä') {
        return None;
    }
    let swapped = syllables[0].replace('ä', "e");
    ci_prefix_len(curr, &swapped).map(|len| Step::single(len, 1))
}

fn swap_initial_ejective(syllable: &str) -> Option<String> {
    EJECTIVE_SWAPS.iter().find_map(|(ejective, voiced)| {
        syllable
            .strip_prefix(ejective)
            .map(|rest| format!("{voiced}{rest}"))
    })
}

// txukx written dukx
fn voiced_ejective(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let swapped = swap_initial_ejective(syllables[0])?;
    ci_prefix_len(curr, &swapped).map(|len| Step::single(len, 1))
}

// txukx written txùkx or dùkx
fn reef_u(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let first = syllables[0];
    if !first.contains('u') {
        return None;
    }
    let voiced = swap_initial_ejective(first);
    let step = [Some(first), voiced.as_deref()]
        .into_iter()
        .flatten()
        .find_map(|candidate| ci_prefix_len(curr, &candidate.replace('u', "ù")))
        .map(|len| Step::single(len, 1));
    step
}

// sä.keyn.ven written skeynven
fn sa_contraction(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &["sä", second, ..] = syllables else {
        return None;
    };
    let lens = match_seq(curr, &["s", second])?;
    Some(Step::single(lens.iter().sum(), 2))
}

// tì.syì.maw.nun.'i written tsyìmawnun'i
fn ti_contraction(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &["tì", second, ..] = syllables else {
        return None;
    };
    let lens = match_seq(curr, &["t", second])?;
    Some(Step::single(lens.iter().sum(), 2))
}

fn siyu_contraction(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &["si", "yu", ..] = syllables else {
        return None;
    };
    ci_prefix_len(curr, "syu").map(|len| Step::single(len, 2))
}

// po.yä written peyä
fn vowel_before_ya(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &[first, second @ ("yä" | "ye")] = syllables else {
        return None;
    };
    let stem = first
        .strip_suffix('a')
        .or_else(|| first.strip_suffix('o'))?;
    let fronted = format!("{stem}e");
    let lens = match_seq(curr, &[&fronted, second])?;
    Some(Step::new(lens, vec![0, 1]))
}

// tsaw.ta written tsata
fn aw_contraction(curr: &str, syllables: &[&str], _: PassOptions) -> Option<Step> {
    let &[first, second, ..] = syllables else {
        return None;
    };
    let head = first.strip_suffix('w').filter(|_| first.ends_with("aw"))?;
    let lens = match_seq(curr, &[head, second])?;
    Some(Step::new(lens, vec![0, 1]))
}
