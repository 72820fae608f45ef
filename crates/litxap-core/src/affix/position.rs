use serde::{Deserialize, Serialize};

/// A split point inside a word: syllable index plus byte offset within it.
///
/// Serializes as a `[syllable, offset]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct InfixSite {
    pub syllable: usize,
    pub offset: usize,
}

impl InfixSite {
    pub const fn new(syllable: usize, offset: usize) -> Self {
        Self { syllable, offset }
    }
}

impl From<(usize, usize)> for InfixSite {
    fn from((syllable, offset): (usize, usize)) -> Self {
        Self { syllable, offset }
    }
}

impl From<InfixSite> for (usize, usize) {
    fn from(site: InfixSite) -> Self {
        (site.syllable, site.offset)
    }
}

/// The two infix sites of a verb. Pre-first and first position infixes go
/// into the first site, second position infixes into the second. Verbs with
/// a single site carry it twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfixPositions(pub [InfixSite; 2]);

impl InfixPositions {
    pub const fn new(first: InfixSite, second: InfixSite) -> Self {
        Self([first, second])
    }

    /// Both sites at the same place.
    pub const fn single(site: InfixSite) -> Self {
        Self([site, site])
    }

    pub fn first(&self) -> InfixSite {
        self.0[0]
    }

    pub fn second(&self) -> InfixSite {
        self.0[1]
    }

    pub fn is_single(&self) -> bool {
        self.0[0] == self.0[1]
    }

    /// Shift both sites right by `n` syllables, e.g. after prefixing.
    pub fn shifted(self, n: usize) -> Self {
        let [a, b] = self.0;
        Self([
            InfixSite::new(a.syllable + n, a.offset),
            InfixSite::new(b.syllable + n, b.offset),
        ])
    }

    /// Recover infix sites from a bracketed verb such as `t<0><1>ìr<2>an`.
    ///
    /// `<0>` may be absent (it always sits with `<1>`). Returns `None` when
    /// no `<1>` site lands inside the syllables.
    pub fn from_brackets<S: AsRef<str>>(bracketed: &str, syllables: &[S]) -> Option<Self> {
        let cleaned = bracketed.replacen("<0>", "", 1);
        let mut first_at = cleaned.find("<1>").map(|i| i as isize).unwrap_or(-1);
        let mut second_at = cleaned
            .find("<2>")
            .map(|i| i as isize - "<1>".len() as isize)
            .unwrap_or(-1);

        let mut first: Option<InfixSite> = None;
        let mut second: Option<InfixSite> = None;
        for (i, syllable) in syllables.iter().enumerate() {
            let len = syllable.as_ref().len() as isize;
            if first.is_none() && (0..len).contains(&first_at) {
                first = Some(InfixSite::new(i, first_at as usize));
            }
            if (0..len).contains(&second_at) {
                second = Some(InfixSite::new(i, second_at as usize));
                break;
            }
            first_at -= len;
            second_at -= len;
        }

        let first = first?;
        Some(Self::new(first, second.unwrap_or(first)))
    }
}
