//! Word-initial consonant softening.

/// Result of leniting one syllable or word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenition {
    /// The mutation applied, e.g. `"ts→s"`, or `None` if the onset is stable.
    pub mutation: Option<String>,
    /// The lenited text.
    pub next: String,
}

/// Onset rewrites, longest onset first.
const RULES: &[(&str, &str)] = &[
    ("ts", "s"),
    ("tx", "t"),
    ("kx", "k"),
    ("px", "p"),
    ("t", "s"),
    ("k", "h"),
    ("p", "f"),
];

/// Lenite the onset of `current`.
pub fn apply_lenition(current: &str) -> Lenition {
    if let Some((from, to, rest)) = RULES
        .iter()
        .find_map(|(from, to)| current.strip_prefix(from).map(|rest| (from, to, rest)))
    {
        return Lenition {
            mutation: Some(format!("{from}→{to}")),
            next: format!("{to}{rest}"),
        };
    }

    // The glottal stop drops, except before a pseudovowel.
    if let Some(rest) = current.strip_prefix('\'') {
        if let Some(vowel) = rest.chars().next().filter(|c| *c != 'l' && *c != 'r') {
            return Lenition {
                mutation: Some(format!("'{vowel}→{vowel}")),
                next: rest.to_string(),
            };
        }
    }

    Lenition {
        mutation: None,
        next: current.to_string(),
    }
}
