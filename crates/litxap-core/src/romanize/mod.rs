//! IPA to Na'vi orthography.
//!
//! Dictionary sources often carry an IPA transcription only. Romanizing it
//! yields syllables the matcher can align against, for words that have no
//! dictionary entry of their own.
//!
//! Transcriptions look like `tɪ.ˈfmɛ.tok̚`; several words are separated by
//! spaces and alternative pronunciations by `] or [`.

use serde::Serialize;

const COMBINING_TIE: char = '\u{361}';
const COMBINING_DOT_BELOW: char = '\u{323}';
const COMBINING_NO_RELEASE: char = '\u{31A}';

/// Consonants that may follow `ts`, `f` or `s` in an onset cluster.
const CLUSTER_SONORANTS: &[char] = &['l', 'ɾ', 'm', 'n', 'ŋ', 'w', 'j'];
const PLOSIVES: &[char] = &['p', 't', 'k'];
const SIMPLE_ONSETS: &[char] = &[
    'ʔ', 'l', 'ɾ', 'h', 'm', 'n', 'ŋ', 'v', 'w', 'j', 'z', 'b', 'd', 'g',
];
const MARKS: &[char] = &['·', 'ˈ', 'ˌ'];

/// All pronunciations of a transcription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Romanization {
    pub alternatives: Vec<Pronunciation>,
}

/// One pronunciation, possibly of several words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pronunciation {
    pub words: Vec<RomanizedWord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RomanizedWord {
    pub syllables: Vec<String>,
    /// First syllable marked with `ˈ`, if any.
    pub stress: Option<usize>,
}

impl Romanization {
    /// Stress of every word, grouped by alternative.
    pub fn stress_markers(&self) -> Vec<Vec<Option<usize>>> {
        self.alternatives
            .iter()
            .map(|alt| alt.words.iter().map(|w| w.stress).collect())
            .collect()
    }

    /// The first word of the first pronunciation.
    pub fn first_word(&self) -> Option<&RomanizedWord> {
        self.alternatives.first()?.words.first()
    }
}

/// Romanize an IPA transcription.
pub fn romanize(ipa: &str) -> Romanization {
    let ipa = ipa.replace('ʊ', "u").replace('õ', "o");
    let ipa = ipa.trim();
    if ipa.is_empty() {
        return Romanization::default();
    }

    let mut alternatives = vec![Pronunciation::default()];
    for token in ipa.split(' ') {
        let token = token.trim_matches(|c| c == '[' || c == ']');
        if token == "or" {
            alternatives.push(Pronunciation::default());
            continue;
        }
        if token.is_empty() {
            continue;
        }
        if let Some(alt) = alternatives.last_mut() {
            alt.words.push(romanize_word(token));
        }
    }

    Romanization { alternatives }
}

fn romanize_word(word: &str) -> RomanizedWord {
    let mut stress = None;
    let syllables = word
        .split('.')
        .enumerate()
        .map(|(i, syllable)| {
            if stress.is_none() && syllable.contains('ˈ') {
                stress = Some(i);
            }
            let chars: Vec<char> = syllable.chars().filter(|c| !MARKS.contains(c)).collect();
            romanize_syllable(&chars)
        })
        .collect();

    RomanizedWord { syllables, stress }
}

fn romanize_syllable(s: &[char]) -> String {
    let mut out = String::new();
    let rest = onset(s, &mut out);
    let rest = match nucleus(rest, &mut out) {
        Some(rest) => rest,
        None => return out,
    };
    coda(rest, &mut out);
    out
}

fn onset<'a>(s: &'a [char], out: &mut String) -> &'a [char] {
    match s {
        ['t', 'ʃ', rest @ ..] => {
            out.push_str("ch");
            rest
        }
        ['t', COMBINING_TIE, 's', rest @ ..] => {
            out.push_str("ts");
            cluster(rest, out)
        }
        [c @ ('f' | 's'), rest @ ..] => {
            out.push(*c);
            cluster(rest, out)
        }
        [c, rest @ ..] if PLOSIVES.contains(c) => plosive(*c, rest, out),
        [c, COMBINING_DOT_BELOW, ..] if *c == 'l' || *c == 'ɾ' || *c == 'r' => s,
        [c, rest @ ..] if SIMPLE_ONSETS.contains(c) => {
            out.push_str(phoneme(*c));
            rest
        }
        ['ʃ', rest @ ..] => {
            out.push_str("sh");
            rest
        }
        ['ʒ', rest @ ..] => rest,
        _ => s,
    }
}

/// Second consonant after `ts`, `f` or `s`.
fn cluster<'a>(s: &'a [char], out: &mut String) -> &'a [char] {
    match s {
        [c, rest @ ..] if PLOSIVES.contains(c) => plosive(*c, rest, out),
        [c, rest @ ..] if CLUSTER_SONORANTS.contains(c) => {
            out.push_str(phoneme(*c));
            rest
        }
        _ => s,
    }
}

fn plosive<'a>(c: char, rest: &'a [char], out: &mut String) -> &'a [char] {
    out.push(c);
    match rest {
        ['\'', rest @ ..] => {
            out.push('x');
            rest
        }
        _ => rest,
    }
}

/// Returns `None` after a pseudovowel, which never takes a coda.
fn nucleus<'a>(s: &'a [char], out: &mut String) -> Option<&'a [char]> {
    match s {
        [v, glide @ ('j' | 'w'), rest @ ..] => {
            out.push_str(diphthong(*v, *glide));
            Some(rest)
        }
        ['l', COMBINING_DOT_BELOW, ..] => {
            out.push_str("ll");
            None
        }
        ['r', COMBINING_DOT_BELOW, ..] => {
            out.push_str("rr");
            None
        }
        [v, rest @ ..] => {
            out.push_str(phoneme(*v));
            Some(rest)
        }
        [] => Some(s),
    }
}

fn coda(s: &[char], out: &mut String) {
    match s {
        [] => {}
        ['s', ..] => out.push_str("sss"),
        ['k', COMBINING_NO_RELEASE] => out.push('k'),
        ['p', COMBINING_NO_RELEASE] => out.push('p'),
        ['t', COMBINING_NO_RELEASE] => out.push('t'),
        ['ʔ', COMBINING_NO_RELEASE] => out.push('\''),
        ['k', _, ..] => out.push_str("kx"),
        ['p', '\''] => out.push_str("px"),
        ['t', '\''] => out.push_str("tx"),
        [c] => out.push_str(phoneme(*c)),
        _ => {}
    }
}

fn diphthong(vowel: char, glide: char) -> &'static str {
    match (vowel, glide) {
        ('a', 'w') => "aw",
        ('a', 'j') => "ay",
        ('ɛ', 'w') => "ew",
        ('ɛ', 'j') => "ey",
        _ => "",
    }
}

fn phoneme(c: char) -> &'static str {
    match c {
        'a' => "a",
        'i' => "i",
        'ɪ' => "ì",
        'o' => "o",
        'ɛ' => "e",
        'u' => "u",
        'æ' => "ä",
        't' => "t",
        'p' => "p",
        'k' => "k",
        'ʔ' => "'",
        'n' => "n",
        'l' => "l",
        's' => "s",
        'ɾ' | 'r' => "r",
        'j' => "y",
        'm' => "m",
        'v' => "v",
        'w' => "w",
        'h' => "h",
        'ŋ' => "ng",
        'z' => "z",
        'f' => "f",
        'b' => "b",
        'd' => "d",
        'g' => "g",
        'ʃ' => "sh",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ipa: &str) -> Vec<Vec<Vec<String>>> {
        romanize(ipa)
            .alternatives
            .into_iter()
            .map(|alt| alt.words.into_iter().map(|w| w.syllables).collect())
            .collect()
    }

    fn single(ipa: &str) -> (String, Option<usize>) {
        let res = romanize(ipa);
        assert_eq!(res.alternatives.len(), 1, "{ipa}");
        let word = res.first_word().unwrap();
        (word.syllables.join("."), word.stress)
    }

    #[test]
    fn one_syllable() {
        assert_eq!(single("ɛ"), ("e".into(), None));
        assert_eq!(single("ʔawk'"), ("'awkx".into(), None));
        assert_eq!(single("fko"), ("fko".into(), None));
        assert_eq!(single("mo"), ("mo".into(), None));
        assert_eq!(single("t'on"), ("txon".into(), None));
        assert_eq!(single("t͡sam"), ("tsam".into(), None));
        assert_eq!(single("fpom"), ("fpom".into(), None));
        assert_eq!(single("po"), ("po".into(), None));
        assert_eq!(single("sk'awŋ"), ("skxawng".into(), None));
    }

    #[test]
    fn pseudovowels() {
        assert_eq!(single("kr\u{323}"), ("krr".into(), None));
        assert_eq!(single("k'l\u{323}"), ("kxll".into(), None));
    }

    #[test]
    fn multi_syllable() {
        assert_eq!(single("tɪ.ˈfmɛ.tok̚"), ("tì.fme.tok".into(), Some(1)));
        assert_eq!(single("u.ˈvan"), ("u.van".into(), Some(1)));
        assert_eq!(single("ˈu.ɾan"), ("u.ran".into(), Some(0)));
        assert_eq!(single("ˈt·a.ɾ·on"), ("ta.ron".into(), Some(0)));
        assert_eq!(single("ˈʔɛ.koŋ"), ("'e.kong".into(), Some(0)));
        assert_eq!(single("ɛ.ˈjawɾ"), ("e.yawr".into(), Some(1)));
    }

    #[test]
    fn flexible_stress() {
        let cases = [
            ("aj.ˈfo] or [ˈaj.fo", ["ay", "fo"], [Some(1), Some(0)]),
            ("ˈɪ.læ] or [ɪ.ˈlæ", ["ì", "lä"], [Some(0), Some(1)]),
            ("ˈmɪ.fa] or [mɪ.ˈfa", ["mì", "fa"], [Some(0), Some(1)]),
            ("ˈt͡sa.kɛm] or [t͡sa.ˈkɛm", ["tsa", "kem"], [Some(0), Some(1)]),
            ("t͡sa.ˈt͡sɛŋ] or [ˈt͡sa.t͡sɛŋ", ["tsa", "tseng"], [Some(1), Some(0)]),
        ];
        for (ipa, syllables, stress) in cases {
            let res = romanize(ipa);
            let syllables: Vec<String> = syllables.iter().map(|s| s.to_string()).collect();
            assert_eq!(words(ipa), vec![vec![syllables.clone()], vec![syllables]], "{ipa}");
            assert_eq!(res.stress_markers(), vec![vec![stress[0]], vec![stress[1]]], "{ipa}");
        }
    }

    #[test]
    fn alternative_pronunciations() {
        let res = romanize("tɪ.sjɪ.maw.nʊn.ˈʔi] or [t͡sjɪ.maw.nʊn.ˈʔi");
        assert_eq!(
            words("tɪ.sjɪ.maw.nʊn.ˈʔi] or [t͡sjɪ.maw.nʊn.ˈʔi"),
            vec![
                vec![vec!["tì", "syì", "maw", "nun", "'i"]],
                vec![vec!["tsyì", "maw", "nun", "'i"]],
            ]
        );
        assert_eq!(res.stress_markers(), vec![vec![Some(4)], vec![Some(3)]]);

        assert_eq!(
            words("nɪ.aw.ˈno.mʊm] or [naw.ˈno.mʊm"),
            vec![
                vec![vec!["nì", "aw", "no", "mum"]],
                vec![vec!["naw", "no", "mum"]],
            ]
        );
        assert_eq!(
            words("nɪ.aj.ˈwɛŋ] or [naj.ˈwɛŋ"),
            vec![vec![vec!["nì", "ay", "weng"]], vec![vec!["nay", "weng"]]]
        );
        assert_eq!(
            words("tɪ.sæ.ˈfpɪl.jɛwn] or [t͡sæ.ˈfpɪl.jɛwn"),
            vec![
                vec![vec!["tì", "sä", "fpìl", "yewn"]],
                vec![vec!["tsä", "fpìl", "yewn"]],
            ]
        );
    }

    #[test]
    fn secondary_stress_mark_is_not_a_word_break() {
        let res = romanize("ˈnɪ.ˌju");
        assert_eq!(res.alternatives.len(), 1);
        assert_eq!(res.alternatives[0].words.len(), 1);
        assert_eq!(single("ˈnɪ.ˌju"), ("nì.yu".into(), Some(0)));
    }

    #[test]
    fn multiple_words() {
        let res = romanize("ˈut.ɾa.ja ˈmok.ɾi");
        assert_eq!(
            words("ˈut.ɾa.ja ˈmok.ɾi"),
            vec![vec![vec!["ut", "ra", "ya"], vec!["mok", "ri"]]]
        );
        assert_eq!(res.stress_markers(), vec![vec![Some(0), Some(0)]]);

        let res = romanize("t͡sa.ˈhɛjl s·i");
        assert_eq!(words("t͡sa.ˈhɛjl s·i"), vec![vec![vec!["tsa", "heyl"], vec!["si"]]]);
        assert_eq!(res.stress_markers(), vec![vec![Some(1), None]]);

        let res = romanize("ˈnɪ.ˌju ˈjoɾ.kɪ");
        assert_eq!(words("ˈnɪ.ˌju ˈjoɾ.kɪ"), vec![vec![vec!["nì", "yu"], vec!["yor", "kì"]]]);
        assert_eq!(res.stress_markers(), vec![vec![Some(0), Some(0)]]);

        let res = romanize("t͡sawl sl·u");
        assert_eq!(words("t͡sawl sl·u"), vec![vec![vec!["tsawl"], vec!["slu"]]]);
        assert_eq!(res.stress_markers(), vec![vec![None, None]]);
    }

    #[test]
    fn reef_sounds() {
        assert_eq!(single("tʃa"), ("cha".into(), None));
        assert_eq!(single("ʃa"), ("sha".into(), None));
        assert_eq!(single("ˈvõ.væʔ"), ("vo.vä'".into(), Some(0)));
        assert_eq!(single("ʊ"), ("u".into(), None));
    }

    #[test]
    fn empty() {
        assert_eq!(romanize(""), Romanization::default());
        assert_eq!(romanize("   "), Romanization::default());
        assert_eq!(romanize("").first_word(), None);
    }
}
