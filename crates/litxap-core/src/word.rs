use crate::entry::DictionaryEntry;
use crate::error::MorphError;
use crate::matcher::{match_syllables, SurfaceMatch};

/// Split a written word along the canonical form of `entry`.
///
/// `Ok(None)` means the entry does not explain this spelling.
pub fn run_word(word: &str, entry: &DictionaryEntry) -> Result<Option<SurfaceMatch>, MorphError> {
    let form = entry.generate()?;
    Ok(match_syllables(
        word,
        &form.syllables,
        Some(form.root_offset),
        form.stress,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(raw: &str, notation: &str) -> Option<(String, Option<usize>)> {
        let entry: DictionaryEntry = notation.parse().unwrap();
        run_word(raw, &entry)
            .unwrap()
            .map(|m| (m.syllables.join("."), m.stress))
    }

    fn ok(syllables: &str, stress: usize) -> Option<(String, Option<usize>)> {
        Some((syllables.to_string(), Some(stress)))
    }

    #[test]
    fn uninflected() {
        assert_eq!(run("Fmetok", "fme.tok"), ok("Fme.tok", 0));
        assert_eq!(run("tanlokxe", "txan.lo.*kxe"), ok("tan.lo.kxe", 2));
    }

    #[test]
    fn inflected() {
        assert_eq!(
            run("Tìtusìranìri", "t·ì.*r·an: tì- <us> -ìri"),
            ok("Tì.tu.sì.ra.nì.ri", 3)
        );
        assert_eq!(run("fneUvanur", "u.*van: fne- -ur"), ok("fne.U.va.nur", 2));
        assert_eq!(
            run("täpeykìyeverkeiup", "t·er.k·up: <äp,eyk,ìyev,ei>"),
            ok("tä.pey.kì.ye.ver.ke.i.up", 4)
        );
        assert_eq!(run("tìlamteri", "tì.*lam: -teri"), ok("tì.lam.te.ri", 1));
        assert_eq!(run("ayskxe", "tskxe: ay-"), ok("ay.skxe", 1));
    }

    #[test]
    fn fused_prefix() {
        assert_eq!(run("tsukanom", "k·a.n·om: tsuk-"), ok("tsu.ka.nom", 1));
        assert_eq!(run("tsukkanom", "k·a.n·om: tsuk-"), ok("tsuk.ka.nom", 1));
    }

    #[test]
    fn spaced_entry() {
        assert_eq!(
            run("tskxekeng sìsyi", "tskxe.keng. s··i: <ìsy>"),
            ok("tskxe.keng. sì.syi", 0)
        );
    }

    #[test]
    fn wrong_entry() {
        assert_eq!(run("kaltxì", "fme.tok"), None);
    }

    #[test]
    fn broken_entry_is_an_error() {
        let mut entry: DictionaryEntry = "tì.ran: <us>".parse().unwrap();
        entry.infix_pos = Some(crate::affix::InfixPositions::single(
            crate::affix::InfixSite::new(5, 0),
        ));
        assert!(run_word("tìran", &entry).is_err());
    }
}
