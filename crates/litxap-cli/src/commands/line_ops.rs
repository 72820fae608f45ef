use std::fs;
use std::path::Path;
use std::process;

use litxap_line::{parse_phrase_toml, run_line, Line, PhraseTable};

use super::{mark_stress, pad};
use crate::dict_source::load_dictionary;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn line(text: &str, dict_file: &str, phrases_file: Option<&str>, json: bool) {
    let dict = die!(
        load_dictionary(Path::new(dict_file)),
        "Error loading dictionary {dict_file}: {}"
    );
    let phrases = match phrases_file {
        Some(file) => {
            let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(parse_phrase_toml(&content), "Error: {}")
        }
        None => PhraseTable::new(),
    };

    let line = die!(run_line(text, &dict, None, &phrases), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string(&line), "Error: {}"));
    } else {
        print!("{}", format_text(&line));
    }
}

/// One row per word: the word, each reading with its stress in capitals,
/// and where the reading came from.
pub fn format_text(line: &Line) -> String {
    let width = line
        .words()
        .map(|p| unicode_width::UnicodeWidthStr::width(p.raw.as_str()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for part in line.words() {
        if part.matches.is_empty() {
            out.push_str(&format!("{}?\n", pad(&part.raw, width)));
            continue;
        }
        for (i, m) in part.matches.iter().enumerate() {
            let label = if i == 0 { part.raw.as_str() } else { "" };
            let source = match &m.entry {
                Some(entry) => entry.to_string(),
                None => "(pronunciation)".to_string(),
            };
            out.push_str(&format!(
                "{}{}  {}\n",
                pad(label, width),
                pad(&mark_stress(&m.syllables, Some(m.stress)), width + 4),
                source
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use litxap_core::MemoryDictionary;

    use super::*;

    #[test]
    fn text_rows_are_aligned() {
        let dict: MemoryDictionary = [
            ("kaltxì".to_string(), "kal.*txì".parse().unwrap()),
            ("ma".to_string(), "ma".parse().unwrap()),
        ]
        .into_iter()
        .collect();
        let line = run_line("Kaltxì, ma tìran!", &dict, None, &PhraseTable::new()).unwrap();
        let text = format_text(&line);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Kaltxì  Kal.TXÌ"));
        assert!(rows[0].ends_with("kal.*txì"));
        assert!(rows[1].starts_with("ma      MA"));
        assert_eq!(rows[2], "tìran   ?");
    }
}
