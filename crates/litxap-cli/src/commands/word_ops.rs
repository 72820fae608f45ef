use std::process;

use serde_json::json;

use litxap_core::{apply_lenition, match_syllables, romanize, DictionaryEntry};

use super::{mark_stress, pad, stress_label, stress_value};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn parse_entry(notation: &str) -> DictionaryEntry {
    die!(notation.parse::<DictionaryEntry>(), "Error parsing {notation:?}: {}")
}

pub fn generate(notation: &str, json: bool) {
    let entry = parse_entry(notation);
    let form = die!(entry.generate(), "Error: {}");
    if json {
        let out = json!({
            "syllables": form.syllables,
            "stress": stress_value(form.stress),
            "rootOffset": form.root_offset,
        });
        println!("{out}");
        return;
    }
    println!("{}", mark_stress(&form.syllables, form.stress));
    println!(
        "stress={} root_offset={}",
        stress_label(form.stress),
        form.root_offset
    );
}

pub fn match_word(word: &str, notation: &str, json: bool) {
    let entry = parse_entry(notation);
    let form = die!(entry.generate(), "Error: {}");
    let res = match_syllables(word, &form.syllables, Some(form.root_offset), form.stress);

    if json {
        let out = match &res {
            Some(m) => json!({ "syllables": m.syllables, "stress": stress_value(m.stress) }),
            None => serde_json::Value::Null,
        };
        println!("{out}");
        return;
    }
    match res {
        Some(m) => {
            println!("{}", mark_stress(&m.syllables, m.stress));
            println!("stress={}", stress_label(m.stress));
        }
        None => {
            eprintln!(
                "{word:?} does not match {}",
                form.syllables.join(".")
            );
            process::exit(1);
        }
    }
}

pub fn romanize_cmd(ipa: &str, json: bool) {
    let res = romanize(ipa);
    if json {
        let alternatives: Vec<Vec<&[String]>> = res
            .alternatives
            .iter()
            .map(|alt| alt.words.iter().map(|w| w.syllables.as_slice()).collect())
            .collect();
        let stress: Vec<Vec<i64>> = res
            .stress_markers()
            .into_iter()
            .map(|alt| alt.into_iter().map(stress_value).collect())
            .collect();
        println!("{}", json!({ "alternatives": alternatives, "stress": stress }));
        return;
    }
    if res.alternatives.is_empty() {
        println!("(empty)");
        return;
    }
    for (i, alt) in res.alternatives.iter().enumerate() {
        let words: Vec<String> = alt
            .words
            .iter()
            .map(|w| mark_stress(&w.syllables, w.stress))
            .collect();
        let stresses: Vec<String> = alt.words.iter().map(|w| stress_label(w.stress)).collect();
        println!(
            "#{:<2} {} [{}]",
            i + 1,
            pad(&words.join(" "), 24),
            stresses.join(",")
        );
    }
}

pub fn lenite(word: &str) {
    let res = apply_lenition(word);
    match res.mutation {
        Some(mutation) => println!("{}  ({mutation})", res.next),
        None => println!("{}  (unchanged)", res.next),
    }
}
