use super::{Line, LinePart};

/// Splits a compound like `aean-na-pay` into its parts.
const NA_JOINER: &str = "-na-";

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-'
}

/// Split `text` into alternating word and non-word parts.
///
/// A word written `lookup|raw` is displayed as `raw` but looked up as
/// `lookup`, for spellings a dictionary cannot resolve on its own.
pub fn parse_line(text: &str) -> Line {
    let text = text.replace(['’', '‘'], "'");
    let mut parts = Vec::with_capacity(text.len() / 5 + 1);
    let mut word_mode = false;
    let mut start = 0;
    let mut pipe = None;

    for (pos, c) in text.char_indices() {
        if c == '|' {
            pipe = Some(pos);
            continue;
        }
        if is_word_char(c) != word_mode {
            flush(&text[start..pos], word_mode, pipe.map(|p| p - start), &mut parts);
            start = pos;
            pipe = None;
            word_mode = !word_mode;
        }
    }
    flush(&text[start..], word_mode, pipe.map(|p| p - start), &mut parts);

    Line(parts)
}

fn flush(segment: &str, is_word: bool, pipe: Option<usize>, parts: &mut Vec<LinePart>) {
    if segment.is_empty() {
        return;
    }
    if !is_word {
        parts.push(LinePart::text(segment));
        return;
    }

    if let Some((before, after)) = segment.split_once(NA_JOINER) {
        parts.extend([
            LinePart::word(before),
            LinePart::text("-"),
            LinePart::word("na"),
            LinePart::text("-"),
            LinePart::word(after),
        ]);
        return;
    }

    let split = pipe.map(|at| (&segment[..at], &segment[at + 1..]));
    match split {
        Some((lookup, raw)) if !lookup.is_empty() && !raw.is_empty() => parts.push(LinePart {
            lookup: Some(lookup.to_string()),
            ..LinePart::word(raw)
        }),
        // A pipe with nothing on one side is dropped.
        Some((lookup, raw)) => parts.push(LinePart::word(if raw.is_empty() { lookup } else { raw })),
        None => parts.push(LinePart::word(segment)),
    }
}
