pub mod config_ops;
pub mod line_ops;
pub mod word_ops;

/// Pad `text` with spaces to `width` terminal columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(text);
    if display_width < width {
        format!("{}{}", text, " ".repeat(width - display_width))
    } else {
        text.to_string()
    }
}

/// Render syllables with the stressed one in capitals, e.g. `tì.RAN`.
pub(crate) fn mark_stress<S: AsRef<str>>(syllables: &[S], stress: Option<usize>) -> String {
    syllables
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if Some(i) == stress {
                s.as_ref().to_uppercase()
            } else {
                s.as_ref().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// Stress index as printed: `-1` when unknown.
pub(crate) fn stress_label(stress: Option<usize>) -> String {
    stress.map_or_else(|| "-1".to_string(), |s| s.to_string())
}

/// Stress index as written to JSON: `-1` when unknown.
pub(crate) fn stress_value(stress: Option<usize>) -> i64 {
    stress.map_or(-1, |s| s as i64)
}
