//! Input normalization: arbitrary text to a canonical digit-only string.

/// Maps a Persian (U+06F0–U+06F9) or Arabic-Indic (U+0660–U+0669)
/// decimal digit to its latin equivalent.
///
/// Kept as a literal per-code-point table so both supported digit
/// scripts stay auditable at a glance.
fn latin_digit(ch: char) -> Option<char> {
    match ch {
        // Persian (Extended Arabic-Indic) digits
        '\u{06F0}' => Some('0'),
        '\u{06F1}' => Some('1'),
        '\u{06F2}' => Some('2'),
        '\u{06F3}' => Some('3'),
        '\u{06F4}' => Some('4'),
        '\u{06F5}' => Some('5'),
        '\u{06F6}' => Some('6'),
        '\u{06F7}' => Some('7'),
        '\u{06F8}' => Some('8'),
        '\u{06F9}' => Some('9'),
        // Arabic-Indic digits
        '\u{0660}' => Some('0'),
        '\u{0661}' => Some('1'),
        '\u{0662}' => Some('2'),
        '\u{0663}' => Some('3'),
        '\u{0664}' => Some('4'),
        '\u{0665}' => Some('5'),
        '\u{0666}' => Some('6'),
        '\u{0667}' => Some('7'),
        '\u{0668}' => Some('8'),
        '\u{0669}' => Some('9'),
        _ => None,
    }
}

/// Normalizes raw input into a string of latin digits.
///
/// Absent input yields an empty string. Persian and Arabic-Indic digit
/// glyphs are mapped to their latin equivalents; every other
/// non-digit character (spaces, dashes, letters, punctuation,
/// untranslated scripts) is stripped. Surviving digits keep their
/// original left-to-right order.
///
/// The output length is unconstrained: length checks belong to the
/// structural gate, not here. Total and idempotent, never fails.
pub fn normalize(input: Option<&str>) -> String {
    let Some(raw) = input else {
        return String::new();
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed
        .chars()
        .filter_map(|ch| match latin_digit(ch) {
            Some(digit) => Some(digit),
            None if ch.is_ascii_digit() => Some(ch),
            None => None,
        })
        .collect()
}
