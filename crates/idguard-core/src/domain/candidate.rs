/// Trims the characters a browser's `String.prototype.trim` strips.
///
/// This is narrower than `str::trim`: U+0085 stays, U+FEFF goes.
pub fn normalize_candidate(raw: &str) -> &str {
    raw.trim_matches(is_trimmed)
}

fn is_trimmed(ch: char) -> bool {
    matches!(
        ch,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
