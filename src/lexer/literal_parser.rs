//! Literal decoding

/// Decodes the body of a string literal (without its quotes).
///
/// Recognised escapes are `\n`, `\t`, `\"`, `\\` and `\0`; any other escaped
/// character is kept as-is without the backslash.
pub fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('"') => result.push('"'),
                Some('\\') => result.push('\\'),
                Some('0') => result.push('\0'),
                Some(c) => result.push(c),
                None => {}
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Parses a run of ASCII digits; `None` when it does not fit in `i64`.
pub fn parse_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Parses `digits.digits`
pub fn parse_float(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}
