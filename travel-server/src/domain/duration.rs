//! Trip duration parsing.
//!
//! The backend sends durations as free-form strings like `"6h 7 min"`.
//! Spacing varies and the minute unit has been observed as both `min` and
//! `m`, so parsing is byte-level and tolerant rather than format-strict.

/// Parse a duration string like `"6h 7 min"` into total minutes.
///
/// Accepted shapes: `<H>h <M> min`, `<H>h <M>m`, and the same with any
/// amount of whitespace between tokens (including none). Returns `None`
/// for anything else; callers decide the fallback (the fastest sort treats
/// unparsable durations as 0 minutes).
///
/// # Examples
///
/// ```
/// use travel_server::domain::parse_duration_minutes;
///
/// assert_eq!(parse_duration_minutes("6h 7 min"), Some(367));
/// assert_eq!(parse_duration_minutes("2h 15m"), Some(135));
/// assert_eq!(parse_duration_minutes("2h20min"), Some(140));
/// assert_eq!(parse_duration_minutes("soon"), None);
/// ```
pub fn parse_duration_minutes(s: &str) -> Option<u32> {
    let bytes = s.trim().as_bytes();
    let mut pos = 0;

    let hours = take_number(bytes, &mut pos)?;
    skip_whitespace(bytes, &mut pos);

    if bytes.get(pos).copied() != Some(b'h') {
        return None;
    }
    pos += 1;
    skip_whitespace(bytes, &mut pos);

    let minutes = take_number(bytes, &mut pos)?;
    skip_whitespace(bytes, &mut pos);

    // Minute unit: "min", "m", or nothing. Anything else is garbage.
    match &bytes[pos..] {
        b"" | b"m" | b"min" => {}
        _ => return None,
    }

    if minutes >= 60 {
        // "1h 75 min" is not a duration the backend produces; reject rather
        // than guess.
        return None;
    }

    Some(hours * 60 + minutes)
}

/// Consume a run of ASCII digits at `pos`, returning the parsed value.
fn take_number(bytes: &[u8], pos: &mut usize) -> Option<u32> {
    let start = *pos;
    let mut value: u32 = 0;

    while let Some(&b) = bytes.get(*pos) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
        *pos += 1;
    }

    if *pos == start { None } else { Some(value) }
}

fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
    while bytes.get(*pos).is_some_and(|b| b.is_ascii_whitespace()) {
        *pos += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_format() {
        assert_eq!(parse_duration_minutes("6h 7 min"), Some(367));
        assert_eq!(parse_duration_minutes("2h 20 min"), Some(140));
        assert_eq!(parse_duration_minutes("0h 45 min"), Some(45));
    }

    #[test]
    fn short_minute_unit() {
        // Observed variant with no space before a bare "m".
        assert_eq!(parse_duration_minutes("2h 15m"), Some(135));
        assert_eq!(parse_duration_minutes("2h 15 m"), Some(135));
    }

    #[test]
    fn whitespace_variations() {
        assert_eq!(parse_duration_minutes("2h20min"), Some(140));
        assert_eq!(parse_duration_minutes("  2h   20   min  "), Some(140));
        assert_eq!(parse_duration_minutes("2 h 20 min"), Some(140));
    }

    #[test]
    fn missing_unit_is_tolerated() {
        assert_eq!(parse_duration_minutes("2h 20"), Some(140));
    }

    #[test]
    fn unparsable_inputs() {
        assert_eq!(parse_duration_minutes(""), None);
        assert_eq!(parse_duration_minutes("soon"), None);
        assert_eq!(parse_duration_minutes("45 min"), None);
        assert_eq!(parse_duration_minutes("2h"), None);
        assert_eq!(parse_duration_minutes("2h xx min"), None);
        assert_eq!(parse_duration_minutes("2h 20 minutes"), None);
    }

    #[test]
    fn overflowing_minutes_rejected() {
        assert_eq!(parse_duration_minutes("1h 75 min"), None);
    }

    #[test]
    fn large_hours() {
        assert_eq!(parse_duration_minutes("14h 45 min"), Some(885));
    }
}
