//! Text helpers for questions and generated answers.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Normalize generated answer text.
///
/// Collapses all runs of whitespace into single spaces, trims the ends and
/// keeps at most `max_tokens` whitespace-separated tokens. Returns `None`
/// when nothing is left, so callers can treat it as malformed output.
pub fn normalize_answer(raw: &str, max_tokens: usize) -> Option<String> {
    let normalized = raw
        .split_whitespace()
        .take(max_tokens)
        .collect::<Vec<_>>()
        .join(" ");

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
