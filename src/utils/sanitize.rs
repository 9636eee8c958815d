//! Utilities for sanitizing page text before it reaches the logs.

/// Removes control characters, keeping tab, newline and carriage return.
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Builds a short single-line preview of page text for diagnostics.
///
/// Whitespace runs are collapsed to one space, control characters are removed,
/// and the result is cut to at most `max_chars` characters (not bytes, so
/// multi-byte text is never split).
pub fn text_preview(text: &str, max_chars: usize) -> String {
    let sanitized = sanitize_text(text);
    let collapsed = sanitized.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().take(max_chars).collect()
}
