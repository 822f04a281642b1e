//! Small helpers shared across the application.

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes with an ellipsis and byte
/// count appended, so article bodies don't flood the log. The cut backs up
/// to the nearest char boundary, since article text routinely carries
/// multibyte characters (curly quotes, currency signs).
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}
