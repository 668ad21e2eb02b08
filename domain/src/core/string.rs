//! String utilities for the domain layer.

/// Marker appended to output cut by [`truncate_output`].
pub const TRUNCATION_MARKER: &str = "\n... (output truncated)";

/// Longest prefix of `s` that fits in `max_len` bytes and ends on a char boundary.
pub fn prefix_at_boundary(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Cap captured process output at `max_len` bytes (UTF-8 safe).
///
/// Output that fits is returned unchanged; otherwise the kept prefix is
/// followed by [`TRUNCATION_MARKER`].
pub fn truncate_output(mut output: String, max_len: usize) -> String {
    if output.len() <= max_len {
        return output;
    }
    let end = prefix_at_boundary(&output, max_len).len();
    output.truncate(end);
    output.push_str(TRUNCATION_MARKER);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_ascii() {
        assert_eq!(prefix_at_boundary("hello", 10), "hello");
        assert_eq!(prefix_at_boundary("hello world", 5), "hello");
    }

    #[test]
    fn test_prefix_multibyte() {
        // "日本語" is 9 bytes, 3 per char
        assert_eq!(prefix_at_boundary("日本語", 9), "日本語");
        assert_eq!(prefix_at_boundary("日本語", 8), "日本");
        assert_eq!(prefix_at_boundary("日本語", 2), "");
    }

    #[test]
    fn test_truncate_output_fits() {
        assert_eq!(truncate_output("abc".to_string(), 3), "abc");
    }

    #[test]
    fn test_truncate_output_adds_marker() {
        let out = truncate_output("abcdef".to_string(), 4);
        assert_eq!(out, format!("abcd{}", TRUNCATION_MARKER));

        let out = truncate_output("🦀🦀".to_string(), 5);
        assert_eq!(out, format!("🦀{}", TRUNCATION_MARKER));
    }
}
