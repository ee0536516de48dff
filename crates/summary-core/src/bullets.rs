//! Bullet-point rendering of raw transcript text.

/// Glyph placed in front of every bullet line.
pub const BULLET_MARKER: &str = "•";

/// Render `text` as one bullet line per sentence.
///
/// Line breaks become spaces, then the text is cut on the literal `". "`.
/// Each fragment is trimmed, empty fragments are dropped, and the rest are
/// prefixed with [`BULLET_MARKER`] and joined with `\n`.
///
/// This is deliberately cruder than [`SentenceTokenizer`](crate::SentenceTokenizer)
/// and is not idempotent: feed it raw text, never its own output.
///
/// # Example
///
/// ```rust
/// assert_eq!(
///     summary_core::bullets("Hello world. Foo bar. "),
///     "• Hello world\n• Foo bar"
/// );
/// ```
pub fn bullets(text: &str) -> String {
    let normalized = text.replace('\n', " ");

    normalized
        .split(". ")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{} {}", BULLET_MARKER, fragment))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_trailing_empty_fragment() {
        assert_eq!(bullets("Hello world. Foo bar. "), "• Hello world\n• Foo bar");
    }

    #[test]
    fn test_final_period_kept_without_trailing_space() {
        assert_eq!(bullets("One. Two."), "• One\n• Two.");
    }

    #[test]
    fn test_newlines_become_spaces() {
        assert_eq!(
            bullets("First point.\nSecond point.\nThird"),
            "• First point\n• Second point\n• Third"
        );
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(bullets(""), "");
        assert_eq!(bullets("   \n  "), "");
        assert_eq!(bullets(". . "), "");
    }

    #[test]
    fn test_question_marks_are_not_delimiters() {
        assert_eq!(bullets("Ready? Yes. Go"), "• Ready? Yes\n• Go");
    }
}
