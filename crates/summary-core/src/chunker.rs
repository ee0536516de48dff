//! Fixed-length text chunking.

/// Input ceiling of the summarization model, in characters.
pub const MODEL_INPUT_LIMIT: usize = 1024;

/// Headroom left below [`MODEL_INPUT_LIMIT`] for tokenizer overhead.
pub const CHUNK_SAFETY_MARGIN: usize = 50;

/// Chunk length used by the summary engine unless overridden.
pub const DEFAULT_CHUNK_LIMIT: usize = MODEL_INPUT_LIMIT - CHUNK_SAFETY_MARGIN;

/// Split `text` into consecutive pieces of at most `limit` characters.
///
/// Pieces never overlap and concatenating them gives back `text`. Boundaries
/// ignore words and sentences but always fall on a `char` boundary, so
/// multi-byte characters are never cut.
///
/// # Panics
///
/// Panics if `limit` is zero.
///
/// # Example
///
/// ```rust
/// let pieces = summary_core::chunk("abcdefg", 3);
/// assert_eq!(pieces, vec!["abc", "def", "g"]);
/// ```
pub fn chunk(text: &str, limit: usize) -> Vec<&str> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::with_capacity(text.len() / limit + 1);
    let mut rest = text;

    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(limit)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        chunks.push(head);
        rest = tail;
    }

    chunks
}
