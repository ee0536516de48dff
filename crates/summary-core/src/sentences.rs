//! Rule-based sentence boundary detection.

use std::collections::HashSet;

/// Abbreviations that never end a sentence (they always precede a name).
const TITLES: &[&str] = &["mr", "mrs", "ms", "dr", "prof", "st", "sr", "jr", "vs", "e.g", "i.e"];

/// Abbreviations that end a sentence only when the next word is capitalized.
const ABBREVIATIONS: &[&str] = &[
    "etc", "approx", "dept", "est", "inc", "ltd", "co", "corp", "no", "fig", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "a.m", "p.m", "u.s",
];

/// Splits text into sentences.
///
/// A sentence ends at a run of `.`, `!` or `?` (plus closing quotes or
/// brackets) that is followed by whitespace or the end of the text. A single
/// period after a known abbreviation is not a boundary. Returned sentences
/// are trimmed and borrow from the input.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    titles: HashSet<String>,
    abbreviations: HashSet<String>,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self {
            titles: TITLES.iter().map(|s| s.to_string()).collect(),
            abbreviations: ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SentenceTokenizer {
    /// Create a tokenizer with the built-in English abbreviation lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an abbreviation (without its final period, case-insensitive).
    pub fn with_abbreviation(mut self, abbreviation: &str) -> Self {
        self.abbreviations.insert(abbreviation.to_lowercase());
        self
    }

    /// Split `text` into trimmed, non-empty sentences in order.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (idx, ch) = chars[i];
            if !is_terminator(ch) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let single_period = ch == '.' && j == i + 1;
            while j < chars.len() && is_closing(chars[j].1) {
                j += 1;
            }

            let end = chars.get(j).map(|&(pos, _)| pos).unwrap_or(text.len());
            let at_break = chars.get(j).map_or(true, |&(_, c)| c.is_whitespace());

            if at_break {
                let following = chars[j..]
                    .iter()
                    .map(|&(_, c)| c)
                    .find(|c| !c.is_whitespace());
                let abbreviated =
                    single_period && self.is_abbreviation(&text[start..idx], following);

                if !abbreviated {
                    push_trimmed(&mut sentences, &text[start..end]);
                    start = end;
                }
            }

            i = j;
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }

    fn is_abbreviation(&self, before: &str, following: Option<char>) -> bool {
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(is_opening)
            .to_lowercase();

        if word.is_empty() {
            return false;
        }

        if self.titles.contains(&word) {
            return true;
        }

        self.abbreviations.contains(&word) && following.is_some_and(|c| !c.is_uppercase())
    }
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '”' | '’')
}

fn is_opening(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '(' | '[' | '“' | '‘')
}
