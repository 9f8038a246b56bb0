//! Word-boundary tokenizer for chatterbot input.
//!
//! Splits text wherever the character class changes between adjacent
//! characters (letters, digits, everything else), so words, digit runs,
//! punctuation runs and whitespace runs each become their own token.
//! A single space between two letters does not split. The text is
//! uppercased before classification, so only `A`..`Z` count as letters.

use std::ops::Range;

use serde::Serialize;
use tracing::{debug, trace};

/// Class of a single byte of the uppercased text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(byte: u8) -> Self {
        match byte {
            b'A'..=b'Z' => CharClass::Uppercase,
            b'0'..=b'9' => CharClass::Digit,
            _ => CharClass::Other,
        }
    }

    pub fn is_letter(self) -> bool {
        self == CharClass::Uppercase
    }

    pub fn is_digit(self) -> bool {
        self == CharClass::Digit
    }
}

fn letter_at(text: &[u8], index: usize) -> bool {
    text.get(index).is_some_and(|&b| CharClass::of(b).is_letter())
}

/// Returns whether a word boundary exists immediately before `position`.
///
/// `text` must already be uppercased. `position` may equal `text.len()`,
/// which is always a boundary.
pub fn is_boundary(text: &[u8], position: usize) -> bool {
    if position == 0 {
        return false;
    }

    if position >= text.len() {
        return true;
    }

    let current = text[position];
    let previous = text[position - 1];

    if current == b' ' && letter_at(text, position - 1) && letter_at(text, position + 1) {
        return false;
    }

    if position > 1 && previous == b' ' && letter_at(text, position - 2) && letter_at(text, position) {
        return false;
    }

    let current = CharClass::of(current);
    let previous = CharClass::of(previous);

    if current.is_letter() && !previous.is_letter() {
        return true;
    }

    if !current.is_letter() && previous.is_letter() {
        return true;
    }

    if current.is_digit() != previous.is_digit() {
        return true;
    }

    false
}

/// Byte ranges of each token in `text`, which must already be uppercased.
fn boundary_spans(text: &[u8]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();

    if text.is_empty() {
        return spans;
    }

    let mut start = 0;
    let mut offset = 0;

    loop {
        let rest = &text[start..];

        if is_boundary(rest, offset) {
            trace!(start, len = offset, "token");
            spans.push(start..start + offset);

            if offset == rest.len() {
                break;
            }

            start += offset;
            offset = 0;
        } else {
            offset += 1;
        }
    }

    spans
}

/// Splits text into boundary-delimited tokens.
///
/// Holds configuration only; every call builds a fresh token list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    /// Emit tokens in their original case instead of uppercased.
    /// Boundaries are computed on the uppercased text either way.
    pub preserve_case: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preserving_case() -> Self {
        Tokenizer { preserve_case: true }
    }

    /// Byte ranges of each token in `input`.
    ///
    /// Ranges are contiguous, non-empty, cover the whole input and always
    /// fall on UTF-8 character boundaries.
    pub fn spans(&self, input: &str) -> Vec<Range<usize>> {
        boundary_spans(input.to_ascii_uppercase().as_bytes())
    }

    /// Tokenize text into an ordered list of tokens.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        let upper = input.to_ascii_uppercase();
        let source = if self.preserve_case { input } else { upper.as_str() };

        let tokens: Vec<String> = boundary_spans(upper.as_bytes())
            .into_iter()
            .map(|span| source[span].to_string())
            .collect();

        debug!(bytes = input.len(), tokens = tokens.len(), "tokenized input");
        tokens
    }

    /// Count the number of tokens in text.
    pub fn token_count(&self, input: &str) -> usize {
        self.spans(input).len()
    }
}

/// Tokenize text with the default, case-folding tokenizer.
pub fn tokenize(input: &str) -> Vec<String> {
    Tokenizer::new().tokenize(input)
}

/// Count the number of tokens the default tokenizer produces.
pub fn token_count(input: &str) -> usize {
    Tokenizer::new().token_count(input)
}

/// Coarse category of an emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Number,
    Space,
    Punctuation,
}

impl TokenKind {
    pub fn of(token: &str) -> Self {
        match token.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => TokenKind::Word,
            Some(c) if c.is_ascii_digit() => TokenKind::Number,
            _ if !token.is_empty() && token.chars().all(char::is_whitespace) => TokenKind::Space,
            _ => TokenKind::Punctuation,
        }
    }
}
