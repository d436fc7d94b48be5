//! Session-owned transcript text.

use crate::text::is_trailing_punct;
use std::fmt;

/// Accumulated dictation. Written by the merger or replaced by a manual edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptBuffer {
    text: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append `piece`, separated by a single space unless the buffer is
    /// empty, already ends in whitespace, or `piece` starts with punctuation.
    pub fn append(&mut self, piece: &str) {
        if piece.is_empty() {
            return;
        }
        let needs_space = !self.text.is_empty()
            && !self.text.ends_with(char::is_whitespace)
            && !piece.starts_with(is_trailing_punct);
        if needs_space {
            self.text.push(' ');
        }
        self.text.push_str(piece);
    }

    /// Replace the whole text verbatim.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl fmt::Display for TranscriptBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
