//! Reconciles finalized recognition fragments with the transcript buffer.
//!
//! Recognizers re-deliver text in several ways: the same final fragment
//! twice in a row, a fragment the buffer already ends with, or the whole
//! transcript so far plus a few new words. Each case must leave exactly one
//! copy of the text in the buffer.

use super::buffer::TranscriptBuffer;
use crate::defaults;
use crate::text::{collapse_repeated_words, is_trailing_punct, normalize};

/// What a merge did to the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Nothing left after normalization.
    Empty,
    /// Same fragment as the last accepted one, inside the echo window.
    Echo,
    /// The buffer already ends with the fragment.
    AlreadyPresent,
    /// Cumulative resend: only the new tail was appended.
    Extended { suffix: String },
    /// The whole fragment was appended.
    Appended { text: String },
}

impl MergeOutcome {
    /// Whether the buffer was modified.
    pub fn changed(&self) -> bool {
        matches!(self, MergeOutcome::Extended { .. } | MergeOutcome::Appended { .. })
    }
}

#[derive(Debug, Clone)]
pub struct DeltaMerger {
    echo_window_ms: u64,
    /// Normalized text and arrival time of the last accepted fragment.
    last_accepted: Option<(String, u64)>,
}

impl Default for DeltaMerger {
    fn default() -> Self {
        Self::new(defaults::ECHO_WINDOW_MS)
    }
}

impl DeltaMerger {
    pub fn new(echo_window_ms: u64) -> Self {
        Self {
            echo_window_ms,
            last_accepted: None,
        }
    }

    pub fn echo_window_ms(&self) -> u64 {
        self.echo_window_ms
    }

    /// Forget the last accepted fragment.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }

    /// Merge a final fragment that arrived at `at_ms`.
    pub fn merge(&mut self, buffer: &mut TranscriptBuffer, fragment: &str, at_ms: u64) -> MergeOutcome {
        let normalized = normalize(fragment);
        if normalized.is_empty() {
            return MergeOutcome::Empty;
        }

        if let Some((last, last_at)) = &self.last_accepted
            && *last == normalized
            && at_ms.saturating_sub(*last_at) < self.echo_window_ms
        {
            tracing::debug!(fragment = %normalized, "recognizer echo discarded");
            return MergeOutcome::Echo;
        }

        let collapsed = collapse_repeated_words(&normalized);
        let current = buffer.as_str().trim_end().to_string();

        if ends_with_phrase(&current, &collapsed) {
            tracing::debug!(fragment = %collapsed, "fragment already at end of buffer");
            return MergeOutcome::AlreadyPresent;
        }

        let resent_tail = (!current.is_empty())
            .then(|| strip_prefix_ci(&collapsed, &current))
            .flatten()
            .filter(|tail| starts_at_boundary(tail))
            .map(|tail| tail.trim_start().to_string());

        let outcome = match resent_tail {
            Some(suffix) if suffix.is_empty() => return MergeOutcome::AlreadyPresent,
            Some(suffix) => {
                buffer.replace(current);
                buffer.append(&suffix);
                MergeOutcome::Extended { suffix }
            }
            None => {
                buffer.append(&collapsed);
                MergeOutcome::Appended { text: collapsed }
            }
        };

        tracing::debug!(?outcome, "fragment merged");
        self.last_accepted = Some((normalized, at_ms));
        outcome
    }
}

/// Whether `buffer` ends with `phrase` (ignoring case and trailing
/// punctuation on both sides), starting on a word boundary.
fn ends_with_phrase(buffer: &str, phrase: &str) -> bool {
    let buffer = buffer.trim_end_matches(is_trailing_punct).trim_end();
    let phrase = phrase.trim_end_matches(is_trailing_punct).trim_end();
    if phrase.is_empty() {
        return false;
    }
    strip_suffix_ci(buffer, phrase).is_some_and(|head| {
        head.chars()
            .next_back()
            .is_none_or(|ch| !ch.is_alphanumeric())
    })
}

fn starts_at_boundary(tail: &str) -> bool {
    tail.chars().next().is_none_or(|ch| !ch.is_alphanumeric())
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// `haystack` without a case-insensitive `prefix`.
fn strip_prefix_ci<'a>(haystack: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = haystack.char_indices();
    for expected in prefix.chars() {
        let (_, ch) = chars.next()?;
        if !eq_ignore_case(ch, expected) {
            return None;
        }
    }
    let rest = chars.next().map(|(idx, _)| idx).unwrap_or(haystack.len());
    Some(&haystack[rest..])
}

/// `haystack` without a case-insensitive `suffix`.
fn strip_suffix_ci<'a>(haystack: &'a str, suffix: &str) -> Option<&'a str> {
    let mut chars = haystack.char_indices().rev();
    let mut head_end = haystack.len();
    for expected in suffix.chars().rev() {
        let (idx, ch) = chars.next()?;
        if !eq_ignore_case(ch, expected) {
            return None;
        }
        head_end = idx;
    }
    Some(&haystack[..head_end])
}
