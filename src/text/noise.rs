//! Spoken filler removal for the room-list segment.

use crate::error::Result;
use regex::Regex;

/// Removes discourse markers ("euh", "il y a", "we have", ...) from folded text.
///
/// A filler match that overlaps a known room phrase is left in place, so a
/// noise pattern can never eat part of an alias.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    patterns: Vec<Regex>,
    protected: Option<Regex>,
}

impl NoiseFilter {
    /// Compile filler patterns (regex, folded) and the phrases they must not touch.
    pub fn new(patterns: &[&str], protected_phrases: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut phrases: Vec<&String> = protected_phrases.iter().filter(|p| !p.is_empty()).collect();
        // Longest first so the alternation prefers the widest protected span
        phrases.sort_by(|a, b| b.len().cmp(&a.len()));
        let protected = if phrases.is_empty() {
            None
        } else {
            let alternation = phrases
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\b(?:{})", alternation))?)
        };

        Ok(Self {
            patterns,
            protected,
        })
    }

    /// Replace every unprotected filler match with a space and re-collapse whitespace.
    pub fn apply(&self, folded: &str) -> String {
        let mut text = folded.to_string();

        for pattern in &self.patterns {
            let spans: Vec<(usize, usize)> = self
                .protected
                .as_ref()
                .map(|re| re.find_iter(&text).map(|m| (m.start(), m.end())).collect())
                .unwrap_or_default();

            let mut out = String::with_capacity(text.len());
            let mut last = 0;
            for m in pattern.find_iter(&text) {
                let overlaps = spans
                    .iter()
                    .any(|&(start, end)| m.start() < end && start < m.end());
                if overlaps {
                    continue;
                }
                out.push_str(&text[last..m.start()]);
                out.push(' ');
                last = m.end();
            }
            out.push_str(&text[last..]);
            text = out;
        }

        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str], protected: &[&str]) -> NoiseFilter {
        let protected: Vec<String> = protected.iter().map(|s| s.to_string()).collect();
        NoiseFilter::new(patterns, &protected).unwrap()
    }

    #[test]
    fn test_removes_fillers() {
        let f = filter(&[r"\beuh+\b", r"\bdu\s+coup\b", r"\bil\s+y\s+a\b"], &[]);
        assert_eq!(
            f.apply("euhhh du coup il y a une cuisine"),
            "une cuisine"
        );
    }

    #[test]
    fn test_respects_word_boundaries() {
        let f = filter(&[r"\bso\b"], &[]);
        assert_eq!(f.apply("so a second bedroom"), "a second bedroom");
    }

    #[test]
    fn test_leaves_protected_phrases_intact() {
        let f = filter(&[r"\bwell\b"], &["well room"]);
        assert_eq!(f.apply("well a well room"), "a well room");
    }

    #[test]
    fn test_empty_input() {
        let f = filter(&[r"\bum+\b"], &["kitchen"]);
        assert_eq!(f.apply(""), "");
        assert_eq!(f.apply("um"), "");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        assert!(NoiseFilter::new(&["(unclosed"], &[]).is_err());
    }
}
