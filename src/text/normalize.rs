//! Whitespace, apostrophe and accent handling shared by every stage.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Apostrophe look-alikes produced by recognizers and mobile keyboards.
const APOSTROPHES: [char; 6] = ['\u{2019}', '\u{2018}', '\u{02BC}', '\u{00B4}', '\u{2032}', '`'];

/// Trailing punctuation a recognizer may attach to a word.
pub fn is_trailing_punct(ch: char) -> bool {
    matches!(ch, '.' | ',' | ';' | ':' | '!' | '?')
}

/// Canonical form of a transcript: NFC, ASCII apostrophes, single spaces, trimmed.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.nfc() {
        if ch.is_whitespace() {
            pending_space = !result.is_empty();
            continue;
        }
        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        if APOSTROPHES.contains(&ch) {
            result.push('\'');
        } else {
            result.push(ch);
        }
    }

    result
}

/// Lower-case and strip diacritics: "Pièce à vivre" → "piece a vivre".
pub fn fold(text: &str) -> String {
    FoldedText::new(text).folded
}

/// Folded text that remembers where each byte came from in the source.
///
/// Keyword search runs on the folded form; the matched range is then mapped
/// back so callers can slice the original (accented, cased) text.
#[derive(Debug, Clone)]
pub struct FoldedText {
    folded: String,
    /// Source byte offset for every folded byte, plus one entry for the end.
    origin: Vec<usize>,
}

impl FoldedText {
    pub fn new(source: &str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut origin = Vec::with_capacity(source.len() + 1);

        for (idx, ch) in source.char_indices() {
            for lower in ch.to_lowercase() {
                for base in std::iter::once(lower).nfd() {
                    if is_combining_mark(base) {
                        continue;
                    }
                    let expansion: &str = match base {
                        'œ' => "oe",
                        'æ' => "ae",
                        'ß' => "ss",
                        _ => "",
                    };
                    if expansion.is_empty() {
                        folded.push(base);
                        origin.extend(std::iter::repeat_n(idx, base.len_utf8()));
                    } else {
                        folded.push_str(expansion);
                        origin.extend(std::iter::repeat_n(idx, expansion.len()));
                    }
                }
            }
        }
        origin.push(source.len());

        Self { folded, origin }
    }

    pub fn as_str(&self) -> &str {
        &self.folded
    }

    /// Map a byte offset in the folded text to the source text.
    pub fn source_offset(&self, folded_offset: usize) -> usize {
        let last = self.origin.len().saturating_sub(1);
        self.origin[folded_offset.min(last)]
    }
}

/// Split folded text into matching tokens.
///
/// Hyphens act as spaces, surrounding punctuation is dropped and French
/// elisions are detached ("l'entree" → "l'", "entree").
pub fn word_tokens(folded: &str) -> Vec<String> {
    let mut tokens = Vec::new();

    for raw in folded.split(|c: char| c.is_whitespace() || c == '-') {
        let token = raw.trim_matches(|c: char| is_trailing_punct(c) || c == '"');
        if token.is_empty() {
            continue;
        }
        match token.find('\'') {
            Some(pos) if (1..=3).contains(&pos) && pos + 1 < token.len() => {
                tokens.push(token[..=pos].to_string());
                tokens.push(token[pos + 1..].to_string());
            }
            _ => tokens.push(token.to_string()),
        }
    }

    tokens
}

/// Collapse a word repeated back-to-back: "cuisine cuisine cuisine" → "cuisine".
///
/// Only purely alphabetic words (apostrophes allowed) collapse, compared
/// case-insensitively. The first spelling is kept; trailing punctuation of
/// the last repeat is preserved ("kitchen kitchen, bath" → "kitchen, bath").
pub fn collapse_repeated_words(text: &str) -> String {
    let mut kept: Vec<String> = Vec::new();
    // Core of the last kept token, if it can absorb a repeat.
    let mut open_word: Option<String> = None;

    for token in text.split_whitespace() {
        let (core, tail) = split_word(token);

        if let Some(prev) = &open_word
            && !core.is_empty()
            && prev.to_lowercase() == core.to_lowercase()
        {
            if let Some(last) = kept.last_mut() {
                *last = format!("{}{}", prev, tail);
            }
            if !tail.is_empty() {
                open_word = None;
            }
            continue;
        }

        open_word = (!core.is_empty() && tail.is_empty()).then(|| core.to_string());
        kept.push(token.to_string());
    }

    kept.join(" ")
}

/// Split a token into its alphabetic core and trailing punctuation.
///
/// Returns an empty core when the token is not a plain word.
fn split_word(token: &str) -> (&str, &str) {
    let core_end = token
        .char_indices()
        .find(|(_, ch)| !(ch.is_alphabetic() || *ch == '\''))
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    let (core, tail) = token.split_at(core_end);

    if core.is_empty() || !tail.chars().all(is_trailing_punct) {
        return ("", "");
    }
    (core, tail)
}
