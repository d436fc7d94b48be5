//! Room-list splitting.

use crate::lexicon::Lexicon;

const DELIMITER: char = '|';

/// Break a prepared (folded, noise-filtered) room segment into phrases.
///
/// Sentence punctuation and conjunctions delimit phrases. A quantity word
/// ("two", "3", "une") also opens a new phrase when text precedes it, so
/// "one kitchen one living room" splits without commas. A digit ending a
/// phrase is a room number ("chambre 2"), not a new quantity.
pub fn split_rooms(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let delimited = lexicon
        .conjunction()
        .replace_all(text, DELIMITER.to_string().as_str());
    let delimited: String = delimited
        .chars()
        .map(|ch| match ch {
            '.' | ',' | ';' | ':' | '!' | '?' | '\n' | '\r' => DELIMITER,
            other => other,
        })
        .collect();

    let mut chunks = Vec::new();
    for segment in delimited.split(DELIMITER) {
        let words: Vec<&str> = segment.split_whitespace().collect();
        let mut current: Vec<&str> = Vec::new();

        for (idx, word) in words.iter().enumerate() {
            let trailing_number = idx + 1 == words.len() && word.chars().all(|c| c.is_ascii_digit());
            if !current.is_empty() && !trailing_number && lexicon.is_quantity_token(word) {
                chunks.push(current.join(" "));
                current.clear();
            }
            current.push(word);
        }
        if !current.is_empty() {
            chunks.push(current.join(" "));
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;

    fn split(language: Language, text: &str) -> Vec<String> {
        split_rooms(text, &Lexicon::new(language).unwrap())
    }

    #[test]
    fn test_splits_on_punctuation_and_conjunction() {
        assert_eq!(
            split(Language::En, "kitchen, bathroom; office. hallway and garage"),
            vec!["kitchen", "bathroom", "office", "hallway", "garage"]
        );
        assert_eq!(
            split(Language::Fr, "une cuisine et un sejour puis une entree"),
            vec!["une cuisine", "un sejour", "une entree"]
        );
    }

    #[test]
    fn test_synthetic_delimiter_before_quantity() {
        assert_eq!(
            split(Language::En, "one kitchen one living room two bedrooms"),
            vec!["one kitchen", "one living room", "two bedrooms"]
        );
        assert_eq!(
            split(Language::En, "a kitchen 3 bedrooms an office"),
            vec!["a kitchen", "3 bedrooms", "an office"]
        );
    }

    #[test]
    fn test_quantity_at_chunk_start_does_not_split() {
        assert_eq!(split(Language::Fr, "deux chambres"), vec!["deux chambres"]);
    }

    #[test]
    fn test_trailing_digit_stays_attached() {
        assert_eq!(
            split(Language::Fr, "chambre 2, bureau"),
            vec!["chambre 2", "bureau"]
        );
    }

    #[test]
    fn test_conjunction_needs_word_boundary() {
        assert_eq!(split(Language::En, "landing"), vec!["landing"]);
        assert_eq!(split(Language::Fr, "cabinet"), vec!["cabinet"]);
    }

    #[test]
    fn test_empty_chunks_dropped() {
        assert!(split(Language::En, " , ; . and ").is_empty());
    }
}
