//! Room phrase canonicalization: determiners, quantity and alias lookup.

use crate::lexicon::{Lexicon, MatchKind};
use crate::text::word_tokens;

/// A split phrase with its quantity extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCandidate {
    /// Folded phrase without determiners, quantity or qualifiers.
    pub raw_text: String,
    pub quantity: u32,
}

/// A phrase resolved against the alias table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRoom {
    pub label: String,
    pub quantity: u32,
    pub kind: MatchKind,
}

/// Strip determiners and qualifiers from a folded chunk and read its quantity.
///
/// Quantities outside `1..=max_quantity` are consumed and count as one.
/// Returns `None` when nothing is left to look up.
pub fn room_candidate(chunk: &str, lexicon: &Lexicon, max_quantity: u32) -> Option<RoomCandidate> {
    let mut tokens = word_tokens(chunk);
    strip_determiners(&mut tokens, lexicon);

    let mut quantity = 1;
    if let Some(first) = tokens.first() {
        if let Some(n) = lexicon.quantity_value(first) {
            if (1..=max_quantity).contains(&n) {
                quantity = n;
            } else {
                tracing::debug!(chunk, value = n, "quantity out of range, using 1");
            }
            tokens.remove(0);
        } else if lexicon.is_singular_determiner(first) {
            tokens.remove(0);
        }
    }
    strip_determiners(&mut tokens, lexicon);
    tokens.retain(|token| !lexicon.is_qualifier(token));

    if tokens.is_empty() {
        return None;
    }
    Some(RoomCandidate {
        raw_text: tokens.join(" "),
        quantity,
    })
}

/// Resolve a candidate to its canonical label. Unknown rooms are dropped.
pub fn canonicalize(candidate: &RoomCandidate, lexicon: &Lexicon) -> Option<CanonicalRoom> {
    match lexicon.aliases().resolve(&candidate.raw_text) {
        Some(found) => {
            tracing::trace!(
                phrase = %candidate.raw_text,
                pattern = found.pattern,
                kind = ?found.kind,
                "room matched"
            );
            Some(CanonicalRoom {
                label: found.canonical.to_string(),
                quantity: candidate.quantity,
                kind: found.kind,
            })
        }
        None => {
            tracing::debug!(phrase = %candidate.raw_text, "unrecognized room phrase dropped");
            None
        }
    }
}

fn strip_determiners(tokens: &mut Vec<String>, lexicon: &Lexicon) {
    loop {
        let len = lexicon.determiner_len(tokens);
        if len == 0 {
            return;
        }
        tokens.drain(..len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Language;

    fn resolve(language: Language, chunk: &str) -> Option<(String, u32)> {
        let lexicon = Lexicon::new(language).unwrap();
        let candidate = room_candidate(chunk, &lexicon, 20)?;
        canonicalize(&candidate, &lexicon).map(|room| (room.label, room.quantity))
    }

    #[test]
    fn test_number_word_quantity() {
        assert_eq!(
            resolve(Language::Fr, "deux chambres"),
            Some(("Chambre".to_string(), 2))
        );
        assert_eq!(
            resolve(Language::En, "three bedrooms"),
            Some(("Bedroom".to_string(), 3))
        );
    }

    #[test]
    fn test_digit_quantity() {
        assert_eq!(
            resolve(Language::En, "12 offices"),
            Some(("Office".to_string(), 12))
        );
    }

    #[test]
    fn test_out_of_range_quantity_is_one() {
        assert_eq!(
            resolve(Language::En, "25 bedrooms"),
            Some(("Bedroom".to_string(), 1))
        );
        assert_eq!(resolve(Language::En, "0 kitchen"), Some(("Kitchen".to_string(), 1)));
    }

    #[test]
    fn test_max_quantity_is_configurable() {
        let lexicon = Lexicon::new(Language::En).unwrap();
        let candidate = room_candidate("five bedrooms", &lexicon, 4).unwrap();
        assert_eq!(candidate.quantity, 1);
    }

    #[test]
    fn test_singular_determiner_consumed() {
        let lexicon = Lexicon::new(Language::En).unwrap();
        let candidate = room_candidate("a kitchen", &lexicon, 20).unwrap();
        assert_eq!(candidate.raw_text, "kitchen");
        assert_eq!(candidate.quantity, 1);
    }

    #[test]
    fn test_determiners_and_qualifiers_stripped() {
        let lexicon = Lexicon::new(Language::En).unwrap();
        let candidate = room_candidate("the two separate toilets", &lexicon, 20).unwrap();
        assert_eq!(candidate.raw_text, "toilets");
        assert_eq!(candidate.quantity, 2);

        let lexicon = Lexicon::new(Language::Fr).unwrap();
        let candidate = room_candidate("deux wc separes", &lexicon, 20).unwrap();
        assert_eq!(candidate.raw_text, "wc");
        assert_eq!(candidate.quantity, 2);
    }

    #[test]
    fn test_elided_determiner() {
        assert_eq!(
            resolve(Language::Fr, "l'entree"),
            Some(("Entrée".to_string(), 1))
        );
    }

    #[test]
    fn test_partitive_determiner() {
        assert_eq!(
            resolve(Language::En, "one of the bathrooms"),
            Some(("Bathroom".to_string(), 1))
        );
    }

    #[test]
    fn test_longest_alias_wins() {
        assert_eq!(
            resolve(Language::En, "one master bedroom"),
            Some(("Master Bedroom".to_string(), 1))
        );
        assert_eq!(
            resolve(Language::Fr, "une chambre parentale"),
            Some(("Suite parentale".to_string(), 1))
        );
    }

    #[test]
    fn test_french_glue_words() {
        assert_eq!(
            resolve(Language::Fr, "une salle de bains"),
            Some(("Salle de bain".to_string(), 1))
        );
        assert_eq!(
            resolve(Language::Fr, "deux salles d'eau"),
            Some(("Salle d'eau".to_string(), 2))
        );
        assert_eq!(
            resolve(Language::Fr, "une salle d'eau"),
            Some(("Salle d'eau".to_string(), 1))
        );
        assert_eq!(
            resolve(Language::Fr, "salle a manger"),
            Some(("Salle à manger".to_string(), 1))
        );
    }

    #[test]
    fn test_unknown_room_dropped() {
        assert_eq!(resolve(Language::En, "two swimming pools"), None);
        assert_eq!(resolve(Language::En, "the"), None);
        assert_eq!(resolve(Language::En, "two"), None);
    }
}
