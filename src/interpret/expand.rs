//! Quantity expansion into numbered room instances, and adjacent dedup.

use super::canonical::CanonicalRoom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// How repeated room types are numbered within one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberingMode {
    /// Every phrase numbers from 1: "two bedrooms, two bedrooms" gives
    /// Bedroom 1, Bedroom 2, Bedroom 1, Bedroom 2.
    #[default]
    PerPhrase,
    /// Numbers continue per label across phrases: "two bedrooms, one more
    /// bedroom" gives Bedroom 1, Bedroom 2, Bedroom 3.
    Continuous,
}

/// One room to be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInstance {
    pub label: String,
}

impl fmt::Display for RoomInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Expand `(label, quantity)` pairs into instances.
///
/// A quantity of one keeps the bare label; larger quantities are numbered
/// from 1 in ascending order. Quantities are clamped to `1..=max_quantity`.
pub fn expand(rooms: &[CanonicalRoom], mode: NumberingMode, max_quantity: u32) -> Vec<RoomInstance> {
    let mut out = Vec::new();
    // Last number issued per label (Continuous only). A bare instance counts as 1.
    let mut counters: HashMap<&str, u32> = HashMap::new();

    for room in rooms {
        let quantity = room.quantity.clamp(1, max_quantity.max(1));
        match mode {
            NumberingMode::PerPhrase => {
                if quantity == 1 {
                    out.push(instance(&room.label, None));
                } else {
                    out.extend((1..=quantity).map(|n| instance(&room.label, Some(n))));
                }
            }
            NumberingMode::Continuous => {
                let counter = counters.entry(room.label.as_str()).or_insert(0);
                if quantity == 1 && *counter == 0 {
                    out.push(instance(&room.label, None));
                    *counter = 1;
                    continue;
                }
                for _ in 0..quantity {
                    *counter += 1;
                    out.push(instance(&room.label, Some(*counter)));
                }
            }
        }
    }

    out
}

/// Drop an instance identical (ignoring case) to the one just before it.
pub fn dedup_adjacent(instances: Vec<RoomInstance>) -> Vec<RoomInstance> {
    let mut kept: Vec<RoomInstance> = Vec::with_capacity(instances.len());
    for instance in instances {
        if kept
            .last()
            .is_some_and(|prev| prev.label.to_lowercase() == instance.label.to_lowercase())
        {
            continue;
        }
        kept.push(instance);
    }
    kept
}

fn instance(label: &str, number: Option<u32>) -> RoomInstance {
    let label = match number {
        Some(n) => format!("{} {}", label, n),
        None => label.to_string(),
    };
    RoomInstance { label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MatchKind;

    fn room(label: &str, quantity: u32) -> CanonicalRoom {
        CanonicalRoom {
            label: label.to_string(),
            quantity,
            kind: MatchKind::Exact,
        }
    }

    fn labels(instances: &[RoomInstance]) -> Vec<&str> {
        instances.iter().map(|i| i.label.as_str()).collect()
    }

    #[test]
    fn test_single_keeps_bare_label() {
        let out = expand(&[room("Kitchen", 1)], NumberingMode::PerPhrase, 20);
        assert_eq!(labels(&out), vec!["Kitchen"]);
    }

    #[test]
    fn test_every_quantity_numbers_without_gaps() {
        for q in 1..=20u32 {
            let out = expand(&[room("Bedroom", q)], NumberingMode::PerPhrase, 20);
            assert_eq!(out.len(), q as usize);
            if q == 1 {
                assert_eq!(out[0].label, "Bedroom");
            } else {
                for (i, instance) in out.iter().enumerate() {
                    assert_eq!(instance.label, format!("Bedroom {}", i + 1));
                }
            }
        }
    }

    #[test]
    fn test_quantity_clamped() {
        let out = expand(&[room("Office", 50)], NumberingMode::PerPhrase, 20);
        assert_eq!(out.len(), 20);
        assert_eq!(out[19].label, "Office 20");
    }

    #[test]
    fn test_per_phrase_restarts_numbering() {
        let out = expand(
            &[room("Bedroom", 2), room("Kitchen", 1), room("Bedroom", 2)],
            NumberingMode::PerPhrase,
            20,
        );
        assert_eq!(
            labels(&out),
            vec!["Bedroom 1", "Bedroom 2", "Kitchen", "Bedroom 1", "Bedroom 2"]
        );
    }

    #[test]
    fn test_continuous_numbering() {
        let out = expand(
            &[room("Bedroom", 2), room("Kitchen", 1), room("Bedroom", 1)],
            NumberingMode::Continuous,
            20,
        );
        assert_eq!(
            labels(&out),
            vec!["Bedroom 1", "Bedroom 2", "Kitchen", "Bedroom 3"]
        );
    }

    #[test]
    fn test_continuous_after_bare_instance() {
        let out = expand(
            &[room("Bedroom", 1), room("Bedroom", 2)],
            NumberingMode::Continuous,
            20,
        );
        assert_eq!(labels(&out), vec!["Bedroom", "Bedroom 2", "Bedroom 3"]);
    }

    #[test]
    fn test_dedup_only_adjacent() {
        let input = ["Kitchen", "Kitchen", "Living Room", "Kitchen"]
            .iter()
            .map(|l| instance(l, None))
            .collect();
        assert_eq!(
            labels(&dedup_adjacent(input)),
            vec!["Kitchen", "Living Room", "Kitchen"]
        );
    }

    #[test]
    fn test_dedup_ignores_case() {
        let input = vec![instance("WC", None), instance("wc", None)];
        assert_eq!(labels(&dedup_adjacent(input)), vec!["WC"]);
    }

    #[test]
    fn test_numbering_mode_serde() {
        assert_eq!(
            serde_json::to_string(&NumberingMode::PerPhrase).unwrap(),
            "\"per-phrase\""
        );
        let mode: NumberingMode = serde_json::from_str("\"continuous\"").unwrap();
        assert_eq!(mode, NumberingMode::Continuous);
    }
}
