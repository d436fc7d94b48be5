//! Building, unit and level extraction from the location segment.

use crate::lexicon::LocationGrammar;
use crate::text::fold;
use std::fmt;

/// Formatted location parts. Absent parts are skipped when rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationToken {
    pub building: Option<String>,
    pub unit: Option<String>,
    pub level: Option<String>,
}

impl LocationToken {
    pub fn is_empty(&self) -> bool {
        self.building.is_none() && self.unit.is_none() && self.level.is_none()
    }
}

impl fmt::Display for LocationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.building, &self.unit, &self.level];
        let mut first = true;
        for part in parts.into_iter().flatten() {
            if !first {
                f.write_str(" - ")?;
            }
            f.write_str(part)?;
            first = false;
        }
        Ok(())
    }
}

/// Extract location parts. Each part is looked up independently.
pub fn parse_location(text: &str, grammar: &LocationGrammar) -> LocationToken {
    let folded = fold(text);
    let labels = grammar.labels();

    let building = grammar
        .building
        .captures(&folded)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{} {}", labels.building, id.as_str().to_uppercase()));

    let unit = grammar
        .unit
        .captures(&folded)
        .and_then(|caps| caps.get(1))
        .map(|n| format!("{} {}", labels.unit, strip_leading_zeros(n.as_str())));

    LocationToken {
        building,
        unit,
        level: parse_level(&folded, grammar),
    }
}

/// Ground and basement win over any numbered floor.
fn parse_level(folded: &str, grammar: &LocationGrammar) -> Option<String> {
    let labels = grammar.labels();

    if grammar.ground.iter().any(|re| re.is_match(folded)) {
        return Some(labels.ground.to_string());
    }
    if grammar.basement.iter().any(|re| re.is_match(folded)) {
        return Some(labels.basement.to_string());
    }

    let numbered = grammar.numbered_floor.iter().find_map(|re| {
        re.captures(folded)
            .and_then(|caps| caps.get(1))
            .and_then(|n| n.as_str().parse::<u32>().ok())
    });
    let floor = numbered.or_else(|| {
        grammar
            .ordinal_floor
            .captures(folded)
            .and_then(|caps| caps.get(1))
            .and_then(|word| grammar.ordinal_value(word.as_str()))
    })?;

    if floor == 0 {
        Some(labels.ground.to_string())
    } else {
        Some(grammar.floor_label(floor))
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}
