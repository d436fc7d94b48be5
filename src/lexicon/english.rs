//! English vocabulary.

use super::aliases::MatchKind::{Contains, Prefix};
use super::{LexiconSource, LocationLabels, LocationSource};

pub(super) const SOURCE: LexiconSource = LexiconSource {
    location_triggers: &[r"\blocation\b"],
    room_triggers: &[
        r"\bthere\s+are\s+the\s+following\s+rooms\b",
        r"\bthe\s+following\s+rooms\b",
        r"\bfollowing\s+rooms\b",
        r"\broom\s+list\b",
        r"\brooms\s*:",
    ],
    noise: &[
        r"\bwe\s+have\b",
        r"\bthere\s+(?:is|are)\b",
        r"\bin\s+(?:this|the)\s+(?:building|apartment|unit|flat)\b",
        r"\bhere\b",
        r"\b(?:um+|uh+|erm?)\b",
        r"\bso\b",
        r"\banyway\b",
        r"\bwell\b",
        r"\bokay\b",
        r"\bthen\b",
        r"\bwith\b",
        r"\bthe\s+following\s+rooms\b",
    ],
    rewrites: &[(r"\bw\s*\.\s*-?\s*c\b\.?", "wc")],
    conjunctions: &["and", "plus"],
    determiners: &["of the", "the", "some", "another", "more"],
    singular_determiners: &["a", "an"],
    qualifiers: &[r"separate", r"separated", r"independent", r"distinct", r"individual"],
    glue: &["to", "at", "of", "from", "the"],
    number_words: &[
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
    ],
    location: LocationSource {
        building: r"\b(?:building|block)\s+([a-z0-9]+)\b",
        unit: r"\b(?:unit|apartment|apt|flat)\s+(?:number\s+)?([0-9]+)\b",
        ground: &[r"\bground\b"],
        basement: &[r"\bbasement\b", r"\bcellar\s+level\b"],
        numbered_floor: &[
            r"\b([0-9]+)\s*(?:st|nd|rd|th)\s+(?:floor|level)\b",
            r"\b(?:floor|level)\s+(?:number\s+)?([0-9]+)\b",
        ],
        ordinal_floor: r"\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\s+(?:floor|level)\b",
        ordinal_words: &[
            ("first", 1),
            ("second", 2),
            ("third", 3),
            ("fourth", 4),
            ("fifth", 5),
            ("sixth", 6),
            ("seventh", 7),
            ("eighth", 8),
            ("ninth", 9),
            ("tenth", 10),
        ],
        labels: LocationLabels {
            building: "Building",
            unit: "Unit",
            ground: "Ground",
            basement: "Basement",
        },
        floor_label: floor_label,
    },
    aliases: &[
        ("kitchen", "Kitchen", Contains),
        ("kitchenette", "Kitchenette", Contains),
        ("living room", "Living Room", Contains),
        ("lounge", "Living Room", Contains),
        ("sitting room", "Living Room", Contains),
        ("family room", "Living Room", Contains),
        ("dining room", "Dining Room", Contains),
        ("bedroom", "Bedroom", Contains),
        ("master bedroom", "Master Bedroom", Contains),
        ("bathroom", "Bathroom", Contains),
        ("shower room", "Shower Room", Contains),
        ("toilet", "WC", Contains),
        ("restroom", "WC", Contains),
        ("wc", "WC", Prefix),
        ("office", "Office", Contains),
        ("study", "Office", Prefix),
        ("studies", "Office", Prefix),
        ("hallway", "Hallway", Contains),
        ("corridor", "Hallway", Contains),
        ("hall", "Hallway", Prefix),
        ("landing", "Landing", Contains),
        ("entrance", "Entrance", Contains),
        ("entryway", "Entrance", Contains),
        ("laundry", "Laundry Room", Contains),
        ("utility room", "Laundry Room", Contains),
        ("pantry", "Pantry", Contains),
        ("storage room", "Storage Room", Contains),
        ("walk in closet", "Dressing Room", Contains),
        ("dressing room", "Dressing Room", Contains),
        ("garage", "Garage", Contains),
        ("cellar", "Cellar", Contains),
        ("attic", "Attic", Contains),
        ("loft", "Loft", Prefix),
        ("mezzanine", "Mezzanine", Contains),
        ("boiler room", "Technical Room", Contains),
        ("plant room", "Technical Room", Contains),
        ("terrace", "Terrace", Contains),
        ("balcony", "Balcony", Contains),
        ("veranda", "Veranda", Contains),
        ("conservatory", "Veranda", Contains),
    ],
    export_header: ("Location", "Room"),
};

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
fn floor_label(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
