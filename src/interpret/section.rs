//! Keyword sectioning of a transcript into location and room-list segments.

use crate::lexicon::Lexicon;
use crate::text::{FoldedText, normalize};
use regex::Regex;

/// Which trigger keywords were found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Location trigger followed by a room-list trigger.
    Complete,
    /// Location trigger without a room-list trigger.
    LocationOnly,
    /// Room-list trigger without a location trigger.
    RoomsOnly,
    /// No trigger at all: the whole text is both location and room text.
    Unsectioned,
}

/// Transcript split into its two segments, in the original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub location_text: String,
    pub rooms_text: String,
    pub kind: SectionKind,
}

/// Split `text` on the first location trigger and the first room-list
/// trigger that follows it.
pub fn section(text: &str, lexicon: &Lexicon) -> Section {
    let normalized = normalize(text);
    let folded = FoldedText::new(&normalized);
    let haystack = folded.as_str();

    let location = earliest(lexicon.location_triggers(), haystack, 0);
    let rooms_from = location.map(|(_, end)| end).unwrap_or(0);
    let rooms = earliest(lexicon.room_triggers(), haystack, rooms_from);

    let slice = |start: usize, end: usize| -> String {
        let start = folded.source_offset(start);
        let end = folded.source_offset(end);
        normalized[start..end].trim().to_string()
    };
    let len = haystack.len();

    let section = match (location, rooms) {
        (Some((_, loc_end)), Some((room_start, room_end))) => Section {
            location_text: slice(loc_end, room_start),
            rooms_text: slice(room_end, len),
            kind: SectionKind::Complete,
        },
        (Some((_, loc_end)), None) => Section {
            location_text: slice(loc_end, len),
            rooms_text: String::new(),
            kind: SectionKind::LocationOnly,
        },
        (None, Some((room_start, room_end))) => Section {
            location_text: slice(0, room_start),
            rooms_text: slice(room_end, len),
            kind: SectionKind::RoomsOnly,
        },
        (None, None) => Section {
            location_text: normalized.clone(),
            rooms_text: normalized.clone(),
            kind: SectionKind::Unsectioned,
        },
    };

    tracing::trace!(kind = ?section.kind, "sectioned transcript");
    section
}

/// Earliest match of any pattern at or after `from`.
///
/// On equal start positions the pattern listed first wins.
fn earliest(patterns: &[Regex], haystack: &str, from: usize) -> Option<(usize, usize)> {
    if from > haystack.len() {
        return None;
    }
    let mut best: Option<(usize, usize)> = None;
    for pattern in patterns {
        if let Some(m) = pattern.find_at(haystack, from)
            && best.is_none_or(|(start, _)| m.start() < start)
        {
            best = Some((m.start(), m.end()));
        }
    }
    best
}
