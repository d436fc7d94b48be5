//! Transcript interpretation: sectioning, location parsing and room listing.
//!
//! [`Interpreter::parse`] is pure. The same transcript always yields the same
//! [`Interpretation`], and no stage can fail: anything unrecognized is
//! simply left out of the result.

pub mod canonical;
pub mod expand;
pub mod location;
pub mod rooms;
pub mod section;

pub use canonical::{CanonicalRoom, RoomCandidate, canonicalize, room_candidate};
pub use expand::{NumberingMode, RoomInstance, dedup_adjacent, expand};
pub use location::{LocationToken, parse_location};
pub use rooms::split_rooms;
pub use section::{Section, SectionKind, section};

use crate::defaults;
use crate::error::Result;
use crate::inventory::InventoryRecord;
use crate::lexicon::{Language, Lexicon};
use crate::text::{collapse_repeated_words, fold, normalize};
use serde::{Deserialize, Serialize};

/// Tunables for room expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpretOptions {
    pub numbering: NumberingMode,
    pub max_quantity: u32,
}

impl Default for InterpretOptions {
    fn default() -> Self {
        Self {
            numbering: NumberingMode::default(),
            max_quantity: defaults::MAX_QUANTITY,
        }
    }
}

/// Parsed transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Empty when no location part was recognized.
    pub location: String,
    pub rooms: Vec<String>,
}

impl Interpretation {
    /// One record per room, each carrying the location.
    pub fn records(&self) -> Vec<InventoryRecord> {
        self.rooms
            .iter()
            .map(|room| InventoryRecord::new(&self.location, room))
            .collect()
    }

    /// Status line: "location OK • 4 room(s)".
    pub fn summary(&self) -> String {
        let location = if self.location.is_empty() { "?" } else { "OK" };
        format!("location {} • {} room(s)", location, self.rooms.len())
    }
}

/// Runs the full interpretation pipeline for one language.
#[derive(Debug, Clone)]
pub struct Interpreter {
    lexicon: Lexicon,
    options: InterpretOptions,
}

impl Interpreter {
    pub fn new(lexicon: Lexicon, options: InterpretOptions) -> Self {
        Self { lexicon, options }
    }

    /// Interpreter with the built-in lexicon and default options.
    pub fn for_language(language: Language) -> Result<Self> {
        Ok(Self::new(Lexicon::new(language)?, InterpretOptions::default()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> InterpretOptions {
        self.options
    }

    pub fn parse(&self, text: &str) -> Interpretation {
        let section = self.section(text);
        let interpretation = Interpretation {
            location: self.parse_location(&section.location_text),
            rooms: self.parse_rooms(&section.rooms_text),
        };
        tracing::debug!(
            location = %interpretation.location,
            rooms = interpretation.rooms.len(),
            "parsed transcript"
        );
        interpretation
    }

    pub fn section(&self, text: &str) -> Section {
        section(text, &self.lexicon)
    }

    /// Formatted location, or an empty string.
    pub fn parse_location(&self, text: &str) -> String {
        parse_location(text, self.lexicon.location()).to_string()
    }

    /// Room labels for a room-list segment.
    pub fn parse_rooms(&self, rooms_text: &str) -> Vec<String> {
        let rooms: Vec<CanonicalRoom> = self
            .split(rooms_text)
            .iter()
            .filter_map(|chunk| room_candidate(chunk, &self.lexicon, self.options.max_quantity))
            .filter_map(|candidate| canonicalize(&candidate, &self.lexicon))
            .collect();

        let instances = expand(&rooms, self.options.numbering, self.options.max_quantity);
        dedup_adjacent(instances)
            .into_iter()
            .map(|instance| instance.label)
            .collect()
    }

    /// Folded room phrases, after filler removal and repeat collapsing.
    pub fn split(&self, rooms_text: &str) -> Vec<String> {
        let folded = fold(&normalize(rooms_text));
        let cleaned = self.lexicon.noise().apply(&folded);
        let rewritten = self.lexicon.rewrite(&cleaned);
        let collapsed = collapse_repeated_words(&rewritten);
        split_rooms(&collapsed, &self.lexicon)
    }
}
