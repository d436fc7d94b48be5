//! Per-language vocabulary: trigger keywords, fillers, number words,
//! location grammar and the room alias table.
//!
//! Sources are static tables in folded form; [`Lexicon::new`] compiles them
//! once so parsing never has to.

pub mod aliases;
mod english;
mod french;

use crate::error::{ReleveError, Result};
use crate::text::NoiseFilter;
pub use aliases::{AliasEntry, AliasMatch, AliasTable, MatchKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dictation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ReleveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fr" | "fr-fr" | "french" | "francais" | "français" => Ok(Language::Fr),
            "en" | "en-us" | "en-gb" | "english" => Ok(Language::En),
            other => Err(ReleveError::UnsupportedLanguage {
                code: other.to_string(),
            }),
        }
    }
}

/// Display words for the location string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationLabels {
    pub building: &'static str,
    pub unit: &'static str,
    pub ground: &'static str,
    pub basement: &'static str,
}

pub(crate) struct LocationSource {
    /// Capture group 1 is the building identifier.
    pub building: &'static str,
    /// Capture group 1 is the unit number.
    pub unit: &'static str,
    pub ground: &'static [&'static str],
    pub basement: &'static [&'static str],
    /// Capture group 1 is the floor number.
    pub numbered_floor: &'static [&'static str],
    /// Capture group 1 is an ordinal word from `ordinal_words`.
    pub ordinal_floor: &'static str,
    pub ordinal_words: &'static [(&'static str, u32)],
    pub labels: LocationLabels,
    pub floor_label: fn(u32) -> String,
}

pub(crate) struct LexiconSource {
    pub location_triggers: &'static [&'static str],
    /// Ordered: on a tie at the same position the earlier variant wins.
    pub room_triggers: &'static [&'static str],
    pub noise: &'static [&'static str],
    /// Applied to the room segment before splitting ("w.-c." → "wc").
    pub rewrites: &'static [(&'static str, &'static str)],
    pub conjunctions: &'static [&'static str],
    pub determiners: &'static [&'static str],
    pub singular_determiners: &'static [&'static str],
    pub qualifiers: &'static [&'static str],
    pub glue: &'static [&'static str],
    pub number_words: &'static [(&'static str, u32)],
    pub location: LocationSource,
    pub aliases: &'static [(&'static str, &'static str, MatchKind)],
    pub export_header: (&'static str, &'static str),
}

/// Compiled location grammar.
#[derive(Debug, Clone)]
pub struct LocationGrammar {
    pub(crate) building: Regex,
    pub(crate) unit: Regex,
    pub(crate) ground: Vec<Regex>,
    pub(crate) basement: Vec<Regex>,
    pub(crate) numbered_floor: Vec<Regex>,
    pub(crate) ordinal_floor: Regex,
    pub(crate) ordinal_words: &'static [(&'static str, u32)],
    pub(crate) labels: LocationLabels,
    pub(crate) floor_label: fn(u32) -> String,
}

impl LocationGrammar {
    pub fn labels(&self) -> LocationLabels {
        self.labels
    }

    pub fn floor_label(&self, n: u32) -> String {
        (self.floor_label)(n)
    }

    pub(crate) fn ordinal_value(&self, word: &str) -> Option<u32> {
        self.ordinal_words
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, n)| *n)
    }
}

/// Compiled vocabulary for one language.
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: Language,
    location_triggers: Vec<Regex>,
    room_triggers: Vec<Regex>,
    noise: NoiseFilter,
    rewrites: Vec<(Regex, &'static str)>,
    conjunction: Regex,
    /// Tokenized, longest first.
    determiners: Vec<Vec<&'static str>>,
    singular_determiners: &'static [&'static str],
    qualifier: Regex,
    glue: &'static [&'static str],
    number_words: &'static [(&'static str, u32)],
    location: LocationGrammar,
    aliases: AliasTable,
    export_header: (&'static str, &'static str),
}

impl Lexicon {
    /// Compile the built-in vocabulary for `language`.
    pub fn new(language: Language) -> Result<Self> {
        let source = match language {
            Language::Fr => &french::SOURCE,
            Language::En => &english::SOURCE,
        };
        Self::compile(language, source)
    }

    fn compile(language: Language, source: &LexiconSource) -> Result<Self> {
        let aliases = AliasTable::new(
            source
                .aliases
                .iter()
                .map(|(pattern, canonical, reach)| AliasEntry::new(pattern, canonical, *reach))
                .collect(),
            source.glue,
        );
        let protected: Vec<String> = aliases.entries().map(|e| e.pattern.clone()).collect();

        let mut determiners: Vec<Vec<&'static str>> = source
            .determiners
            .iter()
            .map(|d| d.split_whitespace().collect())
            .collect();
        determiners.sort_by(|a, b| b.len().cmp(&a.len()));

        let loc = &source.location;
        let location = LocationGrammar {
            building: Regex::new(loc.building)?,
            unit: Regex::new(loc.unit)?,
            ground: compile_all(loc.ground)?,
            basement: compile_all(loc.basement)?,
            numbered_floor: compile_all(loc.numbered_floor)?,
            ordinal_floor: Regex::new(loc.ordinal_floor)?,
            ordinal_words: loc.ordinal_words,
            labels: loc.labels,
            floor_label: loc.floor_label,
        };

        Ok(Self {
            language,
            location_triggers: compile_all(source.location_triggers)?,
            room_triggers: compile_all(source.room_triggers)?,
            noise: NoiseFilter::new(source.noise, &protected)?,
            rewrites: source
                .rewrites
                .iter()
                .map(|(pattern, replacement)| Ok((Regex::new(pattern)?, *replacement)))
                .collect::<Result<Vec<_>>>()?,
            conjunction: word_alternation(source.conjunctions)?,
            determiners,
            singular_determiners: source.singular_determiners,
            qualifier: Regex::new(&format!(r"^(?:{})$", source.qualifiers.join("|")))?,
            glue: source.glue,
            number_words: source.number_words,
            location,
            aliases,
            export_header: source.export_header,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn location(&self) -> &LocationGrammar {
        &self.location
    }

    pub fn noise(&self) -> &NoiseFilter {
        &self.noise
    }

    pub fn location_triggers(&self) -> &[Regex] {
        &self.location_triggers
    }

    pub fn room_triggers(&self) -> &[Regex] {
        &self.room_triggers
    }

    pub fn conjunction(&self) -> &Regex {
        &self.conjunction
    }

    /// Column titles for tabular export.
    pub fn export_header(&self) -> (&'static str, &'static str) {
        self.export_header
    }

    /// Apply abbreviation rewrites to folded text.
    pub fn rewrite(&self, folded: &str) -> String {
        let mut text = folded.to_string();
        for (pattern, replacement) in &self.rewrites {
            text = pattern.replace_all(&text, *replacement).into_owned();
        }
        text
    }

    /// Value of a quantity token: digits or a number word.
    ///
    /// Digits are returned as spoken; range checks belong to the caller.
    pub fn quantity_value(&self, token: &str) -> Option<u32> {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            // Absurdly long digit runs saturate instead of failing
            return Some(token.parse().unwrap_or(u32::MAX));
        }
        self.number_words
            .iter()
            .find(|(word, _)| *word == token)
            .map(|(_, n)| *n)
    }

    /// Whether `token` can open a new room phrase ("deux", "3", "a").
    pub fn is_quantity_token(&self, token: &str) -> bool {
        self.quantity_value(token).is_some() || self.is_singular_determiner(token)
    }

    pub fn is_singular_determiner(&self, token: &str) -> bool {
        self.singular_determiners.contains(&token)
    }

    pub fn is_qualifier(&self, token: &str) -> bool {
        self.qualifier.is_match(token)
    }

    pub fn is_glue(&self, token: &str) -> bool {
        self.glue.contains(&token)
    }

    /// Number of leading tokens forming a determiner, or 0.
    pub fn determiner_len(&self, tokens: &[String]) -> usize {
        self.determiners
            .iter()
            .find(|det| {
                det.len() <= tokens.len() && det.iter().zip(tokens).all(|(d, t)| *d == t)
            })
            .map(|det| det.len())
            .unwrap_or(0)
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(ReleveError::from))
        .collect()
}

fn word_alternation(words: &[&str]) -> Result<Regex> {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&format!(r"\b(?:{})\b", alternation))?)
}
