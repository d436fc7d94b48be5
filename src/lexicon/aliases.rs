//! Room alias table and its three-tier matcher.
//!
//! Precedence is explicit: an exact match beats a prefix match, which beats a
//! containment match. Within a tier the longest pattern wins and ties go to
//! the entry declared first.

use crate::text::word_tokens;

/// How an alias matched, and how far an entry is allowed to reach.
///
/// Ordered from strictest to loosest so `reach >= MatchKind::Prefix` reads as
/// "may match as a prefix or looser".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchKind {
    /// The whole phrase equals the pattern.
    Exact,
    /// The phrase starts with the pattern followed by a word boundary.
    Prefix,
    /// The pattern occurs in the phrase, starting on a word boundary.
    Contains,
}

/// One row of the alias table.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasEntry {
    /// Lower-cased, accent-folded phrase.
    pub pattern: String,
    /// Label emitted when the pattern matches.
    pub canonical: String,
    /// Loosest tier this entry may match at.
    pub reach: MatchKind,
}

impl AliasEntry {
    pub fn new(pattern: &str, canonical: &str, reach: MatchKind) -> Self {
        Self {
            pattern: pattern.to_string(),
            canonical: canonical.to_string(),
            reach,
        }
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AliasMatch<'a> {
    pub canonical: &'a str,
    pub pattern: &'a str,
    pub kind: MatchKind,
}

#[derive(Debug, Clone)]
struct KeyedEntry {
    entry: AliasEntry,
    key: String,
}

/// Ordered alias table. Declaration order only matters for ties.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: Vec<KeyedEntry>,
    glue: Vec<String>,
}

impl AliasTable {
    /// Build a table; `glue` words are ignored on both sides of every comparison.
    pub fn new(entries: Vec<AliasEntry>, glue: &[&str]) -> Self {
        let glue: Vec<String> = glue.iter().map(|g| g.to_string()).collect();
        let entries = entries
            .into_iter()
            .map(|entry| {
                let key = match_key(&entry.pattern, &glue);
                KeyedEntry { entry, key }
            })
            .filter(|keyed| !keyed.key.is_empty())
            .collect();

        Self { entries, glue }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.iter().map(|keyed| &keyed.entry)
    }

    /// Resolve a folded phrase to its canonical label.
    pub fn resolve(&self, folded: &str) -> Option<AliasMatch<'_>> {
        let key = match_key(folded, &self.glue);
        if key.is_empty() {
            return None;
        }

        let exact = self
            .entries
            .iter()
            .find(|keyed| keyed.key == key)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|keyed| plural_tail(&key, &keyed.key).is_some_and(str::is_empty))
            });
        if let Some(keyed) = exact {
            return Some(keyed.to_match(MatchKind::Exact));
        }

        let prefix = self.longest(|keyed| {
            keyed.entry.reach >= MatchKind::Prefix
                && plural_tail(&key, &keyed.key).is_some_and(|rest| rest.starts_with(' '))
        });
        if let Some(keyed) = prefix {
            return Some(keyed.to_match(MatchKind::Prefix));
        }

        self.longest(|keyed| {
            keyed.entry.reach >= MatchKind::Contains && contains_at_word_start(&key, &keyed.key)
        })
        .map(|keyed| keyed.to_match(MatchKind::Contains))
    }

    /// First-declared entry with the longest key among those accepted by `pred`.
    fn longest(&self, pred: impl Fn(&KeyedEntry) -> bool) -> Option<&KeyedEntry> {
        let mut best: Option<&KeyedEntry> = None;
        for keyed in self.entries.iter().filter(|keyed| pred(keyed)) {
            if best.is_none_or(|b| keyed.key.len() > b.key.len()) {
                best = Some(keyed);
            }
        }
        best
    }
}

impl KeyedEntry {
    fn to_match(&self, kind: MatchKind) -> AliasMatch<'_> {
        AliasMatch {
            canonical: &self.entry.canonical,
            pattern: &self.entry.pattern,
            kind,
        }
    }
}

/// Comparison key: tokens without glue words, joined by single spaces.
pub fn match_key(folded: &str, glue: &[String]) -> String {
    word_tokens(folded)
        .into_iter()
        .filter(|token| !glue.iter().any(|g| g == token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// What follows `pattern` at the start of `key`, once a plural `s`/`x` is
/// skipped. `None` unless the pattern ends on a word boundary.
fn plural_tail<'k>(key: &'k str, pattern: &str) -> Option<&'k str> {
    let rest = key.strip_prefix(pattern)?;
    let rest = rest.strip_prefix(['s', 'x']).unwrap_or(rest);
    (rest.is_empty() || rest.starts_with(' ')).then_some(rest)
}

/// Containment that must start on a word boundary but may end mid-word, so
/// "bedrooms" contains "bedroom" while "storage" does not contain "rage".
fn contains_at_word_start(haystack: &str, needle: &str) -> bool {
    haystack
        .match_indices(needle)
        .any(|(idx, _)| idx == 0 || haystack[..idx].ends_with(' '))
}
