//! Default configuration constants for releve.
//!
//! Shared by the configuration types, the interpreter and the session.

/// Window in milliseconds during which an identical final fragment is
/// treated as a recognizer echo and discarded.
///
/// Browser and mobile recognizers that restart themselves on silence often
/// re-deliver the last finalized utterance within a second or two.
pub const ECHO_WINDOW_MS: u64 = 2000;

/// Largest room quantity accepted from a single phrase.
///
/// Anything outside `1..=MAX_QUANTITY` is treated as a quantity of one.
pub const MAX_QUANTITY: u32 = 20;

/// Field delimiter for CSV export.
pub const CSV_DELIMITER: char = ';';

/// File name of the inventory store inside the data directory.
pub const STORE_FILENAME: &str = "inventory.json";

/// Application directory name under the XDG config/data roots.
pub const APP_DIR: &str = "releve";
