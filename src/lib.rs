//! releve - Dictated site-survey notes to room inventories
//!
//! Interprets French or English transcripts into a location label and a
//! numbered room list, and keeps the result as exportable inventory rows.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod export;
pub mod interpret;
pub mod inventory;
pub mod lexicon;
pub mod session;
pub mod text;

// Composition root for the binary
#[cfg(feature = "cli")]
pub mod app;

// Interpretation
pub use interpret::{InterpretOptions, Interpretation, Interpreter, NumberingMode};
pub use lexicon::{Language, Lexicon};

// Storage and export
pub use export::ExportFormat;
pub use inventory::{Inventory, InventoryRecord};

// Streaming dictation
pub use session::{DictationSession, FeedEvent, RecognitionError, SessionAction, SessionState};

// Error handling
pub use error::{ReleveError, Result};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
