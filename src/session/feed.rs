//! Recognition feed events and JSON-lines feed logs.

use crate::error::{ReleveError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error reported by the recognition engine (Web Speech error codes).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecognitionError {
    #[error("no speech detected")]
    NoSpeech,
    #[error("recognition aborted")]
    Aborted,
    #[error("network error")]
    Network,
    #[error("grammar rejected")]
    BadGrammar,
    #[error("audio capture device unavailable")]
    AudioCapture,
    #[error("microphone permission denied")]
    NotAllowed,
    #[error("recognition service not allowed")]
    ServiceNotAllowed,
    #[error("language not supported by the recognizer")]
    LanguageNotSupported,
}

impl RecognitionError {
    /// Fatal errors end the session; the rest recover with an engine restart.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            RecognitionError::AudioCapture
                | RecognitionError::NotAllowed
                | RecognitionError::ServiceNotAllowed
                | RecognitionError::LanguageNotSupported
        )
    }
}

/// One event from the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// Partial hypothesis. Never merged.
    Interim { text: String },
    /// Finalized utterance segment.
    Final {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp_ms: Option<u64>,
    },
    /// The engine ended on its own (silence timeout, stop request).
    EngineStopped,
    Error { error: RecognitionError },
}

impl FeedEvent {
    pub fn final_text(text: impl Into<String>) -> Self {
        FeedEvent::Final {
            text: text.into(),
            timestamp_ms: None,
        }
    }

    pub fn final_at(text: impl Into<String>, timestamp_ms: u64) -> Self {
        FeedEvent::Final {
            text: text.into(),
            timestamp_ms: Some(timestamp_ms),
        }
    }
}

/// Parse a feed log: one JSON event per line; blank lines and `#` comments skipped.
pub fn parse_feed_log(contents: &str) -> Result<Vec<FeedEvent>> {
    let mut events = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(line).map_err(|e| ReleveError::FeedEvent {
            line: idx + 1,
            message: e.to_string(),
        })?;
        events.push(event);
    }
    Ok(events)
}

pub fn read_feed_log(path: &Path) -> Result<Vec<FeedEvent>> {
    let contents = std::fs::read_to_string(path)?;
    parse_feed_log(&contents)
}
