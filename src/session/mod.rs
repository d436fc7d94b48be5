//! Streaming dictation: buffer, fragment merging and the session state machine.

pub mod buffer;
pub mod clock;
pub mod dictation;
pub mod feed;
pub mod merger;

pub use buffer::TranscriptBuffer;
pub use clock::{Clock, ManualClock, SystemClock};
pub use dictation::{DictationSession, SessionAction, SessionState, SessionUpdate};
pub use feed::{FeedEvent, RecognitionError, parse_feed_log, read_feed_log};
pub use merger::{DeltaMerger, MergeOutcome};
