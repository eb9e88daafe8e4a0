//! Word input: turning typed text or recognised speech into word lists.
//!
//! * [`split_words`] — whitespace tokenisation shared by every source.
//! * [`WordSource`] / [`LineSource`] / [`QueuedSource`] — async producers of
//!   final segments.
//! * [`Transcript`] — timestamped log of what was submitted.

pub mod source;
pub mod transcript;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use source::{split_words, LineSource, QueuedSource, SourceError, WordSource};
pub use transcript::{Transcript, TranscriptEntry};
