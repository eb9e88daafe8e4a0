//! Word sources: where the sequencer's word lists come from.
//!
//! A source yields *final* transcript segments (a typed line, or one final
//! result from a speech recogniser).  Each segment is split on whitespace
//! with [`split_words`] before it is handed to the sequencer.

use std::collections::VecDeque;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// Errors raised while reading from a word source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the underlying stream failed.
    #[error("failed to read transcript: {0}")]
    Io(#[from] std::io::Error),

    /// The recogniser reported a failure (unsupported, permission denied,
    /// engine error).  Speech-backed [`WordSource`]s return this.
    #[error("speech recognition unavailable: {0}")]
    Recognition(String),
}

// ---------------------------------------------------------------------------
// split_words
// ---------------------------------------------------------------------------

/// Split free-form text into the word list consumed by the sequencer.
///
/// ```
/// use sign_speech::input::split_words;
///
/// assert_eq!(split_words("  hello   big\tworld \n"), ["hello", "big", "world"]);
/// assert!(split_words("   ").is_empty());
/// ```
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// WordSource trait
// ---------------------------------------------------------------------------

/// Async producer of final transcript segments.
///
/// Implementors must be `Send` so a source can be driven from a tokio task.
/// Stream-backed sources surface read failures as [`SourceError::Io`];
/// sources wrapping a speech recogniser report engine failures as
/// [`SourceError::Recognition`], which ends [`crate::SignSession::run`].
#[async_trait]
pub trait WordSource: Send {
    /// Next non-blank segment, or `Ok(None)` once the source is exhausted.
    async fn next_segment(&mut self) -> Result<Option<String>, SourceError>;
}

// ---------------------------------------------------------------------------
// LineSource
// ---------------------------------------------------------------------------

/// Treats each non-blank line of an async reader as one final segment.
///
/// ```rust,no_run
/// use sign_speech::input::{LineSource, WordSource};
/// use tokio::io::BufReader;
///
/// # async fn example() -> Result<(), sign_speech::input::SourceError> {
/// let mut source = LineSource::new(BufReader::new(tokio::io::stdin()));
/// while let Some(segment) = source.next_segment().await? {
///     println!("{segment}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct LineSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> WordSource for LineSource<R> {
    async fn next_segment(&mut self) -> Result<Option<String>, SourceError> {
        while let Some(line) = self.lines.next_line().await? {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// QueuedSource
// ---------------------------------------------------------------------------

/// In-memory source over a fixed list of segments (command-line words,
/// tests).  Blank segments are skipped like blank lines.
#[derive(Debug, Default)]
pub struct QueuedSource {
    segments: VecDeque<String>,
}

impl QueuedSource {
    pub fn new(segments: impl IntoIterator<Item = String>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }
}

#[async_trait]
impl WordSource for QueuedSource {
    async fn next_segment(&mut self) -> Result<Option<String>, SourceError> {
        while let Some(segment) = self.segments.pop_front() {
            let trimmed = segment.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
