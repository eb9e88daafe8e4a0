//! Session orchestrator — feeds word-source segments to the sequencer.
//!
//! [`SignSession`] owns a [`SequencePlayer`], the [`Transcript`] and the
//! current [`AppConfig`].  Each final segment is logged, split into words
//! and handed to [`SequencePlayer::play_sequence`].
//!
//! ```text
//! WordSource::next_segment()
//!   └─▶ transcript.push(segment)
//!         └─▶ [wait_for_idle] player.wait_idle()
//!               └─▶ player.play_sequence(split_words(segment))
//! ```

use crate::config::AppConfig;
use crate::input::{split_words, SourceError, Transcript, WordSource};
use crate::sequencer::{PlayStatus, SequencePlayer};

/// Ties a word source, the transcript and the player together.
pub struct SignSession {
    player: SequencePlayer,
    transcript: Transcript,
    config: AppConfig,
}

impl SignSession {
    pub fn new(player: SequencePlayer, config: AppConfig) -> Self {
        Self {
            player,
            transcript: Transcript::with_capacity(config.input.transcript_capacity),
            config,
        }
    }

    pub fn player(&self) -> &SequencePlayer {
        &self.player
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Log `text` and try to play it.  Blank text is neither logged nor
    /// played.
    pub fn submit_text(&mut self, text: &str) -> PlayStatus {
        let words = split_words(text);
        if words.is_empty() {
            return PlayStatus::Empty;
        }
        self.transcript.push(text.trim().to_string());
        if let Some(entry) = self.transcript.last() {
            log::info!("transcript: {entry}");
        }
        self.player.play_sequence(words, self.config.playback)
    }

    /// Stop playback and forget the current word list.
    pub fn clear(&mut self) {
        self.player.cancel_sequence();
    }

    /// Drain `source`, submitting every segment.
    ///
    /// With `input.wait_for_idle` set, each segment waits for the previous
    /// sequence to finish; otherwise segments arriving mid-sequence are
    /// dropped by the player.  Returns once the source is exhausted and the
    /// last sequence has finished.
    pub async fn run<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<(), SourceError> {
        while let Some(segment) = source.next_segment().await? {
            if self.config.input.wait_for_idle {
                self.player.wait_idle().await;
            }
            match self.submit_text(&segment) {
                PlayStatus::Started => {}
                PlayStatus::Busy => log::warn!("session: busy, segment dropped: {segment:?}"),
                PlayStatus::NoRuntime => {
                    log::warn!("session: no runtime, segment dropped: {segment:?}")
                }
                PlayStatus::Empty => {}
            }
        }
        self.player.wait_idle().await;
        log::info!("session: source exhausted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
