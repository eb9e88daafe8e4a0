//! Playback controller — walks a word list and publishes one pose at a time.
//!
//! [`SequencePlayer`] owns the [`SharedState`] and a `tokio::sync::watch`
//! channel mirroring it.  [`play_sequence`](SequencePlayer::play_sequence)
//! spawns a tokio task that drives a [`Timeline`]:
//!
//! ```text
//! play_sequence(words)
//!   ├─ already Running → dropped (PlayStatus::Busy)
//!   ├─ no words        → dropped (PlayStatus::Empty)
//!   ├─ no tokio runtime → dropped (PlayStatus::NoRuntime)
//!   └─ generation += 1, Running, spawn drive():
//!         loop {
//!           step = timeline.next()         (None → Idle, index = None)
//!           generation still current?      (no  → stop silently)
//!           publish pose + word index
//!           sleep(step.dwell)
//!         }
//!
//! cancel_sequence()
//!   └─ generation += 1, Idle, idle pose, index = None   (synchronous)
//! ```
//!
//! Cancellation is cooperative: the task notices at its next wake-up and
//! exits without publishing.  The visible state is reset by
//! `cancel_sequence` itself, so consumers never wait for the task.

use std::sync::{Arc, MutexGuard, PoisonError};

use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::config::PlaybackConfig;
use crate::pose::SignPose;

use super::state::{
    new_shared_state, PlaybackPhase, PlaybackSnapshot, PlaybackState, SharedState,
};
use super::timeline::{Step, Timeline};

// ---------------------------------------------------------------------------
// PlayStatus
// ---------------------------------------------------------------------------

/// Outcome of a play request.  Dropped requests are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStatus {
    /// The sequence was accepted and is now playing.
    Started,
    /// Another sequence is playing; the request was ignored.
    Busy,
    /// The word list was empty; nothing to play.
    Empty,
    /// Called outside a tokio runtime; nothing was started.
    NoRuntime,
}

// ---------------------------------------------------------------------------
// SequencePlayer
// ---------------------------------------------------------------------------

/// Cancellable, time-paced sign sequence player.
///
/// Cheap to clone; all clones control the same timeline.
///
/// ```rust,no_run
/// use sign_speech::config::PlaybackConfig;
/// use sign_speech::sequencer::SequencePlayer;
///
/// # async fn example() {
/// let player = SequencePlayer::new();
/// let mut updates = player.subscribe();
///
/// player.play_sequence(vec!["hello".into(), "xq".into()], PlaybackConfig::default());
/// while updates.changed().await.is_ok() {
///     let snap = updates.borrow_and_update().clone();
///     println!("{} {:?}", snap.active_pose.description, snap.current_word_index);
///     if !snap.is_running {
///         break;
///     }
/// }
/// # }
/// ```
#[derive(Clone)]
pub struct SequencePlayer {
    state: SharedState,
    updates: Arc<watch::Sender<PlaybackSnapshot>>,
}

impl SequencePlayer {
    /// Create an idle player.
    pub fn new() -> Self {
        Self::with_state(new_shared_state())
    }

    /// Create a player around an existing shared state (e.g. one a UI
    /// already polls).
    pub fn with_state(state: SharedState) -> Self {
        let initial = lock(&state).snapshot();
        let (updates, _) = watch::channel(initial);
        Self {
            state,
            updates: Arc::new(updates),
        }
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Handle to the underlying state for polling.
    pub fn state(&self) -> SharedState {
        Arc::clone(&self.state)
    }

    /// Current state as an owned snapshot.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        lock(&self.state).snapshot()
    }

    /// Receiver that is notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.updates.subscribe()
    }

    pub fn is_running(&self) -> bool {
        lock(&self.state).is_running()
    }

    pub fn active_pose(&self) -> SignPose {
        lock(&self.state).active_pose.clone()
    }

    pub fn current_word_index(&self) -> Option<usize> {
        lock(&self.state).current_word_index
    }

    /// Resolve once no sequence is playing.
    pub async fn wait_idle(&self) {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|snap| !snap.is_running).await;
    }

    // -----------------------------------------------------------------------
    // Control
    // -----------------------------------------------------------------------

    /// Start playing `words`, unless a sequence is already running.
    ///
    /// The playback task is spawned on the current tokio runtime; outside one
    /// the request is dropped with [`PlayStatus::NoRuntime`] and the state is
    /// left untouched.  Invalid pacing fields are replaced (see
    /// [`PlaybackConfig::repaired`]) rather than rejected.
    pub fn play_sequence(&self, words: Vec<String>, config: PlaybackConfig) -> PlayStatus {
        if words.is_empty() {
            log::debug!("sequencer: empty word list ignored");
            return PlayStatus::Empty;
        }

        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("sequencer: play request dropped, no tokio runtime: {e}");
                return PlayStatus::NoRuntime;
            }
        };

        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("sequencer: {e}; replacing invalid pacing");
                config.repaired()
            }
        };

        let generation = {
            let mut st = lock(&self.state);
            if st.is_running() {
                log::warn!(
                    "sequencer: play request for {} word(s) dropped, a sequence is already running",
                    words.len()
                );
                return PlayStatus::Busy;
            }
            st.generation += 1;
            st.phase = PlaybackPhase::Running;
            st.words = words.clone();
            st.current_word_index = None;
            self.updates.send_replace(st.snapshot());
            st.generation
        };

        log::info!(
            "sequencer: playing {} word(s) at speed {} / pause {} ms",
            words.len(),
            config.speed_multiplier,
            config.pause_duration_ms
        );

        let timeline = Timeline::new(words, &config);
        runtime.spawn(drive(self.clone(), generation, timeline));
        PlayStatus::Started
    }

    /// Stop any running sequence and reset the visible state to idle.
    ///
    /// Always succeeds; a no-op apart from the reset when already idle.
    pub fn cancel_sequence(&self) {
        let mut st = lock(&self.state);
        if st.is_running() {
            log::info!("sequencer: sequence cancelled");
        }
        st.generation += 1;
        st.phase = PlaybackPhase::Idle;
        st.active_pose = SignPose::idle();
        st.current_word_index = None;
        st.words.clear();
        self.updates.send_replace(st.snapshot());
    }

    // -----------------------------------------------------------------------
    // Helpers used by the playback task
    // -----------------------------------------------------------------------

    /// Publish `step` if `generation` still owns the timeline.
    fn publish_step(&self, generation: u64, step: &Step) -> bool {
        let mut st = lock(&self.state);
        if !st.owns(generation) {
            return false;
        }
        log::debug!(
            "sequencer: word {} → {} ({:?}, {:.2})",
            step.word_index,
            step.pose.description,
            step.pose.method,
            step.pose.confidence
        );
        st.active_pose = step.pose.clone();
        st.current_word_index = Some(step.word_index);
        self.updates.send_replace(st.snapshot());
        true
    }

    /// Return to idle after the last step, if `generation` is still current.
    fn finish(&self, generation: u64) {
        let mut st = lock(&self.state);
        if !st.owns(generation) {
            return;
        }
        st.phase = PlaybackPhase::Idle;
        st.current_word_index = None;
        self.updates.send_replace(st.snapshot());
        log::info!("sequencer: sequence complete");
    }
}

impl Default for SequencePlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback task body: one pose per step, one sleep per step.
async fn drive(player: SequencePlayer, generation: u64, timeline: Timeline) {
    for step in timeline {
        if !player.publish_step(generation, &step) {
            log::debug!("sequencer: generation {generation} stopped");
            return;
        }
        tokio::time::sleep(step.dwell).await;
    }
    player.finish(generation);
}

fn lock(state: &SharedState) -> MutexGuard<'_, PlaybackState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
