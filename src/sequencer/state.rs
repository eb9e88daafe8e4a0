//! Playback phase and the observable state consumed by renderers and UIs.
//!
//! [`PlaybackState`] is the single source of truth: active pose, highlighted
//! word, processed word list and phase.  It lives behind [`SharedState`]
//! (`Arc<Mutex<PlaybackState>>`) so a UI loop can poll it every frame;
//! [`PlaybackSnapshot`] is the owned copy pushed to subscribers.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::pose::SignPose;

// ---------------------------------------------------------------------------
// PlaybackPhase
// ---------------------------------------------------------------------------

/// Sequencer phase.
///
/// ```text
/// Idle ──play (non-empty words)──▶ Running
/// Running ──last step dwell elapsed──▶ Idle
/// Running ──cancel──▶ Idle
/// Running ──play──▶ Running   (request dropped)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    /// No sequence is playing.
    #[default]
    Idle,
    /// A sequence is being walked.
    Running,
}

impl PlaybackPhase {
    /// `true` while a sequence is playing.
    ///
    /// ```
    /// use sign_speech::sequencer::PlaybackPhase;
    ///
    /// assert!(!PlaybackPhase::Idle.is_busy());
    /// assert!(PlaybackPhase::Running.is_busy());
    /// ```
    pub fn is_busy(&self) -> bool {
        matches!(self, PlaybackPhase::Running)
    }

    /// Short label for a status bar.
    pub fn label(&self) -> &'static str {
        match self {
            PlaybackPhase::Idle => "Idle",
            PlaybackPhase::Running => "Playing",
        }
    }
}

// ---------------------------------------------------------------------------
// PlaybackSnapshot
// ---------------------------------------------------------------------------

/// Owned view of the playback state at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    pub active_pose: SignPose,
    /// Index into `words` of the word being signed; `None` when idle.
    pub current_word_index: Option<usize>,
    pub is_running: bool,
    /// Words of the current (or last completed) sequence.
    pub words: Vec<String>,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        PlaybackState::default().snapshot()
    }
}

// ---------------------------------------------------------------------------
// PlaybackState
// ---------------------------------------------------------------------------

/// Mutable playback state owned by the sequencer.
#[derive(Debug, Clone)]
pub struct PlaybackState {
    pub phase: PlaybackPhase,
    pub active_pose: SignPose,
    pub current_word_index: Option<usize>,
    pub words: Vec<String>,
    /// Bumped by every accepted play request and every cancel.  A playback
    /// task only publishes while its own generation is current.
    pub generation: u64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            active_pose: SignPose::idle(),
            current_word_index: None,
            words: Vec::new(),
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_busy()
    }

    /// `true` when `generation` belongs to the sequence that is playing now.
    pub fn owns(&self, generation: u64) -> bool {
        self.is_running() && self.generation == generation
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            active_pose: self.active_pose.clone(),
            current_word_index: self.current_word_index,
            is_running: self.is_running(),
            words: self.words.clone(),
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// SharedState
// ---------------------------------------------------------------------------

/// Thread-safe handle to [`PlaybackState`].
///
/// Lock for a short critical section; do **not** hold the lock across
/// `.await` points.
pub type SharedState = Arc<Mutex<PlaybackState>>;

/// Construct a new [`SharedState`] in the idle phase.
pub fn new_shared_state() -> SharedState {
    Arc::new(Mutex::new(PlaybackState::new()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = PlaybackState::default();
        assert_eq!(state.phase, PlaybackPhase::Idle);
        assert!(!state.is_running());
        assert!(state.active_pose.is_idle());
        assert_eq!(state.current_word_index, None);
        assert!(state.words.is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(PlaybackPhase::Idle.label(), "Idle");
        assert_eq!(PlaybackPhase::Running.label(), "Playing");
        assert_eq!(PlaybackPhase::default(), PlaybackPhase::Idle);
    }

    #[test]
    fn owns_requires_running_and_matching_generation() {
        let mut state = PlaybackState::new();
        state.generation = 3;
        assert!(!state.owns(3));

        state.phase = PlaybackPhase::Running;
        assert!(state.owns(3));
        assert!(!state.owns(2));
    }

    #[test]
    fn snapshot_copies_fields() {
        let mut state = PlaybackState::new();
        state.phase = PlaybackPhase::Running;
        state.current_word_index = Some(2);
        state.words = vec!["a".into(), "b".into(), "c".into()];

        let snap = state.snapshot();
        assert!(snap.is_running);
        assert_eq!(snap.current_word_index, Some(2));
        assert_eq!(snap.words.len(), 3);
        assert!(snap.active_pose.is_idle());
    }

    #[test]
    fn default_snapshot_is_idle() {
        let snap = PlaybackSnapshot::default();
        assert!(!snap.is_running);
        assert_eq!(snap.current_word_index, None);
        assert!(snap.active_pose.is_idle());
    }

    #[test]
    fn shared_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedState>();
    }

    #[test]
    fn shared_state_can_be_cloned_and_mutated() {
        let state = new_shared_state();
        let state2 = Arc::clone(&state);

        state.lock().unwrap().phase = PlaybackPhase::Running;
        assert!(state2.lock().unwrap().is_running());
    }
}
