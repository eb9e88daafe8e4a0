//! Sequencer: turns an ordered word list into a timed stream of poses.
//!
//! # Architecture
//!
//! ```text
//! play_sequence(words, config)
//!        │
//!        ▼
//! SequencePlayer ──spawn──▶ drive()  ← tokio task
//!        │                    │
//!        │                    ├─ Timeline::next()   resolve word / letter
//!        │                    ├─ publish            SharedState + watch
//!        │                    └─ sleep(dwell)       cancellation checked on wake
//!        │
//!        └─ cancel_sequence()  resets SharedState synchronously
//!
//! SharedState (Arc<Mutex<PlaybackState>>) ←── polled by a UI
//! watch::Receiver<PlaybackSnapshot>        ←── awaited by a renderer
//! ```
//!
//! Only one sequence plays at a time; play requests made while one is
//! running are dropped, not queued.

pub mod player;
pub mod state;
pub mod timeline;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use player::{PlayStatus, SequencePlayer};
pub use state::{new_shared_state, PlaybackPhase, PlaybackSnapshot, PlaybackState, SharedState};
pub use timeline::{letter_dwell, word_dwell, Step, Timeline, LETTER_SETTLE, WORD_SETTLE};
