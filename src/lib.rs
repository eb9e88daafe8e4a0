//! Speech/text → sign-language pose sequencing.
//!
//! Words are resolved to avatar poses in three tiers (exact dictionary,
//! keyword-category prediction, fingerspelling) and played back one pose at
//! a time on a cancellable timeline.  Rendering and speech recognition live
//! outside this crate; they meet it at [`sequencer::PlaybackSnapshot`] and
//! [`input::WordSource`].
//!
//! # Quick start
//!
//! ```rust,no_run
//! use sign_speech::config::PlaybackConfig;
//! use sign_speech::input::split_words;
//! use sign_speech::resolver::resolve_word;
//! use sign_speech::sequencer::SequencePlayer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pose = resolve_word("hello");
//!     println!("{} via {:?}", pose.description, pose.method);
//!
//!     let player = SequencePlayer::new();
//!     player.play_sequence(split_words("hello xq"), PlaybackConfig::default());
//!     player.wait_idle().await;
//! }
//! ```

pub mod config;
pub mod input;
pub mod pose;
pub mod resolver;
pub mod sequencer;
pub mod session;

pub use pose::SignPose;
pub use resolver::{resolve_letter, resolve_word};
pub use sequencer::{PlayStatus, SequencePlayer};
pub use session::SignSession;
