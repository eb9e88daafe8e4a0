//! Sign resolution: word → [`SignPose`](crate::pose::SignPose).
//!
//! * [`lookup`] — the three-tier [`resolve_word`] and [`resolve_letter`].
//! * [`category`] — keyword categories used by the prediction tier.

pub mod category;
pub mod lookup;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use category::{predict, Category, Prediction};
pub use lookup::{normalize, resolve_letter, resolve_word};
