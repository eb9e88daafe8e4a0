//! Pose data model and the static pose tables.
//!
//! * [`model`] — [`SignPose`], [`FingerState`], [`JointRotation`] and the
//!   tag enums.
//! * [`letters`] — 26-entry hand-shape table used for fingerspelling.
//! * [`words`] — whole-word sign vocabulary.
//!
//! Both tables are `static` data: built into the binary, read-only for the
//! lifetime of the process.

pub mod letters;
pub mod model;
pub mod words;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use letters::{letter_pose, letter_shape, SPELLING_BASELINE};
pub use model::{
    FacialExpression, FingerState, JointRotation, PoseTemplate, ResolutionMethod, SignPose,
};
pub use words::{known_words, WordEntry};
