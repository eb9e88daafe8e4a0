//! Word → pose resolution.
//!
//! [`resolve_word`] applies three tiers in strict priority order:
//!
//! ```text
//! normalise (lowercase, keep a-z)
//!   ├─ exact word-table hit          → Dictionary,    confidence 1.0
//!   ├─ keyword category hit          → MlPrediction,  category confidence
//!   ├─ single known letter           → letter pose (Fingerspelling)
//!   └─ anything else                 → "Spell: WORD" representative pose
//! ```
//!
//! Resolution is total and pure: every input yields a pose, and equal inputs
//! yield equal poses.

use crate::pose::{
    letter_pose, letter_shape, words, FingerState, ResolutionMethod, SignPose, SPELLING_BASELINE,
};

use super::category::predict;

/// Lowercase `word` and drop everything outside `a-z`.
///
/// ```
/// use sign_speech::resolver::normalize;
///
/// assert_eq!(normalize("Hello!"), "hello");
/// assert_eq!(normalize("don't"), "dont");
/// assert_eq!(normalize("123"), "");
/// ```
pub fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Resolve a single word to a pose.
pub fn resolve_word(word: &str) -> SignPose {
    let normalized = normalize(word);

    // Tier 1: exact dictionary match.
    if let Some(template) = words::lookup(&normalized) {
        return template.to_pose(ResolutionMethod::Dictionary, 1.0);
    }

    // Tier 2: keyword category prediction.
    if let Some(prediction) = predict(&normalized) {
        let mut pose = prediction
            .template
            .to_pose(ResolutionMethod::MlPrediction, prediction.confidence);
        pose.description = format!("{word} (ML)");
        return pose;
    }

    // Tier 3: fingerspelling.
    let mut letters = normalized.chars();
    let first = letters.next();
    if let (Some(letter), None) = (first, letters.next()) {
        return letter_pose(letter);
    }

    let mut pose = SPELLING_BASELINE.to_pose(ResolutionMethod::Fingerspelling, 1.0);
    pose.right_hand = first.and_then(letter_shape).unwrap_or(FingerState::OPEN);
    pose.description = format!("Spell: {}", word.to_uppercase());
    pose
}

/// Resolve a single letter to its fingerspelling pose.
pub fn resolve_letter(letter: char) -> SignPose {
    letter_pose(letter)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
