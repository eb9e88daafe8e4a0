//! Word pose table: the closed vocabulary of whole-word signs.
//!
//! Entries are stored as [`PoseTemplate`]s in a `static` slice and are never
//! mutated.  [`lookup`] hands out the template by shared reference; callers
//! turn it into an owned [`SignPose`](super::SignPose) with
//! [`PoseTemplate::to_pose`] before attaching any metadata.

use super::model::{FacialExpression, FingerState, JointRotation, PoseTemplate};

/// Left arm hanging at rest (matches the idle pose).
const LEFT_SHOULDER_REST: JointRotation = JointRotation::new(0.0, 0.0, 0.4);

/// One row of the word table.
pub struct WordEntry {
    /// Lowercase, alphabetic-only key.
    pub word: &'static str,
    pub template: PoseTemplate,
}

static WORD_POSES: &[WordEntry] = &[
    WordEntry {
        word: "hello",
        template: PoseTemplate {
            description: "Hello",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-1.2, 0.3, -0.8),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.0, 0.0, 0.5),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "hi",
        template: PoseTemplate {
            description: "Hi",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-1.4, 0.2, -0.6),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.3, 0.0, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "goodbye",
        template: PoseTemplate {
            description: "Goodbye",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-1.3, 0.4, -0.7),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            left_wrist: JointRotation::new(0.0, 0.0, 0.6),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "bye",
        template: PoseTemplate {
            description: "Bye",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-1.3, 0.4, -0.7),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            left_wrist: JointRotation::new(0.0, 0.0, 0.6),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "thank",
        template: PoseTemplate {
            description: "Thank You",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.3, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            left_wrist: JointRotation::new(0.4, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "thanks",
        template: PoseTemplate {
            description: "Thanks",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.3, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            left_wrist: JointRotation::new(0.4, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "please",
        template: PoseTemplate {
            description: "Please",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.2, 0.0, -0.1),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.0, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.0, 0.3, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "sorry",
        template: PoseTemplate {
            description: "Sorry",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.2, 0.0, -0.1),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.2, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Sad,
        },
    },
    WordEntry {
        word: "yes",
        template: PoseTemplate {
            description: "Yes",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(0.0, 0.0, -0.3),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.4, 0.0, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "no",
        template: PoseTemplate {
            description: "No",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.5, 0.0, -0.3),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.4, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "good",
        template: PoseTemplate {
            description: "Good",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.4, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.7, 0.0, 0.0),
            left_wrist: JointRotation::new(0.3, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "bad",
        template: PoseTemplate {
            description: "Bad",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(0.2, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            left_wrist: JointRotation::new(-0.3, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Sad,
        },
    },
    WordEntry {
        word: "happy",
        template: PoseTemplate {
            description: "Happy",
            left_shoulder: JointRotation::new(-0.6, 0.0, 0.6),
            right_shoulder: JointRotation::new(-0.6, 0.0, -0.6),
            left_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "sad",
        template: PoseTemplate {
            description: "Sad",
            left_shoulder: JointRotation::new(0.2, 0.0, 0.2),
            right_shoulder: JointRotation::new(0.2, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::ZERO,
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Sad,
        },
    },
    WordEntry {
        word: "love",
        template: PoseTemplate {
            description: "Love",
            left_shoulder: JointRotation::new(-0.3, 0.3, 0.5),
            right_shoulder: JointRotation::new(-0.3, -0.3, -0.5),
            left_elbow: JointRotation::new(-1.2, 0.0, 0.0),
            right_elbow: JointRotation::new(-1.2, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::FIST,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "help",
        template: PoseTemplate {
            description: "Help",
            left_shoulder: JointRotation::new(-0.5, 0.0, 0.5),
            right_shoulder: JointRotation::new(-0.8, 0.0, -0.3),
            left_elbow: JointRotation::new(-0.3, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            left_wrist: JointRotation::new(0.3, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "i",
        template: PoseTemplate {
            description: "I / Me",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.1, 0.0, -0.1),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.2, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "me",
        template: PoseTemplate {
            description: "Me",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.1, 0.0, -0.1),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.2, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "you",
        template: PoseTemplate {
            description: "You",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.6, 0.0, -0.3),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.3, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "we",
        template: PoseTemplate {
            description: "We",
            left_shoulder: JointRotation::new(-0.4, 0.0, 0.5),
            right_shoulder: JointRotation::new(-0.4, 0.0, -0.5),
            left_elbow: JointRotation::new(-0.3, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.3, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "what",
        template: PoseTemplate {
            description: "What?",
            left_shoulder: JointRotation::new(-0.5, 0.0, 0.7),
            right_shoulder: JointRotation::new(-0.5, 0.0, -0.7),
            left_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.5, 0.0, 0.0),
            left_wrist: JointRotation::new(0.0, 0.0, 0.3),
            right_wrist: JointRotation::new(0.0, 0.0, -0.3),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Questioning,
        },
    },
    WordEntry {
        word: "where",
        template: PoseTemplate {
            description: "Where?",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.7, 0.2, -0.5),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.4, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.0, 0.0, 0.4),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Questioning,
        },
    },
    WordEntry {
        word: "who",
        template: PoseTemplate {
            description: "Who?",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.5, 0.0, -0.3),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.0, 0.3, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Questioning,
        },
    },
    WordEntry {
        word: "eat",
        template: PoseTemplate {
            description: "Eat",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.3, 0.2, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.4, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.3, 0.0, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "drink",
        template: PoseTemplate {
            description: "Drink",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.4, 0.2, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.5, 0.0, 0.0),
            left_wrist: JointRotation::new(0.5, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "sleep",
        template: PoseTemplate {
            description: "Sleep",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.5, 0.3, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.3, 0.0, 0.0),
            left_wrist: JointRotation::new(0.4, 0.0, 0.0),
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "work",
        template: PoseTemplate {
            description: "Work",
            left_shoulder: JointRotation::new(-0.3, 0.0, 0.3),
            right_shoulder: JointRotation::new(-0.3, 0.0, -0.3),
            left_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::FIST,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "friend",
        template: PoseTemplate {
            description: "Friend",
            left_shoulder: JointRotation::new(-0.4, 0.2, 0.4),
            right_shoulder: JointRotation::new(-0.4, -0.2, -0.4),
            left_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "water",
        template: PoseTemplate {
            description: "Water",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.3, 0.0, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.0, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.0, 0.4, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "food",
        template: PoseTemplate {
            description: "Food",
            left_shoulder: LEFT_SHOULDER_REST,
            right_shoulder: JointRotation::new(-0.3, 0.2, -0.2),
            left_elbow: JointRotation::ZERO,
            right_elbow: JointRotation::new(-1.3, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::new(0.3, 0.0, 0.0),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::FIST,
            facial_expression: FacialExpression::Neutral,
        },
    },
    WordEntry {
        word: "home",
        template: PoseTemplate {
            description: "Home",
            left_shoulder: JointRotation::new(-0.3, 0.0, 0.4),
            right_shoulder: JointRotation::new(-0.3, 0.0, -0.4),
            left_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.8, 0.0, 0.0),
            left_wrist: JointRotation::new(0.2, 0.0, 0.3),
            right_wrist: JointRotation::new(0.2, 0.0, -0.3),
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Smile,
        },
    },
    WordEntry {
        word: "school",
        template: PoseTemplate {
            description: "School",
            left_shoulder: JointRotation::new(-0.5, 0.0, 0.5),
            right_shoulder: JointRotation::new(-0.5, 0.0, -0.5),
            left_elbow: JointRotation::new(-0.4, 0.0, 0.0),
            right_elbow: JointRotation::new(-0.4, 0.0, 0.0),
            left_wrist: JointRotation::ZERO,
            right_wrist: JointRotation::ZERO,
            left_hand: FingerState::OPEN,
            right_hand: FingerState::OPEN,
            facial_expression: FacialExpression::Neutral,
        },
    },
];

/// Find the template for an already-normalised word (lowercase, `a-z` only).
pub fn lookup(word: &str) -> Option<&'static PoseTemplate> {
    WORD_POSES
        .iter()
        .find(|entry| entry.word == word)
        .map(|entry| &entry.template)
}

/// Template for a word the heuristic tier borrows from.
///
/// Only called with keys that exist in the table; falls back to the idle
/// template rather than panicking if one is ever removed.
pub(crate) fn template(word: &str) -> &'static PoseTemplate {
    lookup(word).unwrap_or(&PoseTemplate::IDLE)
}

/// All words in the table, in table order.
pub fn known_words() -> Vec<&'static str> {
    WORD_POSES.iter().map(|entry| entry.word).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
