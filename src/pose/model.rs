//! Pose data model shared by the tables, the resolver and the sequencer.
//!
//! A [`SignPose`] is a complete set of *targets* for the avatar: six joint
//! rotations, two hand shapes and a facial expression.  The renderer is
//! responsible for interpolating toward it; nothing in this crate produces
//! intermediate frames.
//!
//! All types are `Serialize`/`Deserialize` so the binary can stream poses to
//! an out-of-process renderer as JSON lines.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FingerState
// ---------------------------------------------------------------------------

/// Per-finger curl amounts for one hand.
///
/// Each value lies in `[0, 1]`: `0.0` is fully extended, `1.0` fully curled.
/// Intermediate values describe partial curls such as the rounded "C" or
/// "O" hand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerState {
    pub thumb: f32,
    pub index: f32,
    pub middle: f32,
    pub ring: f32,
    pub pinky: f32,
}

impl FingerState {
    /// Flat, fully open hand.  Also the fallback for any unknown letter.
    pub const OPEN: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0);

    /// Closed fist.
    pub const FIST: Self = Self::new(1.0, 1.0, 1.0, 1.0, 1.0);

    pub const fn new(thumb: f32, index: f32, middle: f32, ring: f32, pinky: f32) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }

    /// The five curls in thumb → pinky order.
    pub fn curls(&self) -> [f32; 5] {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
    }
}

impl Default for FingerState {
    fn default() -> Self {
        Self::OPEN
    }
}

// ---------------------------------------------------------------------------
// JointRotation
// ---------------------------------------------------------------------------

/// Target Euler rotation (radians) for a single shoulder, elbow or wrist.
///
/// No range constraint is applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointRotation {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl JointRotation {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Default for JointRotation {
    fn default() -> Self {
        Self::ZERO
    }
}

// ---------------------------------------------------------------------------
// FacialExpression
// ---------------------------------------------------------------------------

/// Facial expression tag shown alongside a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacialExpression {
    #[default]
    Neutral,
    Smile,
    Sad,
    Questioning,
}

// ---------------------------------------------------------------------------
// ResolutionMethod
// ---------------------------------------------------------------------------

/// Which resolution tier produced a pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    /// Exact match in the word table.
    Dictionary,
    /// Keyword-category heuristic.
    MlPrediction,
    /// Letter-by-letter manual alphabet.
    Fingerspelling,
}

impl ResolutionMethod {
    /// Status label for a pose resolved with this method.
    ///
    /// ```
    /// use sign_speech::pose::ResolutionMethod;
    ///
    /// assert_eq!(ResolutionMethod::Dictionary.label(1.0), "Dictionary");
    /// assert_eq!(ResolutionMethod::MlPrediction.label(0.75), "ML (75%)");
    /// assert_eq!(ResolutionMethod::Fingerspelling.label(1.0), "Fingerspelling");
    /// ```
    pub fn label(&self, confidence: f32) -> String {
        match self {
            ResolutionMethod::Dictionary => "Dictionary".to_string(),
            ResolutionMethod::MlPrediction => {
                format!("ML ({:.0}%)", confidence * 100.0)
            }
            ResolutionMethod::Fingerspelling => "Fingerspelling".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// SignPose
// ---------------------------------------------------------------------------

/// A fully populated pose target plus the metadata describing how it was
/// resolved.
///
/// Every field is always present; [`SignPose::idle`] is the renderable rest
/// pose used at startup and after a cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignPose {
    /// Human-readable label (word, letter, or `"Spell: WORD"`).
    pub description: String,
    pub left_shoulder: JointRotation,
    pub right_shoulder: JointRotation,
    pub left_elbow: JointRotation,
    pub right_elbow: JointRotation,
    pub left_wrist: JointRotation,
    pub right_wrist: JointRotation,
    pub left_hand: FingerState,
    pub right_hand: FingerState,
    pub facial_expression: FacialExpression,
    pub method: ResolutionMethod,
    /// In `(0, 1]`; `1.0` for dictionary and fingerspelling hits.
    pub confidence: f32,
}

impl SignPose {
    /// Arms hanging at rest, open hands, neutral face.
    pub fn idle() -> Self {
        PoseTemplate::IDLE.to_pose(ResolutionMethod::Dictionary, 1.0)
    }

    /// `true` when this pose is the idle rest pose.
    pub fn is_idle(&self) -> bool {
        *self == Self::idle()
    }

    /// Status label combining method and confidence, e.g. `"ML (70%)"`.
    pub fn method_label(&self) -> String {
        self.method.label(self.confidence)
    }
}

impl Default for SignPose {
    fn default() -> Self {
        Self::idle()
    }
}

// ---------------------------------------------------------------------------
// PoseTemplate
// ---------------------------------------------------------------------------

/// A [`SignPose`] without method and confidence, as stored at rest in the
/// static tables.
///
/// Templates live in `static` tables and are only ever read through
/// [`PoseTemplate::to_pose`], which builds a fresh owned [`SignPose`] for
/// each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseTemplate {
    pub description: &'static str,
    pub left_shoulder: JointRotation,
    pub right_shoulder: JointRotation,
    pub left_elbow: JointRotation,
    pub right_elbow: JointRotation,
    pub left_wrist: JointRotation,
    pub right_wrist: JointRotation,
    pub left_hand: FingerState,
    pub right_hand: FingerState,
    pub facial_expression: FacialExpression,
}

impl PoseTemplate {
    /// Rest pose: arms down and slightly out from the torso.
    pub const IDLE: Self = Self {
        description: "Idle",
        left_shoulder: JointRotation::new(0.0, 0.0, 0.4),
        right_shoulder: JointRotation::new(0.0, 0.0, -0.4),
        left_elbow: JointRotation::ZERO,
        right_elbow: JointRotation::ZERO,
        left_wrist: JointRotation::ZERO,
        right_wrist: JointRotation::ZERO,
        left_hand: FingerState::OPEN,
        right_hand: FingerState::OPEN,
        facial_expression: FacialExpression::Neutral,
    };

    /// Build an owned pose from this template, attaching resolution metadata.
    pub fn to_pose(&self, method: ResolutionMethod, confidence: f32) -> SignPose {
        SignPose {
            description: self.description.to_string(),
            left_shoulder: self.left_shoulder,
            right_shoulder: self.right_shoulder,
            left_elbow: self.left_elbow,
            right_elbow: self.right_elbow,
            left_wrist: self.left_wrist,
            right_wrist: self.right_wrist,
            left_hand: self.left_hand,
            right_hand: self.right_hand,
            facial_expression: self.facial_expression,
            method,
            confidence,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
