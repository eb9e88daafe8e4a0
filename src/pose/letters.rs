//! Letter pose table for fingerspelling.
//!
//! Only the dominant (right) hand shape varies between letters.  Every letter
//! shares [`SPELLING_BASELINE`]: right arm raised with the palm presented,
//! left arm at rest.  Shapes are approximations of the one-handed manual
//! alphabet; motion letters (`J`, `Z`) use their starting shape.

use super::model::{
    FacialExpression, FingerState, JointRotation, PoseTemplate, ResolutionMethod, SignPose,
};

/// Shared arm/body baseline for every fingerspelled pose.
pub const SPELLING_BASELINE: PoseTemplate = PoseTemplate {
    description: "Fingerspelling",
    left_shoulder: JointRotation::new(0.0, 0.0, 0.4),
    right_shoulder: JointRotation::new(-0.7, 0.0, -0.4),
    left_elbow: JointRotation::ZERO,
    right_elbow: JointRotation::new(-0.6, 0.0, 0.0),
    left_wrist: JointRotation::ZERO,
    right_wrist: JointRotation::ZERO,
    left_hand: FingerState::OPEN,
    right_hand: FingerState::OPEN,
    facial_expression: FacialExpression::Neutral,
};

/// Right-hand shapes for `a` through `z`, indexed by `letter - b'a'`.
///
/// Values are (thumb, index, middle, ring, pinky).
static LETTER_SHAPES: [FingerState; 26] = [
    FingerState::new(0.2, 1.0, 1.0, 1.0, 1.0), // a
    FingerState::new(0.8, 0.0, 0.0, 0.0, 0.0), // b
    FingerState::new(0.4, 0.5, 0.5, 0.5, 0.5), // c
    FingerState::new(0.6, 0.0, 0.8, 0.8, 0.8), // d
    FingerState::new(1.0, 0.8, 0.8, 0.8, 0.8), // e
    FingerState::new(0.6, 0.7, 0.0, 0.0, 0.0), // f
    FingerState::new(0.3, 0.0, 1.0, 1.0, 1.0), // g
    FingerState::new(0.6, 0.0, 0.0, 1.0, 1.0), // h
    FingerState::new(0.8, 1.0, 1.0, 1.0, 0.0), // i
    FingerState::new(0.9, 1.0, 1.0, 1.0, 0.0), // j
    FingerState::new(0.3, 0.0, 0.2, 1.0, 1.0), // k
    FingerState::new(0.0, 0.0, 1.0, 1.0, 1.0), // l
    FingerState::new(1.0, 0.9, 0.9, 0.9, 1.0), // m
    FingerState::new(1.0, 0.9, 0.9, 1.0, 1.0), // n
    FingerState::new(0.6, 0.6, 0.6, 0.6, 0.6), // o
    FingerState::new(0.3, 0.0, 0.4, 1.0, 1.0), // p
    FingerState::new(0.3, 0.2, 1.0, 1.0, 1.0), // q
    FingerState::new(0.8, 0.1, 0.1, 1.0, 1.0), // r
    FingerState::new(0.7, 1.0, 1.0, 1.0, 1.0), // s
    FingerState::new(0.5, 0.8, 1.0, 1.0, 1.0), // t
    FingerState::new(0.8, 0.0, 0.0, 1.0, 1.0), // u
    FingerState::new(0.7, 0.0, 0.0, 1.0, 1.0), // v
    FingerState::new(0.8, 0.0, 0.0, 0.0, 1.0), // w
    FingerState::new(0.8, 0.5, 1.0, 1.0, 1.0), // x
    FingerState::new(0.0, 1.0, 1.0, 1.0, 0.0), // y
    FingerState::new(0.8, 0.0, 1.0, 1.0, 1.0), // z
];

/// Hand shape for `letter` (case-insensitive), or `None` if it is not an
/// ASCII letter.
pub fn letter_shape(letter: char) -> Option<FingerState> {
    if !letter.is_ascii_alphabetic() {
        return None;
    }
    let idx = (letter.to_ascii_lowercase() as u8 - b'a') as usize;
    LETTER_SHAPES.get(idx).copied()
}

/// Fingerspelling pose for a single letter.
///
/// Never fails: anything that is not an ASCII letter gets the open hand.
/// The description is `"Letter: X"` with the letter uppercased.
pub fn letter_pose(letter: char) -> SignPose {
    let mut pose = SPELLING_BASELINE.to_pose(ResolutionMethod::Fingerspelling, 1.0);
    pose.right_hand = letter_shape(letter).unwrap_or(FingerState::OPEN);
    pose.description = format!("Letter: {}", letter.to_uppercase());
    pose
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_letter_has_a_shape_in_range() {
        for c in 'a'..='z' {
            let shape = letter_shape(c).expect("letter shape");
            for curl in shape.curls() {
                assert!((0.0..=1.0).contains(&curl), "{c}: {curl}");
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(letter_shape('Q'), letter_shape('q'));
        assert_eq!(letter_pose('Q').right_hand, letter_pose('q').right_hand);
    }

    #[test]
    fn non_letters_have_no_shape() {
        assert_eq!(letter_shape('1'), None);
        assert_eq!(letter_shape(' '), None);
        assert_eq!(letter_shape('é'), None);
    }

    #[test]
    fn letter_pose_uses_baseline_and_metadata() {
        let pose = letter_pose('b');
        assert_eq!(pose.description, "Letter: B");
        assert_eq!(pose.method, ResolutionMethod::Fingerspelling);
        assert_eq!(pose.confidence, 1.0);
        assert_eq!(pose.right_shoulder, SPELLING_BASELINE.right_shoulder);
        assert_eq!(pose.right_elbow, SPELLING_BASELINE.right_elbow);
        assert_eq!(pose.left_shoulder, SPELLING_BASELINE.left_shoulder);
        assert_eq!(pose.left_hand, FingerState::OPEN);
        assert_eq!(pose.right_hand, FingerState::new(0.8, 0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn unknown_letter_degrades_to_open_hand() {
        let pose = letter_pose('7');
        assert_eq!(pose.description, "Letter: 7");
        assert_eq!(pose.right_hand, FingerState::OPEN);
        assert_eq!(pose.method, ResolutionMethod::Fingerspelling);
    }

    #[test]
    fn distinct_letters_mostly_differ() {
        assert_ne!(letter_shape('a'), letter_shape('b'));
        assert_ne!(letter_shape('x'), letter_shape('q'));
        assert_ne!(letter_shape('l'), letter_shape('y'));
    }
}
