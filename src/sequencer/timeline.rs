//! Step-by-step playback cursor.
//!
//! [`Timeline`] is the explicit state machine behind a running sequence.  It
//! owns the word list, the current word index and, while a word is being
//! fingerspelled, the current letter index.  Each call to
//! [`Timeline::next`] resolves the next pose and says how long it should
//! stay on screen; it has no notion of wall-clock time, so the same cursor
//! can be driven by a tokio timer, a test loop or a frame scheduler.
//!
//! ```text
//! word i ──resolve──┬─ Fingerspelling && len(normalised) > 1
//! │                 │     └─▶ letter 0 … letter n-1   (letter dwell each)
//! │                 └─ otherwise
//! │                       └─▶ resolved pose           (word dwell)
//! └──▶ word i+1 … ──▶ None (finished)
//! ```

use std::time::Duration;

use crate::config::PlaybackConfig;
use crate::pose::{ResolutionMethod, SignPose};
use crate::resolver::{normalize, resolve_letter, resolve_word};

/// Fixed settle added after every whole-word pose.
pub const WORD_SETTLE: Duration = Duration::from_millis(600);

/// Fixed settle added after every fingerspelled letter, so high speed
/// multipliers never collapse letter display time to near zero.
pub const LETTER_SETTLE: Duration = Duration::from_millis(300);

/// Fraction of the base pause used for each fingerspelled letter.
const LETTER_PAUSE_FACTOR: f64 = 0.6;

/// Dwell after a whole-word pose: `pause / speed + 600 ms`.
pub fn word_dwell(config: &PlaybackConfig) -> Duration {
    scaled_millis(config.pause_duration_ms as f64, config.speed_multiplier) + WORD_SETTLE
}

/// Dwell after a letter pose: `pause * 0.6 / speed + 300 ms`.
pub fn letter_dwell(config: &PlaybackConfig) -> Duration {
    scaled_millis(
        config.pause_duration_ms as f64 * LETTER_PAUSE_FACTOR,
        config.speed_multiplier,
    ) + LETTER_SETTLE
}

fn scaled_millis(millis: f64, speed: f32) -> Duration {
    let micros = (millis * 1_000.0 / speed as f64).round();
    Duration::from_micros(micros.max(0.0) as u64)
}

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One pose activation produced by the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Index of the input word this pose belongs to.
    pub word_index: usize,
    /// Letter position within a fingerspelled word, `None` for whole words.
    pub letter_index: Option<usize>,
    pub pose: SignPose,
    /// How long the pose stays active before the next step.
    pub dwell: Duration,
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

struct Spelling {
    word_index: usize,
    /// Original word text, uppercased, for the description.
    label: String,
    letters: Vec<char>,
    next: usize,
}

/// Cursor over a word list; yields [`Step`]s in strict word then letter
/// order.
pub struct Timeline {
    words: Vec<String>,
    next_word: usize,
    spelling: Option<Spelling>,
    word_dwell: Duration,
    letter_dwell: Duration,
}

impl Timeline {
    pub fn new(words: Vec<String>, config: &PlaybackConfig) -> Self {
        Self {
            words,
            next_word: 0,
            spelling: None,
            word_dwell: word_dwell(config),
            letter_dwell: letter_dwell(config),
        }
    }

    /// Words this timeline walks.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// `true` once every word (and every letter) has been yielded.
    pub fn is_finished(&self) -> bool {
        self.spelling.is_none() && self.next_word >= self.words.len()
    }

    fn next_letter(&mut self) -> Option<Step> {
        let spelling = self.spelling.as_mut()?;
        let Some(&letter) = spelling.letters.get(spelling.next) else {
            self.spelling = None;
            return None;
        };

        let letter_index = spelling.next;
        spelling.next += 1;

        let mut pose = resolve_letter(letter);
        pose.description = format!(
            "Spell: {} → {}",
            spelling.label,
            letter.to_ascii_uppercase()
        );
        let step = Step {
            word_index: spelling.word_index,
            letter_index: Some(letter_index),
            pose,
            dwell: self.letter_dwell,
        };

        if spelling.next >= spelling.letters.len() {
            self.spelling = None;
        }
        Some(step)
    }
}

impl Iterator for Timeline {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(step) = self.next_letter() {
            return Some(step);
        }

        let word_index = self.next_word;
        let word = self.words.get(word_index)?;
        self.next_word += 1;

        let pose = resolve_word(word);
        let normalized = normalize(word);

        if pose.method == ResolutionMethod::Fingerspelling && normalized.len() > 1 {
            self.spelling = Some(Spelling {
                word_index,
                label: word.to_uppercase(),
                letters: normalized.chars().collect(),
                next: 0,
            });
            return self.next_letter();
        }

        Some(Step {
            word_index,
            letter_index: None,
            pose,
            dwell: self.word_dwell,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::letter_shape;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn default_dwell_times() {
        let cfg = PlaybackConfig::default();
        assert_eq!(word_dwell(&cfg), Duration::from_millis(1_400));
        assert_eq!(letter_dwell(&cfg), Duration::from_millis(780));
    }

    #[test]
    fn speed_divides_only_the_pause() {
        let cfg = PlaybackConfig {
            speed_multiplier: 2.0,
            pause_duration_ms: 800,
        };
        assert_eq!(word_dwell(&cfg), Duration::from_millis(1_000));
        assert_eq!(letter_dwell(&cfg), Duration::from_millis(540));
    }

    #[test]
    fn huge_speed_keeps_settle_floor() {
        let cfg = PlaybackConfig {
            speed_multiplier: 1.0e9,
            pause_duration_ms: 800,
        };
        assert!(word_dwell(&cfg) >= WORD_SETTLE);
        assert!(letter_dwell(&cfg) >= LETTER_SETTLE);
        assert!(letter_dwell(&cfg) < LETTER_SETTLE + Duration::from_millis(1));
    }

    #[test]
    fn hello_then_spelled_word() {
        let cfg = PlaybackConfig::default();
        let steps: Vec<Step> = Timeline::new(words(&["hello", "xq"]), &cfg).collect();
        assert_eq!(steps.len(), 3);

        assert_eq!(steps[0].word_index, 0);
        assert_eq!(steps[0].letter_index, None);
        assert_eq!(steps[0].pose.description, "Hello");
        assert_eq!(steps[0].pose.method, ResolutionMethod::Dictionary);
        assert_eq!(steps[0].dwell, Duration::from_millis(1_400));

        assert_eq!(steps[1].word_index, 1);
        assert_eq!(steps[1].letter_index, Some(0));
        assert_eq!(steps[1].pose.description, "Spell: XQ → X");
        assert_eq!(Some(steps[1].pose.right_hand), letter_shape('x'));
        assert_eq!(steps[1].dwell, Duration::from_millis(780));

        assert_eq!(steps[2].word_index, 1);
        assert_eq!(steps[2].letter_index, Some(1));
        assert_eq!(steps[2].pose.description, "Spell: XQ → Q");
        assert_eq!(Some(steps[2].pose.right_hand), letter_shape('q'));
    }

    #[test]
    fn spelled_word_skips_punctuation_letters() {
        let cfg = PlaybackConfig::default();
        let steps: Vec<Step> = Timeline::new(words(&["x-q!"]), &cfg).collect();
        let descriptions: Vec<&str> = steps.iter().map(|s| s.pose.description.as_str()).collect();
        assert_eq!(descriptions, ["Spell: X-Q! → X", "Spell: X-Q! → Q"]);
    }

    #[test]
    fn single_letter_and_predictions_are_not_expanded() {
        let cfg = PlaybackConfig::default();
        let steps: Vec<Step> = Timeline::new(words(&["b", "jumping", "!!"]), &cfg).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].pose.description, "Letter: B");
        assert_eq!(steps[0].dwell, Duration::from_millis(1_400));
        assert_eq!(steps[1].pose.method, ResolutionMethod::MlPrediction);
        assert_eq!(steps[2].pose.description, "Spell: !!");
        assert!(steps.iter().all(|s| s.letter_index.is_none()));
    }

    #[test]
    fn steps_follow_input_order() {
        let cfg = PlaybackConfig::default();
        let indices: Vec<(usize, Option<usize>)> =
            Timeline::new(words(&["zz", "hi", "abc"]), &cfg)
                .map(|s| (s.word_index, s.letter_index))
                .collect();
        assert_eq!(
            indices,
            [
                (0, Some(0)),
                (0, Some(1)),
                (1, None),
                (2, Some(0)),
                (2, Some(1)),
                (2, Some(2)),
            ]
        );
    }

    #[test]
    fn finished_after_last_step() {
        let cfg = PlaybackConfig::default();
        let mut timeline = Timeline::new(words(&["ab"]), &cfg);
        assert!(!timeline.is_finished());
        assert!(timeline.next().is_some());
        assert!(!timeline.is_finished());
        assert!(timeline.next().is_some());
        assert!(timeline.is_finished());
        assert!(timeline.next().is_none());
        assert_eq!(timeline.words(), ["ab".to_string()]);
    }

    #[test]
    fn empty_word_list_is_immediately_finished() {
        let cfg = PlaybackConfig::default();
        let mut timeline = Timeline::new(Vec::new(), &cfg);
        assert!(timeline.is_finished());
        assert!(timeline.next().is_none());
    }
}
