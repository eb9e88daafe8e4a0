//! End-to-end behaviour through the public API.

use std::time::Duration;

use sign_speech::config::PlaybackConfig;
use sign_speech::input::split_words;
use sign_speech::pose::{known_words, letter_shape, FingerState, ResolutionMethod, SignPose};
use sign_speech::resolver::resolve_word;
use sign_speech::sequencer::{PlayStatus, SequencePlayer};
use sign_speech::resolve_letter;
use tokio::time::{sleep_until, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn dictionary_words_resolve_with_full_confidence() {
    for word in known_words() {
        let upper = word.to_uppercase();
        for variant in [word.to_string(), upper, format!("{word}!")] {
            let pose = resolve_word(&variant);
            assert_eq!(pose.method, ResolutionMethod::Dictionary, "{variant}");
            assert_eq!(pose.confidence, 1.0);
        }
    }
}

#[test]
fn letters_resolve_to_table_shapes() {
    for c in 'a'..='z' {
        let pose = resolve_letter(c);
        assert_eq!(pose.method, ResolutionMethod::Fingerspelling);
        assert_eq!(pose.confidence, 1.0);
        assert_eq!(Some(pose.right_hand), letter_shape(c));
        assert_eq!(pose.description, format!("Letter: {}", c.to_ascii_uppercase()));
    }
}

#[test]
fn greeting_substrings_use_hello_template() {
    let hello = resolve_word("hello");
    for word in ["greetingsparty", "heyyy", "welcomehome"] {
        let pose = resolve_word(word);
        assert_eq!(pose.method, ResolutionMethod::MlPrediction, "{word}");
        assert_eq!(pose.confidence, 0.75);
        assert_eq!(pose.left_shoulder, hello.left_shoulder);
        assert_eq!(pose.right_shoulder, hello.right_shoulder);
        assert_eq!(pose.left_elbow, hello.left_elbow);
        assert_eq!(pose.right_elbow, hello.right_elbow);
        assert_eq!(pose.left_wrist, hello.left_wrist);
        assert_eq!(pose.right_wrist, hello.right_wrist);
    }
}

#[test]
fn unknown_word_is_fingerspelled() {
    let pose = resolve_word("xyzqrs");
    assert_eq!(pose.method, ResolutionMethod::Fingerspelling);
    assert_eq!(pose.description, "Spell: XYZQRS");
    assert_eq!(Some(pose.right_hand), letter_shape('x'));
}

#[test]
fn resolution_never_fails() {
    for input in ["", "   ", "42", "ümlaut", "🙂", "a-b-c"] {
        let pose = resolve_word(input);
        assert!(pose.confidence > 0.0 && pose.confidence <= 1.0);
    }
    assert_eq!(resolve_word("42").right_hand, FingerState::OPEN);
    assert_eq!(resolve_word("a"), resolve_word("a"));
}

#[tokio::test(start_paused = true)]
async fn hello_then_spelled_word_timeline() {
    let player = SequencePlayer::new();
    let start = Instant::now();
    let config = PlaybackConfig {
        speed_multiplier: 1.0,
        pause_duration_ms: 800,
    };

    assert_eq!(
        player.play_sequence(split_words("hello xq"), config),
        PlayStatus::Started
    );

    sleep_until(start + ms(10)).await;
    let snap = player.snapshot();
    assert_eq!(snap.active_pose, resolve_word("hello"));
    assert_eq!(snap.current_word_index, Some(0));
    assert!(snap.is_running);

    sleep_until(start + ms(1_410)).await;
    assert_eq!(player.active_pose().description, "Spell: XQ → X");
    assert_eq!(player.current_word_index(), Some(1));

    sleep_until(start + ms(1_400 + 780 + 10)).await;
    assert_eq!(player.active_pose().description, "Spell: XQ → Q");
    assert_eq!(Some(player.active_pose().right_hand), letter_shape('q'));

    sleep_until(start + ms(1_400 + 780 * 2 + 10)).await;
    let snap = player.snapshot();
    assert!(!snap.is_running);
    assert_eq!(snap.current_word_index, None);
}

#[tokio::test(start_paused = true)]
async fn cancel_midway_resets_to_idle() {
    let player = SequencePlayer::new();
    let start = Instant::now();
    player.play_sequence(split_words("hello xq"), PlaybackConfig::default());

    sleep_until(start + ms(1_500)).await;
    assert!(player.is_running());

    player.cancel_sequence();
    assert!(!player.is_running());
    assert_eq!(player.active_pose(), SignPose::idle());
    assert_eq!(player.current_word_index(), None);

    sleep_until(start + ms(5_000)).await;
    assert_eq!(player.active_pose(), SignPose::idle());
}

#[tokio::test(start_paused = true)]
async fn play_while_running_is_a_no_op() {
    let player = SequencePlayer::new();
    let start = Instant::now();
    player.play_sequence(split_words("hello goodbye"), PlaybackConfig::default());
    sleep_until(start + ms(10)).await;

    assert_eq!(
        player.play_sequence(split_words("love"), PlaybackConfig::default()),
        PlayStatus::Busy
    );

    sleep_until(start + ms(1_410)).await;
    assert_eq!(player.active_pose().description, "Goodbye");
    player.wait_idle().await;
    assert_eq!(player.snapshot().words, ["hello", "goodbye"]);
}
