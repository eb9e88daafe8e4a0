//! Keyword categories for the heuristic prediction tier.
//!
//! [`predict`] tests a normalised word against each category in priority
//! order (greeting → emotion → action → question) and returns the first hit.
//!
//! Membership is substring containment, not equality: `"this"` contains
//! `"hi"` and is therefore a greeting.  This over-matches, and is kept
//! as-is so poses stay stable for existing inputs.

use crate::pose::PoseTemplate;
use crate::pose::words;

// ---------------------------------------------------------------------------
// Internal types
// ---------------------------------------------------------------------------

struct CategoryConfig {
    category: Category,
    keywords: &'static [&'static str],
    confidence: f32,
}

// ---------------------------------------------------------------------------
// Static category definitions
// ---------------------------------------------------------------------------

static CATEGORIES: &[CategoryConfig] = &[
    CategoryConfig {
        category: Category::Greeting,
        keywords: &["hello", "hi", "hey", "greetings", "welcome"],
        confidence: 0.75,
    },
    CategoryConfig {
        category: Category::Emotion,
        keywords: &["happy", "sad", "angry", "love", "hate", "excited", "scared"],
        confidence: 0.7,
    },
    CategoryConfig {
        category: Category::Action,
        keywords: &["eat", "drink", "sleep", "work", "play", "run", "walk", "jump"],
        confidence: 0.65,
    },
    CategoryConfig {
        category: Category::Question,
        keywords: &["what", "where", "who", "when", "why", "how"],
        confidence: 0.7,
    },
];

/// Emotion keywords that select the "sad" template instead of "happy".
static NEGATIVE_EMOTIONS: &[&str] = &["sad", "angry", "hate", "scared"];

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Heuristic word category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Greeting,
    Emotion,
    Action,
    Question,
}

/// Result of a successful category match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub category: Category,
    /// Borrowed word-table template the pose is built from.
    pub template: &'static PoseTemplate,
    pub confidence: f32,
}

/// Match `word` (already normalised) against the keyword categories.
///
/// Returns `None` when no category keyword occurs in `word`.
///
/// ```
/// use sign_speech::resolver::{predict, Category};
///
/// assert_eq!(predict("greetingsparty").map(|p| p.category), Some(Category::Greeting));
/// assert_eq!(predict("running").map(|p| p.category), Some(Category::Action));
/// assert!(predict("xyzqrs").is_none());
/// ```
pub fn predict(word: &str) -> Option<Prediction> {
    let config = CATEGORIES
        .iter()
        .find(|cfg| cfg.keywords.iter().any(|kw| word.contains(*kw)))?;

    let template_key = match config.category {
        Category::Greeting => "hello",
        Category::Emotion => {
            if NEGATIVE_EMOTIONS.iter().any(|kw| word.contains(*kw)) {
                "sad"
            } else {
                "happy"
            }
        }
        Category::Action => "work",
        Category::Question => "what",
    };

    Some(Prediction {
        category: config.category,
        template: words::template(template_key),
        confidence: config.confidence,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
