//! Timestamped log of the text segments submitted for signing.
//!
//! [`Transcript`] keeps the last *N* segments (typed or recognised), oldest
//! dropped first.  Entries render as `[HH:MM:SS] text` in local time.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

/// One submitted segment.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

impl TranscriptEntry {
    /// Local wall-clock `HH:MM:SS` of the entry.
    pub fn clock(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.clock(), self.text)
    }
}

/// Bounded, ordered transcript.
///
/// ```
/// use sign_speech::input::Transcript;
///
/// let mut t = Transcript::with_capacity(2);
/// t.push("hello".to_string());
/// t.push("thank you".to_string());
/// t.push("goodbye".to_string());
/// assert_eq!(t.len(), 2);
/// assert_eq!(t.entries().next().unwrap().text, "thank you");
/// ```
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    capacity: usize,
}

impl Transcript {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Record `text` now.
    pub fn push(&mut self, text: String) {
        self.push_at(text, Local::now());
    }

    /// Record `text` with an explicit timestamp.
    pub fn push_at(&mut self, text: String, at: DateTime<Local>) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_back(TranscriptEntry { at, text });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.back()
    }

    /// Rendered `[HH:MM:SS] text` lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::with_capacity(50)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(secs: i64) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap() + Duration::seconds(secs)
    }

    #[test]
    fn starts_empty() {
        let t = Transcript::default();
        assert!(t.is_empty());
        assert!(t.last().is_none());
        assert!(t.lines().is_empty());
    }

    #[test]
    fn entries_render_with_local_clock() {
        let mut t = Transcript::with_capacity(5);
        let stamp = Local.with_ymd_and_hms(2024, 3, 14, 13, 5, 9).unwrap();
        t.push_at("hello world".into(), stamp);
        assert_eq!(t.lines(), ["[13:05:09] hello world"]);
    }

    #[test]
    fn push_stamps_current_local_time() {
        let before = Local::now();
        let mut t = Transcript::default();
        t.push("thank you".into());
        let entry = t.last().unwrap();
        assert!(entry.at >= before && entry.at <= Local::now());
        assert_eq!(entry.clock().len(), 8);
    }

    #[test]
    fn rolling_window_drops_oldest() {
        let mut t = Transcript::with_capacity(3);
        for i in 0..6 {
            t.push_at(format!("line{i}"), at(i));
        }
        assert_eq!(t.len(), 3);
        let texts: Vec<&str> = t.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["line3", "line4", "line5"]);
        assert_eq!(t.last().unwrap().text, "line5");
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut t = Transcript::with_capacity(0);
        t.push("hello".into());
        assert!(t.is_empty());
    }

    #[test]
    fn clear_empties_log() {
        let mut t = Transcript::default();
        t.push("hello".into());
        t.clear();
        assert!(t.is_empty());
    }
}
