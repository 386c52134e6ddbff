//! Per-session state: the active vocabulary and the overlay of removed words.

use std::collections::BTreeSet;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type SessionId = Uuid;

/// A logical client session.
///
/// Removals are recorded here rather than applied to the shared tree, so one
/// session never sees another session's deletions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    /// Name of the vocabulary this session reads.
    pub vocabulary: String,
    /// Lowercased words hidden from this session.
    pub removed: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(vocabulary: impl Into<String>) -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            vocabulary: vocabulary.into(),
            removed: BTreeSet::new(),
            created_at: now,
            last_seen: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    /// Whether `word` (already lowercased) is hidden in this session.
    pub fn is_removed(&self, word: &str) -> bool {
        self.removed.contains(word)
    }

    /// Switch to another vocabulary, discarding the overlay.
    pub fn switch_vocabulary(&mut self, vocabulary: impl Into<String>) {
        self.vocabulary = vocabulary.into();
        self.removed.clear();
    }

    /// Time since the last request, clamped at zero.
    pub fn idle_for(&self, now: DateTime<Utc>) -> Duration {
        (now - self.last_seen).to_std().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new("frequency.txt");
        assert_eq!(session.vocabulary, "frequency.txt");
        assert!(session.removed.is_empty());
        assert_eq!(session.created_at, session.last_seen);
    }

    #[test]
    fn test_switch_vocabulary_clears_overlay() {
        let mut session = Session::new("a.txt");
        session.removed.insert("flare".to_string());
        assert!(session.is_removed("flare"));

        session.switch_vocabulary("b.txt");
        assert_eq!(session.vocabulary, "b.txt");
        assert!(!session.is_removed("flare"));
    }

    #[test]
    fn test_idle_for() {
        let session = Session::new("a.txt");
        let later = session.last_seen + chrono::TimeDelta::seconds(90);
        assert_eq!(session.idle_for(later), Duration::from_secs(90));

        let earlier = session.last_seen - chrono::TimeDelta::seconds(5);
        assert_eq!(session.idle_for(earlier), Duration::ZERO);
    }
}
