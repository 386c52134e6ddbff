//! Session-aware vocabulary service.
//!
//! The service keeps one canonical tree per vocabulary source behind a
//! reader/writer lock and a set of removed words per session, consulted at
//! read time. Sessions therefore never mutate the shared tree; a session's
//! removals reach the source only through [`VocabularyService::persist_removals`].
//!
//! # Examples
//!
//! ```
//! use spelltrie::config::ServiceConfig;
//! use spelltrie::service::VocabularyService;
//! use spelltrie::trie::Trie;
//!
//! let service = VocabularyService::new(ServiceConfig::default()).unwrap();
//! let trie: Trie = vec![("flare", 2.0), ("glare", 1.0)].into_iter().collect();
//! service.registry().insert("frequency.txt", trie);
//!
//! let session = service.open_session();
//! service.remove_word(session, "flare").unwrap();
//! assert!(!service.check_word(session, "flare").unwrap());
//!
//! let other = service.open_session();
//! assert!(service.check_word(other, "flare").unwrap());
//! ```

pub mod session;
pub mod vocabulary;

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use log::{debug, info};
use parking_lot::RwLock;

use crate::config::ServiceConfig;
use crate::error::{Result, SpellTrieError};
use crate::loader;
use crate::trie::CorrectionMode;

pub use session::{Session, SessionId};
pub use vocabulary::{SharedTrie, VocabularyRegistry};

/// What a single request sees: the shared tree and a snapshot of the session.
struct View {
    session: Session,
    trie: SharedTrie,
}

impl View {
    fn visible(&self, word: &str) -> bool {
        !self.session.is_removed(word)
    }
}

/// Dispatches session requests onto shared vocabularies.
#[derive(Debug)]
pub struct VocabularyService {
    config: ServiceConfig,
    registry: VocabularyRegistry,
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl VocabularyService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        let registry = VocabularyRegistry::new(config.vocabulary_dir.clone());
        Ok(VocabularyService {
            config,
            registry,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn registry(&self) -> &VocabularyRegistry {
        &self.registry
    }

    /// Start a session on the default vocabulary.
    pub fn open_session(&self) -> SessionId {
        let session = Session::new(self.config.default_vocabulary.clone());
        let id = session.id;
        self.sessions.write().insert(id, session);
        info!("opened session {id}");
        id
    }

    pub fn close_session(&self, id: SessionId) -> Result<()> {
        self.sessions
            .write()
            .remove(&id)
            .ok_or_else(|| unknown_session(id))?;
        info!("closed session {id}");
        Ok(())
    }

    /// Reset a session to the default vocabulary with no removed words.
    pub fn clear_session(&self, id: SessionId) -> Result<()> {
        let default = self.config.default_vocabulary.clone();
        self.with_session(id, |session| session.switch_vocabulary(default))
    }

    /// Point a session at another vocabulary, discarding its removed words.
    pub fn change_vocabulary(&self, id: SessionId, name: &str) -> Result<()> {
        self.registry.get_or_load(name)?;
        self.with_session(id, |session| session.switch_vocabulary(name))?;
        info!("session {id} switched to vocabulary '{name}'");
        Ok(())
    }

    /// A snapshot of the session's state.
    pub fn session(&self, id: SessionId) -> Result<Session> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| unknown_session(id))
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether `word` is stored and not removed in this session.
    pub fn check_word(&self, id: SessionId, word: &str) -> Result<bool> {
        let view = self.view(id)?;
        let word = word.to_lowercase();
        let found = view.trie.read().contains(&word) && view.visible(&word);
        Ok(found)
    }

    pub fn prefix_search(&self, id: SessionId, prefix: &str) -> Result<Vec<(String, f64)>> {
        let view = self.view(id)?;
        let trie = view.trie.read();
        Ok(trie.prefix_search_where(prefix, self.config.prefix_limit, |w| view.visible(w)))
    }

    pub fn suffix_search(&self, id: SessionId, suffix: &str) -> Result<Vec<String>> {
        let view = self.view(id)?;
        let trie = view.trie.read();
        Ok(trie.suffix_search_where(suffix, |w| view.visible(w)))
    }

    pub fn correct_spelling(
        &self,
        id: SessionId,
        word: &str,
        mode: CorrectionMode,
    ) -> Result<Vec<String>> {
        let view = self.view(id)?;
        let trie = view.trie.read();
        Ok(trie.correct_spelling_where(word, mode, |w| view.visible(w)))
    }

    /// Every visible word with its frequency, in lexicographic order.
    pub fn all_words(&self, id: SessionId) -> Result<Vec<(String, f64)>> {
        let view = self.view(id)?;
        let mut words = view.trie.read().all_words();
        words.retain(|(word, _)| view.visible(word));
        Ok(words)
    }

    /// Visible words grouped by initial character.
    ///
    /// Every letter `a` to `z` has an entry, possibly empty.
    pub fn words_by_letter(&self, id: SessionId) -> Result<BTreeMap<char, Vec<String>>> {
        let mut groups: BTreeMap<char, Vec<String>> =
            ('a'..='z').map(|letter| (letter, Vec::new())).collect();
        for (word, _) in self.all_words(id)? {
            if let Some(initial) = word.chars().next() {
                groups.entry(initial).or_default().push(word);
            }
        }
        Ok(groups)
    }

    /// Number of words visible in this session.
    pub fn word_count(&self, id: SessionId) -> Result<usize> {
        let view = self.view(id)?;
        let trie = view.trie.read();
        let hidden = view.session.removed.iter().filter(|w| trie.contains(w)).count();
        Ok(trie.word_count() - hidden)
    }

    /// Hide `word` from this session.
    ///
    /// Fails with [`SpellTrieError::NotFound`] if the word is not visible.
    pub fn remove_word(&self, id: SessionId, word: &str) -> Result<()> {
        let view = self.view(id)?;
        let lowered = word.to_lowercase();
        if !view.trie.read().contains(&lowered) || !view.visible(&lowered) {
            return Err(SpellTrieError::not_found(word));
        }

        self.with_session(id, |session| {
            // The session may have switched vocabulary since the view was taken.
            if session.vocabulary == view.session.vocabulary {
                session.removed.insert(lowered.clone());
                Ok(())
            } else {
                Err(SpellTrieError::not_found(word))
            }
        })??;
        debug!("session {id} removed '{lowered}'");
        Ok(())
    }

    /// Apply this session's removals to the shared tree and its source file.
    ///
    /// Returns the number of words deleted from the tree. The session's
    /// overlay is cleared afterwards. If the source cannot be written, the
    /// shared tree and the overlay are left untouched.
    pub fn persist_removals(&self, id: SessionId) -> Result<usize> {
        let view = self.view(id)?;
        let path = self.registry.path_of(&view.session.vocabulary)?;

        let mut trie = view.trie.write();
        let mut next = trie.clone();
        let mut deleted = 0;
        for word in &view.session.removed {
            match next.remove(word) {
                Ok(()) => deleted += 1,
                // Already persisted by another session.
                Err(e) if e.is_not_found() => {}
                Err(e) => return Err(e),
            }
        }
        loader::save_file(&next, &path)?;
        *trie = next;
        drop(trie);

        self.with_session(id, |session| {
            for word in &view.session.removed {
                session.removed.remove(word);
            }
        })?;
        info!(
            "session {id} persisted {deleted} removals to '{}'",
            view.session.vocabulary
        );
        Ok(deleted)
    }

    /// Drop sessions idle for at least the configured timeout.
    ///
    /// Returns the number of sessions dropped; without a timeout nothing expires.
    pub fn expire_idle_sessions(&self) -> usize {
        let Some(timeout) = self.config.session_idle_timeout() else {
            return 0;
        };

        let now = Utc::now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| session.idle_for(now) < timeout);
        let expired = before - sessions.len();
        if expired > 0 {
            info!("expired {expired} idle sessions");
        }
        expired
    }

    fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> T) -> Result<T> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(&id).ok_or_else(|| unknown_session(id))?;
        session.touch();
        Ok(f(session))
    }

    fn view(&self, id: SessionId) -> Result<View> {
        let session = self.with_session(id, |session| session.clone())?;
        let trie = self.registry.get_or_load(&session.vocabulary)?;
        Ok(View { session, trie })
    }
}

fn unknown_session(id: SessionId) -> SpellTrieError {
    SpellTrieError::session(format!("unknown session {id}"))
}
