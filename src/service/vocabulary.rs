//! Shared, lazily loaded vocabularies.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::error::{Result, SpellTrieError};
use crate::loader;
use crate::trie::Trie;

/// One long-lived tree shared by every session reading the same source.
pub type SharedTrie = Arc<RwLock<Trie>>;

/// Loads each vocabulary source once and hands out shared handles to it.
#[derive(Debug)]
pub struct VocabularyRegistry {
    base_dir: PathBuf,
    loaded: RwLock<HashMap<String, SharedTrie>>,
}

impl VocabularyRegistry {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        VocabularyRegistry {
            base_dir: base_dir.into(),
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve `name` to a file inside the base directory.
    ///
    /// Names must be a single plain file name.
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_dir.join(name)),
            _ => Err(SpellTrieError::other(format!(
                "Invalid vocabulary name: {name:?}"
            ))),
        }
    }

    /// The shared tree for `name`, loading it from disk on first use.
    pub fn get_or_load(&self, name: &str) -> Result<SharedTrie> {
        if let Some(trie) = self.loaded.read().get(name) {
            return Ok(Arc::clone(trie));
        }

        let path = self.path_of(name)?;
        let trie = loader::load_file(&path)?;
        info!("loaded vocabulary '{name}' ({} words)", trie.word_count());

        // Another caller may have loaded it meanwhile; keep whichever landed first.
        let mut loaded = self.loaded.write();
        let shared = loaded
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(RwLock::new(trie)));
        Ok(Arc::clone(shared))
    }

    /// Register an already built tree under `name`, replacing any loaded one.
    pub fn insert(&self, name: impl Into<String>, trie: Trie) -> SharedTrie {
        let shared = Arc::new(RwLock::new(trie));
        self.loaded.write().insert(name.into(), Arc::clone(&shared));
        shared
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.read().contains_key(name)
    }

    /// Drop the cached tree so the next access reloads it from disk.
    pub fn evict(&self, name: &str) -> bool {
        self.loaded.write().remove(name).is_some()
    }
}
