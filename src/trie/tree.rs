//! The weighted prefix tree and its mutations.

use log::trace;

use crate::error::{Result, SpellTrieError};
use crate::trie::node::Node;

/// A weighted prefix tree holding a lowercased vocabulary.
///
/// Every terminal node corresponds to exactly one stored word, and no node is
/// left both non-terminal and childless once an operation returns.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node,
    word_count: usize,
}

impl Trie {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Trie {
            root: Node::root(),
            word_count: 0,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Insert `word` with the default frequency of 1.
    pub fn insert(&mut self, word: &str) {
        self.insert_with_frequency(word, 1.0);
    }

    /// Insert `word` with `frequency`.
    ///
    /// The word is lowercased. Re-inserting a word that is already stored is a
    /// no-op: the first frequency written wins. The empty word is never
    /// stored, since the root cannot be terminal.
    pub fn insert_with_frequency(&mut self, word: &str, frequency: f64) {
        let word = word.to_lowercase();
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_insert_with(|| Node::new(c));
        }

        if !node.is_terminal {
            node.is_terminal = true;
            node.frequency = frequency;
            self.word_count += 1;
        }
    }

    /// Remove `word`, pruning every node the removal leaves load-free.
    ///
    /// Fails with [`SpellTrieError::NotFound`] if the path is missing or does
    /// not end on a terminal node; the tree is untouched in that case.
    pub fn remove(&mut self, word: &str) -> Result<()> {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        if chars.is_empty() {
            return Err(SpellTrieError::not_found(word));
        }

        Self::remove_from(&mut self.root, &chars, word)?;
        self.word_count -= 1;
        Ok(())
    }

    /// Unmark the node at the end of `chars` and report upward whether the
    /// node just emptied, so the parent can delete its edge.
    fn remove_from(node: &mut Node, chars: &[char], word: &str) -> Result<bool> {
        let Some((c, rest)) = chars.split_first() else {
            if !node.is_terminal {
                return Err(SpellTrieError::not_found(word));
            }
            node.is_terminal = false;
            return Ok(node.children.is_empty());
        };

        let child = node
            .children
            .get_mut(c)
            .ok_or_else(|| SpellTrieError::not_found(word))?;

        if Self::remove_from(child, rest, word)? {
            trace!("pruning edge '{c}' while removing '{word}'");
            node.children.remove(c);
            return Ok(node.children.is_empty() && !node.is_terminal);
        }
        Ok(false)
    }

    /// Exact lookup.
    ///
    /// Returns `Ok(true)` if `word` is stored and [`SpellTrieError::NotFound`]
    /// otherwise.
    pub fn search(&self, word: &str) -> Result<bool> {
        match self.find(word) {
            Some(_) => Ok(true),
            None => Err(SpellTrieError::not_found(word)),
        }
    }

    /// Whether `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// The frequency stored for `word`, if present.
    pub fn frequency(&self, word: &str) -> Option<f64> {
        self.find(word).map(|node| node.frequency)
    }

    fn find(&self, word: &str) -> Option<&Node> {
        self.root
            .descend(word.to_lowercase().chars())
            .filter(|node| node.is_terminal)
    }

    /// The number of stored words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// The number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Every stored word with its frequency, in lexicographic order.
    pub fn all_words(&self) -> Vec<(String, f64)> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root
            .collect_words(&mut String::new(), &|_| true, &mut words);
        words
    }
}

impl<S: AsRef<str>> Extend<(S, f64)> for Trie {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        for (word, frequency) in iter {
            self.insert_with_frequency(word.as_ref(), frequency);
        }
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for Trie {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_search() {
        let mut trie = Trie::new();
        trie.insert("test");

        assert_eq!(trie.word_count(), 1);
        assert!(trie.search("test").unwrap());
        assert!(trie.search("TeSt").unwrap());
        assert!(trie.search("tes").unwrap_err().is_not_found());
        assert!(trie.search("tests").unwrap_err().is_not_found());
        assert!(trie.search("x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_insert_lowercases() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("Flare", 3.0);

        assert_eq!(trie.all_words(), vec![("flare".to_string(), 3.0)]);
        assert_eq!(trie.frequency("FLARE"), Some(3.0));
    }

    #[test]
    fn test_reinsert_keeps_first_frequency() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("flare", 3.0);
        trie.insert_with_frequency("flare", 9.0);
        trie.insert("FLARE");

        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.frequency("flare"), Some(3.0));
    }

    #[test]
    fn test_empty_word_is_never_stored() {
        let mut trie = Trie::new();
        trie.insert("");

        assert_eq!(trie.word_count(), 0);
        assert!(!trie.root().is_terminal());
        assert!(trie.search("").is_err());
        assert!(trie.remove("").is_err());
    }

    #[test]
    fn test_remove_prunes_unique_path() {
        let mut trie = Trie::new();
        trie.insert("ab");
        trie.remove("ab").unwrap();

        assert_eq!(trie.word_count(), 0);
        assert!(trie.root().children().is_empty());
        assert_eq!(trie.node_count(), 0);
    }

    #[test]
    fn test_remove_keeps_terminal_ancestor() {
        let mut trie = Trie::new();
        trie.insert("a");
        trie.insert("ab");
        trie.remove("ab").unwrap();

        assert!(trie.contains("a"));
        assert!(!trie.contains("ab"));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_remove_keeps_shared_prefix() {
        let mut trie = Trie::new();
        trie.insert("test");
        trie.insert("team");
        trie.remove("test").unwrap();

        assert!(trie.contains("team"));
        // t-e-a-m
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_remove_inner_word_keeps_children() {
        let mut trie = Trie::new();
        trie.insert("test");
        trie.insert("testing");
        trie.remove("test").unwrap();

        assert!(!trie.contains("test"));
        assert!(trie.contains("testing"));
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn test_remove_missing_word_leaves_tree_intact() {
        let mut trie = Trie::new();
        trie.insert("testing");
        let before = trie.node_count();

        assert!(trie.remove("test").unwrap_err().is_not_found());
        assert!(trie.remove("tesx").unwrap_err().is_not_found());
        assert!(trie.remove("testings").unwrap_err().is_not_found());

        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.node_count(), before);
    }

    #[test]
    fn test_remove_twice_fails() {
        let mut trie = Trie::new();
        trie.insert("test");
        trie.remove("TEST").unwrap();

        assert!(trie.remove("test").unwrap_err().is_not_found());
        assert_eq!(trie.word_count(), 0);
    }

    #[test]
    fn test_all_words_in_order() {
        let trie: Trie = vec![("testing", 1.0), ("test", 2.0), ("example", 5.0)]
            .into_iter()
            .collect();

        assert_eq!(
            trie.all_words(),
            vec![
                ("example".to_string(), 5.0),
                ("test".to_string(), 2.0),
                ("testing".to_string(), 1.0),
            ]
        );
    }
}
