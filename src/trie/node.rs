//! Trie node.

use std::collections::BTreeMap;

/// A single node of the prefix tree.
///
/// Children are kept in an ordered map, so every depth-first traversal visits
/// edges in character order and yields words lexicographically.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) character: Option<char>,
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) is_terminal: bool,
    pub(crate) frequency: f64,
}

impl Node {
    /// Create the root node, which carries no character.
    pub fn root() -> Self {
        Node {
            character: None,
            children: BTreeMap::new(),
            is_terminal: false,
            frequency: 1.0,
        }
    }

    /// Create a non-terminal node for `character`.
    pub fn new(character: char) -> Self {
        Node {
            character: Some(character),
            children: BTreeMap::new(),
            is_terminal: false,
            frequency: 1.0,
        }
    }

    /// The character on the edge leading to this node (`None` for the root).
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// Whether the path from the root to this node spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The stored frequency, meaningful only for terminal nodes.
    pub fn frequency(&self) -> Option<f64> {
        self.is_terminal.then_some(self.frequency)
    }

    pub fn children(&self) -> &BTreeMap<char, Node> {
        &self.children
    }

    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Walk the path spelled by `chars` starting at this node.
    pub(crate) fn descend<I>(&self, chars: I) -> Option<&Node>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = self;
        for c in chars {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Number of nodes strictly below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// Push every terminal node of this subtree onto `out`, depth first.
    ///
    /// `path` holds the spelling of this node on entry and is restored on exit.
    pub(crate) fn collect_words<F>(
        &self,
        path: &mut String,
        accept: &F,
        out: &mut Vec<(String, f64)>,
    )
    where
        F: Fn(&str) -> bool,
    {
        if self.is_terminal && accept(path) {
            out.push((path.clone(), self.frequency));
        }
        for (c, child) in &self.children {
            path.push(*c);
            child.collect_words(path, accept, out);
            path.pop();
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::root()
    }
}
