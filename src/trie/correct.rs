//! Approximate ("did-you-mean") spelling correction.
//!
//! Correction walks the tree in lockstep with the input, one character per
//! level, so only stored words of the same length as the input can match.
//! No insertions or deletions are modelled.

use serde::{Deserialize, Serialize};

use crate::trie::node::Node;
use crate::trie::tree::Trie;

/// Which mismatches a candidate word may have against the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrectionMode {
    /// Exactly one substituted character (Hamming distance 1).
    #[default]
    Substitution,
    /// Any number of substituted characters, provided no two are adjacent and
    /// the final character matches.
    NonAdjacent,
}

impl Trie {
    /// Suggest corrections for `word` tolerating a single substitution.
    ///
    /// A stored word is its own correction and yields `[word]`. Otherwise the
    /// result is every stored word of the same length differing from `word` in
    /// exactly one position, sorted and free of duplicates.
    ///
    /// This is stricter than the legacy rule: `fxare` against
    /// `[flare, flake, glare]` yields only `flare`, whereas
    /// [`CorrectionMode::NonAdjacent`] also accepts `flake`. Use
    /// [`Trie::correct_spelling_with`] for that behaviour.
    pub fn correct_spelling(&self, word: &str) -> Vec<String> {
        self.correct_spelling_with(word, CorrectionMode::Substitution)
    }

    pub fn correct_spelling_with(&self, word: &str, mode: CorrectionMode) -> Vec<String> {
        self.correct_spelling_where(word, mode, |_| true)
    }

    /// Correction restricted to the words for which `accept` holds.
    ///
    /// A stored word rejected by `accept` is treated as absent, so the fuzzy
    /// search runs for it.
    pub fn correct_spelling_where<F>(
        &self,
        word: &str,
        mode: CorrectionMode,
        accept: F,
    ) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let target = word.to_lowercase();
        if self.contains(&target) && accept(&target) {
            return vec![word.to_string()];
        }

        let chars: Vec<char> = target.chars().collect();
        let mut search = Correction {
            target: &chars,
            accept: &accept,
            path: String::with_capacity(target.len()),
            results: Vec::new(),
        };
        match mode {
            CorrectionMode::Substitution => search.substitutions(self.root(), 0, false),
            CorrectionMode::NonAdjacent => search.non_adjacent(self.root(), 0, true),
        }

        // Ordered children make the traversal emit words already sorted.
        search.results
    }
}

struct Correction<'a, F> {
    target: &'a [char],
    accept: &'a F,
    path: String,
    results: Vec<String>,
}

impl<F> Correction<'_, F>
where
    F: Fn(&str) -> bool,
{
    fn substitutions(&mut self, node: &Node, depth: usize, spent: bool) {
        let Some(&expected) = self.target.get(depth) else {
            if node.is_terminal && spent && (self.accept)(&self.path) {
                self.results.push(self.path.clone());
            }
            return;
        };

        for (&c, child) in &node.children {
            if c == expected {
                self.step(c, |s| s.substitutions(child, depth + 1, spent));
            } else if !spent {
                self.step(c, |s| s.substitutions(child, depth + 1, true));
            }
        }
    }

    fn non_adjacent(&mut self, node: &Node, depth: usize, prev_matched: bool) {
        let Some(&expected) = self.target.get(depth) else {
            if node.is_terminal
                && prev_matched
                && self.path.chars().ne(self.target.iter().copied())
                && (self.accept)(&self.path)
            {
                self.results.push(self.path.clone());
            }
            return;
        };

        for (&c, child) in &node.children {
            if c == expected {
                self.step(c, |s| s.non_adjacent(child, depth + 1, true));
            } else if prev_matched {
                self.step(c, |s| s.non_adjacent(child, depth + 1, false));
            }
        }
    }

    fn step(&mut self, c: char, descend: impl FnOnce(&mut Self)) {
        self.path.push(c);
        descend(self);
        self.path.pop();
    }
}
