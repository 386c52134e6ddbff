//! Prefix-ranked and suffix search.

use crate::trie::tree::Trie;

/// Maximum number of entries returned by [`Trie::prefix_search`].
pub const DEFAULT_PREFIX_LIMIT: usize = 10;

impl Trie {
    /// Up to ten stored words beginning with `prefix`, most frequent first.
    ///
    /// Matching is case-insensitive. Words of equal frequency keep their
    /// lexicographic order. An absent prefix path yields an empty result.
    pub fn prefix_search(&self, prefix: &str) -> Vec<(String, f64)> {
        self.prefix_search_where(prefix, DEFAULT_PREFIX_LIMIT, |_| true)
    }

    /// Like [`Trie::prefix_search`] with a caller-chosen cap.
    pub fn prefix_search_limited(&self, prefix: &str, limit: usize) -> Vec<(String, f64)> {
        self.prefix_search_where(prefix, limit, |_| true)
    }

    /// Prefix search over the words for which `accept` holds.
    ///
    /// The predicate is applied before ranking and truncation, so excluded
    /// words never take a slot from visible ones.
    pub fn prefix_search_where<F>(
        &self,
        prefix: &str,
        limit: usize,
        accept: F,
    ) -> Vec<(String, f64)>
    where
        F: Fn(&str) -> bool,
    {
        let mut path = prefix.to_lowercase();
        let Some(subtree) = self.root().descend(path.chars()) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        subtree.collect_words(&mut path, &accept, &mut words);

        // Stable sort: ties stay in traversal (lexicographic) order.
        words.sort_by(|a, b| b.1.total_cmp(&a.1));
        words.truncate(limit);
        words
    }

    /// Every stored word ending with `suffix`, lexicographically sorted.
    ///
    /// There is no suffix index, so this always scans the whole tree.
    pub fn suffix_search(&self, suffix: &str) -> Vec<String> {
        self.suffix_search_where(suffix, |_| true)
    }

    /// Suffix search over the words for which `accept` holds.
    pub fn suffix_search_where<F>(&self, suffix: &str, accept: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let suffix = suffix.to_lowercase();
        let mut words = Vec::new();
        self.root().collect_words(
            &mut String::new(),
            &|word: &str| word.ends_with(&suffix) && accept(word),
            &mut words,
        );
        words.into_iter().map(|(word, _)| word).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        let mut trie = Trie::new();
        trie.insert("flare");
        trie.insert("flake");
        trie.insert("glare");
        trie
    }

    #[test]
    fn test_prefix_search() {
        let trie = sample();
        assert_eq!(
            trie.prefix_search("fla"),
            vec![("flake".to_string(), 1.0), ("flare".to_string(), 1.0)]
        );
        assert_eq!(
            trie.prefix_search("FLA"),
            vec![("flake".to_string(), 1.0), ("flare".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_prefix_search_includes_prefix_word() {
        let mut trie = Trie::new();
        trie.insert("test");
        trie.insert("testing");

        assert_eq!(
            trie.prefix_search("test"),
            vec![("test".to_string(), 1.0), ("testing".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_prefix_search_ranks_by_frequency() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("car", 2.0);
        trie.insert_with_frequency("cart", 7.5);
        trie.insert_with_frequency("care", 7.5);
        trie.insert_with_frequency("cat", 100.0);

        assert_eq!(
            trie.prefix_search("ca"),
            vec![
                ("cat".to_string(), 100.0),
                ("care".to_string(), 7.5),
                ("cart".to_string(), 7.5),
                ("car".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn test_prefix_search_caps_at_ten() {
        let mut trie = Trie::new();
        for (i, c) in ('a'..='o').enumerate() {
            trie.insert_with_frequency(&format!("w{c}"), i as f64);
        }

        let results = trie.prefix_search("w");
        assert_eq!(results.len(), DEFAULT_PREFIX_LIMIT);
        assert_eq!(results[0], ("wo".to_string(), 14.0));
        assert!(results.windows(2).all(|pair| pair[0].1 >= pair[1].1));

        assert_eq!(trie.prefix_search_limited("w", 3).len(), 3);
    }

    #[test]
    fn test_prefix_search_missing_path() {
        let trie = sample();
        assert!(trie.prefix_search("zz").is_empty());
        assert!(trie.prefix_search("flarex").is_empty());
    }

    #[test]
    fn test_prefix_search_where_filters_before_truncation() {
        let mut trie = Trie::new();
        trie.insert_with_frequency("aa", 3.0);
        trie.insert_with_frequency("ab", 2.0);
        trie.insert_with_frequency("ac", 1.0);

        let results = trie.prefix_search_where("a", 2, |word| word != "aa");
        assert_eq!(
            results,
            vec![("ab".to_string(), 2.0), ("ac".to_string(), 1.0)]
        );
    }

    #[test]
    fn test_suffix_search() {
        let trie = sample();
        assert_eq!(trie.suffix_search("are"), vec!["flare", "glare"]);
        assert_eq!(trie.suffix_search("ARE"), vec!["flare", "glare"]);
        assert_eq!(trie.suffix_search("ke"), vec!["flake"]);
        assert!(trie.suffix_search("xyz").is_empty());
    }

    #[test]
    fn test_suffix_search_whole_word_and_empty_suffix() {
        let trie = sample();
        assert_eq!(trie.suffix_search("glare"), vec!["glare"]);
        assert_eq!(trie.suffix_search(""), vec!["flake", "flare", "glare"]);
    }

    #[test]
    fn test_suffix_search_where() {
        let trie = sample();
        assert_eq!(
            trie.suffix_search_where("are", |word| word != "glare"),
            vec!["flare"]
        );
    }
}
