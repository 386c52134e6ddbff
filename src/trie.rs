//! The weighted prefix-tree engine.
//!
//! This module stores a lowercased vocabulary with one frequency per word and
//! answers exact lookups, frequency-ranked prefix queries, suffix queries and
//! single-substitution "did you mean?" corrections.
//!
//! The engine is synchronous and performs no I/O. Hosts sharing one tree
//! between threads are expected to wrap it in a reader/writer lock.
//!
//! # Examples
//!
//! ```
//! use spelltrie::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("flare");
//! trie.insert("flake");
//! trie.insert("glare");
//!
//! assert_eq!(trie.correct_spelling("flaze"), vec!["flake", "flare"]);
//! assert_eq!(trie.suffix_search("are"), vec!["flare", "glare"]);
//! assert_eq!(trie.prefix_search("fla").len(), 2);
//! ```

pub mod correct;
pub mod node;
pub mod query;
pub mod tree;

pub use correct::CorrectionMode;
pub use node::Node;
pub use query::DEFAULT_PREFIX_LIMIT;
pub use tree::Trie;
