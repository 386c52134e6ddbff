//! # SpellTrie
//!
//! A weighted prefix-tree vocabulary engine for Rust.
//!
//! ## Features
//!
//! - Exact lookup and removal with structural pruning
//! - Frequency-ranked prefix search
//! - Suffix search
//! - Single-substitution "did you mean?" correction
//! - Session overlays of removed words over shared vocabularies

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod service;
pub mod trie;

pub mod prelude {
    pub use crate::error::{Result, SpellTrieError};
    pub use crate::trie::{CorrectionMode, Trie};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
