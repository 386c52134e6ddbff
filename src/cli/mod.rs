//! Command Line Interface for the SpellTrie vocabulary engine.

pub mod args;
pub mod commands;
pub mod output;
pub mod shell;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
