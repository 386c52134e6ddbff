//! Command line argument parsing for the SpellTrie CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::trie::{CorrectionMode, DEFAULT_PREFIX_LIMIT};

/// SpellTrie - A weighted prefix-tree vocabulary with did-you-mean search
#[derive(Parser, Debug, Clone)]
#[command(name = "spelltrie")]
#[command(about = "Query and edit a word-frequency vocabulary")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellTrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellTrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check whether a word is in the vocabulary
    Check(CheckArgs),

    /// List the most frequent words starting with a prefix
    Prefix(PrefixArgs),

    /// List the words ending with a suffix
    Suffix(SuffixArgs),

    /// Suggest corrections for a misspelled word
    Correct(CorrectArgs),

    /// List every word in the vocabulary
    Words(WordsArgs),

    /// Show vocabulary statistics
    Stats(StatsArgs),

    /// Remove words from the vocabulary
    Remove(RemoveArgs),

    /// Start an interactive session
    Shell(ShellArgs),
}

/// The vocabulary source shared by every command
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Vocabulary file with one "word frequency" entry per line
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "frequency.txt",
        env = "SPELLTRIE_SOURCE"
    )]
    pub source: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,
}

#[derive(Parser, Debug, Clone)]
pub struct PrefixArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Prefix to complete
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// Maximum number of results to return
    #[arg(short, long, default_value_t = DEFAULT_PREFIX_LIMIT)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct SuffixArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Suffix to match
    #[arg(value_name = "SUFFIX")]
    pub suffix: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Word to correct
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Which mismatches a suggestion may have
    #[arg(short, long, default_value = "substitution")]
    pub mode: CorrectionModeArg,
}

#[derive(Parser, Debug, Clone)]
pub struct WordsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Group the words by initial letter
    #[arg(long)]
    pub by_letter: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Words to remove
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Write the result back to the source file
    #[arg(short, long)]
    pub write: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ShellArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Service configuration file (JSON); overrides --source
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,
}

/// Correction modes available in CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorrectionModeArg {
    /// Exactly one substituted character
    Substitution,
    /// Non-adjacent substitutions, last character fixed
    NonAdjacent,
}

impl From<CorrectionModeArg> for CorrectionMode {
    fn from(mode: CorrectionModeArg) -> Self {
        match mode {
            CorrectionModeArg::Substitution => CorrectionMode::Substitution,
            CorrectionModeArg::NonAdjacent => CorrectionMode::NonAdjacent,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_command() {
        let args = SpellTrieArgs::try_parse_from([
            "spelltrie",
            "prefix",
            "fla",
            "--source",
            "words.txt",
            "--limit",
            "3",
        ])
        .unwrap();

        if let Command::Prefix(prefix_args) = args.command {
            assert_eq!(prefix_args.prefix, "fla");
            assert_eq!(prefix_args.source.source, PathBuf::from("words.txt"));
            assert_eq!(prefix_args.limit, 3);
        } else {
            panic!("Expected Prefix command");
        }
    }

    #[test]
    fn test_default_source_and_limit() {
        let args = SpellTrieArgs::try_parse_from(["spelltrie", "prefix", "fla"]).unwrap();

        if let Command::Prefix(prefix_args) = args.command {
            assert_eq!(prefix_args.limit, 10);
            // SPELLTRIE_SOURCE may be set in the environment.
            assert!(!prefix_args.source.source.as_os_str().is_empty());
        } else {
            panic!("Expected Prefix command");
        }
    }

    #[test]
    fn test_correct_modes() {
        let args = SpellTrieArgs::try_parse_from([
            "spelltrie",
            "correct",
            "fxare",
            "--mode",
            "non-adjacent",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.word, "fxare");
            assert_eq!(
                CorrectionMode::from(correct_args.mode),
                CorrectionMode::NonAdjacent
            );
        } else {
            panic!("Expected Correct command");
        }
    }

    #[test]
    fn test_remove_requires_words() {
        assert!(SpellTrieArgs::try_parse_from(["spelltrie", "remove"]).is_err());

        let args =
            SpellTrieArgs::try_parse_from(["spelltrie", "remove", "flare", "glare", "--write"])
                .unwrap();
        if let Command::Remove(remove_args) = args.command {
            assert_eq!(remove_args.words, vec!["flare", "glare"]);
            assert!(remove_args.write);
        } else {
            panic!("Expected Remove command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpellTrieArgs::try_parse_from(["spelltrie", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpellTrieArgs::try_parse_from(["spelltrie", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SpellTrieArgs::try_parse_from(["spelltrie", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SpellTrieArgs::try_parse_from(["spelltrie", "--quiet", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SpellTrieArgs::try_parse_from(["spelltrie", "--format", "json", "stats"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
