//! Command implementations for the SpellTrie CLI.

use std::collections::BTreeMap;
use std::io::{self, BufReader};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::shell;
use crate::config::ServiceConfig;
use crate::error::{Result, SpellTrieError};
use crate::loader;
use crate::service::VocabularyService;
use crate::trie::Trie;

/// Execute a CLI command.
pub fn execute_command(args: SpellTrieArgs) -> Result<()> {
    match &args.command {
        Command::Check(check_args) => check_word(check_args, &args),
        Command::Prefix(prefix_args) => prefix_search(prefix_args, &args),
        Command::Suffix(suffix_args) => suffix_search(suffix_args, &args),
        Command::Correct(correct_args) => correct_spelling(correct_args, &args),
        Command::Words(words_args) => list_words(words_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
        Command::Remove(remove_args) => remove_words(remove_args, &args),
        Command::Shell(shell_args) => run_shell(shell_args),
    }
}

fn load(source: &SourceArgs) -> Result<Trie> {
    let path = &source.source;
    debug!("loading vocabulary from {}", path.display());
    let trie = loader::load_file(path)
        .with_context(|| format!("cannot load vocabulary '{}'", path.display()))?;
    Ok(trie)
}

fn check_word(args: &CheckArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;
    let exists = match trie.search(&args.word) {
        Ok(found) => found,
        Err(e) if e.is_not_found() => false,
        Err(e) => return Err(e),
    };

    output_result(
        &CheckResult {
            word: args.word.clone(),
            exists,
        },
        cli_args,
    )
}

fn prefix_search(args: &PrefixArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;
    let words = trie
        .prefix_search_limited(&args.prefix, args.limit)
        .into_iter()
        .map(WordEntry::from)
        .collect();

    output_result(
        &PrefixResult {
            prefix: args.prefix.clone(),
            words,
        },
        cli_args,
    )
}

fn suffix_search(args: &SuffixArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;

    output_result(
        &SuffixResult {
            suffix: args.suffix.clone(),
            words: trie.suffix_search(&args.suffix),
        },
        cli_args,
    )
}

fn correct_spelling(args: &CorrectArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;

    output_result(
        &CorrectionResult {
            word: args.word.clone(),
            suggestions: trie.correct_spelling_with(&args.word, args.mode.into()),
        },
        cli_args,
    )
}

fn list_words(args: &WordsArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;
    let words = trie.all_words();
    let total_words = words.len();

    let result = if args.by_letter {
        let mut words_by_letter: BTreeMap<char, Vec<String>> =
            ('a'..='z').map(|letter| (letter, Vec::new())).collect();
        for (word, _) in words {
            if let Some(initial) = word.chars().next() {
                words_by_letter.entry(initial).or_default().push(word);
            }
        }
        WordsResult::ByLetter {
            total_words,
            words_by_letter,
        }
    } else {
        WordsResult::Flat {
            total_words,
            words: words.into_iter().map(WordEntry::from).collect(),
        }
    };

    output_result(&result, cli_args)
}

fn show_stats(args: &StatsArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let trie = load(&args.source)?;
    let words = trie.all_words();

    output_result(
        &VocabularyStats {
            source: args.source.source.display().to_string(),
            word_count: trie.word_count(),
            node_count: trie.node_count(),
            max_word_length: words
                .iter()
                .map(|(word, _)| word.chars().count())
                .max()
                .unwrap_or(0),
            total_frequency: words.iter().map(|(_, frequency)| frequency).sum(),
        },
        cli_args,
    )
}

fn remove_words(args: &RemoveArgs, cli_args: &SpellTrieArgs) -> Result<()> {
    let mut trie = load(&args.source)?;
    let mut removed = Vec::new();
    let mut missing = Vec::new();

    for word in &args.words {
        match trie.remove(word) {
            Ok(()) => removed.push(word.clone()),
            Err(e) if e.is_not_found() => missing.push(word.clone()),
            Err(e) => return Err(e),
        }
    }

    let written = args.write && !removed.is_empty();
    if written {
        loader::save_file(&trie, &args.source.source)?;
        info!(
            "wrote {} words to {}",
            trie.word_count(),
            args.source.source.display()
        );
    }

    output_result(
        &RemovalResult {
            removed,
            missing,
            word_count: trie.word_count(),
            written,
        },
        cli_args,
    )
}

fn run_shell(args: &ShellArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => config_for_source(&args.source.source)?,
    };
    let service = VocabularyService::new(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&service, BufReader::new(stdin.lock()), &mut stdout.lock())
}

/// A service configuration serving the single file at `source`.
fn config_for_source(source: &Path) -> Result<ServiceConfig> {
    let name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            SpellTrieError::config(format!("Invalid source path: {}", source.display()))
        })?;
    let dir = source
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let config = ServiceConfig {
        vocabulary_dir: dir.to_path_buf(),
        default_vocabulary: name.to_string(),
        ..ServiceConfig::default()
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_for_source() {
        let config = config_for_source(Path::new("/srv/words/english.txt")).unwrap();
        assert_eq!(config.vocabulary_dir, PathBuf::from("/srv/words"));
        assert_eq!(config.default_vocabulary, "english.txt");

        let config = config_for_source(Path::new("frequency.txt")).unwrap();
        assert_eq!(config.vocabulary_dir, PathBuf::from("."));

        assert!(config_for_source(Path::new("/")).is_err());
    }

    #[test]
    fn test_load_names_the_failing_source() {
        let source = SourceArgs {
            source: PathBuf::from("/definitely/not/here.txt"),
        };
        let error = load(&source).unwrap_err();

        assert!(matches!(error, SpellTrieError::Anyhow(_)));
        let message = error.to_string();
        assert!(message.starts_with("cannot load vocabulary '/definitely/not/here.txt'"));
        assert!(message.contains("I/O error"));
    }
}
