//! Output formatting for CLI commands.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellTrieArgs};
use crate::error::Result;

/// A word with its stored frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub frequency: f64,
}

impl From<(String, f64)> for WordEntry {
    fn from((word, frequency): (String, f64)) -> Self {
        WordEntry { word, frequency }
    }
}

/// Result structure for exact lookups.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub exists: bool,
}

/// Result structure for prefix searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct PrefixResult {
    pub prefix: String,
    pub words: Vec<WordEntry>,
}

/// Result structure for suffix searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuffixResult {
    pub suffix: String,
    pub words: Vec<String>,
}

/// Result structure for spelling correction.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub word: String,
    pub suggestions: Vec<String>,
}

/// Result structure for listing the vocabulary.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordsResult {
    Flat {
        total_words: usize,
        words: Vec<WordEntry>,
    },
    ByLetter {
        total_words: usize,
        words_by_letter: BTreeMap<char, Vec<String>>,
    },
}

/// Vocabulary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct VocabularyStats {
    pub source: String,
    pub word_count: usize,
    pub node_count: usize,
    pub max_word_length: usize,
    pub total_frequency: f64,
}

/// Result structure for removals.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemovalResult {
    pub removed: Vec<String>,
    pub missing: Vec<String>,
    pub word_count: usize,
    pub written: bool,
}

/// Plain-text rendering of a command result.
pub trait HumanOutput {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()>;
}

impl HumanOutput for CheckResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.exists {
            writeln!(out, "'{}' exists in the dictionary.", self.word)
        } else {
            writeln!(out, "'{}' does not exist in the dictionary.", self.word)
        }
    }
}

impl HumanOutput for PrefixResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.words.is_empty() {
            return writeln!(out, "No words start with '{}'.", self.prefix);
        }
        let width = self
            .words
            .iter()
            .map(|entry| entry.word.chars().count())
            .max()
            .unwrap_or(0);
        for entry in &self.words {
            writeln!(out, "{:<width$}  {}", entry.word, entry.frequency)?;
        }
        Ok(())
    }
}

impl HumanOutput for SuffixResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.words.is_empty() {
            return writeln!(out, "No words end with '{}'.", self.suffix);
        }
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }
}

impl HumanOutput for CorrectionResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self.suggestions.as_slice() {
            [] => writeln!(out, "No suggestions for '{}'.", self.word),
            [only] if only == &self.word => writeln!(out, "'{}' is spelled correctly.", self.word),
            suggestions => {
                let joined = suggestions.join(", ");
                writeln!(out, "Did you mean: {joined}?")
            }
        }
    }
}

impl HumanOutput for WordsResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            WordsResult::Flat { total_words, words } => {
                for entry in words {
                    writeln!(out, "{} {}", entry.word, entry.frequency)?;
                }
                writeln!(out, "Total words: {total_words}")
            }
            WordsResult::ByLetter {
                total_words,
                words_by_letter,
            } => {
                for (letter, words) in words_by_letter {
                    let letter = letter.to_uppercase();
                    writeln!(out, "{letter} ({}): {}", words.len(), words.join(", "))?;
                }
                writeln!(out, "Total words: {total_words}")
            }
        }
    }
}

impl HumanOutput for VocabularyStats {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Vocabulary Statistics:")?;
        writeln!(out, "══════════════════════")?;
        writeln!(out, "Source: {}", self.source)?;
        writeln!(out, "Words: {}", self.word_count)?;
        writeln!(out, "Nodes: {}", self.node_count)?;
        writeln!(out, "Longest word: {}", self.max_word_length)?;
        writeln!(out, "Total frequency: {}", self.total_frequency)
    }
}

impl HumanOutput for RemovalResult {
    fn write_human<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for word in &self.removed {
            writeln!(out, "'{word}' is removed.")?;
        }
        for word in &self.missing {
            writeln!(out, "'{word}' does not exist in the dictionary.")?;
        }
        writeln!(out, "Words remaining: {}", self.word_count)?;
        if self.written {
            writeln!(out, "Source updated.")?;
        }
        Ok(())
    }
}

/// Output a result in the requested format.
pub fn output_result<T>(result: &T, args: &SpellTrieArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)
}

/// Write a result in `format` to `out`.
pub fn write_result<T, W>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<()>
where
    T: Serialize + HumanOutput,
    W: Write,
{
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
