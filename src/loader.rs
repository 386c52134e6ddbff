//! Loading and saving vocabulary sources.
//!
//! A source is plain text with one entry per line, `<word> <frequency>`,
//! where the frequency is a floating-point number. Blank lines are skipped;
//! any other line without exactly those two tokens aborts the load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Result, SpellTrieError};
use crate::trie::Trie;

/// Parse one source line into a word and its frequency.
///
/// Returns `Ok(None)` for blank lines. `line_no` is 1-based.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<(&str, f64)>> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };

    let frequency = parts.next().ok_or_else(|| {
        SpellTrieError::malformed(line_no, format!("missing frequency for '{word}'"))
    })?;
    if parts.next().is_some() {
        return Err(SpellTrieError::malformed(
            line_no,
            format!("expected '<word> <frequency>', found {line:?}"),
        ));
    }

    let frequency = frequency.parse::<f64>().map_err(|e| {
        SpellTrieError::malformed(line_no, format!("invalid frequency {frequency:?}: {e}"))
    })?;

    Ok(Some((word, frequency)))
}

/// Build a trie from source text held in memory.
pub fn load_str(source: &str) -> Result<Trie> {
    let mut trie = Trie::new();
    for (i, line) in source.lines().enumerate() {
        if let Some((word, frequency)) = parse_line(line, i + 1)? {
            trie.insert_with_frequency(word, frequency);
        }
    }
    Ok(trie)
}

/// Build a trie from a buffered reader.
pub fn load_reader<R: BufRead>(reader: R) -> Result<Trie> {
    let mut trie = Trie::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some((word, frequency)) = parse_line(&line, i + 1)? {
            trie.insert_with_frequency(word, frequency);
        }
    }
    Ok(trie)
}

/// Build a trie from a source file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let trie = load_reader(BufReader::new(file))?;
    debug!("loaded {} words from {}", trie.word_count(), path.display());
    Ok(trie)
}

/// Write every stored word as a `word frequency` line, in lexicographic order.
pub fn write_source<W: Write>(trie: &Trie, mut writer: W) -> Result<()> {
    for (word, frequency) in trie.all_words() {
        writeln!(writer, "{word} {frequency}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Save a trie to a source file, replacing its contents.
///
/// The words go to a temporary file beside `path`, which is then renamed over
/// it. On failure the existing file is left as it was.
pub fn save_file<P: AsRef<Path>>(trie: &Trie, path: P) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    write_source(trie, BufWriter::new(temp.as_file_mut()))?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    debug!("saved {} words to {}", trie.word_count(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_str() {
        let trie = load_str("flare 12\nflake 3.5\n\n  glare\t1\n").unwrap();

        assert_eq!(trie.word_count(), 3);
        assert_eq!(trie.frequency("flare"), Some(12.0));
        assert_eq!(trie.frequency("flake"), Some(3.5));
        assert_eq!(trie.frequency("glare"), Some(1.0));
    }

    #[test]
    fn test_duplicate_entries_keep_first() {
        let trie = load_str("flare 12\nFlare 40\n").unwrap();
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.frequency("flare"), Some(12.0));
    }

    #[test]
    fn test_missing_frequency_is_malformed() {
        let err = load_str("flare 12\nflake\n").unwrap_err();
        match err {
            SpellTrieError::MalformedSource { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected malformed source, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_frequency_is_malformed() {
        assert!(matches!(
            load_str("flare often\n"),
            Err(SpellTrieError::MalformedSource { line: 1, .. })
        ));
        assert!(matches!(
            load_str("flare 1 2\n"),
            Err(SpellTrieError::MalformedSource { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   ", 1).unwrap(), None);
        assert_eq!(parse_line("word 2e3", 1).unwrap(), Some(("word", 2000.0)));
    }

    #[test]
    fn test_file_operations() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "hello 5").unwrap();
        writeln!(temp_file, "world 3").unwrap();
        temp_file.flush().unwrap();

        let mut trie = load_file(temp_file.path()).unwrap();
        assert_eq!(trie.word_count(), 2);

        trie.remove("hello").unwrap();
        save_file(&trie, temp_file.path()).unwrap();

        let reloaded = load_file(temp_file.path()).unwrap();
        assert_eq!(reloaded.all_words(), vec![("world".to_string(), 3.0)]);
    }

    #[test]
    fn test_failed_save_keeps_existing_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("words");
        std::fs::create_dir(&target).unwrap();

        let trie = load_str("flare 2\n").unwrap();
        assert!(save_file(&trie, &target).is_err());
        assert!(target.is_dir());

        let missing = dir.path().join("gone").join("words.txt");
        assert!(matches!(
            save_file(&trie, &missing),
            Err(SpellTrieError::Io(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_file("/definitely/not/here.txt"),
            Err(SpellTrieError::Io(_))
        ));
    }
}
