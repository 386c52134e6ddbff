//! Line-oriented interactive session over the vocabulary service.

use std::io::{BufRead, Write};

use log::warn;

use crate::error::Result;
use crate::service::{SessionId, VocabularyService};
use crate::trie::CorrectionMode;

const HELP: &str = "\
commands:
  check <word>            is the word in the dictionary?
  prefix <prefix>         most frequent words with this prefix
  suffix <suffix>         words with this suffix
  correct <word> [loose]  did-you-mean suggestions
  remove <word>           hide a word for this session
  save                    write this session's removals to the source
  words                   word counts by initial letter
  count                   number of visible words
  use <file>              switch vocabulary (drops removals)
  reset                   back to the default vocabulary
  help | quit";

/// Run commands read from `input` against one session until EOF or `quit`.
///
/// Request failures are reported on `out` and do not end the session; only
/// I/O errors on `input` or `out` are returned. The session is closed either
/// way.
pub fn run<R: BufRead, W: Write>(
    service: &VocabularyService,
    input: R,
    out: &mut W,
) -> Result<()> {
    let session = service.open_session();
    let result = serve(service, session, input, out);
    let closed = service.close_session(session);
    result.and(closed)
}

fn serve<R: BufRead, W: Write>(
    service: &VocabularyService,
    session: SessionId,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "spelltrie {} (type 'help')", env!("CARGO_PKG_VERSION"))?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let args: Vec<&str> = parts.collect();

        if matches!(command, "quit" | "exit") {
            break;
        }
        if let Err(e) = dispatch(service, session, command, &args, out) {
            if e.is_not_found() {
                writeln!(out, "{e}")?;
            } else {
                warn!("shell command '{command}' failed: {e}");
                writeln!(out, "Error: {e}")?;
            }
        }
    }
    Ok(())
}

fn dispatch<W: Write>(
    service: &VocabularyService,
    session: SessionId,
    command: &str,
    args: &[&str],
    out: &mut W,
) -> Result<()> {
    match (command, args) {
        ("check", [word]) => {
            if service.check_word(session, word)? {
                writeln!(out, "'{word}' exists in the dictionary.")?;
            } else {
                writeln!(out, "'{word}' does not exist in the dictionary.")?;
            }
        }
        ("prefix", [prefix]) => {
            for (word, frequency) in service.prefix_search(session, prefix)? {
                writeln!(out, "{word} {frequency}")?;
            }
        }
        ("suffix", [suffix]) => {
            writeln!(out, "{}", service.suffix_search(session, suffix)?.join(" "))?;
        }
        ("correct", [word, rest @ ..]) if rest.len() <= 1 => {
            let mode = match rest {
                ["loose"] => CorrectionMode::NonAdjacent,
                _ => CorrectionMode::Substitution,
            };
            let suggestions = service.correct_spelling(session, word, mode)?;
            if suggestions.is_empty() {
                writeln!(out, "No suggestions for '{word}'.")?;
            } else {
                writeln!(out, "{}", suggestions.join(" "))?;
            }
        }
        ("remove", [word]) => {
            service.remove_word(session, word)?;
            writeln!(out, "'{word}' is removed.")?;
        }
        ("save", []) => {
            let deleted = service.persist_removals(session)?;
            writeln!(out, "{deleted} words removed from the source.")?;
        }
        ("words", []) => {
            for (letter, words) in service.words_by_letter(session)? {
                if !words.is_empty() {
                    writeln!(out, "{letter}: {}", words.len())?;
                }
            }
        }
        ("count", []) => writeln!(out, "{}", service.word_count(session)?)?,
        ("use", [name]) => {
            service.change_vocabulary(session, name)?;
            writeln!(out, "Using '{name}'.")?;
        }
        ("reset", []) => {
            service.clear_session(session)?;
            writeln!(out, "Session reset.")?;
        }
        ("help", []) => writeln!(out, "{HELP}")?,
        _ => writeln!(out, "Unknown command: {command} (type 'help')")?,
    }
    Ok(())
}
