//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.
//! JSON files hold a `{"nouns": [...]}` record; any other file holds one word per line.

use super::NOUNS;
use crate::core::Word;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use thiserror::Error;

/// Where a session's words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The bundled noun list
    Embedded,
    /// A user-supplied file
    File(PathBuf),
}

impl WordSource {
    /// Embedded list unless a path is given
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

/// Structured word list record
#[derive(Debug, Deserialize)]
struct Nouns {
    nouns: Vec<String>,
}

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("malformed word list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Json` if a `.json` file does not hold a noun record.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("nouns.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&content)
    } else {
        Ok(parse_lines(&content))
    }
}

/// Parse a `{"nouns": [...]}` record
///
/// # Errors
///
/// Returns `WordListError::Json` if the content is not such a record.
pub fn parse_json(content: &str) -> Result<Vec<Word>, WordListError> {
    let record: Nouns = serde_json::from_str(content)?;
    Ok(record
        .nouns
        .into_iter()
        .filter_map(|noun| Word::new(noun).ok())
        .collect())
}

/// Parse one word per line, skipping blanks and `#` comments
#[must_use]
pub fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::NOUNS;
///
/// let words = words_from_slice(NOUNS);
/// assert_eq!(words.len(), NOUNS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load words from `source`
///
/// Missing or malformed data yields an empty list; the failure is logged.
#[must_use]
pub fn load(source: &WordSource) -> Vec<Word> {
    let words = match source {
        WordSource::Embedded => words_from_slice(NOUNS),
        WordSource::File(path) => load_from_file(path).unwrap_or_else(|e| {
            log::warn!("{}: {e}; continuing with an empty word pool", path.display());
            Vec::new()
        }),
    };
    log::info!("loaded {} words from {source:?}", words.len());
    words
}

/// Load `source` on a worker thread
///
/// The receiver yields exactly one word list.
#[must_use]
pub fn load_in_background(source: WordSource) -> Receiver<Vec<Word>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        // The receiver may be gone if the UI quit before loading finished
        let _ = tx.send(load(&source));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hangman-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["apple", "Zebra", "owl"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "zebra");
        assert_eq!(words[2].text(), "owl");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["apple", "", "ice cream", "r2d2", "owl"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "apple");
        assert_eq!(words[1].text(), "owl");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_json_record() {
        let words = parse_json(r#"{"nouns": ["Cat", "dog", "two words"]}"#).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn parse_json_malformed() {
        assert!(matches!(
            parse_json(r#"{"words": ["cat"]}"#),
            Err(WordListError::Json(_))
        ));
        assert!(matches!(parse_json("not json"), Err(WordListError::Json(_))));
    }

    #[test]
    fn parse_lines_skips_blanks_and_comments() {
        let words = parse_lines("# header\ncat\n\n  dog  \nbad word\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn load_json_file() {
        let path = temp_file("nouns.json", r#"{"nouns": ["lion", "tiger"]}"#);
        let words = load(&WordSource::File(path.clone()));
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_text_file() {
        let path = temp_file("nouns.txt", "lion\ntiger\nbear\n");
        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 3);
    }

    #[test]
    fn load_malformed_file_yields_empty_pool() {
        let path = temp_file("broken.json", "{\"nouns\": [");
        let words = load(&WordSource::File(path.clone()));
        fs::remove_file(&path).unwrap();

        assert!(words.is_empty());
    }

    #[test]
    fn load_missing_file_yields_empty_pool() {
        let source = WordSource::File(PathBuf::from("/definitely/not/here/nouns.json"));
        assert!(load(&source).is_empty());
        assert!(matches!(
            load_from_file("/definitely/not/here/nouns.json"),
            Err(WordListError::Io(_))
        ));
    }

    #[test]
    fn load_embedded() {
        let words = load(&WordSource::Embedded);
        assert_eq!(words.len(), NOUNS.len());
    }

    #[test]
    fn background_load_delivers_once() {
        let rx = load_in_background(WordSource::Embedded);
        let words = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(words.len(), NOUNS.len());
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn word_source_from_path() {
        assert_eq!(WordSource::from_path(None), WordSource::Embedded);
        assert_eq!(
            WordSource::from_path(Some(PathBuf::from("a.json"))),
            WordSource::File(PathBuf::from("a.json"))
        );
    }
}
