//! Loading a candidate word list from text.
//!
//! The pattern matcher only needs a slice of words. This module turns the raw
//! text a word source hands us (a file on native builds, a `fetch()` body in the
//! browser) into that list.
//!
//! The parsing logic:
//! - One word per line, optionally followed by `;score`.
//! - Blank lines are skipped.
//! - Lines with a score are kept only if the score parses and is at least
//!   `min_score`; lines without a score are always kept.
//! - Words containing anything other than ASCII letters are skipped.
//! - Words are normalized to uppercase, deduplicated, and sorted by length
//!   first, then alphabetically.
//!
//! `parse_from_str` works everywhere; `load_from_path` is native-only.

use std::sync::LazyLock;

use fancy_regex::Regex;
use log::debug;

/// Matches a word made only of ASCII letters.
pub(crate) static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("static word regex compiles"));

/// A processed, ready-to-use word list, sorted by (length, alphabetical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Uppercase words, e.g. `["ACE", "ANT", "ABLE", ...]`.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// # Arguments
    /// * `contents`: the raw text. Each line is `word` or `word;score`.
    /// * `min_score`: scored lines below this are skipped.
    #[must_use]
    pub fn parse_from_str(contents: &str, min_score: i32) -> WordList {
        let mut words: Vec<String> = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                let word = match line.split_once(';') {
                    Some((word_raw, score_raw)) => {
                        let score: i32 = score_raw.trim().parse().ok()?;
                        if score < min_score {
                            return None;
                        }
                        word_raw.trim()
                    }
                    None => line,
                };
                WORD_RE
                    .is_match(word)
                    .unwrap_or(false)
                    .then(|| word.to_ascii_uppercase())
            })
            .collect();

        sort_dedup(&mut words);

        debug!("parsed word list: {} words", words.len());
        WordList { words }
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, min_score: i32) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data, min_score))
    }

    /// Words no longer than `max_len`, e.g. the grid size.
    #[must_use]
    pub fn fitting(&self, max_len: usize) -> Vec<&str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| w.len() <= max_len)
            .collect()
    }

    /// Borrow every word, for passing to [`crate::pattern::candidates`].
    #[must_use]
    pub fn as_refs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Deduplicate, then order by (length, alphabetical).
fn sort_dedup(words: &mut Vec<String>) {
    // dedup() only removes adjacent duplicates, so sort alphabetically first
    words.sort();
    words.dedup();
    words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
}
