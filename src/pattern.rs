//! Entry patterns and candidate-word filtering.
//!
//! A [`Pattern`] is the sequence of fixed letters and wildcards currently in an
//! entry's cells, e.g. `C.T.` for a four-letter entry with `C` and `T` filled
//! in. [`candidates`] filters a word list down to the words that fit.
//!
//! Matching is done with an anchored, case-insensitive regex rendered from the
//! pattern (`(?s)^[Cc].[Tt].$`); compiled regexes are cached by pattern text since
//! the same entry is usually queried many times while a user edits around it.
//!
//! ```
//! use crossgrid::grid::{Direction, Grid};
//! use crossgrid::pattern;
//!
//! let grid: Grid = "C.T.\n####\n####\n####".parse()?;
//! let entry = grid.entry_by_number(1, Direction::Across).expect("1-Across");
//! let words = ["CATS", "CUTE", "COAT", "CARTS"];
//! assert_eq!(pattern::candidates(&entry, &grid, &words)?, vec!["CATS", "CUTE"]);
//! # Ok::<(), crossgrid::errors::GridError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use fancy_regex::Regex;
use log::{debug, warn};

use crate::errors::{GridError, GridResult};
use crate::grid::Grid;
use crate::segmenter::Entry;

/// Symbol used for an empty cell in a rendered pattern.
pub const WILDCARD: char = '.';

/// One position of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSymbol {
    /// A letter already in the grid (uppercase).
    Fixed(char),
    /// An empty cell.
    Wildcard,
}

impl PatternSymbol {
    fn as_char(self) -> char {
        match self {
            PatternSymbol::Fixed(c) => c,
            PatternSymbol::Wildcard => WILDCARD,
        }
    }
}

/// Fixed letters and wildcards of one entry, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub symbols: Vec<PatternSymbol>,
    /// Entry length; always equal to `symbols.len()`.
    pub length: usize,
}

impl Pattern {
    /// Number of fixed (non-wildcard) positions.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.symbols.iter().filter(|s| matches!(s, PatternSymbol::Fixed(_))).count()
    }

    /// True if every position is a wildcard.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.fixed_count() == 0
    }

    /// True if every position is fixed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fixed_count() == self.length
    }

    /// Anchored regex source for this pattern, e.g. `(?s)^[Cc].[Tt].$`.
    ///
    /// Letters fold ASCII case only and a wildcard matches any one char,
    /// newlines included, so the regex agrees with `matches_by_position`.
    #[must_use]
    pub fn to_regex(&self) -> String {
        let body: String = self
            .symbols
            .iter()
            .map(|symbol| match *symbol {
                PatternSymbol::Fixed(c) if c.is_ascii_alphabetic() => {
                    format!("[{}{}]", c.to_ascii_uppercase(), c.to_ascii_lowercase())
                }
                PatternSymbol::Fixed(c) => fancy_regex::escape(c.encode_utf8(&mut [0; 4])).into_owned(),
                PatternSymbol::Wildcard => WILDCARD.to_string(),
            })
            .collect();
        format!("(?s)^{body}$")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.symbols.iter().map(|s| s.as_char()).collect();
        write!(f, "{rendered}")
    }
}

/// Global, lazily initialized cache of compiled pattern regexes.
///
/// Lock is held only for lookups and inserts; compilation happens outside it.
/// A poisoned lock just disables caching.
static REGEX_CACHE: OnceLock<Mutex<HashMap<String, Regex>>> = OnceLock::new();

/// Return a compiled `Regex` for `pattern`, caching the result.
fn get_regex(pattern: &str) -> Result<Regex, Box<fancy_regex::Error>> {
    let cache = REGEX_CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Ok(guard) = cache.lock()
        && let Some(re) = guard.get(pattern).cloned()
    {
        return Ok(re);
    }

    let compiled = Regex::new(pattern)?;

    if let Ok(mut guard) = cache.lock() {
        if let Some(existing) = guard.get(pattern).cloned() {
            return Ok(existing);
        }
        guard.insert(pattern.to_string(), compiled.clone());
    }
    Ok(compiled)
}

/// Read the pattern of `entry` from the current letters of `grid`.
///
/// # Errors
///
/// [`GridError::InvalidEntry`] for a zero-length entry, or
/// [`GridError::OutOfBounds`] if the entry does not fit on `grid`.
pub fn build_pattern(entry: &Entry, grid: &Grid) -> GridResult<Pattern> {
    if entry.length == 0 {
        return Err(GridError::InvalidEntry {
            reason: format!("{} has length 0", entry.label()),
        });
    }
    let symbols = grid
        .letters(entry)?
        .into_iter()
        .map(|letter| letter.map_or(PatternSymbol::Wildcard, PatternSymbol::Fixed))
        .collect();
    Ok(Pattern { symbols, length: entry.length })
}

/// Slow-path check that `word` fits `pattern`, one position at a time.
fn matches_by_position(pattern: &Pattern, word: &str) -> bool {
    word.chars().zip(&pattern.symbols).all(|(c, symbol)| match symbol {
        PatternSymbol::Fixed(fixed) => c.eq_ignore_ascii_case(fixed),
        PatternSymbol::Wildcard => true,
    })
}

/// Whether `word` has the pattern's length and agrees with every fixed letter,
/// ignoring ASCII case.
#[must_use]
pub fn matches(pattern: &Pattern, word: &str) -> bool {
    if word.chars().count() != pattern.length {
        return false;
    }
    match get_regex(&pattern.to_regex()) {
        Ok(re) => re.is_match(word).unwrap_or_else(|e| {
            warn!("regex match failed for {pattern}: {e}; falling back");
            matches_by_position(pattern, word)
        }),
        Err(e) => {
            warn!("could not compile regex for {pattern}: {e}; falling back");
            matches_by_position(pattern, word)
        }
    }
}

/// The words of `word_list`, in their original order, that fit `entry` as it
/// is currently filled in on `grid`.
///
/// Words must have exactly the entry's length regardless of how the list was
/// pre-filtered. An empty result (including for an empty list) is not an error.
///
/// # Errors
///
/// See [`build_pattern`].
pub fn candidates<'w, S: AsRef<str>>(entry: &Entry, grid: &Grid, word_list: &'w [S]) -> GridResult<Vec<&'w str>> {
    let pattern = build_pattern(entry, grid)?;
    let found: Vec<&str> = word_list
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| matches(&pattern, word))
        .collect();
    debug!(
        "{} pattern {pattern}: {} of {} words match",
        entry.label(),
        found.len(),
        word_list.len()
    );
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn pattern_of(s: &str) -> Pattern {
        let symbols = s
            .chars()
            .map(|c| if c == WILDCARD { PatternSymbol::Wildcard } else { PatternSymbol::Fixed(c) })
            .collect();
        Pattern { symbols, length: s.chars().count() }
    }

    #[test]
    fn test_build_pattern_reads_letters() {
        let grid: Grid = "C.T.\n....\n....\n....".parse().unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        let pattern = build_pattern(&entry, &grid).unwrap();
        assert_eq!(pattern.to_string(), "C.T.");
        assert_eq!(pattern.length, 4);
        assert_eq!(pattern.fixed_count(), 2);
        assert!(!pattern.is_open());
        assert!(!pattern.is_complete());
    }

    #[test]
    fn test_build_pattern_down_entry() {
        let grid: Grid = "A..\nB..\n...".parse().unwrap();
        let entry = grid.entry_by_number(1, Direction::Down).unwrap();
        assert_eq!(build_pattern(&entry, &grid).unwrap().to_string(), "AB.");
    }

    #[test]
    fn test_zero_length_entry_is_invalid() {
        let grid = Grid::create(2).unwrap();
        let entry = Entry { start_row: 0, start_col: 0, direction: Direction::Across, length: 0, clue_number: 1 };
        assert!(matches!(build_pattern(&entry, &grid), Err(GridError::InvalidEntry { .. })));
        assert!(candidates(&entry, &grid, &["A"]).is_err());
    }

    #[test]
    fn test_entry_off_grid_is_out_of_bounds() {
        let grid = Grid::create(2).unwrap();
        let entry = Entry { start_row: 0, start_col: 1, direction: Direction::Across, length: 3, clue_number: 1 };
        assert!(matches!(build_pattern(&entry, &grid), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_to_regex_is_anchored_and_case_insensitive() {
        assert_eq!(pattern_of("C.T.").to_regex(), "(?s)^[Cc].[Tt].$");
        assert_eq!(pattern_of("A+").to_regex(), "(?s)^[Aa]\\+$");
    }

    #[test]
    fn test_wildcard_matches_newline() {
        let pattern = pattern_of("...");
        assert!(matches(&pattern, "A\nB"));
        assert!(matches_by_position(&pattern, "A\nB"));
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        // U+212A KELVIN SIGN folds to 'k' under Unicode rules
        let pattern = pattern_of("K..");
        assert!(!matches(&pattern, "\u{212A}AB"));
        assert!(!matches_by_position(&pattern, "\u{212A}AB"));
        assert!(matches(&pattern, "kab"));
    }

    #[test]
    fn test_candidates_keep_words_with_newlines() {
        let grid = Grid::create(3).unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        assert_eq!(candidates(&entry, &grid, &["A\nB", "ABC"]).unwrap(), vec!["A\nB", "ABC"]);
    }

    #[test]
    fn test_matches_case_insensitive() {
        let pattern = pattern_of("C.T.");
        assert!(matches(&pattern, "cats"));
        assert!(matches(&pattern, "CuTe"));
        assert!(!matches(&pattern, "coat"));
    }

    #[test]
    fn test_matches_is_anchored() {
        let pattern = pattern_of("AT");
        assert!(matches(&pattern, "at"));
        assert!(!matches(&pattern, "cat"));
        assert!(!matches(&pattern, "ate"));
    }

    #[test]
    fn test_wildcard_only_matches_every_word_of_length() {
        let pattern = pattern_of("...");
        assert!(pattern.is_open());
        for word in ["ABC", "xyz", "Q-Z"] {
            assert!(matches(&pattern, word), "{word}");
        }
        assert!(!matches(&pattern, "ABCD"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let pattern = pattern_of("C..");
        assert!(matches(&pattern, "CAÉ"));
        assert!(!matches(&pattern, "CA"));
    }

    #[test]
    fn test_position_fallback_agrees_with_regex() {
        let pattern = pattern_of("C.T.");
        for word in ["CATS", "CUTE", "COAT", "cats", "DOTS", "C\nTS", "\u{212A}ATS"] {
            assert_eq!(matches(&pattern, word), matches_by_position(&pattern, word), "{word}");
        }
    }

    #[test]
    fn test_regex_cache_returns_same_pattern() {
        let a = get_regex("(?i)^Z.Z$").unwrap();
        let b = get_regex("(?i)^Z.Z$").unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_candidates_scenario() {
        let grid: Grid = "C.T.\n####\n####\n####".parse().unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        let words = vec!["CATS", "CUTE", "COAT", "CARTS"];
        assert_eq!(candidates(&entry, &grid, &words).unwrap(), vec!["CATS", "CUTE"]);
    }

    #[test]
    fn test_candidates_preserve_order_and_accept_strings() {
        let grid = Grid::create(3).unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        let words: Vec<String> = ["dog", "ANT", "bee", "WASP"].iter().map(|s| s.to_string()).collect();
        assert_eq!(candidates(&entry, &grid, &words).unwrap(), vec!["dog", "ANT", "bee"]);
    }

    #[test]
    fn test_candidates_empty_word_list() {
        let grid = Grid::create(3).unwrap();
        let entry = grid.entry_by_number(1, Direction::Down).unwrap();
        let words: Vec<&str> = Vec::new();
        assert!(candidates(&entry, &grid, &words).unwrap().is_empty());
    }
}
