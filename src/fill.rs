//! First-candidate substitution for a single entry.
//!
//! This is the whole of the auto-fill: find the first word that fits the
//! entry's current pattern and write it in. Crossing entries are not checked
//! and nothing is undone if a crossing later has no candidates.

use log::info;

use crate::errors::GridResult;
use crate::grid::Grid;
use crate::pattern;
use crate::segmenter::Entry;

/// Fill `entry` with the first word of `word_list` that fits it.
///
/// Returns the word written, or `None` (grid untouched) when nothing fits.
///
/// # Errors
///
/// Anything [`pattern::candidates`] or [`Grid::fill_entry`] reports.
pub fn fill_first_candidate<S: AsRef<str>>(
    grid: &mut Grid,
    entry: &Entry,
    word_list: &[S],
) -> GridResult<Option<String>> {
    let Some(word) = pattern::candidates(entry, grid, word_list)?
        .first()
        .map(|w| w.to_ascii_uppercase())
    else {
        info!("no candidate fits {}", entry.label());
        return Ok(None);
    };
    grid.fill_entry(entry, &word)?;
    Ok(Some(word))
}
