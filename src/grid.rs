//! The crossword grid: a square matrix of cells that are either blocked or open.
//!
//! [`Grid`] owns every [`Cell`] and is the only way to mutate one. Every edit that
//! can change the blocked layout renumbers the whole grid through
//! [`crate::segmenter::segment`], so the clue numbers stored on the cells always
//! describe the current layout and never depend on earlier numbering.
//!
//! # Example
//!
//! ```
//! use crossgrid::grid::{Direction, Grid};
//!
//! let mut grid = Grid::create(3)?;
//! grid.set_blocked(1, 1, true)?;
//! grid.set_letter(0, 0, 'c')?;
//! assert_eq!(grid.cell_at(0, 0)?.letter(), Some('C'));
//! assert_eq!(grid.cell_at(0, 0)?.clue_number(), Some(1));
//!
//! let across = grid.entry_by_number(1, Direction::Across).expect("1-Across exists");
//! assert_eq!(across.length, 3);
//! # Ok::<(), crossgrid::errors::GridError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{GridError, GridResult};
use crate::grid_char::{normalize_letter, GridChar, BLOCK_SENTINEL};
use crate::segmenter::{self, Entry, Segmentation};

/// Character used for an open, empty cell in text layouts.
pub const EMPTY_CELL: char = '.';

/// The two directions an entry can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// `(row, col)` offset of the next cell in this direction.
    #[must_use]
    pub fn step(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }

    /// Single-letter suffix used in entry labels such as `12A`.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Direction::Across => 'A',
            Direction::Down => 'D',
        }
    }

    /// Inverse of [`Direction::letter`], case-insensitive.
    #[must_use]
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Direction::Across),
            'D' => Some(Direction::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// One square of the grid.
///
/// Fields are read through accessors; all writes go through [`Grid`] so that a
/// blocked cell never ends up holding a letter, a clue number or clue text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    blocked: bool,
    letter: Option<char>,
    clue_number: Option<u32>,
    across_clue: Option<String>,
    down_clue: Option<String>,
}

impl Cell {
    fn open(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            blocked: false,
            letter: None,
            clue_number: None,
            across_clue: None,
            down_clue: None,
        }
    }

    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The cell's letter, always uppercase.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub fn clue_number(&self) -> Option<u32> {
        self.clue_number
    }

    #[must_use]
    pub fn across_clue(&self) -> Option<&str> {
        self.across_clue.as_deref()
    }

    #[must_use]
    pub fn down_clue(&self) -> Option<&str> {
        self.down_clue.as_deref()
    }

    /// Clue text for the entry starting here in `direction`.
    #[must_use]
    pub fn clue(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Across => self.across_clue(),
            Direction::Down => self.down_clue(),
        }
    }

    fn clue_slot(&mut self, direction: Direction) -> &mut Option<String> {
        match direction {
            Direction::Across => &mut self.across_clue,
            Direction::Down => &mut self.down_clue,
        }
    }

    fn clear_contents(&mut self) {
        self.letter = None;
        self.clue_number = None;
        self.across_clue = None;
        self.down_clue = None;
    }
}

/// What a call to [`Grid::set_letter`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterEdit {
    /// A letter was stored (uppercase).
    Set(char),
    /// The cell's letter was cleared.
    Cleared,
    /// The input was the legacy block marker; carries the new blocked state.
    BlockToggled(bool),
}

/// A `size × size` crossword grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Row-major; always exactly `size * size` cells.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-open, empty grid and number it.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidSize`] if `size` is 0.
    pub fn create(size: usize) -> GridResult<Self> {
        if size < 1 {
            return Err(GridError::InvalidSize { size });
        }
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::open(row, col)))
            .collect();
        Ok(Self::from_cells(size, cells))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Read-only view of one cell.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if `row` or `col` is not below the grid size.
    pub fn cell_at(&self, row: usize, col: usize) -> GridResult<&Cell> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Block or unblock a cell, then renumber the grid.
    ///
    /// Blocking a cell clears its letter and clue fields.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn set_blocked(&mut self, row: usize, col: usize, blocked: bool) -> GridResult<()> {
        let idx = self.index(row, col)?;
        let cell = &mut self.cells[idx];
        if cell.blocked == blocked {
            return Ok(());
        }
        cell.blocked = blocked;
        if blocked {
            cell.clear_contents();
        }
        debug!("cell ({row}, {col}) blocked={blocked}");
        self.renumber();
        Ok(())
    }

    /// Flip a cell's blocked flag; returns the new state.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn toggle_blocked(&mut self, row: usize, col: usize) -> GridResult<bool> {
        let blocked = !self.cell_at(row, col)?.blocked;
        self.set_blocked(row, col, blocked)?;
        Ok(blocked)
    }

    /// Apply one character typed into a cell.
    ///
    /// - [`BLOCK_SENTINEL`] toggles the block (legacy input).
    /// - An empty placeholder (`' '`, `'.'`, `'?'`) clears the letter.
    /// - A letter is stored uppercase.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`], [`GridError::BlockedCell`] when writing to or
    /// clearing a blocked cell, [`GridError::InvalidLetter`] for any other char.
    pub fn set_letter(&mut self, row: usize, col: usize, ch: char) -> GridResult<LetterEdit> {
        let idx = self.index(row, col)?;
        if ch.is_block_sentinel() {
            return self.toggle_blocked(row, col).map(LetterEdit::BlockToggled);
        }
        let letter = if ch.is_empty_placeholder() {
            None
        } else {
            Some(normalize_letter(ch).ok_or(GridError::InvalidLetter { ch })?)
        };
        let cell = &mut self.cells[idx];
        if cell.blocked {
            return Err(GridError::BlockedCell { row, col });
        }
        cell.letter = letter;
        Ok(letter.map_or(LetterEdit::Cleared, LetterEdit::Set))
    }

    /// Remove the letter from an open cell.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] or [`GridError::BlockedCell`].
    pub fn clear_letter(&mut self, row: usize, col: usize) -> GridResult<()> {
        self.set_letter(row, col, EMPTY_CELL).map(|_| ())
    }

    /// Attach clue text to the entry starting at `(row, col)` in `direction`.
    /// Blank text removes the clue.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`], or [`GridError::NoEntryStart`] when no entry
    /// starts at this cell in that direction.
    pub fn set_clue(&mut self, row: usize, col: usize, direction: Direction, text: &str) -> GridResult<()> {
        let idx = self.index(row, col)?;
        if !segmenter::starts_entry(self, row, col, direction) {
            return Err(GridError::NoEntryStart { row, col, direction });
        }
        let text = text.trim();
        *self.cells[idx].clue_slot(direction) = (!text.is_empty()).then(|| text.to_string());
        Ok(())
    }

    /// The current segmentation of the grid.
    #[must_use]
    pub fn segmentation(&self) -> Segmentation {
        segmenter::segment(self)
    }

    /// All entries, ordered by clue number (across before down on a shared number).
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        self.segmentation().entries
    }

    /// The entry with the given number and direction, if any.
    #[must_use]
    pub fn entry_by_number(&self, clue_number: u32, direction: Direction) -> Option<Entry> {
        self.segmentation().find(clue_number, direction).cloned()
    }

    /// The entry in `direction` that passes through `(row, col)`.
    /// `None` for blocked cells.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] for coordinates outside the grid.
    pub fn entry_at(&self, row: usize, col: usize, direction: Direction) -> GridResult<Option<Entry>> {
        if self.cell_at(row, col)?.blocked {
            return Ok(None);
        }
        let (mut start_row, mut start_col) = (row, col);
        while !segmenter::starts_entry(self, start_row, start_col, direction) {
            match direction {
                Direction::Across => start_col -= 1,
                Direction::Down => start_row -= 1,
            }
        }
        Ok(self
            .segmentation()
            .entries
            .into_iter()
            .find(|e| e.direction == direction && e.start_row == start_row && e.start_col == start_col))
    }

    /// Current letters along `entry`, in order.
    ///
    /// # Errors
    ///
    /// [`GridError::OutOfBounds`] if the entry runs off the grid.
    pub fn letters(&self, entry: &Entry) -> GridResult<Vec<Option<char>>> {
        entry
            .cells()
            .map(|(row, col)| self.cell_at(row, col).map(Cell::letter))
            .collect()
    }

    /// Write `word` into the cells of `entry`. Nothing is written unless every
    /// check passes.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidEntry`] on a length mismatch, [`GridError::InvalidLetter`]
    /// for non-letters, [`GridError::OutOfBounds`] / [`GridError::BlockedCell`] if
    /// the entry does not lie on open cells of this grid.
    pub fn fill_entry(&mut self, entry: &Entry, word: &str) -> GridResult<()> {
        let letters = word
            .chars()
            .map(|ch| normalize_letter(ch).ok_or(GridError::InvalidLetter { ch }))
            .collect::<GridResult<Vec<_>>>()?;
        if letters.len() != entry.length {
            return Err(GridError::InvalidEntry {
                reason: format!(
                    "\"{word}\" has {} letters but {} has {}",
                    letters.len(),
                    entry.label(),
                    entry.length
                ),
            });
        }
        let indices = entry
            .cells()
            .map(|(row, col)| {
                let idx = self.index(row, col)?;
                if self.cells[idx].blocked {
                    Err(GridError::BlockedCell { row, col })
                } else {
                    Ok(idx)
                }
            })
            .collect::<GridResult<Vec<_>>>()?;
        for (idx, letter) in indices.into_iter().zip(letters) {
            self.cells[idx].letter = Some(letter);
        }
        debug!("filled {} with {word}", entry.label());
        Ok(())
    }

    /// Remove every letter; blocks and clues stay.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.letter = None;
        }
    }

    /// `true` if `(row, col)` is inside the grid and blocked.
    #[must_use]
    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.cell_at(row, col).is_ok_and(Cell::is_blocked)
    }

    /// Recompute clue numbers from the blocked layout and drop clue text from
    /// cells that no longer start an entry in that direction.
    pub(crate) fn renumber(&mut self) {
        let segmentation = segmenter::segment(self);
        let mut starts = vec![[false; 2]; self.cells.len()];
        for entry in &segmentation.entries {
            let slot = match entry.direction {
                Direction::Across => 0,
                Direction::Down => 1,
            };
            starts[entry.start_row * self.size + entry.start_col][slot] = true;
        }
        for ((cell, number), [across, down]) in self.cells.iter_mut().zip(segmentation.numbers).zip(starts) {
            cell.clue_number = number;
            if !across {
                cell.across_clue = None;
            }
            if !down {
                cell.down_clue = None;
            }
        }
        debug!(
            "renumbered {0}x{0} grid: {1} entries",
            self.size,
            segmentation.entries.len()
        );
    }

    /// Assemble a grid from row-major cells and number it.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        let mut grid = Self { size, cells };
        grid.renumber();
        grid
    }

    fn index(&self, row: usize, col: usize) -> GridResult<usize> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds { row, col, size: self.size });
        }
        Ok(row * self.size + col)
    }
}

/// Cell fields as stored, used when rebuilding a grid from a snapshot.
pub(crate) struct CellParts {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) blocked: bool,
    pub(crate) letter: Option<char>,
    pub(crate) across_clue: Option<String>,
    pub(crate) down_clue: Option<String>,
}

impl From<CellParts> for Cell {
    fn from(parts: CellParts) -> Self {
        Self {
            row: parts.row,
            col: parts.col,
            blocked: parts.blocked,
            letter: parts.letter,
            clue_number: None,
            across_clue: parts.across_clue,
            down_clue: parts.down_clue,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: String = row
                .iter()
                .map(|cell| {
                    if cell.blocked {
                        BLOCK_SENTINEL
                    } else {
                        cell.letter.unwrap_or(EMPTY_CELL)
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Parse a text layout: one line per row, `#` for blocks, `.` (or another
/// empty placeholder) for empty cells, letters for filled cells. Blank lines
/// around the layout are ignored.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        let size = rows.len();
        if size == 0 {
            return Err(GridError::InvalidLayout { reason: "no rows".to_string() });
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != size {
                return Err(GridError::InvalidLayout {
                    reason: format!("row {row} has {} cells, expected {size}", chars.len()),
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let mut cell = Cell::open(row, col);
                if ch.is_block_sentinel() {
                    cell.blocked = true;
                } else if !ch.is_empty_placeholder() {
                    cell.letter = Some(normalize_letter(ch).ok_or_else(|| GridError::InvalidLayout {
                        reason: format!("unexpected {ch:?} at ({row}, {col})"),
                    })?);
                }
                cells.push(cell);
            }
        }
        Ok(Self::from_cells(size, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(grid: &Grid) -> Vec<Option<u32>> {
        grid.cells().map(Cell::clue_number).collect()
    }

    #[test]
    fn test_create_all_open() {
        let grid = Grid::create(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().count(), 16);
        assert!(grid.cells().all(|c| !c.is_blocked() && c.letter().is_none()));
    }

    #[test]
    fn test_create_zero_fails() {
        assert!(matches!(Grid::create(0), Err(GridError::InvalidSize { size: 0 })));
    }

    #[test]
    fn test_cells_know_their_coordinates() {
        let grid = Grid::create(3).unwrap();
        let cell = grid.cell_at(2, 1).unwrap();
        assert_eq!((cell.row(), cell.col()), (2, 1));
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let grid = Grid::create(3).unwrap();
        assert!(matches!(grid.cell_at(3, 0), Err(GridError::OutOfBounds { row: 3, col: 0, size: 3 })));
        assert!(matches!(grid.cell_at(0, 3), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_set_blocked_clears_letter_and_clues() {
        let mut grid = Grid::create(3).unwrap();
        grid.set_letter(0, 0, 'x').unwrap();
        grid.set_clue(0, 0, Direction::Across, "Kiss").unwrap();
        grid.set_blocked(0, 0, true).unwrap();

        let cell = grid.cell_at(0, 0).unwrap();
        assert!(cell.is_blocked());
        assert_eq!(cell.letter(), None);
        assert_eq!(cell.clue_number(), None);
        assert_eq!(cell.across_clue(), None);
    }

    #[test]
    fn test_set_blocked_out_of_bounds_does_not_mutate() {
        let mut grid = Grid::create(2).unwrap();
        let before = grid.clone();
        assert!(grid.set_blocked(2, 2, true).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_blocked_round_trip() {
        let mut grid = Grid::create(3).unwrap();
        let before = numbers(&grid);
        assert!(grid.toggle_blocked(1, 1).unwrap());
        assert_ne!(numbers(&grid), before);
        assert!(!grid.toggle_blocked(1, 1).unwrap());
        assert_eq!(numbers(&grid), before);
    }

    #[test]
    fn test_set_letter_uppercases() {
        let mut grid = Grid::create(2).unwrap();
        assert_eq!(grid.set_letter(1, 0, 'q').unwrap(), LetterEdit::Set('Q'));
        assert_eq!(grid.cell_at(1, 0).unwrap().letter(), Some('Q'));
    }

    #[test]
    fn test_set_letter_sentinel_toggles_block() {
        let mut grid = Grid::create(2).unwrap();
        grid.set_letter(0, 1, 'a').unwrap();
        assert_eq!(grid.set_letter(0, 1, '#').unwrap(), LetterEdit::BlockToggled(true));
        assert!(grid.cell_at(0, 1).unwrap().is_blocked());
        assert_eq!(grid.cell_at(0, 1).unwrap().letter(), None);
        assert_eq!(grid.set_letter(0, 1, '#').unwrap(), LetterEdit::BlockToggled(false));
        assert!(!grid.cell_at(0, 1).unwrap().is_blocked());
    }

    #[test]
    fn test_set_letter_on_blocked_cell_fails() {
        let mut grid = Grid::create(2).unwrap();
        grid.set_blocked(0, 0, true).unwrap();
        assert!(matches!(grid.set_letter(0, 0, 'A'), Err(GridError::BlockedCell { row: 0, col: 0 })));
        assert!(grid.clear_letter(0, 0).is_err());
    }

    #[test]
    fn test_set_letter_rejects_non_letters() {
        let mut grid = Grid::create(2).unwrap();
        assert!(matches!(grid.set_letter(0, 0, '7'), Err(GridError::InvalidLetter { ch: '7' })));
        assert_eq!(grid.cell_at(0, 0).unwrap().letter(), None);
    }

    #[test]
    fn test_placeholder_clears_letter() {
        let mut grid = Grid::create(2).unwrap();
        grid.set_letter(0, 0, 'A').unwrap();
        assert_eq!(grid.set_letter(0, 0, ' ').unwrap(), LetterEdit::Cleared);
        assert_eq!(grid.cell_at(0, 0).unwrap().letter(), None);
    }

    #[test]
    fn test_set_clue_requires_entry_start() {
        let mut grid = Grid::create(3).unwrap();
        grid.set_clue(0, 1, Direction::Down, "Middle column").unwrap();
        assert_eq!(grid.cell_at(0, 1).unwrap().down_clue(), Some("Middle column"));
        assert!(matches!(
            grid.set_clue(0, 1, Direction::Across, "nope"),
            Err(GridError::NoEntryStart { row: 0, col: 1, direction: Direction::Across })
        ));
    }

    #[test]
    fn test_blank_clue_clears() {
        let mut grid = Grid::create(3).unwrap();
        grid.set_clue(0, 0, Direction::Across, "Top row").unwrap();
        grid.set_clue(0, 0, Direction::Across, "   ").unwrap();
        assert_eq!(grid.cell_at(0, 0).unwrap().across_clue(), None);
    }

    #[test]
    fn test_renumber_drops_clue_from_former_start() {
        let mut grid = Grid::create(3).unwrap();
        grid.set_blocked(1, 0, true).unwrap();
        grid.set_clue(1, 1, Direction::Across, "Short").unwrap();
        grid.set_blocked(1, 0, false).unwrap();
        assert_eq!(grid.cell_at(1, 1).unwrap().across_clue(), None);
    }

    #[test]
    fn test_entry_at_walks_back_to_start() {
        let grid: Grid = "...\n.#.\n...".parse().unwrap();
        let entry = grid.entry_at(2, 2, Direction::Across).unwrap().unwrap();
        assert_eq!((entry.start_row, entry.start_col, entry.length), (2, 0, 3));
        let down = grid.entry_at(2, 2, Direction::Down).unwrap().unwrap();
        assert_eq!((down.start_row, down.start_col, down.length), (0, 2, 3));
        assert!(grid.entry_at(1, 1, Direction::Down).unwrap().is_none());
    }

    #[test]
    fn test_letters_follow_entry() {
        let grid: Grid = "C.T\n...\n...".parse().unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        assert_eq!(grid.letters(&entry).unwrap(), vec![Some('C'), None, Some('T')]);
    }

    #[test]
    fn test_fill_entry_writes_word() {
        let mut grid = Grid::create(3).unwrap();
        let entry = grid.entry_by_number(1, Direction::Down).unwrap();
        grid.fill_entry(&entry, "cat").unwrap();
        assert_eq!(grid.to_string(), "C..\nA..\nT..\n");
    }

    #[test]
    fn test_fill_entry_length_mismatch_is_atomic() {
        let mut grid = Grid::create(3).unwrap();
        let entry = grid.entry_by_number(1, Direction::Across).unwrap();
        assert!(matches!(grid.fill_entry(&entry, "cats"), Err(GridError::InvalidEntry { .. })));
        assert!(matches!(grid.fill_entry(&entry, "c4t"), Err(GridError::InvalidLetter { ch: '4' })));
        assert!(grid.cells().all(|c| c.letter().is_none()));
    }

    #[test]
    fn test_clear_keeps_blocks() {
        let mut grid: Grid = "AB#\nCDE\n#FG".parse().unwrap();
        grid.clear();
        assert_eq!(grid.to_string(), "..#\n...\n#..\n");
    }

    #[test]
    fn test_layout_round_trip() {
        let layout = "CAT#\n...#\n#...\nDOG.\n";
        let grid: Grid = layout.parse().unwrap();
        assert_eq!(grid.to_string(), layout);
    }

    #[test]
    fn test_layout_must_be_square() {
        assert!(matches!("...\n..".parse::<Grid>(), Err(GridError::InvalidLayout { .. })));
        assert!(matches!("".parse::<Grid>(), Err(GridError::InvalidLayout { .. })));
        assert!(matches!("a1\n..".parse::<Grid>(), Err(GridError::InvalidLayout { .. })));
    }

    #[test]
    fn test_direction_letters() {
        assert_eq!(Direction::Across.letter(), 'A');
        assert_eq!(Direction::from_letter('d'), Some(Direction::Down));
        assert_eq!(Direction::from_letter('x'), None);
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
