//! Clue numbering and entry segmentation.
//!
//! Numbering is derived from the blocked layout alone, in one row-major pass
//! with a single counter shared by both directions:
//!
//! 1. Blocked cells are skipped.
//! 2. An open cell starts an across entry if it is in column 0 or its left
//!    neighbour is blocked, and a down entry if it is in row 0 or the cell
//!    above is blocked.
//! 3. A cell that starts anything takes the next number. A cell starting both
//!    an across and a down entry gives both the same number.
//! 4. Each entry runs from its start to the next blocked cell or the edge.
//!
//! Runs of length 1 are numbered and listed like any other entry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::{Direction, Grid};

/// A maximal run of open cells in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub start_row: usize,
    pub start_col: usize,
    pub direction: Direction,
    pub length: usize,
    pub clue_number: u32,
}

impl Entry {
    /// Coordinates of the entry's cells, from the start cell onwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = self.direction.step();
        let (row, col) = (self.start_row, self.start_col);
        (0..self.length).map(move |i| (row + dr * i, col + dc * i))
    }

    /// Whether `(row, col)` lies on this entry.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.direction {
            Direction::Across => row == self.start_row && (self.start_col..self.start_col + self.length).contains(&col),
            Direction::Down => col == self.start_col && (self.start_row..self.start_row + self.length).contains(&row),
        }
    }

    /// Short label such as `"4D"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.clue_number, self.direction.letter())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}), {} letters",
            self.label(),
            self.start_row,
            self.start_col,
            self.length
        )
    }
}

/// Result of one segmentation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmentation {
    /// Ordered by clue number; across before down on a shared number.
    pub entries: Vec<Entry>,
    /// Row-major clue number per cell (`None` for blocked and non-start cells).
    pub numbers: Vec<Option<u32>>,
}

impl Segmentation {
    pub fn across(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.direction == Direction::Across)
    }

    pub fn down(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.direction == Direction::Down)
    }

    #[must_use]
    pub fn find(&self, clue_number: u32, direction: Direction) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.clue_number == clue_number && e.direction == direction)
    }

    /// Highest clue number handed out (0 for a fully blocked grid).
    #[must_use]
    pub fn max_number(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.clue_number)
    }
}

/// True iff `(row, col)` is an open cell that begins an entry in `direction`.
#[must_use]
pub fn starts_entry(grid: &Grid, row: usize, col: usize, direction: Direction) -> bool {
    if row >= grid.size() || col >= grid.size() || grid.is_blocked(row, col) {
        return false;
    }
    match direction {
        Direction::Across => col == 0 || grid.is_blocked(row, col - 1),
        Direction::Down => row == 0 || grid.is_blocked(row - 1, col),
    }
}

/// Number of open cells from `(row, col)` up to the next block or the edge.
fn run_length(grid: &Grid, row: usize, col: usize, direction: Direction) -> usize {
    let (dr, dc) = direction.step();
    let size = grid.size();
    let (mut r, mut c) = (row, col);
    let mut length = 0;
    while r < size && c < size && !grid.is_blocked(r, c) {
        length += 1;
        r += dr;
        c += dc;
    }
    length
}

/// Derive every entry and clue number from the grid's blocked layout.
///
/// Total over every grid; a fully blocked grid yields no entries. The result
/// depends only on which cells are blocked.
#[must_use]
pub fn segment(grid: &Grid) -> Segmentation {
    let size = grid.size();
    let mut entries = Vec::new();
    let mut numbers = vec![None; size * size];
    let mut next_number: u32 = 1;

    for row in 0..size {
        for col in 0..size {
            let starts = Direction::ALL.map(|d| starts_entry(grid, row, col, d));
            if !starts.contains(&true) {
                continue;
            }
            numbers[row * size + col] = Some(next_number);
            for (direction, _) in Direction::ALL.into_iter().zip(starts).filter(|&(_, s)| s) {
                entries.push(Entry {
                    start_row: row,
                    start_col: col,
                    direction,
                    length: run_length(grid, row, col, direction),
                    clue_number: next_number,
                });
            }
            next_number += 1;
        }
    }

    Segmentation { entries, numbers }
}
