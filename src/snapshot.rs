//! Exporting and restoring the full grid state.
//!
//! A [`GridSnapshot`] records the size and, for every cell, its blocked flag,
//! letter, clue number and clue texts. Clue numbers are stored so that a
//! snapshot is readable on its own, but on restore they are recomputed from the
//! blocked layout and must agree with what was stored.

use serde::{Deserialize, Serialize};

use crate::errors::{GridError, GridResult};
use crate::grid::{Cell, CellParts, Direction, Grid};
use crate::grid_char::normalize_letter;
use crate::segmenter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clue_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub across_clue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_clue: Option<String>,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            row: cell.row(),
            col: cell.col(),
            blocked: cell.is_blocked(),
            letter: cell.letter(),
            clue_number: cell.clue_number(),
            across_clue: cell.across_clue().map(str::to_string),
            down_clue: cell.down_clue().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major.
    pub cells: Vec<CellSnapshot>,
}

fn invalid(reason: String) -> GridError {
    GridError::InvalidSnapshot { reason }
}

/// Stored clue text as `Grid::set_clue` would keep it: trimmed, blank is none.
fn clue_text(stored: Option<&str>) -> Option<String> {
    stored.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

impl Grid {
    /// Capture the full grid state.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: self.size(),
            cells: self.cells().map(CellSnapshot::from).collect(),
        }
    }

    /// Rebuild a grid from a snapshot.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidSize`] for size 0, [`GridError::InvalidSnapshot`]
    /// when cells are missing, misplaced or inconsistent with the layout.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> GridResult<Self> {
        let size = snapshot.size;
        if size < 1 {
            return Err(GridError::InvalidSize { size });
        }
        let cell_count = size
            .checked_mul(size)
            .ok_or_else(|| invalid(format!("size {size} is too large")))?;
        if snapshot.cells.len() != cell_count {
            return Err(invalid(format!(
                "expected {cell_count} cells for size {size}, found {}",
                snapshot.cells.len()
            )));
        }

        let mut cells = Vec::with_capacity(snapshot.cells.len());
        for (idx, cs) in snapshot.cells.iter().enumerate() {
            let (row, col) = (idx / size, idx % size);
            if (cs.row, cs.col) != (row, col) {
                return Err(invalid(format!(
                    "cell {idx} is labelled ({}, {}), expected ({row}, {col})",
                    cs.row, cs.col
                )));
            }
            if cs.blocked
                && (cs.letter.is_some() || cs.clue_number.is_some() || cs.across_clue.is_some() || cs.down_clue.is_some())
            {
                return Err(invalid(format!("blocked cell ({row}, {col}) carries a letter or clue")));
            }
            let letter = match cs.letter {
                Some(ch) => Some(
                    normalize_letter(ch)
                        .ok_or_else(|| invalid(format!("cell ({row}, {col}) has non-letter {ch:?}")))?,
                ),
                None => None,
            };
            cells.push(Cell::from(CellParts {
                row,
                col,
                blocked: cs.blocked,
                letter,
                across_clue: clue_text(cs.across_clue.as_deref()),
                down_clue: clue_text(cs.down_clue.as_deref()),
            }));
        }

        let grid = Grid::from_cells(size, cells);

        for (cell, cs) in grid.cells().zip(&snapshot.cells) {
            if cell.clue_number() != cs.clue_number {
                return Err(invalid(format!(
                    "cell ({}, {}) stores clue number {:?} but the layout gives {:?}",
                    cs.row,
                    cs.col,
                    cs.clue_number,
                    cell.clue_number()
                )));
            }
            for direction in Direction::ALL {
                let stored = match direction {
                    Direction::Across => cs.across_clue.as_deref(),
                    Direction::Down => cs.down_clue.as_deref(),
                };
                if clue_text(stored).is_some() && !segmenter::starts_entry(&grid, cs.row, cs.col, direction) {
                    return Err(invalid(format!(
                        "cell ({}, {}) has {direction} clue text but starts no {direction} entry",
                        cs.row, cs.col
                    )));
                }
            }
        }
        Ok(grid)
    }

    /// Serialize the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// [`GridError::Json`] if serialization fails.
    pub fn to_json(&self) -> GridResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Parse and restore a JSON snapshot.
    ///
    /// # Errors
    ///
    /// [`GridError::Json`] for malformed JSON, otherwise as [`Grid::from_snapshot`].
    pub fn from_json(json: &str) -> GridResult<Self> {
        let snapshot: GridSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(&snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        let mut grid: Grid = "CAT#\n...#\n#...\nDOG.".parse().unwrap();
        grid.set_clue(0, 0, Direction::Across, "Feline").unwrap();
        grid.set_clue(0, 0, Direction::Down, "First column").unwrap();
        grid.set_clue(3, 0, Direction::Across, "Canine").unwrap();
        grid
    }

    #[test]
    fn test_round_trip_snapshot() {
        let grid = sample_grid();
        let restored = Grid::from_snapshot(&grid.snapshot()).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn test_round_trip_json() {
        let grid = sample_grid();
        let json = grid.to_json().unwrap();
        assert!(json.contains("\"across_clue\": \"Feline\""));
        assert_eq!(Grid::from_json(&json).unwrap(), grid);
    }

    #[test]
    fn test_snapshot_size_zero() {
        let snapshot = GridSnapshot { size: 0, cells: vec![] };
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSize { size: 0 })));
    }

    #[test]
    fn test_snapshot_missing_cells() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells.pop();
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_snapshot_misplaced_cell() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells.swap(0, 1);
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_snapshot_blocked_cell_with_letter() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells[3].letter = Some('X');
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_snapshot_wrong_clue_number() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells[0].clue_number = Some(9);
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_snapshot_clue_on_non_start() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells[1].across_clue = Some("stray".to_string());
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
    }

    #[test]
    fn test_snapshot_lowercase_letter_normalized() {
        let mut snapshot = Grid::create(1).unwrap().snapshot();
        snapshot.cells[0].letter = Some('q');
        let grid = Grid::from_snapshot(&snapshot).unwrap();
        assert_eq!(grid.cell_at(0, 0).unwrap().letter(), Some('Q'));
    }

    #[test]
    fn test_snapshot_huge_size_rejected() {
        let snapshot = GridSnapshot { size: usize::MAX, cells: vec![] };
        assert!(matches!(Grid::from_snapshot(&snapshot), Err(GridError::InvalidSnapshot { .. })));
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            Grid::from_json(r#"{"size": 4294967296, "cells": []}"#),
            Err(GridError::InvalidSnapshot { .. })
        ));
    }

    #[test]
    fn test_snapshot_blank_clue_text_dropped() {
        let mut snapshot = sample_grid().snapshot();
        snapshot.cells[0].across_clue = Some("   ".to_string());
        snapshot.cells[0].down_clue = Some("  First column ".to_string());
        let grid = Grid::from_snapshot(&snapshot).unwrap();
        let cell = grid.cell_at(0, 0).unwrap();
        assert_eq!(cell.across_clue(), None);
        assert_eq!(cell.down_clue(), Some("First column"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Grid::from_json("{\"size\": 2"), Err(GridError::Json(_))));
    }
}
