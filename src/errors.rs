//! Error types for grid operations with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G009) for documentation lookup:
//!
//! - G001: `InvalidSize` (Grid dimension below 1)
//! - G002: `OutOfBounds` (Row/column outside the grid)
//! - G003: `BlockedCell` (Letter written to a blocked cell)
//! - G004: `InvalidEntry` (Zero-length entry, or word/entry length mismatch)
//! - G005: `InvalidLetter` (Character is not a letter or recognized placeholder)
//! - G006: `NoEntryStart` (Clue attached to a cell that starts no entry)
//! - G007: `InvalidLayout` (Malformed text layout)
//! - G008: `InvalidSnapshot` (Snapshot fails validation)
//! - G009: `Json` (Snapshot JSON could not be read or written)
//!
//! # Examples
//!
//! ```
//! use crossgrid::errors::GridError;
//! use crossgrid::grid::Grid;
//!
//! match Grid::create(0) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(_) => println!("Success"),
//! }
//! ```

use std::io;

use crate::grid::Direction;

/// Result alias used throughout the crate.
pub type GridResult<T> = Result<T, GridError>;

/// Custom error type for grid operations
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Invalid grid size {size} (must be at least 1)")]
    InvalidSize { size: usize },

    #[error("Cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Cell ({row}, {col}) is blocked and cannot hold a letter")]
    BlockedCell { row: usize, col: usize },

    #[error("Invalid entry: {reason}")]
    InvalidEntry { reason: String },

    #[error("Invalid letter {ch:?}")]
    InvalidLetter { ch: char },

    #[error("Cell ({row}, {col}) does not start an entry going {direction}")]
    NoEntryStart { row: usize, col: usize, direction: Direction },

    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },

    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GridError> for io::Error {
    fn from(ge: GridError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, ge.to_string())
    }
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::InvalidSize { .. } => "G001",
            GridError::OutOfBounds { .. } => "G002",
            GridError::BlockedCell { .. } => "G003",
            GridError::InvalidEntry { .. } => "G004",
            GridError::InvalidLetter { .. } => "G005",
            GridError::NoEntryStart { .. } => "G006",
            GridError::InvalidLayout { .. } => "G007",
            GridError::InvalidSnapshot { .. } => "G008",
            GridError::Json(_) => "G009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::InvalidSize { .. } => "Grid dimension below 1",
            GridError::OutOfBounds { .. } => "Row or column outside the grid",
            GridError::BlockedCell { .. } => "Letter written to a blocked cell",
            GridError::InvalidEntry { .. } => "Entry cannot be used for matching or filling",
            GridError::InvalidLetter { .. } => "Character is not a letter",
            GridError::NoEntryStart { .. } => "Clue attached to a cell that starts no entry",
            GridError::InvalidLayout { .. } => "Malformed text layout",
            GridError::InvalidSnapshot { .. } => "Snapshot fails validation",
            GridError::Json(_) => "Snapshot JSON could not be read or written",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::InvalidSize { .. } => "A grid is always square and must have at least one row and one column.",
            GridError::OutOfBounds { .. } => "Rows and columns are zero-based and must be smaller than the grid size.",
            GridError::BlockedCell { .. } => "Blocked cells never hold letters or clues. Unblock the cell first, or type '#' to toggle it.",
            GridError::InvalidEntry { .. } => "Entries passed to pattern matching must have a length of at least 1, and words written into an entry must have exactly the entry's length.",
            GridError::InvalidLetter { .. } => "Cells hold a single letter A-Z. '#' toggles a block and ' ', '.' or '?' clear the cell; anything else is rejected.",
            GridError::NoEntryStart { .. } => "Clue text lives on the numbered cell where an entry begins. The cell must be open and have a blocked cell or the grid edge before it in that direction.",
            GridError::InvalidLayout { .. } => "A text layout has one line per row, every line as long as the number of lines, using '#' for blocks, '.' for empty cells and letters for filled cells.",
            GridError::InvalidSnapshot { .. } => "A snapshot must describe every cell of a square grid exactly once, and its stored clue numbers must agree with its blocked layout.",
            GridError::Json(_) => "The snapshot text is not valid JSON, or does not have the expected shape.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::InvalidSize { .. } => Some("Example: use a size such as 5 or 15"),
            GridError::OutOfBounds { .. } => Some("Valid coordinates run from 0 to size - 1"),
            GridError::BlockedCell { .. } => Some("Toggle the block off before typing a letter"),
            GridError::InvalidLetter { .. } => Some("Use letters A-Z; '#' toggles a block"),
            GridError::NoEntryStart { .. } => Some("Attach clues to numbered cells only"),
            GridError::InvalidLayout { .. } => Some("Example layout for 3x3:\n..#\n...\n#.."),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
