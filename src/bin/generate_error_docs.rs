//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `GridError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use crossgrid::errors::GridError;
use crossgrid::grid::Direction;

/// One example of every `GridError` variant, in code order.
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::InvalidSize { size: 0 },
        GridError::OutOfBounds { row: 7, col: 2, size: 5 },
        GridError::BlockedCell { row: 0, col: 4 },
        GridError::InvalidEntry { reason: "word \"CATS\" has 4 letters but the entry has 3".to_string() },
        GridError::InvalidLetter { ch: '7' },
        GridError::NoEntryStart { row: 1, col: 1, direction: Direction::Down },
        GridError::InvalidLayout { reason: "row 2 has 4 cells, expected 5".to_string() },
        GridError::InvalidSnapshot { reason: "expected 25 cells for size 5, found 24".to_string() },
        // Json: produce a real serde_json error from truncated input
        GridError::Json(serde_json::from_str::<serde_json::Value>("{\"size\": 5").unwrap_err()),
    ]
}

fn render_docs() -> String {
    let mut out = String::new();

    // writing to a String never fails
    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**This document is generated from the source code. Do not edit it by hand.**\n");

    let _ = writeln!(out, "## Grid Errors\n");
    let _ = writeln!(out, "Errors returned by grid edits, entry lookups, layouts and snapshots.\n");

    for error in all_grid_error_variants() {
        let _ = writeln!(out, "### {}: {}\n", error.code(), error.description());
        let _ = writeln!(out, "**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            let _ = writeln!(out, "**How to fix:**\n```\n{help_text}\n```\n");
        }

        let _ = writeln!(out, "**Example error message:**\n```\n{error}\n```\n");
        let _ = writeln!(out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
        let _ = writeln!(out, "---\n");
    }

    let _ = writeln!(out, "## Error Display Formats\n");
    let _ = writeln!(out, "### Simple Format\n```\nError: <message>\n```\n");
    let _ = writeln!(out, "### Detailed Format (via `display_detailed()`)\n```\n<message> (<code>)\n<help text if available>\n```");

    out
}

fn main() {
    print!("{}", render_docs());
}
