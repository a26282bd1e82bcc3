use std::fmt::Write;

use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::errors::GridError;
use crate::fill::fill_first_candidate;
use crate::grid::{Direction, Grid};
use crate::pattern;
use crate::segmenter::Entry;
use crate::snapshot::CellSnapshot;
use crate::word_list::WordList;

/// Failure reported to JavaScript: a code to branch on, the message, and an
/// optional hint for the user.
#[derive(Debug, serde::Serialize)]
struct WasmError {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl WasmError {
    fn new(code: &'static str, message: String, help: &str) -> Self {
        Self { code, message, help: Some(help.to_string()) }
    }

    /// A `JsValue` failed to convert in either direction.
    fn conversion(what: &str, e: serde_wasm_bindgen::Error) -> Self {
        Self::new("WASM003", format!("could not convert {what}: {e}"), "Please report this as a bug")
    }
}

impl From<GridError> for WasmError {
    fn from(e: GridError) -> Self {
        Self {
            code: e.code(),
            message: e.to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

/// Thrown as a JS `Error` whose message starts with the code, e.g.
/// `G003: Cell (0, 4) is blocked ...`, followed by the hint on its own line.
impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut text = format!("{}: {}", e.code, e.message);
        if let Some(help) = &e.help {
            let _ = write!(text, "\n{help}");
        }
        js_sys::Error::new(&text).into()
    }
}

fn parse_direction(direction: &str) -> Result<Direction, WasmError> {
    match direction.to_ascii_lowercase().as_str() {
        "across" | "a" => Ok(Direction::Across),
        "down" | "d" => Ok(Direction::Down),
        _ => Err(WasmError::new(
            "WASM002",
            format!("unknown direction \"{direction}\""),
            "Use \"across\" or \"down\" (or \"A\" / \"D\")",
        )),
    }
}

fn words_from_js(word_list: JsValue) -> Result<Vec<String>, WasmError> {
    serde_wasm_bindgen::from_value(word_list).map_err(|e| {
        WasmError::new("WASM001", format!("word list must be an array of strings: {e}"), "e.g. ['CAT', 'DOG']")
    })
}

/// Set up the panic hook and logging. Call once after the module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    crate::log::init_logger(debug_enabled);
    // build the static word regex now instead of on the first word list
    let _ = &*crate::word_list::WORD_RE;
    log::info!("crossgrid {} ready", env!("CARGO_PKG_VERSION"));
}

/// A crossword grid owned by the page; one instance per "new puzzle".
#[wasm_bindgen]
pub struct CrosswordGrid {
    grid: Grid,
}

#[wasm_bindgen]
impl CrosswordGrid {
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<CrosswordGrid, JsValue> {
        let grid = Grid::create(size).map_err(WasmError::from)?;
        Ok(CrosswordGrid { grid })
    }

    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(json: &str) -> Result<CrosswordGrid, JsValue> {
        let grid = Grid::from_json(json).map_err(WasmError::from)?;
        Ok(CrosswordGrid { grid })
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        Ok(self.grid.to_json().map_err(WasmError::from)?)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Returns the new blocked state.
    #[wasm_bindgen(js_name = toggleBlocked)]
    pub fn toggle_blocked(&mut self, row: usize, col: usize) -> Result<bool, JsValue> {
        Ok(self.grid.toggle_blocked(row, col).map_err(WasmError::from)?)
    }

    /// Apply the value of a cell's text input: the first character, or clear
    /// the cell when the input is empty. `#` toggles the block.
    #[wasm_bindgen(js_name = setLetter)]
    pub fn set_letter(&mut self, row: usize, col: usize, value: &str) -> Result<(), JsValue> {
        let ch = value.chars().next().unwrap_or(crate::grid::EMPTY_CELL);
        self.grid.set_letter(row, col, ch).map_err(WasmError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setClue)]
    pub fn set_clue(&mut self, row: usize, col: usize, direction: &str, text: &str) -> Result<(), JsValue> {
        let direction = parse_direction(direction)?;
        self.grid.set_clue(row, col, direction, text).map_err(WasmError::from)?;
        Ok(())
    }

    /// Array of `{start_row, start_col, direction, length, clue_number}`.
    pub fn entries(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.grid.entries()).map_err(|e| WasmError::conversion("entry list", e))?)
    }

    /// Row-major array of cell records, as in the JSON export.
    pub fn cells(&self) -> Result<JsValue, JsValue> {
        let cells: Vec<CellSnapshot> = self.grid.cells().map(CellSnapshot::from).collect();
        Ok(to_value(&cells).map_err(|e| WasmError::conversion("cell list", e))?)
    }

    /// Pattern such as `C.T.` for the entry through `(row, col)`.
    pub fn pattern(&self, row: usize, col: usize, direction: &str) -> Result<String, JsValue> {
        let entry = self.entry_at(row, col, direction)?;
        let pattern = pattern::build_pattern(&entry, &self.grid).map_err(WasmError::from)?;
        Ok(pattern.to_string())
    }

    /// Words from `word_list` that fit the entry through `(row, col)`.
    pub fn candidates(&self, row: usize, col: usize, direction: &str, word_list: JsValue) -> Result<JsValue, JsValue> {
        let entry = self.entry_at(row, col, direction)?;
        let words = words_from_js(word_list)?;
        let found = pattern::candidates(&entry, &self.grid, &words).map_err(WasmError::from)?;
        Ok(to_value(&found).map_err(|e| WasmError::conversion("candidate list", e))?)
    }

    /// Write the first fitting word into the entry; returns it, or `undefined`.
    #[wasm_bindgen(js_name = fillFirstCandidate)]
    pub fn fill_first_candidate(
        &mut self,
        row: usize,
        col: usize,
        direction: &str,
        word_list: JsValue,
    ) -> Result<Option<String>, JsValue> {
        let entry = self.entry_at(row, col, direction)?;
        let words = words_from_js(word_list)?;
        Ok(fill_first_candidate(&mut self.grid, &entry, &words).map_err(WasmError::from)?)
    }

    /// Plain-text rendering (`#` blocks, `.` empty cells).
    pub fn render(&self) -> String {
        self.grid.to_string()
    }
}

impl CrosswordGrid {
    fn entry_at(&self, row: usize, col: usize, direction: &str) -> Result<Entry, WasmError> {
        let direction = parse_direction(direction)?;
        self.grid.entry_at(row, col, direction)?.ok_or_else(|| {
            WasmError::new("WASM004", format!("no {direction} entry through blocked cell ({row}, {col})"), "Pick an open cell")
        })
    }
}

/// Parse a newline-separated word list (`word` or `word;score` per line) and
/// return the words no longer than `max_len` as a JavaScript string array.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32, max_len: usize) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    Ok(to_value(&word_list.fitting(max_len)).map_err(|e| WasmError::conversion("word list", e))?)
}

/// Plain-text report for bug reports: build info, the error, the grid export
/// and the browser environment.
#[wasm_bindgen]
pub fn get_debug_info(grid_json: &str, error_message: &str, word_list_size: usize) -> String {
    let generated = js_sys::Date::new_0().to_iso_string().as_string();
    let mut environment = Vec::new();
    if let Some(window) = web_sys::window() {
        if let Ok(agent) = window.navigator().user_agent() {
            environment.push(format!("user agent: {agent}"));
        }
        if let Ok(href) = window.location().href() {
            environment.push(format!("page: {href}"));
        }
    }
    debug_report(generated.as_deref(), error_message, word_list_size, grid_json, &environment)
}

fn debug_report(
    generated: Option<&str>,
    error_message: &str,
    word_list_size: usize,
    grid_json: &str,
    environment: &[String],
) -> String {
    let mut report = String::new();
    // writes into a String cannot fail
    let _ = writeln!(report, "crossgrid {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(report, "generated: {}", generated.unwrap_or("unknown"));
    let _ = writeln!(report, "\n[error]\n{error_message}");
    let _ = writeln!(report, "\n[words]\n{word_list_size}");
    let _ = writeln!(report, "\n[grid]\n{}", grid_json.trim_end());
    let _ = writeln!(report, "\n[environment]");
    for line in environment {
        let _ = writeln!(report, "{line}");
    }
    report
}
