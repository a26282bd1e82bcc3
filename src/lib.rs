// Library API shared by the CLI, the wasm build and the tests
pub mod errors;
pub mod fill;
pub mod grid;
pub mod grid_char;
pub mod log;
pub mod pattern;
pub mod segmenter;
pub mod snapshot;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use errors::{GridError, GridResult};
pub use grid::{Cell, Direction, Grid, LetterEdit};
pub use pattern::{Pattern, PatternSymbol};
pub use segmenter::{Entry, Segmentation};
pub use snapshot::{CellSnapshot, GridSnapshot};
pub use word_list::WordList;
