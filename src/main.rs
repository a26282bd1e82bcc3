use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crossgrid::errors::GridError;
use crossgrid::fill::fill_first_candidate;
use crossgrid::grid::{Direction, Grid};
use crossgrid::pattern;
use crossgrid::word_list::WordList;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Crossword grid numbering and candidate lookup
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Size of a fresh, all-open grid (ignored with --layout or --snapshot)
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Text layout to start from: one line per row, '#' blocked, '.' empty, letters filled
    #[arg(short, long, conflicts_with = "snapshot")]
    layout: Option<PathBuf>,

    /// JSON snapshot to start from
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Toggle the block at ROW,COL (repeatable)
    #[arg(short, long = "block", value_parser = parse_coord)]
    blocks: Vec<(usize, usize)>,

    /// Type CH at ROW,COL (repeatable); '#' toggles a block
    #[arg(long = "letter", value_parser = parse_letter_edit)]
    letters: Vec<(usize, usize, char)>,

    /// Word list file (`word` or `word;score` per line)
    #[arg(short, long)]
    word_list: Option<PathBuf>,

    /// Minimum score for scored word-list lines
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,

    /// Entry to find candidates for, e.g. 1A or 4D
    #[arg(short, long, value_parser = parse_entry_label)]
    entry: Option<(u32, Direction)>,

    /// Write the entry's first candidate into the grid
    #[arg(long, requires = "entry")]
    fill: bool,

    /// Maximum number of candidates to print
    #[arg(short = 'n', long, default_value_t = 20)]
    limit: usize,

    /// Print the final grid as a JSON snapshot
    #[arg(long)]
    export: bool,
}

fn parse_usize(s: &str, what: &str) -> Result<usize, String> {
    s.trim().parse().map_err(|_| format!("invalid {what} \"{s}\""))
}

fn parse_coord(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s.split_once(',').ok_or_else(|| format!("expected ROW,COL, got \"{s}\""))?;
    Ok((parse_usize(row, "row")?, parse_usize(col, "column")?))
}

fn parse_letter_edit(s: &str) -> Result<(usize, usize, char), String> {
    let (coord, ch) = s.rsplit_once(',').ok_or_else(|| format!("expected ROW,COL,CH, got \"{s}\""))?;
    let (row, col) = parse_coord(coord)?;
    let mut chars = ch.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok((row, col, c)),
        _ => Err(format!("expected a single character, got \"{ch}\"")),
    }
}

/// Parse an entry label such as `12A` or `3d`.
fn parse_entry_label(s: &str) -> Result<(u32, Direction), String> {
    let s = s.trim();
    let direction = s
        .chars()
        .last()
        .and_then(Direction::from_letter)
        .ok_or_else(|| format!("entry \"{s}\" must end in A or D"))?;
    let number = s[..s.len() - 1]
        .parse()
        .map_err(|_| format!("entry \"{s}\" must start with a clue number"))?;
    Ok((number, direction))
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], printing any error (with code and help for grid
/// errors) before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSGRID_DEBUG").is_ok();
    crossgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(grid_err) = e.downcast_ref::<GridError>() {
            eprintln!("Error: {}", grid_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Build the grid from the CLI arguments, apply the edits, then print the grid,
/// its clue list and (optionally) candidates for one entry.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut grid = if let Some(path) = &cli.layout {
        std::fs::read_to_string(path)?.parse::<Grid>()?
    } else if let Some(path) = &cli.snapshot {
        Grid::from_json(&std::fs::read_to_string(path)?)?
    } else {
        Grid::create(cli.size)?
    };

    for &(row, col) in &cli.blocks {
        grid.toggle_blocked(row, col)?;
    }
    for &(row, col, ch) in &cli.letters {
        grid.set_letter(row, col, ch)?;
    }

    let word_list = match &cli.word_list {
        Some(path) => WordList::load_from_path(path, cli.min_score)?,
        None => WordList::default(),
    };
    log::info!("Loaded {} words", word_list.len());

    if let Some((number, direction)) = cli.entry {
        let entry = grid
            .entry_by_number(number, direction)
            .ok_or_else(|| format!("no entry {number}{}", direction.letter()))?;
        let words = word_list.as_refs();

        if cli.fill {
            match fill_first_candidate(&mut grid, &entry, &words)? {
                Some(word) => eprintln!("Filled {} with {word}", entry.label()),
                None => eprintln!("No candidate fits {}", entry.label()),
            }
        } else {
            let pattern = pattern::build_pattern(&entry, &grid)?;
            let found = pattern::candidates(&entry, &grid, &words)?;
            println!("{} {pattern}: {} candidates", entry.label(), found.len());
            for word in found.iter().take(cli.limit) {
                println!("  {word}");
            }
            println!();
        }
    }

    if cli.export {
        println!("{}", grid.to_json()?);
        return Ok(());
    }

    print!("{grid}");
    let segmentation = grid.segmentation();
    for (heading, entries) in [("Across", segmentation.across().collect::<Vec<_>>()), ("Down", segmentation.down().collect())] {
        println!("\n{heading}");
        for entry in entries {
            let letters: String = grid
                .letters(entry)?
                .into_iter()
                .map(|l| l.unwrap_or(crossgrid::grid::EMPTY_CELL))
                .collect();
            let cell = grid.cell_at(entry.start_row, entry.start_col)?;
            let clue = cell.clue(entry.direction).unwrap_or("");
            println!("{:>4}. {letters:<width$} {clue}", entry.clue_number, width = grid.size());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("2,3"), Ok((2, 3)));
        assert_eq!(parse_coord(" 0 , 1 "), Ok((0, 1)));
        assert!(parse_coord("2").is_err());
        assert!(parse_coord("a,1").is_err());
    }

    #[test]
    fn test_parse_letter_edit() {
        assert_eq!(parse_letter_edit("1,2,Q"), Ok((1, 2, 'Q')));
        assert_eq!(parse_letter_edit("0,0,#"), Ok((0, 0, '#')));
        assert!(parse_letter_edit("0,0,QQ").is_err());
        assert!(parse_letter_edit("0,0").is_err());
    }

    #[test]
    fn test_parse_entry_label() {
        assert_eq!(parse_entry_label("12A"), Ok((12, Direction::Across)));
        assert_eq!(parse_entry_label("3d"), Ok((3, Direction::Down)));
        assert!(parse_entry_label("A").is_err());
        assert!(parse_entry_label("7X").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
