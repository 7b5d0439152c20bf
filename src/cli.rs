use crate::error::Result;
use crate::grid::Grid;
use crate::report::GameReport;
use crate::session::{SessionInterface, UserAction};
use clap::Parser;
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;

/// Boggle Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word list (one word per line, or a JSON array of strings)
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<PathBuf>,

    /// Grid to solve, rows separated by '/', cells by spaces or commas (e.g. "T W/Qu A")
    #[arg(short = 'g', long = "grid", conflicts_with = "grid_file")]
    pub grid: Option<String>,

    /// File holding the grid, one row per line
    #[arg(long = "grid-file")]
    pub grid_file: Option<PathBuf>,

    /// Print the game report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The grid given on the command line, if any. `None` means run interactively.
    pub fn load_grid(&self) -> Result<Option<Grid>> {
        if let Some(text) = &self.grid {
            return text.parse().map(Some);
        }
        if let Some(path) = &self.grid_file {
            let text = fs::read_to_string(path)?;
            return text.parse().map(Some);
        }
        Ok(None)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GridInput {
    Valid(Grid),
    Invalid,
    Exit,
}

/// Reads grid rows until a blank line or end of input.
/// `exit` on the first line quits; end of input with no rows also quits.
pub fn read_grid<R: BufRead>(reader: &mut R) -> GridInput {
    println!("\nEnter grid rows, cells separated by spaces (blank line to solve, 'exit' to quit):");
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut input = String::new();
        let read = match reader.read_line(&mut input) {
            Ok(n) => n,
            Err(e) => {
                println!("Failed to read input: {e}");
                return GridInput::Exit;
            }
        };
        let line = input.trim();

        if read == 0 || line.is_empty() {
            if lines.is_empty() {
                return if read == 0 {
                    GridInput::Exit
                } else {
                    GridInput::Invalid
                };
            }
            break;
        }
        if lines.is_empty() && line.eq_ignore_ascii_case("exit") {
            return GridInput::Exit;
        }
        lines.push(line.to_string());
    }

    match lines.join("\n").parse::<Grid>() {
        Ok(grid) => GridInput::Valid(grid),
        Err(e) => {
            println!("Invalid grid: {e}");
            GridInput::Invalid
        }
    }
}

pub fn display_session_start(word_count: usize) {
    println!("Loaded {word_count} words.");
}

pub fn display_report(report: &GameReport, json: bool) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the SessionInterface trait
pub struct CliInterface<R: BufRead> {
    reader: R,
    json: bool,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R, json: bool) -> Self {
        Self { reader, json }
    }
}

impl<R: BufRead> SessionInterface for CliInterface<R> {
    fn display_session_start(&mut self, word_count: usize) {
        display_session_start(word_count);
    }

    fn read_grid(&mut self) -> Option<UserAction> {
        match read_grid(&mut self.reader) {
            GridInput::Valid(grid) => Some(UserAction::Solve(grid)),
            GridInput::Exit => Some(UserAction::Exit),
            GridInput::Invalid => None,
        }
    }

    fn display_report(&mut self, report: &GameReport) {
        if let Err(e) = display_report(report, self.json) {
            eprintln!("Failed to print report: {e}");
        }
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoggleError;
    use std::io::Cursor;

    fn cli(grid: Option<&str>, grid_file: Option<PathBuf>) -> Cli {
        Cli {
            wordlist_path: None,
            grid: grid.map(str::to_string),
            grid_file,
            json: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from([
            "boggle-solver",
            "-i",
            "words.json",
            "-g",
            "T W/Qu A",
            "--json",
            "-vv",
        ]);
        assert_eq!(cli.wordlist_path, Some(PathBuf::from("words.json")));
        assert_eq!(cli.grid.as_deref(), Some("T W/Qu A"));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_args_defaults() {
        let cli = Cli::parse_from(["boggle-solver"]);
        assert_eq!(cli.wordlist_path, None);
        assert_eq!(cli.grid, None);
        assert_eq!(cli.grid_file, None);
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_grid_and_grid_file_conflict() {
        let result = Cli::try_parse_from(["boggle-solver", "-g", "A", "--grid-file", "g.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_grid_inline() {
        let grid = cli(Some("T W/Qu A"), None).load_grid().unwrap().unwrap();
        assert_eq!(grid.token(1, 0), Some("Qu"));
    }

    #[test]
    fn test_load_grid_ragged() {
        let result = cli(Some("T W/Qu"), None).load_grid();
        assert!(matches!(result, Err(BoggleError::RaggedGrid { .. })));
    }

    #[test]
    fn test_load_grid_from_file() {
        let path = std::env::temp_dir().join("boggle_cli_grid_test.txt");
        std::fs::write(&path, "O N\nE X\n").unwrap();
        let grid = cli(None, Some(path.clone())).load_grid().unwrap().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.token(1, 0), Some("E"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_grid_none() {
        assert!(cli(None, None).load_grid().unwrap().is_none());
    }

    #[test]
    fn test_read_grid_valid() {
        let mut reader = Cursor::new("T W\nE N\n\n");
        match read_grid(&mut reader) {
            GridInput::Valid(grid) => {
                assert_eq!(grid.rows(), 2);
                assert_eq!(grid.token(0, 1), Some("W"));
            }
            _ => panic!("Expected Valid grid"),
        }
    }

    #[test]
    fn test_read_grid_until_eof() {
        let mut reader = Cursor::new("T W\nE N");
        assert!(matches!(read_grid(&mut reader), GridInput::Valid(_)));
    }

    #[test]
    fn test_read_grid_exit() {
        let mut reader = Cursor::new("EXIT\n");
        assert!(matches!(read_grid(&mut reader), GridInput::Exit));
    }

    #[test]
    fn test_read_grid_eof() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_grid(&mut reader), GridInput::Exit));
    }

    #[test]
    fn test_read_grid_blank_line_is_invalid() {
        let mut reader = Cursor::new("\n");
        assert!(matches!(read_grid(&mut reader), GridInput::Invalid));
    }

    #[test]
    fn test_read_grid_ragged_is_invalid() {
        let mut reader = Cursor::new("A B C\nD E\n\n");
        assert!(matches!(read_grid(&mut reader), GridInput::Invalid));
    }

    #[test]
    fn test_cli_interface_read_grid() {
        let mut interface = CliInterface::new(Cursor::new("N E T\n\nexit\n"), false);
        assert!(matches!(interface.read_grid(), Some(UserAction::Solve(_))));
        assert_eq!(interface.read_grid(), Some(UserAction::Exit));
    }
}
