//! Game record for one solved grid: a generated name, the board and the words found on it.

use crate::grid::Grid;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub grid: Grid,
    pub found_words: Vec<String>,
}

impl GameReport {
    /// Names the report after the grid size and the current local time.
    #[must_use]
    pub fn new(grid: Grid, found_words: Vec<String>) -> Self {
        Self::at(grid, found_words, Local::now())
    }

    #[must_use]
    pub fn at(grid: Grid, found_words: Vec<String>, created: DateTime<Local>) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        Self {
            name: format!("{rows}x{cols}Grid:{}", created.format("%Y-%m-%d %H:%M:%S")),
            rows,
            cols,
            grid,
            found_words,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.grid)?;
        writeln!(f, "Found {} words:", self.found_words.len())?;
        for word in &self.found_words {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}
