use crate::error::{BoggleError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Die face for the two-letter tile. Matched case-sensitively.
pub const QU_TILE: &str = "Qu";

/// A rectangular board of cell tokens. Each token is one die face and may hold
/// more than one letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Takes ownership of the rows. Every row must have the same length as row 0.
    pub fn new<R, T>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let cells: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        if let Some(first) = cells.first() {
            let expected = first.len();
            if let Some((row, found)) = cells
                .iter()
                .map(Vec::len)
                .enumerate()
                .find(|&(_, len)| len != expected)
            {
                return Err(BoggleError::RaggedGrid {
                    row,
                    expected,
                    found,
                });
            }
        }

        Ok(Self { cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    /// Raw token at `(row, col)`, or `None` when out of bounds.
    #[must_use]
    pub fn token(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// The letters a token contributes to a word: `"qu"` for the Qu tile,
    /// otherwise the token lowercased.
    #[must_use]
    pub fn fragment(token: &str) -> String {
        if token == QU_TILE {
            "qu".to_string()
        } else {
            token.to_lowercase()
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

/// Parses rows separated by newlines or `/`, tokens separated by whitespace or commas.
/// Blank rows are skipped.
///
/// ```
/// use boggle_solver::Grid;
/// let grid: Grid = "T W / Qu A".parse().unwrap();
/// assert_eq!(grid.token(1, 0), Some("Qu"));
/// ```
impl FromStr for Grid {
    type Err = BoggleError;

    fn from_str(s: &str) -> Result<Self> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        for line in s.split(['\n', '/']) {
            validate_row(line, rows.len())?;
            let row: Vec<String> = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect();
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::new(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|token| format!("{token:<3}")).collect();
            write!(f, "{}", line.join("").trim_end())?;
        }
        Ok(())
    }
}

// Doubled or trailing commas would otherwise silently drop a cell.
fn validate_row(line: &str, row: usize) -> Result<()> {
    let mut col = 0;
    for piece in line.split(',') {
        if piece.trim().is_empty() && line.contains(',') {
            return Err(BoggleError::EmptyToken { row, col });
        }
        col += piece.split_whitespace().count();
    }
    Ok(())
}
