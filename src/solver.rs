use crate::dictionary::DictionaryIndex;
use crate::grid::Grid;
use crate::{debug_log, info_log};
use std::collections::HashSet;

/// Shortest word that counts as a solution.
pub const MIN_WORD_LENGTH: usize = 3;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Finds every dictionary word traceable as a path of adjacent cells on a grid.
///
/// Adjacency is 8-directional and a cell may appear at most once per path.
/// The search is a depth-first walk from every cell, cut short as soon as the
/// letters collected so far are not the start of any dictionary word.
#[derive(Debug, Clone)]
pub struct BoggleSolver {
    grid: Grid,
    dictionary: DictionaryIndex,
}

/// Per-root traversal state. The mask is owned by one root search only.
struct Walk<'a> {
    solver: &'a BoggleSolver,
    fragments: &'a [String],
    visited: Vec<bool>,
    path: String,
    solutions: &'a mut HashSet<String>,
}

impl BoggleSolver {
    pub fn new<I, S>(grid: Grid, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = DictionaryIndex::new(words);
        debug_log!(
            "BoggleSolver::new() - {}x{} grid, {} dictionary words",
            grid.rows(),
            grid.cols(),
            dictionary.word_count()
        );
        Self { grid, dictionary }
    }

    /// Builds a solver around an index that has already been constructed.
    #[must_use]
    pub fn with_dictionary(grid: Grid, dictionary: DictionaryIndex) -> Self {
        Self { grid, dictionary }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dictionary
    }

    /// Gives back the grid and index so the index can serve the next grid.
    #[must_use]
    pub fn into_parts(self) -> (Grid, DictionaryIndex) {
        (self.grid, self.dictionary)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Every distinct word found on the grid, sorted ascending.
    ///
    /// Does not mutate the solver; repeated calls return the same result.
    #[must_use]
    pub fn find_words(&self) -> Vec<String> {
        let (rows, cols) = (self.rows(), self.cols());
        // lowercase each token once instead of on every visit
        let fragments: Vec<String> = self
            .grid
            .iter_rows()
            .flat_map(|row| row.iter().map(|token| Grid::fragment(token)))
            .collect();

        let mut solutions = HashSet::new();
        for r in 0..rows {
            for c in 0..cols {
                let mut walk = Walk {
                    solver: self,
                    fragments: &fragments,
                    visited: vec![false; rows * cols],
                    path: String::new(),
                    solutions: &mut solutions,
                };
                walk.visit(r as isize, c as isize);
            }
        }

        let mut words: Vec<String> = solutions.into_iter().collect();
        words.sort_unstable();
        info_log!(
            "find_words() - explored {} roots, found {} words",
            rows * cols,
            words.len()
        );
        words
    }
}

impl Walk<'_> {
    fn visit(&mut self, r: isize, c: isize) {
        let (rows, cols) = (self.solver.rows(), self.solver.cols());
        if r < 0 || c < 0 || r as usize >= rows || c as usize >= cols {
            return;
        }
        let idx = r as usize * cols + c as usize;
        if self.visited[idx] {
            return;
        }

        let restore = self.path.len();
        self.path.push_str(&self.fragments[idx]);

        if !self.solver.dictionary.is_prefix(&self.path) {
            self.path.truncate(restore);
            return;
        }

        self.visited[idx] = true;

        if self.path.chars().count() >= MIN_WORD_LENGTH
            && self.solver.dictionary.is_word(&self.path)
            && !self.solutions.contains(&self.path)
        {
            self.solutions.insert(self.path.clone());
        }

        for (dr, dc) in NEIGHBOR_OFFSETS {
            self.visit(r + dr, c + dc);
        }

        self.visited[idx] = false;
        self.path.truncate(restore);
    }
}
