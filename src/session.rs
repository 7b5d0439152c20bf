use crate::dictionary::DictionaryIndex;
use crate::grid::Grid;
use crate::report::GameReport;
use crate::solver::BoggleSolver;
use crate::{debug_log, info_log};

/// What the user asked for at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Solve(Grid),
    Exit,
}

/// Front end for the interactive loop.
/// `read_grid` returns `None` for input that should simply be asked for again.
pub trait SessionInterface {
    fn display_session_start(&mut self, word_count: usize);
    fn read_grid(&mut self) -> Option<UserAction>;
    fn display_report(&mut self, report: &GameReport);
    fn display_exit_message(&mut self);
}

/// Solves one grid against an already built index and hands the index back.
pub fn solve_grid(grid: Grid, dictionary: DictionaryIndex) -> (GameReport, DictionaryIndex) {
    let solver = BoggleSolver::with_dictionary(grid, dictionary);
    let found_words = solver.find_words();
    let (grid, dictionary) = solver.into_parts();
    (GameReport::new(grid, found_words), dictionary)
}

/// Reads grids until the user exits, solving each against `words`.
/// The dictionary index is built once for the whole session.
/// Returns the number of grids solved.
pub fn session_loop<I: SessionInterface>(words: &[String], interface: &mut I) -> usize {
    let mut dictionary = DictionaryIndex::new(words);
    interface.display_session_start(dictionary.word_count());

    let mut solved = 0;
    loop {
        let grid = match interface.read_grid() {
            Some(UserAction::Exit) => {
                interface.display_exit_message();
                break;
            }
            Some(UserAction::Solve(grid)) => grid,
            None => continue,
        };

        debug_log!("session_loop() - solving {}x{} grid", grid.rows(), grid.cols());
        let (report, index) = solve_grid(grid, dictionary);
        dictionary = index;
        interface.display_report(&report);
        solved += 1;
    }

    info_log!("session_loop() - solved {} grids", solved);
    solved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        reports: Vec<GameReport>,
        started_with: Option<usize>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                reports: Vec::new(),
                started_with: None,
                exited: false,
            }
        }
    }

    impl SessionInterface for ScriptedInterface {
        fn display_session_start(&mut self, word_count: usize) {
            self.started_with = Some(word_count);
        }

        fn read_grid(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_report(&mut self, report: &GameReport) {
            self.reports.push(report.clone());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_solve_grid_returns_index() {
        let grid: Grid = "N E T".parse().unwrap();
        let index = DictionaryIndex::new(["net", "ten"]);
        let (report, index) = solve_grid(grid, index);
        assert_eq!(report.found_words, vec!["net", "ten"]);
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn test_session_immediate_exit() {
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        let solved = session_loop(&words(&["net"]), &mut interface);
        assert_eq!(solved, 0);
        assert!(interface.exited);
        assert_eq!(interface.started_with, Some(1));
    }

    #[test]
    fn test_session_solves_several_grids() {
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Solve("N E T".parse().unwrap())),
            None,
            Some(UserAction::Solve("W E T".parse().unwrap())),
            Some(UserAction::Exit),
        ]);
        let solved = session_loop(&words(&["NET", "ten", "wet"]), &mut interface);
        assert_eq!(solved, 2);
        assert_eq!(interface.reports[0].found_words, vec!["net", "ten"]);
        assert_eq!(interface.reports[1].found_words, vec!["wet"]);
        assert!(interface.exited);
    }

    #[test]
    fn test_session_empty_grid() {
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Solve(
            Grid::new(Vec::<Vec<String>>::new()).unwrap(),
        ))]);
        let solved = session_loop(&words(&["net"]), &mut interface);
        assert_eq!(solved, 1);
        assert!(interface.reports[0].found_words.is_empty());
    }
}
