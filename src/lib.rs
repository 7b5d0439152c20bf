// Library interface for boggle-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod grid;
pub mod logging;
pub mod report;
pub mod session;
pub mod solver;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use dictionary::DictionaryIndex;
pub use error::{BoggleError, Result};
pub use grid::{Grid, QU_TILE};
pub use report::GameReport;
pub use session::{SessionInterface, UserAction, session_loop, solve_grid};
pub use solver::{BoggleSolver, MIN_WORD_LENGTH};
pub use wordlist::{load_wordlist_from_file, load_wordlist_from_str, resolve_wordlist};
