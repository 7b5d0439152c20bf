use crate::error::Result;
use crate::info_log;
use std::fs;
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

const DATA_DIR_NAME: &str = "boggle-solver";
const WORDLIST_FILE_NAME: &str = "wordlist.txt";

/// Parses a word list from text. A JSON array of strings is accepted when the
/// content starts with `[`; anything else is read as one word per line.
/// Case is preserved; blank lines are skipped.
pub fn load_wordlist_from_str(data: &str) -> Result<Vec<String>> {
    if data.trim_start().starts_with('[') {
        let words: Vec<String> = serde_json::from_str(data)?;
        return Ok(words);
    }
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = fs::read_to_string(path.as_ref())?;
    let words = load_wordlist_from_str(&data)?;
    info_log!(
        "Loaded {} words from {}",
        words.len(),
        path.as_ref().display()
    );
    Ok(words)
}

#[must_use]
pub fn embedded_wordlist() -> Vec<String> {
    EMBEDDED_WORDLIST
        .lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// `<data_dir>/boggle-solver/wordlist.txt`, if the platform has a data directory.
#[must_use]
pub fn get_default_wordlist_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(WORDLIST_FILE_NAME))
}

/// Picks the word list: an explicit path, then the per-user data file if present,
/// then the embedded list.
pub fn resolve_wordlist(explicit: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = explicit {
        return load_wordlist_from_file(path);
    }
    if let Some(path) = get_default_wordlist_path()
        && path.is_file()
    {
        return load_wordlist_from_file(&path);
    }
    info_log!("Using embedded word list");
    Ok(embedded_wordlist())
}
