use crate::debug_log;
use std::collections::HashSet;

/// Lowercased word set plus every prefix of every word, used to prune the grid search.
///
/// A prefix entry does not imply a word entry: for `["quartz"]`, `"quar"` is a prefix
/// but not a word.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl DictionaryIndex {
    /// Builds the index from words of any case. Duplicates collapse and empty
    /// strings contribute nothing that the search can ever reach.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for word in words {
            let word = word.as_ref().to_lowercase();
            // char_indices keeps prefix cuts on UTF-8 boundaries
            for (i, c) in word.char_indices() {
                index.prefixes.insert(word[..i + c.len_utf8()].to_string());
            }
            index.words.insert(word);
        }
        debug_log!(
            "DictionaryIndex::new() - {} words, {} prefixes",
            index.words.len(),
            index.prefixes.len()
        );
        index
    }

    /// Exact membership. `s` must already be lowercase.
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.words.contains(s)
    }

    /// Whether some word starts with `s`. `false` means the search branch is dead.
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.prefixes.contains(s)
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
