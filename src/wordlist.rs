use std::fs;
use std::path::Path;

use bip39::Language;

use crate::blanks::WORD_COUNT;
use crate::cards::Card;
use crate::error::{SeedError, SeedResult};
use crate::word_table::WordTable;

/// A 2048-entry mnemonic wordlist. Only the length is validated; the words
/// themselves are taken as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// The BIP39 English wordlist.
    pub fn english() -> Wordlist {
        Wordlist {
            words: Language::English
                .word_list()
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    pub fn from_words<I, S>(words: I) -> SeedResult<Wordlist>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != WORD_COUNT {
            return Err(SeedError::WordlistLength {
                expected: WORD_COUNT,
                got: words.len(),
            });
        }
        Ok(Wordlist { words })
    }

    /// Reads one word per line, ignoring blank lines.
    pub fn from_path(path: impl AsRef<Path>) -> SeedResult<Wordlist> {
        let text = fs::read_to_string(path)?;
        Wordlist::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word_index: u16) -> &str {
        &self.words[word_index as usize]
    }

    pub fn word_for(&self, table: &WordTable, first: &Card, second: &Card) -> Option<&str> {
        table.word_index_of(first, second).map(|i| self.get(i))
    }

    /// Length of the longest word, in characters.
    pub fn max_word_len(&self) -> usize {
        self.words
            .iter()
            .map(|w| w.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Wordlist::english()
    }
}
