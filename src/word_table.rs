use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::blanks::{select_blanks, SkipSet, BLANK_COUNT, WORD_COUNT};
use crate::cards::{suit_cards, Card, ALL_SUITS, DECK_SIZE, SUIT_COUNT};
use crate::error::{SeedError, SeedResult};
use crate::tuples::{tuple_index, tuples, Tuple, TUPLE_COUNT};
use crate::wordlist::Wordlist;

/// Word index (0..2048) for every tuple, or `None` for blanks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTable {
    entries: Vec<Option<u16>>,
}

/// One exported row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub tuple: usize,
    pub first: String,
    pub second: String,
    pub word_index: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

static WORD_TABLE: Lazy<WordTable> = Lazy::new(WordTable::build);

/// The process-wide table, built on first use.
pub fn word_table() -> &'static WordTable {
    &WORD_TABLE
}

impl WordTable {
    /// Builds the table from the blank sweep.
    ///
    /// # Panics
    ///
    /// Panics if the sweep leaves anything other than exactly 2048 word
    /// tuples. Deck size and word count are constants, so this can only
    /// happen if one of them is changed.
    pub fn build() -> WordTable {
        let table = WordTable::from_skip_set(&select_blanks());
        assert_eq!(
            table.word_count(),
            WORD_COUNT,
            "blank sweep left {} word tuples, expected {}",
            table.word_count(),
            WORD_COUNT
        );
        debug!("built word table: {} words, {} blanks", table.word_count(), table.blank_count());
        table
    }

    /// Walks tuples in index order, numbering every tuple not in `skip`.
    pub fn from_skip_set(skip: &SkipSet) -> WordTable {
        let mut next: u16 = 0;
        let entries = tuples()
            .map(|tuple| {
                if skip.contains(tuple.index()) {
                    None
                } else {
                    let word_index = next;
                    next += 1;
                    Some(word_index)
                }
            })
            .collect();
        WordTable { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn blank_count(&self) -> usize {
        self.entries.len() - self.word_count()
    }

    pub fn word_index(&self, tuple: usize) -> SeedResult<Option<u16>> {
        self.entries
            .get(tuple)
            .copied()
            .ok_or(SeedError::TupleIndexOutOfRange(tuple))
    }

    pub fn lookup(&self, first: usize, second: usize) -> SeedResult<Option<u16>> {
        for index in [first, second] {
            if index >= DECK_SIZE {
                return Err(SeedError::CardIndexOutOfRange(index));
            }
        }
        self.word_index(tuple_index(first, second))
    }

    pub fn word_index_of(&self, first: &Card, second: &Card) -> Option<u16> {
        self.entries[tuple_index(first.index(), second.index())]
    }

    pub fn is_blank(&self, tuple: &Tuple) -> bool {
        self.word_index_of(&tuple.first, &tuple.second).is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tuple, Option<u16>)> + '_ {
        tuples().zip(self.entries.iter().copied())
    }

    /// Word-bearing suited tuples, per suit.
    pub fn suited_words_by_suit(&self) -> [usize; SUIT_COUNT] {
        let mut counts = [0; SUIT_COUNT];
        for (tuple, word) in self.iter() {
            if tuple.is_suited() && word.is_some() {
                counts[tuple.first.suit.position()] += 1;
            }
        }
        counts
    }

    pub fn entries(&self, wordlist: Option<&Wordlist>) -> Vec<TableEntry> {
        self.iter()
            .map(|(tuple, word_index)| TableEntry {
                tuple: tuple.index(),
                first: tuple.first.pretty(),
                second: tuple.second.pretty(),
                word_index,
                word: word_index
                    .zip(wordlist)
                    .map(|(i, list)| list.get(i).to_string()),
            })
            .collect()
    }

    /// Exhaustively checks the structural properties of the table.
    pub fn check_invariants(&self) -> SeedResult<()> {
        if self.entries.len() != TUPLE_COUNT {
            return Err(violation(format!(
                "table has {} entries, expected {}",
                self.entries.len(),
                TUPLE_COUNT
            )));
        }
        if self.blank_count() != BLANK_COUNT {
            return Err(violation(format!(
                "table has {} blanks, expected {}",
                self.blank_count(),
                BLANK_COUNT
            )));
        }

        let mut expected: usize = 0;
        for (tuple, word) in self.iter() {
            if let Some(word_index) = word {
                if word_index as usize != expected {
                    return Err(violation(format!(
                        "tuple {} has word {}, expected {}",
                        tuple_label(&tuple),
                        word_index,
                        expected
                    )));
                }
                expected += 1;
            }

            if tuple.is_same_card() && word.is_some() {
                return Err(violation(format!("same-card tuple {} yields a word", tuple_label(&tuple))));
            }
            if !tuple.is_suited() && word.is_none() {
                return Err(violation(format!("unsuited tuple {} is blank", tuple_label(&tuple))));
            }
            if self.is_blank(&tuple) != self.is_blank(&tuple.reversed()) {
                return Err(violation(format!(
                    "tuple {} and its reverse disagree on blankness",
                    tuple_label(&tuple)
                )));
            }
        }
        if expected != WORD_COUNT {
            return Err(violation(format!("assigned {} words, expected {}", expected, WORD_COUNT)));
        }

        for suit in ALL_SUITS {
            for first in suit_cards(suit) {
                self.check_contiguous_blanks(first)?;
            }
        }
        Ok(())
    }

    fn check_contiguous_blanks(&self, first: &Card) -> SeedResult<()> {
        let mut blank_positions = Vec::new();
        let mut farthest_blank = 0;
        let mut nearest_word = usize::MAX;
        for second in suit_cards(first.suit) {
            let distance = first.rank.distance(second.rank);
            if self.word_index_of(first, second).is_some() {
                nearest_word = nearest_word.min(distance);
            } else {
                blank_positions.push(second.rank.position());
                farthest_blank = farthest_blank.max(distance);
            }
        }

        // Ties are allowed where the sweep stopped partway through a distance.
        if farthest_blank > nearest_word {
            return Err(violation(format!(
                "{} has a blank at rank distance {} but a word at distance {}",
                first.pretty(),
                farthest_blank,
                nearest_word
            )));
        }

        let span = match (blank_positions.first(), blank_positions.last()) {
            (Some(lo), Some(hi)) => hi - lo + 1,
            _ => 0,
        };
        if span != blank_positions.len() {
            return Err(violation(format!("blanks for {} are not a contiguous run", first.pretty())));
        }
        Ok(())
    }
}

impl Default for WordTable {
    fn default() -> Self {
        WordTable::build()
    }
}

fn tuple_label(tuple: &Tuple) -> String {
    format!("{}:{}", tuple.first.pretty(), tuple.second.pretty())
}

fn violation(msg: String) -> SeedError {
    SeedError::InvariantViolation(msg)
}
