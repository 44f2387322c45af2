use log::debug;

use crate::cards::{DECK_SIZE, RANK_COUNT, SUIT_COUNT};
use crate::tuples::{tuple_index, TUPLE_COUNT};

/// Size of the mnemonic wordlist, i.e. the number of word-bearing tuples.
pub const WORD_COUNT: usize = 2048;

/// Number of tuples that yield no word.
pub const BLANK_COUNT: usize = TUPLE_COUNT - WORD_COUNT;

/// Tuple positions excluded from word assignment.
///
/// Backed by a flat mark per tuple so membership and iteration order never
/// depend on hashing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipSet {
    marks: Vec<bool>,
    len: usize,
}

impl SkipSet {
    pub fn new() -> SkipSet {
        SkipSet {
            marks: vec![false; TUPLE_COUNT],
            len: 0,
        }
    }

    /// Returns `true` if the position was not already present.
    ///
    /// Panics if `tuple >= 2704`.
    pub fn insert(&mut self, tuple: usize) -> bool {
        if self.marks[tuple] {
            return false;
        }
        self.marks[tuple] = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, tuple: usize) -> bool {
        self.marks.get(tuple).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Skipped positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter_map(|(i, &marked)| marked.then_some(i))
    }

    fn words_left(&self) -> usize {
        TUPLE_COUNT - self.len
    }
}

impl Default for SkipSet {
    fn default() -> Self {
        SkipSet::new()
    }
}

/// Selects the 656 blank tuples for the 2048-word list.
pub fn select_blanks() -> SkipSet {
    select_blanks_until(WORD_COUNT)
}

/// Runs the blank sweep until at most `target_words` tuples remain.
///
/// Same-card tuples are always blank. Suited pairs are then blanked in both
/// orientations at once, closest ranks first: for each rank distance, for
/// each starting rank, for each suit in deck order. The sweep stops right
/// after the pair that brings the word count down to the target, so the last
/// distance level is only partially consumed. Targets below 2028 cannot be
/// reached since unsuited tuples are never blanked; the sweep then ends with
/// every suited tuple blank.
pub fn select_blanks_until(target_words: usize) -> SkipSet {
    let mut skip = SkipSet::new();
    for card in 0..DECK_SIZE {
        skip.insert(tuple_index(card, card));
    }
    if skip.words_left() > target_words {
        sweep_suited_pairs(&mut skip, target_words);
    }
    debug!(
        "selected {} blanks, {} tuples left for words",
        skip.len(),
        skip.words_left()
    );
    skip
}

fn sweep_suited_pairs(skip: &mut SkipSet, target_words: usize) {
    for distance in 1..RANK_COUNT {
        for row_offset in 0..RANK_COUNT - distance {
            for suit in 0..SUIT_COUNT {
                let row = suit * RANK_COUNT + row_offset;
                let col = row + distance;
                skip.insert(tuple_index(row, col));
                skip.insert(tuple_index(col, row));
                if skip.words_left() <= target_words {
                    debug!(
                        "sweep stopped at distance {}, offset {}, suit {}",
                        distance, row_offset, suit
                    );
                    return;
                }
            }
        }
    }
}
