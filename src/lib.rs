//! Deterministic mapping from ordered pairs of playing cards to the 2048
//! entries of a mnemonic wordlist, so a seed phrase can be drawn by hand from
//! a shuffled deck.

pub mod blanks;
pub mod cards;
pub mod cli;
pub mod display;
pub mod error;
pub mod sim;
pub mod tuples;
pub mod word_table;
pub mod wordlist;

pub use blanks::{select_blanks, SkipSet, BLANK_COUNT, WORD_COUNT};
pub use cards::{Card, Rank, Suit, CARDS, DECK_SIZE};
pub use error::{SeedError, SeedResult};
pub use tuples::{Tuple, TUPLE_COUNT};
pub use word_table::{word_table, WordTable};
pub use wordlist::Wordlist;
