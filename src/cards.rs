use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{SeedError, SeedResult};

pub const SUIT_COUNT: usize = 4;
pub const RANK_COUNT: usize = 13;
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT;

/// Single-character rank labels in canonical order; ten is written `X`.
pub const RANKS_STR: &str = "A23456789XJQK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn from_str(s: &str) -> SeedResult<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" | "1" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" | "X" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            _ => Err(SeedError::InvalidRank(s.to_string())),
        }
    }

    /// Printed label, as on the card face.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    /// One-column label used by the presence grid.
    pub fn to_char(self) -> char {
        RANKS_STR.as_bytes()[self.position()] as char
    }

    /// Position within a suit, Ace low.
    pub fn position(self) -> usize {
        self as usize
    }

    /// Absolute rank distance.
    pub fn distance(self, other: Rank) -> usize {
        self.position().abs_diff(other.position())
    }
}

pub const ALL_RANKS: [Rank; RANK_COUNT] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades = 0,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_str(s: &str) -> SeedResult<Suit> {
        match s.to_lowercase().as_str() {
            "s" | "\u{2660}" | "\u{2664}" => Ok(Suit::Spades),
            "h" | "\u{2661}" | "\u{2665}" => Ok(Suit::Hearts),
            "d" | "\u{2662}" | "\u{2666}" => Ok(Suit::Diamonds),
            "c" | "\u{2663}" | "\u{2667}" => Ok(Suit::Clubs),
            _ => Err(SeedError::InvalidSuit(s.to_string())),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Suit symbol as printed in the lookup sheet: solid spades and clubs,
    /// outlined hearts and diamonds.
    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '\u{2660}',
            Suit::Hearts => '\u{2661}',
            Suit::Diamonds => '\u{2662}',
            Suit::Clubs => '\u{2663}',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

pub const ALL_SUITS: [Suit; SUIT_COUNT] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// A card and its position in canonical deck order.
///
/// Cards are grouped by suit (spades, hearts, diamonds, clubs) and ordered
/// Ace to King within a suit, so `index = suit * 13 + rank`. Adding 1 to an
/// index gives the next rank of the same suit; adding 13 gives the same rank
/// in the next suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub index: u8,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        let index = suit.position() * RANK_COUNT + rank.position();
        Card {
            index: index as u8,
            suit,
            rank,
        }
    }

    /// Panics if `index >= 52`; use [`Card::try_from_index`] for untrusted input.
    pub fn from_index(index: usize) -> Card {
        Card::new(ALL_SUITS[index / RANK_COUNT], ALL_RANKS[index % RANK_COUNT])
    }

    pub fn try_from_index(index: usize) -> SeedResult<Card> {
        if index >= DECK_SIZE {
            return Err(SeedError::CardIndexOutOfRange(index));
        }
        Ok(Card::from_index(index))
    }

    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub fn is_suited_with(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.to_char())
    }
}

/// The 52-card deck in canonical order.
pub static CARDS: Lazy<[Card; DECK_SIZE]> = Lazy::new(|| std::array::from_fn(Card::from_index));

/// Panics if `index >= 52`.
pub fn card(index: usize) -> &'static Card {
    &CARDS[index]
}

/// Cards of one suit, Ace to King.
pub fn suit_cards(suit: Suit) -> &'static [Card] {
    let start = suit.position() * RANK_COUNT;
    &CARDS[start..start + RANK_COUNT]
}

/// Parses notation such as `As`, `10h`, `XD`, `Q♢` or `k♣`.
pub fn parse_card(notation: &str) -> SeedResult<Card> {
    let notation = notation.trim();
    let mut chars = notation.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| SeedError::InvalidCardNotation(notation.to_string()))?;
    let rank_str = chars.as_str();
    if rank_str.is_empty() {
        return Err(SeedError::InvalidCardNotation(notation.to_string()));
    }
    let rank = Rank::from_str(rank_str)?;
    let suit = Suit::from_str(&suit_char.to_string())?;
    Ok(Card::new(suit, rank))
}
