use itertools::iproduct;

use crate::cards::{card, Card, DECK_SIZE};
use crate::error::{SeedError, SeedResult};

pub const TUPLE_COUNT: usize = DECK_SIZE * DECK_SIZE;

/// An ordered pair of cards. `(A, B)` and `(B, A)` are distinct tuples and
/// `(A, A)` is a valid (always blank) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tuple {
    pub first: Card,
    pub second: Card,
}

impl Tuple {
    pub fn new(first: Card, second: Card) -> Tuple {
        Tuple { first, second }
    }

    /// Panics if `index >= 2704`.
    pub fn from_index(index: usize) -> Tuple {
        Tuple::new(*card(index / DECK_SIZE), *card(index % DECK_SIZE))
    }

    pub fn try_from_index(index: usize) -> SeedResult<Tuple> {
        if index >= TUPLE_COUNT {
            return Err(SeedError::TupleIndexOutOfRange(index));
        }
        Ok(Tuple::from_index(index))
    }

    pub fn index(&self) -> usize {
        tuple_index(self.first.index(), self.second.index())
    }

    pub fn reversed(&self) -> Tuple {
        Tuple::new(self.second, self.first)
    }

    pub fn is_same_card(&self) -> bool {
        self.first == self.second
    }

    pub fn is_suited(&self) -> bool {
        self.first.is_suited_with(&self.second)
    }

    /// Rank distance between the two cards, only defined for suited tuples.
    pub fn rank_distance(&self) -> Option<usize> {
        self.is_suited()
            .then(|| self.first.rank.distance(self.second.rank))
    }
}

pub fn tuple_index(first: usize, second: usize) -> usize {
    first * DECK_SIZE + second
}

/// All 2704 tuples, row-major over (first, second). Word indices are handed
/// out in exactly this order.
pub fn tuples() -> impl Iterator<Item = Tuple> {
    iproduct!(0..DECK_SIZE, 0..DECK_SIZE).map(|(first, second)| Tuple::new(*card(first), *card(second)))
}
