use std::fmt::Debug;

use super::Card;

/// This struct is a bitset for cards
/// Each card is represented by a bit in a 64 bit integer
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use rs_poker_equity::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// This does what it says on the tin it insertes a card into the bitset
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// cards.insert(Card::new(Value::Six, Suit::Club));
    /// cards.insert(Card::new(Value::King, Suit::Club));
    /// cards.insert(Card::new(Value::Ace, Suit::Club));
    /// assert_eq!(3, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) {
        self.cards |= 1 << u8::from(card);
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(*self).finish()
    }
}

/// Iterates the cards in a bitset from the lowest index up.
pub struct CardBitSetIter(u64);

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let idx = self.0.trailing_zeros();
        self.0 &= !(1 << idx);
        Some(Card::from(idx as u8))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_insert_contains() {
        let mut cards = CardBitSet::new();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(!cards.contains(c));

        cards.insert(c);
        assert!(cards.contains(c));
        assert_eq!(1, cards.count());

        cards.insert(c);
        assert_eq!(1, cards.count());
        assert!(!cards.contains(Card::new(Value::Ace, Suit::Spade)));
    }

    #[test]
    fn test_iter_full() {
        let cards: CardBitSet = (0..52).map(Card::from).collect();
        let all: Vec<Card> = cards.into_iter().collect();
        assert_eq!(52, all.len());
        // Lowest index first
        assert_eq!(Card::new(Value::Two, Suit::Spade), all[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), all[51]);
    }
}
