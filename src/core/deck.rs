use std::slice::Iter;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, EquityError, Suit, Value};

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 52;

/// Deck struct that shrinks as cards are dealt from it.
///
/// A deck starts with every one of the 52 cards exactly once and never
/// grows. Cards leave the deck either because a known card was removed
/// (hero hole cards) or because random cards were drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the default 52 card deck
    ///
    /// ```
    /// use rs_poker_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card { value: v, suit: s });
            }
        }
        Self { cards }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Remove a specific card from the deck.
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::new();
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    ///
    /// assert!(deck.remove(&ace).is_ok());
    /// assert!(!deck.contains(&ace));
    /// // It's gone now so removing again fails.
    /// assert!(deck.remove(&ace).is_err());
    /// ```
    pub fn remove(&mut self, c: &Card) -> Result<(), EquityError> {
        let idx = self
            .cards
            .iter()
            .position(|card| card == c)
            .ok_or(EquityError::UnknownCard(*c))?;
        self.cards.swap_remove(idx);
        Ok(())
    }

    /// Remove and return `num_cards` cards chosen uniformly at random
    /// from the cards still in the deck.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use rs_poker_equity::core::Deck;
    ///
    /// let mut rng = StdRng::seed_from_u64(420);
    /// let mut deck = Deck::new();
    /// let board = deck.draw(5, &mut rng).unwrap();
    ///
    /// assert_eq!(5, board.len());
    /// assert_eq!(47, deck.len());
    /// assert!(deck.draw(48, &mut rng).is_err());
    /// ```
    pub fn draw<R: Rng>(&mut self, num_cards: usize, rng: &mut R) -> Result<Vec<Card>, EquityError> {
        if num_cards > self.cards.len() {
            return Err(EquityError::InsufficientCards {
                requested: num_cards,
                remaining: self.cards.len(),
            });
        }
        let mut drawn = Vec::with_capacity(num_cards);
        for _ in 0..num_cards {
            let idx = rng.random_range(0..self.cards.len());
            drawn.push(self.cards.swap_remove(idx));
        }
        Ok(drawn)
    }

    /// Deal one random card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            let idx = rng.random_range(0..self.cards.len());
            Some(self.cards.swap_remove(idx))
        }
    }

    /// Randomly shuffle the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
