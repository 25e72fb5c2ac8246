use super::{Card, CardBitSet, CardBitSetIter, EquityError, Suit, Value};

/// An unordered set of cards.
///
/// Used to hold hole cards parsed from notation and any collection of
/// cards that is going to be ranked.
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Hand(CardBitSet);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_equity::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_equity::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Add a card. Returns false if the card was already in the hand.
    pub fn insert(&mut self, c: Card) -> bool {
        let contains = self.contains(&c);
        self.0.insert(c);
        !contains
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    /// Parse a string of concatenated cards. Every card is a value char
    /// followed by a suit char, so "AsAd" is pocket aces.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_poker_equity::core::Hand;
    ///
    /// let hand = Hand::new_from_str("AsAd").unwrap();
    /// assert_eq!(2, hand.count());
    ///
    /// // The same card twice is rejected.
    /// assert!(Hand::new_from_str("AsAs").is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, EquityError> {
        let mut chars = hand_string.chars();
        let mut hand = Self::new();

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(EquityError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(EquityError::TooFewChars)
                .map(Suit::from_char)?
                .ok_or(EquityError::UnexpectedSuitChar)?;

            let c = Card { value: v, suit: s };

            if !hand.insert(c) {
                return Err(EquityError::DuplicateCardInHand(c));
            }
        }

        Ok(hand)
    }

    /// The two cards of a hand with exactly two cards in it.
    ///
    /// ```
    /// use rs_poker_equity::core::Hand;
    ///
    /// let hole = Hand::new_from_str("AsKs").unwrap().hole_cards().unwrap();
    /// assert_eq!(2, hole.len());
    /// ```
    pub fn hole_cards(&self) -> Result<[Card; 2], EquityError> {
        let mut iter = self.iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => Ok([first, second]),
            _ => Err(EquityError::InvalidHoleCardCount(self.count())),
        }
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
