use std::fmt;
use std::str::FromStr;

use crate::core::{Card, EquityError, Hand, Suit, Value};

/// Number of distinct two card starting hands in a 52 card deck.
pub const NUM_STARTING_HANDS: usize = 1326;
/// Number of strategically distinct starting hand classes.
pub const NUM_CANONICAL_HANDS: usize = 169;
/// Width of the starting hand chart.
pub const GRID_SIZE: usize = 13;

/// Enum to represent how the suits of a starting hand correspond to each
/// other. Pairs are always `OffSuit`.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suitedness {
    /// Both of the cards are the same suit
    Suited,
    /// The cards have different suits
    OffSuit,
}

/// One of the 169 starting hand classes of texas holdem.
///
/// - 13 pocket pairs (e.g., AA, KK, 22)
/// - 78 suited hands (e.g., AKs, T9s)
/// - 78 offsuit hands (e.g., AKo, 72o)
///
/// # Examples
///
/// ```
/// use rs_poker_equity::core::Value;
/// use rs_poker_equity::holdem::{CanonicalHand, Suitedness};
///
/// let aks = CanonicalHand::new(Value::King, Value::Ace, Suitedness::Suited);
/// assert_eq!("AKs", aks.to_notation());
///
/// let ako: CanonicalHand = "AKo".parse().unwrap();
/// assert!(!ako.is_suited());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CanonicalHand {
    /// Higher or equal value card
    high: Value,
    /// Lower or equal value card
    low: Value,
    suitedness: Suitedness,
}

impl CanonicalHand {
    /// Create a new hand class from two values.
    ///
    /// Values are ordered so that `high >= low`.
    /// Pairs can't be suited so they are always `OffSuit`.
    pub fn new(v1: Value, v2: Value, suitedness: Suitedness) -> Self {
        let (high, low) = if v1 >= v2 { (v1, v2) } else { (v2, v1) };
        let suitedness = if high == low {
            Suitedness::OffSuit
        } else {
            suitedness
        };
        Self {
            high,
            low,
            suitedness,
        }
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suitedness == Suitedness::Suited
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }

    /// How many concrete two card hands are in this class.
    ///
    /// Pairs have 6, suited hands 4 and offsuit hands 12.
    pub fn combinations(&self) -> usize {
        if self.is_pair() {
            6
        } else if self.is_suited() {
            4
        } else {
            12
        }
    }

    /// A concrete pair of cards from this class.
    ///
    /// The first card is always a spade. Suited hands put the second card in
    /// spades too and everything else puts it in hearts. Which suits are
    /// picked has no effect on equity against random hands.
    ///
    /// ```
    /// use rs_poker_equity::holdem::{CanonicalHand, canonicalize};
    ///
    /// let hand: CanonicalHand = "T9s".parse().unwrap();
    /// let [a, b] = hand.concretize();
    /// assert_eq!(hand, canonicalize(a, b));
    /// ```
    pub fn concretize(&self) -> [Card; 2] {
        let second_suit = if self.is_suited() {
            Suit::Spade
        } else {
            Suit::Heart
        };
        [
            Card::new(self.high, Suit::Spade),
            Card::new(self.low, second_suit),
        ]
    }

    /// Create a new vector of all suited hands.
    fn create_suited(&self) -> Vec<[Card; 2]> {
        Suit::suits()
            .iter()
            .map(|s| [Card::new(self.high, *s), Card::new(self.low, *s)])
            .collect()
    }

    /// Create a new vector of all the off suit hands.
    fn create_offsuit(&self) -> Vec<[Card; 2]> {
        let suits = Suit::suits();
        let mut hands = Vec::with_capacity(self.combinations());
        for (i, suit_one) in suits.iter().enumerate() {
            for suit_two in &suits[i + 1..] {
                hands.push([
                    Card::new(self.high, *suit_one),
                    Card::new(self.low, *suit_two),
                ]);

                // If this isn't a pair then the flipped suits is needed.
                if !self.is_pair() {
                    hands.push([
                        Card::new(self.high, *suit_two),
                        Card::new(self.low, *suit_one),
                    ]);
                }
            }
        }
        hands
    }

    /// Get all the concrete starting hands represented by this class.
    pub fn possible_hands(&self) -> Vec<[Card; 2]> {
        match self.suitedness {
            Suitedness::Suited => self.create_suited(),
            Suitedness::OffSuit => self.create_offsuit(),
        }
    }

    /// Create every possible unique starting hand class.
    ///
    /// ```
    /// use rs_poker_equity::holdem::CanonicalHand;
    ///
    /// let all = CanonicalHand::all();
    /// assert_eq!(169, all.len());
    /// ```
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(NUM_CANONICAL_HANDS);
        let values = Value::values();
        for (i, &high) in values.iter().enumerate() {
            for &low in &values[..=i] {
                hands.push(Self::new(high, low, Suitedness::OffSuit));
                if high != low {
                    hands.push(Self::new(high, low, Suitedness::Suited));
                }
            }
        }
        hands
    }

    /// All 169 classes in chart order, row by row starting with "AA".
    ///
    /// ```
    /// use rs_poker_equity::holdem::CanonicalHand;
    ///
    /// let chart = CanonicalHand::chart();
    /// assert_eq!("AA", chart[0].to_notation());
    /// assert_eq!("AKo", chart[1].to_notation());
    /// assert_eq!("AKs", chart[13].to_notation());
    /// ```
    pub fn chart() -> Vec<Self> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).filter_map(move |col| Self::from_grid(row, col)))
            .collect()
    }

    /// Row and column of this hand in the 13x13 starting hand chart.
    ///
    /// Row and column zero are aces. Pairs are on the diagonal,
    /// suited hands below it and offsuit hands above it.
    ///
    /// ```
    /// use rs_poker_equity::holdem::CanonicalHand;
    ///
    /// let aks: CanonicalHand = "AKs".parse().unwrap();
    /// assert_eq!((1, 0), aks.grid_position());
    /// let ako: CanonicalHand = "AKo".parse().unwrap();
    /// assert_eq!((0, 1), ako.grid_position());
    /// ```
    pub fn grid_position(&self) -> (usize, usize) {
        let high = grid_index(self.high);
        let low = grid_index(self.low);
        match self.suitedness {
            Suitedness::Suited => (low, high),
            Suitedness::OffSuit => (high, low),
        }
    }

    /// The hand at a position in the starting hand chart. None if the
    /// position is off the chart.
    pub fn from_grid(row: usize, col: usize) -> Option<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        let row_value = grid_value(row);
        let col_value = grid_value(col);
        let suitedness = if row > col {
            Suitedness::Suited
        } else {
            Suitedness::OffSuit
        };
        Some(Self::new(row_value, col_value, suitedness))
    }

    /// Convert to standard notation string.
    ///
    /// - Pairs: "AA", "KK", "22"
    /// - Suited: "AKs", "T9s"
    /// - Offsuit: "AKo", "72o"
    pub fn to_notation(&self) -> String {
        let high_char = self.high.to_char();
        let low_char = self.low.to_char();

        if self.is_pair() {
            format!("{high_char}{low_char}")
        } else if self.is_suited() {
            format!("{high_char}{low_char}s")
        } else {
            format!("{high_char}{low_char}o")
        }
    }

    /// Parse from notation string like "AA", "AKs" or "72o".
    pub fn from_notation(s: &str) -> Result<Self, EquityError> {
        let invalid = || EquityError::InvalidPreflopNotation(s.to_string());
        let chars: Vec<char> = s.chars().collect();

        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }

        let v1 = Value::from_char(chars[0]).ok_or_else(invalid)?;
        let v2 = Value::from_char(chars[1]).ok_or_else(invalid)?;

        let suitedness = match chars.get(2).map(|c| c.to_ascii_lowercase()) {
            // Two chars is only valid for pairs.
            None if v1 == v2 => Suitedness::OffSuit,
            // Can't have a suited pair
            Some('s') if v1 != v2 => Suitedness::Suited,
            Some('o') => Suitedness::OffSuit,
            _ => return Err(invalid()),
        };

        Ok(Self::new(v1, v2, suitedness))
    }
}

/// Aces are at index zero of the chart.
fn grid_index(value: Value) -> usize {
    GRID_SIZE - 1 - value as usize
}

fn grid_value(idx: usize) -> Value {
    Value::from_u8((GRID_SIZE - 1 - idx) as u8)
}

/// Map any two cards to their starting hand class.
///
/// The order of the cards doesn't matter.
///
/// ```
/// use rs_poker_equity::core::Card;
/// use rs_poker_equity::holdem::canonicalize;
///
/// let a: Card = "5h".parse().unwrap();
/// let b: Card = "Qh".parse().unwrap();
/// assert_eq!("Q5s", canonicalize(a, b).to_notation());
/// assert_eq!(canonicalize(a, b), canonicalize(b, a));
/// ```
pub fn canonicalize(card_one: Card, card_two: Card) -> CanonicalHand {
    let suitedness = if card_one.suit == card_two.suit {
        Suitedness::Suited
    } else {
        Suitedness::OffSuit
    };
    CanonicalHand::new(card_one.value, card_two.value, suitedness)
}

impl fmt::Display for CanonicalHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl FromStr for CanonicalHand {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl TryFrom<String> for CanonicalHand {
    type Error = EquityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_notation(&value)
    }
}

impl From<CanonicalHand> for String {
    fn from(hand: CanonicalHand) -> Self {
        hand.to_notation()
    }
}

/// The class of a two card `Hand`.
impl TryFrom<&Hand> for CanonicalHand {
    type Error = EquityError;

    fn try_from(hand: &Hand) -> Result<Self, Self::Error> {
        let [one, two] = hand.hole_cards()?;
        Ok(canonicalize(one, two))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::core::{CardIter, Deck};

    #[test]
    fn test_aces() {
        let sh = CanonicalHand::new(Value::Ace, Value::Ace, Suitedness::OffSuit);
        assert_eq!(6, sh.possible_hands().len());
    }

    #[test]
    fn test_suited_connector() {
        let sh = CanonicalHand::new(Value::Ace, Value::King, Suitedness::Suited);
        assert_eq!(4, sh.possible_hands().len());
    }

    #[test]
    fn test_unsuited_connector() {
        let sh = CanonicalHand::new(Value::Ace, Value::King, Suitedness::OffSuit);
        assert_eq!(12, sh.possible_hands().len());
    }

    #[test]
    fn test_pairs_are_never_suited() {
        let sh = CanonicalHand::new(Value::Five, Value::Five, Suitedness::Suited);
        assert!(!sh.is_suited());
        assert_eq!("55", sh.to_notation());
    }

    #[test]
    fn test_starting_hand_count() {
        let all = CanonicalHand::all();
        assert_eq!(NUM_CANONICAL_HANDS, all.len());
        assert_eq!(NUM_CANONICAL_HANDS, all.iter().collect::<HashSet<_>>().len());

        let num_to_test: usize = all.iter().map(|h| h.possible_hands().len()).sum();
        assert_eq!(NUM_STARTING_HANDS, num_to_test);

        let combos: usize = all.iter().map(|h| h.combinations()).sum();
        assert_eq!(NUM_STARTING_HANDS, combos);
    }

    #[test]
    fn test_possible_hands_map_back() {
        for class in CanonicalHand::all() {
            let hands = class.possible_hands();
            assert_eq!(class.combinations(), hands.len());
            for [a, b] in hands {
                assert_ne!(a, b);
                assert_eq!(class, canonicalize(a, b));
            }
        }
    }

    #[test]
    fn test_every_two_card_combo() {
        let deck: Vec<Card> = Deck::new().into_iter().collect();
        let mut counts: HashMap<CanonicalHand, usize> = HashMap::new();
        for [a, b] in CardIter::<2>::new(&deck) {
            // Order never matters.
            assert_eq!(canonicalize(a, b), canonicalize(b, a));
            *counts.entry(canonicalize(a, b)).or_default() += 1;
        }

        assert_eq!(NUM_CANONICAL_HANDS, counts.len());
        let pairs = counts.keys().filter(|h| h.is_pair()).count();
        let suited = counts.keys().filter(|h| h.is_suited()).count();
        assert_eq!(13, pairs);
        assert_eq!(78, suited);
        assert_eq!(78, NUM_CANONICAL_HANDS - pairs - suited);

        for (class, count) in &counts {
            assert_eq!(class.combinations(), *count, "{class}");
        }
        assert_eq!(NUM_STARTING_HANDS, counts.values().sum::<usize>());
    }

    #[test]
    fn test_concretize() {
        for class in CanonicalHand::all() {
            let [a, b] = class.concretize();
            assert_ne!(a, b);
            assert_eq!(class, canonicalize(a, b));
        }
    }

    #[test]
    fn test_notation_round_trip() {
        for class in CanonicalHand::all() {
            let s = class.to_notation();
            assert_eq!(class, s.parse().unwrap());
        }
        assert_eq!("AKs", "kas".parse::<CanonicalHand>().unwrap().to_notation());
    }

    #[test]
    fn test_bad_notation() {
        for bad in ["", "A", "AK", "AAs", "AKx", "AKso", "1Ks", "AKs "] {
            assert!(
                matches!(
                    CanonicalHand::from_notation(bad),
                    Err(EquityError::InvalidPreflopNotation(_))
                ),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_grid_covers_chart() {
        let mut seen = HashSet::new();
        for class in CanonicalHand::all() {
            let (row, col) = class.grid_position();
            assert!(row < GRID_SIZE && col < GRID_SIZE);
            assert!(seen.insert((row, col)));
            assert_eq!(Some(class), CanonicalHand::from_grid(row, col));
            match (class.is_pair(), class.is_suited()) {
                (true, _) => assert_eq!(row, col),
                (false, true) => assert!(row > col),
                (false, false) => assert!(row < col),
            }
        }
        assert_eq!(GRID_SIZE * GRID_SIZE, seen.len());
        assert_eq!(None, CanonicalHand::from_grid(13, 0));
    }

    #[test]
    fn test_grid_orientation() {
        let aks: CanonicalHand = "AKs".parse().unwrap();
        assert_eq!((1, 0), aks.grid_position());
        let ako: CanonicalHand = "AKo".parse().unwrap();
        assert_eq!((0, 1), ako.grid_position());
        let seven_two: CanonicalHand = "72s".parse().unwrap();
        assert_eq!((12, 7), seven_two.grid_position());

        assert_eq!(Some(aks), CanonicalHand::from_grid(1, 0));
        assert_eq!(Some(ako), CanonicalHand::from_grid(0, 1));
        assert!(CanonicalHand::from_grid(12, 0).unwrap().is_suited());
        assert!(!CanonicalHand::from_grid(0, 12).unwrap().is_suited());
    }

    #[test]
    fn test_from_hand() {
        let hand = Hand::new_from_str("7d7c").unwrap();
        assert_eq!("77", CanonicalHand::try_from(&hand).unwrap().to_notation());

        let hand = Hand::new_from_str("7d").unwrap();
        assert_eq!(
            Err(EquityError::InvalidHoleCardCount(1)),
            CanonicalHand::try_from(&hand)
        );
    }
}
