use super::{Card, CardBitSet, CardIter, EquityError, Hand};

/// Fewest cards `evaluate` will accept.
pub const MIN_HAND_SIZE: usize = 5;
/// Most cards `evaluate` will accept. Two hole cards and a full board.
pub const MAX_HAND_SIZE: usize = 7;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
///
/// A greater `Rank` is a stronger hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// Hand category without the tie breaking detail.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum CoreRank {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

/// Convert from Rank to CoreRank by stripping the u32 detail.
impl From<Rank> for CoreRank {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => CoreRank::HighCard,
            Rank::OnePair(_) => CoreRank::OnePair,
            Rank::TwoPair(_) => CoreRank::TwoPair,
            Rank::ThreeOfAKind(_) => CoreRank::ThreeOfAKind,
            Rank::Straight(_) => CoreRank::Straight,
            Rank::Flush(_) => CoreRank::Flush,
            Rank::FullHouse(_) => CoreRank::FullHouse,
            Rank::FourOfAKind(_) => CoreRank::FourOfAKind,
            Rank::StraightFlush(_) => CoreRank::StraightFlush,
        }
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of hand ranks. This method
/// will determine if there's a straight, and will give the
/// rank. Wheel is the lowest, broadway is the highest value.
///
/// Returns None if the hand ranks represented don't correspond
/// to a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Five ones in a row survive shifting and anding four times.
    // The surviving bit is the top card of the straight.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        // Ace plays low. It's the smallest straight there is.
        Some(0)
    } else {
        None
    }
}

/// Rank exactly five distinct cards.
///
/// Category defining values go above bit 13 and the
/// kickers below it so that comparing the u32 compares
/// the category values first and then the kickers from the
/// highest down.
fn rank_five_cards(cards: impl Iterator<Item = Card>) -> Rank {
    // use for bitset
    let mut suit_set: u32 = 0;
    // Use for bitset
    let mut value_set: u32 = 0;
    let mut value_to_count: [u8; 13] = [0; 13];

    // count => bitset of values.
    let mut count_to_value: [u32; 5] = [0; 5];
    for c in cards {
        let v = c.value as u8;
        let s = c.suit as u8;

        suit_set |= 1 << s;
        value_set |= 1 << v;
        value_to_count[v as usize] += 1;
    }

    // Now rotate the value to count map.
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count as usize] |= 1 << value;
    }

    // The major deciding factor for hand rank
    // is the number of unique card values.
    let unique_card_count = value_set.count_ones();

    match unique_card_count {
        5 => {
            // If there are five different cards it can be a straight
            // a straight flush, a flush, or just a high card.
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                // This is the most likely outcome.
                (None, false) => Rank::HighCard(value_set),
                (Some(rank), false) => Rank::Straight(rank),
                (None, true) => Rank::Flush(value_set),
                (Some(rank), true) => Rank::StraightFlush(rank),
            }
        }
        4 => {
            // It is always one pair
            let major_rank = count_to_value[2];
            let minor_rank = value_set ^ major_rank;
            Rank::OnePair((major_rank << 13) | minor_rank)
        }
        3 => {
            // this can be three of a kind or two pair.
            let three_value = count_to_value[3];
            if three_value > 0 {
                let major_rank = three_value;
                let minor_rank = value_set ^ major_rank;
                Rank::ThreeOfAKind((major_rank << 13) | minor_rank)
            } else {
                let major_rank = count_to_value[2];
                let minor_rank = value_set ^ major_rank;
                Rank::TwoPair((major_rank << 13) | minor_rank)
            }
        }
        2 => {
            // This can either be full house, or four of a kind.
            let three_value = count_to_value[3];
            if three_value > 0 {
                let major_rank = three_value;
                let minor_rank = value_set ^ major_rank;
                Rank::FullHouse((major_rank << 13) | minor_rank)
            } else {
                let major_rank = count_to_value[4];
                let minor_rank = value_set ^ major_rank;
                Rank::FourOfAKind((major_rank << 13) | minor_rank)
            }
        }
        _ => unreachable!(),
    }
}

/// Best five card rank out of a slice of cards.
///
/// Every five card subset is ranked and the strongest one
/// wins. Fewer than five cards can't make a hand and come back
/// as `Rank::HighCard(0)`, below every real hand.
fn rank_best(cards: &[Card]) -> Rank {
    if cards.len() == MIN_HAND_SIZE {
        return rank_five_cards(cards.iter().copied());
    }
    CardIter::<MIN_HAND_SIZE>::new(cards)
        .map(|five| rank_five_cards(five.into_iter()))
        .fold(Rank::HighCard(0), Ord::max)
}

/// Can this turn into a hand rank? There are implementations for
/// `Hand`, `Vec<Card>` and `[Card]`.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the current 5 card hand.
    /// This will not cache the value.
    ///
    /// Any other number of cards is ranked the same way as `rank`.
    ///
    /// ```
    /// use rs_poker_equity::core::{CoreRank, Hand, Rankable};
    ///
    /// let hand = Hand::new_from_str("AsKsQsJsTs9s8s").unwrap();
    /// assert_eq!(CoreRank::StraightFlush, CoreRank::from(hand.rank_five()));
    /// ```
    fn rank_five(&self) -> Rank {
        let cards: Vec<Card> = self.cards().collect();
        rank_best(&cards)
    }

    /// Rank the cards to find the best 5 card hand.
    ///
    /// # Examples
    /// ```
    /// use rs_poker_equity::core::{Hand, Rank, Rankable};
    ///
    /// let hand = Hand::new_from_str("2h2d8d8sKd6sTh").unwrap();
    /// let rank = hand.rank();
    /// assert!(Rank::TwoPair(0) <= rank);
    /// assert!(Rank::TwoPair(u32::MAX) >= rank);
    /// ```
    fn rank(&self) -> Rank {
        let cards: Vec<Card> = self.cards().collect();
        rank_best(&cards)
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }

    fn rank_five(&self) -> Rank {
        rank_best(self)
    }

    fn rank(&self) -> Rank {
        rank_best(self)
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }

    fn rank_five(&self) -> Rank {
        rank_best(self)
    }

    fn rank(&self) -> Rank {
        rank_best(self)
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

/// Evaluate the strength of a 5, 6, or 7 card hand.
///
/// The order of the cards doesn't matter. Anything outside of
/// 5 to 7 cards, or with the same card twice, is rejected.
///
/// # Examples
///
/// ```
/// use rs_poker_equity::core::{Card, CoreRank, evaluate};
///
/// let cards: Vec<Card> = ["Ah", "Ad", "Kh", "Kd", "2c", "2s", "9h"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let rank = evaluate(&cards).unwrap();
/// assert_eq!(CoreRank::TwoPair, CoreRank::from(rank));
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Rank, EquityError> {
    if !(MIN_HAND_SIZE..=MAX_HAND_SIZE).contains(&cards.len()) {
        return Err(EquityError::InvalidHandSize(cards.len()));
    }
    let mut seen = CardBitSet::new();
    for card in cards {
        if seen.contains(*card) {
            return Err(EquityError::DuplicateCardInHand(*card));
        }
        seen.insert(*card);
    }
    Ok(rank_best(cards))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    use super::*;
    use crate::core::{Deck, Value};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().iter().collect()
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::HighCard(0) < Rank::StraightFlush(0));
        assert!(Rank::HighCard(0) < Rank::FourOfAKind(0));
        assert!(Rank::HighCard(0) < Rank::ThreeOfAKind(0));
    }

    #[test]
    fn test_cmp_high() {
        assert!(Rank::HighCard(0) < Rank::HighCard(100));
    }

    #[test]
    fn test_high_card_hand() {
        let hand = Hand::new_from_str("Ad8h9cTc5c").unwrap();
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);

        assert_eq!(Rank::HighCard(rank), hand.rank_five());
    }

    #[test]
    fn test_flush() {
        let hand = Hand::new_from_str("Ad8d9dTd5d").unwrap();
        let rank = (1 << Value::Ace as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Nine as u32)
            | (1 << Value::Ten as u32)
            | (1 << Value::Five as u32);

        assert_eq!(Rank::Flush(rank), hand.rank_five());
    }

    #[test]
    fn test_full_house() {
        let hand = Hand::new_from_str("AdAc9d9c9s").unwrap();
        let rank = ((1 << (Value::Nine as u32)) << 13) | (1 << (Value::Ace as u32));
        assert_eq!(Rank::FullHouse(rank), hand.rank_five());
    }

    #[test]
    fn test_two_pair() {
        let hand = Hand::new_from_str("AdAc9d9cTs").unwrap();
        let rank = (((1 << Value::Ace as u32) | (1 << Value::Nine as u32)) << 13)
            | (1 << Value::Ten as u32);
        assert_eq!(Rank::TwoPair(rank), hand.rank_five());
    }

    #[test]
    fn test_one_pair() {
        let hand = Hand::new_from_str("AdAc9d8cTs").unwrap();
        let rank = ((1 << Value::Ace as u32) << 13)
            | (1 << Value::Nine as u32)
            | (1 << Value::Eight as u32)
            | (1 << Value::Ten as u32);

        assert_eq!(Rank::OnePair(rank), hand.rank_five());
    }

    #[test]
    fn test_four_of_a_kind() {
        let hand = Hand::new_from_str("AdAcAsAhTs").unwrap();
        assert_eq!(
            Rank::FourOfAKind(((1 << (Value::Ace as u32)) << 13) | (1 << (Value::Ten as u32))),
            hand.rank_five()
        );
    }

    #[test]
    fn test_wheel() {
        let hand = Hand::new_from_str("Ad2c3s4h5s").unwrap();
        assert_eq!(Rank::Straight(0), hand.rank_five());
    }

    #[test]
    fn test_straight() {
        let hand = Hand::new_from_str("2c3s4h5s6d").unwrap();
        assert_eq!(Rank::Straight(1), hand.rank_five());
    }

    #[test]
    fn test_three_of_a_kind() {
        let hand = Hand::new_from_str("2c2s2h5s6d").unwrap();
        let rank = ((1 << (Value::Two as u32)) << 13)
            | (1 << (Value::Five as u32))
            | (1 << (Value::Six as u32));

        assert_eq!(Rank::ThreeOfAKind(rank), hand.rank_five());
    }

    #[test]
    fn test_rank_straight_top() {
        assert_eq!(Some(9), rank_straight(0b1_1111_0000_0000));
        assert_eq!(Some(0), rank_straight(WHEEL));
        assert_eq!(None, rank_straight(0b1_0000_0000_0111));
        // A six high straight beats the wheel even with the ace around.
        assert_eq!(Some(1), rank_straight(0b1_0000_0001_1111));
    }

    #[test]
    fn test_wheel_straight_flush_is_lowest() {
        let wheel = cards("Ah2h3h4h5h").rank();
        let six_high = cards("2h3h4h5h6h").rank();
        let royal = cards("AsKsQsJsTs").rank();

        assert_eq!(Rank::StraightFlush(0), wheel);
        assert!(wheel < six_high);
        assert!(six_high < royal);
    }

    #[test]
    fn test_category_order() {
        let royal = cards("AsKsQsJsTs").rank();
        let quads = cards("KdKcKsKhAs").rank();
        let full_house = cards("AdAcAsKhKs").rank();
        let flush = cards("Ad9d7d5d2d").rank();
        let straight = cards("Ts9d8c7h6s").rank();
        let trips = cards("QdQcQs3h2s").rank();
        let two_pair = cards("AdAcKsKh2s").rank();
        let pair = cards("AdAc4s3h2s").rank();
        let high = cards("AdKc9s3h2s").rank();

        let ordered = [
            high, pair, two_pair, trips, straight, flush, full_house, quads, royal,
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should be below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_kickers_break_ties() {
        // Same pair, second kicker decides.
        let a = cards("AdAcKs9h2s").rank();
        let b = cards("AhAsKc8h7s").rank();
        assert!(a > b);

        // Full house compares the trips before the pair.
        let c = cards("3d3c3sAhAs").rank();
        let d = cards("2d2c2sAdAc").rank();
        assert!(c > d);

        // Quads compares the kicker last.
        let e = cards("9d9c9s9hKs").rank();
        let f = cards("9d9c9s9hQs").rank();
        assert!(e > f);
    }

    #[test]
    fn test_seven_picks_best_two_pair() {
        // Three pairs on seven cards keeps the top two and
        // the best remaining card as the kicker.
        let rank = cards("AhAdKhKd2c2s9h").rank();
        let expected = cards("AhAdKhKd9h").rank();
        assert_eq!(expected, rank);
    }

    #[test]
    fn test_seven_card_straight_beats_pair() {
        let rank = cards("7h7d8c9sTdJh2c").rank();
        assert_eq!(CoreRank::Straight, CoreRank::from(rank));
    }

    #[test]
    fn test_seven_card_flush_over_straight() {
        let rank = cards("2h5h7h9hKh8c6d").rank();
        assert_eq!(CoreRank::Flush, CoreRank::from(rank));
    }

    #[test]
    fn test_seven_matches_best_subset() {
        let mut rng = StdRng::seed_from_u64(420);
        for _ in 0..500 {
            let mut deck = Deck::new();
            let seven = deck.draw(7, &mut rng).unwrap();
            let best = CardIter::<5>::new(&seven)
                .map(|five| five.rank_five())
                .max()
                .unwrap();
            assert_eq!(best, seven.rank());
        }
    }

    #[test]
    fn test_order_independent() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in MIN_HAND_SIZE..=MAX_HAND_SIZE {
            for _ in 0..100 {
                let mut deck = Deck::new();
                let mut hand = deck.draw(size, &mut rng).unwrap();
                let expected = evaluate(&hand).unwrap();
                hand.reverse();
                assert_eq!(expected, evaluate(&hand).unwrap());
                hand.shuffle(&mut rng);
                assert_eq!(expected, evaluate(&hand).unwrap());
                let set = Hand::new_with_cards(hand.clone());
                assert_eq!(expected, set.rank());
            }
        }
    }

    #[test]
    fn test_evaluate_rejects_bad_sizes() {
        assert_eq!(
            Err(EquityError::InvalidHandSize(4)),
            evaluate(&cards("AdAcKsKh"))
        );
        assert_eq!(
            Err(EquityError::InvalidHandSize(8)),
            evaluate(&cards("AdAcKsKh2c3c4c5c"))
        );
    }

    #[test]
    fn test_evaluate_rejects_duplicates() {
        let mut hand = cards("AdAcKsKh2c");
        hand.push(hand[0]);
        assert!(matches!(
            evaluate(&hand),
            Err(EquityError::DuplicateCardInHand(_))
        ));
    }

    #[test]
    fn test_every_five_card_hand() {
        let all: Vec<Card> = Deck::new().into_iter().collect();
        let mut counts = [0usize; 9];
        let mut distinct = HashSet::new();
        for five in CardIter::<5>::new(&all) {
            let rank = five.rank_five();
            counts[CoreRank::from(rank) as usize] += 1;
            distinct.insert(rank);
        }

        assert_eq!(
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40],
            counts
        );
        // Every equivalence class of five card poker hands.
        assert_eq!(7_462, distinct.len());
    }

    #[test]
    fn test_rank_five_on_seven_cards() {
        let hand = Hand::new_from_str("AsKsQsJsTs9s8s").unwrap();
        assert_eq!(hand.rank(), hand.rank_five());
        assert_eq!(CoreRank::StraightFlush, CoreRank::from(hand.rank_five()));

        let seven = cards("2c5d8hJsKdAh3s");
        assert_eq!(seven.rank(), seven.rank_five());
        assert_eq!(seven.rank(), seven[..].rank_five());
        assert_eq!(CoreRank::HighCard, CoreRank::from(seven.rank_five()));

        let six = Hand::new_from_str("2c3c4c5c6cKd").unwrap();
        assert_eq!(CoreRank::StraightFlush, CoreRank::from(six.rank_five()));
    }
}
