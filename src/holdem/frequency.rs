use std::collections::HashMap;

use rand::Rng;
use tracing::event;

use super::equity::HOLE_CARDS;
use super::starting_hand::{CanonicalHand, NUM_STARTING_HANDS, canonicalize};
use crate::core::{Deck, EquityError};

/// How often each starting hand class showed up in a number of random deals.
///
/// Useful as a sanity check of the dealing code since the expected
/// frequency of every class is known exactly.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::holdem::{CanonicalHand, StartingHandFrequencies};
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let freq = StartingHandFrequencies::sample(10_000, &mut rng).unwrap();
///
/// assert_eq!(10_000, freq.total());
/// let aks: CanonicalHand = "AKs".parse().unwrap();
/// assert!((freq.expected_probability(&aks) - 4.0 / 1326.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartingHandFrequencies {
    counts: HashMap<CanonicalHand, u64>,
    total: u64,
}

impl StartingHandFrequencies {
    /// Deal `num_hands` two card hands, each from a fresh deck.
    pub fn sample<R: Rng>(num_hands: u64, rng: &mut R) -> Result<Self, EquityError> {
        if num_hands == 0 {
            return Err(EquityError::NoTrials);
        }

        let mut counts = HashMap::new();
        for _ in 0..num_hands {
            let mut deck = Deck::new();
            let cards = deck.draw(HOLE_CARDS, rng)?;
            *counts.entry(canonicalize(cards[0], cards[1])).or_insert(0) += 1;
        }

        event!(
            tracing::Level::DEBUG,
            hands = num_hands,
            classes = counts.len(),
            "Sampled starting hands"
        );
        Ok(Self {
            counts,
            total: num_hands,
        })
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of deals that landed in `hand`.
    pub fn count(&self, hand: &CanonicalHand) -> u64 {
        self.counts.get(hand).copied().unwrap_or(0)
    }

    /// Observed share of deals for `hand`, between 0 and 100.
    pub fn percentage(&self, hand: &CanonicalHand) -> f64 {
        self.count(hand) as f64 * 100.0 / self.total as f64
    }

    /// Exact probability of being dealt `hand`.
    pub fn expected_probability(&self, hand: &CanonicalHand) -> f64 {
        hand.combinations() as f64 / NUM_STARTING_HANDS as f64
    }

    /// Every class with its count, in chart order. Classes never dealt are
    /// included with a count of zero.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalHand, u64)> {
        CanonicalHand::chart()
            .into_iter()
            .map(|hand| (hand, self.count(&hand)))
    }
}
