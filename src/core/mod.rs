//! This is the core module. It exports the non-holdem
//! related code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Error types.
mod error;
pub use self::error::EquityError;

/// Bitset of cards used for quick membership checks.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{DECK_SIZE, Deck};

/// 5 Card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{CoreRank, MAX_HAND_SIZE, MIN_HAND_SIZE, Rank, Rankable, evaluate};
