use thiserror::Error;

use super::Card;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum EquityError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Invalid starting hand notation: {0}")]
    InvalidPreflopNotation(String),
    #[error("Starting hands must have exactly 2 cards, got {0}")]
    InvalidHoleCardCount(usize),
    #[error("Hands must have between 5 and 7 cards to be evaluated, got {0}")]
    InvalidHandSize(usize),
    #[error("At least one opponent is required")]
    NoOpponents,
    #[error("{requested} opponents requested but the deck only has room for {max}")]
    TooManyOpponents { requested: usize, max: usize },
    #[error("At least one trial is required")]
    NoTrials,
    #[error("Batch size must be greater than zero")]
    InvalidBatchSize,
    #[error("Card {0} is not in the deck")]
    UnknownCard(Card),
    #[error("Can't draw {requested} cards from a deck with {remaining} left")]
    InsufficientCards { requested: usize, remaining: usize },
}

impl EquityError {
    /// Was this caused by bad input from the caller?
    ///
    /// `UnknownCard` and `InsufficientCards` are deck invariant
    /// violations. Once inputs have been validated they point at a bug
    /// rather than at the caller.
    ///
    /// ```
    /// use rs_poker_equity::core::EquityError;
    ///
    /// assert!(EquityError::NoTrials.is_invalid_input());
    /// assert!(!EquityError::InsufficientCards { requested: 5, remaining: 1 }.is_invalid_input());
    /// ```
    pub fn is_invalid_input(&self) -> bool {
        !matches!(
            self,
            Self::UnknownCard(_) | Self::InsufficientCards { .. }
        )
    }
}
