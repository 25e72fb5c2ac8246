//! Monte Carlo equity estimates for Texas hold'em starting hands.
//!
//! Hands are ranked by picking the best five cards out of the seven
//! available, and equity is estimated by dealing random opponents and
//! boards. Every one of the 169 starting hand classes can be swept in
//! parallel to fill in the usual 13x13 chart.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use rs_poker_equity::core::Hand;
//! use rs_poker_equity::holdem::simulate;
//!
//! let hero = Hand::new_from_str("AsAd").unwrap().hole_cards().unwrap();
//! let mut rng = StdRng::seed_from_u64(420);
//! let result = simulate(hero, 1, 1_000, &mut rng).unwrap();
//! assert!(result.win_rate() > 0.7);
//! ```

/// Cards, decks and hand ranking. Everything in core is
/// agnostic to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
