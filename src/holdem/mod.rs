/// Module for the 169 starting hand classes.
mod starting_hand;
/// Export `CanonicalHand`
pub use self::starting_hand::{
    CanonicalHand, GRID_SIZE, NUM_CANONICAL_HANDS, NUM_STARTING_HANDS, Suitedness, canonicalize,
};

/// Monte Carlo simulation of a hand against random opponents.
mod equity;
pub use self::equity::{
    BOARD_CARDS, DEFAULT_BATCH_SIZE, EquityResult, EquitySimulator, HOLE_CARDS, MAX_OPPONENTS,
    Outcome, SimulationConfig, simulate, simulate_by_opponents, simulate_parallel,
};

/// Equity of every starting hand class.
mod equity_table;
/// Export `EquityTable`
pub use self::equity_table::{EquityTable, sweep_all_classes};

/// Counting how often each starting hand is dealt.
mod frequency;
pub use self::frequency::StartingHandFrequencies;
