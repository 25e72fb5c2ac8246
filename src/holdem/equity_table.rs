use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{event, trace_span};

use super::equity::{EquityResult, EquitySimulator, SimulationConfig};
use super::starting_hand::{CanonicalHand, GRID_SIZE};
use crate::core::EquityError;

/// Equity of every canonical starting hand against a fixed number of
/// random opponents.
///
/// Built once by [`sweep_all_classes`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityTable {
    num_opponents: usize,
    trials_per_hand: u64,
    results: HashMap<CanonicalHand, EquityResult>,
}

impl EquityTable {
    pub fn num_opponents(&self) -> usize {
        self.num_opponents
    }

    pub fn trials_per_hand(&self) -> u64 {
        self.trials_per_hand
    }

    pub fn get(&self, hand: &CanonicalHand) -> Option<&EquityResult> {
        self.results.get(hand)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the table in chart order, row by row from the top left.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalHand, &EquityResult)> {
        CanonicalHand::chart()
            .into_iter()
            .filter_map(|hand| self.results.get(&hand).map(|result| (hand, result)))
    }

    /// Win rates laid out as the 13x13 starting hand chart.
    ///
    /// `grid[row][col]` holds the class returned by
    /// `CanonicalHand::from_grid(row, col)`.
    pub fn win_rate_grid(&self) -> [[f64; GRID_SIZE]; GRID_SIZE] {
        let mut grid = [[0.0; GRID_SIZE]; GRID_SIZE];
        for (hand, result) in &self.results {
            let (row, col) = hand.grid_position();
            grid[row][col] = result.win_rate();
        }
        grid
    }
}

/// Simulate every one of the 169 starting hand classes.
///
/// Each class is simulated using its concrete representative on rayon's
/// thread pool. Seeds for every class are drawn from `rng` up front, in
/// `CanonicalHand::all()` order, so the table only depends on the seed.
/// If any class fails the whole sweep fails and nothing is returned.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::holdem::{CanonicalHand, sweep_all_classes};
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let table = sweep_all_classes(2, 20, &mut rng).unwrap();
///
/// assert_eq!(169, table.len());
/// let aces: CanonicalHand = "AA".parse().unwrap();
/// assert_eq!(20, table.get(&aces).unwrap().trials());
/// ```
pub fn sweep_all_classes<R: Rng>(
    num_opponents: usize,
    num_trials: u64,
    rng: &mut R,
) -> Result<EquityTable, EquityError> {
    let simulator = EquitySimulator::new(SimulationConfig::new(num_opponents, num_trials))?;
    let seeded: Vec<(CanonicalHand, u64)> = CanonicalHand::all()
        .into_iter()
        .map(|hand| (hand, rng.random()))
        .collect();

    event!(
        tracing::Level::INFO,
        classes = seeded.len(),
        opponents = num_opponents,
        trials = num_trials,
        "Starting equity sweep"
    );
    let _span = trace_span!("sweep_all_classes", opponents = num_opponents).entered();

    let results = seeded
        .into_par_iter()
        .map(|(hand, seed)| {
            let mut class_rng = StdRng::seed_from_u64(seed);
            let result = simulator.simulate(hand.concretize(), &mut class_rng)?;
            event!(
                tracing::Level::DEBUG,
                hand = %hand,
                win_rate = result.win_rate(),
                "Simulated starting hand"
            );
            Ok((hand, result))
        })
        .collect::<Result<HashMap<_, _>, EquityError>>()?;

    event!(
        tracing::Level::INFO,
        classes = results.len(),
        "Finished equity sweep"
    );

    Ok(EquityTable {
        num_opponents,
        trials_per_hand: num_trials,
        results,
    })
}
