use std::ops::{Add, RangeInclusive};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{event, trace_span};

use crate::core::{Card, DECK_SIZE, Deck, EquityError, Rank, Rankable};

/// Hole cards dealt to every player.
pub const HOLE_CARDS: usize = 2;
/// Community cards dealt to the board.
pub const BOARD_CARDS: usize = 5;
/// The most opponents that fit in one deck alongside the hero and a board.
pub const MAX_OPPONENTS: usize = (DECK_SIZE - HOLE_CARDS - BOARD_CARDS) / HOLE_CARDS;
/// Trials per independently seeded batch in parallel simulations.
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// How one trial ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hero had the single best hand.
    Win,
    /// The hero shared the best hand with at least one opponent.
    Tie,
    /// Someone else had a better hand.
    Loss,
}

/// Tally of simulated trials for one hero hand and opponent count.
///
/// Ties are kept separate from wins so that callers can pick their own
/// equity convention. `win_rate` ignores ties while `equity` counts each
/// tie as half a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    trials: u64,
    wins: u64,
    ties: u64,
}

impl EquityResult {
    pub fn new(trials: u64, wins: u64, ties: u64) -> Self {
        debug_assert!(wins + ties <= trials);
        Self { trials, wins, ties }
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn ties(&self) -> u64 {
        self.ties
    }

    /// Trials that were neither won nor tied.
    pub fn losses(&self) -> u64 {
        self.trials - self.wins - self.ties
    }

    /// Fraction of trials won outright.
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins, self.trials)
    }

    pub fn tie_rate(&self) -> f64 {
        ratio(self.ties, self.trials)
    }

    /// Wins plus half of the ties, over all trials.
    pub fn equity(&self) -> f64 {
        ratio(self.wins, self.trials) + ratio(self.ties, self.trials) / 2.0
    }

    fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => {}
        }
    }
}

fn ratio(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Combine the counts of two runs over the same hand.
impl Add for EquityResult {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            trials: self.trials + rhs.trials,
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
        }
    }
}

/// Settings for a simulation run.
///
/// # Examples
///
/// ```
/// use rs_poker_equity::holdem::SimulationConfig;
///
/// let config = SimulationConfig::new(3, 10_000).batch_size(500);
/// assert!(config.validate().is_ok());
///
/// assert!(SimulationConfig::new(23, 10_000).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of random opponents the hero faces.
    pub num_opponents: usize,
    /// Number of trials per hero hand.
    pub num_trials: u64,
    /// Trials per independently seeded batch when running in parallel.
    pub batch_size: usize,
}

impl SimulationConfig {
    pub fn new(num_opponents: usize, num_trials: u64) -> Self {
        Self {
            num_opponents,
            num_trials,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn num_opponents(mut self, num_opponents: usize) -> Self {
        self.num_opponents = num_opponents;
        self
    }

    pub fn num_trials(mut self, num_trials: u64) -> Self {
        self.num_trials = num_trials;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Check that a simulation with these settings can run.
    pub fn validate(&self) -> Result<(), EquityError> {
        if self.num_opponents == 0 {
            return Err(EquityError::NoOpponents);
        }
        if self.num_opponents > MAX_OPPONENTS {
            return Err(EquityError::TooManyOpponents {
                requested: self.num_opponents,
                max: MAX_OPPONENTS,
            });
        }
        if self.num_trials == 0 {
            return Err(EquityError::NoTrials);
        }
        if self.batch_size == 0 {
            return Err(EquityError::InvalidBatchSize);
        }
        Ok(())
    }
}

/// Monte Carlo equity estimator for a hero hand against random opponents.
///
/// The configuration is validated once when the simulator is built so
/// every run afterwards only has to check the hero's cards.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::core::Hand;
/// use rs_poker_equity::holdem::{EquitySimulator, SimulationConfig};
///
/// let hero = Hand::new_from_str("AsAd").unwrap().hole_cards().unwrap();
/// let sim = EquitySimulator::new(SimulationConfig::new(1, 1_000)).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let result = sim.simulate(hero, &mut rng).unwrap();
///
/// assert_eq!(1_000, result.trials());
/// assert!(result.win_rate() > 0.7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquitySimulator {
    config: SimulationConfig,
}

impl EquitySimulator {
    pub fn new(config: SimulationConfig) -> Result<Self, EquityError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run every trial on the calling thread using `rng`.
    ///
    /// The same seed always gives the same result.
    pub fn simulate<R: Rng>(&self, hero: [Card; 2], rng: &mut R) -> Result<EquityResult, EquityError> {
        check_hero(&hero)?;
        let result = self.run_trials(hero, self.config.num_trials, rng)?;
        event!(
            tracing::Level::DEBUG,
            hero = %format_hole(&hero),
            opponents = self.config.num_opponents,
            trials = result.trials,
            wins = result.wins,
            ties = result.ties,
            "Finished equity simulation"
        );
        Ok(result)
    }

    /// Run the trials in parallel batches.
    ///
    /// Each batch gets its own `StdRng` seeded from `rng` before any work
    /// starts. Results only depend on the seed and the batch size, never on
    /// how rayon schedules the batches. Results differ from `simulate` for
    /// the same seed since the random streams differ.
    pub fn simulate_parallel<R: Rng>(
        &self,
        hero: [Card; 2],
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        check_hero(&hero)?;
        let batch_size = self.config.batch_size as u64;
        let num_trials = self.config.num_trials;
        let batches: Vec<(u64, u64)> = (0..num_trials.div_ceil(batch_size))
            .map(|batch| {
                let trials = batch_size.min(num_trials - batch * batch_size);
                (trials, rng.random())
            })
            .collect();

        let _span = trace_span!("simulate_parallel", batches = batches.len()).entered();
        let result = batches
            .into_par_iter()
            .map(|(trials, seed)| {
                let mut batch_rng = StdRng::seed_from_u64(seed);
                self.run_trials(hero, trials, &mut batch_rng)
            })
            .try_reduce(EquityResult::default, |a, b| Ok(a + b))?;

        event!(
            tracing::Level::DEBUG,
            hero = %format_hole(&hero),
            opponents = self.config.num_opponents,
            trials = result.trials,
            wins = result.wins,
            ties = result.ties,
            "Finished parallel equity simulation"
        );
        Ok(result)
    }

    fn run_trials<R: Rng>(
        &self,
        hero: [Card; 2],
        num_trials: u64,
        rng: &mut R,
    ) -> Result<EquityResult, EquityError> {
        let mut result = EquityResult::default();
        for _ in 0..num_trials {
            result.record(self.simulate_trial(hero, rng)?);
        }
        Ok(result)
    }

    /// Deal one random hand to completion.
    fn simulate_trial<R: Rng>(&self, hero: [Card; 2], rng: &mut R) -> Result<Outcome, EquityError> {
        let mut deck = Deck::new();
        for card in &hero {
            deck.remove(card)?;
        }
        let opponent_cards = deck.draw(HOLE_CARDS * self.config.num_opponents, rng)?;
        let board = deck.draw(BOARD_CARDS, rng)?;

        let hero_rank = rank_with_board(&hero, &board);
        let mut best_opponent: Option<Rank> = None;
        for hole in opponent_cards.chunks_exact(HOLE_CARDS) {
            let rank = rank_with_board(hole, &board);
            best_opponent = best_opponent.max(Some(rank));
        }

        Ok(match best_opponent {
            Some(best) if best > hero_rank => Outcome::Loss,
            Some(best) if best == hero_rank => Outcome::Tie,
            _ => Outcome::Win,
        })
    }
}

/// Seven card rank of a set of hole cards with the board.
fn rank_with_board(hole: &[Card], board: &[Card]) -> Rank {
    let mut cards = [hole[0]; HOLE_CARDS + BOARD_CARDS];
    cards[..HOLE_CARDS].copy_from_slice(hole);
    cards[HOLE_CARDS..].copy_from_slice(board);
    cards[..].rank()
}

fn check_hero(hero: &[Card; 2]) -> Result<(), EquityError> {
    if hero[0] == hero[1] {
        return Err(EquityError::DuplicateCardInHand(hero[1]));
    }
    Ok(())
}

fn format_hole(hero: &[Card; 2]) -> String {
    format!("{}{}", hero[0], hero[1])
}

/// Estimate how often `hero` wins against `num_opponents` random hands.
///
/// Exactly `num_trials` trials are run. All of the inputs are checked before
/// any randomness is used.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::core::Hand;
/// use rs_poker_equity::holdem::simulate;
///
/// let hero = Hand::new_from_str("KhKd").unwrap().hole_cards().unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let result = simulate(hero, 2, 500, &mut rng).unwrap();
///
/// assert_eq!(500, result.wins() + result.ties() + result.losses());
/// ```
pub fn simulate<R: Rng>(
    hero: [Card; 2],
    num_opponents: usize,
    num_trials: u64,
    rng: &mut R,
) -> Result<EquityResult, EquityError> {
    EquitySimulator::new(SimulationConfig::new(num_opponents, num_trials))?.simulate(hero, rng)
}

/// Same as `simulate` but with the trials spread over rayon's thread pool.
pub fn simulate_parallel<R: Rng>(
    hero: [Card; 2],
    num_opponents: usize,
    num_trials: u64,
    rng: &mut R,
) -> Result<EquityResult, EquityError> {
    EquitySimulator::new(SimulationConfig::new(num_opponents, num_trials))?
        .simulate_parallel(hero, rng)
}

/// Simulate the same hero hand against each opponent count in a range.
///
/// Every count is validated before any simulation starts.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_poker_equity::core::Hand;
/// use rs_poker_equity::holdem::simulate_by_opponents;
///
/// let hero = Hand::new_from_str("AsAd").unwrap().hole_cards().unwrap();
/// let mut rng = StdRng::seed_from_u64(420);
/// let results = simulate_by_opponents(hero, 1..=3, 200, &mut rng).unwrap();
///
/// assert_eq!(vec![1, 2, 3], results.iter().map(|(n, _)| *n).collect::<Vec<_>>());
/// ```
pub fn simulate_by_opponents<R: Rng>(
    hero: [Card; 2],
    opponents: RangeInclusive<usize>,
    num_trials: u64,
    rng: &mut R,
) -> Result<Vec<(usize, EquityResult)>, EquityError> {
    let simulators = opponents
        .map(|n| EquitySimulator::new(SimulationConfig::new(n, num_trials)).map(|sim| (n, sim)))
        .collect::<Result<Vec<_>, _>>()?;
    simulators
        .into_iter()
        .map(|(n, sim)| sim.simulate(hero, rng).map(|result| (n, result)))
        .collect()
}
