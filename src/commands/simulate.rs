//! Simulation command
//!
//! Plays many seeded sessions with a bisection player and reports how many
//! attempts it needed, plus how evenly the targets were spread.

use crate::core::{Feedback, GuessSession, TARGET_MAX, TARGET_MIN};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Number of distinct target values
const TARGET_SPAN: usize = (TARGET_MAX - TARGET_MIN + 1) as usize;

/// Guesses the midpoint of the remaining interval
///
/// Never needs more than `ceil(log2(101))` = 7 attempts on [1, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bisector {
    low: i64,
    high: i64,
}

impl Default for Bisector {
    fn default() -> Self {
        Self::new()
    }
}

impl Bisector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            low: TARGET_MIN,
            high: TARGET_MAX,
        }
    }

    #[must_use]
    pub const fn next_guess(&self) -> i64 {
        self.low + (self.high - self.low) / 2
    }

    /// Narrow the interval using the feedback for `guess`
    pub fn observe(&mut self, guess: i64, feedback: Feedback) {
        match feedback {
            Feedback::TooLow => self.low = guess + 1,
            Feedback::TooHigh => self.high = guess - 1,
            Feedback::Correct { .. } => {
                self.low = guess;
                self.high = guess;
            }
            Feedback::Invalid => {}
        }
    }

    /// True when no value is left to guess
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.low > self.high
    }
}

/// Play one session to completion, returning the winning attempt count
///
/// Returns `None` only if the session's feedback is inconsistent.
pub fn play_session<R: Rng>(session: &mut GuessSession<R>) -> Option<u32> {
    let mut bisector = Bisector::new();

    while !bisector.is_exhausted() {
        let guess = bisector.next_guess();
        let feedback = session.submit_guess(&guess.to_string());

        if let Feedback::Correct { attempts } = feedback {
            return Some(attempts);
        }
        bisector.observe(guess, feedback);
    }

    None
}

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            show_progress: true,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub unsolved: usize,
    pub total_attempts: u64,
    pub average_attempts: f64,
    pub min_attempts: u32,
    pub max_attempts: u32,
    pub distribution: FxHashMap<u32, usize>,
    /// Index `i` counts targets equal to `TARGET_MIN + i`
    pub target_counts: Vec<usize>,
    /// Largest relative gap between a bucket and the uniform expectation
    pub max_deviation: f64,
    pub duration: Duration,
}

struct GameOutcome {
    target: i64,
    attempts: Option<u32>,
}

/// Run `config.games` sessions, session `i` seeded with `seed + i`
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is malformed.
pub fn run_simulation(config: &SimulationConfig) -> SimulationResult {
    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .expect("static progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<GameOutcome> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let mut session = GuessSession::seeded(config.seed.wrapping_add(i as u64));
            let target = session.target();
            let attempts = play_session(&mut session);
            pb.inc(1);
            GameOutcome { target, attempts }
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut target_counts = vec![0usize; TARGET_SPAN];
    let mut total_attempts = 0u64;
    let mut min_attempts = u32::MAX;
    let mut max_attempts = 0;
    let mut unsolved = 0;

    for outcome in &outcomes {
        target_counts[(outcome.target - TARGET_MIN) as usize] += 1;

        match outcome.attempts {
            Some(attempts) => {
                total_attempts += u64::from(attempts);
                min_attempts = min_attempts.min(attempts);
                max_attempts = max_attempts.max(attempts);
                *distribution.entry(attempts).or_insert(0) += 1;
            }
            None => unsolved += 1,
        }
    }

    let solved = outcomes.len() - unsolved;
    let average_attempts = if solved == 0 {
        0.0
    } else {
        total_attempts as f64 / solved as f64
    };
    if solved == 0 {
        min_attempts = 0;
    }

    let max_deviation = max_deviation(&target_counts, outcomes.len());

    info!(
        games = config.games,
        seed = config.seed,
        average_attempts,
        max_deviation,
        "simulation finished"
    );

    SimulationResult {
        games: config.games,
        unsolved,
        total_attempts,
        average_attempts,
        min_attempts,
        max_attempts,
        distribution,
        target_counts,
        max_deviation,
        duration,
    }
}

fn max_deviation(counts: &[usize], total: usize) -> f64 {
    if total == 0 || counts.is_empty() {
        return 0.0;
    }

    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&c| (c as f64 - expected).abs() / expected)
        .fold(0.0, f64::max)
}
