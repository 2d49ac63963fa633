//! Guessing session state machine
//!
//! A session owns the secret target and counts valid guesses until the
//! player hits it. The randomness source is a type parameter so tests and
//! simulations can pin the target with a seed.

use super::{Feedback, parse_guess};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Smallest possible target (inclusive)
pub const TARGET_MIN: i64 = 1;

/// Largest possible target (inclusive)
pub const TARGET_MAX: i64 = 100;

/// Externally visible state after an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub feedback: Option<Feedback>,
    pub attempts: u32,
    pub won: bool,
}

/// One round of the guessing game
///
/// Invariants:
/// - `target` only changes in [`GuessSession::reset`]
/// - `attempts` grows by one per parsed guess and never on invalid input
/// - `won` stays true until the next reset
#[derive(Debug, Clone)]
pub struct GuessSession<R = StdRng> {
    rng: R,
    target: i64,
    attempts: u32,
    won: bool,
    last_feedback: Option<Feedback>,
}

impl<R: Rng> GuessSession<R> {
    /// Start a session drawing its target from `rng`
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::{GuessSession, TARGET_MAX, TARGET_MIN};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let session = GuessSession::new(StdRng::seed_from_u64(7));
    /// assert!((TARGET_MIN..=TARGET_MAX).contains(&session.target()));
    /// assert_eq!(session.attempts(), 0);
    /// assert!(!session.is_won());
    /// ```
    pub fn new(mut rng: R) -> Self {
        let target = draw_target(&mut rng);
        debug!(target, "session created");

        Self {
            rng,
            target,
            attempts: 0,
            won: false,
            last_feedback: None,
        }
    }

    /// Submit raw user text as a guess
    ///
    /// Text that does not parse as an integer yields [`Feedback::Invalid`]
    /// and leaves the attempt counter alone. Parsed guesses are compared
    /// as-is, even when they fall outside the target range.
    pub fn submit_guess(&mut self, raw: &str) -> Feedback {
        let guess = match parse_guess(raw) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(%err, "invalid guess");
                self.last_feedback = Some(Feedback::Invalid);
                return Feedback::Invalid;
            }
        };

        self.attempts = self.attempts.saturating_add(1);
        let feedback = Feedback::compare(guess, self.target, self.attempts);

        if feedback.is_correct() {
            self.won = true;
            info!(attempts = self.attempts, "target guessed");
        } else {
            debug!(guess, attempts = self.attempts, ?feedback, "guess submitted");
        }

        self.last_feedback = Some(feedback);
        feedback
    }

    /// Draw a new target and clear all counters
    pub fn reset(&mut self) {
        self.target = draw_target(&mut self.rng);
        self.attempts = 0;
        self.won = false;
        self.last_feedback = None;
        info!("session reset");
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            feedback: self.last_feedback,
            attempts: self.attempts,
            won: self.won,
        }
    }

    /// The secret value (used by simulations and tests)
    #[inline]
    #[must_use]
    pub const fn target(&self) -> i64 {
        self.target
    }

    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[inline]
    #[must_use]
    pub const fn last_feedback(&self) -> Option<Feedback> {
        self.last_feedback
    }
}

impl GuessSession<StdRng> {
    /// Deterministic session for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

fn draw_target<R: Rng>(rng: &mut R) -> i64 {
    rng.random_range(TARGET_MIN..=TARGET_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Find a seed whose first draw is `target`
    fn session_with_target(target: i64) -> GuessSession {
        (0..10_000)
            .map(GuessSession::seeded)
            .find(|s| s.target() == target)
            .expect("some seed below 10k draws the target")
    }

    #[test]
    fn new_session_is_fresh() {
        let session = GuessSession::seeded(1);
        assert_eq!(session.attempts(), 0);
        assert!(!session.is_won());
        assert_eq!(session.last_feedback(), None);
        assert!((TARGET_MIN..=TARGET_MAX).contains(&session.target()));
    }

    #[test]
    fn same_seed_same_target() {
        assert_eq!(
            GuessSession::seeded(99).target(),
            GuessSession::seeded(99).target()
        );
    }

    #[test]
    fn entropy_session_in_range() {
        let session = GuessSession::from_entropy();
        assert!((TARGET_MIN..=TARGET_MAX).contains(&session.target()));
    }

    #[test]
    fn winning_scenario() {
        let mut session = session_with_target(50);

        assert_eq!(session.submit_guess("30"), Feedback::TooLow);
        assert_eq!(session.attempts(), 1);

        assert_eq!(session.submit_guess("70"), Feedback::TooHigh);
        assert_eq!(session.attempts(), 2);

        assert_eq!(
            session.submit_guess("50"),
            Feedback::Correct { attempts: 3 }
        );
        assert_eq!(session.attempts(), 3);
        assert!(session.is_won());
    }

    #[test]
    fn invalid_on_fresh_session() {
        let mut session = GuessSession::seeded(3);
        assert_eq!(session.submit_guess("xyz"), Feedback::Invalid);
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                feedback: Some(Feedback::Invalid),
                attempts: 0,
                won: false,
            }
        );
    }

    #[test]
    fn invalid_inputs_do_not_count() {
        let mut session = GuessSession::seeded(4);
        session.submit_guess("10");
        for raw in ["", "abc", "3.5.2", "  ", "99999999999999999999"] {
            assert_eq!(session.submit_guess(raw), Feedback::Invalid, "{raw:?}");
            assert_eq!(session.attempts(), 1, "{raw:?}");
        }
    }

    #[test]
    fn every_guess_counts_once_and_classifies() {
        let mut session = GuessSession::seeded(5);
        let target = session.target();

        let guesses = (-10..=110).chain([i64::MIN, i64::MAX]);
        for (i, guess) in guesses.enumerate() {
            let before = session.attempts();
            let feedback = session.submit_guess(&guess.to_string());
            assert_eq!(session.attempts(), before + 1);
            assert_eq!(before as usize, i);

            let expected = match guess.cmp(&target) {
                std::cmp::Ordering::Less => Feedback::TooLow,
                std::cmp::Ordering::Greater => Feedback::TooHigh,
                std::cmp::Ordering::Equal => Feedback::Correct {
                    attempts: session.attempts(),
                },
            };
            assert_eq!(feedback, expected, "guess {guess} vs {target}");
        }
    }

    #[test]
    fn won_is_sticky_until_reset() {
        let mut session = session_with_target(12);
        session.submit_guess("12");
        assert!(session.is_won());

        assert_eq!(session.submit_guess("1"), Feedback::TooLow);
        assert_eq!(session.submit_guess("nope"), Feedback::Invalid);
        assert!(session.is_won());
        assert_eq!(session.attempts(), 2);

        session.reset();
        assert!(!session.is_won());
    }

    #[test]
    fn reset_clears_state() {
        let mut session = GuessSession::seeded(8);
        session.submit_guess("1");
        session.submit_guess("100");
        session.reset();

        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                feedback: None,
                attempts: 0,
                won: false,
            }
        );
        assert!((TARGET_MIN..=TARGET_MAX).contains(&session.target()));
    }

    #[test]
    fn reset_targets_are_uniform() {
        const RESETS: usize = 10_000;
        let mut session = GuessSession::seeded(2024);
        let mut counts = [0usize; 100];

        for _ in 0..RESETS {
            session.reset();
            let target = session.target();
            assert!((TARGET_MIN..=TARGET_MAX).contains(&target));
            counts[(target - TARGET_MIN) as usize] += 1;
        }

        // Expected 100 per bucket, standard deviation about 10
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (50..=150).contains(&count),
                "value {} drawn {count} times",
                i + 1
            );
        }

        let expected = RESETS as f64 / 100.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        assert!(chi_square < 200.0, "chi-square {chi_square:.1}");
    }

    #[test]
    fn thread_rng_session() {
        let session = GuessSession::new(rand::rng());
        assert!((TARGET_MIN..=TARGET_MAX).contains(&session.target()));
    }
}
