//! Feedback for a single guess submission

use std::cmp::Ordering;

/// Classification of one submission
///
/// `Correct` carries the attempt count at the moment of the win so the
/// caller can show it without querying the session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The guess is below the target
    TooLow,
    /// The guess is above the target
    TooHigh,
    /// The guess equals the target
    Correct { attempts: u32 },
    /// The submission did not parse as an integer
    Invalid,
}

impl Feedback {
    /// Compare `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::Feedback;
    ///
    /// assert_eq!(Feedback::compare(30, 50, 1), Feedback::TooLow);
    /// assert_eq!(Feedback::compare(70, 50, 2), Feedback::TooHigh);
    /// assert_eq!(Feedback::compare(50, 50, 3), Feedback::Correct { attempts: 3 });
    /// ```
    #[must_use]
    pub fn compare(guess: i64, target: i64, attempts: u32) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Correct { attempts },
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}
