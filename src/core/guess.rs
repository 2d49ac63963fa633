//! Guess parsing
//!
//! Turns raw user text into a numeric guess. Anything that is not a plain
//! base-10 integer is rejected with a [`GuessError`].

use std::fmt;
use std::num::IntErrorKind;

/// Error type for submissions that are not valid guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    Empty,
    NotANumber(String),
    OutOfRange(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Guess is empty"),
            Self::NotANumber(raw) => write!(f, "'{raw}' is not a whole number"),
            Self::OutOfRange(raw) => write!(f, "'{raw}' does not fit in a 64-bit integer"),
        }
    }
}

impl std::error::Error for GuessError {}

/// Parse a guess from user input
///
/// Surrounding whitespace is ignored and a single leading `+` or `-` is
/// accepted. The value is not checked against the target range.
///
/// # Errors
/// Returns `GuessError` if:
/// - The trimmed input is empty
/// - The input is not a base-10 integer (`"abc"`, `"3.5"`, `"1e3"`)
/// - The value overflows `i64`
///
/// # Examples
/// ```
/// use guessing_game::core::{parse_guess, GuessError};
///
/// assert_eq!(parse_guess(" 42\n"), Ok(42));
/// assert_eq!(parse_guess("-7"), Ok(-7));
/// assert_eq!(parse_guess(""), Err(GuessError::Empty));
/// assert!(parse_guess("3.5.2").is_err());
/// ```
pub fn parse_guess(raw: &str) -> Result<i64, GuessError> {
    let text = raw.trim();

    if text.is_empty() {
        return Err(GuessError::Empty);
    }

    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            GuessError::OutOfRange(text.to_string())
        }
        _ => GuessError::NotANumber(text.to_string()),
    })
}
