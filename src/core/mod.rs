//! Core domain types for the guessing game
//!
//! Pure game logic with no terminal or I/O concerns. Everything a front end
//! needs is a [`GuessSession`] and the [`Feedback`] it returns.

mod feedback;
mod guess;
mod session;

pub use feedback::Feedback;
pub use guess::{GuessError, parse_guess};
pub use session::{GuessSession, SessionSnapshot, TARGET_MAX, TARGET_MIN};
