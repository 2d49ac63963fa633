//! Guessing Game
//!
//! Guess a secret number between 1 and 100 with too-high / too-low feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use guessing_game::core::{Feedback, GuessSession};
//!
//! // Seeded sessions draw the same target every time
//! let mut session = GuessSession::seeded(42);
//! let target = session.target();
//!
//! assert_eq!(session.submit_guess("abc"), Feedback::Invalid);
//! assert_eq!(session.attempts(), 0);
//!
//! let feedback = session.submit_guess(&target.to_string());
//! assert_eq!(feedback, Feedback::Correct { attempts: 1 });
//! assert!(session.is_won());
//! ```

// Core domain types
pub mod core;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
