//! Terminal output formatting
//!
//! Player-facing strings and coloured printing for the CLI modes.

pub mod display;
pub mod formatters;

pub use display::{print_celebration, print_feedback, print_simulation_result};
