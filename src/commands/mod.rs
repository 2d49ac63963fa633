//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{play_lines, run_simple};
pub use simulate::{
    Bisector, SimulationConfig, SimulationResult, play_session, run_simulation,
};
