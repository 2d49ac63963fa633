//! Display functions for game events and command results

use super::formatters::{create_progress_bar, feedback_message, win_notice};
use crate::commands::SimulationResult;
use crate::core::{Feedback, TARGET_MIN};
use colored::Colorize;
use std::io::{self, Write};

/// Print the message for one submission
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_feedback(out: &mut impl Write, feedback: Feedback) -> io::Result<()> {
    let message = feedback_message(feedback);
    let styled = match feedback {
        Feedback::Correct { .. } => message.green().bold(),
        Feedback::Invalid => message.red(),
        Feedback::TooLow | Feedback::TooHigh => message.truecolor(255, 112, 67),
    };
    writeln!(out, "{styled}")
}

/// Print the win banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_celebration(out: &mut impl Write, attempts: u32) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "      🎉 🎊 ✨  ¡ N Ú M E R O   A D I V I N A D O !  ✨ 🎊 🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "\n  {}\n", win_notice(attempts).bright_yellow().bold())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Bisection player:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    if result.unsolved > 0 {
        println!(
            "   Unsolved:         {}",
            result.unsolved.to_string().red().bold()
        );
    }
    println!(
        "   Average attempts: {}",
        format!("{:.2}", result.average_attempts)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_attempts.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_attempts.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Attempt distribution:".bright_cyan().bold());
    for attempts in 1..=result.max_attempts {
        if let Some(&count) = result.distribution.get(&attempts) {
            let pct = (count as f64 / result.games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {attempts}: {} {count:6} ({pct:5.1}%)", bar.green());
        }
    }

    println!("\n🎲 {}", "Target spread:".bright_cyan().bold());
    let peak = result.target_counts.iter().copied().max().unwrap_or(0);
    for (row, chunk) in result.target_counts.chunks(10).enumerate() {
        let low = TARGET_MIN + (row * 10) as i64;
        let high = low + chunk.len() as i64 - 1;
        let cells: String = chunk
            .iter()
            .map(|&count| spark(count, peak))
            .collect();
        println!("   {low:3}-{high:<3} {}", cells.cyan());
    }
    println!(
        "   Max deviation from uniform: {}",
        format!("{:.1}%", result.max_deviation * 100.0).bright_yellow()
    );
}

fn spark(count: usize, peak: usize) -> char {
    const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if peak == 0 {
        return LEVELS[0];
    }
    LEVELS[(count * (LEVELS.len() - 1)) / peak]
}
