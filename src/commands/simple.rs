//! Simple interactive CLI mode
//!
//! Line-based game over stdin/stdout without the TUI.

use crate::core::{Feedback, GuessSession};
use crate::output::formatters::{attempts_label, range_hint};
use crate::output::{print_celebration, print_feedback};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on the process's stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(session: &mut GuessSession<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, stdin.lock(), stdout.lock())
}

/// Drive a session from any line source
///
/// Ends on `quit`, on end of input, or when the player declines a rematch.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_lines<R: Rng>(
    session: &mut GuessSession<R>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Juego de Adivinanza                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "{}", range_hint())?;
    writeln!(out, "Commands: 'new' for a new number, 'quit' to exit\n")?;

    loop {
        let Some(line) = prompt(&mut input, &mut out, "Tu adivinanza")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                session.reset();
                writeln!(out, "\n🔄 New number drawn!\n")?;
                continue;
            }
            _ => {}
        }

        let feedback = session.submit_guess(&line);
        print_feedback(&mut out, feedback)?;

        if let Feedback::Correct { attempts } = feedback {
            print_celebration(&mut out, attempts)?;

            let answer = prompt(&mut input, &mut out, "Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase();
            if matches!(answer.as_str(), "yes" | "y") {
                session.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            break;
        }

        writeln!(out, "{}\n", attempts_label(session.attempts()))?;
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
