//! Formatting utilities for terminal output

use crate::core::{Feedback, TARGET_MAX, TARGET_MIN};

/// Player-facing text for a feedback value
#[must_use]
pub fn feedback_message(feedback: Feedback) -> &'static str {
    match feedback {
        Feedback::TooLow => "Demasiado bajo. ¡Intenta con un número más alto!",
        Feedback::TooHigh => "Demasiado alto. ¡Intenta con un número más bajo!",
        Feedback::Correct { .. } => "¡Felicidades! Adivinaste el número.",
        Feedback::Invalid => "Por favor, introduce un número válido.",
    }
}

/// Win notification shown next to the celebration
#[must_use]
pub fn win_notice(attempts: u32) -> String {
    format!("¡Ganaste en {attempts} intentos!")
}

/// Instruction line naming the target range
#[must_use]
pub fn range_hint() -> String {
    format!("Adivina el número entre {TARGET_MIN} y {TARGET_MAX}")
}

/// Attempt counter label
#[must_use]
pub fn attempts_label(attempts: u32) -> String {
    format!("Intentos: {attempts}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
