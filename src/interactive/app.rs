//! TUI application state and logic

use crate::core::{Feedback, GuessSession};
use crate::output::formatters::{feedback_message, win_notice};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Longest text accepted in the input box
const MAX_INPUT_LEN: usize = 20;

/// Number of log lines kept for the messages panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GuessSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: GuessSession) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Type a number and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let raw = std::mem::take(&mut self.input_buffer);
        let feedback = self.session.submit_guess(&raw);

        match feedback {
            Feedback::Correct { attempts } => {
                self.input_mode = InputMode::WinCelebration;
                self.add_message(&win_notice(attempts), MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Feedback::Invalid => {
                self.add_message(feedback_message(feedback), MessageStyle::Error);
            }
            Feedback::TooLow | Feedback::TooHigh => {
                let text = format!("{raw}: {}", feedback_message(feedback));
                self.add_message(&text, MessageStyle::Info);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started! A new number was drawn.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Char('c') if ctrl => self.should_quit = true,
                KeyCode::Char('n') if ctrl => self.new_game(),
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            debug!(code = ?key.code, "key event");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting_counts_attempt() {
        let mut app = App::new(GuessSession::seeded(1));
        let low = (app.session.target() - 1000).to_string();

        type_text(&mut app, &low);

        assert_eq!(app.session.attempts(), 1);
        assert_eq!(app.session.last_feedback(), Some(Feedback::TooLow));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn invalid_input_logs_error() {
        let mut app = App::new(GuessSession::seeded(2));

        type_text(&mut app, "abc");

        assert_eq!(app.session.attempts(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("número válido"));
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut app = App::new(GuessSession::seeded(3));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "4");
    }

    #[test]
    fn input_length_is_capped() {
        let mut app = App::new(GuessSession::seeded(4));
        for _ in 0..50 {
            press(&mut app, KeyCode::Char('9'));
        }
        assert_eq!(app.input_buffer.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn win_enters_celebration_and_n_restarts() {
        let mut app = App::new(GuessSession::seeded(5));
        let target = app.session.target().to_string();

        type_text(&mut app, &target);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert!(app.session.is_won());
        assert!(app.messages.iter().any(|m| m.text == "¡Ganaste en 1 intentos!"));

        // Digits are ignored while celebrating
        press(&mut app, KeyCode::Char('7'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempts(), 0);
        assert!(!app.session.is_won());
    }

    #[test]
    fn ctrl_n_resets_mid_game() {
        let mut app = App::new(GuessSession::seeded(6));
        type_text(&mut app, "1000");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.session.last_feedback(), None);
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(GuessSession::seeded(7));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is text while guessing");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = App::new(GuessSession::seeded(8));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = App::new(GuessSession::seeded(9));
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }
}
