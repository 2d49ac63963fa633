//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Feedback;
use crate::output::formatters::{attempts_label, feedback_message, range_hint, win_notice};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

const SUCCESS: Color = Color::Rgb(76, 175, 80);
const WARNING: Color = Color::Rgb(255, 112, 67);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 Juego de Adivinanza")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.session.snapshot();

    let feedback_line = match snapshot.feedback {
        None => Line::from(""),
        Some(feedback) => {
            let color = match feedback {
                Feedback::Correct { .. } => SUCCESS,
                Feedback::Invalid => Color::Red,
                Feedback::TooLow | Feedback::TooHigh => WARNING,
            };
            Line::from(Span::styled(
                feedback_message(feedback),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
    };

    let mut content = vec![
        Line::from(range_hint()),
        Line::from(""),
        feedback_line,
        Line::from(""),
        Line::from(Span::styled(
            attempts_label(snapshot.attempts),
            Style::default().fg(Color::Yellow),
        )),
    ];

    if snapshot.won {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            "🎉 🎊 ✨ 🎉 🎊 ✨ 🎉 🎊 ✨ 🎉",
            Style::default().fg(SUCCESS),
        )));
    }

    let border = if snapshot.won { SUCCESS } else { Color::White };
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(SUCCESS),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            win_notice(app.session.attempts()),
            SUCCESS,
        ),
        InputMode::Guessing => (
            " Tu Adivinanza | Enter to guess ".to_string(),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::WinCelebration => "n: New Game | q: Quit",
        InputMode::Guessing => "Enter: Guess | Ctrl+N: New Number | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessSession;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_hint_and_counter() {
        let app = App::new(GuessSession::seeded(1));
        let screen = rendered(&app);
        assert!(screen.contains("Intentos: 0"));
        assert!(screen.contains("Tu Adivinanza"));
    }

    #[test]
    fn renders_celebration_after_win() {
        let mut app = App::new(GuessSession::seeded(2));
        app.input_buffer = app.session.target().to_string();
        app.submit_guess();

        let screen = rendered(&app);
        assert!(screen.contains("CONGRATULATIONS"));
        assert!(screen.contains("Intentos: 1"));
    }
}
