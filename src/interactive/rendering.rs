//! TUI rendering with ratatui
//!
//! Layout for the puzzle grid, frequency table and message panels.

use super::app::{App, InputMode, MessageStyle};
use crate::core::ALPHABET_LEN;
use crate::output::word_wrap;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Shown under cipher letters that have no guess yet
const BLANK: char = '_';

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Puzzle
            Constraint::Percentage(35), // Side panel
        ])
        .split(chunks[1]);

    render_puzzle(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔐 CRYPTOGRAMS")
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

/// Guessed letters above their cipher letters, one pair of rows per wrapped line
fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let width = usize::from(area.width.saturating_sub(2)).max(1);
    let model = app.controller.model();
    let progress_style = if app.input_mode == InputMode::Solved {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let progress = app.controller.progress_lines_with(BLANK, width);
    let encrypted = word_wrap(model.encrypted_text(), width);

    let mut lines = Vec::with_capacity(encrypted.len() * 3);
    for (guess_line, cipher_line) in progress.into_iter().zip(encrypted) {
        lines.push(Line::styled(guess_line, progress_style));
        lines.push(Line::styled(
            cipher_line,
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::default());
    }

    let title = if app.input_mode == InputMode::Solved {
        " Solved! "
    } else {
        " Puzzle "
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    if app.show_frequency {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(15), // Frequency table
                Constraint::Length(3),  // Progress gauge
                Constraint::Min(3),     // Messages
            ])
            .split(area);

        render_frequency(f, app, chunks[0]);
        render_progress(f, app, chunks[1]);
        render_messages(f, app, chunks[2]);
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress gauge
                Constraint::Min(3),    // Messages
            ])
            .split(area);

        render_progress(f, app, chunks[0]);
        render_messages(f, app, chunks[1]);
    }
}

/// Letter counts in two columns, A-M and N-Z
fn render_frequency(f: &mut Frame, app: &App, area: Rect) {
    let counts: Vec<(char, usize)> = app
        .controller
        .model()
        .letter_frequency()
        .entries()
        .map(|(&letter, &count)| (letter, count))
        .collect();
    let half = ALPHABET_LEN / 2;

    let count_span = |(letter, count): (char, usize)| {
        let style = if count == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        Span::styled(format!("{letter}: {count:<3}"), style)
    };

    let lines: Vec<Line> = (0..half)
        .map(|row| {
            let mut spans = vec![Span::raw(" "), count_span(counts[row])];
            if let Some(&right) = counts.get(row + half) {
                spans.push(Span::raw("    "));
                spans.push(count_span(right));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Frequencies ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (guessed, total) = app.controller.guess_progress();
    let percent = if total == 0 {
        100
    } else {
        (guessed * 100 / total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters Guessed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{guessed}/{total}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
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
        InputMode::Solved => (
            " 🎉 SOLVED! 🎉 | Press 'n' for a new puzzle or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Playing => (
            " Command (X = Y, replace X by Y, freq, hint, help, exit) ",
            app.input_buffer.as_str(),
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Puzzles: {} | Solved: {} | Hints: {}",
        app.stats.puzzles_started, app.stats.puzzles_solved, app.stats.hints_used
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if app.input_mode == InputMode::Solved {
        "q: Quit | n: New Puzzle | F2: Frequencies"
    } else {
        "Esc: Quit | F1: Hint | F2: Frequencies | F5/Ctrl-N: New Puzzle"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::FixedQuote;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
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
    fn renders_cipher_and_blanks() {
        let app =
            App::new(Box::new(FixedQuote::new("HI THERE")), StdRng::seed_from_u64(2)).unwrap();
        let screen = rendered(&app);

        let encrypted = app.controller.model().encrypted_text().to_string();
        assert!(screen.contains(&encrypted));
        assert!(screen.contains("__ _____"));
        assert!(screen.contains("Letters Guessed"));
        assert!(!screen.contains("Z: "));
    }

    #[test]
    fn renders_frequency_panel_when_shown() {
        let mut app =
            App::new(Box::new(FixedQuote::new("HI THERE")), StdRng::seed_from_u64(2)).unwrap();
        app.toggle_frequency();
        let screen = rendered(&app);

        assert!(screen.contains(" Frequencies "));
        assert!(screen.contains("A: "));
        assert!(screen.contains("Z: "));
    }
}
