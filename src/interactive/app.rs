//! TUI application state and logic

use crate::commands::{Controller, Reply};
use crate::puzzle::{CryptogramModel, PuzzleError};
use crate::quotes::QuoteSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::rc::Rc;

/// Messages kept in the message panel
const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App {
    pub controller: Controller,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_frequency: bool,
    pub should_quit: bool,
    pub input_mode: InputMode,
    source: Box<dyn QuoteSource>,
    rng: StdRng,
    solved: Rc<Cell<bool>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Solved,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_started: usize,
    pub puzzles_solved: usize,
    pub hints_used: usize,
}

impl App {
    /// Create the app with a first puzzle drawn from `source`
    ///
    /// # Errors
    /// Returns an error if `source` cannot supply a quote.
    pub fn new(mut source: Box<dyn QuoteSource>, mut rng: StdRng) -> Result<Self, PuzzleError> {
        let model = CryptogramModel::new(source.as_mut(), &mut rng)?;
        let solved = Rc::new(Cell::new(false));

        let mut app = Self {
            controller: Controller::new(model),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                puzzles_started: 1,
                ..Statistics::default()
            },
            show_frequency: false,
            should_quit: false,
            input_mode: InputMode::Playing,
            source,
            rng,
            solved,
        };
        app.watch_model();
        app.add_message(
            "Welcome! Type 'X = Y' to guess that X stands for Y.",
            MessageStyle::Info,
        );
        app.add_message(
            "F1: hint | F2: frequencies | Ctrl-N: new puzzle",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Mark the puzzle solved as soon as the model reports it
    fn watch_model(&mut self) {
        let solved = Rc::clone(&self.solved);
        solved.set(self.controller.is_game_over());
        self.controller
            .model_mut()
            .subscribe(move |model: &CryptogramModel| solved.set(model.is_complete()));
    }

    /// Run the command typed into the input line
    pub fn submit_input(&mut self) {
        let line = std::mem::take(&mut self.input_buffer);
        if line.trim().is_empty() {
            return;
        }

        match self.controller.handle_line(&line) {
            Reply::Exit => self.should_quit = true,
            Reply::Invalid(text) => {
                self.add_message(
                    &format!("{text} (got '{}')", line.trim()),
                    MessageStyle::Error,
                );
            }
            // Multi-line replies (help, freq) stay together as one message
            Reply::Message(text) => self.add_message(text.trim_end(), MessageStyle::Info),
            Reply::Silent => {
                self.add_message(
                    &format!("Guessed: {}", line.trim().to_uppercase()),
                    MessageStyle::Info,
                );
            }
        }

        self.check_solved();
    }

    /// Fill in one correct letter
    pub fn apply_hint(&mut self) {
        if let Some(hint) = self.controller.model_mut().apply_hint() {
            self.stats.hints_used += 1;
            self.add_message(&format!("Hint applied: {hint}"), MessageStyle::Info);
        }
        self.check_solved();
    }

    pub fn toggle_frequency(&mut self) {
        self.show_frequency = !self.show_frequency;
    }

    /// Replace the puzzle with a fresh one from the quote source
    pub fn new_puzzle(&mut self) {
        match CryptogramModel::new(self.source.as_mut(), &mut self.rng) {
            Ok(model) => {
                self.controller = Controller::new(model);
                self.watch_model();
                self.input_buffer.clear();
                self.input_mode = InputMode::Playing;
                self.stats.puzzles_started += 1;
                self.add_message("New puzzle started!", MessageStyle::Info);
                debug!("Started puzzle #{}", self.stats.puzzles_started);
            }
            Err(err) => {
                warn!("Could not start a new puzzle: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn check_solved(&mut self) {
        if self.solved.get() && self.input_mode == InputMode::Playing {
            self.input_mode = InputMode::Solved;
            self.stats.puzzles_solved += 1;
            self.add_message("🎉 You won! 🎉", MessageStyle::Success);
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        }
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

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_puzzle(),
                KeyCode::Char('f') => self.toggle_frequency(),
                KeyCode::Char('h') if self.input_mode == InputMode::Playing => self.apply_hint(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Solved => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::F(5) => self.new_puzzle(),
                KeyCode::F(2) => self.toggle_frequency(),
                // Puzzle is finished; ignore other keys
                _ => {}
            },
            InputMode::Playing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::F(1) => self.apply_hint(),
                KeyCode::F(2) => self.toggle_frequency(),
                KeyCode::F(5) => self.new_puzzle(),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_input(),
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

    // Run app
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
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
