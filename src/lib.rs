//! # textquiz
//!
//! Turns loosely formatted plain-text quiz documents into an interactive
//! terminal quiz. The parser tolerates wide variation in numbering,
//! option labeling and correct-answer marking, degrading through
//! fallback strategies instead of failing outright.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use textquiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Parse a quiz text file
//!     let quiz = Quiz::from_file("quiz.txt")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod parser;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Grading};
pub use data::{LoadError, read_file, read_stdin};
pub use models::{AppState, Choice, Question};
pub use parser::parse_questions;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error reading the quiz source.
    Load(LoadError),
    /// No questions were detected in the input by any parsing strategy.
    NoQuestions,
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load quiz text: {}", e),
            QuizError::NoQuestions => write!(f, "No questions detected in the input"),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::NoQuestions => None,
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a quiz from an already-parsed question set. An empty set is
    /// accepted here; starting it is rejected on the welcome screen.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            app: App::with_questions(questions),
        }
    }

    /// Parse free-form quiz text into a runnable quiz.
    ///
    /// Returns [`QuizError::NoQuestions`] when every parsing strategy
    /// comes up empty, so callers can report it before any terminal
    /// takeover happens.
    pub fn from_text(text: &str) -> Result<Self, QuizError> {
        let questions = parser::parse_questions(text);
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self::new(questions))
    }

    /// Load and parse a quiz text file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use textquiz::Quiz;
    ///
    /// let quiz = Quiz::from_file("quiz.txt").expect("Failed to load quiz");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let text = data::read_file(path)?;
        Self::from_text(&text)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.cancel_prompt_open() {
        return handle_cancel_prompt_input(app, key);
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Reveal => handle_reveal_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_cancel_prompt_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_cancel();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.dismiss_cancel();
            false
        }
        _ => false,
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_choice();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_choice();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.answer_selected();
            false
        }
        KeyCode::Char(digit @ '1'..='4') => {
            app.answer_at(digit as usize - '1' as usize);
            false
        }
        KeyCode::Esc => {
            app.request_cancel();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_reveal_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.advance();
            false
        }
        KeyCode::Esc => {
            app.request_cancel();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}
