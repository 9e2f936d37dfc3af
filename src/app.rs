use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::models::{AppState, Question};

/// Outcome of the most recently graded answer, kept for the feedback
/// line on the reveal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grading {
    pub selected: char,
    pub is_correct: bool,
}

/// The quiz session: owns the question set and is the only place that
/// mutates it after parsing (question-order shuffle at start, per-question
/// choice-order shuffle before a question is first shown).
///
/// Transitions are guarded by the current state; a call made in the wrong
/// state is a no-op rather than an error.
pub struct App {
    pub state: AppState,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    selected_choice: usize,
    last_grading: Option<Grading>,
    cancel_prompt: bool,
    status: Option<String>,
}

impl App {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            state: AppState::Welcome,
            questions,
            current_index: 0,
            score: 0,
            selected_choice: 0,
            last_grading: None,
            cancel_prompt: false,
            status: None,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_choice(&self) -> usize {
        self.selected_choice
    }

    pub fn last_grading(&self) -> Option<Grading> {
        self.last_grading
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn cancel_prompt_open(&self) -> bool {
        self.cancel_prompt
    }

    /// Fraction of the quiz completed, for the progress bar.
    pub fn progress_ratio(&self) -> f64 {
        match self.state {
            AppState::Result => 1.0,
            _ if self.questions.is_empty() => 0.0,
            _ => self.current_index as f64 / self.questions.len() as f64,
        }
    }

    pub fn select_next_choice(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        let count = self.current_question().choices.len();
        self.selected_choice = (self.selected_choice + 1) % count;
    }

    pub fn select_previous_choice(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        let count = self.current_question().choices.len();
        self.selected_choice = (self.selected_choice + count - 1) % count;
    }

    /// Starts the session. With an empty set this stays on the welcome
    /// screen and records the user-facing message instead.
    pub fn start_quiz(&mut self) {
        if self.state != AppState::Welcome {
            return;
        }
        if self.questions.is_empty() {
            self.status = Some("No questions detected in the input.".to_string());
            return;
        }

        let mut rng = thread_rng();
        self.questions.shuffle(&mut rng);
        for question in &mut self.questions {
            question.choices.shuffle(&mut rng);
        }

        self.current_index = 0;
        self.score = 0;
        self.selected_choice = 0;
        self.last_grading = None;
        self.status = None;
        self.state = AppState::Quiz;
    }

    /// Grades the choice at the displayed position. Positions past the
    /// current question's choice count are ignored.
    pub fn answer_at(&mut self, index: usize) {
        if self.state != AppState::Quiz {
            return;
        }
        let label = self.current_question().choices.get(index).map(|c| c.label);
        if let Some(label) = label {
            self.answer(label);
        }
    }

    /// Grades the choice under the cursor.
    pub fn answer_selected(&mut self) {
        self.answer_at(self.selected_choice);
    }

    /// Grades an answer by label. On the last question the session goes
    /// straight to the result screen; otherwise feedback is shown first.
    pub fn answer(&mut self, label: char) {
        if self.state != AppState::Quiz {
            return;
        }
        let question = &self.questions[self.current_index];
        if !question.choices.iter().any(|c| c.label == label) {
            return;
        }

        let is_correct = label == question.correct;
        if is_correct {
            self.score += 1;
        }
        self.last_grading = Some(Grading {
            selected: label,
            is_correct,
        });

        self.state = if self.current_index + 1 == self.questions.len() {
            AppState::Result
        } else {
            AppState::Reveal
        };
    }

    /// Moves on from the feedback screen to the next question, shuffling
    /// its choice order before it is shown.
    pub fn advance(&mut self) {
        if self.state != AppState::Reveal {
            return;
        }
        self.current_index += 1;
        self.questions[self.current_index]
            .choices
            .shuffle(&mut thread_rng());
        self.selected_choice = 0;
        self.last_grading = None;
        self.state = AppState::Quiz;
    }

    /// Opens the cancel confirmation prompt. Only an in-progress session
    /// has anything to discard.
    pub fn request_cancel(&mut self) {
        if matches!(self.state, AppState::Quiz | AppState::Reveal) {
            self.cancel_prompt = true;
        }
    }

    pub fn dismiss_cancel(&mut self) {
        self.cancel_prompt = false;
    }

    /// Discards the session after the prompt was confirmed.
    pub fn confirm_cancel(&mut self) {
        if self.cancel_prompt {
            self.cancel_prompt = false;
            self.restart();
        }
    }

    /// Discards all session state and returns to the welcome screen.
    pub fn restart(&mut self) {
        self.state = AppState::Welcome;
        self.current_index = 0;
        self.score = 0;
        self.selected_choice = 0;
        self.last_grading = None;
        self.cancel_prompt = false;
        self.status = None;
    }
}
