use serde::{Deserialize, Serialize};

/// A single labeled answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: char,
    pub text: String,
}

/// One multiple-choice question with a single correct label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<Choice>,
    pub correct: char,
}

impl Question {
    /// Builds a question, enforcing the model invariants: 2 to 4 choices,
    /// labels in `A..=D` and unique, and `correct` present among them.
    /// Candidates violating any of these yield `None` and never enter a
    /// question set.
    pub fn checked(text: String, choices: Vec<Choice>, correct: char) -> Option<Self> {
        if !(2..=4).contains(&choices.len()) {
            return None;
        }
        if choices.iter().any(|c| !('A'..='D').contains(&c.label)) {
            return None;
        }
        let mut labels: Vec<char> = choices.iter().map(|c| c.label).collect();
        labels.sort_unstable();
        labels.dedup();
        if labels.len() != choices.len() {
            return None;
        }
        if !choices.iter().any(|c| c.label == correct) {
            return None;
        }
        Some(Self {
            text,
            choices,
            correct,
        })
    }

    /// Text of the correct choice, for answer feedback.
    pub fn correct_text(&self) -> &str {
        self.choices
            .iter()
            .find(|c| c.label == self.correct)
            .map(|c| c.text.as_str())
            .unwrap_or("")
    }
}
