mod question;

pub use question::{Choice, Question};

/// Which screen the application is currently showing.
///
/// `Reveal` sits between answering and advancing: the answer has been
/// graded and feedback is on screen, but the next question has not been
/// shown yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Reveal,
    Result,
}
