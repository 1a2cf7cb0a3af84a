use thiserror::Error;

/// Rejected user actions. These never change the session and can be retried.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Notice {
    #[error("Please select an answer before submitting.")]
    NoSelection,
    #[error("You have already selected an answer. Please continue to the next question.")]
    AlreadyAnswered,
    #[error("The quiz is over.")]
    QuizOver,
    #[error("Finish the quiz first.")]
    QuizNotFinished,
    #[error("Answer review is not available for this quiz.")]
    ReviewUnavailable,
}
