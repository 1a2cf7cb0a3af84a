use crate::game::quiz::celebration::Confetti;
use crate::game::quiz::definition::{Label, Question};
use crate::game::quiz::elapsed::ElapsedTime;
use crate::game::quiz::review::ReviewEntry;
use crate::game::quiz::Status;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerCorrect,
    AnswerIncorrect(Option<String>),
    AnswersReview(Vec<ReviewEntry>),
    CelebrationBegins(Confetti),
    CelebrationEnds,
    ChoiceSelected(Label),
    Help,
    Notice(String),
    QuestionBegins(usize, usize, Question),
    QuizBegins(String, usize),
    QuizLeft(String),
    QuizResults(String, u32, usize, ElapsedTime),
    QuizStatus(Status),
    TopicList(Vec<(String, String)>),
}

pub trait GameOutput: Clone {
    fn say(&self, message: &Message);
}
