use std::collections::BTreeMap;

use crate::game::quiz::definition::{Label, Question};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReviewEntry {
    pub number: usize,
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: Option<String>,
}

impl ReviewEntry {
    pub fn is_correct(&self) -> bool {
        self.correct_answer.is_none()
    }
}

/// `your_answer` is `None` when nothing was logged for a question or the logged
/// label names no choice. `correct_answer` is only filled in for wrong answers.
pub fn review_answers(questions: &[Question], answer_log: &BTreeMap<usize, Label>) -> Vec<ReviewEntry> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answer = answer_log.get(&index);
            let your_answer = answer
                .and_then(|label| question.choice_text(label))
                .map(str::to_owned);
            let correct_answer = if answer == Some(&question.correct_label) {
                None
            } else {
                Some(question.correct_answer().unwrap_or_default().to_owned())
            };
            ReviewEntry {
                number: index + 1,
                prompt: question.prompt.clone(),
                your_answer,
                correct_answer,
            }
        })
        .collect()
}
