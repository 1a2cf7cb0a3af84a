use anyhow::*;
use std::time::Duration;

use crate::game::quiz::definition::{Label, Question};
use crate::game::quiz::notice::Notice;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub label: Label,
    pub is_correct: bool,
}

pub struct AnsweringState<O> {
    index: usize,
    total: usize,
    question: Question,
    selection: Option<Label>,
    output: O,
}

impl<O: GameOutput> AnsweringState<O> {
    pub fn new(index: usize, total: usize, question: Question, output: O) -> Self {
        AnsweringState {
            index,
            total,
            question,
            selection: None,
            output,
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_selection(&self) -> Option<&Label> {
        self.selection.as_ref()
    }

    pub fn select(&mut self, label: Label) {
        self.output.say(&Message::ChoiceSelected(label.clone()));
        self.selection = Some(label);
    }

    pub fn submit(&self) -> Result<Submission> {
        let label = self.selection.clone().ok_or(Notice::NoSelection)?;
        let is_correct = self.question.is_answer_correct(&label);
        Ok(Submission { label, is_correct })
    }
}

impl<O: GameOutput> State for AnsweringState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuestionBegins(
            self.index,
            self.total,
            self.question.clone(),
        ));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
