use anyhow::*;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::BTreeMap;
use std::time::Duration;

use self::definition::*;
use self::phase::*;
use self::review::ReviewEntry;
use crate::game::clock::Clock;
use crate::output::{GameOutput, Message};

pub mod celebration;
pub mod definition;
pub mod elapsed;
pub mod notice;
mod phase;
pub mod review;
pub mod settings;

pub use self::notice::Notice;
pub use self::phase::Results;
pub use self::settings::Settings;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O> {
    Answering(AnsweringState<O>),
    Locked(LockedState<O>),
    Finished(FinishedState<O>),
}

impl<O: GameOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Answering(s) => s,
            Phase::Locked(s) => s,
            Phase::Finished(s) => s,
        }
    }

    fn get_name(&self) -> &'static str {
        match self {
            Phase::Answering(_) => "answering",
            Phase::Locked(_) => "locked",
            Phase::Finished(_) => "finished",
        }
    }
}

/// Where a session stands, as reported by the `status` command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Status {
    pub title: String,
    pub score: u32,
    pub total: usize,
    pub question: Option<usize>,
    pub selection: Option<Label>,
    pub is_locked: bool,
    pub results: Option<Results>,
    pub is_celebrating: bool,
}

/// One attempt at a quiz topic, from the first question to the results screen.
pub struct Quiz<O: GameOutput> {
    title: String,
    questions: Vec<Question>,
    settings: Settings,
    clock: Clock,
    current_phase: Phase<O>,
    score: u32,
    answer_log: BTreeMap<usize, Label>,
    started_at: DateTime<Utc>,
    output: O,
}

impl<O: GameOutput> Quiz<O> {
    pub fn new(
        title: String,
        definition: QuizDefinition,
        settings: Settings,
        clock: Clock,
        output: O,
    ) -> Result<Quiz<O>> {
        let questions = definition.get_questions().clone();
        let first_question = questions.first().cloned().context("Quiz has no questions")?;
        let first_state = AnsweringState::new(0, questions.len(), first_question, output.clone());

        let mut quiz = Quiz {
            title,
            started_at: clock.now(),
            current_phase: Phase::Answering(first_state),
            score: 0,
            answer_log: BTreeMap::new(),
            questions,
            settings,
            clock,
            output,
        };

        quiz.output.say(&Message::QuizBegins(
            quiz.title.clone(),
            quiz.questions.len(),
        ));
        quiz.current_phase.get_state().on_begin();
        Ok(quiz)
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_score(&self) -> u32 {
        self.score
    }

    pub fn get_total(&self) -> usize {
        self.questions.len()
    }

    #[cfg(test)]
    pub fn get_started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[cfg(test)]
    pub fn get_answer_log(&self) -> &BTreeMap<usize, Label> {
        &self.answer_log
    }

    /// Index of the question being answered, `None` once the quiz is finished.
    pub fn get_current_index(&self) -> Option<usize> {
        match &self.current_phase {
            Phase::Answering(s) => Some(s.get_index()),
            Phase::Locked(s) => Some(s.get_index()),
            Phase::Finished(_) => None,
        }
    }

    pub fn get_selection(&self) -> Option<&Label> {
        match &self.current_phase {
            Phase::Answering(s) => s.get_selection(),
            Phase::Locked(s) => Some(&s.get_submission().label),
            Phase::Finished(_) => None,
        }
    }

    pub fn get_results(&self) -> Option<&Results> {
        match &self.current_phase {
            Phase::Finished(s) => Some(s.get_results()),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        match self.current_phase {
            Phase::Locked(_) => true,
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn is_over(&self) -> bool {
        match self.current_phase {
            Phase::Finished(_) => true,
            _ => false,
        }
    }

    pub fn is_celebrating(&self) -> bool {
        match &self.current_phase {
            Phase::Finished(s) => s.is_celebrating(),
            _ => false,
        }
    }

    pub fn get_status(&self) -> Status {
        Status {
            title: self.get_title().to_owned(),
            score: self.get_score(),
            total: self.get_total(),
            question: self.get_current_index(),
            selection: self.get_selection().cloned(),
            is_locked: self.is_locked(),
            results: self.get_results().copied(),
            is_celebrating: self.is_celebrating(),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn select_choice(&mut self, label: Label) -> Result<()> {
        match &mut self.current_phase {
            Phase::Answering(state) => {
                state.select(label);
                Ok(())
            }
            Phase::Locked(_) => Err(Notice::AlreadyAnswered.into()),
            Phase::Finished(_) => Err(Notice::QuizOver.into()),
        }
    }

    pub fn submit(&mut self) -> Result<()> {
        let (index, submission) = match &self.current_phase {
            Phase::Answering(state) => (state.get_index(), state.submit()?),
            Phase::Locked(_) => return Err(Notice::AlreadyAnswered.into()),
            Phase::Finished(_) => return Err(Notice::QuizOver.into()),
        };

        if submission.is_correct {
            self.score += 1;
        }
        self.answer_log.insert(index, submission.label.clone());
        debug!(
            "Question {} answered with `{}` (correct: {})",
            index + 1,
            submission.label,
            submission.is_correct
        );

        if self.settings.review_mode {
            let question = self
                .questions
                .get(index)
                .cloned()
                .context("Question not found")?;
            let state = LockedState::new(
                index,
                question,
                submission,
                self.settings.advance_delay,
                self.output.clone(),
            );
            self.set_current_phase(Phase::Locked(state));
        } else {
            self.advance();
        }

        Ok(())
    }

    pub fn trigger_celebration(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Finished(state) => {
                state.celebrate();
                Ok(())
            }
            _ => Err(Notice::QuizNotFinished.into()),
        }
    }

    pub fn review_answers(&self) -> Result<Vec<ReviewEntry>> {
        if !self.settings.review_mode {
            return Err(Notice::ReviewUnavailable.into());
        }
        match &self.current_phase {
            Phase::Finished(_) => {
                let entries = review::review_answers(&self.questions, &self.answer_log);
                self.output.say(&Message::AnswersReview(entries.clone()));
                Ok(entries)
            }
            _ => Err(Notice::QuizNotFinished.into()),
        }
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        self.current_phase.get_state().on_end();
        debug!(
            "Quiz phase: {} -> {}",
            self.current_phase.get_name(),
            phase.get_name()
        );
        self.current_phase = phase;
        self.current_phase.get_state().on_begin();
    }

    fn advance(&mut self) {
        let index = match self.get_current_index() {
            Some(index) => index,
            None => return,
        };
        match self.questions.get(index + 1).cloned() {
            Some(question) => {
                let state = AnsweringState::new(
                    index + 1,
                    self.questions.len(),
                    question,
                    self.output.clone(),
                );
                self.set_current_phase(Phase::Answering(state));
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        let finished_at = self.clock.now();
        let results = Results {
            score: self.score,
            total: self.questions.len(),
            elapsed: elapsed::ElapsedTime::between(self.started_at, finished_at),
        };
        let state = FinishedState::new(
            self.title.clone(),
            results,
            self.settings.clone(),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Finished(state));
    }
}
