use std::time::Duration;

use crate::game::quiz::definition::Question;
use crate::game::quiz::phase::Submission;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};


/// Shows feedback for a submitted answer, then waits before the quiz moves on.
pub struct LockedState<O> {
    index: usize,
    question: Question,
    submission: Submission,
    time_elapsed: Duration,
    time_to_wait: Duration,
    output: O,
}

impl<O: GameOutput> LockedState<O> {
    pub fn new(
        index: usize,
        question: Question,
        submission: Submission,
        duration: Duration,
        output: O,
    ) -> Self {
        LockedState {
            index,
            question,
            submission,
            time_elapsed: Duration::default(),
            time_to_wait: duration,
            output,
        }
    }

    pub fn get_index(&self) -> usize {
        self.index
    }

    pub fn get_submission(&self) -> &Submission {
        &self.submission
    }
}

impl<O: GameOutput> State for LockedState<O> {
    fn on_begin(&mut self) {
        if self.submission.is_correct {
            self.output.say(&Message::AnswerCorrect);
        } else {
            self.output.say(&Message::AnswerIncorrect(
                self.question.correct_answer().map(str::to_owned),
            ));
        }
    }

    fn on_tick(&mut self, dt: Duration) {
        self.time_elapsed += dt;
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        self.time_elapsed >= self.time_to_wait
    }
}
