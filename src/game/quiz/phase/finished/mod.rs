use log::debug;
use std::time::Duration;

use crate::game::quiz::celebration::{Celebration, Confetti};
use crate::game::quiz::elapsed::ElapsedTime;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::State;
use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Results {
    pub score: u32,
    pub total: usize,
    pub elapsed: ElapsedTime,
}

pub struct FinishedState<O> {
    title: String,
    results: Results,
    settings: Settings,
    celebration: Option<Celebration>,
    output: O,
}

impl<O: GameOutput> FinishedState<O> {
    pub fn new(title: String, results: Results, settings: Settings, output: O) -> Self {
        FinishedState {
            title,
            results,
            settings,
            celebration: None,
            output,
        }
    }

    pub fn get_results(&self) -> &Results {
        &self.results
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_some()
    }

    /// Restarts the countdown if a celebration is already running.
    pub fn celebrate(&mut self) {
        if self.is_celebrating() {
            debug!("Restarting celebration");
        }
        self.celebration = Some(Celebration::new(self.settings.celebration_duration));
        let confetti = Confetti::scatter(self.settings.viewport, &mut rand::thread_rng());
        self.output.say(&Message::CelebrationBegins(confetti));
    }
}

impl<O: GameOutput> State for FinishedState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizResults(
            self.title.clone(),
            self.results.score,
            self.results.total,
            self.results.elapsed,
        ));
    }

    fn on_tick(&mut self, dt: Duration) {
        let celebration_ended = match &mut self.celebration {
            Some(celebration) => {
                celebration.tick(dt);
                celebration.is_over()
            }
            None => false,
        };
        if celebration_ended {
            self.celebration = None;
            self.output.say(&Message::CelebrationEnds);
        }
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
