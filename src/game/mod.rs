use anyhow::*;
use log::{debug, info};
use std::time::Duration;

pub mod catalog;
pub mod clock;
pub mod quiz;
pub mod settings;

use crate::game::catalog::Catalog;
use crate::game::clock::Clock;
use crate::game::quiz::definition::{Label, QuizDefinition};
use crate::game::quiz::Quiz;
use crate::output::{GameOutput, Message};


const NO_QUIZ_IN_PROGRESS: &str = "No quiz in progress, use `start <topic>` first";

enum Phase<O: GameOutput> {
    Menu,
    Quiz(Quiz<O>),
}

/// The active view: either the topic menu or one running quiz.
pub struct Game<O: GameOutput> {
    current_phase: Phase<O>,
    catalog: Catalog,
    settings: quiz::Settings,
    clock: Clock,
    output: O,
}

impl<O: GameOutput> Game<O> {
    pub fn new(catalog: Catalog, settings: quiz::Settings, clock: Clock, output: O) -> Self {
        Game {
            current_phase: Phase::Menu,
            catalog,
            settings,
            clock,
            output,
        }
    }

    pub fn get_quiz(&self) -> Option<&Quiz<O>> {
        match &self.current_phase {
            Phase::Quiz(quiz) => Some(quiz),
            Phase::Menu => None,
        }
    }

    fn get_quiz_mut(&mut self) -> Result<&mut Quiz<O>> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => Ok(quiz),
            Phase::Menu => Err(anyhow!(NO_QUIZ_IN_PROGRESS)),
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if let Phase::Quiz(quiz) = &mut self.current_phase {
            quiz.tick(dt);
        }
    }

    pub fn list_topics(&self) {
        let topics = self
            .catalog
            .get_topics()
            .iter()
            .map(|t| (t.slug.clone(), t.title.clone()))
            .collect();
        self.output.say(&Message::TopicList(topics));
    }

    pub fn help(&self) {
        self.output.say(&Message::Help);
    }

    pub fn notify(&self, error: &Error) {
        self.output.say(&Message::Notice(error.to_string()));
    }

    /// Starting a topic replaces any quiz in progress, but only once the new
    /// question bank has loaded.
    pub fn begin(&mut self, topic_name: &str) -> Result<()> {
        let topic = self.catalog.find(topic_name)?.clone();
        let definition = QuizDefinition::open(&topic.path)?;

        let mut settings = self.settings.clone();
        if let Some(review_mode) = definition.get_review_mode() {
            settings.review_mode = review_mode;
        }
        let title = definition.get_title().unwrap_or(topic.title.as_str()).to_owned();

        let quiz = Quiz::new(
            title,
            definition,
            settings,
            self.clock.clone(),
            self.output.clone(),
        )?;

        if let Phase::Quiz(previous) = &self.current_phase {
            debug!("Abandoning quiz: {}", previous.get_title());
        }
        info!("Starting quiz: {}", quiz.get_title());
        self.current_phase = Phase::Quiz(quiz);
        Ok(())
    }

    pub fn status(&self) -> Result<()> {
        let quiz = self.get_quiz().context(NO_QUIZ_IN_PROGRESS)?;
        self.output.say(&Message::QuizStatus(quiz.get_status()));
        Ok(())
    }

    pub fn leave(&mut self) -> Result<()> {
        let title = self.get_quiz_mut()?.get_title().to_owned();
        self.current_phase = Phase::Menu;
        info!("Left quiz: {}", title);
        self.output.say(&Message::QuizLeft(title));
        Ok(())
    }

    pub fn select(&mut self, label: Label) -> Result<()> {
        self.get_quiz_mut()?.select_choice(label)
    }

    pub fn submit(&mut self) -> Result<()> {
        self.get_quiz_mut()?.submit()
    }

    pub fn review(&mut self) -> Result<()> {
        self.get_quiz_mut()?.review_answers()?;
        Ok(())
    }

    pub fn celebrate(&mut self) -> Result<()> {
        self.get_quiz_mut()?.trigger_celebration()
    }
}
