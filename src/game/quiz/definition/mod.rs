use anyhow::*;
use log::warn;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod question;

pub use question::{Label, Question, RawQuestion};


#[derive(Deserialize)]
#[serde(untagged)]
enum RawDefinition {
    Questions(Vec<RawQuestion>),
    Topic {
        title: Option<String>,
        review: Option<bool>,
        questions: Vec<RawQuestion>,
    },
}

#[derive(Clone, Debug, Default)]
pub struct QuizDefinition {
    title: Option<String>,
    review_mode: Option<bool>,
    questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn new(questions: Vec<Question>) -> QuizDefinition {
        QuizDefinition {
            questions,
            ..Default::default()
        }
    }

    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open quiz file {}", source.display()))?;
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        let definition = match extension.as_deref() {
            Some("json") => QuizDefinition::from_json(file),
            Some("csv") => QuizDefinition::from_csv(file),
            _ => Err(anyhow!("Unsupported quiz file format")),
        }
        .with_context(|| format!("Could not read quiz file {}", source.display()))?;

        for (index, question) in definition.questions.iter().enumerate() {
            if !question.has_valid_answer() {
                warn!(
                    "Question {} of {} has no choice labelled `{}`",
                    index + 1,
                    source.display(),
                    question.correct_label
                );
            }
        }

        Ok(definition)
    }

    pub fn from_json<R: Read>(reader: R) -> Result<QuizDefinition> {
        let raw_definition: RawDefinition = serde_json::from_reader(reader)?;
        let definition = match raw_definition {
            RawDefinition::Questions(questions) => {
                QuizDefinition::new(questions.into_iter().map(Question::from).collect())
            }
            RawDefinition::Topic {
                title,
                review,
                questions,
            } => QuizDefinition {
                title,
                review_mode: review,
                questions: questions.into_iter().map(Question::from).collect(),
            },
        };
        Ok(definition)
    }

    pub fn from_csv<R: Read>(reader: R) -> Result<QuizDefinition> {
        let mut questions = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question?;
            questions.push(raw_question.into());
        }
        Ok(QuizDefinition::new(questions))
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_review_mode(&self) -> Option<bool> {
        self.review_mode
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }
}
