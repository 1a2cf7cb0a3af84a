use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;


#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Label(String);

impl Label {
    pub fn new(label: &str) -> Self {
        Label(label.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Label::new(label)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const CHOICE_LABELS: [&str; 4] = ["a", "b", "c", "d"];

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestion {
    pub question: String,
    pub a: String,
    pub b: String,
    #[serde(default)]
    pub c: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
    pub correct: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub choices: BTreeMap<Label, String>,
    pub correct_label: Label,
}

impl Question {
    pub fn is_answer_correct(&self, label: &Label) -> bool {
        *label == self.correct_label
    }

    pub fn choice_text(&self, label: &Label) -> Option<&str> {
        self.choices.get(label).map(|text| text.as_str())
    }

    pub fn correct_answer(&self) -> Option<&str> {
        self.choice_text(&self.correct_label)
    }

    // Malformed banks are accepted as-is, this only lets the loader warn about them.
    pub fn has_valid_answer(&self) -> bool {
        self.choices.contains_key(&self.correct_label)
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        let texts = vec![
            Some(raw_question.a),
            Some(raw_question.b),
            raw_question.c,
            raw_question.d,
        ];

        // Blank choices are omitted so banks can have fewer than four options
        let choices = CHOICE_LABELS
            .iter()
            .zip(texts)
            .filter_map(|(label, text)| match text {
                Some(text) if !text.trim().is_empty() => Some((Label::new(label), text)),
                _ => None,
            })
            .collect();

        Question {
            prompt: raw_question.question,
            choices,
            correct_label: Label::new(&raw_question.correct),
        }
    }
}
