use super::*;
use crate::game::quiz::definition::{Label, Question, RawQuestion};
use crate::game::quiz::elapsed::ElapsedTime;
use crate::game::quiz::review::ReviewEntry;
use crate::game::quiz::{Results, Status};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<RwLock<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.read().clone()).unwrap()
    }
}

fn build() -> (TerminalOutput, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let output = TerminalOutput::with_sink(Box::new(buffer.clone()));
    (output, buffer)
}

fn question() -> Question {
    RawQuestion {
        question: "Which keyword declares a constant?".to_owned(),
        a: "var".to_owned(),
        b: "let".to_owned(),
        c: Some("const".to_owned()),
        d: None,
        correct: "c".to_owned(),
    }
    .into()
}

#[test]
fn renders_question_with_choices() {
    let (output, buffer) = build();
    output.say(&Message::QuestionBegins(2, 10, question()));
    let text = buffer.contents();
    assert!(text.contains("Question 3 of 10"));
    assert!(text.contains("Which keyword declares a constant?"));
    assert!(text.contains("(a) var"));
    assert!(text.contains("(c) const"));
    assert!(!text.contains("(d)"));
}

#[test]
fn renders_results() {
    let (output, buffer) = build();
    output.say(&Message::QuizResults(
        "OOP".to_owned(),
        8,
        10,
        ElapsedTime::default(),
    ));
    assert!(buffer
        .contents()
        .contains("You answered 8 out of 10 OOP Questions Correctly.\nIn 0 Minutes and 0 Seconds."));
}

#[test]
fn renders_review_entries() {
    let (output, buffer) = build();
    output.say(&Message::AnswersReview(vec![
        ReviewEntry {
            number: 1,
            prompt: "First?".to_owned(),
            your_answer: Some("yes".to_owned()),
            correct_answer: None,
        },
        ReviewEntry {
            number: 2,
            prompt: "Second?".to_owned(),
            your_answer: None,
            correct_answer: Some("no".to_owned()),
        },
    ]));
    let text = buffer.contents();
    assert!(text.contains("✅ Question 1: First?\nYour Answer: yes\n"));
    assert!(text.contains("❌ Question 2: Second?"));
    assert!(text.contains("Question 2: Second?\nYour Answer: No Answer\nCorrect Answer: no"));
    assert_eq!(text.matches("Correct Answer").count(), 1);
}

#[test]
fn renders_feedback_and_selection() {
    let (output, buffer) = build();
    output.say(&Message::ChoiceSelected(Label::new("b")));
    output.say(&Message::AnswerIncorrect(Some("const".to_owned())));
    let text = buffer.contents();
    assert!(text.contains("Selected answer (b)"));
    assert!(text.contains("The correct answer is const."));
}

#[test]
fn renders_empty_topic_list() {
    let (output, buffer) = build();
    output.say(&Message::TopicList(vec![]));
    assert!(buffer.contents().contains("No quizzes available."));
}

fn status() -> Status {
    Status {
        title: "OOP".to_owned(),
        score: 1,
        total: 10,
        question: Some(2),
        selection: Some(Label::new("b")),
        is_locked: true,
        results: None,
        is_celebrating: false,
    }
}

#[test]
fn renders_status_of_a_question() {
    let (output, buffer) = build();
    output.say(&Message::QuizStatus(status()));
    output.say(&Message::QuizStatus(Status {
        selection: None,
        is_locked: false,
        ..status()
    }));
    let text = buffer.contents();
    assert!(text.contains("**OOP**: question 3 of 10, 1 correct so far.\nAnswer (b) is locked in."));
    assert!(text.contains("No answer selected yet."));
}

#[test]
fn renders_status_of_a_finished_quiz() {
    let (output, buffer) = build();
    output.say(&Message::QuizStatus(Status {
        question: None,
        selection: None,
        is_locked: false,
        results: Some(Results {
            score: 8,
            total: 10,
            elapsed: ElapsedTime::default(),
        }),
        is_celebrating: true,
        ..status()
    }));
    assert!(buffer
        .contents()
        .contains("**OOP**: finished with 8 out of 10 in 0 Minutes and 0 Seconds. 🎉"));
}
