use itertools::Itertools;
use log::error;
use parking_lot::RwLock;
use std::io::{self, Write};
use std::sync::Arc;

use crate::output::{GameOutput, Message};

#[cfg(test)]
mod tests;

const HELP: &str = "**📋 Commands**
- `list` shows the available quizzes
- `start <topic>` begins a quiz
- `a`, `b`, `c`, `d` (or `pick <letter>`) selects an answer
- `submit` locks in the selected answer
- `status` shows how far along you are
- `review` goes over your answers once the quiz is finished
- `celebrate` 🎉
- `leave` abandons the current quiz
- `quit` exits";

/// Writes messages to a shared text sink, stdout unless told otherwise.
#[derive(Clone)]
pub struct TerminalOutput {
    sink: Arc<RwLock<Box<dyn Write + Send + Sync>>>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput::with_sink(Box::new(io::stdout()))
    }

    pub fn with_sink(sink: Box<dyn Write + Send + Sync>) -> Self {
        TerminalOutput {
            sink: Arc::new(RwLock::new(sink)),
        }
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerCorrect => "✅ Correct!".into(),
            AnswerIncorrect(Some(answer)) => format!("❌ Incorrect! The correct answer is {}.", answer),
            AnswerIncorrect(None) => "❌ Incorrect!".into(),
            AnswersReview(entries) => {
                let mut message = "➡️ Review Your Answers: ❤️".to_owned();
                for entry in entries {
                    let mark = if entry.is_correct() { "✅" } else { "❌" };
                    message += &format!("\n\n{} Question {}: {}", mark, entry.number, entry.prompt);
                    message += &format!(
                        "\nYour Answer: {}",
                        entry.your_answer.as_deref().unwrap_or("No Answer")
                    );
                    if let Some(correct_answer) = &entry.correct_answer {
                        message += &format!("\nCorrect Answer: {}", correct_answer);
                    }
                }
                message
            }
            CelebrationBegins(confetti) => {
                let mut message = confetti.rows().join("\n");
                message += "\n🎉 Congratulations 🎉";
                message
            }
            CelebrationEnds => "The confetti settles.".into(),
            ChoiceSelected(label) => format!("Selected answer ({}). Use `submit` to lock it in.", label),
            Help => HELP.into(),
            Notice(notice) => format!("⚠️ {}", notice),
            QuestionBegins(index, total, question) => {
                let mut message = format!("➡️ Question {} of {} 🔥\n\n{}\n", index + 1, total, question.prompt);
                message += &question
                    .choices
                    .iter()
                    .map(|(label, text)| format!("  ({}) {}", label, text))
                    .join("\n");
                message
            }
            QuizBegins(title, total) => format!("**{}** quiz: {} questions. Good luck!", title, total),
            QuizLeft(title) => format!("You left the {} quiz.", title),
            QuizResults(title, score, total, elapsed) => format!(
                "You answered {} out of {} {} Questions Correctly.\nIn {}.",
                score, total, title, elapsed
            ),
            QuizStatus(status) => {
                let mut message = format!("**{}**", status.title);
                if let Some(results) = &status.results {
                    message += &format!(
                        ": finished with {} out of {} in {}.",
                        results.score, results.total, results.elapsed
                    );
                    if status.is_celebrating {
                        message += " 🎉";
                    }
                    return message;
                }
                if let Some(index) = status.question {
                    message += &format!(
                        ": question {} of {}, {} correct so far.",
                        index + 1,
                        status.total,
                        status.score
                    );
                }
                match (&status.selection, status.is_locked) {
                    (Some(label), true) => message += &format!("\nAnswer ({}) is locked in.", label),
                    (Some(label), false) => message += &format!("\nSelected answer ({}), not submitted yet.", label),
                    (None, _) => message += "\nNo answer selected yet.",
                }
                message
            }
            TopicList(topics) => {
                if topics.is_empty() {
                    return "No quizzes available.".into();
                }
                let mut message = "Available Quizzes:".to_owned();
                for (slug, title) in topics {
                    message += &format!("\n- {} (`start {}`)", title, slug);
                }
                message
            }
        }
    }
}

impl GameOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let content = self.interpret_message(message);
        let mut sink = self.sink.write();
        if let Err(e) = writeln!(sink, "{}\n", content).and_then(|_| sink.flush()) {
            error!("Error writing message: {:?}", e);
        }
    }
}
