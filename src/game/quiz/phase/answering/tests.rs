use super::*;
use crate::game::quiz::definition::RawQuestion;
use crate::output::mock::MockGameOutput;

struct Context {
    state: AnsweringState<MockGameOutput>,
    output: MockGameOutput,
}

fn build() -> Context {
    let question: Question = RawQuestion {
        question: "Which array method returns a new array?".to_owned(),
        a: "forEach".to_owned(),
        b: "map".to_owned(),
        c: Some("push".to_owned()),
        d: Some("sort".to_owned()),
        correct: "b".to_owned(),
    }
    .into();
    let output = MockGameOutput::new();
    let state = AnsweringState::new(3, 10, question, output.clone());
    Context { state, output }
}

#[test]
fn announces_question() {
    let mut ctx = build();
    ctx.state.on_begin();
    assert_eq!(
        ctx.output.flush(),
        [Message::QuestionBegins(3, 10, ctx.state.question.clone())]
    );
}

#[test]
fn never_ends_on_its_own() {
    let mut ctx = build();
    ctx.state.on_begin();
    ctx.state.on_tick(Duration::from_secs(3600));
    assert!(!ctx.state.is_over());
}

#[test]
fn submit_requires_a_selection() {
    let ctx = build();
    let error = ctx.state.submit().unwrap_err();
    assert_eq!(error.downcast_ref::<Notice>(), Some(&Notice::NoSelection));
}

#[test]
fn later_selection_replaces_earlier_one() {
    let mut ctx = build();
    ctx.state.select(Label::new("a"));
    ctx.state.select(Label::new("b"));
    assert_eq!(ctx.state.get_selection(), Some(&Label::new("b")));
    assert_eq!(
        ctx.output.flush(),
        [
            Message::ChoiceSelected(Label::new("a")),
            Message::ChoiceSelected(Label::new("b"))
        ]
    );
}

#[test]
fn judges_the_selected_choice() {
    let mut ctx = build();
    ctx.state.select(Label::new("a"));
    assert_eq!(
        ctx.state.submit().unwrap(),
        Submission {
            label: Label::new("a"),
            is_correct: false
        }
    );
    ctx.state.select(Label::new("b"));
    assert!(ctx.state.submit().unwrap().is_correct);
}
