use super::*;
use crate::output::mock::MockGameOutput;

fn build() -> (FinishedState<MockGameOutput>, MockGameOutput) {
    let output = MockGameOutput::new();
    let results = Results {
        score: 7,
        total: 10,
        elapsed: ElapsedTime::default(),
    };
    let settings = Settings {
        celebration_duration: Duration::from_secs(30),
        ..Default::default()
    };
    let state = FinishedState::new("OOP".to_owned(), results, settings, output.clone());
    (state, output)
}

fn is_celebration_begins(message: &Message) -> bool {
    match message {
        Message::CelebrationBegins(_) => true,
        _ => false,
    }
}

#[test]
fn announces_results() {
    let (mut state, output) = build();
    state.on_begin();
    assert_eq!(
        output.flush(),
        [Message::QuizResults(
            "OOP".to_owned(),
            7,
            10,
            ElapsedTime::default()
        )]
    );
}

#[test]
fn never_ends_on_its_own() {
    let (mut state, _output) = build();
    state.on_begin();
    state.on_tick(Duration::from_secs(3600));
    assert!(!state.is_over());
}

#[test]
fn celebration_stops_after_duration() {
    let (mut state, output) = build();
    state.on_begin();
    output.flush();

    state.celebrate();
    assert!(state.is_celebrating());
    assert_eq!(output.count_matching(is_celebration_begins), 1);

    state.on_tick(Duration::from_secs(29));
    assert!(state.is_celebrating());
    state.on_tick(Duration::from_secs(1));
    assert!(!state.is_celebrating());
    assert!(output.contains_message(&Message::CelebrationEnds));
}

#[test]
fn celebrating_again_restarts_the_countdown() {
    let (mut state, output) = build();
    state.celebrate();
    state.on_tick(Duration::from_secs(20));
    state.celebrate();
    state.on_tick(Duration::from_secs(20));
    assert!(state.is_celebrating());
    assert!(!output.contains_message(&Message::CelebrationEnds));

    state.on_tick(Duration::from_secs(10));
    assert!(!state.is_celebrating());
    assert_eq!(output.count_matching(|m| *m == Message::CelebrationEnds), 1);
}

#[test]
fn celebration_does_not_touch_results() {
    let (mut state, _output) = build();
    let before = *state.get_results();
    state.celebrate();
    state.on_tick(Duration::from_secs(60));
    assert_eq!(*state.get_results(), before);
}
