use super::*;
use std::sync::Arc;

use crate::output::mock::MockQuizOutput;
use crate::quiz::{AnswerTally, TallyHandle};

#[test]
fn announces_completion() {
    let (output, _answers) = MockQuizOutput::new();
    let outcome = RunOutcome {
        completed: true,
        final_count: 2,
        total_questions: 2,
    };
    announce(&outcome, &output);
    assert_eq!(output.flush(), [Message::Finished, Message::Score(2, 2)]);
}

#[test]
fn announces_timeout() {
    let (output, _answers) = MockQuizOutput::new();
    let outcome = RunOutcome {
        completed: false,
        final_count: 0,
        total_questions: 3,
    };
    announce(&outcome, &output);
    assert_eq!(output.flush(), [Message::TimeUp, Message::Score(0, 3)]);
}

#[test]
fn announcing_leaves_tally_untouched() {
    let (output, _answers) = MockQuizOutput::new();
    let tally: TallyHandle = Arc::new(AnswerTally::default());
    tally.increment();
    let outcome = RunOutcome {
        completed: false,
        final_count: tally.read(),
        total_questions: 3,
    };

    announce(&outcome, &output);
    announce(&outcome, &output);

    assert_eq!(tally.read(), 1);
    assert_eq!(tally.read(), outcome.final_count);
}
