use crate::output::{Message, QuizOutput};
use crate::quiz::RunOutcome;

#[cfg(test)]
mod tests;

pub fn announce<O: QuizOutput>(outcome: &RunOutcome, output: &O) {
    if outcome.completed {
        output.say(&Message::Finished);
    } else {
        output.say(&Message::TimeUp);
    }
    output.say(&Message::Score(outcome.final_count, outcome.total_questions));
}
