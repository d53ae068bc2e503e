use std::sync::mpsc::SyncSender;
use tracing::{debug, warn};

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Record;
use crate::quiz::TallyHandle;


/// Asks every question in order and blocks on each answer for as long as it takes.
/// Knows nothing about time limits.
pub struct QuizRunner<O: QuizOutput> {
    records: Vec<Record>,
    tally: TallyHandle,
    output: O,
}

impl<O: QuizOutput> QuizRunner<O> {
    pub fn new(records: Vec<Record>, tally: TallyHandle, output: O) -> Self {
        QuizRunner {
            records,
            tally,
            output,
        }
    }

    /// Sends on `completion` once every answer has been tallied.
    ///
    /// A failed read counts as an unanswered question and the quiz goes on, so running
    /// out of input still walks through every remaining prompt and completes.
    pub fn run(self, completion: SyncSender<()>) {
        for (index, record) in self.records.iter().enumerate() {
            let ordinal = index + 1;
            self.output
                .say(&Message::QuestionBegins(ordinal, record.question.clone()));

            let answer = match self.output.read_answer() {
                Ok(answer) => answer,
                Err(e) => {
                    warn!("No answer to question {}: {:#}", ordinal, e);
                    continue;
                }
            };

            if record.is_answer_correct(&answer) {
                self.tally.increment();
                debug!("Question {} answered correctly", ordinal);
            } else {
                debug!("Question {} answered incorrectly", ordinal);
            }
        }

        // Nobody is listening anymore if the race was lost
        completion.send(()).ok();
    }
}
