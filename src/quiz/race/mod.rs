use anyhow::{anyhow, Context, Result};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::output::QuizOutput;
use crate::quiz::definition::Record;
use crate::quiz::runner::QuizRunner;
use crate::quiz::{AnswerTally, TallyHandle};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RacePhase {
    Idle,
    Racing,
    Completed,
    TimedOut,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunOutcome {
    pub completed: bool,
    pub final_count: usize,
    pub total_questions: usize,
}

/// Runs one quiz against a time limit.
///
/// The quiz runs on its own thread while this one waits for whichever comes first:
/// the runner finishing or the time limit elapsing. Losing the race does not stop the
/// runner. It stays blocked on input until it finishes or the process exits, and
/// anything it does afterwards is ignored. When both happen at the same instant either
/// outcome may be reported.
pub struct RaceCoordinator {
    time_limit: Duration,
    tally: TallyHandle,
    current_phase: RacePhase,
}

impl RaceCoordinator {
    pub fn new(time_limit: Duration) -> Self {
        RaceCoordinator {
            time_limit,
            tally: Arc::new(AnswerTally::default()),
            current_phase: RacePhase::Idle,
        }
    }

    pub fn get_phase(&self) -> RacePhase {
        self.current_phase
    }

    #[cfg(test)]
    pub fn get_tally(&self) -> &TallyHandle {
        &self.tally
    }

    fn set_current_phase(&mut self, phase: RacePhase) {
        debug!("Entering race phase: {:?}", phase);
        self.current_phase = phase;
    }

    pub fn race<O>(&mut self, records: Vec<Record>, output: O) -> Result<RunOutcome>
    where
        O: QuizOutput + Send + 'static,
    {
        if self.current_phase != RacePhase::Idle {
            return Err(anyhow!("Cannot start a race that already began"));
        }
        if records.is_empty() {
            return Err(anyhow!("Cannot start a race without questions"));
        }

        let total_questions = records.len();
        let (completion_sender, completion_receiver) = mpsc::sync_channel(1);
        let runner = QuizRunner::new(records, self.tally.clone(), output);

        // The join handle is dropped right away, detaching the runner
        thread::Builder::new()
            .name("quiz-runner".to_owned())
            .spawn(move || runner.run(completion_sender))
            .context("Could not start quiz runner")?;
        // A limit too far out to fit in an Instant means there is no deadline at all
        let deadline = Instant::now().checked_add(self.time_limit);
        self.set_current_phase(RacePhase::Racing);

        let finished = match deadline {
            Some(deadline) => {
                let time_left = deadline.saturating_duration_since(Instant::now());
                completion_receiver.recv_timeout(time_left)
            }
            None => completion_receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected),
        };
        let completed = match finished {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Quiz runner stopped without finishing");
                if let Some(deadline) = deadline {
                    thread::sleep(deadline.saturating_duration_since(Instant::now()));
                }
                false
            }
        };

        let outcome = RunOutcome {
            completed,
            final_count: self.tally.read(),
            total_questions,
        };
        self.set_current_phase(if completed {
            RacePhase::Completed
        } else {
            RacePhase::TimedOut
        });

        info!(
            completed = outcome.completed,
            correct = outcome.final_count,
            total = outcome.total_questions,
            "Quiz is over"
        );
        Ok(outcome)
    }
}
