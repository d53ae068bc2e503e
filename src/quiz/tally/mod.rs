use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Count of correct answers, shared between the quiz runner and whoever is waiting on it.
#[derive(Debug, Default)]
pub struct AnswerTally {
    count: Mutex<usize>,
}

impl AnswerTally {
    pub fn increment(&self) {
        *self.count.lock() += 1;
    }

    pub fn read(&self) -> usize {
        *self.count.lock()
    }
}

pub type TallyHandle = Arc<AnswerTally>;
