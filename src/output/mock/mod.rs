use anyhow::*;
use parking_lot::{Mutex, RwLock};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

/// Records everything said and hands out answers pushed through the returned sender.
/// Reads block until an answer arrives, and fail once every sender is dropped.
#[derive(Clone)]
pub struct MockQuizOutput {
    text_output: Arc<RwLock<Vec<Message>>>,
    answers: Arc<Mutex<Receiver<String>>>,
}

impl MockQuizOutput {
    pub fn new() -> (Self, Sender<String>) {
        let (sender, receiver) = mpsc::channel();
        let output = Self {
            text_output: Arc::new(RwLock::new(Vec::new())),
            answers: Arc::new(Mutex::new(receiver)),
        };
        (output, sender)
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.text_output.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.text_output.read().iter().any(|m| m == message)
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) {
        self.text_output.write().push(message.clone());
    }

    fn read_answer(&self) -> Result<String> {
        self.answers
            .lock()
            .recv()
            .map_err(|_| anyhow!("No more answers"))
    }
}
