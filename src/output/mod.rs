use anyhow::*;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    StartPrompt,
    QuestionBegins(usize, String),
    Finished,
    TimeUp,
    Score(usize, usize),
}

/// Text boundary between the quiz and whoever is playing it.
pub trait QuizOutput {
    fn say(&self, message: &Message);

    /// Blocks until one line of input is available and returns it without its line ending.
    fn read_answer(&self) -> Result<String>;
}
