use anyhow::*;
use std::io::{self, BufRead, Write};
use tracing::warn;

use crate::output::{Message, QuizOutput};


#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            StartPrompt => "Please press Enter to start the quiz".into(),
            QuestionBegins(ordinal, question) => {
                format!("Question {}: what is {}?", ordinal, question)
            }
            Finished => "Finished within the time limit!".into(),
            TimeUp => "Time limit expired!".into(),
            Score(correct, total) => format!(
                "You got {} correct answers out of {} questions!",
                correct, total
            ),
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let written =
            writeln!(handle, "{}", self.interpret_message(message)).and_then(|_| handle.flush());
        if let Err(e) = written {
            warn!("Could not write to terminal: {}", e);
        }
    }

    fn read_answer(&self) -> Result<String> {
        let stdin = io::stdin();
        let mut line = String::new();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .context("Could not read from terminal")?;
        if bytes_read == 0 {
            return Err(anyhow!("Reached end of input"));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }
}
