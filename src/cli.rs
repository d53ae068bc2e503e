use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

use crate::quiz::Settings;


#[derive(Debug, Parser)]
#[command(
    name = "timed-quiz",
    version,
    about = "Answer as many questions as you can before time runs out"
)]
pub struct Cli {
    /// CSV file with one question,answer pair per line
    #[arg(long, default_value_os_t = Settings::default().questions_path)]
    questions: PathBuf,

    /// Time limit for the whole quiz, in seconds
    #[arg(
        long,
        default_value_t = Settings::default().time_limit.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Shuffle the questions before the quiz begins
    #[arg(long, default_value_t = Settings::default().shuffle, action = ArgAction::Set)]
    shuffle: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    pub fn to_settings(&self) -> Settings {
        Settings {
            questions_path: self.questions.clone(),
            time_limit: Duration::from_secs(self.timeout),
            shuffle: self.shuffle,
        }
    }
}
