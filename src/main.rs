use anyhow::*;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::Cli;
use crate::output::terminal::TerminalOutput;
use crate::output::{Message, QuizOutput};
use crate::quiz::definition::QuizDefinition;
use crate::quiz::{results, RaceCoordinator};

mod cli;
mod output;
mod quiz;

fn init_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    let settings = cli.to_settings();
    tracing::debug!("Starting with settings: {:?}", settings);

    let mut definition = QuizDefinition::open(&settings.questions_path)?;
    if settings.shuffle {
        definition.shuffle();
    }

    let output = TerminalOutput::default();
    output.say(&Message::StartPrompt);
    output
        .read_answer()
        .context("Could not confirm the start of the quiz")?;

    let mut coordinator = RaceCoordinator::new(settings.time_limit);
    let outcome = coordinator.race(definition.into_records(), output.clone())?;
    tracing::debug!("Race ended in phase {:?}", coordinator.get_phase());

    results::announce(&outcome, &output);
    Ok(())
}
