pub mod definition;
mod race;
pub mod results;
mod runner;
mod settings;
mod tally;

pub use self::race::{RaceCoordinator, RunOutcome};
pub use self::settings::Settings;
pub use self::tally::{AnswerTally, TallyHandle};
