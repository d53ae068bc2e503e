use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct Settings {
    pub questions_path: PathBuf,
    pub time_limit: Duration,
    pub shuffle: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            questions_path: PathBuf::from("problems.csv"),
            time_limit: Duration::from_secs(30),
            shuffle: true,
        }
    }
}
