use anyhow::*;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub mod record;

pub use record::Record;


const FIELDS_PER_ROW: usize = 2;

#[derive(Debug)]
pub struct QuizDefinition {
    records: Vec<Record>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)
            .with_context(|| format!("Could not open questions file {}", source.display()))?;
        QuizDefinition::from_reader(file)
            .with_context(|| format!("Could not load questions from {}", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuizDefinition> {
        let mut records = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        for row in csv_reader.records() {
            let row = row?;
            if row.len() != FIELDS_PER_ROW {
                warn!(
                    line = ?row.position().map(|p| p.line()),
                    fields = row.len(),
                    "Skipping malformed row: {:?}",
                    row
                );
                continue;
            }
            let record: Record = row.deserialize(None)?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(anyhow!("No usable questions"));
        }

        info!("Loaded {} questions", records.len());
        Ok(QuizDefinition { records })
    }

    pub fn shuffle(&mut self) {
        let mut rng = rand::thread_rng();
        self.records.shuffle(&mut rng);
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}
