use serde::Deserialize;

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    /// Only the guess is normalized, the expected answer is compared as loaded.
    pub fn is_answer_correct(&self, answer: &str) -> bool {
        normalize(answer) == self.answer
    }
}
