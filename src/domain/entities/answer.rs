use serde::{Deserialize, Serialize};

/// Terminal output of one retrieve-then-answer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub context: Vec<String>,
}
