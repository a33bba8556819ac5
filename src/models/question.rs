//! Quiz question model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub correct_answer: usize,
    pub explanation: String,
    pub category: String,
    pub difficulty: String,
}

impl Question {
    /// Whether `correct_answer` points at an existing option
    pub fn has_valid_key(&self) -> bool {
        self.correct_answer < self.options.len()
    }
}
