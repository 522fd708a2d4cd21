use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::QuizError;
use crate::models::{AnswerKey, Question, QuestionId};

/// Question ids may be written as text or as a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Text(String),
    Number(u64),
}

impl From<RecordId> for QuestionId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(text) => QuestionId::from(text),
            RecordId::Number(number) => QuestionId::from(number.to_string()),
        }
    }
}

/// One entry of the questions file, before ids and defaults are filled in.
#[derive(Deserialize)]
struct QuestionRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(alias = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(alias = "correct", alias = "correctAnswer")]
    correct_answer: AnswerKey,
    #[serde(default, alias = "allowMultiple")]
    allow_multiple: Option<bool>,
}

impl QuestionRecord {
    fn into_question(self, position: usize) -> Question {
        // Without an explicit flag, a list of several correct answers means
        // the question is answered with checkboxes.
        let allow_multiple = self
            .allow_multiple
            .unwrap_or_else(|| self.correct_answer.lists_several());

        Question {
            id: self
                .id
                .map(QuestionId::from)
                .unwrap_or_else(|| QuestionId::positional(position)),
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
            allow_multiple,
        }
    }
}

/// Parse the JSON question list. Structural problems are `InvalidData`;
/// semantic checks happen when the questions are loaded into a store.
pub fn parse_questions(json: &str) -> Result<Vec<Question>, QuizError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)
        .map_err(|err| QuizError::InvalidData(format!("malformed questions file: {}", err)))?;

    Ok(records
        .into_iter()
        .enumerate()
        .map(|(position, record)| record.into_question(position))
        .collect())
}

/// Blocking read of a questions file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, QuizError> {
    let path = path.as_ref();

    let json_content =
        fs::read_to_string(path).map_err(|source| QuizError::DataSourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    parse_questions(&json_content)
}
