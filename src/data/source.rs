use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::loader::parse_questions;
use crate::error::QuizError;
use crate::models::Question;

/// Where questions come from. Fetched exactly once per session.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Short description for logs and error screens.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<Question>, QuizError>;
}

/// Reads a JSON questions file without blocking the runtime.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Question>, QuizError> {
        debug!(path = %self.path.display(), "reading questions");
        let json_content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| QuizError::DataSourceUnavailable {
                path: self.path.clone(),
                source,
            })?;

        parse_questions(&json_content)
    }
}

/// Questions that are already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    questions: Vec<Question>,
}

impl StaticSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory questions", self.questions.len())
    }

    async fn fetch(&self) -> Result<Vec<Question>, QuizError> {
        Ok(self.questions.clone())
    }
}
