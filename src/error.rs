//! Error types for quiz operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{OptionRef, QuestionId};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question data could not be read.
    #[error("failed to read questions from {}: {source}", .path.display())]
    DataSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The question data is empty, malformed or inconsistent.
    #[error("invalid question data: {0}")]
    InvalidData(String),

    /// A reference did not match any option.
    #[error("reference {reference} does not match any option")]
    UnresolvedReference { reference: OptionRef },

    /// Evaluation was requested for zero questions.
    #[error("cannot evaluate an empty question set")]
    EmptyQuestionSet,

    /// Questions were accessed before they were loaded.
    #[error("questions are not loaded")]
    NotLoaded,

    /// Questions were loaded a second time.
    #[error("questions are already loaded")]
    AlreadyLoaded,

    /// A selection named a question that does not exist.
    #[error("unknown question '{0}'")]
    UnknownQuestion(QuestionId),

    /// A multiple selection was recorded for a single-answer question.
    #[error("question '{0}' accepts a single answer")]
    MultipleNotAllowed(QuestionId),

    /// Submission was requested before reaching the last question.
    #[error("the quiz can only be submitted from the last question")]
    NotAtLastQuestion,

    /// The quiz was already submitted; restart first.
    #[error("the quiz has already been submitted")]
    AlreadySubmitted,

    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Results could not be serialized for export.
    #[error("failed to export results: {0}")]
    Export(#[from] serde_json::Error),
}
