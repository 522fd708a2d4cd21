use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::info;

use super::normalize::{labels, normalize_answer_key, normalize_selection};
use crate::error::QuizError;
use crate::models::{Question, QuestionId, Selection};

const NOT_ANSWERED: &str = "Not answered";

/// What the user picked, as option labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserAnswer {
    NotAnswered,
    Answered(Vec<String>),
}

impl UserAnswer {
    fn from_labels(labels: Vec<String>) -> Self {
        if labels.is_empty() {
            UserAnswer::NotAnswered
        } else {
            UserAnswer::Answered(labels)
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, UserAnswer::Answered(_))
    }
}

impl fmt::Display for UserAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAnswer::NotAnswered => f.write_str(NOT_ANSWERED),
            UserAnswer::Answered(labels) => f.write_str(&labels.join(", ")),
        }
    }
}

/// Verdict for a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub question_id: QuestionId,
    pub prompt: String,
    pub is_correct: bool,
    pub user_answers: UserAnswer,
    pub correct_answers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl Score {
    /// Percentage is rounded half up, like `Math.round`.
    pub fn new(correct: usize, total: usize) -> Result<Self, QuizError> {
        if total == 0 {
            return Err(QuizError::EmptyQuestionSet);
        }

        let percent = (correct * 200 + total) / (2 * total);
        Ok(Self {
            correct,
            total,
            percent: percent as u32,
        })
    }
}

/// Outcome of one submission. Never mutated; a new submission replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub results: Vec<QuestionResult>,
    pub score: Score,
}

/// Compare every question's selection with its correct answer.
///
/// Both sides are resolved against the question's own options before the
/// comparison, and a question is correct only on an exact set match.
pub fn evaluate(
    questions: &[Question],
    selections: &HashMap<QuestionId, Selection>,
) -> Result<Evaluation, QuizError> {
    if questions.is_empty() {
        return Err(QuizError::EmptyQuestionSet);
    }

    let results: Vec<QuestionResult> = questions
        .iter()
        .map(|question| {
            let expected = normalize_answer_key(question);
            let given = normalize_selection(question, selections.get(&question.id));

            QuestionResult {
                question_id: question.id.clone(),
                prompt: question.prompt.clone(),
                is_correct: given == expected,
                user_answers: UserAnswer::from_labels(labels(&given, &question.options)),
                correct_answers: labels(&expected, &question.options),
            }
        })
        .collect();

    let correct = results.iter().filter(|result| result.is_correct).count();
    let score = Score::new(correct, results.len())?;
    info!(
        correct = score.correct,
        total = score.total,
        percent = score.percent,
        "quiz evaluated"
    );

    Ok(Evaluation { results, score })
}
