use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a question within one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id assigned to the question at `index` when the data omits one.
    pub fn positional(index: usize) -> Self {
        Self(format!("q{}", index + 1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Points at an option either by zero-based position or by its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionRef {
    Index(usize),
    Value(String),
}

impl OptionRef {
    /// Index of the option this reference names, if any.
    ///
    /// Indices must be in range; values must match an option exactly, and the
    /// first match wins when labels repeat.
    pub fn position_in(&self, options: &[String]) -> Option<usize> {
        match self {
            OptionRef::Index(index) => Some(*index).filter(|i| *i < options.len()),
            OptionRef::Value(value) => options.iter().position(|option| option == value),
        }
    }
}

impl fmt::Display for OptionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionRef::Index(index) => write!(f, "#{}", index),
            OptionRef::Value(value) => write!(f, "{:?}", value),
        }
    }
}

impl From<usize> for OptionRef {
    fn from(index: usize) -> Self {
        OptionRef::Index(index)
    }
}

impl From<&str> for OptionRef {
    fn from(value: &str) -> Self {
        OptionRef::Value(value.to_string())
    }
}

impl From<String> for OptionRef {
    fn from(value: String) -> Self {
        OptionRef::Value(value)
    }
}

/// The correct answer of a question as written in the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    One(OptionRef),
    Many(Vec<OptionRef>),
}

impl AnswerKey {
    pub fn refs(&self) -> &[OptionRef] {
        match self {
            AnswerKey::One(reference) => std::slice::from_ref(reference),
            AnswerKey::Many(references) => references,
        }
    }

    /// True when the key is a list of more than one reference.
    pub fn lists_several(&self) -> bool {
        matches!(self, AnswerKey::Many(references) if references.len() > 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: AnswerKey,
    pub allow_multiple: bool,
}

impl Question {
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: &[&str],
        correct_answer: AnswerKey,
        allow_multiple: bool,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
            allow_multiple,
        }
    }

    /// A question with exactly one correct option, given by index.
    pub fn single(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: &[&str],
        correct: usize,
    ) -> Self {
        Self::new(id, prompt, options, AnswerKey::One(OptionRef::Index(correct)), false)
    }

    /// A question where the user may pick several options, given by index.
    pub fn multiple(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: &[&str],
        correct: &[usize],
    ) -> Self {
        let key = AnswerKey::Many(correct.iter().copied().map(OptionRef::Index).collect());
        Self::new(id, prompt, options, key, true)
    }
}
