//! Question definitions and the user's raw selections.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use crate::engine::resolve;
use crate::error::QuizError;
use crate::models::{Question, QuestionId, Selection};

/// Holds the loaded questions (immutable once loaded) and one selection slot
/// per question.
///
/// Selections are stored exactly as reported; resolving them against the
/// options happens once, at evaluation time.
#[derive(Debug, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
    selections: HashMap<QuestionId, Selection>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and take ownership of the question set.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if self.is_loaded() {
            return Err(QuizError::AlreadyLoaded);
        }

        validate(&questions)?;
        debug!(count = questions.len(), "questions loaded");
        self.questions = questions;
        self.selections.clear();
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| &question.id == id)
    }

    pub fn selection(&self, id: &QuestionId) -> Option<&Selection> {
        self.selections.get(id)
    }

    pub fn selections(&self) -> &HashMap<QuestionId, Selection> {
        &self.selections
    }

    /// Store the selection for a question, replacing any earlier one.
    ///
    /// An empty multiple selection returns the question to "no selection".
    pub fn record_selection(
        &mut self,
        id: &QuestionId,
        selection: Selection,
    ) -> Result<(), QuizError> {
        if !self.is_loaded() {
            return Err(QuizError::NotLoaded);
        }

        let question = self
            .question(id)
            .ok_or_else(|| QuizError::UnknownQuestion(id.clone()))?;

        if let Selection::Multiple(references) = &selection {
            if !question.allow_multiple {
                return Err(QuizError::MultipleNotAllowed(id.clone()));
            }
            if references.is_empty() {
                self.selections.remove(id);
                return Ok(());
            }
        }

        debug!(question = %id, ?selection, "selection recorded");
        self.selections.insert(id.clone(), selection);
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.selections.clear();
    }
}

fn validate(questions: &[Question]) -> Result<(), QuizError> {
    if questions.is_empty() {
        return Err(QuizError::InvalidData(
            "the question set is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for question in questions {
        let id = &question.id;

        if !seen.insert(id) {
            return Err(QuizError::InvalidData(format!(
                "question id '{}' is used more than once",
                id
            )));
        }

        if question.options.is_empty() {
            return Err(QuizError::InvalidData(format!(
                "question '{}' has no options",
                id
            )));
        }

        let correct = question
            .correct_answer
            .refs()
            .iter()
            .map(|reference| {
                resolve(reference, &question.options).map_err(|err| {
                    QuizError::InvalidData(format!("question '{}': correct answer {}", id, err))
                })
            })
            .collect::<Result<BTreeSet<usize>, QuizError>>()?;

        if correct.is_empty() {
            return Err(QuizError::InvalidData(format!(
                "question '{}' has no correct answer",
                id
            )));
        }

        if !question.allow_multiple && correct.len() > 1 {
            return Err(QuizError::InvalidData(format!(
                "question '{}' accepts a single answer but lists {} correct options",
                id,
                correct.len()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerKey, OptionRef};

    fn sample() -> Vec<Question> {
        vec![
            Question::single("q1", "2 + 2", &["3", "4"], 1),
            Question::multiple("q2", "Primes", &["2", "3", "4"], &[0, 1]),
        ]
    }

    fn loaded() -> QuestionStore {
        let mut store = QuestionStore::new();
        store.load(sample()).unwrap();
        store
    }

    fn assert_invalid(questions: Vec<Question>) {
        let mut store = QuestionStore::new();
        let result = store.load(questions);
        assert!(matches!(result, Err(QuizError::InvalidData(_))), "{:?}", result);
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_load_rejects_empty_sequence() {
        assert_invalid(Vec::new());
    }

    #[test]
    fn test_load_rejects_question_without_options() {
        assert_invalid(vec![Question::single("q1", "Nothing", &[], 0)]);
    }

    #[test]
    fn test_load_rejects_unresolvable_correct_answer() {
        assert_invalid(vec![Question::single("q1", "Pick", &["a", "b"], 2)]);
        assert_invalid(vec![Question::new(
            "q1",
            "Pick",
            &["a", "b"],
            AnswerKey::One("c".into()),
            false,
        )]);
    }

    #[test]
    fn test_load_rejects_several_answers_on_single_question() {
        assert_invalid(vec![Question::new(
            "q1",
            "Pick",
            &["a", "b", "c"],
            AnswerKey::Many(vec![OptionRef::Index(0), OptionRef::Index(2)]),
            false,
        )]);
    }

    #[test]
    fn test_load_accepts_repeated_single_answer() {
        let mut store = QuestionStore::new();
        let question = Question::new(
            "q1",
            "Pick",
            &["a", "b"],
            AnswerKey::Many(vec![OptionRef::Index(1), "b".into()]),
            false,
        );
        assert!(store.load(vec![question]).is_ok());
    }

    #[test]
    fn test_load_rejects_empty_answer_and_duplicate_ids() {
        assert_invalid(vec![Question::multiple("q1", "None", &["a"], &[])]);
        assert_invalid(vec![
            Question::single("q1", "One", &["a"], 0),
            Question::single("q1", "Two", &["a"], 0),
        ]);
    }

    #[test]
    fn test_load_twice_fails() {
        let mut store = loaded();
        assert!(matches!(store.load(sample()), Err(QuizError::AlreadyLoaded)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_record_selection_before_load() {
        let mut store = QuestionStore::new();
        let result = store.record_selection(&"q1".into(), Selection::Single(OptionRef::Index(0)));
        assert!(matches!(result, Err(QuizError::NotLoaded)));
    }

    #[test]
    fn test_record_selection_is_stored_raw() {
        let mut store = loaded();
        let q2 = QuestionId::from("q2");
        let raw = Selection::Multiple(vec![OptionRef::Index(1), "2".into(), OptionRef::Index(1)]);

        store.record_selection(&q2, raw.clone()).unwrap();
        assert_eq!(store.selection(&q2), Some(&raw));
    }

    #[test]
    fn test_multiple_rejected_for_single_question() {
        let mut store = loaded();
        let q1 = QuestionId::from("q1");
        let result = store.record_selection(&q1, Selection::Multiple(vec![OptionRef::Index(0)]));
        assert!(matches!(result, Err(QuizError::MultipleNotAllowed(_))));
        assert_eq!(store.selection(&q1), None);
    }

    #[test]
    fn test_unknown_question_rejected() {
        let mut store = loaded();
        let result = store.record_selection(&"q9".into(), Selection::Single(OptionRef::Index(0)));
        assert!(matches!(result, Err(QuizError::UnknownQuestion(_))));
    }

    #[test]
    fn test_empty_multiple_clears_selection() {
        let mut store = loaded();
        let q2 = QuestionId::from("q2");
        store
            .record_selection(&q2, Selection::Multiple(vec![OptionRef::Index(0)]))
            .unwrap();
        store.record_selection(&q2, Selection::Multiple(Vec::new())).unwrap();
        assert_eq!(store.selection(&q2), None);
    }

    #[test]
    fn test_clear_all() {
        let mut store = loaded();
        store
            .record_selection(&"q1".into(), Selection::Single(OptionRef::Index(1)))
            .unwrap();
        store
            .record_selection(&"q2".into(), Selection::Single(OptionRef::Index(0)))
            .unwrap();

        store.clear_all();
        assert!(store.selections().is_empty());
        assert_eq!(store.len(), 2);
    }
}
