use std::collections::BTreeSet;

use tracing::warn;

use crate::error::QuizError;
use crate::models::{OptionRef, Question, QuestionId, Selection};

/// Resolved option indices, deduplicated and ascending.
pub type CanonicalSet = BTreeSet<usize>;

/// Resolve one reference against an option list.
///
/// Indices must be in range; values must match an option exactly (first match
/// wins if the list contains duplicates).
pub fn resolve(reference: &OptionRef, options: &[String]) -> Result<usize, QuizError> {
    reference.position_in(options).ok_or_else(|| QuizError::UnresolvedReference {
        reference: reference.clone(),
    })
}

/// Resolve every reference, silently dropping the ones that match nothing.
///
/// Dropped references are a data problem, so they are logged instead of being
/// reported to the user.
pub fn normalize<'a, I>(question_id: &QuestionId, references: I, options: &[String]) -> CanonicalSet
where
    I: IntoIterator<Item = &'a OptionRef>,
{
    references
        .into_iter()
        .filter_map(|reference| match resolve(reference, options) {
            Ok(index) => Some(index),
            Err(err) => {
                warn!(question = %question_id, "{err}, dropping it");
                None
            }
        })
        .collect()
}

/// Canonical form of the user's current selection; absent means empty.
pub fn normalize_selection(question: &Question, selection: Option<&Selection>) -> CanonicalSet {
    match selection {
        Some(selection) => normalize(&question.id, selection.refs(), &question.options),
        None => CanonicalSet::new(),
    }
}

pub fn normalize_answer_key(question: &Question) -> CanonicalSet {
    normalize(&question.id, question.correct_answer.refs(), &question.options)
}

/// Option labels for a canonical set, in ascending index order.
pub fn labels(set: &CanonicalSet, options: &[String]) -> Vec<String> {
    set.iter()
        .filter_map(|index| options.get(*index).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnswerKey;

    fn options() -> Vec<String> {
        ["Rust", "Python", "C", "Go"]
            .iter()
            .map(|o| o.to_string())
            .collect()
    }

    fn id() -> QuestionId {
        QuestionId::from("q1")
    }

    #[test]
    fn test_resolve_index_and_value() {
        let options = options();
        assert_eq!(resolve(&OptionRef::Index(2), &options).unwrap(), 2);
        assert_eq!(resolve(&"Go".into(), &options).unwrap(), 3);
        assert!(matches!(
            resolve(&OptionRef::Index(4), &options),
            Err(QuizError::UnresolvedReference { .. })
        ));
        // Exact match only.
        assert!(resolve(&"rust".into(), &options).is_err());
        assert!(resolve(&" Rust".into(), &options).is_err());
    }

    #[test]
    fn test_normalize_sorts_and_deduplicates() {
        let refs = vec![
            OptionRef::Index(2),
            OptionRef::Index(0),
            OptionRef::Index(2),
            "Rust".into(),
        ];
        let set = normalize(&id(), &refs, &options());
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_normalize_drops_unresolved_references() {
        let refs = vec![OptionRef::Index(9), "Perl".into(), OptionRef::Index(1)];
        let set = normalize(&id(), &refs, &options());
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_cross_representation_equality() {
        let question = Question::new(
            "q1",
            "Compiled?",
            &["Rust", "Python", "C", "Go"],
            AnswerKey::Many(vec!["Go".into(), "Rust".into(), "C".into()]),
            true,
        );
        let selection = Selection::Multiple(vec![
            OptionRef::Index(3),
            OptionRef::Index(0),
            OptionRef::Index(2),
        ]);

        assert_eq!(
            normalize_answer_key(&question),
            normalize_selection(&question, Some(&selection))
        );
    }

    #[test]
    fn test_absent_selection_is_empty() {
        let question = Question::single("q1", "Pick", &["a", "b"], 0);
        assert!(normalize_selection(&question, None).is_empty());
    }

    #[test]
    fn test_labels_follow_index_order() {
        let set: CanonicalSet = [3, 0].into_iter().collect();
        assert_eq!(labels(&set, &options()), vec!["Rust", "Go"]);
    }
}
