//! One run of the quiz, from load to restart.

use tracing::debug;

use crate::engine::{evaluate, Evaluation, Navigator, Position};
use crate::error::QuizError;
use crate::models::{OptionRef, Question, QuestionId, Selection};
use crate::store::QuestionStore;

/// All mutable quiz state, owned by whoever drives the quiz.
#[derive(Debug)]
pub struct Session {
    store: QuestionStore,
    navigator: Navigator,
    evaluation: Option<Evaluation>,
}

impl Session {
    /// An empty session; call [`Session::load`] before anything else.
    pub fn new() -> Self {
        Self {
            store: QuestionStore::new(),
            navigator: Navigator::new(0),
            evaluation: None,
        }
    }

    /// Build a session that is already loaded with `questions`.
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, QuizError> {
        let mut session = Self::new();
        session.load(questions)?;
        Ok(session)
    }

    pub fn load(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        self.store.load(questions)?;
        self.navigator = Navigator::new(self.store.len());
        self.evaluation = None;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn questions(&self) -> &[Question] {
        self.store.questions()
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    /// Zero-based index of the question being shown.
    pub fn current_index(&self) -> Result<usize, QuizError> {
        self.ensure_loaded()?;
        self.navigator.index().ok_or(QuizError::AlreadySubmitted)
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        let index = self.current_index()?;
        self.store.questions().get(index).ok_or(QuizError::NotLoaded)
    }

    pub fn current_selection(&self) -> Result<Option<&Selection>, QuizError> {
        let question = self.current_question()?;
        Ok(self.store.selection(&question.id))
    }

    /// Record a raw selection for the question being shown.
    pub fn select(&mut self, selection: Selection) -> Result<(), QuizError> {
        let id = self.current_question()?.id.clone();
        self.record(&id, selection)
    }

    /// Record a raw selection for any question by id.
    pub fn record(&mut self, id: &QuestionId, selection: Selection) -> Result<(), QuizError> {
        if self.navigator.position() == Position::Submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        self.store.record_selection(id, selection)
    }

    /// Pick option `index` on the current question, replacing the previous
    /// choice (radio behaviour).
    pub fn choose_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.select(Selection::Single(OptionRef::Index(index)))
    }

    /// Add or remove option `index` on the current question (checkbox
    /// behaviour). Only valid for questions that allow several answers.
    pub fn toggle_option(&mut self, index: usize) -> Result<(), QuizError> {
        let question = self.current_question()?;
        if !question.allow_multiple {
            return Err(QuizError::MultipleNotAllowed(question.id.clone()));
        }

        let mut references: Vec<OptionRef> = self
            .store
            .selection(&question.id)
            .map(|selection| selection.refs().to_vec())
            .unwrap_or_default();

        // Any reference naming this option, by index or by label, unchecks it.
        let before = references.len();
        references.retain(|reference| reference.position_in(&question.options) != Some(index));
        if references.len() == before {
            references.push(OptionRef::Index(index));
        }

        self.select(Selection::Multiple(references))
    }

    pub fn next(&mut self) {
        self.navigator.next();
    }

    pub fn previous(&mut self) {
        self.navigator.previous();
    }

    /// Evaluate every answer and close the quiz.
    ///
    /// Only allowed on the last question. The new evaluation replaces any
    /// previous one.
    pub fn submit(&mut self) -> Result<&Evaluation, QuizError> {
        self.ensure_loaded()?;
        if self.navigator.position() == Position::Submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if !self.navigator.can_submit() {
            return Err(QuizError::NotAtLastQuestion);
        }

        let evaluation = evaluate(self.store.questions(), self.store.selections())?;
        self.navigator.submit()?;
        debug!(percent = evaluation.score.percent, "quiz submitted");
        Ok(&*self.evaluation.insert(evaluation))
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Forget every selection and the last evaluation, back to question one.
    pub fn restart(&mut self) {
        self.store.clear_all();
        self.navigator.restart();
        self.evaluation = None;
        debug!("quiz restarted");
    }

    fn ensure_loaded(&self) -> Result<(), QuizError> {
        if self.store.is_loaded() {
            Ok(())
        } else {
            Err(QuizError::NotLoaded)
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
