use tracing::{debug, warn};

use crate::engine::Evaluation;
use crate::models::{AppState, Question, Selection};
use crate::session::Session;

/// Terminal front end state wrapped around a [`Session`].
///
/// The session owns every answer; the app only adds what the screen needs on
/// top of it: which screen is up, the option cursor and the results scroll.
pub struct App {
    pub state: AppState,
    session: Session,
    cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn with_session(session: Session) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            cursor: 0,
            result_scroll: 0,
        }
    }

    /// An app that can only show why loading failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: AppState::Failed(message.into()),
            session: Session::new(),
            cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question().ok()
    }

    pub fn current_selection(&self) -> Option<&Selection> {
        self.session.current_selection().ok().flatten()
    }

    pub fn current_question_number(&self) -> usize {
        self.session.current_index().map(|index| index + 1).unwrap_or(0)
    }

    pub fn total_questions(&self) -> usize {
        self.session.total()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.session.evaluation()
    }

    pub fn has_previous(&self) -> bool {
        self.session.navigator().has_previous()
    }

    pub fn has_next(&self) -> bool {
        self.session.navigator().has_next()
    }

    pub fn can_submit(&self) -> bool {
        self.session.navigator().can_submit()
    }

    fn option_count(&self) -> usize {
        self.current_question()
            .map(|question| question.options.len())
            .unwrap_or(0)
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn start_quiz(&mut self) {
        if self.session.is_loaded() {
            self.state = AppState::Quiz;
        }
    }

    /// Select the option under the cursor: a radio pick on single-answer
    /// questions, a checkbox toggle on the others.
    pub fn activate_option(&mut self) {
        let allow_multiple = match self.current_question() {
            Some(question) => question.allow_multiple,
            None => return,
        };

        let result = if allow_multiple {
            self.session.toggle_option(self.cursor)
        } else {
            self.session.choose_option(self.cursor)
        };

        if let Err(err) = result {
            warn!(%err, "selection ignored");
        }
    }

    pub fn next_question(&mut self) {
        if self.has_next() {
            self.session.next();
            self.cursor = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.has_previous() {
            self.session.previous();
            self.cursor = 0;
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(_) => {
                self.state = AppState::Result;
                self.result_scroll = 0;
            }
            Err(err) => debug!(%err, "submit ignored"),
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max = self
            .evaluation()
            .map(|evaluation| evaluation.results.len().saturating_sub(1))
            .unwrap_or(0);
        if self.result_scroll < max {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.state = AppState::Quiz;
        self.cursor = 0;
        self.result_scroll = 0;
    }
}
