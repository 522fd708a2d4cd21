//! # multiquiz
//!
//! A terminal quiz with single- and multiple-answer questions.
//!
//! Answers may be given by option index or by option text; both are resolved
//! to option indices before they are compared, so a question whose correct
//! answer is written as `["Rust", "C"]` accepts a selection of `[2, 0]`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use multiquiz::{JsonFileSource, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let mut quiz = Quiz::load(&JsonFileSource::new("questions.json")).await;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The evaluation core can also be used without a terminal:
//!
//! ```rust
//! use multiquiz::{Question, Session};
//!
//! let mut session = Session::with_questions(vec![
//!     Question::single("q1", "2 + 2 = ?", &["3", "4"], 1),
//! ])
//! .unwrap();
//! session.choose_option(1).unwrap();
//! assert_eq!(session.submit().unwrap().score.percent, 100);
//! ```

mod app;
mod data;
pub mod engine;
mod error;
mod models;
pub mod session;
pub mod store;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::{error, info};

pub use app::App;
pub use data::{load_questions_from_json, parse_questions, JsonFileSource, QuestionSource, StaticSource};
pub use engine::{Evaluation, QuestionResult, Score, UserAnswer};
pub use error::QuizError;
pub use models::{AnswerKey, AppState, OptionRef, Question, QuestionId, Selection};
pub use session::Session;
pub use store::QuestionStore;

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let session = Session::with_questions(questions)?;
        Ok(Self {
            app: App::with_session(session),
        })
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use multiquiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions)
    }

    /// Fetch questions from `source` and settle into either a ready quiz or
    /// a quiz that only shows the load error.
    ///
    /// There is no retry: a failed load is final for this quiz.
    pub async fn load<S: QuestionSource + ?Sized>(source: &S) -> Self {
        match source.fetch().await.and_then(Self::new) {
            Ok(quiz) => {
                info!(
                    source = %source.describe(),
                    count = quiz.app.total_questions(),
                    "quiz ready"
                );
                quiz
            }
            Err(err) => {
                error!(source = %source.describe(), %err, "failed to load questions");
                Self {
                    app: App::failed(load_failure_message(&err)),
                }
            }
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(&mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        finish_run(result, terminal::restore())
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Evaluation from the most recent submission, if any.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.app.evaluation()
    }
}

fn load_failure_message(err: &QuizError) -> String {
    match err {
        QuizError::DataSourceUnavailable { path, .. } => format!(
            "Could not load {}. Make sure the file exists and is readable.",
            path.display()
        ),
        QuizError::InvalidData(reason) => {
            format!("No questions found or the questions file is invalid: {}", reason)
        }
        other => format!("Could not start the quiz: {}", other),
    }
}

/// The terminal is always restored; an error from the quiz itself wins over
/// one from restoring.
fn finish_run(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    result?;
    restored?;
    Ok(())
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::Failed(_) => is_quit(key),
    }
}

fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        _ => is_quit(key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_option();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_question();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_question();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        _ => is_quit(key),
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        _ => is_quit(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question::single("q1", "First", &["a", "b"], 1),
            Question::multiple("q2", "Second", &["a", "b", "c"], &[0, 2]),
        ]
    }

    #[tokio::test]
    async fn test_load_failure_shows_error_screen() {
        let quiz = Quiz::load(&StaticSource::new(Vec::new())).await;
        match &quiz.app().state {
            AppState::Failed(message) => assert!(message.contains("No questions found")),
            other => panic!("unexpected state {:?}", other),
        }
        assert!(!quiz.app().session().is_loaded());
    }

    #[tokio::test]
    async fn test_missing_file_shows_error_screen() {
        let dir = tempfile::tempdir().unwrap();
        let quiz = Quiz::load(&JsonFileSource::new(dir.path().join("q.json"))).await;
        assert!(matches!(quiz.app().state, AppState::Failed(_)));
    }

    #[tokio::test]
    async fn test_load_success_starts_on_welcome() {
        let quiz = Quiz::load(&StaticSource::new(questions())).await;
        assert_eq!(quiz.app().state, AppState::Welcome);
        assert_eq!(quiz.app().total_questions(), 2);
    }

    #[test]
    fn test_keyboard_flow() {
        let mut quiz = Quiz::new(questions()).unwrap();
        let app = quiz.app_mut();

        let keys = [
            KeyCode::Enter,
            KeyCode::Char('j'),
            KeyCode::Char(' '),
            KeyCode::Char('l'),
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Char('s'),
        ];
        for key in keys {
            assert!(!handle_input(app, key));
        }

        assert_eq!(app.state, AppState::Result);
        let score = app.evaluation().unwrap().score;
        assert_eq!((score.correct, score.total, score.percent), (2, 2, 100));

        assert!(!handle_input(app, KeyCode::Char('r')));
        assert_eq!(app.state, AppState::Quiz);
        assert!(handle_input(app, KeyCode::Char('q')));
    }

    #[test]
    fn test_finish_run_prefers_event_loop_error() {
        let restore_failure = || -> io::Result<()> { Err(io::Error::other("restore failed")) };

        let result = finish_run(Err(QuizError::NotLoaded), restore_failure());
        assert!(matches!(result, Err(QuizError::NotLoaded)));

        let result = finish_run(Ok(()), restore_failure());
        assert!(matches!(result, Err(QuizError::Io(_))));

        assert!(finish_run(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_failed_state_only_quits() {
        let mut app = App::failed("nope");
        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert!(!handle_input(&mut app, KeyCode::Char('r')));
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }
}
