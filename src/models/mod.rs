mod question;
mod selection;
mod state;

pub use question::{AnswerKey, OptionRef, Question, QuestionId};
pub use selection::Selection;
pub use state::AppState;
