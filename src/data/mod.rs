mod loader;
mod source;

pub use loader::{load_questions_from_json, parse_questions};
pub use source::{JsonFileSource, QuestionSource, StaticSource};
