//! Answer evaluation core.
//!
//! Everything in here is pure: it works on question definitions and raw
//! selections and never touches the terminal.

mod evaluate;
mod navigation;
mod normalize;

pub use evaluate::{evaluate, Evaluation, QuestionResult, Score, UserAnswer};
pub use navigation::{Navigator, Position};
pub use normalize::{labels, normalize, normalize_answer_key, normalize_selection, resolve, CanonicalSet};
