/// Screen currently shown by the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
    /// Loading failed; the message replaces the whole quiz.
    Failed(String),
}
