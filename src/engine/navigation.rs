use tracing::debug;

use crate::error::QuizError;

/// Where the user is in the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Looking at the question with this zero-based index.
    Active(usize),
    /// Answers were submitted; only restart leaves this state.
    Submitted,
}

/// Question pointer with clamped stepping.
///
/// `next` never leaves the last question; submitting is a separate, explicit
/// transition that is only allowed from there.
#[derive(Debug, Clone)]
pub struct Navigator {
    total: usize,
    position: Position,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            position: Position::Active(0),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of the current question, or `None` once submitted.
    pub fn index(&self) -> Option<usize> {
        match self.position {
            Position::Active(index) => Some(index),
            Position::Submitted => None,
        }
    }

    fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        matches!(self.position, Position::Active(index) if index > 0)
    }

    pub fn has_next(&self) -> bool {
        matches!(self.position, Position::Active(index) if index < self.last_index())
    }

    pub fn can_submit(&self) -> bool {
        self.total > 0 && self.position == Position::Active(self.last_index())
    }

    pub fn next(&mut self) {
        if let Position::Active(index) = self.position {
            self.position = Position::Active((index + 1).min(self.last_index()));
            debug!(from = index, to = ?self.position, "next");
        }
    }

    pub fn previous(&mut self) {
        if let Position::Active(index) = self.position {
            self.position = Position::Active(index.saturating_sub(1));
            debug!(from = index, to = ?self.position, "previous");
        }
    }

    pub fn submit(&mut self) -> Result<(), QuizError> {
        match self.position {
            Position::Submitted => Err(QuizError::AlreadySubmitted),
            _ if !self.can_submit() => Err(QuizError::NotAtLastQuestion),
            _ => {
                self.position = Position::Submitted;
                Ok(())
            }
        }
    }

    pub fn restart(&mut self) {
        self.position = Position::Active(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_clamps_at_last_question() {
        let mut nav = Navigator::new(3);
        nav.next();
        nav.next();
        assert_eq!(nav.position(), Position::Active(2));
        assert!(!nav.has_next());

        nav.next();
        assert_eq!(nav.position(), Position::Active(2));
    }

    #[test]
    fn test_previous_clamps_at_first_question() {
        let mut nav = Navigator::new(3);
        assert!(!nav.has_previous());
        nav.previous();
        assert_eq!(nav.position(), Position::Active(0));

        nav.next();
        assert!(nav.has_previous());
        nav.previous();
        assert_eq!(nav.index(), Some(0));
    }

    #[test]
    fn test_submit_only_from_last_question() {
        let mut nav = Navigator::new(2);
        assert!(!nav.can_submit());
        assert!(matches!(nav.submit(), Err(QuizError::NotAtLastQuestion)));

        nav.next();
        assert!(nav.can_submit());
        nav.submit().unwrap();
        assert_eq!(nav.position(), Position::Submitted);
        assert_eq!(nav.index(), None);
        assert!(matches!(nav.submit(), Err(QuizError::AlreadySubmitted)));
    }

    #[test]
    fn test_stepping_is_ignored_after_submit() {
        let mut nav = Navigator::new(1);
        nav.submit().unwrap();
        nav.next();
        nav.previous();
        assert_eq!(nav.position(), Position::Submitted);
        assert!(!nav.has_next());
        assert!(!nav.has_previous());
    }

    #[test]
    fn test_restart_is_unconditional_and_idempotent() {
        let mut nav = Navigator::new(4);
        nav.next();
        nav.next();
        nav.restart();
        assert_eq!(nav.position(), Position::Active(0));

        nav.next();
        nav.next();
        nav.next();
        nav.submit().unwrap();
        nav.restart();
        nav.restart();
        assert_eq!(nav.position(), Position::Active(0));
    }

    #[test]
    fn test_single_question_quiz() {
        let nav = Navigator::new(1);
        assert!(!nav.has_next());
        assert!(!nav.has_previous());
        assert!(nav.can_submit());
    }
}
