use super::OptionRef;

/// A raw user selection as reported by the front end.
///
/// Absence of a selection is modelled by the question having no entry in the
/// store, not by a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(OptionRef),
    Multiple(Vec<OptionRef>),
}

impl Selection {
    pub fn refs(&self) -> &[OptionRef] {
        match self {
            Selection::Single(reference) => std::slice::from_ref(reference),
            Selection::Multiple(references) => references,
        }
    }

    /// Whether any reference in this selection resolves to the option at
    /// `index`. Resolution matches the evaluator, so repeated labels only
    /// mark their first occurrence.
    pub fn includes(&self, index: usize, options: &[String]) -> bool {
        self.refs()
            .iter()
            .any(|reference| reference.position_in(options) == Some(index))
    }
}
