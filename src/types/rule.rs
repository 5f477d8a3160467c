use std::fmt;

/// A predicate over a filter target, produced by a
/// [`TermFactory`](super::TermFactory).
///
/// `T` is whatever the caller filters: a message, a header block, or plain
/// `str`. [`FilterExpr`](super::FilterExpr) is the built-in `Term<str>`.
pub trait Term<T: ?Sized>: fmt::Debug + Send + Sync {
    fn matches(&self, target: &T) -> bool;
}

/// An effect applied to a filter target when a rule's term matches, produced
/// by an [`ActionFactory`](super::ActionFactory).
pub trait Action<T: ?Sized>: fmt::Debug + Send + Sync {
    fn apply(&self, target: &mut T);
}

/// A named rule: a compiled term and the action to apply when it matches.
///
/// Rules are produced by [`RuleReader`](crate::parse::RuleReader) from
/// statements of the form `"name" : "term" ... : "action" ... ;`.
pub struct Rule<T: ?Sized> {
    name: String,
    term: Box<dyn Term<T>>,
    action: Box<dyn Action<T>>,
}

impl<T: ?Sized> Rule<T> {
    pub fn new(
        name: impl Into<String>,
        term: Box<dyn Term<T>>,
        action: Box<dyn Action<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            term,
            action,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn term(&self) -> &dyn Term<T> {
        self.term.as_ref()
    }

    #[must_use]
    pub fn action(&self) -> &dyn Action<T> {
        self.action.as_ref()
    }

    /// Whether this rule's term accepts `target`.
    #[must_use]
    pub fn matches(&self, target: &T) -> bool {
        self.term.matches(target)
    }

    /// Apply the action if the term matches. Returns whether it was applied.
    pub fn apply(&self, target: &mut T) -> bool {
        if self.term.matches(target) {
            self.action.apply(target);
            true
        } else {
            false
        }
    }
}

impl<T: ?Sized> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("term", &self.term)
            .field("action", &self.action)
            .finish()
    }
}
