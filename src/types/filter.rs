use std::fmt;

use super::error::FilterError;
use super::rule::Term;

/// One clause of a [`FilterExpr`]: a literal substring and the connector that
/// joins it to the clause after it.
///
/// A conjunctive clause must match *and then* the rest of the expression must
/// match after it. A disjunctive clause is an alternative to the next clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub text: String,
    pub conjunctive: bool,
}

impl Pattern {
    #[must_use]
    pub fn new(text: impl Into<String>, conjunctive: bool) -> Self {
        Self {
            text: text.into(),
            conjunctive,
        }
    }
}

/// An ordered chain of substring clauses joined by AND/OR connectors.
///
/// Clauses are tried first to last against a candidate string using leftmost,
/// unanchored, literal substring search; see [`FilterExpr::matches`].
///
/// # Example
///
/// ```
/// use mailrule::FilterExpr;
///
/// let mut filter = FilterExpr::new();
/// filter.push("foo", true);
/// filter.push("bar", true);
///
/// assert!(filter.matches("xxfooyybarzz"));
/// assert!(!filter.matches("xxbaryyfoozz"));
/// assert_eq!(filter.to_string(), r#""foo" and then "bar""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterExpr {
    patterns: Vec<Pattern>,
    #[cfg_attr(feature = "serde", serde(default))]
    debug: bool,
}

impl FilterExpr {
    /// Create an empty expression. An empty expression matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clause at the end.
    pub fn push(&mut self, text: impl Into<String>, conjunctive: bool) {
        self.patterns.push(Pattern::new(text, conjunctive));
    }

    /// Insert a clause so that it ends up at `index`. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(
        &mut self,
        index: usize,
        text: impl Into<String>,
        conjunctive: bool,
    ) -> Result<(), FilterError> {
        if index > self.patterns.len() {
            return Err(self.out_of_range(index));
        }
        self.patterns.insert(index, Pattern::new(text, conjunctive));
        Ok(())
    }

    /// Remove and return the clause at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if there is no such clause.
    pub fn remove(&mut self, index: usize) -> Result<Pattern, FilterError> {
        if index >= self.patterns.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.patterns.remove(index))
    }

    /// Replace the text of the clause at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if there is no such clause.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), FilterError> {
        self.get_mut(index)?.text = text.into();
        Ok(())
    }

    /// Replace the connector of the clause at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if there is no such clause.
    pub fn set_conjunctive(&mut self, index: usize, conjunctive: bool) -> Result<(), FilterError> {
        self.get_mut(index)?.conjunctive = conjunctive;
        Ok(())
    }

    /// The text of the clause at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if there is no such clause.
    pub fn text(&self, index: usize) -> Result<&str, FilterError> {
        self.get(index).map(|p| p.text.as_str())
    }

    /// Whether the clause at `index` is AND-connected to its successor.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::IndexOutOfRange`] if there is no such clause.
    pub fn is_conjunctive(&self, index: usize) -> Result<bool, FilterError> {
        self.get(index).map(|p| p.conjunctive)
    }

    /// Number of clauses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Sum of all clause text lengths in bytes, plus one separator per clause.
    #[must_use]
    pub fn total_text_length(&self) -> usize {
        self.patterns.iter().map(|p| p.text.len() + 1).sum()
    }

    /// An independent deep copy of this expression.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// When set, [`matches`](Self::matches) logs every step at `debug` level.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    /// Whether `candidate` satisfies this expression.
    ///
    /// Each clause is searched for at or after the current scan position. A
    /// clause that is found consumes its text and the expression continues
    /// after the end of its OR-group; a disjunctive clause that is not found,
    /// or whose continuation fails, hands over to the next clause from the
    /// same position. A conjunctive clause that fails ends the branch.
    ///
    /// An empty expression never matches. An empty clause text matches at
    /// every position.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        crate::matcher::matches(&self.patterns, candidate, self.debug)
    }

    fn get(&self, index: usize) -> Result<&Pattern, FilterError> {
        self.patterns
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Pattern, FilterError> {
        let len = self.patterns.len();
        self.patterns
            .get_mut(index)
            .ok_or(FilterError::IndexOutOfRange { index, len })
    }

    fn out_of_range(&self, index: usize) -> FilterError {
        FilterError::IndexOutOfRange {
            index,
            len: self.patterns.len(),
        }
    }
}

impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.patterns.iter().peekable();
        while let Some(pattern) = iter.next() {
            write!(f, "\"{}\"", pattern.text)?;
            if iter.peek().is_some() {
                if pattern.conjunctive {
                    write!(f, " and then ")?;
                } else {
                    write!(f, " or ")?;
                }
            }
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FilterExpr {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut filter = Self::new();
        filter.extend(iter);
        filter
    }
}

impl<S: Into<String>> Extend<(S, bool)> for FilterExpr {
    fn extend<I: IntoIterator<Item = (S, bool)>>(&mut self, iter: I) {
        self.patterns.extend(
            iter.into_iter()
                .map(|(text, conjunctive)| Pattern::new(text, conjunctive)),
        );
    }
}

impl<'a> IntoIterator for &'a FilterExpr {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

impl Term<str> for FilterExpr {
    fn matches(&self, target: &str) -> bool {
        FilterExpr::matches(self, target)
    }
}
