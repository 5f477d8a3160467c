//! The built-in `contains` search term.
//!
//! ```text
//! "spam" : "body" contains ("casino", "lottery") contains ("unsubscribe") : "discard" ;
//! ```
//!
//! Each `contains (...)` group is a set of alternatives; successive groups
//! must be found in order. The example matches a body mentioning "casino"
//! or "lottery" and, somewhere after that, "unsubscribe".

use std::fmt;

use crate::parse::{RuleReader, SyntaxError, Token};
use crate::{FilterExpr, Term, TermFactory};

/// Builds [`ContainsTerm`]s that run a [`FilterExpr`] over the text that
/// `extract` pulls out of the target.
pub struct ContainsTermFactory<T: ?Sized> {
    name: String,
    extract: fn(&T) -> &str,
}

impl<T: ?Sized> ContainsTermFactory<T> {
    pub fn new(name: impl Into<String>, extract: fn(&T) -> &str) -> Self {
        Self {
            name: name.into(),
            extract,
        }
    }
}

impl<T: ?Sized> fmt::Debug for ContainsTermFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainsTermFactory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> TermFactory<T> for ContainsTermFactory<T> {
    fn name(&self) -> &str {
        &self.name
    }

    /// All arguments form a single group of alternatives.
    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Term<T>>, SyntaxError> {
        if args.is_empty() {
            return Err(SyntaxError::EmptyGroup);
        }
        let filter = args.iter().map(|text| (text.as_str(), false)).collect();
        Ok(Box::new(ContainsTerm::new(filter, self.extract)))
    }

    fn make(&self, reader: &mut RuleReader<'_, T>) -> Result<Box<dyn Term<T>>, SyntaxError> {
        let mut clauses: Vec<(String, bool)> = Vec::new();
        loop {
            match reader.next_token() {
                Token::Contains => {}
                found => return Err(SyntaxError::ExpectedContains { found }),
            }
            let group = reader.args()?.ok_or(SyntaxError::EmptyGroup)?;

            // The previous group must hold before this one is searched.
            if let Some(last) = clauses.last_mut() {
                last.1 = true;
            }
            clauses.extend(group.into_iter().map(|text| (text, false)));

            if reader.peek_token() != &Token::Contains {
                break;
            }
        }
        Ok(Box::new(ContainsTerm::new(
            clauses.into_iter().collect(),
            self.extract,
        )))
    }
}

/// A [`Term`] matching a [`FilterExpr`] against extracted text.
pub struct ContainsTerm<T: ?Sized> {
    filter: FilterExpr,
    extract: fn(&T) -> &str,
}

impl<T: ?Sized> ContainsTerm<T> {
    #[must_use]
    pub fn new(filter: FilterExpr, extract: fn(&T) -> &str) -> Self {
        Self { filter, extract }
    }

    #[must_use]
    pub fn filter(&self) -> &FilterExpr {
        &self.filter
    }
}

impl<T: ?Sized> fmt::Debug for ContainsTerm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContainsTerm").field(&self.filter).finish()
    }
}

impl<T: ?Sized> Term<T> for ContainsTerm<T> {
    fn matches(&self, target: &T) -> bool {
        self.filter.matches((self.extract)(target))
    }
}
