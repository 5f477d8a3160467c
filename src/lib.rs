//! Substring filter expressions and a small rule language that wires named
//! search terms to named actions.
//!
//! A [`FilterExpr`] is an ordered chain of literal substrings joined by
//! AND/OR connectors and matched with leftmost, backtracking search. The
//! [`parse`] module reads rule files such as
//!
//! ```text
//! // file casino spam away
//! "spam" : "body" contains ("casino", "lottery") : "discard" ;
//! ```
//!
//! looking up `"body"` and `"discard"` in a [`Registry`] of factories.

mod error;
mod matcher;
pub mod parse;
mod terms;
mod types;

pub use error::Error;
pub use terms::{ContainsTerm, ContainsTermFactory};
pub use types::{
    Action, ActionFactory, FilterError, FilterExpr, FnFactory, Pattern, Registry,
    RegistryBuilder, Rule, Term, TermFactory,
};
