use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::rule::{Action, Term};
use crate::parse::{RuleReader, SyntaxError};

/// Builds [`Term`]s for a named search term of the rule language.
///
/// The reader looks the factory up by [`name`](Self::name) and hands itself
/// to [`make`](Self::make), so a factory may read whatever tokens its own
/// syntax needs before the next `:`.
pub trait TermFactory<T: ?Sized>: Send + Sync {
    fn name(&self) -> &str;

    /// Build a term from a plain argument list.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the arguments are not acceptable.
    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Term<T>>, SyntaxError>;

    /// Build a term by reading its arguments from the rule stream.
    ///
    /// The default consumes no tokens and calls
    /// [`make_from_args`](Self::make_from_args) with no arguments.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the factory's own syntax is violated.
    fn make(&self, _reader: &mut RuleReader<'_, T>) -> Result<Box<dyn Term<T>>, SyntaxError> {
        self.make_from_args(&[])
    }
}

/// Builds [`Action`]s for a named filter action. Mirrors [`TermFactory`].
pub trait ActionFactory<T: ?Sized>: Send + Sync {
    fn name(&self) -> &str;

    /// Build an action from a plain argument list.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the arguments are not acceptable.
    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Action<T>>, SyntaxError>;

    /// Build an action by reading its arguments from the rule stream.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] if the factory's own syntax is violated.
    fn make(&self, _reader: &mut RuleReader<'_, T>) -> Result<Box<dyn Action<T>>, SyntaxError> {
        self.make_from_args(&[])
    }
}

/// A factory backed by a closure over the argument list.
///
/// Created by [`RegistryBuilder::term_fn`] and [`RegistryBuilder::action_fn`].
/// It consumes no tokens when read from a rule stream.
pub struct FnFactory<F> {
    name: String,
    make: F,
}

impl<F> FnFactory<F> {
    pub fn new(name: impl Into<String>, make: F) -> Self {
        Self {
            name: name.into(),
            make,
        }
    }
}

impl<F> fmt::Debug for FnFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnFactory").field("name", &self.name).finish()
    }
}

impl<T, F> TermFactory<T> for FnFactory<F>
where
    T: ?Sized,
    F: Fn(&[String]) -> Result<Box<dyn Term<T>>, SyntaxError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Term<T>>, SyntaxError> {
        (self.make)(args)
    }
}

impl<T, F> ActionFactory<T> for FnFactory<F>
where
    T: ?Sized,
    F: Fn(&[String]) -> Result<Box<dyn Action<T>>, SyntaxError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn make_from_args(&self, args: &[String]) -> Result<Box<dyn Action<T>>, SyntaxError> {
        (self.make)(args)
    }
}

/// Name-keyed lookup tables of term and action factories.
///
/// Built once with [`RegistryBuilder`] and read-only afterwards; share it
/// behind `Arc` or a `static` if several readers need it.
pub struct Registry<T: ?Sized> {
    terms: HashMap<String, Box<dyn TermFactory<T>>>,
    actions: HashMap<String, Box<dyn ActionFactory<T>>>,
}

impl<T: ?Sized> Registry<T> {
    #[must_use]
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder::new()
    }

    /// Look up a term factory. Names are case-sensitive.
    #[must_use]
    pub fn term_factory(&self, name: &str) -> Option<&dyn TermFactory<T>> {
        self.terms.get(name).map(|factory| &**factory)
    }

    /// Look up an action factory. Names are case-sensitive.
    #[must_use]
    pub fn action_factory(&self, name: &str) -> Option<&dyn ActionFactory<T>> {
        self.actions.get(name).map(|factory| &**factory)
    }

    /// Registered term names, sorted.
    #[must_use]
    pub fn term_names(&self) -> Vec<&str> {
        sorted_keys(&self.terms)
    }

    /// Registered action names, sorted.
    #[must_use]
    pub fn action_names(&self) -> Vec<&str> {
        sorted_keys(&self.actions)
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("terms", &self.term_names())
            .field("actions", &self.action_names())
            .finish()
    }
}

/// Builder for a [`Registry`].
///
/// # Example
///
/// ```
/// use mailrule::{Action, Registry, Term};
///
/// #[derive(Debug)]
/// struct Always;
/// impl Term<str> for Always {
///     fn matches(&self, _: &str) -> bool {
///         true
///     }
/// }
///
/// #[derive(Debug)]
/// struct Ignore;
/// impl Action<str> for Ignore {
///     fn apply(&self, _: &mut str) {}
/// }
///
/// let registry = Registry::<str>::builder()
///     .term_fn("always", |_| Ok(Box::new(Always)))
///     .action_fn("ignore", |_| Ok(Box::new(Ignore)))
///     .build();
///
/// assert!(registry.term_factory("always").is_some());
/// assert!(registry.action_factory("Ignore").is_none());
/// ```
pub struct RegistryBuilder<T: ?Sized> {
    terms: HashMap<String, Box<dyn TermFactory<T>>>,
    actions: HashMap<String, Box<dyn ActionFactory<T>>>,
}

impl<T: ?Sized> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self {
            terms: HashMap::new(),
            actions: HashMap::new(),
        }
    }
}

impl<T: ?Sized> RegistryBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a term factory under its own name, replacing any previous one.
    #[must_use]
    pub fn term(mut self, factory: impl TermFactory<T> + 'static) -> Self {
        let name = factory.name().to_owned();
        if self.terms.insert(name.clone(), Box::new(factory)).is_some() {
            debug!("term factory \"{name}\" replaced");
        }
        self
    }

    /// Register an action factory under its own name, replacing any previous one.
    #[must_use]
    pub fn action(mut self, factory: impl ActionFactory<T> + 'static) -> Self {
        let name = factory.name().to_owned();
        if self.actions.insert(name.clone(), Box::new(factory)).is_some() {
            debug!("action factory \"{name}\" replaced");
        }
        self
    }

    /// Register a closure building terms from an argument list.
    #[must_use]
    pub fn term_fn<F>(self, name: &str, make: F) -> Self
    where
        F: Fn(&[String]) -> Result<Box<dyn Term<T>>, SyntaxError> + Send + Sync + 'static,
    {
        self.term(FnFactory::new(name, make))
    }

    /// Register a closure building actions from an argument list.
    #[must_use]
    pub fn action_fn<F>(self, name: &str, make: F) -> Self
    where
        F: Fn(&[String]) -> Result<Box<dyn Action<T>>, SyntaxError> + Send + Sync + 'static,
    {
        self.action(FnFactory::new(name, make))
    }

    #[must_use]
    pub fn build(self) -> Registry<T> {
        Registry {
            terms: self.terms,
            actions: self.actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Contains(String);

    impl Term<str> for Contains {
        fn matches(&self, target: &str) -> bool {
            target.contains(self.0.as_str())
        }
    }

    #[derive(Debug)]
    struct Noop;

    impl Action<str> for Noop {
        fn apply(&self, _: &mut str) {}
    }

    fn registry() -> Registry<str> {
        Registry::<str>::builder()
            .term_fn("has", |args| match args {
                [needle] => Ok(Box::new(Contains(needle.clone()))),
                _ => Err(SyntaxError::InvalidArguments {
                    factory: "has".into(),
                    message: format!("expected 1 argument, got {}", args.len()),
                }),
            })
            .action_fn("noop", |_| Ok(Box::new(Noop)))
            .build()
    }

    #[test]
    fn lookup_by_exact_name() {
        let reg = registry();
        assert_eq!(reg.term_factory("has").map(|f| f.name()), Some("has"));
        assert!(reg.term_factory("HAS").is_none());
        assert!(reg.term_factory("noop").is_none());
        assert!(reg.action_factory("noop").is_some());
    }

    #[test]
    fn make_from_args_builds_term() {
        let reg = registry();
        let factory = reg.term_factory("has").unwrap();
        let term = factory.make_from_args(&["spam".to_owned()]).unwrap();
        assert!(term.matches("buy spam now"));
        assert!(!term.matches("ham"));
    }

    #[test]
    fn make_from_args_rejects_bad_arity() {
        let reg = registry();
        let factory = reg.term_factory("has").unwrap();
        let err = factory.make_from_args(&[]).unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidArguments { .. }));
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let reg = Registry::<str>::builder()
            .term_fn("t", |_| Ok(Box::new(Contains("first".into()))))
            .term_fn("t", |_| Ok(Box::new(Contains("second".into()))))
            .build();
        let term = reg.term_factory("t").unwrap().make_from_args(&[]).unwrap();
        assert!(term.matches("second"));
        assert!(!term.matches("first"));
        assert_eq!(reg.term_names(), ["t"]);
    }

    #[test]
    fn names_are_sorted() {
        let reg = Registry::<str>::builder()
            .action_fn("b", |_| Ok(Box::new(Noop)))
            .action_fn("a", |_| Ok(Box::new(Noop)))
            .build();
        assert_eq!(reg.action_names(), ["a", "b"]);
        assert!(reg.term_names().is_empty());
        assert_eq!(format!("{reg:?}"), r#"Registry { terms: [], actions: ["a", "b"] }"#);
    }
}
