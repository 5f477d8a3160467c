use log::{debug, trace};

use super::error::SyntaxError;
use super::lexer::Tokenizer;
use super::token::Token;
use crate::{Registry, Rule};

/// Reads rules of the form `"name" : "term" ... : "action" ... ;` one at a
/// time, resolving term and action names through a [`Registry`].
///
/// Factories receive the reader while their rule is being read, so they can
/// consume their own argument syntax with [`args`](Self::args),
/// [`next_token`](Self::next_token) and [`peek_token`](Self::peek_token).
///
/// # Example
///
/// ```
/// use mailrule::parse::RuleReader;
/// use mailrule::{ContainsTermFactory, Registry, Action};
///
/// #[derive(Debug)]
/// struct Clear;
/// impl Action<String> for Clear {
///     fn apply(&self, target: &mut String) {
///         target.clear();
///     }
/// }
///
/// let registry = Registry::<String>::builder()
///     .term(ContainsTermFactory::new("body", |s: &String| s.as_str()))
///     .action_fn("clear", |_| Ok(Box::new(Clear)))
///     .build();
///
/// let mut reader = RuleReader::new(
///     r#""spam" : "body" contains ("casino") : "clear" ;"#,
///     &registry,
/// );
/// let rule = reader.next_rule().unwrap().unwrap();
/// assert_eq!(rule.name(), "spam");
/// assert!(reader.next_rule().unwrap().is_none());
///
/// let mut message = "online casino".to_owned();
/// assert!(rule.apply(&mut message));
/// assert!(message.is_empty());
/// ```
pub struct RuleReader<'a, T: ?Sized> {
    tokens: Tokenizer<'a>,
    peeked: Option<Token>,
    registry: &'a Registry<T>,
    failed: bool,
}

impl<'a, T: ?Sized> RuleReader<'a, T> {
    #[must_use]
    pub fn new(input: &'a str, registry: &'a Registry<T>) -> Self {
        Self {
            tokens: Tokenizer::new(input),
            peeked: None,
            registry,
            failed: false,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &'a Registry<T> {
        self.registry
    }

    /// Read the next rule, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] on the first grammar violation or unknown
    /// term/action name. The reader stops there: later calls return
    /// `Ok(None)`.
    pub fn next_rule(&mut self) -> Result<Option<Rule<T>>, SyntaxError> {
        if self.failed {
            return Ok(None);
        }
        let rule = self.read_rule();
        if let Err(err) = &rule {
            debug!("rule reader stopped: {err}");
            self.failed = true;
        }
        rule
    }

    fn read_rule(&mut self) -> Result<Option<Rule<T>>, SyntaxError> {
        let name = match self.next_token() {
            Token::Eof => {
                debug!("no more rules");
                return Ok(None);
            }
            Token::Str(name) => name,
            found => return Err(SyntaxError::ExpectedName { found }),
        };
        self.expect_delimiter()?;

        let registry = self.registry;

        let term_name = match self.next_token() {
            Token::Str(term_name) => term_name,
            found => return Err(SyntaxError::ExpectedTerm { found }),
        };
        let term_factory = registry
            .term_factory(&term_name)
            .ok_or_else(|| SyntaxError::UnknownTerm {
                name: term_name.clone(),
            })?;
        let term = term_factory.make(self)?;

        self.expect_delimiter()?;

        let action_name = match self.next_token() {
            Token::Str(action_name) => action_name,
            found => return Err(SyntaxError::ExpectedAction { found }),
        };
        let action_factory = registry
            .action_factory(&action_name)
            .ok_or_else(|| SyntaxError::UnknownAction {
                name: action_name.clone(),
            })?;
        let action = action_factory.make(self)?;

        match self.next_token() {
            Token::End => {}
            found => return Err(SyntaxError::ExpectedEnd { found }),
        }

        debug!("read rule \"{name}\": term \"{term_name}\", action \"{action_name}\"");
        Ok(Some(Rule::new(name, term, action)))
    }

    /// Read a parenthesised, comma-separated list of string arguments.
    ///
    /// `()` yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] on a missing parenthesis, a non-string
    /// argument, or a missing separator.
    pub fn args(&mut self) -> Result<Option<Vec<String>>, SyntaxError> {
        match self.next_token() {
            Token::Open => {}
            found => return Err(SyntaxError::ExpectedOpen { found }),
        }

        let mut args = match self.next_token() {
            Token::Close => return Ok(None),
            Token::Str(arg) => vec![arg],
            found => return Err(SyntaxError::ExpectedArgument { found }),
        };

        loop {
            match self.next_token() {
                Token::Close => return Ok(Some(args)),
                Token::Comma => args.push(self.expect_str()?),
                found => return Err(SyntaxError::ExpectedCommaOrClose { found }),
            }
        }
    }

    /// Read a string literal.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError::ExpectedArgument`] for any other token.
    pub fn expect_str(&mut self) -> Result<String, SyntaxError> {
        match self.next_token() {
            Token::Str(s) => Ok(s),
            found => Err(SyntaxError::ExpectedArgument { found }),
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        let token = self
            .peeked
            .take()
            .unwrap_or_else(|| self.tokens.next_token());
        trace!("token {token}");
        token
    }

    /// Look at the next token without consuming it.
    pub fn peek_token(&mut self) -> &Token {
        let tokens = &mut self.tokens;
        self.peeked.get_or_insert_with(|| tokens.next_token())
    }

    fn expect_delimiter(&mut self) -> Result<(), SyntaxError> {
        match self.next_token() {
            Token::Delimiter => Ok(()),
            found => Err(SyntaxError::ExpectedDelimiter { found }),
        }
    }
}

impl<T: ?Sized> Iterator for RuleReader<'_, T> {
    type Item = Result<Rule<T>, SyntaxError>;

    /// Yields rules until the input ends or the first error, which is
    /// yielded once.
    fn next(&mut self) -> Option<Self::Item> {
        self.next_rule().transpose()
    }
}
